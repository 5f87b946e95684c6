use std::path::PathBuf;
use std::time::Duration;

use docopt::Docopt;
use error_chain::bail;
use serde_derive::Deserialize;

use crate::errors::*;
use crate::units::{CellPixels, Height, Width};

pub const USAGE: &str = "Maze Solver

Usage:
    maze_driver -h | --help
    maze_driver [window] [--width=<w> --height=<h> --seed=<n> --cell-pixels=<n> --step-ms=<n>]
    maze_driver text [--solve] [--width=<w> --height=<h> --seed=<n>]
    maze_driver image --image-out=<path> [--solve] [--width=<w> --height=<h> --seed=<n> --cell-pixels=<n>]

Options:
    -h --help              Show this screen.
    --width=<w>            Maze width in cells, odd and at least 5 [default: 21].
    --height=<h>           Maze height in cells, odd and at least 5 [default: 21].
    --seed=<n>             Seed the maze generator to get a reproducible sequence of mazes.
    --cell-pixels=<n>      Pixel side length of one cell, 2 to 255 [default: 50].
    --step-ms=<n>          Milliseconds between auto-solve steps [default: 20].
    --solve                Find and show the shortest path from start to end.
    --image-out=<path>     Output file path for a PNG rendering of the maze.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_window: bool,
    cmd_text: bool,
    cmd_image: bool,
    flag_width: usize,
    flag_height: usize,
    flag_seed: Option<u64>,
    flag_cell_pixels: u32,
    flag_step_ms: u64,
    flag_solve: bool,
    flag_image_out: String,
}

#[derive(Eq, PartialEq, Clone, Debug)]
pub enum Mode {
    /// Interactive window, needs the `sdl` feature.
    Window,
    /// Print the maze to stdout.
    Text,
    /// Write the maze to a PNG file.
    Image(PathBuf),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mode: Mode,
    pub width: Width,
    pub height: Height,
    pub seed: Option<u64>,
    pub cell_pixels: CellPixels,
    pub step_interval: Duration,
    pub solve: bool,
}

impl Config {
    /// Parse a full argument list, the first item being the program name.
    pub fn from_args<I, S>(argv: I) -> Result<Config>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.argv(argv).deserialize())?;
        Config::from_maze_args(args)
    }

    fn from_maze_args(args: MazeArgs) -> Result<Config> {
        if args.flag_cell_pixels < 2 || args.flag_cell_pixels > 255 {
            bail!(ErrorKind::InvalidConfig(format!("cell pixels must be 2 to 255, not {}",
                                                   args.flag_cell_pixels)));
        }
        if args.flag_step_ms == 0 {
            bail!(ErrorKind::InvalidConfig(String::from("step interval must be at least 1ms")));
        }

        let mode = if args.cmd_text {
            Mode::Text
        } else if args.cmd_image {
            Mode::Image(PathBuf::from(args.flag_image_out))
        } else {
            debug_assert!(args.cmd_window || !(args.cmd_text || args.cmd_image));
            Mode::Window
        };

        Ok(Config {
            mode,
            width: Width(args.flag_width),
            height: Height(args.flag_height),
            seed: args.flag_seed,
            cell_pixels: CellPixels(args.flag_cell_pixels),
            step_interval: Duration::from_millis(args.flag_step_ms),
            solve: args.flag_solve,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config> {
        let argv = std::iter::once("maze_driver").chain(args.iter().cloned());
        Config::from_args(argv)
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.mode, Mode::Window);
        assert_eq!(config.width, Width(21));
        assert_eq!(config.height, Height(21));
        assert_eq!(config.seed, None);
        assert_eq!(config.cell_pixels, CellPixels(50));
        assert_eq!(config.step_interval, Duration::from_millis(20));
        assert!(!config.solve);
    }

    #[test]
    fn text_mode() {
        let config = parse(&["text", "--solve", "--width=11", "--height=7", "--seed=3"]).unwrap();
        assert_eq!(config.mode, Mode::Text);
        assert_eq!(config.width, Width(11));
        assert_eq!(config.height, Height(7));
        assert_eq!(config.seed, Some(3));
        assert!(config.solve);
    }

    #[test]
    fn image_mode() {
        let config = parse(&["image", "--image-out=maze.png", "--cell-pixels=8"]).unwrap();
        assert_eq!(config.mode, Mode::Image(PathBuf::from("maze.png")));
        assert_eq!(config.cell_pixels, CellPixels(8));
    }

    #[test]
    fn window_options() {
        let config = parse(&["window", "--step-ms=35"]).unwrap();
        assert_eq!(config.mode, Mode::Window);
        assert_eq!(config.step_interval, Duration::from_millis(35));
    }

    #[test]
    fn out_of_range_values_rejected() {
        match parse(&["--cell-pixels=1"]) {
            Err(Error(ErrorKind::InvalidConfig(_), _)) => {}
            other => panic!("expected invalid config, got {:?}", other),
        }
        match parse(&["--step-ms=0"]) {
            Err(Error(ErrorKind::InvalidConfig(_), _)) => {}
            other => panic!("expected invalid config, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_arguments() {
        match parse(&["--width=wide"]) {
            Err(Error(ErrorKind::DocOptFailure(_), _)) => {}
            other => panic!("expected a docopt failure, got {:?}", other),
        }
        assert!(parse(&["image"]).is_err());
        assert!(parse(&["text", "--step-ms=5"]).is_err());
    }
}
