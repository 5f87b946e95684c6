use std::env;

use error_chain::bail;
use log::info;
use maze_solver::{
    config::{Config, Mode},
    errors::*,
    grid_displays::PathDisplay,
    renderers,
    session::Session,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(ref e) = run() {
        eprintln!("error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = match Config::from_args(env::args()) {
        Ok(config) => config,
        // Help and usage errors print themselves and pick the exit code.
        Err(Error(ErrorKind::DocOptFailure(e), _)) => e.exit(),
        Err(e) => return Err(e),
    };

    let mut session = match config.seed {
        Some(seed) => Session::seeded(config.width, config.height, seed)?,
        None => Session::new(config.width, config.height)?,
    };
    info!("Generated a {}x{} maze", config.width.0, config.height.0);

    if config.solve && !session.find_path_bfs() {
        bail!(ErrorKind::NoPathFound(session.player(), session.target()));
    }

    match config.mode {
        Mode::Text => {
            let display = PathDisplay::new(session.solution());
            println!("{}", session.grid().render_text(Some(&display)));
        }
        Mode::Image(ref path) => {
            let render_options = renderers::RenderOptionsBuilder::new()
                .cell_side_pixels_length(config.cell_pixels)
                .show_path(config.solve)
                .output_file(Some(path.as_path()))
                .build();
            renderers::save_image(session.grid(), session.solution(), session.path_found(), &render_options)?;
            info!("Wrote {}", path.display());
        }
        Mode::Window => run_window(&mut session, &config)?,
    }

    Ok(())
}

#[cfg(feature = "sdl")]
fn run_window(session: &mut Session, config: &Config) -> Result<()> {
    use maze_solver::{sdl, timing::StepTimer};
    use std::time::Instant;

    let render_options = renderers::RenderOptionsBuilder::new()
        .cell_side_pixels_length(config.cell_pixels)
        .build();
    sdl::run_window(session, &render_options, StepTimer::new(config.step_interval, Instant::now()))
}

#[cfg(not(feature = "sdl"))]
fn run_window(_: &mut Session, _: &Config) -> Result<()> {
    bail!(ErrorKind::InvalidConfig(String::from(
        "the interactive window needs a build with `--features sdl`, try the `text` or `image` modes")))
}
