use std::path::Path;

use image::{Rgb, RgbImage};

use crate::cells::{CellKind, Position};
use crate::errors::*;
use crate::grid::Grid;
use crate::units::CellPixels;

pub const DEFAULT_CELL_PIXELS: CellPixels = CellPixels(50);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }
}

pub const BACKGROUND: Colour = Colour::rgb(41, 41, 41);
pub const WALL: Colour = Colour::rgb(77, 77, 77);
pub const PATH: Colour = Colour::rgb(230, 230, 230);
pub const PLAYER: Colour = Colour::rgb(66, 135, 245);
pub const TARGET: Colour = Colour::rgb(245, 66, 66);
pub const SOLUTION: Colour = Colour::rgb(66, 245, 173);

pub fn cell_colour(kind: CellKind) -> Colour {
    match kind {
        CellKind::Wall => WALL,
        CellKind::Path => PATH,
        CellKind::Player => PLAYER,
        CellKind::Target => TARGET,
    }
}

/// An axis aligned filled square or rectangle in pixel space, origin top left.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct FilledRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub colour: Colour,
}

#[derive(Debug, Clone)]
pub struct RenderOptions<'path> {
    cell_side_pixels_length: CellPixels,
    show_path: bool,
    output_file: Option<&'path Path>,
}

#[derive(Debug, Clone)]
pub struct RenderOptionsBuilder<'path> {
    options: RenderOptions<'path>,
}

impl<'path> RenderOptionsBuilder<'path> {
    pub fn new() -> RenderOptionsBuilder<'path> {
        RenderOptionsBuilder {
            options: RenderOptions {
                cell_side_pixels_length: DEFAULT_CELL_PIXELS,
                show_path: true,
                output_file: None,
            },
        }
    }

    pub fn cell_side_pixels_length(mut self, cell_pixels: CellPixels) -> Self {
        self.options.cell_side_pixels_length = cell_pixels;
        self
    }

    /// Draw the last solution when one was found.
    pub fn show_path(mut self, show_path: bool) -> Self {
        self.options.show_path = show_path;
        self
    }

    pub fn output_file(mut self, output_file: Option<&'path Path>) -> Self {
        self.options.output_file = output_file;
        self
    }

    pub fn build(self) -> RenderOptions<'path> {
        self.options
    }
}

impl<'path> Default for RenderOptionsBuilder<'path> {
    fn default() -> Self {
        RenderOptionsBuilder::new()
    }
}

impl<'path> RenderOptions<'path> {
    pub fn cell_pixels(&self) -> CellPixels {
        self.cell_side_pixels_length
    }

    pub fn output_file(&self) -> Option<&'path Path> {
        self.output_file
    }
}

/// Pixel size of a whole rendered grid.
pub fn frame_size(grid: &Grid, cell_pixels: CellPixels) -> (u32, u32) {
    let CellPixels(side) = cell_pixels;
    (grid.width() as u32 * side, grid.height() as u32 * side)
}

/// Everything to draw for one frame, in painting order: the background first, then every
/// cell coloured by its kind, then the solution markers.
///
/// Cells are drawn one pixel short of their full size leaving a thin grid line. Solution markers
/// are centred squares half a cell wide, left off the player and target cells.
pub fn frame_rects(grid: &Grid, solution: &[Position], path_found: bool, options: &RenderOptions) -> Vec<FilledRect> {
    let CellPixels(side) = options.cell_side_pixels_length;
    let (frame_width, frame_height) = frame_size(grid, options.cell_side_pixels_length);
    let mut rects = Vec::with_capacity(grid.size() + solution.len() + 1);

    rects.push(FilledRect {
        x: 0,
        y: 0,
        width: frame_width,
        height: frame_height,
        colour: BACKGROUND,
    });

    let cell_length = side.saturating_sub(1).max(1);
    for (pos, kind) in grid.iter_cells() {
        rects.push(FilledRect {
            x: pos.x * side as i32,
            y: pos.y * side as i32,
            width: cell_length,
            height: cell_length,
            colour: cell_colour(kind),
        });
    }

    if path_found && options.show_path {
        let marker_length = (side / 2).max(1);
        let inset = (side.saturating_sub(marker_length) / 2) as i32;
        for pos in solution {
            match grid.cell_at(*pos) {
                Ok(CellKind::Player) | Ok(CellKind::Target) | Err(_) => continue,
                Ok(_) => {}
            }
            rects.push(FilledRect {
                x: pos.x * side as i32 + inset,
                y: pos.y * side as i32 + inset,
                width: marker_length,
                height: marker_length,
                colour: SOLUTION,
            });
        }
    }

    rects
}

/// Paint a frame into an in memory image.
pub fn render_image(grid: &Grid, solution: &[Position], path_found: bool, options: &RenderOptions) -> RgbImage {
    let (width, height) = frame_size(grid, options.cell_side_pixels_length);
    let mut img = RgbImage::new(width, height);

    for rect in frame_rects(grid, solution, path_found, options) {
        let pixel = Rgb([rect.colour.r, rect.colour.g, rect.colour.b]);
        let x_start = rect.x.max(0) as u32;
        let y_start = rect.y.max(0) as u32;
        let x_end = (rect.x.max(0) as u32 + rect.width).min(width);
        let y_end = (rect.y.max(0) as u32 + rect.height).min(height);
        for y in y_start..y_end {
            for x in x_start..x_end {
                img.put_pixel(x, y, pixel);
            }
        }
    }

    img
}

/// Render to the options' output file as a PNG, if one is set.
pub fn save_image(grid: &Grid, solution: &[Position], path_found: bool, options: &RenderOptions) -> Result<()> {
    if let Some(path) = options.output_file {
        render_image(grid, solution, path_found, options)
            .save(path)
            .chain_err(|| format!("Failed to write maze image to {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Height, Width};

    fn corridor() -> Grid {
        let mut g = Grid::new(Width(5), Height(5)).unwrap();
        for &(x, y) in &[(1, 2), (1, 3), (2, 3)] {
            g.set_cell_kind(Position::new(x, y), CellKind::Path).unwrap();
        }
        g.set_cell_kind(Position::new(1, 1), CellKind::Player).unwrap();
        g.set_cell_kind(Position::new(3, 3), CellKind::Target).unwrap();
        g
    }

    fn solution() -> Vec<Position> {
        vec![Position::new(1, 2), Position::new(1, 3), Position::new(2, 3), Position::new(3, 3)]
    }

    fn options() -> RenderOptions<'static> {
        RenderOptionsBuilder::new().cell_side_pixels_length(CellPixels(10)).build()
    }

    #[test]
    fn one_rect_per_cell_plus_background() {
        let g = corridor();
        let rects = frame_rects(&g, &[], false, &options());
        assert_eq!(rects.len(), 1 + 25);
        assert_eq!(rects[0], FilledRect { x: 0, y: 0, width: 50, height: 50, colour: BACKGROUND });
        let player = rects[1 + 5 + 1];
        assert_eq!(player, FilledRect { x: 10, y: 10, width: 9, height: 9, colour: PLAYER });
    }

    #[test]
    fn solution_markers_skip_player_and_target() {
        let g = corridor();
        let rects = frame_rects(&g, &solution(), true, &options());
        let markers = rects.iter().filter(|r| r.colour == SOLUTION).collect::<Vec<_>>();
        assert_eq!(markers.len(), 3);
        assert_eq!(*markers[0], FilledRect { x: 12, y: 22, width: 5, height: 5, colour: SOLUTION });
    }

    #[test]
    fn no_markers_without_a_found_path() {
        let g = corridor();
        assert!(frame_rects(&g, &solution(), false, &options()).iter().all(|r| r.colour != SOLUTION));

        let hidden = RenderOptionsBuilder::new().show_path(false).build();
        assert!(frame_rects(&g, &solution(), true, &hidden).iter().all(|r| r.colour != SOLUTION));
    }

    #[test]
    fn image_pixels() {
        let g = corridor();
        let img = render_image(&g, &solution(), true, &options());
        assert_eq!(img.dimensions(), (50, 50));
        // wall cell body, then the one pixel gap showing the background
        assert_eq!(*img.get_pixel(0, 0), Rgb([WALL.r, WALL.g, WALL.b]));
        assert_eq!(*img.get_pixel(9, 9), Rgb([BACKGROUND.r, BACKGROUND.g, BACKGROUND.b]));
        assert_eq!(*img.get_pixel(15, 15), Rgb([PLAYER.r, PLAYER.g, PLAYER.b]));
        assert_eq!(*img.get_pixel(35, 35), Rgb([TARGET.r, TARGET.g, TARGET.b]));
        // marker centre and the path colour around it
        assert_eq!(*img.get_pixel(15, 25), Rgb([SOLUTION.r, SOLUTION.g, SOLUTION.b]));
        assert_eq!(*img.get_pixel(11, 21), Rgb([PATH.r, PATH.g, PATH.b]));
    }

    #[test]
    fn degenerate_cell_sizes_still_render() {
        let g = corridor();
        for &side in &[0, 1] {
            let tiny = RenderOptionsBuilder::new().cell_side_pixels_length(CellPixels(side)).build();
            let rects = frame_rects(&g, &solution(), true, &tiny);
            let first_marker = rects.iter().find(|r| r.colour == SOLUTION).cloned();
            assert_eq!(first_marker,
                       Some(FilledRect { x: side as i32, y: 2 * side as i32, width: 1, height: 1, colour: SOLUTION }));
            assert_eq!(render_image(&g, &solution(), true, &tiny).dimensions(), (5 * side, 5 * side));
        }
    }

    #[test]
    fn save_without_output_file_is_a_no_op() {
        let g = corridor();
        assert!(save_image(&g, &[], false, &options()).is_ok());
    }
}
