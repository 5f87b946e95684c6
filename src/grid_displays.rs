use std::fmt;

use itertools::Itertools;

use crate::cells::{CellKind, Position};
use crate::grid::Grid;
use crate::pathing::Distances;
use crate::utils::{self, FnvHashSet};

const WALL: char = '#';
const OPEN: char = ' ';
const PLAYER: char = 'P';
const TARGET: char = 'T';

/// Overlay for a textual grid rendering.
pub trait GridDisplay {
    /// Glyph to show in an open path cell instead of a blank.
    /// Walls, the player and the target are always drawn as themselves.
    fn render_cell_body(&self, _: Position) -> Option<char> {
        None
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<Position>,
}
impl PathDisplay {
    pub fn new(path: &[Position]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: Position) -> Option<char> {
        if self.on_path_coordinates.contains(&coord) {
            Some('.')
        } else {
            None
        }
    }
}

impl GridDisplay for Distances {
    /// Last base 36 digit of the distance, enough to follow the flood fill by eye.
    fn render_cell_body(&self, coord: Position) -> Option<char> {
        self.distance_from_start_to(coord)
            .and_then(|d| std::char::from_digit(d % 36, 36))
    }
}

fn cell_glyph(kind: CellKind) -> char {
    match kind {
        CellKind::Wall => WALL,
        CellKind::Path => OPEN,
        CellKind::Player => PLAYER,
        CellKind::Target => TARGET,
    }
}

impl Grid {
    /// One line of text per grid row, one glyph per cell.
    pub fn render_text(&self, overlay: Option<&dyn GridDisplay>) -> String {
        self.iter_row()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, kind)| {
                        let pos = Position::new(x as i32, y as i32);
                        match (*kind, overlay) {
                            (CellKind::Path, Some(displayer)) => {
                                displayer.render_cell_body(pos).unwrap_or(OPEN)
                            }
                            (other, _) => cell_glyph(other),
                        }
                    })
                    .collect::<String>()
            })
            .join("\n")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render_text(None))
    }
}
