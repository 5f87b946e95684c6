//! **maze_solver** generates perfect mazes, finds the shortest way through them with a breadth
//! first search and animates a player along it.

pub mod cells;
pub mod config;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod input;
pub mod pathing;
pub mod renderers;
pub mod session;
pub mod timing;
pub mod units;
#[cfg(feature = "sdl")]
pub mod sdl;
mod utils;

pub use crate::utils::VisitedCells;
