//! The maze session: one grid, the player and target on it, the last solution found and any
//! auto-solve animation in progress.
//!
//! Every operation runs to completion synchronously. Pacing of the auto-solve animation is left
//! to whoever calls `auto_move_step`, the session never looks at a clock.

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::cells::{CellKind, CompassPrimary, Position};
use crate::errors::*;
use crate::generators::{self, MazeGenerator};
use crate::grid::Grid;
use crate::pathing;
use crate::units::{Height, Width};

/// An auto-solve animation in progress.
///
/// The path always starts with the player's position when the animation was prepared, so it is
/// never empty and `index` always points into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoMove {
    path: Vec<Position>,
    index: usize,
}

impl AutoMove {
    fn new(from: Position, solution: &[Position]) -> AutoMove {
        let mut path = Vec::with_capacity(solution.len() + 1);
        path.push(from);
        path.extend_from_slice(solution);
        AutoMove { path, index: 0 }
    }

    #[inline]
    fn is_finished(&self) -> bool {
        self.index + 1 >= self.path.len()
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug)]
pub struct Session<R: Rng = SmallRng> {
    grid: Grid,
    generator: MazeGenerator<R>,
    player: Position,
    target: Position,
    solution: Vec<Position>,
    path_found: bool,
    auto_move: Option<AutoMove>,
}

impl Session<SmallRng> {
    /// A session on a freshly generated maze, randomised from OS entropy.
    pub fn new(width: Width, height: Height) -> Result<Session<SmallRng>> {
        Session::with_generator(width, height, MazeGenerator::from_entropy())
    }

    /// A session whose sequence of mazes is reproducible from `seed`.
    pub fn seeded(width: Width, height: Height, seed: u64) -> Result<Session<SmallRng>> {
        Session::with_generator(width, height, MazeGenerator::seeded(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn with_generator(width: Width, height: Height, generator: MazeGenerator<R>) -> Result<Session<R>> {
        let grid = Grid::new(width, height)?;
        let mut session = Session::with_grid(grid, generator);
        session.generate_new_maze();
        Ok(session)
    }

    /// Use a ready made grid layout as is. The player and target are placed by `reset`, so
    /// (1, 1) and (width - 2, height - 2) become open cells.
    pub fn with_grid(grid: Grid, generator: MazeGenerator<R>) -> Session<R> {
        let player = generators::start_position(&grid);
        let target = generators::end_position(&grid);
        let mut session = Session {
            grid,
            generator,
            player,
            target,
            solution: vec![],
            path_found: false,
            auto_move: None,
        };
        session.reset();
        session
    }

    /// Put the player back at the start and the target at the end, forgetting any solution and
    /// abandoning any auto-solve animation.
    pub fn reset(&mut self) {
        self.clear_search();
        self.auto_move = None;

        self.grid.replace_kind(CellKind::Player, CellKind::Path);
        self.grid.replace_kind(CellKind::Target, CellKind::Path);

        self.player = generators::start_position(&self.grid);
        self.target = generators::end_position(&self.grid);
        self.grid.set_cell_kind(self.target, CellKind::Target)
            .expect("The maze end is always inside the grid.");
        self.grid.set_cell_kind(self.player, CellKind::Player)
            .expect("The maze start is always inside the grid.");
    }

    /// Carve a new maze over a blanked grid and reset onto it.
    pub fn generate_new_maze(&mut self) {
        let passages = self.generator.recursive_backtracker(&mut self.grid);
        debug!("New {}x{} maze with {} passages",
               self.grid.width(), self.grid.height(), passages.0);
        self.reset();
    }

    /// Try to move the player one cell. `dx` and `dy` must describe a single cardinal step.
    ///
    /// Returns true if the player moved. Moves into walls or off the grid, malformed steps and
    /// any move while an auto-solve animation is running change nothing and return false.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> bool {
        match cardinal_direction(dx, dy) {
            Ok(direction) => self.move_in_direction(direction),
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }

    pub fn move_in_direction(&mut self, direction: CompassPrimary) -> bool {
        if self.is_auto_moving() {
            return false;
        }

        let destination = self.player.offset(direction);
        if !self.grid.is_walkable(destination) {
            return false;
        }

        self.relocate_player(destination);
        true
    }

    /// Breadth first search from the player to the target.
    ///
    /// Any previous solution is discarded first. Returns `path_found`: on success the solution is
    /// the route after the player's cell up to and including the target, on failure it is empty.
    pub fn find_path_bfs(&mut self) -> bool {
        self.clear_search();

        if let Some(path) = pathing::shortest_path(&self.grid, self.player, self.target) {
            self.solution = path;
            self.path_found = true;
        } else {
            warn!("No path from {} to {}", self.player, self.target);
        }
        self.path_found
    }

    /// Solve from where the player stands and start animating the player along the solution.
    /// Returns whether an animation was started.
    pub fn prepare_auto_move(&mut self) -> bool {
        if self.find_path_bfs() {
            self.auto_move = Some(AutoMove::new(self.player, &self.solution));
            info!("Auto-solving in {} steps", self.solution.len());
        } else {
            self.auto_move = None;
        }
        self.is_auto_moving()
    }

    /// Advance the auto-solve animation by one cell.
    ///
    /// Returns true if the player moved. Once the player reaches the target, or the animation has
    /// nothing left to do, the animation stops.
    pub fn auto_move_step(&mut self) -> bool {
        let step = match self.auto_move {
            Some(ref mut animation) if !animation.is_finished() => {
                animation.index += 1;
                Some(animation.path[animation.index])
            }
            _ => None,
        };
        let next = match step {
            Some(next) => next,
            None => {
                self.auto_move = None;
                return false;
            }
        };

        self.relocate_player(next);
        if self.player == self.target {
            self.auto_move = None;
            info!("Auto-solve reached the target");
        }
        true
    }

    /// Stop any auto-solve animation, leaving the player where it is.
    pub fn cancel_auto_move(&mut self) {
        self.auto_move = None;
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn player(&self) -> Position {
        self.player
    }

    #[inline]
    pub fn target(&self) -> Position {
        self.target
    }

    /// The last solution found, which goes stale once the player moves by hand.
    #[inline]
    pub fn solution(&self) -> &[Position] {
        &self.solution
    }

    #[inline]
    pub fn path_found(&self) -> bool {
        self.path_found
    }

    #[inline]
    pub fn is_auto_moving(&self) -> bool {
        self.auto_move.is_some()
    }

    pub fn auto_move(&self) -> Option<&AutoMove> {
        self.auto_move.as_ref()
    }

    pub fn auto_move_index(&self) -> Option<usize> {
        self.auto_move.as_ref().map(AutoMove::index)
    }

    pub fn is_solved(&self) -> bool {
        self.player == self.target
    }

    fn clear_search(&mut self) {
        self.solution.clear();
        self.path_found = false;
    }

    /// Move the player marker, restoring the target marker if the player was standing on it.
    fn relocate_player(&mut self, destination: Position) {
        let vacated = if self.player == self.target {
            CellKind::Target
        } else {
            CellKind::Path
        };
        self.grid.set_cell_kind(self.player, vacated)
            .expect("The player is always inside the grid.");
        self.player = destination;
        self.grid.set_cell_kind(self.player, CellKind::Player)
            .expect("Player destinations are checked to be inside the grid.");
    }
}

/// The direction of a single cardinal step: exactly one of `dx`, `dy` is +1 or -1.
pub fn cardinal_direction(dx: i32, dy: i32) -> Result<CompassPrimary> {
    CompassPrimary::from_delta(dx, dy).ok_or_else(|| ErrorKind::InvalidMove(dx, dy).into())
}
