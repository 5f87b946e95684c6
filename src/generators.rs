use log::debug;
use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::cells::{CellKind, CompassPrimary, CoordinateSmallVec, Position, SEARCH_ORDER};
use crate::grid::Grid;
use crate::units::{EdgesCount, NodesCount};
use crate::utils::{self, VisitedCells};

/// Where the player starts: the top left room.
#[inline]
pub fn start_position(_grid: &Grid) -> Position {
    Position::new(1, 1)
}

/// Where the target sits: the bottom right room.
#[inline]
pub fn end_position(grid: &Grid) -> Position {
    Position::new(grid.width() as i32 - 2, grid.height() as i32 - 2)
}

/// Rooms are the odd coordinate cells, every other cell starts out as a wall or becomes a
/// passage between two rooms.
#[inline]
pub fn is_room(pos: Position) -> bool {
    pos.x % 2 == 1 && pos.y % 2 == 1
}

/// Inside the outer wall border.
#[inline]
fn is_interior(grid: &Grid, pos: Position) -> bool {
    pos.x >= 1 && pos.y >= 1 && (pos.x as usize) < grid.width() - 1 && (pos.y as usize) < grid.height() - 1
}

/// Every room of the grid, row by row.
pub fn rooms(grid: &Grid) -> Vec<Position> {
    grid.iter()
        .filter(|pos| is_room(*pos) && is_interior(grid, *pos))
        .collect()
}

/// Carves perfect mazes into grids.
///
/// One random number stream per generator, it is never reseeded mid generation so a seeded
/// generator reproduces the same sequence of mazes.
#[derive(Debug, Clone)]
pub struct MazeGenerator<R: Rng = SmallRng> {
    rng: R,
}

impl MazeGenerator<SmallRng> {
    pub fn from_entropy() -> MazeGenerator<SmallRng> {
        MazeGenerator::new(SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> MazeGenerator<SmallRng> {
        MazeGenerator::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGenerator<R> {
    pub fn new(rng: R) -> MazeGenerator<R> {
        MazeGenerator { rng }
    }

    /// Apply the recursive backtracker maze generation algorithm to the grid.
    ///
    /// The grid is first blanked to walls. Starting from the top left room we carve into a random
    /// unvisited room two cells away, knocking out the wall cell between them, and keep going from
    /// there. When a room has no unvisited room left around it we backtrack along the stack of
    /// rooms until one does. Every room is visited exactly once, so the passages form a spanning
    /// tree over the rooms: fully connected with no loops.
    /// The stack is an explicit `Vec` rather than the call stack so large grids cannot overflow it.
    ///
    /// Returns the number of passages carved, which is always one less than the number of rooms.
    pub fn recursive_backtracker(&mut self, grid: &mut Grid) -> EdgesCount {
        grid.fill(CellKind::Wall);

        let start = start_position(grid);
        let end = end_position(grid);
        carve(grid, start);
        carve(grid, end);

        let mut visited = VisitedCells::for_grid(grid);
        let mut stack = vec![start];
        visited.visit(start);
        let mut passages = 0;

        while let Some(&current) = stack.last() {
            let neighbours = unvisited_rooms(grid, &visited, current);

            if let Some(&next) = neighbours.choose(&mut self.rng) {
                carve(grid, current.midpoint(next));
                carve(grid, next);
                visited.visit(next);
                stack.push(next);
                passages += 1;
            } else {
                stack.pop();
            }
        }

        debug!("Carved {} passages between {} rooms on a {}x{} grid",
               passages, visited.len(), grid.width(), grid.height());
        EdgesCount(passages)
    }
}

/// Rooms two steps away from `room` that are inside the wall border and not yet visited.
fn unvisited_rooms(grid: &Grid, visited: &VisitedCells, room: Position) -> CoordinateSmallVec {
    SEARCH_ORDER.iter()
        .map(|dir| room.offset_by(*dir, 2))
        .filter(|neighbour| is_interior(grid, *neighbour) && !visited.is_visited(*neighbour))
        .collect()
}

#[inline]
fn carve(grid: &mut Grid, pos: Position) {
    grid.set_cell_kind(pos, CellKind::Path)
        .expect("Carving only happens inside the wall border.");
}

/// The room lattice of a grid as a graph: one node per room, one edge per open passage cell
/// between two neighbouring rooms. Node weights are the room positions.
pub fn room_graph(grid: &Grid) -> UnGraph<Position, ()> {
    let rooms = rooms(grid);
    let mut graph = UnGraph::<Position, ()>::with_capacity(rooms.len(), rooms.len());
    let mut node_indices = utils::fnv_hashmap::<Position, NodeIndex>(rooms.len());

    for room in &rooms {
        node_indices.insert(*room, graph.add_node(*room));
    }

    // Only looking east and south finds each passage once.
    for room in &rooms {
        for dir in &[CompassPrimary::East, CompassPrimary::South] {
            let neighbour = room.offset_by(*dir, 2);
            let passage = room.offset(*dir);
            if let Some(&neighbour_index) = node_indices.get(&neighbour) {
                if grid.is_walkable(passage) {
                    graph.add_edge(node_indices[room], neighbour_index, ());
                }
            }
        }
    }

    graph
}

pub fn room_graph_size(grid: &Grid) -> (NodesCount, EdgesCount) {
    let graph = room_graph(grid);
    (NodesCount(graph.node_count()), EdgesCount(graph.edge_count()))
}

/// Do the carved passages form a spanning tree over the rooms?
/// Connected, acyclic and so exactly rooms - 1 passages.
pub fn is_perfect_maze(grid: &Grid) -> bool {
    let graph = room_graph(grid);
    graph.node_count() > 0 &&
    graph.edge_count() + 1 == graph.node_count() &&
    connected_components(&graph) == 1 &&
    !is_cyclic_undirected(&graph)
}
