use std::collections::VecDeque;

use log::debug;
use smallvec::SmallVec;

use crate::cells::Position;
use crate::grid::Grid;
use crate::utils::{self, FnvHashMap, VisitedCells};

/// Breadth first search for a shortest route from `start` to `goal` over walkable cells.
///
/// Neighbours are expanded in the fixed `SEARCH_ORDER` (+x, -x, +y, -y) so of several equally
/// short routes the same one is always chosen. A cell is marked visited as it is queued so it is
/// never queued twice, and the goal test happens as cells are dequeued.
///
/// The returned path runs from the cell after `start` up to and including `goal`, so
/// `start == goal` gives an empty path. `None` means the goal cannot be reached, or `start` is not
/// a walkable cell of the grid.
pub fn shortest_path(grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
    if !grid.is_walkable(start) {
        return None;
    }

    let mut visited = VisitedCells::for_grid(grid);
    let mut parents: FnvHashMap<Position, Position> = utils::fnv_hashmap(grid.size());
    let mut queue = VecDeque::new();

    visited.visit(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            let path = reconstruct_path(&parents, start, goal);
            debug!("Found a {} step path from {} to {} after visiting {} cells",
                   path.len(), start, goal, visited.len());
            return Some(path);
        }

        for next in grid.walkable_neighbours(current).iter() {
            if visited.visit(*next) {
                parents.insert(*next, current);
                queue.push_back(*next);
            }
        }
    }

    debug!("No path from {} to {} after visiting {} cells", start, goal, visited.len());
    None
}

/// Walk the parent links back from the goal then reverse, giving start -> goal order without
/// the start itself.
fn reconstruct_path(parents: &FnvHashMap<Position, Position>, start: Position, goal: Position) -> Vec<Position> {
    let mut path = vec![];
    let mut current = goal;
    while current != start {
        path.push(current);
        current = parents[&current];
    }
    path.reverse();
    path
}

/// Breadth first layer distances from a start cell to every cell reachable from it.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: Position,
    distances: FnvHashMap<Position, u32>,
    max_distance: u32,
}

impl Distances {
    /// None if the start is not a walkable cell.
    pub fn for_grid(grid: &Grid, start_coordinate: Position) -> Option<Distances> {
        if !grid.is_walkable(start_coordinate) {
            return None;
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(grid.size());
        distances.insert(start_coordinate, 0);

        // Unweighted steps, so the first time a cell is reached is the shortest distance to it
        // and the distances map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        let mut layer = 0;
        while !frontier.is_empty() {
            let mut new_frontier = vec![];
            layer += 1;

            for cell_coord in &frontier {
                for next in grid.walkable_neighbours(*cell_coord).iter() {
                    if !distances.contains_key(next) {
                        distances.insert(*next, layer);
                        new_frontier.push(*next);
                        max = layer;
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Position {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: Position) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    /// How many cells are reachable from the start, the start included.
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    pub fn furthest_points_on_grid(&self) -> SmallVec<[Position; 8]> {
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, distance)| *distance == self.max_distance)
            .map(|(coord, _)| *coord)
            .collect::<SmallVec<[Position; 8]>>();
        furthest.sort();
        furthest
    }
}
