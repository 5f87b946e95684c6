use bit_set::BitSet;
use fnv::FnvHasher;
use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasherDefault, Hash}
};

use crate::cells::Position;
use crate::grid::Grid;

pub type FnvHashSet<T> = HashSet<T, BuildHasherDefault<FnvHasher>>;
pub type FnvHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FnvHasher>>;

/// Construct a hash set with the specified capacity. The hashing algorithm is much faster than the default
/// on short keys such as integers and small strings.
/// On large keys it is actually slower.
/// Note it is less robust against security attacks on key collisions.
pub fn fnv_hashset<T: Hash + Eq>(capacity: usize) -> FnvHashSet<T> {
    let fnv = BuildHasherDefault::<FnvHasher>::default();
    HashSet::<T, _>::with_capacity_and_hasher(capacity, fnv)
}

/// Construct a hash map with the specified capacity. The hashing algorithm is much faster than the default
/// on short keys such as integers and small strings.
/// On large keys it is actually slower.
/// Note it is less robust against security attacks on key collisions.
pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    let fnv = BuildHasherDefault::<FnvHasher>::default();
    HashMap::<K, V, _>::with_capacity_and_hasher(capacity, fnv)
}

/// Scratch record of which grid cells an algorithm run has seen.
///
/// Each run (maze carving, a breadth first search) builds its own, so one algorithm's
/// visitation can never leak into another's.
#[derive(Debug, Clone)]
pub struct VisitedCells {
    bits: BitSet,
    row_width: usize,
    rows: usize,
}

impl VisitedCells {
    pub fn for_grid(grid: &Grid) -> VisitedCells {
        VisitedCells {
            bits: BitSet::with_capacity(grid.size()),
            row_width: grid.width(),
            rows: grid.height(),
        }
    }

    /// Mark a position as visited. Returns true if it was not visited before.
    /// Positions outside the grid are never recorded.
    #[inline]
    pub fn visit(&mut self, pos: Position) -> bool {
        match self.bit_index(pos) {
            Some(index) => self.bits.insert(index),
            None => false,
        }
    }

    #[inline]
    pub fn is_visited(&self, pos: Position) -> bool {
        self.bit_index(pos).map_or(false, |index| self.bits.contains(index))
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline]
    fn bit_index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x as usize >= self.row_width || pos.y as usize >= self.rows {
            None
        } else {
            Some(pos.y as usize * self.row_width + pos.x as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Height, Width};

    #[test]
    fn visit_once() {
        let g = Grid::new(Width(5), Height(5)).unwrap();
        let mut visited = VisitedCells::for_grid(&g);
        let p = Position::new(1, 3);
        assert!(visited.is_empty());
        assert!(!visited.is_visited(p));
        assert!(visited.visit(p));
        assert!(!visited.visit(p));
        assert!(visited.is_visited(p));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn rows_do_not_alias() {
        let g = Grid::new(Width(5), Height(7)).unwrap();
        let mut visited = VisitedCells::for_grid(&g);
        visited.visit(Position::new(4, 0));
        assert!(!visited.is_visited(Position::new(0, 1)));
        assert!(!visited.visit(Position::new(5, 0)));
        assert!(!visited.visit(Position::new(-1, 2)));
    }

    #[test]
    fn rows_below_the_grid_are_not_recorded() {
        let g = Grid::new(Width(5), Height(7)).unwrap();
        let mut visited = VisitedCells::for_grid(&g);
        assert!(visited.visit(Position::new(4, 6)));
        assert!(!visited.visit(Position::new(0, 7)));
        assert!(!visited.visit(Position::new(2, 100)));
        assert!(!visited.is_visited(Position::new(0, 7)));
        assert_eq!(visited.len(), 1);
    }
}
