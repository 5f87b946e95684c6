use error_chain::bail;
use std::fmt;

use crate::cells::{CellKind, CompassPrimary, CoordinateSmallVec, Position, SEARCH_ORDER};
use crate::errors::*;
use crate::units::{Height, Width};

/// Smallest odd side length that fits a room lattice inside a wall border.
pub const MIN_SIDE_LENGTH: usize = 5;

/// Rectangular maze grid, cells stored in row major order.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: Width,
    height: Height,
    cells: Vec<CellKind>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: width: {:?}, height: {:?}, open cells: {}",
               self.width, self.height, self.size() - self.count_kind(CellKind::Wall))
    }
}

impl Grid {
    /// A grid full of walls.
    ///
    /// Both dimensions must be odd and at least 5 so that the odd coordinate room lattice
    /// and the outer wall border fit.
    pub fn new(width: Width, height: Height) -> Result<Grid> {
        let (Width(w), Height(h)) = (width, height);
        let valid_side = |n: usize| n >= MIN_SIDE_LENGTH && n % 2 == 1 && n <= i32::MAX as usize;
        if !valid_side(w) || !valid_side(h) {
            bail!(ErrorKind::InvalidDimensions(w, h));
        }

        Ok(Grid {
            width,
            height,
            cells: vec![CellKind::Wall; w * h],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width.0
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height.0
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Is the position within [0, width) x [0, height)
    #[inline]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width() && (pos.y as usize) < self.height()
    }

    /// Convert a grid position to a one dimensional index in the range 0..grid.size().
    /// Returns None if the position is invalid.
    #[inline]
    pub fn position_to_index(&self, pos: Position) -> Option<usize> {
        if self.is_valid_position(pos) {
            Some(pos.y as usize * self.width() + pos.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_position(&self, index: usize) -> Position {
        Position::new((index % self.width()) as i32, (index / self.width()) as i32)
    }

    pub fn cell_at(&self, pos: Position) -> Result<CellKind> {
        self.position_to_index(pos)
            .map(|index| self.cells[index])
            .ok_or_else(|| ErrorKind::OutOfBounds(pos).into())
    }

    pub fn set_cell_kind(&mut self, pos: Position, kind: CellKind) -> Result<()> {
        let index = self.position_to_index(pos).ok_or(ErrorKind::OutOfBounds(pos))?;
        self.cells[index] = kind;
        Ok(())
    }

    /// In bounds and not a wall.
    #[inline]
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.position_to_index(pos)
            .map_or(false, |index| !self.cells[index].is_wall())
    }

    /// Overwrite every cell.
    pub fn fill(&mut self, kind: CellKind) {
        for cell in self.cells.iter_mut() {
            *cell = kind;
        }
    }

    /// Replace all cells of one kind with another, returning how many changed.
    pub fn replace_kind(&mut self, from: CellKind, to: CellKind) -> usize {
        let mut replaced = 0;
        for cell in self.cells.iter_mut().filter(|cell| **cell == from) {
            *cell = to;
            replaced += 1;
        }
        replaced
    }

    pub fn count_kind(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }

    pub fn positions_of_kind(&self, kind: CellKind) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, cell)| *cell == kind)
            .map(|(index, _)| self.index_to_position(index))
            .collect()
    }

    pub fn neighbour_at_direction(&self, pos: Position, direction: CompassPrimary) -> Option<Position> {
        let neighbour = pos.offset(direction);
        if self.is_valid_position(neighbour) {
            Some(neighbour)
        } else {
            None
        }
    }

    /// Walkable cells one step away from `pos`, in `SEARCH_ORDER`.
    pub fn walkable_neighbours(&self, pos: Position) -> CoordinateSmallVec {
        SEARCH_ORDER.iter()
            .filter_map(|dir| self.neighbour_at_direction(pos, *dir))
            .filter(|neighbour| self.is_walkable(*neighbour))
            .collect()
    }

    /// All positions, row by row.
    pub fn iter(&self) -> CellIter {
        CellIter {
            row_width: self.width(),
            current_cell_number: 0,
            cells_count: self.size(),
        }
    }

    pub fn iter_cells<'a>(&'a self) -> impl Iterator<Item = (Position, CellKind)> + 'a {
        self.iter().zip(self.cells.iter().cloned())
    }

    pub fn iter_row(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.width())
    }
}

#[derive(Debug, Clone)]
pub struct CellIter {
    row_width: usize,
    current_cell_number: usize,
    cells_count: usize,
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let x = self.current_cell_number % self.row_width;
            let y = self.current_cell_number / self.row_width;
            self.current_cell_number += 1;
            Some(Position::new(x as i32, y as i32))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}
