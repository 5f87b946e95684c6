use smallvec::SmallVec;
use std::convert::From;
use std::fmt;

/// What occupies one square of the maze grid.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CellKind {
    Wall,
    Path,
    Player,
    Target,
}

impl CellKind {
    #[inline]
    pub fn is_wall(self) -> bool {
        self == CellKind::Wall
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

pub type CoordinateSmallVec = SmallVec<[Position; 4]>;

impl Position {
    pub fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// The position one cell away in the given direction.
    /// No bounds checking, that is the grid's job.
    #[inline]
    pub fn offset(self, dir: CompassPrimary) -> Position {
        self.offset_by(dir, 1)
    }

    #[inline]
    pub fn offset_by(self, dir: CompassPrimary, steps: i32) -> Position {
        let (dx, dy) = dir.delta();
        Position::new(self.x + dx * steps, self.y + dy * steps)
    }

    /// Cell halfway between two positions, used as the passage cell between two rooms.
    #[inline]
    pub fn midpoint(self, other: Position) -> Position {
        Position::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }

    /// Manhattan distance
    pub fn distance_to(self, other: Position) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }
}

impl From<(i32, i32)> for Position {
    fn from(x_y_pair: (i32, i32)) -> Position {
        Position::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid directions, y grows downwards (south).
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

/// Direction expansion order for searching and generation: +x, -x, +y, -y.
/// Breadth first search tie breaks between equal length paths depend on this order.
pub const SEARCH_ORDER: [CompassPrimary; 4] = [CompassPrimary::East,
                                               CompassPrimary::West,
                                               CompassPrimary::South,
                                               CompassPrimary::North];

impl CompassPrimary {
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            CompassPrimary::North => (0, -1),
            CompassPrimary::South => (0, 1),
            CompassPrimary::East => (1, 0),
            CompassPrimary::West => (-1, 0),
        }
    }

    /// The direction for a unit cardinal step. Diagonal, zero or multi cell steps have none.
    pub fn from_delta(dx: i32, dy: i32) -> Option<CompassPrimary> {
        match (dx, dy) {
            (0, -1) => Some(CompassPrimary::North),
            (0, 1) => Some(CompassPrimary::South),
            (1, 0) => Some(CompassPrimary::East),
            (-1, 0) => Some(CompassPrimary::West),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        let p = Position::new(3, 3);
        assert_eq!(p.offset(CompassPrimary::North), Position::new(3, 2));
        assert_eq!(p.offset(CompassPrimary::South), Position::new(3, 4));
        assert_eq!(p.offset(CompassPrimary::East), Position::new(4, 3));
        assert_eq!(p.offset(CompassPrimary::West), Position::new(2, 3));
        assert_eq!(p.offset_by(CompassPrimary::West, 2), Position::new(1, 3));
    }

    #[test]
    fn offsets_may_leave_the_grid() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.offset(CompassPrimary::North), Position::new(0, -1));
    }

    #[test]
    fn midpoint_between_rooms() {
        let a = Position::new(1, 1);
        assert_eq!(a.midpoint(Position::new(3, 1)), Position::new(2, 1));
        assert_eq!(a.midpoint(Position::new(1, 3)), Position::new(1, 2));
    }

    #[test]
    fn delta_round_trip() {
        for dir in SEARCH_ORDER.iter() {
            let (dx, dy) = dir.delta();
            assert_eq!(CompassPrimary::from_delta(dx, dy), Some(*dir));
        }
    }

    #[test]
    fn non_cardinal_deltas_rejected() {
        assert_eq!(CompassPrimary::from_delta(0, 0), None);
        assert_eq!(CompassPrimary::from_delta(1, 1), None);
        assert_eq!(CompassPrimary::from_delta(-1, 1), None);
        assert_eq!(CompassPrimary::from_delta(2, 0), None);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Position::new(1, 1).distance_to(Position::new(3, 4)), 5);
        assert_eq!(Position::new(3, 4).distance_to(Position::new(1, 1)), 5);
    }
}
