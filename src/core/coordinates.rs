//! Board coordinates

use std::fmt;

use serde::Serialize;

/// Width and height of the standard board
pub const BOARD_SIDE: usize = 5;

/// Column/row position of a tile on the board
///
/// Serializes as a two element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "(usize, usize)")]
pub struct Coordinates {
    pub x: usize,
    pub y: usize,
}

impl Coordinates {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Convert a flat tile index into board coordinates
    ///
    /// The index wraps around the 25 tiles of the board, so auxiliary
    /// indices from repeated grids map onto the same tile.
    #[must_use]
    pub const fn from_aux(index: usize) -> Self {
        let index = index % (BOARD_SIDE * BOARD_SIDE);
        Self::new(index % BOARD_SIDE, index / BOARD_SIDE)
    }
}

impl From<Coordinates> for (usize, usize) {
    fn from(c: Coordinates) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_aux_maps_rows_and_columns() {
        assert_eq!(Coordinates::from_aux(0), Coordinates::new(0, 0));
        assert_eq!(Coordinates::from_aux(4), Coordinates::new(4, 0));
        assert_eq!(Coordinates::from_aux(7), Coordinates::new(2, 1));
        assert_eq!(Coordinates::from_aux(24), Coordinates::new(4, 4));
    }

    #[test]
    fn from_aux_wraps() {
        assert_eq!(Coordinates::from_aux(25), Coordinates::new(0, 0));
        assert_eq!(Coordinates::from_aux(32), Coordinates::from_aux(7));
    }

    #[test]
    fn serializes_as_pair() {
        let json = serde_json::to_string(&Coordinates::new(3, 1)).unwrap();
        assert_eq!(json, "[3,1]");
    }

    #[test]
    fn display() {
        assert_eq!(Coordinates::new(2, 0).to_string(), "(2, 0)");
    }
}
