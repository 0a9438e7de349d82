//! Grid geometry shared by the generation pipeline and the graph model.
//!
//! Vertices live on an 8×8 cell grid addressed `1..=8` on both axes. Two cells
//! are neighbours when they differ by at most one step on each axis, i.e. the
//! full 8-connected neighbourhood.

use std::fmt;

/// Number of cells along each grid axis.
pub const GRID_SIDE: u8 = 8;

/// Displacements defining the neighbourhood of a cell. Their negations
/// complete the 8-connected neighbourhood.
pub const NEIGHBOUR_OFFSETS: [(i8, i8); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// Largest number of vertices the grid can hold while keeping every pair of
/// positions non-adjacent: one vertex per 2×2 block.
pub const GRID_CAPACITY: usize = {
    let per_axis = (GRID_SIDE as usize).div_ceil(2);
    per_axis * per_axis
};

/// A cell on the grid.
///
/// # Examples
/// ```
/// use domgrid_core::GridPosition;
///
/// let origin = GridPosition::new(1, 1);
/// assert!(origin.is_adjacent(GridPosition::new(2, 2)));
/// assert!(!origin.is_adjacent(GridPosition::new(3, 1)));
/// assert_eq!(origin.distance(GridPosition::new(4, 5)), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    x: u8,
    y: u8,
}

impl GridPosition {
    /// Creates a position from its column and row.
    ///
    /// Positions off the grid can be represented so that foreign documents can
    /// be loaded and rejected by validation; see [`Self::is_on_grid`].
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    #[rustfmt::skip]
    pub const fn x(self) -> u8 { self.x }

    /// Returns the row.
    #[must_use]
    #[rustfmt::skip]
    pub const fn y(self) -> u8 { self.y }

    /// Returns `true` when both coordinates lie within `1..=8`.
    #[must_use]
    pub const fn is_on_grid(self) -> bool {
        self.x >= 1 && self.x <= GRID_SIDE && self.y >= 1 && self.y <= GRID_SIDE
    }

    /// Returns `true` when `other` is one of the eight cells surrounding this
    /// one. A cell is not adjacent to itself.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        let dx = i16::from(self.x) - i16::from(other.x);
        let dy = i16::from(self.y) - i16::from(other.y);
        NEIGHBOUR_OFFSETS.iter().any(|&(ox, oy)| {
            let (ox, oy) = (i16::from(ox), i16::from(oy));
            (dx == ox && dy == oy) || (dx == -ox && dy == -oy)
        })
    }

    /// Euclidean distance between the centres of two cells.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = i32::from(self.x) - i32::from(other.x);
        let dy = i32::from(self.y) - i32::from(other.y);
        f64::from(dx * dx + dy * dy).sqrt()
    }

    /// Every cell of the grid in column-major order: `(1,1), (1,2), …, (8,8)`.
    pub fn all_cells() -> impl Iterator<Item = Self> {
        (1..=GRID_SIDE).flat_map(|x| (1..=GRID_SIDE).map(move |y| Self::new(x, y)))
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
