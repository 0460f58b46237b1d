//! The compiled physical grid.
//!
//! Cells are stored flat in row-major order: the cell at physical
//! `(row, col)` lives at index `row * total_cols + col`. Every physical
//! position holds exactly one cell, so lookups never search.

use thiserror::Error;

use crate::{Person, SeatCoord};

/// Errors from grid access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A physical coordinate outside the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// A seat position in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    /// Logical coordinate (aisles not counted)
    pub logical: SeatCoord,
    /// Disabled seats keep their position but never receive an occupant
    pub enabled: bool,
    /// Current occupant, if any
    pub occupant: Option<Person>,
}

impl Seat {
    pub const fn new(logical: SeatCoord, enabled: bool) -> Self {
        Self {
            logical,
            enabled,
            occupant: None,
        }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Remove and return the occupant.
    pub fn clear(&mut self) -> Option<Person> {
        self.occupant.take()
    }
}

/// What occupies a physical position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "lowercase")
)]
pub enum CellKind {
    /// Walkway; never holds anyone
    Aisle,
    Seat(Seat),
}

/// One physical grid position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub physical_row: usize,
    pub physical_col: usize,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: CellKind,
}

impl GridCell {
    pub const fn aisle(physical_row: usize, physical_col: usize) -> Self {
        Self {
            physical_row,
            physical_col,
            kind: CellKind::Aisle,
        }
    }

    pub const fn seat(physical_row: usize, physical_col: usize, seat: Seat) -> Self {
        Self {
            physical_row,
            physical_col,
            kind: CellKind::Seat(seat),
        }
    }

    #[inline]
    pub fn is_aisle(&self) -> bool {
        matches!(self.kind, CellKind::Aisle)
    }

    pub fn as_seat(&self) -> Option<&Seat> {
        match &self.kind {
            CellKind::Seat(seat) => Some(seat),
            CellKind::Aisle => None,
        }
    }

    pub fn as_seat_mut(&mut self) -> Option<&mut Seat> {
        match &mut self.kind {
            CellKind::Seat(seat) => Some(seat),
            CellKind::Aisle => None,
        }
    }

    /// The enabled seat at this position, if there is one.
    pub fn enabled_seat(&self) -> Option<&Seat> {
        self.as_seat().filter(|s| s.enabled)
    }
}

/// A compiled seating grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    total_rows: usize,
    total_cols: usize,
    cells: Vec<GridCell>,
}

impl Grid {
    /// The empty 0×0 grid.
    pub const fn empty() -> Self {
        Self {
            total_rows: 0,
            total_cols: 0,
            cells: Vec::new(),
        }
    }

    /// Build from row-major cells. `cells.len()` must equal `total_rows * total_cols`.
    pub(crate) fn from_cells(total_rows: usize, total_cols: usize, cells: Vec<GridCell>) -> Self {
        debug_assert_eq!(cells.len(), total_rows * total_cols);
        Self {
            total_rows,
            total_cols,
            cells,
        }
    }

    #[inline]
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    #[inline]
    pub fn total_cols(&self) -> usize {
        self.total_cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Flat index of a physical coordinate.
    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.total_rows && col < self.total_cols).then(|| row * self.total_cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&GridCell> {
        self.index_of(row, col).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut GridCell> {
        self.index_of(row, col).map(move |i| &mut self.cells[i])
    }

    /// Like [`Grid::get`], reporting the grid bounds on failure.
    pub fn try_get(&self, row: usize, col: usize) -> Result<&GridCell, LayoutError> {
        self.get(row, col).ok_or(LayoutError::OutOfBounds {
            row,
            col,
            rows: self.total_rows,
            cols: self.total_cols,
        })
    }

    /// Physical rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        // chunks(0) panics; an empty grid yields nothing either way
        self.cells.chunks(self.total_cols.max(1))
    }

    /// Whether the whole physical row is an aisle.
    pub fn is_aisle_row(&self, row: usize) -> bool {
        row < self.total_rows && (0..self.total_cols).all(|c| self.cells[row * self.total_cols + c].is_aisle())
    }

    /// Whether the whole physical column is an aisle.
    pub fn is_aisle_col(&self, col: usize) -> bool {
        col < self.total_cols && (0..self.total_rows).all(|r| self.cells[r * self.total_cols + col].is_aisle())
    }

    /// All seats (enabled or not), row-major.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.cells.iter().filter_map(GridCell::as_seat)
    }

    /// Enabled seats, row-major.
    pub fn enabled_seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats().filter(|s| s.enabled)
    }

    /// Mutable views of the enabled seats, row-major.
    ///
    /// This is the sequence the arranger works on.
    pub fn enabled_seats_mut(&mut self) -> Vec<&mut Seat> {
        self.cells
            .iter_mut()
            .filter_map(GridCell::as_seat_mut)
            .filter(|s| s.enabled)
            .collect()
    }

    pub fn enabled_seat_count(&self) -> usize {
        self.enabled_seats().count()
    }

    pub fn occupied_count(&self) -> usize {
        self.seats().filter(|s| s.is_occupied()).count()
    }

    /// Find the cell holding a logical seat.
    pub fn cell_for(&self, logical: SeatCoord) -> Option<&GridCell> {
        self.cells
            .iter()
            .find(|c| c.as_seat().is_some_and(|s| s.logical == logical))
    }

    /// Find a seat by logical coordinate.
    pub fn seat_at(&self, logical: SeatCoord) -> Option<&Seat> {
        self.cell_for(logical).and_then(GridCell::as_seat)
    }

    /// Unseat everyone. Cell kinds and coordinates are untouched.
    pub fn clear_occupants(&mut self) {
        for seat in self.cells.iter_mut().filter_map(GridCell::as_seat_mut) {
            seat.occupant = None;
        }
    }
}
