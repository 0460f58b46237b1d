//! The abstract seating specification.
//!
//! Everything here is expressed in logical coordinates: the dense seat
//! rectangle as the user describes it, before any aisle is inserted.

use std::collections::HashSet;
use std::fmt;

/// Rows used when no seating document is available.
pub const DEFAULT_ROWS: i64 = 5;

/// Columns used when no seating document is available.
pub const DEFAULT_COLUMNS: i64 = 6;

/// A logical seat coordinate (0-based, aisles not counted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatCoord {
    pub row: usize,
    pub col: usize,
}

impl SeatCoord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for SeatCoord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for SeatCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An aisle insertion request.
///
/// The aisle is inserted after logical line `start`. `end` is carried as
/// metadata only; aisles are always a single physical line wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AisleRange {
    pub start: i64,
    pub end: i64,
}

impl AisleRange {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

impl From<(i64, i64)> for AisleRange {
    fn from((start, end): (i64, i64)) -> Self {
        Self { start, end }
    }
}

/// Abstract seating specification.
///
/// `rows` and `columns` are signed so that a non-positive size can be
/// represented; such a spec compiles to an empty grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatingSpec {
    pub rows: i64,
    pub columns: i64,
    pub disabled_seats: HashSet<SeatCoord>,
    pub aisle_rows: Vec<AisleRange>,
    pub aisle_columns: Vec<AisleRange>,
}

impl Default for SeatingSpec {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

impl SeatingSpec {
    /// A spec with no disabled seats and no aisles.
    pub fn new(rows: i64, columns: i64) -> Self {
        Self {
            rows,
            columns,
            disabled_seats: HashSet::new(),
            aisle_rows: Vec::new(),
            aisle_columns: Vec::new(),
        }
    }

    pub fn with_disabled(mut self, row: usize, col: usize) -> Self {
        self.disabled_seats.insert(SeatCoord::new(row, col));
        self
    }

    pub fn with_aisle_row(mut self, start: i64, end: i64) -> Self {
        self.aisle_rows.push(AisleRange::new(start, end));
        self
    }

    pub fn with_aisle_column(mut self, start: i64, end: i64) -> Self {
        self.aisle_columns.push(AisleRange::new(start, end));
        self
    }

    /// True when either dimension is non-positive.
    pub fn is_degenerate(&self) -> bool {
        self.rows <= 0 || self.columns <= 0
    }

    /// Whether the logical seat is listed as disabled.
    #[inline]
    pub fn is_disabled(&self, coord: SeatCoord) -> bool {
        self.disabled_seats.contains(&coord)
    }

    /// Number of logical seats (zero for a degenerate spec).
    pub fn logical_seat_count(&self) -> usize {
        if self.is_degenerate() {
            0
        } else {
            (self.rows as usize) * (self.columns as usize)
        }
    }
}
