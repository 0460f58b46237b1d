//! Seatmap Layout
//!
//! Seating grid model and the layout compiler.
//!
//! # Logical vs. Physical Coordinates
//!
//! A [`SeatingSpec`] describes seats in *logical* coordinates: a dense
//! `rows × columns` rectangle, 0-based, ignoring aisles. Compiling the spec
//! inserts whole aisle rows and columns and yields a [`Grid`] in *physical*
//! coordinates, where every position is either an aisle or a seat.
//!
//! ```text
//! logical 3×4, aisle after row 1, aisle after column 1
//!
//!   S S | S S
//!   S S | S S
//!   ----+----
//!   S S | S S
//! ```
//!
//! # Invariants
//!
//! - Physical cells tile `[0, total_rows) × [0, total_cols)` exactly once.
//! - Seat cells carry every logical coordinate in `[0, rows) × [0, columns)`
//!   exactly once, strictly increasing in row-major order.
//! - A seat is disabled iff its logical coordinate is listed in
//!   [`SeatingSpec::disabled_seats`].

mod compile;
mod grid;
mod person;
mod spec;

pub use compile::{compile, place_aisles, AislePlacement};
pub use grid::{CellKind, Grid, GridCell, LayoutError, Seat};
pub use person::{Person, SexGroup};
pub use spec::{AisleRange, SeatCoord, SeatingSpec, DEFAULT_COLUMNS, DEFAULT_ROWS};
