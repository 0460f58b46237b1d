//! Seat Assignment
//!
//! Places a roster onto the enabled seats of a compiled [`Grid`].
//!
//! # Modes
//!
//! - [`ArrangeMode::Random`]: independent uniform permutations of people and
//!   seats, zipped together. Surplus seats stay empty, surplus people stay
//!   unseated.
//! - [`ArrangeMode::SameSexAdjacent`]: the enabled seats are cut into
//!   consecutive pairs in row-major order, the pairs are shuffled, and each
//!   pair is filled from a single sex-group. Two people sharing a pair always
//!   share a sex-group.
//!
//! # Pairing Follows Scan Order
//!
//! Pairs are formed from the enabled-seat sequence, not from geometry. Inside
//! a row this pairs true left/right neighbours, but when a row holds an odd
//! number of enabled seats its last seat is paired with the first seat of the
//! next row. Such pairs are counted in [`ArrangeOutcome::straddling_pairs`].
//!
//! # Randomness
//!
//! The random source is always passed in. Seed it (e.g. `StdRng::seed_from_u64`)
//! for reproducible arrangements.
//!
//! # Clean Slate
//!
//! Every call first clears all seats it is given, so a seat that receives
//! nobody is always left empty regardless of earlier arrangements.

mod arranger;
mod groups;
mod pairs;

pub use arranger::{arrange, arrange_grid, ArrangeMode, ArrangeOutcome};
pub use groups::SexGroups;
pub use pairs::{pair_seats, SeatPair};

pub use seatmap_layout::{Grid, Person, Seat, SexGroup};
