//! Seat pairing for same-sex-adjacent arrangement.

use seatmap_layout::Seat;

/// Two positions in the enabled-seat sequence filled from one sex-group.
///
/// The trailing seat of an odd-length sequence forms a pair on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatPair {
    pub first: usize,
    pub second: Option<usize>,
}

impl SeatPair {
    /// Whether the two seats sit on different rows.
    ///
    /// Happens when a row holds an odd number of enabled seats.
    pub fn spans_rows(&self, seats: &[&mut Seat]) -> bool {
        match self.second {
            Some(second) => seats[self.first].logical.row != seats[second].logical.row,
            None => false,
        }
    }
}

/// Cut `count` seats into consecutive pairs: `(0,1), (2,3), …`.
pub fn pair_seats(count: usize) -> Vec<SeatPair> {
    (0..count)
        .step_by(2)
        .map(|first| SeatPair {
            first,
            second: (first + 1 < count).then_some(first + 1),
        })
        .collect()
}
