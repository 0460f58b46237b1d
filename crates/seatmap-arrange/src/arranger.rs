//! The two arrangement policies.

use rand::seq::SliceRandom;
use rand::Rng;
use seatmap_layout::{Grid, Person, Seat, SexGroup};
use tracing::{debug, trace};

use crate::groups::SexGroups;
use crate::pairs::pair_seats;

/// How a roster is placed onto seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArrangeMode {
    /// Uniform random permutation
    #[default]
    Random,
    /// People sharing a seat pair share a sex-group
    SameSexAdjacent,
}

impl ArrangeMode {
    pub fn from_same_sex_adjacent(enabled: bool) -> Self {
        if enabled {
            Self::SameSexAdjacent
        } else {
            Self::Random
        }
    }
}

/// Summary of one arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrangeOutcome {
    /// Mode actually applied (same-sex pairing falls back to random for ≤1 seat)
    pub mode: ArrangeMode,
    /// Seats that received a person
    pub seated: usize,
    /// People left without a seat
    pub unseated: usize,
    /// Seats left empty
    pub empty_seats: usize,
    /// Seat pairs whose two seats are on different rows
    pub straddling_pairs: usize,
}

/// Arrange `people` onto `seats`.
///
/// `seats` is the row-major sequence of enabled seats of a grid. All of them
/// are cleared first; the sequence itself is never reordered.
pub fn arrange<R: Rng + ?Sized>(
    people: &[Person],
    seats: &mut [&mut Seat],
    mode: ArrangeMode,
    rng: &mut R,
) -> ArrangeOutcome {
    debug_assert!(seats.iter().all(|s| s.enabled), "arrange expects enabled seats only");

    for seat in seats.iter_mut() {
        seat.occupant = None;
    }

    let outcome = match mode {
        ArrangeMode::SameSexAdjacent if seats.len() > 1 => arrange_same_sex_adjacent(people, seats, rng),
        _ => arrange_random(people, seats, rng),
    };

    debug!(
        people = people.len(),
        seats = seats.len(),
        mode = ?outcome.mode,
        seated = outcome.seated,
        unseated = outcome.unseated,
        empty = outcome.empty_seats,
        "arranged seats"
    );
    outcome
}

/// Arrange `people` over every enabled seat of `grid`.
pub fn arrange_grid<R: Rng + ?Sized>(
    people: &[Person],
    grid: &mut Grid,
    mode: ArrangeMode,
    rng: &mut R,
) -> ArrangeOutcome {
    let mut seats = grid.enabled_seats_mut();
    arrange(people, &mut seats, mode, rng)
}

fn arrange_random<R: Rng + ?Sized>(people: &[Person], seats: &mut [&mut Seat], rng: &mut R) -> ArrangeOutcome {
    let mut shuffled_people: Vec<&Person> = people.iter().collect();
    shuffled_people.shuffle(rng);

    let mut seat_order: Vec<usize> = (0..seats.len()).collect();
    seat_order.shuffle(rng);

    let assigned = shuffled_people.len().min(seat_order.len());
    for (&person, &slot) in shuffled_people.iter().zip(&seat_order) {
        let seat = &mut *seats[slot];
        trace!(person = %person, seat = %seat.logical, "assigned");
        seat.occupant = Some(person.clone());
    }

    ArrangeOutcome {
        mode: ArrangeMode::Random,
        seated: assigned,
        unseated: people.len() - assigned,
        empty_seats: seats.len() - assigned,
        straddling_pairs: 0,
    }
}

fn arrange_same_sex_adjacent<R: Rng + ?Sized>(
    people: &[Person],
    seats: &mut [&mut Seat],
    rng: &mut R,
) -> ArrangeOutcome {
    let mut groups = SexGroups::partition(people);
    groups.shuffle(rng);
    debug!(
        male = groups.len(SexGroup::Male),
        female = groups.len(SexGroup::Female),
        other = groups.len(SexGroup::Other),
        "grouped roster"
    );

    let mut pairs = pair_seats(seats.len());
    let straddling_pairs = pairs.iter().filter(|p| p.spans_rows(&*seats)).count();
    if straddling_pairs > 0 {
        debug!(straddling_pairs, "seat pairs cross a row boundary");
    }
    pairs.shuffle(rng);

    let mut seated = 0;
    for pair in pairs {
        let Some(sex) = groups.choose(rng) else {
            break;
        };

        // choose() only returns a group with members left
        if let Some(person) = groups.take(sex) {
            let seat = &mut *seats[pair.first];
            trace!(person = %person, seat = %seat.logical, %sex, "assigned");
            seat.occupant = Some(person.clone());
            seated += 1;
        }

        if let Some(second) = pair.second {
            let seat = &mut *seats[second];
            match groups.take(sex) {
                Some(person) => {
                    trace!(person = %person, seat = %seat.logical, %sex, "assigned");
                    seat.occupant = Some(person.clone());
                    seated += 1;
                }
                None => seat.occupant = None,
            }
        }
    }

    ArrangeOutcome {
        mode: ArrangeMode::SameSexAdjacent,
        seated,
        unseated: people.len() - seated,
        empty_seats: seats.len() - seated,
        straddling_pairs,
    }
}
