//! Layout compiler: [`SeatingSpec`] → [`Grid`].
//!
//! # Aisle Placement
//!
//! Aisle requests on one axis are processed in ascending `start` order. An
//! aisle requested after logical line `start` lands at physical index
//!
//! ```text
//! candidate = start + accepted_so_far + 1
//! ```
//!
//! and is accepted iff it lies inside the physical extent the axis has once
//! the aisle is added, i.e. `0 ≤ candidate ≤ logical + accepted_so_far`.
//! Rejected requests are dropped and do not shift later aisles. Two requests
//! with the same `start` produce two adjacent aisles.
//!
//! The compiler is deterministic and allocates a fresh grid on every call.

use tracing::debug;

use crate::{AisleRange, Grid, GridCell, Seat, SeatCoord, SeatingSpec};

/// Result of placing the aisle requests of one axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AislePlacement {
    /// Accepted physical indices, strictly increasing
    pub indices: Vec<usize>,
    /// Requests whose candidate index fell outside the axis
    pub dropped: Vec<AisleRange>,
}

impl AislePlacement {
    /// Physical length of the axis: logical lines plus accepted aisles.
    pub fn total(&self, logical: usize) -> usize {
        logical + self.indices.len()
    }

    /// Per-index aisle flags for an axis of `total` physical lines.
    pub fn mask(&self, total: usize) -> Vec<bool> {
        let mut mask = vec![false; total];
        for &i in &self.indices {
            if let Some(slot) = mask.get_mut(i) {
                *slot = true;
            }
        }
        mask
    }
}

/// Place the aisle requests of one axis holding `logical` lines.
pub fn place_aisles(requests: &[AisleRange], logical: i64) -> AislePlacement {
    let mut sorted = requests.to_vec();
    sorted.sort_by_key(|a| a.start);

    let mut placement = AislePlacement::default();
    let mut offset: i64 = 0;

    for aisle in sorted {
        let candidate = aisle.start.saturating_add(offset).saturating_add(1);
        if candidate >= 0 && candidate <= logical.saturating_add(offset) {
            placement.indices.push(candidate as usize);
            offset += 1;
        } else {
            debug!(
                start = aisle.start,
                end = aisle.end,
                candidate,
                "dropping out-of-range aisle request"
            );
            placement.dropped.push(aisle);
        }
    }

    placement
}

/// Compile a seating spec into a row-major physical grid.
///
/// A spec with a non-positive dimension compiles to [`Grid::empty`].
pub fn compile(spec: &SeatingSpec) -> Grid {
    if spec.is_degenerate() {
        debug!(rows = spec.rows, columns = spec.columns, "degenerate seating spec, empty grid");
        return Grid::empty();
    }

    let row_aisles = place_aisles(&spec.aisle_rows, spec.rows);
    let col_aisles = place_aisles(&spec.aisle_columns, spec.columns);

    let total_rows = row_aisles.total(spec.rows as usize);
    let total_cols = col_aisles.total(spec.columns as usize);
    let aisle_row = row_aisles.mask(total_rows);
    let aisle_col = col_aisles.mask(total_cols);

    let mut cells = Vec::with_capacity(total_rows * total_cols);
    let mut logical_row = 0;

    for (row, &row_is_aisle) in aisle_row.iter().enumerate() {
        if row_is_aisle {
            cells.extend((0..total_cols).map(|col| GridCell::aisle(row, col)));
            continue;
        }

        let mut logical_col = 0;
        for (col, &col_is_aisle) in aisle_col.iter().enumerate() {
            if col_is_aisle {
                cells.push(GridCell::aisle(row, col));
                continue;
            }
            let logical = SeatCoord::new(logical_row, logical_col);
            let seat = Seat::new(logical, !spec.is_disabled(logical));
            cells.push(GridCell::seat(row, col, seat));
            logical_col += 1;
        }
        logical_row += 1;
    }

    debug!(
        rows = spec.rows,
        columns = spec.columns,
        total_rows,
        total_cols,
        aisle_rows = ?row_aisles.indices,
        aisle_cols = ?col_aisles.indices,
        "compiled seating grid"
    );

    Grid::from_cells(total_rows, total_cols, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn aisles_in_both_axes() {
        let spec = SeatingSpec::new(3, 4)
            .with_disabled(0, 0)
            .with_aisle_column(1, 2)
            .with_aisle_row(1, 2);
        let grid = compile(&spec);

        assert_eq!(grid.total_rows(), 4);
        assert_eq!(grid.total_cols(), 5);
        assert!(grid.is_aisle_row(2));
        assert!(grid.is_aisle_col(2));
        for r in [0, 1, 3] {
            assert!(!grid.is_aisle_row(r));
        }

        let first = grid.get(0, 0).unwrap().as_seat().unwrap();
        assert_eq!(first.logical, SeatCoord::new(0, 0));
        assert!(!first.enabled);

        assert_eq!(grid.enabled_seat_count(), 11);
        for seat in grid.seats() {
            assert_eq!(seat.enabled, seat.logical != SeatCoord::new(0, 0));
        }

        // Physical (3, 4) is the last logical seat
        let last = grid.get(3, 4).unwrap().as_seat().unwrap();
        assert_eq!(last.logical, SeatCoord::new(2, 3));
    }

    #[test]
    fn aisle_past_the_end_is_dropped() {
        let spec = SeatingSpec::new(3, 2).with_aisle_row(5, 5);
        let grid = compile(&spec);
        assert_eq!(grid.total_rows(), 3);
        assert_eq!(grid.total_cols(), 2);
        assert!(grid.cells().iter().all(|c| !c.is_aisle()));
    }

    #[test]
    fn dropped_request_does_not_shift_later_aisles() {
        // Sorted: -5 (dropped), 0 → 1, 1 → 3
        let placement = place_aisles(
            &[AisleRange::new(1, 1), AisleRange::new(-5, 0), AisleRange::new(0, 0)],
            4,
        );
        assert_eq!(placement.indices, vec![1, 3]);
        assert_eq!(placement.dropped, vec![AisleRange::new(-5, 0)]);
    }

    #[test]
    fn colliding_starts_make_adjacent_aisles() {
        let placement = place_aisles(&[AisleRange::new(0, 1), AisleRange::new(0, 1)], 3);
        assert_eq!(placement.indices, vec![1, 2]);

        let grid = compile(&SeatingSpec::new(3, 1).with_aisle_row(0, 1).with_aisle_row(0, 1));
        assert_eq!(grid.total_rows(), 5);
        assert!(grid.is_aisle_row(1));
        assert!(grid.is_aisle_row(2));
    }

    #[test]
    fn leading_and_trailing_aisles() {
        // start = -1 puts the aisle before the first line
        let placement = place_aisles(&[AisleRange::new(-1, 0)], 3);
        assert_eq!(placement.indices, vec![0]);

        // start = logical - 1 puts it after the last line
        let placement = place_aisles(&[AisleRange::new(2, 2)], 3);
        assert_eq!(placement.indices, vec![3]);

        let placement = place_aisles(&[AisleRange::new(3, 3)], 3);
        assert!(placement.indices.is_empty());
    }

    #[test]
    fn end_field_is_ignored() {
        let a = compile(&SeatingSpec::new(4, 4).with_aisle_column(1, 1));
        let b = compile(&SeatingSpec::new(4, 4).with_aisle_column(1, 99));
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_specs_compile_empty() {
        for (rows, cols) in [(0, 4), (4, 0), (-1, 3), (0, 0)] {
            let grid = compile(&SeatingSpec::new(rows, cols).with_aisle_row(0, 0));
            assert!(grid.is_empty());
            assert_eq!((grid.total_rows(), grid.total_cols()), (0, 0));
        }
    }

    #[test]
    fn disabled_outside_grid_has_no_effect() {
        let grid = compile(&SeatingSpec::new(2, 2).with_disabled(7, 7));
        assert_eq!(grid.enabled_seat_count(), 4);
    }

    #[test]
    fn recompile_ignores_prior_occupants() {
        let spec = SeatingSpec::new(2, 3).with_aisle_column(0, 0);
        let mut first = compile(&spec);
        for seat in first.enabled_seats_mut() {
            seat.occupant = Some(crate::Person::new(1, "a", "male"));
        }
        let second = compile(&spec);
        assert_eq!(second, compile(&spec));
        assert_eq!(second.occupied_count(), 0);
        assert_eq!(first.len(), second.len());
    }

    fn aisle_strategy() -> impl Strategy<Value = Vec<AisleRange>> {
        prop::collection::vec((-3i64..12, -3i64..12), 0..5)
            .prop_map(|v| v.into_iter().map(AisleRange::from).collect())
    }

    fn spec_strategy() -> impl Strategy<Value = SeatingSpec> {
        (
            0i64..8,
            0i64..8,
            aisle_strategy(),
            aisle_strategy(),
            prop::collection::vec((0usize..8, 0usize..8), 0..10),
        )
            .prop_map(|(rows, cols, ar, ac, disabled)| SeatingSpec {
                rows,
                columns: cols,
                disabled_seats: disabled.into_iter().map(SeatCoord::from).collect(),
                aisle_rows: ar,
                aisle_columns: ac,
            })
    }

    proptest! {
        #[test]
        fn cells_tile_the_rectangle(spec in spec_strategy()) {
            let grid = compile(&spec);
            prop_assert_eq!(grid.len(), grid.total_rows() * grid.total_cols());

            let mut seen = HashSet::new();
            for (i, cell) in grid.cells().iter().enumerate() {
                prop_assert!(cell.physical_row < grid.total_rows());
                prop_assert!(cell.physical_col < grid.total_cols());
                prop_assert_eq!(grid.index_of(cell.physical_row, cell.physical_col), Some(i));
                prop_assert!(seen.insert((cell.physical_row, cell.physical_col)));
            }
        }

        #[test]
        fn logical_coordinates_are_dense(spec in spec_strategy()) {
            let grid = compile(&spec);
            let logical: Vec<SeatCoord> = grid.seats().map(|s| s.logical).collect();
            prop_assert_eq!(logical.len(), spec.logical_seat_count());

            // Strictly increasing in scan order implies no repeats
            for pair in logical.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            if !spec.is_degenerate() {
                for seat in &logical {
                    prop_assert!((seat.row as i64) < spec.rows);
                    prop_assert!((seat.col as i64) < spec.columns);
                }
            }
        }

        #[test]
        fn disabled_iff_listed(spec in spec_strategy()) {
            let grid = compile(&spec);
            for seat in grid.seats() {
                prop_assert_eq!(seat.enabled, !spec.disabled_seats.contains(&seat.logical));
            }
        }

        #[test]
        fn accepted_aisles_are_monotonic_and_in_bounds(
            requests in aisle_strategy(),
            logical in 1i64..10,
        ) {
            let placement = place_aisles(&requests, logical);
            let total = placement.total(logical as usize);
            for pair in placement.indices.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            for &i in &placement.indices {
                prop_assert!(i < total);
            }
            prop_assert_eq!(placement.indices.len() + placement.dropped.len(), requests.len());
        }

        #[test]
        fn totals_count_accepted_aisles(spec in spec_strategy()) {
            prop_assume!(!spec.is_degenerate());
            let grid = compile(&spec);
            let rows = place_aisles(&spec.aisle_rows, spec.rows);
            let cols = place_aisles(&spec.aisle_columns, spec.columns);
            prop_assert_eq!(grid.total_rows(), spec.rows as usize + rows.indices.len());
            prop_assert_eq!(grid.total_cols(), spec.columns as usize + cols.indices.len());
            for &r in &rows.indices {
                prop_assert!(grid.is_aisle_row(r));
            }
            for &c in &cols.indices {
                prop_assert!(grid.is_aisle_col(c));
            }
        }

        #[test]
        fn compile_is_idempotent(spec in spec_strategy()) {
            prop_assert_eq!(compile(&spec), compile(&spec));
        }
    }
}
