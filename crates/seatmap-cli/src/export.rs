//! Writing an arranged grid out.
//!
//! The CSV layout mirrors the physical grid one row per line. Occupied seats
//! read `"{number}. {name}"`; aisles, disabled and empty seats are blank. A
//! final line carries the podium label in its first cell, padded with blank
//! cells to the grid width.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use seatmap_layout::{Grid, GridCell};

use crate::Result;

fn cell_text(cell: &GridCell) -> String {
    cell.as_seat()
        .and_then(|seat| seat.occupant.as_ref())
        .map(|person| person.to_string())
        .unwrap_or_default()
}

/// Write the grid and podium row as CSV.
pub fn write_csv<W: Write>(grid: &Grid, podium_label: &str, sink: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);

    for row in grid.rows() {
        writer.write_record(row.iter().map(cell_text))?;
    }

    let width = grid.total_cols().max(1);
    let podium = std::iter::once(podium_label).chain(std::iter::repeat("").take(width - 1));
    writer.write_record(podium)?;

    writer.flush()?;
    Ok(())
}

/// Write the CSV export to a file.
pub fn export_csv(grid: &Grid, podium_label: &str, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(grid, podium_label, file)
}

/// Write the grid as pretty JSON.
pub fn write_json<W: Write>(grid: &Grid, sink: W) -> Result<()> {
    serde_json::to_writer_pretty(sink, grid)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatmap_layout::{compile, Person, SeatCoord, SeatingSpec};

    fn arranged() -> Grid {
        // 2×2 with an aisle column in the middle; (0,0) is disabled
        let mut grid = compile(&SeatingSpec::new(2, 2).with_disabled(0, 0).with_aisle_column(0, 0));
        for (i, seat) in grid.enabled_seats_mut().into_iter().enumerate() {
            if seat.logical != SeatCoord::new(1, 1) {
                seat.occupant = Some(Person::new(i as i64 + 1, format!("n{}", i + 1), "male"));
            }
        }
        grid
    }

    #[test]
    fn csv_mirrors_physical_grid() {
        let mut out = Vec::new();
        write_csv(&arranged(), "Podium", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, ",,1. n1\n2. n2,,\nPodium,,\n");
    }

    #[test]
    fn empty_grid_exports_podium_only() {
        let mut out = Vec::new();
        write_csv(&Grid::empty(), "Stage", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Stage\n");
    }

    #[test]
    fn json_carries_cell_kinds_and_occupants() {
        let mut out = Vec::new();
        write_json(&arranged(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        let cells = value["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[1]["kind"], "aisle");
        assert_eq!(cells[0]["kind"], "seat");
        assert_eq!(cells[0]["enabled"], false);
        assert_eq!(cells[2]["occupant"]["name"], "n1");
        assert_eq!(cells[2]["occupant"]["sex"], "male");
        assert_eq!(value["total_cols"], 3);
    }
}
