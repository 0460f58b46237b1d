//! Plain-text view of a grid.
//!
//! ```text
//! xx       ..
//! 2 Bo (M)    3 Cy (F)
//!       Podium
//! ```
//!
//! Aisles are blank, disabled seats `xx`, empty seats `..`. Occupied seats
//! show number and name with an `M`/`F` marker for male/female.

use seatmap_layout::{CellKind, Grid, GridCell, SexGroup};

const MIN_WIDTH: usize = 4;

fn label(cell: &GridCell) -> String {
    match &cell.kind {
        CellKind::Aisle => String::new(),
        CellKind::Seat(seat) if !seat.enabled => "xx".to_string(),
        CellKind::Seat(seat) => match &seat.occupant {
            None => "..".to_string(),
            Some(person) => match person.sex {
                SexGroup::Male => format!("{} {} (M)", person.number, person.name),
                SexGroup::Female => format!("{} {} (F)", person.number, person.name),
                SexGroup::Other => format!("{} {}", person.number, person.name),
            },
        },
    }
}

/// Render the grid with the podium label centred underneath.
pub fn render_text(grid: &Grid, podium_label: &str) -> String {
    let labels: Vec<String> = grid.cells().iter().map(label).collect();
    let width = labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_WIDTH);

    let cols = grid.total_cols().max(1);
    let mut out = String::new();
    for row in labels.chunks(cols) {
        let line: Vec<String> = row.iter().map(|l| format!("{l:<width$}")).collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }

    let total_width = (width + 1) * grid.total_cols();
    let podium = format!("{podium_label:^total_width$}");
    out.push_str(podium.trim_end());
    out.push('\n');
    out
}
