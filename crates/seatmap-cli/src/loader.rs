//! Loading the seating document and the roster.
//!
//! # Seating document
//!
//! ```yaml
//! layout:
//!   rows: 3
//!   columns: 4
//! disabled_seats:
//!   - [0, 0]
//! aisles:
//!   columns:
//!     - [1, 2]
//!   rows:
//!     - [1, 2]
//! ```
//!
//! Every section is optional. Missing sizes keep the defaults, and a missing
//! file yields [`SeatingSpec::default`].
//!
//! # Roster
//!
//! CSV with a `Number,Name,Sex` header (header case is ignored). The sex
//! column is resolved into a [`SexGroup`](seatmap_layout::SexGroup) here.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use seatmap_layout::{AisleRange, Person, SeatCoord, SeatingSpec};
use tracing::{debug, warn};

use crate::Result;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SeatingDocument {
    layout: LayoutSection,
    disabled_seats: Vec<[i64; 2]>,
    aisles: AisleSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LayoutSection {
    rows: Option<i64>,
    columns: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AisleSection {
    rows: Vec<[i64; 2]>,
    columns: Vec<[i64; 2]>,
}

impl SeatingDocument {
    fn into_spec(self) -> SeatingSpec {
        let mut spec = SeatingSpec::default();
        if let Some(rows) = self.layout.rows {
            spec.rows = rows;
        }
        if let Some(columns) = self.layout.columns {
            spec.columns = columns;
        }

        for [row, col] in self.disabled_seats {
            // A negative coordinate can never name a logical seat
            match (usize::try_from(row), usize::try_from(col)) {
                (Ok(row), Ok(col)) => {
                    spec.disabled_seats.insert(SeatCoord::new(row, col));
                }
                _ => debug!(row, col, "ignoring negative disabled seat"),
            }
        }

        spec.aisle_rows = self.aisles.rows.into_iter().map(|[s, e]| AisleRange::new(s, e)).collect();
        spec.aisle_columns = self.aisles.columns.into_iter().map(|[s, e]| AisleRange::new(s, e)).collect();
        spec
    }
}

/// Parse a seating document.
pub fn parse_spec(yaml: &str) -> Result<SeatingSpec> {
    if yaml.trim().is_empty() {
        return Ok(SeatingSpec::default());
    }
    let document: SeatingDocument = serde_yaml::from_str(yaml)?;
    Ok(document.into_spec())
}

/// Load a seating document, falling back to the default spec if the file is absent.
pub fn load_spec(path: &Path) -> Result<SeatingSpec> {
    if !path.exists() {
        warn!(path = %path.display(), "layout file not found, using defaults");
        return Ok(SeatingSpec::default());
    }
    let yaml = std::fs::read_to_string(path)?;
    let spec = parse_spec(&yaml)?;
    debug!(
        path = %path.display(),
        rows = spec.rows,
        columns = spec.columns,
        disabled = spec.disabled_seats.len(),
        "loaded layout"
    );
    Ok(spec)
}

#[derive(Debug, Deserialize)]
struct RosterRecord {
    number: i64,
    name: String,
    #[serde(default)]
    sex: String,
}

impl From<RosterRecord> for Person {
    fn from(record: RosterRecord) -> Self {
        Person::new(record.number, record.name, &record.sex)
    }
}

/// Read a roster from any CSV source.
pub fn read_roster<R: Read>(source: R) -> Result<Vec<Person>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers: csv::StringRecord = reader.headers()?.iter().map(|h| h.to_ascii_lowercase()).collect();
    reader.set_headers(headers);

    let mut people = Vec::new();
    for record in reader.deserialize::<RosterRecord>() {
        people.push(Person::from(record?));
    }
    Ok(people)
}

/// Load a roster file.
pub fn load_roster(path: &Path) -> Result<Vec<Person>> {
    let file = std::fs::File::open(path)?;
    let people = read_roster(file)?;
    debug!(path = %path.display(), people = people.len(), "loaded roster");
    Ok(people)
}
