//! Seating session for the seatmap tools.
//!
//! Wraps the layout compiler and the arranger with the I/O a real run needs:
//! a YAML seating document, a CSV roster, environment/argument configuration,
//! CSV and JSON export, and a plain-text terminal view.

pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod render;
pub mod session;

pub use config::{Command, OutputFormat, SessionConfig};
pub use error::{Error, Result};
pub use export::{export_csv, write_csv, write_json};
pub use loader::{load_roster, load_spec, parse_spec, read_roster};
pub use render::render_text;
pub use session::Session;
