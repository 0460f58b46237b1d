//! seatmap binary
//!
//! Loads a seating layout and a roster, arranges the roster and prints the
//! resulting grid.
//!
//! Usage:
//!   seatmap [LAYOUT] [ROSTER] [--same-sex] [--seed N] [--rounds N]
//!           [--export PATH] [--json] [--podium LABEL]

use seatmap_cli::{export_csv, render_text, write_json, Command, OutputFormat, Session, SessionConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_usage() {
    eprintln!("seatmap - Random seat arrangement");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  seatmap [LAYOUT] [ROSTER] [options]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  LAYOUT             Seating document (default: config.yaml)");
    eprintln!("  ROSTER             Roster CSV with Number,Name,Sex (default: people.csv)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --same-sex         Pair neighbouring seats within one sex-group");
    eprintln!("  --seed N           Seed the arrangement for reproducible output");
    eprintln!("  --rounds N         Rearrange N times and show the last result");
    eprintln!("  --export PATH      Also write the grid as CSV");
    eprintln!("  --json             Print the grid as JSON instead of text");
    eprintln!("  --podium LABEL     Podium label (default: Podium)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SEATMAP_LAYOUT, SEATMAP_ROSTER, SEATMAP_SAME_SEX, SEATMAP_SEED,");
    eprintln!("  SEATMAP_EXPORT, SEATMAP_PODIUM, RUST_LOG");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the grid
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seatmap=info,seatmap_cli=info,seatmap_layout=info,seatmap_arrange=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match SessionConfig::from_env()?.with_args(std::env::args().skip(1))? {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Run(config) => config,
    };

    let mut session = Session::load(&config)?;
    let mut rng = config.rng();

    for round in 1..=config.rounds {
        if let Some(outcome) = session.rearrange(&mut rng) {
            tracing::info!(
                round,
                mode = ?outcome.mode,
                seated = outcome.seated,
                empty = outcome.empty_seats,
                "rearranged"
            );
        }
    }

    match config.format {
        OutputFormat::Text => print!("{}", render_text(session.grid(), &config.podium_label)),
        OutputFormat::Json => {
            write_json(session.grid(), std::io::stdout().lock())?;
            println!();
        }
    }

    if let Some(path) = &config.export_path {
        export_csv(session.grid(), &config.podium_label, path)?;
        tracing::info!(path = %path.display(), "exported grid");
    }

    Ok(())
}
