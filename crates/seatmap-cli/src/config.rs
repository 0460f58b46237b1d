//! Session configuration.
//!
//! Values come from the environment first and are then overridden by
//! command-line arguments.
//!
//! | field               | env var            | default       |
//! |---------------------|--------------------|---------------|
//! | `layout_path`       | `SEATMAP_LAYOUT`   | `config.yaml` |
//! | `roster_path`       | `SEATMAP_ROSTER`   | `people.csv`  |
//! | `same_sex_adjacent` | `SEATMAP_SAME_SEX` | off           |
//! | `seed`              | `SEATMAP_SEED`     | entropy       |
//! | `export_path`       | `SEATMAP_EXPORT`   | none          |
//! | `podium_label`      | `SEATMAP_PODIUM`   | `Podium`      |

use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use seatmap_arrange::ArrangeMode;

use crate::{Error, Result};

/// How the final grid is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything a seating run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seating document (YAML)
    pub layout_path: PathBuf,
    /// Roster (CSV with `Number,Name,Sex` header)
    pub roster_path: PathBuf,
    /// Keep seat-pair occupants within one sex-group
    pub same_sex_adjacent: bool,
    /// Fixed RNG seed for reproducible arrangements
    pub seed: Option<u64>,
    /// Write the arranged grid as CSV here
    pub export_path: Option<PathBuf>,
    /// Label of the podium row in renders and exports
    pub podium_label: String,
    pub format: OutputFormat,
    /// Number of rearrangements; the last one is shown
    pub rounds: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            layout_path: PathBuf::from("config.yaml"),
            roster_path: PathBuf::from("people.csv"),
            same_sex_adjacent: false,
            seed: None,
            export_path: None,
            podium_label: "Podium".to_string(),
            format: OutputFormat::Text,
            rounds: 1,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(SessionConfig),
    Help,
}

impl SessionConfig {
    /// Create config from environment variables with defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("SEATMAP_LAYOUT") {
            config.layout_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("SEATMAP_ROSTER") {
            config.roster_path = PathBuf::from(path);
        }
        if let Some(flag) = lookup("SEATMAP_SAME_SEX") {
            config.same_sex_adjacent = parse_flag("SEATMAP_SAME_SEX", &flag)?;
        }
        if let Some(seed) = lookup("SEATMAP_SEED") {
            config.seed = Some(parse_number("SEATMAP_SEED", &seed)?);
        }
        if let Some(path) = lookup("SEATMAP_EXPORT") {
            config.export_path = Some(PathBuf::from(path));
        }
        if let Some(label) = lookup("SEATMAP_PODIUM") {
            config.podium_label = label;
        }

        Ok(config)
    }

    /// Apply command-line arguments (program name excluded).
    ///
    /// The first two positional arguments are the layout and roster paths.
    pub fn with_args<I>(mut self, args: I) -> Result<Command>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut positional = 0;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--same-sex" => self.same_sex_adjacent = true,
                "--json" => self.format = OutputFormat::Json,
                "--seed" => self.seed = Some(parse_number("--seed", &value_of(&mut args, "--seed")?)?),
                "--rounds" => {
                    self.rounds = parse_number("--rounds", &value_of(&mut args, "--rounds")?)?;
                    if self.rounds == 0 {
                        return Err(Error::InvalidInput("--rounds must be at least 1".into()));
                    }
                }
                "--export" => self.export_path = Some(PathBuf::from(value_of(&mut args, "--export")?)),
                "--podium" => self.podium_label = value_of(&mut args, "--podium")?,
                other if other.starts_with('-') => {
                    return Err(Error::InvalidInput(format!("unknown option {other}")));
                }
                path => {
                    match positional {
                        0 => self.layout_path = PathBuf::from(path),
                        1 => self.roster_path = PathBuf::from(path),
                        _ => return Err(Error::InvalidInput(format!("unexpected argument {path}"))),
                    }
                    positional += 1;
                }
            }
        }

        Ok(Command::Run(self))
    }

    pub fn mode(&self) -> ArrangeMode {
        ArrangeMode::from_same_sex_adjacent(self.same_sex_adjacent)
    }

    /// The random source for this run: seeded if a seed was given.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

fn value_of<I: Iterator<Item = String>>(args: &mut I, option: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::InvalidInput(format!("{option} needs a value")))
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("{name}: not a number: {value:?}")))
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(Error::InvalidInput(format!("{name}: not a flag: {value:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_environment() {
        let config = SessionConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.mode(), ArrangeMode::Random);
    }

    #[test]
    fn environment_overrides() {
        let env: HashMap<&str, &str> = [
            ("SEATMAP_LAYOUT", "room.yaml"),
            ("SEATMAP_SAME_SEX", "Yes"),
            ("SEATMAP_SEED", "42"),
            ("SEATMAP_PODIUM", "Stage"),
        ]
        .into_iter()
        .collect();
        let config = SessionConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.layout_path, PathBuf::from("room.yaml"));
        assert_eq!(config.roster_path, PathBuf::from("people.csv"));
        assert!(config.same_sex_adjacent);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.podium_label, "Stage");
    }

    #[test]
    fn bad_environment_values_are_rejected() {
        let err = SessionConfig::from_lookup(|k| (k == "SEATMAP_SEED").then(|| "abc".to_string()));
        assert!(matches!(err, Err(Error::InvalidInput(_))));

        let err = SessionConfig::from_lookup(|k| (k == "SEATMAP_SAME_SEX").then(|| "maybe".to_string()));
        assert!(matches!(err, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn arguments_override_environment() {
        let base = SessionConfig {
            seed: Some(1),
            ..SessionConfig::default()
        };
        let command = base
            .with_args(args(&["a.yaml", "b.csv", "--same-sex", "--seed", "9", "--json", "--rounds", "3"]))
            .unwrap();

        let Command::Run(config) = command else {
            panic!("expected run");
        };
        assert_eq!(config.layout_path, PathBuf::from("a.yaml"));
        assert_eq!(config.roster_path, PathBuf::from("b.csv"));
        assert_eq!(config.mode(), ArrangeMode::SameSexAdjacent);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.rounds, 3);
    }

    #[test]
    fn help_and_errors() {
        let config = SessionConfig::default();
        assert_eq!(config.clone().with_args(args(&["--help"])).unwrap(), Command::Help);
        assert!(config.clone().with_args(args(&["--seed"])).is_err());
        assert!(config.clone().with_args(args(&["--rounds", "0"])).is_err());
        assert!(config.clone().with_args(args(&["--bogus"])).is_err());
        assert!(config.with_args(args(&["a", "b", "c"])).is_err());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        use rand::Rng;
        let config = SessionConfig {
            seed: Some(5),
            ..SessionConfig::default()
        };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
