//! A seating session: one layout, one roster, one grid rearranged on demand.

use rand::Rng;
use seatmap_arrange::{arrange_grid, ArrangeMode, ArrangeOutcome};
use seatmap_layout::{compile, Grid, Person, SeatingSpec};
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::loader::{load_roster, load_spec};
use crate::Result;

/// Session state.
///
/// The grid is compiled from the spec once and replaced only when the spec
/// changes. Rearranging rewrites occupants in place.
#[derive(Debug, Clone)]
pub struct Session {
    spec: SeatingSpec,
    people: Vec<Person>,
    grid: Grid,
    mode: ArrangeMode,
}

impl Session {
    pub fn new(spec: SeatingSpec, people: Vec<Person>, mode: ArrangeMode) -> Self {
        let grid = compile(&spec);
        Self {
            spec,
            people,
            grid,
            mode,
        }
    }

    /// Load the layout and roster named by `config`.
    pub fn load(config: &SessionConfig) -> Result<Self> {
        let people = load_roster(&config.roster_path)?;
        let spec = load_spec(&config.layout_path)?;
        info!(
            people = people.len(),
            rows = spec.rows,
            columns = spec.columns,
            "session loaded"
        );
        Ok(Self::new(spec, people, config.mode()))
    }

    pub fn spec(&self) -> &SeatingSpec {
        &self.spec
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> ArrangeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ArrangeMode) {
        self.mode = mode;
    }

    /// Replace the spec and recompile. Occupants are discarded.
    pub fn set_spec(&mut self, spec: SeatingSpec) {
        self.grid = compile(&spec);
        self.spec = spec;
    }

    /// Replace the roster. The current arrangement is kept until the next rearrange.
    pub fn set_people(&mut self, people: Vec<Person>) {
        self.people = people;
    }

    /// Reassign everyone. Does nothing and returns `None` with an empty roster.
    pub fn rearrange<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<ArrangeOutcome> {
        if self.people.is_empty() {
            warn!("no people to arrange");
            return None;
        }

        let outcome = arrange_grid(&self.people, &mut self.grid, self.mode, rng);
        if outcome.unseated > 0 {
            warn!(unseated = outcome.unseated, "not enough enabled seats for the roster");
        }
        Some(outcome)
    }
}
