//! End-to-end simulation of a race field: builds the win-probability model, samples
//! the configured number of trials, aggregates them and ranks the leaderboard. This
//! module owns the wiring only; the constituent pieces live in [crate::model],
//! [crate::mc], [crate::stats] and [crate::leaderboard].

use std::time::{SystemTime, UNIX_EPOCH};

use rustc_hash::FxHashMap;
use serde::Serialize;
use strum_macros::{Display, EnumString};
use tinyrand::{Seeded, StdRand};
use tracing::debug;

use crate::entrant::Entrant;
use crate::leaderboard::{self, Leaderboard, DEFAULT_PODIUM};
use crate::mc;
use crate::model::{ValidationError, WinModel};
use crate::stats::{Accumulator, EntrantStatistics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Mode {
    /// Every trial draws a complete finishing order; position statistics are kept.
    Ranked,

    /// Every trial draws only the winner. Cheaper when win rates are all that matter.
    WinnerOnly,
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub trials: u64,
    pub mode: Mode,
    pub seed: Option<u64>,
    pub podium: usize,
}
impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            mode: Mode::Ranked,
            seed: None,
            podium: DEFAULT_PODIUM,
        }
    }
}
impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.trials == 0 {
            return Err(ValidationError::ZeroTrials);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    pub model: WinModel,
    pub statistics: FxHashMap<String, EntrantStatistics>,
    pub leaderboard: Leaderboard,
    pub best_bet: EntrantStatistics,
}

/// Runs a complete simulation. All validation happens before the first trial is
/// drawn; a failed run exposes no partial state. With a fixed `seed` the result is
/// fully reproducible; otherwise the seed is taken from the system clock.
pub fn simulate(
    entrants: Vec<Entrant>,
    config: &SimulationConfig,
) -> Result<SimulationResult, anyhow::Error> {
    config.validate()?;
    let model = WinModel::from_entrants(entrants)?;

    let entrant_count = model.len();
    let ranks = match config.mode {
        Mode::Ranked => entrant_count,
        Mode::WinnerOnly => 1,
    };
    let mut rand = StdRand::seed(config.seed.unwrap_or_else(clock_seed));
    let mut podium = vec![usize::MAX; ranks];
    let mut bitmap = vec![true; entrant_count];
    let mut accumulator = Accumulator::new(entrant_count, config.mode == Mode::Ranked);
    for _ in 0..config.trials {
        mc::run_once(model.probs(), &mut podium, &mut bitmap, &mut rand);
        accumulator.record(&podium);
    }
    debug!(
        "simulated {} {} trials over {entrant_count} entrants",
        config.trials, config.mode
    );

    let statistics = accumulator.summarise(model.entrants());
    let leaderboard = leaderboard::rank(&statistics, config.podium)?;
    let best_bet = leaderboard.best_bet().clone();
    let statistics = statistics
        .into_iter()
        .map(|entrant_stats| (entrant_stats.name.clone(), entrant_stats))
        .collect();
    Ok(SimulationResult {
        model,
        statistics,
        leaderboard,
        best_bet,
    })
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}
