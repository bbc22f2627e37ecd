//! Ranking of aggregated statistics into a leaderboard. Entrants are ordered by
//! descending win rate with a stable sort, so exact ties fall back to input order.
//! The board is truncated to the requested size, clamped to the field rather than
//! failing, and its first entry is the best bet.

use serde::Serialize;
use thiserror::Error;

use crate::stats::EntrantStatistics;

pub const DEFAULT_PODIUM: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("no statistics to rank")]
    EmptyStatistics,
}

#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub entries: Vec<EntrantStatistics>,
}
impl Leaderboard {
    pub fn best_bet(&self) -> &EntrantStatistics {
        &self.entries[0]
    }
}

pub fn rank(
    statistics: &[EntrantStatistics],
    size: usize,
) -> Result<Leaderboard, ConfigurationError> {
    if statistics.is_empty() {
        return Err(ConfigurationError::EmptyStatistics);
    }
    let mut entries = statistics.to_vec();
    entries.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));
    entries.truncate(size.clamp(1, statistics.len()));
    Ok(Leaderboard { entries })
}
