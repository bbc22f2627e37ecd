//! Accumulation of trial outcomes into per-entrant statistics. Wins are tallied for
//! every mode; finishing positions are recorded only when full orders are being
//! sampled. Tallies from independently run batches combine through [Accumulator::merge],
//! an element-wise summation that is commutative and associative, so a parallel
//! reduction arrives at the same statistics as a sequential run.

use serde::Serialize;

use crate::entrant::{Entrant, Metadata};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntrantStatistics {
    pub name: String,
    pub win_count: u64,
    pub win_rate: f64,
    pub mean_position: Option<f64>,
    pub stddev_position: Option<f64>,
    pub positions: Vec<u32>,
    pub metadata: Metadata,
}

#[derive(Debug, Clone)]
pub struct Accumulator {
    wins: Vec<u64>,
    positions: Vec<Vec<u32>>,
    track_positions: bool,
    trials: u64,
}
impl Accumulator {
    pub fn new(entrants: usize, track_positions: bool) -> Self {
        Self {
            wins: vec![0; entrants],
            positions: vec![vec![]; entrants],
            track_positions,
            trials: 0,
        }
    }

    /// Folds in one trial's podium. The entrant at rank 0 is credited with the win;
    /// with position tracking on, every ranked entrant has its 1-based finishing
    /// position appended.
    pub fn record(&mut self, podium: &[usize]) {
        debug_assert!(!podium.is_empty());
        self.trials += 1;
        self.wins[podium[0]] += 1;
        if self.track_positions {
            for (rank, &entrant) in podium.iter().enumerate() {
                self.positions[entrant].push(rank as u32 + 1);
            }
        }
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Combines another accumulator into this one. Positions recorded by `other` are
    /// appended, so the merged sequences may interleave batches in a different order
    /// than a sequential run would have produced; the derived statistics are
    /// unaffected.
    pub fn merge(&mut self, other: Accumulator) {
        debug_assert_eq!(self.wins.len(), other.wins.len());
        debug_assert_eq!(self.track_positions, other.track_positions);
        for (wins, other_wins) in self.wins.iter_mut().zip(other.wins) {
            *wins += other_wins;
        }
        for (positions, other_positions) in self.positions.iter_mut().zip(other.positions) {
            positions.extend(other_positions);
        }
        self.trials += other.trials;
    }

    /// Closes out the accumulation, pairing each tally with its entrant. Mean and
    /// standard deviation are computed over the full recorded positions sequence
    /// (population form, divisor = trial count) and are absent when positions were
    /// not tracked.
    pub fn summarise(&self, entrants: &[Entrant]) -> Vec<EntrantStatistics> {
        debug_assert_eq!(self.wins.len(), entrants.len());
        debug_assert!(self.trials > 0);
        entrants
            .iter()
            .enumerate()
            .map(|(index, entrant)| {
                let positions = self.positions[index].clone();
                let (mean_position, stddev_position) = if self.track_positions {
                    let (mean, stddev) = mean_and_stddev(&positions);
                    (Some(mean), Some(stddev))
                } else {
                    (None, None)
                };
                EntrantStatistics {
                    name: entrant.name.clone(),
                    win_count: self.wins[index],
                    win_rate: self.wins[index] as f64 / self.trials as f64,
                    mean_position,
                    stddev_position,
                    positions,
                    metadata: entrant.metadata.clone(),
                }
            })
            .collect()
    }
}

fn mean_and_stddev(positions: &[u32]) -> (f64, f64) {
    let count = positions.len() as f64;
    let mean = positions.iter().map(|&position| position as f64).sum::<f64>() / count;
    let variance = positions
        .iter()
        .map(|&position| {
            let deviation = position as f64 - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / count;
    (mean, variance.sqrt())
}
