//! Sourcing a race field from a CSV file and exporting statistics back out. The
//! ingest follows the conventions of the usual form guides: a header row naming the
//! columns, one of which holds the entrant's name and one the quoted odds; any other
//! column rides along as opaque metadata. Odds that fail to parse are admitted as
//! NaN and weeded out at field admission rather than here.

use std::path::Path;

use anyhow::{anyhow, Context};

use crate::csv::{CsvReader, CsvWriter};
use crate::entrant::Entrant;
use crate::stats::EntrantStatistics;

const NAME_COLUMNS: &[&str] = &["name", "horse", "runner", "entrant"];
const ODDS_COLUMNS: &[&str] = &["odds", "odd", "price"];

/// Reads a race field from `path`. Column order is free and header matching is
/// case-insensitive.
pub fn read_entrants(path: impl AsRef<Path>) -> Result<Vec<Entrant>, anyhow::Error> {
    let path = path.as_ref();
    let mut reader = CsvReader::open(path).with_context(|| format!("cannot open {path:?}"))?;
    let header = reader
        .next()
        .ok_or_else(|| anyhow!("{path:?} is empty"))??;

    let name_col = locate_column(&header, NAME_COLUMNS)
        .ok_or_else(|| anyhow!("no name column among {header:?}"))?;
    let odds_col = locate_column(&header, ODDS_COLUMNS)
        .ok_or_else(|| anyhow!("no odds column among {header:?}"))?;

    let mut entrants = vec![];
    for record in reader {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        let name = record
            .get(name_col)
            .ok_or_else(|| anyhow!("short record {record:?}"))?
            .clone();
        let odds = record
            .get(odds_col)
            .and_then(|odds| odds.parse().ok())
            .unwrap_or(f64::NAN);
        let mut entrant = Entrant::new(name, odds);
        for (column, value) in record.iter().enumerate() {
            if column != name_col && column != odds_col && !value.is_empty() {
                entrant
                    .metadata
                    .insert(header[column].clone(), value.clone());
            }
        }
        entrants.push(entrant);
    }
    Ok(entrants)
}

fn locate_column(header: &[String], candidates: &[&str]) -> Option<usize> {
    header
        .iter()
        .position(|column| candidates.contains(&column.to_lowercase().as_str()))
}

/// Writes the flat statistics table: one record per entrant with its name, win
/// tally, win rate and (in ranked runs) position mean and standard deviation.
pub fn write_statistics(
    path: impl AsRef<Path>,
    statistics: &[EntrantStatistics],
) -> Result<(), anyhow::Error> {
    let mut writer = CsvWriter::create(path)?;
    writer.append(["name", "win_count", "win_rate", "mean_position", "stddev_position"])?;
    for entrant_stats in statistics {
        writer.append([
            entrant_stats.name.clone(),
            entrant_stats.win_count.to_string(),
            format!("{:.6}", entrant_stats.win_rate),
            entrant_stats
                .mean_position
                .map(|mean| format!("{mean:.4}"))
                .unwrap_or_default(),
            entrant_stats
                .stddev_position
                .map(|stddev| format!("{stddev:.4}"))
                .unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
