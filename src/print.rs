//! Stanza tables over the simulation output.

use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};

use crate::leaderboard::Leaderboard;
use crate::model::WinModel;
use crate::stats::EntrantStatistics;

pub fn tabulate_model(model: &WinModel) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(12)).with(Left)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Entrant".into(), "Odds".into(), "Win prob.".into()],
        ));
    for (index, entrant) in model.entrants().iter().enumerate() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                entrant.name.clone().into(),
                format!("{:.2}", entrant.odds).into(),
                format!("{:.3}", model.probs()[index]).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_statistics(statistics: &[EntrantStatistics]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(12)).with(Left)),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(9)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Entrant".into(),
                "Wins".into(),
                "Win %".into(),
                "Mean pos.".into(),
                "Stdev pos.".into(),
            ],
        ));
    for entrant_stats in statistics {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                entrant_stats.name.clone().into(),
                entrant_stats.win_count.to_string().into(),
                format!("{:.2}", entrant_stats.win_rate * 100.0).into(),
                option_cell(entrant_stats.mean_position),
                option_cell(entrant_stats.stddev_position),
            ],
        ));
    }
    table
}

pub fn tabulate_leaderboard(leaderboard: &Leaderboard) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(4)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(12)).with(Left)),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(24)).with(Left)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "#".into(),
                "Entrant".into(),
                "Win %".into(),
                "Detail".into(),
            ],
        ));
    for (index, entry) in leaderboard.entries.iter().enumerate() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                (index + 1).to_string().into(),
                entry.name.clone().into(),
                format!("{:.2}", entry.win_rate * 100.0).into(),
                describe_metadata(entry).into(),
            ],
        ));
    }
    table
}

fn option_cell(value: Option<f64>) -> stanza::table::Cell {
    value
        .map(|value| format!("{value:.3}"))
        .unwrap_or_else(|| "-".into())
        .into()
}

/// Joins the pass-through metadata into a single display string, keyed
/// alphabetically so the rendering is stable across runs.
fn describe_metadata(entry: &EntrantStatistics) -> String {
    let mut pairs: Vec<_> = entry.metadata.iter().collect();
    pairs.sort();
    pairs
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entrant::Entrant;
    use crate::leaderboard;
    use crate::stats::Accumulator;

    fn sample_statistics() -> Vec<EntrantStatistics> {
        let mut acc = Accumulator::new(2, true);
        acc.record(&[0, 1]);
        acc.record(&[1, 0]);
        acc.record(&[0, 1]);
        acc.summarise(&[
            Entrant::new("Boldden", 2.0).with_metadata("Jockey", "T. Piccone"),
            Entrant::new("Overpass", 3.0),
        ])
    }

    #[test]
    fn statistics_table_dimensions() {
        let table = tabulate_statistics(&sample_statistics());
        assert_eq!(5, table.num_cols());
        assert_eq!(3, table.num_rows());
    }

    #[test]
    fn leaderboard_table_dimensions() {
        let statistics = sample_statistics();
        let leaderboard = leaderboard::rank(&statistics, 2).unwrap();
        let table = tabulate_leaderboard(&leaderboard);
        assert_eq!(4, table.num_cols());
        assert_eq!(3, table.num_rows());
    }

    #[test]
    fn metadata_description_is_sorted() {
        let mut statistics = sample_statistics();
        statistics[0]
            .metadata
            .insert("Going".into(), "Soft".into());
        let description = describe_metadata(&statistics[0]);
        assert_eq!("Going: Soft, Jockey: T. Piccone", description);
    }
}
