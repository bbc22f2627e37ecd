use std::env;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::anyhow;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use furlong::data;
use furlong::leaderboard;
use furlong::print;
use furlong::sim::{self, Mode, SimulationConfig};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// CSV file with the race field (name and odds columns; other columns pass through)
    file: Option<PathBuf>,

    /// number of simulated races
    #[clap(short = 't', long, default_value_t = 10_000)]
    trials: u64,

    /// sampling mode
    #[clap(short = 'm', long, value_parser = parse_mode, default_value = "ranked")]
    mode: Mode,

    /// seed for deterministic replay
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// leaderboard size
    #[clap(short = 'p', long, default_value_t = 3)]
    podium: usize,

    /// write the statistics table to a CSV file
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,

    /// write the complete simulation result to a JSON file
    #[clap(long)]
    json: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        self.file
            .as_ref()
            .ok_or(anyhow!("the race field file must be specified"))?;
        Ok(())
    }
}
fn parse_mode(s: &str) -> anyhow::Result<Mode> {
    Mode::from_str(&s.to_lowercase()).map_err(|_| anyhow!("unsupported mode {s}"))
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let entrants = data::read_entrants(args.file.as_ref().unwrap())?;
    info!("sourced a field of {} entrants", entrants.len());

    let config = SimulationConfig {
        trials: args.trials,
        mode: args.mode,
        seed: args.seed,
        podium: args.podium,
    };
    let result = sim::simulate(entrants, &config)?;
    info!(
        "{} trials complete, overround {:.3}",
        config.trials,
        result.model.overround()
    );

    let console = Console::default();
    println!("{}", console.render(&print::tabulate_model(&result.model)));

    let statistics: Vec<_> = result
        .model
        .entrants()
        .iter()
        .map(|entrant| result.statistics[&entrant.name].clone())
        .collect();
    let ordered = leaderboard::rank(&statistics, statistics.len())?;
    println!(
        "{}",
        console.render(&print::tabulate_statistics(&ordered.entries))
    );
    println!(
        "{}",
        console.render(&print::tabulate_leaderboard(&result.leaderboard))
    );
    info!(
        "best bet: {} with {:.2}% of trials won",
        result.best_bet.name,
        result.best_bet.win_rate * 100.0
    );

    if let Some(output) = &args.output {
        data::write_statistics(output, &ordered.entries)?;
        info!("statistics written to {output:?}");
    }
    if let Some(json) = &args.json {
        serde_json::to_writer_pretty(File::create(json)?, &result)?;
        info!("result written to {json:?}");
    }
    Ok(())
}
