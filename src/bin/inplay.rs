use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info, warn};

use inplay::domain::{HistoricalAverages, PartialOdds};
use inplay::print::{tabulate_analysis, tabulate_prediction, tabulate_probs};
use inplay::session::MatchSession;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// match report to read; repeat to feed later snapshots of the same match, in order
    #[clap(short = 'f', long = "file")]
    files: Vec<PathBuf>,

    /// pre-match decimal odds, overriding any found in the reports
    #[clap(long, num_args = 3, value_names = ["HOME", "DRAW", "AWAY"])]
    odds: Option<Vec<f64>>,

    /// historical goals: home for, home against, away for, away against
    #[clap(long, num_args = 4, value_names = ["HGF", "HGC", "AGF", "AGC"])]
    averages: Option<Vec<String>>,

    /// print the final session as JSON
    #[clap(long)]
    json: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.files.is_empty() {
            bail!("at least one report must be specified with -f");
        }
        if let Some(odds) = &self.odds {
            if odds.len() != 3 {
                bail!("--odds takes exactly three prices");
            }
        }
        if let Some(averages) = &self.averages {
            if averages.len() != 4 {
                bail!("--averages takes exactly four values");
            }
        }
        Ok(())
    }

    fn partial_odds(&self) -> Option<PartialOdds> {
        self.odds.as_ref().map(|odds| PartialOdds {
            home: Some(odds[0]),
            draw: Some(odds[1]),
            away: Some(odds[2]),
        })
    }

    fn historical_averages(&self) -> Option<HistoricalAverages> {
        self.averages.as_ref().map(|averages| {
            HistoricalAverages::new(
                averages[0].as_str(),
                averages[1].as_str(),
                averages[2].as_str(),
                averages[3].as_str(),
            )
        })
    }
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

    let mut session = MatchSession::default();
    if let Some(averages) = args.historical_averages() {
        session.averages = averages;
        let prediction = session.generate_prediction()?;
        info!("\n{}", Console::default().render(&tabulate_prediction(prediction)));
    }

    for (index, path) in args.files.iter().enumerate() {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        if index == 0 {
            session.autofill(&text)?;
        } else {
            session.advance(&text)?;
        }
        if let Some(odds) = args.partial_odds() {
            session.odds.merge(&odds);
        }

        match session.calculate_probabilities() {
            Ok(_) => info!("\n{}", Console::default().render(&tabulate_probs(&session.odds))),
            Err(err) => warn!("no fair probabilities: {err}"),
        }

        let analysis = *session.update_analysis();
        info!("\n{}", Console::default().render(&tabulate_analysis(&analysis)));
        if let Some(description) = session.describe_performance() {
            info!("\n{description}");
        }
        if let Some(comparison) = session.compare_to_expectation() {
            info!("\n{comparison}");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    }
    Ok(())
}
