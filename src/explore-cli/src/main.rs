//! Explore — compute an exploration distribution from the command line.
//!
//! Runs one generator (optionally followed by a minimum-probability pass) and
//! prints the resulting PDF as JSON on stdout. Logs go to stderr.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use explore_core::config::ExploreConfig;
use explore_pdf::{ExplorationRequest, ExplorationStrategy, MinimumProbability, Status};
use serde::Serialize;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "explore")]
#[command(about = "Compute exploration probability distributions over a set of actions")]
#[command(version)]
struct Cli {
    /// TOML config file (environment variables with prefix EXPLORE__ override it)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the uniform-exploration threshold
    #[arg(long, global = true)]
    uniform_threshold: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Favor one action, spread epsilon uniformly
    EpsilonGreedy {
        #[arg(long)]
        num_actions: usize,

        #[arg(long)]
        epsilon: f64,

        /// Preferred action (clamped to the last action)
        #[arg(long)]
        top_action: usize,

        #[command(flatten)]
        floor: FloorArgs,
    },

    /// Softmax over comma-separated scores
    Softmax {
        #[arg(long, allow_negative_numbers = true)]
        lambda: f64,

        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        scores: Vec<f64>,

        /// Output length (defaults to the number of scores)
        #[arg(long)]
        num_actions: Option<usize>,

        #[command(flatten)]
        floor: FloorArgs,
    },

    /// Ensemble vote counts to vote shares
    Bag {
        #[arg(long, value_delimiter = ',')]
        votes: Vec<u32>,

        /// Output length (defaults to the number of vote counts)
        #[arg(long)]
        num_actions: Option<usize>,

        #[command(flatten)]
        floor: FloorArgs,
    },

    /// Run an ExplorationRequest read as JSON from a file or stdin
    Request {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct FloorArgs {
    /// Total probability mass to spread as a floor over eligible actions
    #[arg(long)]
    min_prob: Option<f64>,

    /// Let actions currently at zero receive floor mass
    #[arg(long, default_value_t = false)]
    update_zero_elements: bool,
}

impl FloorArgs {
    fn into_floor(self) -> Option<MinimumProbability> {
        self.min_prob
            .map(|p| MinimumProbability::new(p, self.update_zero_elements))
    }
}

#[derive(Serialize)]
struct Output<'a> {
    strategy: &'a str,
    status: i32,
    pdf: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn build_request(command: Commands) -> anyhow::Result<ExplorationRequest> {
    let request = match command {
        Commands::EpsilonGreedy {
            num_actions,
            epsilon,
            top_action,
            floor,
        } => ExplorationRequest {
            strategy: ExplorationStrategy::EpsilonGreedy {
                epsilon,
                top_action,
            },
            num_actions,
            min_probability: floor.into_floor(),
        },
        Commands::Softmax {
            lambda,
            scores,
            num_actions,
            floor,
        } => ExplorationRequest {
            num_actions: num_actions.unwrap_or(scores.len()),
            strategy: ExplorationStrategy::Softmax { lambda, scores },
            min_probability: floor.into_floor(),
        },
        Commands::Bag {
            votes,
            num_actions,
            floor,
        } => ExplorationRequest {
            num_actions: num_actions.unwrap_or(votes.len()),
            strategy: ExplorationStrategy::Bag { vote_counts: votes },
            min_probability: floor.into_floor(),
        },
        Commands::Request { input } => {
            let raw = match &input {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("reading request from {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading request from stdin")?;
                    buf
                }
            };
            serde_json::from_str(&raw).context("parsing exploration request")?
        }
    };
    Ok(request)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "explore=info,explore_pdf=info".into()),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    let mut config = ExploreConfig::load_from(cli.config.as_deref()).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        ExploreConfig::default()
    });
    if let Some(uniform) = cli.uniform_threshold {
        config.thresholds.uniform = uniform;
    }

    let request = build_request(cli.command)?;
    info!(
        strategy = request.strategy.name(),
        num_actions = request.num_actions,
        floor = request.min_probability.is_some(),
        "Running exploration request"
    );

    let result = request.run(&config.thresholds);
    let status = Status::from(&result);
    let output = match result {
        Ok(pdf) => Output {
            strategy: request.strategy.name(),
            status: status.code(),
            pdf,
            error: None,
        },
        Err(e) => {
            error!(error = %e, status = status.code(), "Exploration request failed");
            Output {
                strategy: request.strategy.name(),
                status: status.code(),
                pdf: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    };

    println!("{}", serde_json::to_string(&output)?);

    if !status.is_ok() {
        std::process::exit(status.code());
    }
    Ok(())
}
