// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::{Args, Parser, Subcommand};
use crystal_search::config::CrystalConfig;
use crystal_search::crystal::{CrystalOperator, OperatorOutcome};
use crystal_search::tableau::{Tableau, Weight};
use crystal_search::{generator, Result};
use env_logger::Env;
use log::{error, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "crystal")]
#[command(about = "Semistandard tableaux and crystal graphs of rectangular shapes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every tableau of the configured shape and weight(s), one JSON row per line
    Generate {
        #[command(flatten)]
        params: Params,
    },
    /// Count the tableaux of the configured shape and weight(s)
    Count {
        #[command(flatten)]
        params: Params,
    },
    /// Apply one lowering operator to a tableau
    Apply {
        /// Tableau as nested JSON rows, e.g. "[[1,1],[2,2]]"
        #[arg(short, long)]
        tableau: String,

        /// Operator index i of f_i
        #[arg(short, long)]
        index: u32,

        /// Alphabet size (overrides the configuration)
        #[arg(long)]
        alphabet_size: Option<u32>,
    },
    /// Build the crystal graph and write it as JSON
    Graph {
        #[command(flatten)]
        params: Params,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Shape and weight overrides shared by the enumerating commands.
#[derive(Args)]
struct Params {
    /// Weight as comma-separated counts; repeat for several weights
    #[arg(short, long)]
    weight: Vec<Weight>,

    /// Number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns
    #[arg(long)]
    cols: Option<usize>,

    /// Alphabet size
    #[arg(long)]
    alphabet_size: Option<u32>,
}

impl Params {
    fn apply_to(self, config: &mut CrystalConfig) {
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(alphabet_size) = self.alphabet_size {
            config.alphabet_size = alphabet_size;
        }
        if !self.weight.is_empty() {
            if self.alphabet_size.is_none() {
                config.alphabet_size = self
                    .weight
                    .iter()
                    .map(Weight::alphabet_size)
                    .max()
                    .unwrap_or(config.alphabet_size);
            }
            config.weights = self.weight.into_iter().map(Vec::from).collect();
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Reading configuration from {}", path.display());
            CrystalConfig::from_file(path)?
        }
        None => CrystalConfig::default(),
    };

    match cli.command {
        Commands::Generate { params } => {
            params.apply_to(&mut config);
            run_generate(&config)
        }
        Commands::Count { params } => {
            params.apply_to(&mut config);
            run_count(&config)
        }
        Commands::Apply {
            tableau,
            index,
            alphabet_size,
        } => {
            if let Some(alphabet_size) = alphabet_size {
                config.alphabet_size = alphabet_size;
            }
            run_apply(&config, &tableau, index)
        }
        Commands::Graph { params, output } => {
            params.apply_to(&mut config);
            if let Some(output) = output {
                config.output = output;
            }
            run_graph(&config)
        }
    }
}

fn run_generate(config: &CrystalConfig) -> Result<()> {
    let shape = config.shape()?;
    for weight in config.weights()? {
        let tableaux = generator::generate(&weight, shape);
        for tableau in &tableaux {
            println!("{}", tableau);
        }
        info!("Found {} SSYTs of shape {} and weight {}", tableaux.len(), shape, weight);
    }
    Ok(())
}

fn run_count(config: &CrystalConfig) -> Result<()> {
    let shape = config.shape()?;
    for weight in config.weights()? {
        println!("{}\t{}", weight, generator::count(&weight, shape));
    }
    Ok(())
}

fn run_apply(config: &CrystalConfig, text: &str, index: u32) -> Result<()> {
    let tableau: Tableau = serde_json::from_str(text)?;
    let operator = CrystalOperator::new(index, config.alphabet_size)?;
    match operator.apply(&tableau) {
        OperatorOutcome::Lowered { tableau, cell } => {
            info!("{} changed cell {}", operator, cell);
            println!("{}", tableau);
        }
        OperatorOutcome::Undefined(reason) => {
            println!("{} is undefined on {}: {}", operator, tableau, reason);
        }
    }
    Ok(())
}

fn run_graph(config: &CrystalConfig) -> Result<()> {
    let builder = config.builder()?;
    let weights = config.weights()?;
    info!(
        "Building crystal graph of shape {} over {} weight(s)",
        builder.shape(),
        weights.len()
    );
    let graph = builder.build_union(&weights)?;

    let file = File::create(&config.output)?;
    graph.write_json(BufWriter::new(file))?;

    for (counter, value) in graph.statistics().iter() {
        info!("{}: {}", counter, value);
    }
    info!(
        "Saved {} nodes and {} edges to {}.",
        graph.nodes().len(),
        graph.edges().len(),
        config.output.display()
    );
    Ok(())
}
