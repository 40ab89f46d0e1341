use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Irrigation unit converter and formula calculator.
#[derive(Parser)]
#[command(
    name = "irrigation",
    version,
    about = "Irrigation unit conversion and formula calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON file overriding evaluator settings.
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// JSON file replacing the built-in benchmark tables.
    #[arg(long, global = true)]
    pub benchmarks: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a value between two units of one category.
    Convert {
        /// Unit category (e.g. "Flow Rate", flow_rate)
        category: String,
        value: f64,
        from: String,
        to: String,
    },
    /// Evaluate a formula.
    Eval(EvalArgs),
    /// List formulas, or print the formula reference as markdown.
    Formulas {
        #[arg(long)]
        markdown: bool,
    },
    /// List unit categories, or the units of one category.
    Units { category: Option<String> },
    /// Build and evaluate a request from benchmark tables.
    #[command(subcommand)]
    Baseline(BaselineCommand),
}

/// Arguments for the `eval` subcommand.
#[derive(clap::Args)]
pub struct EvalArgs {
    /// Formula id (see `formulas`).
    #[arg(required_unless_present = "request")]
    pub formula: Option<String>,

    /// Input as field=value:unit. Repeatable.
    #[arg(short, long = "input", value_name = "FIELD=VALUE:UNIT")]
    pub inputs: Vec<String>,

    /// Output unit; defaults to the formula's working unit.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Pipe material, fills roughness_c when not given as an input.
    #[arg(long)]
    pub material: Option<String>,

    /// JSON file holding a whole request.
    #[arg(long, conflicts_with_all = ["formula", "inputs", "output"])]
    pub request: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum BaselineCommand {
    /// Run time per irrigation for a crop, climate and system.
    RunTime {
        #[arg(long)]
        crop: String,
        #[arg(long)]
        climate: String,
        #[arg(long)]
        system: String,
        /// Application rate (in/hr) for systems with no typical value.
        #[arg(long)]
        application_rate: Option<f64>,
    },
    /// Days between irrigations for a soil, crop and climate.
    Frequency {
        #[arg(long)]
        soil: String,
        #[arg(long)]
        crop: String,
        #[arg(long)]
        climate: String,
    },
    /// Target net depth per irrigation for a crop on a soil.
    Depth {
        #[arg(long)]
        crop: String,
        #[arg(long)]
        soil: String,
    },
}
