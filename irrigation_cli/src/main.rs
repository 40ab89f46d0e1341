//! # Irrigation CLI
//!
//! Command line front end to `irrigation_core`. Results are printed as JSON;
//! an evaluation with incomplete or non-positive input prints `null`.

mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use irrigation_core::{CalcError, Evaluator};

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        match e.downcast_ref::<CalcError>() {
            Some(calc) => {
                let body = json!({ "code": calc.error_code(), "error": calc, "message": calc.to_string() });
                println!("{}", serde_json::to_string_pretty(&body).unwrap_or_else(|_| calc.to_string()));
                process::exit(exit_code(calc));
            }
            None => {
                eprintln!("Error: {e:#}");
                process::exit(1);
            }
        }
    }
}

/// 2 for an unknown unit, category, formula or benchmark key; 3 for bad data
fn exit_code(error: &CalcError) -> i32 {
    if error.is_configuration_error() {
        2
    } else {
        3
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Convert { category, value, from, to } => commands::convert_cmd(&category, value, &from, &to),
        Command::Units { category } => commands::units_cmd(category.as_deref()),
        Command::Formulas { markdown } => commands::formulas_cmd(markdown),
        Command::Eval(args) => {
            let settings = commands::load_settings(cli.settings.as_deref())?;
            commands::eval_cmd(&args, &Evaluator::new(settings))
        }
        Command::Baseline(command) => {
            let settings = commands::load_settings(cli.settings.as_deref())?;
            let tables = commands::load_benchmarks(cli.benchmarks.as_deref())?;
            commands::baseline_cmd(&command, &tables, &Evaluator::new(settings))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&CalcError::unknown_unit("Flow Rate", "gpx")), 2);
        assert_eq!(exit_code(&CalcError::unknown_benchmark("crop", "kelp")), 2);
        let bad_json = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        assert_eq!(exit_code(&CalcError::from(bad_json)), 3);
    }
}
