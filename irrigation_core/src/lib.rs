//! # irrigation_core - Irrigation Unit Conversion and Formula Engine
//!
//! `irrigation_core` converts quantities between the units used in irrigation
//! design and evaluates the closed-form formulas behind the common irrigation
//! calculators: application rates, nozzle sizing, pipe hydraulics, pump power
//! and scheduling. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **One constant set**: Every conversion factor is defined once
//! - **No result over a wrong result**: Missing or non-positive inputs give `None`
//! - **Rich Errors**: Unknown units, categories and formulas are structured errors
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use irrigation_core::{convert, evaluate, Quantity};
//!
//! let gpm = convert("Flow Rate", 1.0, "lps", "gpm").unwrap();
//! assert!((gpm - 15.850323).abs() < 1e-5);
//!
//! let mut inputs = BTreeMap::new();
//! inputs.insert("emitter_flow".to_string(), Quantity::new(1.0, "gph"));
//! inputs.insert("row_spacing".to_string(), Quantity::new(30.0, "in"));
//! inputs.insert("emitter_spacing".to_string(), Quantity::new(12.0, "in"));
//! let rate = evaluate("drip_application_rate", &inputs, "in/hr").unwrap().unwrap();
//! assert!((rate.value - 0.609583).abs() < 1e-5);
//! ```
//!
//! ## Modules
//!
//! - [`conversion`] - Unit categories, unit tables and the converter
//! - [`equations`] - Typed formula implementations and the formula registry
//! - [`evaluator`] - Unit-aware formula evaluation from user quantities
//! - [`benchmarks`] - Crop, soil, climate and system baseline tables
//! - [`interpretation`] - Advisory ratings for velocity and friction loss
//! - [`materials`] - Pipe sizes, pipe materials, garden hose flow tables
//! - [`settings`] - Evaluator defaults and constants
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod benchmarks;
pub mod conversion;
pub mod equations;
pub mod errors;
pub mod evaluator;
pub mod interpretation;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use benchmarks::BenchmarkTables;
pub use conversion::{convert, UnitCategory};
pub use equations::Formula;
pub use errors::{CalcError, CalcResult};
pub use evaluator::{evaluate, CalculationRequest, CalculationResult, Evaluator, Quantity};
pub use settings::EvaluatorSettings;
