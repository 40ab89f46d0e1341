//! # Irrigation Equations
//!
//! Every closed-form formula the calculators use, in one place, written
//! against the typed working units of [`crate::units`]. Having them together
//! enables:
//! - Verification of each empirical constant against its reference
//! - One implementation per formula instead of one per screen
//! - Generated documentation (FORMULAS.md) from the same source
//!
//! ## Modules
//!
//! - [`application`] - Application rates, depths, scheduling, system capacity
//! - [`hydraulics`] - Pipe friction, velocity, nozzles, hoses
//! - [`pump`] - Water, brake and motor horsepower, motor sizing
//! - [`registry`] - Formula identifiers and metadata
//!
//! None of these functions validate their arguments. The evaluator rejects
//! non-positive inputs before calling them.

pub mod application;
pub mod hydraulics;
pub mod pump;
pub mod registry;

pub use application::{
    area_application_rate,
    drip_application_rate,
    irrigatable_area,
    irrigation_frequency,
    irrigation_run_time,
    irrigation_set_time,
    sprinkler_application_rate,
    sprinkler_flow_for_rate,
    system_flow_requirement,
    water_depth,
};

pub use hydraulics::{
    diameter_for_velocity,
    fill_time,
    garden_hose_flow,
    hazen_williams_loss,
    minimum_pipe_diameter,
    nozzle_diameter,
    nozzle_flow,
    pipe_velocity,
    total_flow,
};

pub use pump::{
    brake_horsepower,
    horsepower_chain,
    motor_horsepower,
    recommended_motor_size,
    water_horsepower,
    PumpPower,
};

pub use registry::{
    Formula,
    FormulaCategory,
    FormulaMetadata,
    Reference,
    Variable,
    ALL_FORMULAS,
    generate_formulas_markdown,
};
