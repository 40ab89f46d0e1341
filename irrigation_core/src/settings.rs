//! # Evaluator Settings
//!
//! Defaults and constants that vary between calculators but are not user
//! inputs. Every field has a serde default, so a partial JSON file overrides
//! only what it names.
//!
//! ```rust
//! use irrigation_core::settings::{EvaluatorSettings, FlowBasis};
//!
//! let settings = EvaluatorSettings::from_json(r#"{ "water_depth_basis": "cfs" }"#).unwrap();
//! assert_eq!(settings.water_depth_basis, FlowBasis::Cfs);
//! assert_eq!(settings.nozzle_discharge_coefficient, 0.97);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

/// Unit the water depth formula takes its flow in, and the matching constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlowBasis {
    /// Flow in gpm, K = 453
    #[default]
    Gpm,
    /// Flow in cfs, K = 1.01
    Cfs,
}

impl FlowBasis {
    /// Flow Rate unit label
    pub fn unit_label(&self) -> &'static str {
        match self {
            FlowBasis::Gpm => "gpm",
            FlowBasis::Cfs => "cfs",
        }
    }

    /// K in d = Q·T / (K·A)
    pub fn depth_constant(&self) -> f64 {
        match self {
            FlowBasis::Gpm => 453.0,
            FlowBasis::Cfs => 1.01,
        }
    }
}

fn default_drip_efficiency() -> f64 {
    0.95
}

fn default_sprinkler_efficiency() -> f64 {
    0.80
}

fn default_nozzle_discharge_coefficient() -> f64 {
    0.97
}

fn default_design_velocity() -> f64 {
    5.0
}

fn default_motor_margin() -> f64 {
    1.10
}

/// Evaluator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorSettings {
    /// Efficiency used by the drip formula when none is supplied (decimal)
    #[serde(default = "default_drip_efficiency")]
    pub drip_efficiency: f64,
    /// Efficiency used by the sprinkler formulas when none is supplied (decimal)
    #[serde(default = "default_sprinkler_efficiency")]
    pub sprinkler_efficiency: f64,
    /// Orifice discharge coefficient C
    #[serde(default = "default_nozzle_discharge_coefficient")]
    pub nozzle_discharge_coefficient: f64,
    /// Velocity used to size a pipe when none is supplied (ft/sec)
    #[serde(default = "default_design_velocity")]
    pub design_velocity: f64,
    /// Multiplier applied before picking a standard motor size
    #[serde(default = "default_motor_margin")]
    pub motor_margin: f64,
    /// Flow basis of the water depth formula
    #[serde(default)]
    pub water_depth_basis: FlowBasis,
}

impl Default for EvaluatorSettings {
    fn default() -> Self {
        Self {
            drip_efficiency: default_drip_efficiency(),
            sprinkler_efficiency: default_sprinkler_efficiency(),
            nozzle_discharge_coefficient: default_nozzle_discharge_coefficient(),
            design_velocity: default_design_velocity(),
            motor_margin: default_motor_margin(),
            water_depth_basis: FlowBasis::default(),
        }
    }
}

impl EvaluatorSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = EvaluatorSettings::default();
        assert_eq!(s.drip_efficiency, 0.95);
        assert_eq!(s.design_velocity, 5.0);
        assert_eq!(s.motor_margin, 1.10);
        assert_eq!(s.water_depth_basis, FlowBasis::Gpm);
    }

    #[test]
    fn test_empty_json_is_default() {
        let s = EvaluatorSettings::from_json("{}").unwrap();
        assert_eq!(s, EvaluatorSettings::default());
    }

    #[test]
    fn test_partial_override() {
        let s = EvaluatorSettings::from_json(r#"{ "drip_efficiency": 0.9 }"#).unwrap();
        assert_eq!(s.drip_efficiency, 0.9);
        assert_eq!(s.nozzle_discharge_coefficient, 0.97);
    }

    #[test]
    fn test_bad_json() {
        let err = EvaluatorSettings::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_flow_basis() {
        assert_eq!(FlowBasis::Gpm.depth_constant(), 453.0);
        assert_eq!(FlowBasis::Cfs.unit_label(), "cfs");
    }
}
