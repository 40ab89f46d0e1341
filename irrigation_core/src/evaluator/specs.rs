//! Input and output declarations for every formula.
//!
//! A [`FormulaSpec`] says which fields a formula reads, the unit category of
//! each, and the working unit the equation function expects. The evaluator
//! converts every supplied quantity into that working unit before computing.

use serde::Serialize;

use crate::conversion::UnitCategory;
use crate::equations::registry::Formula;

use UnitCategory::*;

/// One input field of a formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputSpec {
    /// Field name in the request
    pub field: &'static str,
    /// Unit category the supplied unit must belong to
    pub category: UnitCategory,
    /// Unit the equation function expects
    pub working_unit: &'static str,
    /// Value (in `working_unit`) used when the field is absent
    pub default: Option<f64>,
}

const fn required(field: &'static str, category: UnitCategory, working_unit: &'static str) -> InputSpec {
    InputSpec { field, category, working_unit, default: None }
}

const fn optional(
    field: &'static str,
    category: UnitCategory,
    working_unit: &'static str,
    default: f64,
) -> InputSpec {
    InputSpec { field, category, working_unit, default: Some(default) }
}

/// Inputs and output of one formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormulaSpec {
    pub formula: Formula,
    pub inputs: &'static [InputSpec],
    pub output_category: UnitCategory,
    pub output_working_unit: &'static str,
}

impl FormulaSpec {
    /// Look up an input by field name
    pub fn input(&self, field: &str) -> Option<&'static InputSpec> {
        self.inputs.iter().find(|i| i.field == field)
    }
}

// ============================================================================
// Input Lists
// ============================================================================

const EFFICIENCY: InputSpec = required("efficiency", Efficiency, "decimal");
const FLOW_GPM: InputSpec = required("flow", FlowRate, "gpm");
const AREA_ACRES: InputSpec = required("area", Area, "acre");
const SPRINKLER_SPACING: InputSpec = required("sprinkler_spacing", Distance, "ft");
const LINE_SPACING: InputSpec = required("line_spacing", Distance, "ft");
const SPRINKLER_EFFICIENCY: InputSpec = optional("efficiency", Efficiency, "decimal", 0.80);
const NOZZLE_PRESSURE: InputSpec = required("pressure", Pressure, "psi");
const HEAD: InputSpec = required("head", Pressure, "ft of water");
const ROUGHNESS: InputSpec = required("roughness_c", Dimensionless, "-");

static DRIP_APPLICATION_RATE: &[InputSpec] = &[
    required("emitter_flow", FlowRate, "gph"),
    required("row_spacing", Distance, "in"),
    required("emitter_spacing", Distance, "in"),
    optional("efficiency", Efficiency, "decimal", 0.95),
];

static NOZZLE_FLOW_RATE: &[InputSpec] = &[
    required("nozzle_diameter", Distance, "in"),
    NOZZLE_PRESSURE,
];

static NOZZLE_APPLICATION_RATE: &[InputSpec] = &[
    required("nozzle_diameter", Distance, "in"),
    NOZZLE_PRESSURE,
    SPRINKLER_SPACING,
    LINE_SPACING,
    SPRINKLER_EFFICIENCY,
];

static NOZZLE_FLOW_FOR_APPLICATION_RATE: &[InputSpec] = &[
    required("application_rate", Precipitation, "in/hr"),
    SPRINKLER_SPACING,
    LINE_SPACING,
    SPRINKLER_EFFICIENCY,
];

static NOZZLE_DIAMETER: &[InputSpec] = &[
    required("application_rate", Precipitation, "in/hr"),
    NOZZLE_PRESSURE,
    SPRINKLER_SPACING,
    LINE_SPACING,
    SPRINKLER_EFFICIENCY,
];

static PIPE_FRICTION_LOSS: &[InputSpec] = &[
    required("length", Distance, "ft"),
    FLOW_GPM,
    ROUGHNESS,
    required("diameter", Distance, "in"),
];

static MINIMUM_PIPE_DIAMETER: &[InputSpec] = &[
    FLOW_GPM,
    required("length", Distance, "ft"),
    ROUGHNESS,
    required("max_pressure_loss", Pressure, "psi"),
];

static PIPE_VELOCITY: &[InputSpec] = &[FLOW_GPM, required("diameter", Distance, "in")];

static MINIMUM_DIAMETER_FOR_VELOCITY: &[InputSpec] = &[
    FLOW_GPM,
    optional("design_velocity", Speed, "ft/sec", 5.0),
];

static GARDEN_HOSE_FLOW: &[InputSpec] = &[
    required("hose_diameter", Distance, "in"),
    required("pressure", Pressure, "psi"),
    required("hose_length", Distance, "ft"),
];

static WATER_HORSEPOWER: &[InputSpec] = &[FLOW_GPM, HEAD];

static BRAKE_HORSEPOWER: &[InputSpec] = &[
    FLOW_GPM,
    HEAD,
    required("pump_efficiency", Efficiency, "decimal"),
];

static MOTOR_HORSEPOWER: &[InputSpec] = &[
    FLOW_GPM,
    HEAD,
    required("pump_efficiency", Efficiency, "decimal"),
    required("motor_efficiency", Efficiency, "decimal"),
];

static IRRIGATION_RUN_TIME: &[InputSpec] = &[
    required("interval", Time, "days"),
    required("crop_water_use", Precipitation, "in/day"),
    required("application_rate", Precipitation, "in/hr"),
    EFFICIENCY,
];

static IRRIGATION_FREQUENCY: &[InputSpec] = &[
    required("available_water_capacity", SoilWaterCapacity, "in/ft"),
    required("root_zone_depth", Distance, "ft"),
    required("allowable_depletion", Efficiency, "decimal"),
    required("crop_water_use", Precipitation, "in/day"),
];

static IRRIGATION_SET_TIME: &[InputSpec] = &[
    required("net_application", Distance, "in"),
    AREA_ACRES,
    FLOW_GPM,
    EFFICIENCY,
];

static WATER_DEPTH: &[InputSpec] = &[
    FLOW_GPM,
    required("time", Time, "hr"),
    AREA_ACRES,
    optional("efficiency", Efficiency, "decimal", 1.0),
];

static WATER_APPLICATION_RATE: &[InputSpec] = &[FLOW_GPM, AREA_ACRES];

static IRRIGATABLE_AREA: &[InputSpec] = &[
    FLOW_GPM,
    required("water_need", Precipitation, "in/day"),
    required("operating_hours", Time, "hr"),
    EFFICIENCY,
];

static SYSTEM_FLOW_REQUIREMENT: &[InputSpec] = &[
    required("net_application", Distance, "in"),
    AREA_ACRES,
    required("hours_per_day", Time, "hr"),
    required("days", Time, "days"),
    EFFICIENCY,
];

static FILL_TIME: &[InputSpec] = &[required("volume", Volume, "gal"), FLOW_GPM];

static TOTAL_FLOW: &[InputSpec] = &[
    required("emitter_flow", FlowRate, "gpm"),
    required("emitter_count", Dimensionless, "-"),
];

// ============================================================================
// Formula -> Spec
// ============================================================================

impl Formula {
    /// Inputs, output category and working units of this formula
    pub fn spec(&self) -> FormulaSpec {
        let (inputs, output_category, output_working_unit) = match self {
            Formula::DripApplicationRate => (DRIP_APPLICATION_RATE, Precipitation, "in/hr"),
            Formula::NozzleApplicationRate => (NOZZLE_APPLICATION_RATE, Precipitation, "in/hr"),
            Formula::WaterApplicationRate => (WATER_APPLICATION_RATE, Precipitation, "in/hr"),
            Formula::NozzleFlowRate => (NOZZLE_FLOW_RATE, FlowRate, "gpm"),
            Formula::NozzleFlowForApplicationRate => (NOZZLE_FLOW_FOR_APPLICATION_RATE, FlowRate, "gpm"),
            Formula::NozzleDiameter => (NOZZLE_DIAMETER, Distance, "in"),
            Formula::PipeFrictionLoss => (PIPE_FRICTION_LOSS, Pressure, "psi"),
            Formula::MinimumPipeDiameter => (MINIMUM_PIPE_DIAMETER, Distance, "in"),
            Formula::PipeVelocity => (PIPE_VELOCITY, Speed, "ft/sec"),
            Formula::MinimumDiameterForVelocity => (MINIMUM_DIAMETER_FOR_VELOCITY, Distance, "in"),
            Formula::GardenHoseFlow => (GARDEN_HOSE_FLOW, FlowRate, "gpm"),
            Formula::WaterHorsepower => (WATER_HORSEPOWER, Power, "hp"),
            Formula::BrakeHorsepower => (BRAKE_HORSEPOWER, Power, "hp"),
            Formula::MotorHorsepower => (MOTOR_HORSEPOWER, Power, "hp"),
            Formula::IrrigationRunTime => (IRRIGATION_RUN_TIME, Time, "min"),
            Formula::IrrigationFrequency => (IRRIGATION_FREQUENCY, Time, "days"),
            Formula::IrrigationSetTime => (IRRIGATION_SET_TIME, Time, "hr"),
            Formula::WaterDepth => (WATER_DEPTH, Distance, "in"),
            Formula::IrrigatableArea => (IRRIGATABLE_AREA, Area, "sq. ft."),
            Formula::SystemFlowRequirement => (SYSTEM_FLOW_REQUIREMENT, FlowRate, "gpm"),
            Formula::FillTime => (FILL_TIME, Time, "min"),
            Formula::TotalFlow => (TOTAL_FLOW, FlowRate, "gpm"),
        };
        FormulaSpec {
            formula: *self,
            inputs,
            output_category,
            output_working_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::registry::ALL_FORMULAS;

    #[test]
    fn test_working_units_exist() {
        for formula in ALL_FORMULAS {
            let spec = formula.spec();
            for input in spec.inputs {
                assert!(
                    input.category.unit(input.working_unit).is_ok(),
                    "{}: '{}' is not a {} unit",
                    formula,
                    input.working_unit,
                    input.category
                );
            }
            assert!(spec.output_category.unit(spec.output_working_unit).is_ok());
        }
    }

    #[test]
    fn test_fields_unique() {
        for formula in ALL_FORMULAS {
            let spec = formula.spec();
            for (i, a) in spec.inputs.iter().enumerate() {
                for b in &spec.inputs[i + 1..] {
                    assert_ne!(a.field, b.field, "{} repeats '{}'", formula, a.field);
                }
            }
        }
    }

    #[test]
    fn test_input_lookup() {
        let spec = Formula::DripApplicationRate.spec();
        assert_eq!(spec.input("efficiency").and_then(|i| i.default), Some(0.95));
        assert!(spec.input("pressure").is_none());
    }
}
