//! # Formula Evaluator
//!
//! Runs one named formula on quantities given in any supported units:
//!
//! 1. Resolve the formula and the requested output unit
//! 2. Convert each input to its working unit (or take its default)
//! 3. Reject missing, non-finite or non-positive values with `Ok(None)`
//! 4. Compute in working units
//! 5. Convert the result to the output unit
//!
//! Configuration mistakes (unknown formula, unknown unit) are `Err`. Incomplete
//! user input is `Ok(None)` so a form can re-evaluate on every keystroke.
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::evaluator::{CalculationRequest, Evaluator};
//!
//! let request = CalculationRequest::new("pipe_velocity", "ft/sec")
//!     .with_input("flow", 100.0, "gpm")
//!     .with_input("diameter", 4.026, "in");
//!
//! let result = Evaluator::default().evaluate_request(&request).unwrap().unwrap();
//! assert!((result.value - 2.517).abs() < 1e-3);
//!
//! // Missing diameter: no result, not an error
//! let partial = CalculationRequest::new("pipe_velocity", "ft/sec").with_input("flow", 100.0, "gpm");
//! assert!(Evaluator::default().evaluate_request(&partial).unwrap().is_none());
//! ```

mod specs;

pub use specs::{FormulaSpec, InputSpec};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::equations::{
    application, hydraulics, pump,
    registry::Formula,
};
use crate::errors::CalcResult;
use crate::settings::EvaluatorSettings;
use crate::units::{
    Acres, Days, Feet, FeetOfHead, FtPerSec, Gallons, Gph, Gpm, Hours, InPerDay, InPerFt, InPerHr, Inches, Psi,
};

// ============================================================================
// Request / Result
// ============================================================================

/// A raw number with the unit label it was entered in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self { value, unit: unit.into() }
    }
}

/// One evaluation: formula id, inputs by field name, and the output unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub formula: String,
    #[serde(default)]
    pub inputs: BTreeMap<String, Quantity>,
    pub output_unit: String,
}

impl CalculationRequest {
    pub fn new(formula: impl Into<String>, output_unit: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
            inputs: BTreeMap::new(),
            output_unit: output_unit.into(),
        }
    }

    /// Add or replace an input
    pub fn with_input(mut self, field: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        self.inputs.insert(field.into(), Quantity::new(value, unit));
        self
    }
}

/// The value of a successful evaluation, in the requested output unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub value: f64,
}

// ============================================================================
// Evaluator
// ============================================================================

/// Inputs after conversion to working units
struct WorkingValues(BTreeMap<&'static str, f64>);

impl WorkingValues {
    /// Every spec field is present after normalization; a miss yields NaN,
    /// which the result check turns into no result.
    fn get(&self, field: &str) -> f64 {
        self.0.get(field).copied().unwrap_or(f64::NAN)
    }
}

/// Formula evaluator bound to one set of settings
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    settings: EvaluatorSettings,
}

impl Evaluator {
    pub fn new(settings: EvaluatorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EvaluatorSettings {
        &self.settings
    }

    /// Evaluate a formula by id.
    ///
    /// # Errors
    ///
    /// `UnknownFormula` for an unregistered id; `UnknownUnit` when the output
    /// unit or a supplied input unit is not in the expected category.
    pub fn evaluate(
        &self,
        formula: &str,
        inputs: &BTreeMap<String, Quantity>,
        output_unit: &str,
    ) -> CalcResult<Option<CalculationResult>> {
        let formula: Formula = formula.parse()?;
        self.evaluate_formula(formula, inputs, output_unit)
    }

    /// Evaluate a [`CalculationRequest`]
    pub fn evaluate_request(&self, request: &CalculationRequest) -> CalcResult<Option<CalculationResult>> {
        self.evaluate(&request.formula, &request.inputs, &request.output_unit)
    }

    /// Evaluate a formula already resolved to its enum
    pub fn evaluate_formula(
        &self,
        formula: Formula,
        inputs: &BTreeMap<String, Quantity>,
        output_unit: &str,
    ) -> CalcResult<Option<CalculationResult>> {
        let spec = formula.spec();

        // Output unit first so a bad label fails even with incomplete input
        let output = spec.output_category.unit(output_unit)?;
        let working_output = spec.output_category.unit(spec.output_working_unit)?;

        let values = match self.normalize(&spec, inputs)? {
            Some(values) => values,
            None => return Ok(None),
        };

        let value = match self.compute(formula, &values) {
            Some(v) if v.is_finite() && v >= 0.0 => v,
            other => {
                debug!(formula = formula.id(), result = ?other, "no result: computed value out of range");
                return Ok(None);
            }
        };

        let converted = output.from_base(working_output.to_base(value));
        trace!(formula = formula.id(), value, output = output.label, converted, "evaluated");
        Ok(Some(CalculationResult { value: converted }))
    }

    /// Working unit of an input, after settings overrides
    pub fn working_unit(&self, formula: Formula, input: &InputSpec) -> &'static str {
        match (formula, input.field) {
            (Formula::WaterDepth, "flow") => self.settings.water_depth_basis.unit_label(),
            _ => input.working_unit,
        }
    }

    /// Default of an input (in its working unit), after settings overrides
    pub fn default_value(&self, formula: Formula, input: &InputSpec) -> Option<f64> {
        match (formula, input.field) {
            (Formula::DripApplicationRate, "efficiency") => Some(self.settings.drip_efficiency),
            (
                Formula::NozzleApplicationRate
                | Formula::NozzleFlowForApplicationRate
                | Formula::NozzleDiameter,
                "efficiency",
            ) => Some(self.settings.sprinkler_efficiency),
            (Formula::MinimumDiameterForVelocity, "design_velocity") => Some(self.settings.design_velocity),
            _ => input.default,
        }
    }

    /// Convert every input to its working unit.
    ///
    /// Unit labels are resolved for every supplied input before any value is
    /// judged, so an unknown unit is reported even when another field is
    /// still empty.
    fn normalize(
        &self,
        spec: &FormulaSpec,
        inputs: &BTreeMap<String, Quantity>,
    ) -> CalcResult<Option<WorkingValues>> {
        let mut resolved = Vec::with_capacity(spec.inputs.len());
        for input in spec.inputs {
            let working = input.category.unit(self.working_unit(spec.formula, input))?;
            let value = match inputs.get(input.field) {
                Some(quantity) => {
                    let unit = input.category.unit(&quantity.unit)?;
                    Some(working.from_base(unit.to_base(quantity.value)))
                }
                None => self.default_value(spec.formula, input),
            };
            resolved.push((input.field, value));
        }

        let mut values = BTreeMap::new();
        for (field, value) in resolved {
            match value {
                Some(v) if v.is_finite() && v > 0.0 => {
                    values.insert(field, v);
                }
                Some(v) => {
                    debug!(formula = spec.formula.id(), field, value = v, "no result: input not positive");
                    return Ok(None);
                }
                None => {
                    debug!(formula = spec.formula.id(), field, "no result: input missing");
                    return Ok(None);
                }
            }
        }
        Ok(Some(WorkingValues(values)))
    }

    fn compute(&self, formula: Formula, v: &WorkingValues) -> Option<f64> {
        let c = self.settings.nozzle_discharge_coefficient;
        let value = match formula {
            Formula::DripApplicationRate => {
                application::drip_application_rate(
                    Gph(v.get("emitter_flow")),
                    Inches(v.get("row_spacing")),
                    Inches(v.get("emitter_spacing")),
                    v.get("efficiency"),
                )
                .0
            }
            Formula::NozzleApplicationRate => {
                let q = hydraulics::nozzle_flow(Inches(v.get("nozzle_diameter")), Psi(v.get("pressure")), c);
                application::sprinkler_application_rate(
                    q,
                    Feet(v.get("sprinkler_spacing")),
                    Feet(v.get("line_spacing")),
                    v.get("efficiency"),
                )
                .0
            }
            Formula::WaterApplicationRate => {
                application::area_application_rate(Gpm(v.get("flow")), Acres(v.get("area"))).0
            }
            Formula::NozzleFlowRate => {
                hydraulics::nozzle_flow(Inches(v.get("nozzle_diameter")), Psi(v.get("pressure")), c).0
            }
            Formula::NozzleFlowForApplicationRate => {
                application::sprinkler_flow_for_rate(
                    InPerHr(v.get("application_rate")),
                    Feet(v.get("sprinkler_spacing")),
                    Feet(v.get("line_spacing")),
                    v.get("efficiency"),
                )
                .0
            }
            Formula::NozzleDiameter => {
                let q = application::sprinkler_flow_for_rate(
                    InPerHr(v.get("application_rate")),
                    Feet(v.get("sprinkler_spacing")),
                    Feet(v.get("line_spacing")),
                    v.get("efficiency"),
                );
                hydraulics::nozzle_diameter(q, Psi(v.get("pressure")), c).0
            }
            Formula::PipeFrictionLoss => {
                hydraulics::hazen_williams_loss(
                    Feet(v.get("length")),
                    Gpm(v.get("flow")),
                    v.get("roughness_c"),
                    Inches(v.get("diameter")),
                )
                .0
            }
            Formula::MinimumPipeDiameter => {
                hydraulics::minimum_pipe_diameter(
                    Gpm(v.get("flow")),
                    Feet(v.get("length")),
                    v.get("roughness_c"),
                    Psi(v.get("max_pressure_loss")),
                )
                .0
            }
            Formula::PipeVelocity => hydraulics::pipe_velocity(Gpm(v.get("flow")), Inches(v.get("diameter"))).0,
            Formula::MinimumDiameterForVelocity => {
                hydraulics::diameter_for_velocity(Gpm(v.get("flow")), FtPerSec(v.get("design_velocity"))).0
            }
            Formula::GardenHoseFlow => {
                hydraulics::garden_hose_flow(
                    Inches(v.get("hose_diameter")),
                    Psi(v.get("pressure")),
                    Feet(v.get("hose_length")),
                )?
                .0
            }
            Formula::WaterHorsepower => pump::water_horsepower(Gpm(v.get("flow")), FeetOfHead(v.get("head"))).0,
            Formula::BrakeHorsepower => {
                let whp = pump::water_horsepower(Gpm(v.get("flow")), FeetOfHead(v.get("head")));
                pump::brake_horsepower(whp, v.get("pump_efficiency")).0
            }
            Formula::MotorHorsepower => {
                pump::horsepower_chain(
                    Gpm(v.get("flow")),
                    FeetOfHead(v.get("head")),
                    v.get("pump_efficiency"),
                    v.get("motor_efficiency"),
                )
                .motor_hp
                .0
            }
            Formula::IrrigationRunTime => {
                application::irrigation_run_time(
                    Days(v.get("interval")),
                    InPerDay(v.get("crop_water_use")),
                    InPerHr(v.get("application_rate")),
                    v.get("efficiency"),
                )
                .0
            }
            Formula::IrrigationFrequency => {
                application::irrigation_frequency(
                    InPerFt(v.get("available_water_capacity")),
                    Feet(v.get("root_zone_depth")),
                    v.get("allowable_depletion"),
                    InPerDay(v.get("crop_water_use")),
                )
                .0
            }
            Formula::IrrigationSetTime => {
                application::irrigation_set_time(
                    Inches(v.get("net_application")),
                    Acres(v.get("area")),
                    Gpm(v.get("flow")),
                    v.get("efficiency"),
                )
                .0
            }
            Formula::WaterDepth => {
                application::water_depth(
                    v.get("flow"),
                    Hours(v.get("time")),
                    Acres(v.get("area")),
                    self.settings.water_depth_basis.depth_constant(),
                    v.get("efficiency"),
                )
                .0
            }
            Formula::IrrigatableArea => {
                application::irrigatable_area(
                    Gpm(v.get("flow")),
                    InPerDay(v.get("water_need")),
                    Hours(v.get("operating_hours")),
                    v.get("efficiency"),
                )
                .0
            }
            Formula::SystemFlowRequirement => {
                application::system_flow_requirement(
                    Inches(v.get("net_application")),
                    Acres(v.get("area")),
                    Hours(v.get("hours_per_day")),
                    Days(v.get("days")),
                    v.get("efficiency"),
                )
                .0
            }
            Formula::FillTime => hydraulics::fill_time(Gallons(v.get("volume")), Gpm(v.get("flow"))).0,
            Formula::TotalFlow => hydraulics::total_flow(Gpm(v.get("emitter_flow")), v.get("emitter_count")).0,
        };
        Some(value)
    }
}

/// Evaluate with default settings.
///
/// This is the plain function-call boundary: formula id, inputs by field, and
/// output unit in; a value, no result, or a configuration error out.
pub fn evaluate(
    formula: &str,
    inputs: &BTreeMap<String, Quantity>,
    output_unit: &str,
) -> CalcResult<Option<CalculationResult>> {
    Evaluator::default().evaluate(formula, inputs, output_unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::settings::FlowBasis;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        ((a - b) / b).abs() < tol
    }

    fn value(request: &CalculationRequest) -> f64 {
        Evaluator::default().evaluate_request(request).unwrap().unwrap().value
    }

    #[test]
    fn test_drip_default_efficiency() {
        let request = CalculationRequest::new("drip_application_rate", "in/hr")
            .with_input("emitter_flow", 1.0, "gph")
            .with_input("row_spacing", 30.0, "in")
            .with_input("emitter_spacing", 12.0, "in");
        assert!(approx_eq(value(&request), 0.609_583, 1e-6));
    }

    #[test]
    fn test_inputs_in_other_units() {
        // 2.5 ft rows and 1 ft emitter spacing are the same grid as 30" x 12"
        let request = CalculationRequest::new("drip_application_rate", "mm/hr")
            .with_input("emitter_flow", 1.0, "gph")
            .with_input("row_spacing", 2.5, "ft")
            .with_input("emitter_spacing", 1.0, "ft")
            .with_input("efficiency", 95.0, "%");
        assert!(approx_eq(value(&request), 0.609_583 * 25.4, 1e-6));
    }

    #[test]
    fn test_unknown_formula() {
        let err = evaluate("pipe_magic", &BTreeMap::new(), "psi").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_FORMULA");
    }

    #[test]
    fn test_unknown_output_unit_with_empty_inputs() {
        let err = evaluate("pipe_velocity", &BTreeMap::new(), "furlongs/fortnight").unwrap_err();
        assert_eq!(err, CalcError::unknown_unit("Speed", "furlongs/fortnight"));
    }

    #[test]
    fn test_unknown_input_unit() {
        let request = CalculationRequest::new("pipe_velocity", "ft/sec").with_input("flow", 100.0, "barrels");
        let err = Evaluator::default().evaluate_request(&request).unwrap_err();
        assert_eq!(err, CalcError::unknown_unit("Flow Rate", "barrels"));
    }

    #[test]
    fn test_input_unit_from_wrong_category() {
        let request = CalculationRequest::new("pipe_velocity", "ft/sec")
            .with_input("flow", 100.0, "gpm")
            .with_input("diameter", 4.0, "psi");
        assert!(Evaluator::default().evaluate_request(&request).is_err());
    }

    #[test]
    fn test_zero_and_negative_inputs() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let request = CalculationRequest::new("pipe_velocity", "ft/sec")
                .with_input("flow", 100.0, "gpm")
                .with_input("diameter", bad, "in");
            assert_eq!(Evaluator::default().evaluate_request(&request).unwrap(), None);
        }
    }

    #[test]
    fn test_extra_inputs_ignored() {
        let request = CalculationRequest::new("fill_time", "min")
            .with_input("volume", 500.0, "gal")
            .with_input("flow", 10.0, "gpm")
            .with_input("color", 3.0, "-");
        assert!(approx_eq(value(&request), 50.0, 1e-12));
    }

    #[test]
    fn test_water_depth_cfs_basis() {
        let settings = EvaluatorSettings {
            water_depth_basis: FlowBasis::Cfs,
            ..Default::default()
        };
        // 1.01 cfs for 1 hr over 1 acre is 1 inch
        let request = CalculationRequest::new("water_depth", "in")
            .with_input("flow", 1.01, "cfs")
            .with_input("time", 1.0, "hr")
            .with_input("area", 1.0, "acre");
        let depth = Evaluator::new(settings).evaluate_request(&request).unwrap().unwrap();
        assert!(approx_eq(depth.value, 1.0, 1e-12));
    }

    #[test]
    fn test_bases_agree_within_rounding() {
        let request = CalculationRequest::new("water_depth", "in")
            .with_input("flow", 500.0, "gpm")
            .with_input("time", 12.0, "hr")
            .with_input("area", 10.0, "acre");
        let gpm = value(&request);
        let cfs = Evaluator::new(EvaluatorSettings {
            water_depth_basis: FlowBasis::Cfs,
            ..Default::default()
        })
        .evaluate_request(&request)
        .unwrap()
        .unwrap()
        .value;
        assert!(approx_eq(cfs, gpm, 2e-3));
    }

    #[test]
    fn test_design_velocity_from_settings() {
        let settings = EvaluatorSettings {
            design_velocity: 4.0,
            ..Default::default()
        };
        let request = CalculationRequest::new("minimum_diameter_for_velocity", "in").with_input("flow", 100.0, "gpm");
        let with_settings = Evaluator::new(settings).evaluate_request(&request).unwrap().unwrap();
        let explicit = request.clone().with_input("design_velocity", 4.0, "ft/sec");
        assert!(approx_eq(with_settings.value, value(&explicit), 1e-12));
    }

    #[test]
    fn test_head_in_psi() {
        // 43.3527 psi is 100 ft of head
        let request = CalculationRequest::new("water_horsepower", "hp")
            .with_input("flow", 100.0, "gpm")
            .with_input("head", 43.3527, "psi");
        assert!(approx_eq(value(&request), 100.0 * 100.0 / 3960.0, 1e-9));
    }

    #[test]
    fn test_garden_hose_off_table_is_none() {
        let request = CalculationRequest::new("garden_hose_flow", "gpm")
            .with_input("hose_diameter", 1.0, "in")
            .with_input("pressure", 50.0, "psi")
            .with_input("hose_length", 50.0, "ft");
        assert_eq!(Evaluator::default().evaluate_request(&request).unwrap(), None);
    }

    #[test]
    fn test_request_json() {
        let json = r#"{
            "formula": "fill_time",
            "inputs": {
                "volume": { "value": 1, "unit": "cu. meter" },
                "flow": { "value": 1, "unit": "lps" }
            },
            "output_unit": "min"
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert!(approx_eq(value(&request), 1000.0 / 60.0, 1e-12));
    }

    #[test]
    fn test_velocity_scenario() {
        let request = CalculationRequest::new("pipe_velocity", "ft/sec")
            .with_input("flow", 100.0, "gpm")
            .with_input("diameter", 4.026, "in");
        assert!(approx_eq(value(&request), 2.517, 1e-3));
    }

    #[test]
    fn test_friction_loss_scenario() {
        let request = CalculationRequest::new("pipe_friction_loss", "psi")
            .with_input("length", 1000.0, "ft")
            .with_input("flow", 100.0, "gpm")
            .with_input("roughness_c", 150.0, "-")
            .with_input("diameter", 4.026, "in");
        let loss = value(&request);
        assert!(loss > 2.0 && loss < 2.5, "loss = {}", loss);
    }

    #[test]
    fn test_pump_scenario() {
        let base = CalculationRequest::new("water_horsepower", "hp")
            .with_input("flow", 100.0, "gpm")
            .with_input("head", 100.0, "ft of water");
        assert!(approx_eq(value(&base), 2.525, 1e-3));

        let mut brake = base.clone().with_input("pump_efficiency", 0.70, "decimal");
        brake.formula = "brake_horsepower".to_string();
        assert!(approx_eq(value(&brake), 3.608, 1e-3));

        let mut motor = brake.clone().with_input("motor_efficiency", 90.0, "%");
        motor.formula = "motor_horsepower".to_string();
        assert!(approx_eq(value(&motor), 4.009, 1e-3));
    }

    #[test]
    fn test_water_depth_zero_area_is_none() {
        let request = CalculationRequest::new("water_depth", "in")
            .with_input("flow", 500.0, "gpm")
            .with_input("time", 12.0, "hr")
            .with_input("area", 0.0, "acre");
        assert_eq!(Evaluator::default().evaluate_request(&request).unwrap(), None);
    }

    #[test]
    fn test_missing_input_is_none_for_every_formula() {
        for formula in crate::equations::ALL_FORMULAS {
            let spec = formula.spec();
            let result = evaluate(formula.id(), &BTreeMap::new(), spec.output_working_unit).unwrap();
            assert_eq!(result, None, "{} gave a result with no inputs", formula);
        }
    }

    /// Request with every input of `formula` set to a valid positive value
    fn positive_request(formula: Formula) -> CalculationRequest {
        let spec = formula.spec();
        let mut request = CalculationRequest::new(formula.id(), spec.output_working_unit);
        for input in spec.inputs {
            let v = match input.field {
                "hose_diameter" => 0.625,
                "pressure" if formula == Formula::GardenHoseFlow => 50.0,
                "hose_length" => 50.0,
                _ if input.category == crate::conversion::UnitCategory::Efficiency => 0.8,
                _ => 3.0,
            };
            request = request.with_input(input.field, v, input.working_unit);
        }
        request
    }

    #[test]
    fn test_positive_inputs_give_non_negative_results() {
        for &formula in crate::equations::ALL_FORMULAS {
            let request = positive_request(formula);
            let result = Evaluator::default().evaluate_request(&request).unwrap();
            match result {
                Some(r) => assert!(r.value.is_finite() && r.value >= 0.0, "{} = {}", formula, r.value),
                None => panic!("{} gave no result for positive inputs", formula),
            }
        }
    }

    #[test]
    fn test_each_zero_negative_or_missing_field_is_none() {
        let evaluator = Evaluator::default();
        for &formula in crate::equations::ALL_FORMULAS {
            let base = positive_request(formula);
            for input in formula.spec().inputs {
                for bad in [0.0, -1.0] {
                    let request = base.clone().with_input(input.field, bad, input.working_unit);
                    assert_eq!(
                        evaluator.evaluate_request(&request).unwrap(),
                        None,
                        "{} with {} = {}",
                        formula,
                        input.field,
                        bad
                    );
                }
                if evaluator.default_value(formula, input).is_none() {
                    let mut request = base.clone();
                    request.inputs.remove(input.field);
                    assert_eq!(
                        evaluator.evaluate_request(&request).unwrap(),
                        None,
                        "{} without {}",
                        formula,
                        input.field
                    );
                }
            }
        }
    }

    #[test]
    fn test_total_flow_of_emitters() {
        // 250 emitters at 2 lph
        let request = CalculationRequest::new("total_flow", "gpm")
            .with_input("emitter_flow", 2.0, "lph")
            .with_input("emitter_count", 250.0, "-");
        let lps = 500.0 / 3600.0;
        assert!(approx_eq(value(&request), lps * 15.850_323, 1e-6));

        let missing_count = CalculationRequest::new("total_flow", "gpm").with_input("emitter_flow", 2.0, "lph");
        assert_eq!(Evaluator::default().evaluate_request(&missing_count).unwrap(), None);
    }
}
