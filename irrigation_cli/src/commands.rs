//! Subcommand handlers. Every handler prints one JSON document to stdout.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{json, Value};
use tracing::info;

use irrigation_core::benchmarks::BenchmarkTables;
use irrigation_core::conversion::{categories, UnitCategory};
use irrigation_core::equations::{generate_formulas_markdown, recommended_motor_size, ALL_FORMULAS};
use irrigation_core::interpretation::{friction_loss_per_100_ft, FrictionLossRating, VelocityRating};
use irrigation_core::materials::{PipeMaterial, PipeSize};
use irrigation_core::units::Horsepower;
use irrigation_core::{
    convert, CalculationRequest, CalculationResult, Evaluator, EvaluatorSettings, Formula, Quantity,
};

use crate::cli::{BaselineCommand, EvalArgs};

// ============================================================================
// Configuration
// ============================================================================

pub fn load_settings(path: Option<&Path>) -> Result<EvaluatorSettings> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading settings from {}", path.display()))?;
            info!(path = %path.display(), "loaded evaluator settings");
            Ok(EvaluatorSettings::from_json(&json)?)
        }
        None => Ok(EvaluatorSettings::default()),
    }
}

pub fn load_benchmarks(path: Option<&Path>) -> Result<BenchmarkTables> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading benchmarks from {}", path.display()))?;
            info!(path = %path.display(), "loaded benchmark tables");
            Ok(BenchmarkTables::from_json(&json)?)
        }
        None => Ok(BenchmarkTables::default()),
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ============================================================================
// convert / units / formulas
// ============================================================================

pub fn convert_cmd(category: &str, value: f64, from: &str, to: &str) -> Result<()> {
    let converted = convert(category, value, from, to)?;
    print_json(&json!({ "value": converted, "unit": to }))
}

pub fn units_cmd(category: Option<&str>) -> Result<()> {
    match category {
        Some(name) => {
            let category: UnitCategory = name.parse()?;
            print_json(&json!({
                "category": category,
                "base_unit": category.base_unit().label,
                "units": category.units(),
            }))
        }
        None => {
            let list: Vec<Value> = categories()
                .iter()
                .map(|c| json!({ "category": c, "base_unit": c.base_unit().label, "units": c.units().len() }))
                .collect();
            print_json(&Value::Array(list))
        }
    }
}

pub fn formulas_cmd(markdown: bool) -> Result<()> {
    if markdown {
        print!("{}", generate_formulas_markdown());
        return Ok(());
    }
    let list: Vec<Value> = ALL_FORMULAS
        .iter()
        .map(|f| {
            let spec = f.spec();
            let meta = f.metadata();
            json!({
                "id": f.id(),
                "name": meta.name,
                "category": meta.category.display_name(),
                "inputs": spec.inputs.iter().map(|i| i.field).collect::<Vec<_>>(),
                "output": { "category": spec.output_category, "unit": spec.output_working_unit },
            })
        })
        .collect();
    print_json(&Value::Array(list))
}

// ============================================================================
// eval
// ============================================================================

/// Parse `field=value:unit`. A value that is not a number becomes NaN, which
/// evaluates to no result rather than an error.
fn parse_input(raw: &str) -> Result<(String, Quantity)> {
    let Some((field, rest)) = raw.split_once('=') else {
        bail!("input '{raw}' is not of the form field=value:unit");
    };
    let (value, unit) = rest.split_once(':').unwrap_or((rest, ""));
    let value = value.trim().parse::<f64>().unwrap_or(f64::NAN);
    Ok((field.trim().to_string(), Quantity::new(value, unit.trim())))
}

fn parse_material(name: &str) -> Result<PipeMaterial> {
    serde_json::from_value(Value::String(name.to_lowercase()))
        .with_context(|| format!("unknown pipe material '{name}'"))
}

fn build_request(args: &EvalArgs) -> Result<CalculationRequest> {
    if let Some(path) = &args.request {
        let json = fs::read_to_string(path).with_context(|| format!("reading request from {}", path.display()))?;
        let request = serde_json::from_str(&json).map_err(irrigation_core::CalcError::from)?;
        return Ok(request);
    }

    let Some(id) = args.formula.as_deref() else {
        bail!("a formula id or --request is required");
    };
    let formula: Formula = id.parse()?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| formula.spec().output_working_unit.to_string());

    let mut request = CalculationRequest::new(formula.id(), output);
    for raw in &args.inputs {
        let (field, quantity) = parse_input(raw)?;
        request.inputs.insert(field, quantity);
    }
    if let Some(material) = &args.material {
        let c = parse_material(material)?.hazen_williams_c();
        request.inputs.entry("roughness_c".to_string()).or_insert_with(|| Quantity::new(c, "-"));
    }
    Ok(request)
}

/// Advisory extras for formulas that have them
fn annotate(
    formula: Formula,
    request: &CalculationRequest,
    result: &CalculationResult,
    settings: &EvaluatorSettings,
) -> Result<Option<Value>> {
    let unit = request.output_unit.as_str();
    let extra = match formula {
        Formula::PipeVelocity => {
            let ft_per_sec = UnitCategory::Speed.convert(result.value, unit, "ft/sec")?;
            let rating = VelocityRating::classify(ft_per_sec);
            Some(json!({ "rating": rating, "note": rating.description() }))
        }
        Formula::PipeFrictionLoss => {
            let psi = UnitCategory::Pressure.convert(result.value, unit, "psi")?;
            let length = match request.inputs.get("length") {
                Some(q) => UnitCategory::Distance.convert(q.value, &q.unit, "ft")?,
                None => f64::NAN,
            };
            friction_loss_per_100_ft(psi, length).map(|per_100| {
                let rating = FrictionLossRating::classify(per_100);
                json!({ "psi_per_100_ft": per_100, "rating": rating, "note": rating.description() })
            })
        }
        Formula::MinimumPipeDiameter | Formula::MinimumDiameterForVelocity => {
            let inches = UnitCategory::Distance.convert(result.value, unit, "in")?;
            let size = PipeSize::smallest_at_least(inches);
            Some(json!({
                "pipe_size": size.map(|s| s.display_name()),
                "inside_diameter_in": size.map(|s| s.inside_diameter_in()),
            }))
        }
        Formula::WaterHorsepower | Formula::BrakeHorsepower | Formula::MotorHorsepower => {
            let hp = UnitCategory::Power.convert(result.value, unit, "hp")?;
            let motor = recommended_motor_size(Horsepower(hp), settings.motor_margin);
            Some(json!({ "recommended_motor_hp": motor.0 }))
        }
        _ => None,
    };
    Ok(extra)
}

pub fn eval_cmd(args: &EvalArgs, evaluator: &Evaluator) -> Result<()> {
    let request = build_request(args)?;
    let formula: Formula = request.formula.parse()?;

    let Some(result) = evaluator.evaluate_request(&request)? else {
        println!("null");
        return Ok(());
    };

    let mut output = json!({
        "formula": formula.id(),
        "value": result.value,
        "unit": request.output_unit,
    });
    if let Some(extra) = annotate(formula, &request, &result, evaluator.settings())? {
        output["advice"] = extra;
    }
    print_json(&output)
}

// ============================================================================
// baseline
// ============================================================================

fn print_evaluated(request: &CalculationRequest, evaluator: &Evaluator) -> Result<()> {
    let result = evaluator.evaluate_request(request)?;
    print_json(&json!({
        "request": request,
        "value": result.map(|r| r.value),
        "unit": request.output_unit,
    }))
}

pub fn baseline_cmd(command: &BaselineCommand, tables: &BenchmarkTables, evaluator: &Evaluator) -> Result<()> {
    match command {
        BaselineCommand::RunTime { crop, climate, system, application_rate } => {
            let mut request = tables.run_time_request(crop, climate, system)?;
            if let Some(rate) = application_rate {
                request = request.with_input("application_rate", *rate, "in/hr");
            }
            print_evaluated(&request, evaluator)
        }
        BaselineCommand::Frequency { soil, crop, climate } => {
            let request = tables.frequency_request(soil, crop, climate)?;
            print_evaluated(&request, evaluator)
        }
        BaselineCommand::Depth { crop, soil } => {
            let range = tables.target_depth_mm(crop, soil)?;
            print_json(&json!({
                "min_mm": range.min_mm,
                "max_mm": range.max_mm,
                "midpoint_mm": range.midpoint_mm(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        let (field, q) = parse_input("flow=100:gpm").unwrap();
        assert_eq!(field, "flow");
        assert_eq!(q, Quantity::new(100.0, "gpm"));
    }

    #[test]
    fn test_parse_input_without_unit() {
        let (field, q) = parse_input("roughness_c=150").unwrap();
        assert_eq!(field, "roughness_c");
        assert_eq!(q.unit, "");
    }

    #[test]
    fn test_parse_input_not_a_number() {
        let (_, q) = parse_input("flow=abc:gpm").unwrap();
        assert!(q.value.is_nan());
    }

    #[test]
    fn test_parse_input_missing_equals() {
        assert!(parse_input("flow").is_err());
    }

    #[test]
    fn test_parse_material() {
        assert_eq!(parse_material("PVC").unwrap(), PipeMaterial::Pvc);
        assert_eq!(parse_material("cast_iron").unwrap(), PipeMaterial::CastIron);
        assert!(parse_material("bamboo").is_err());
    }

    #[test]
    fn test_material_fills_roughness() {
        let args = EvalArgs {
            formula: Some("pipe_friction_loss".to_string()),
            inputs: vec!["length=1000:ft".into(), "flow=100:gpm".into(), "diameter=4.026:in".into()],
            output: None,
            material: Some("pvc".to_string()),
            request: None,
        };
        let request = build_request(&args).unwrap();
        assert_eq!(request.output_unit, "psi");
        assert_eq!(request.inputs["roughness_c"], Quantity::new(150.0, "-"));
    }

    #[test]
    fn test_velocity_advice() {
        let request = CalculationRequest::new("pipe_velocity", "ft/sec");
        let extra = annotate(
            Formula::PipeVelocity,
            &request,
            &CalculationResult { value: 2.5 },
            &EvaluatorSettings::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(extra["rating"], "low");
    }
}
