//! # Benchmark Tables
//!
//! Baseline agronomic and equipment values used to pre-fill calculator
//! inputs: crop groups, soil types, climate multipliers, irrigation system
//! types and target depth ranges. These are configuration data passed into
//! the helpers below, not constants baked into any formula.
//!
//! The built-in tables are the `Default`; a JSON file with the same shape
//! replaces them wholesale.
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::benchmarks::BenchmarkTables;
//! use irrigation_core::evaluator::Evaluator;
//!
//! let tables = BenchmarkTables::default();
//! let request = tables.run_time_request("fruiting", "hot", "drip").unwrap();
//! let minutes = Evaluator::default().evaluate_request(&request).unwrap().unwrap();
//! assert!(minutes.value > 0.0);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::equations::registry::Formula;
use crate::errors::{CalcError, CalcResult};
use crate::evaluator::CalculationRequest;

// ============================================================================
// Table Rows
// ============================================================================

/// Rooting depth class of a crop group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootClass {
    Shallow,
    Medium,
    Deep,
}

/// Baseline values for a crop group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropBenchmark {
    pub label: String,
    /// Typical days between irrigations
    pub interval_days: f64,
    /// Peak crop water use in a moderate climate (in/day)
    pub water_use_in_per_day: f64,
    /// Effective root zone depth (ft)
    pub root_depth_ft: f64,
    /// Management allowed depletion (decimal)
    pub allowable_depletion: f64,
    pub root_class: RootClass,
}

/// Baseline values for a soil texture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilBenchmark {
    pub label: String,
    /// Available water holding capacity (in/ft)
    pub available_water_in_per_ft: f64,
}

/// Baseline values for an irrigation system type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemBenchmark {
    pub label: String,
    /// Application efficiency (%)
    pub efficiency_percent: f64,
    /// Typical application rate (in/hr), where one applies
    #[serde(default)]
    pub application_rate_in_per_hr: Option<f64>,
    /// Typical operating hours per day
    #[serde(default)]
    pub hours_per_day: Option<f64>,
    /// Typical pump discharge pressure (psi)
    #[serde(default)]
    pub pressure_psi: Option<f64>,
}

/// Target net depth per irrigation (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthRange {
    pub min_mm: f64,
    pub max_mm: f64,
}

impl DepthRange {
    pub fn midpoint_mm(&self) -> f64 {
        (self.min_mm + self.max_mm) / 2.0
    }

    pub fn contains(&self, depth_mm: f64) -> bool {
        depth_mm >= self.min_mm && depth_mm <= self.max_mm
    }
}

// ============================================================================
// Tables
// ============================================================================

/// All benchmark tables, keyed by lower-case identifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkTables {
    pub crops: BTreeMap<String, CropBenchmark>,
    pub soils: BTreeMap<String, SoilBenchmark>,
    /// Multiplier on moderate-climate water use
    pub climates: BTreeMap<String, f64>,
    pub systems: BTreeMap<String, SystemBenchmark>,
    /// Target depth by root class, then soil key
    pub depths: BTreeMap<RootClass, BTreeMap<String, DepthRange>>,
}

fn crop(
    label: &str,
    interval_days: f64,
    water_use_in_per_day: f64,
    root_depth_ft: f64,
    allowable_depletion: f64,
    root_class: RootClass,
) -> CropBenchmark {
    CropBenchmark {
        label: label.to_string(),
        interval_days,
        water_use_in_per_day,
        root_depth_ft,
        allowable_depletion,
        root_class,
    }
}

fn system(
    label: &str,
    efficiency_percent: f64,
    application_rate_in_per_hr: Option<f64>,
    hours_per_day: Option<f64>,
    pressure_psi: Option<f64>,
) -> SystemBenchmark {
    SystemBenchmark {
        label: label.to_string(),
        efficiency_percent,
        application_rate_in_per_hr,
        hours_per_day,
        pressure_psi,
    }
}

fn depths(light: (f64, f64), medium: (f64, f64), heavy: (f64, f64)) -> BTreeMap<String, DepthRange> {
    [("light", light), ("medium", medium), ("heavy", heavy)]
        .into_iter()
        .map(|(soil, (min_mm, max_mm))| (soil.to_string(), DepthRange { min_mm, max_mm }))
        .collect()
}

impl Default for BenchmarkTables {
    fn default() -> Self {
        use RootClass::*;

        let crops = [
            ("leafy", crop("Leafy & shallow-rooted vegetables", 2.5, 0.16, 1.0, 0.30, Shallow)),
            ("fruiting", crop("Fruiting & tuber vegetables", 3.5, 0.20, 1.5, 0.40, Medium)),
            ("cereals", crop("Cereals & field crops", 5.5, 0.18, 2.5, 0.50, Medium)),
            ("vine", crop("Vine crops & melons", 5.5, 0.24, 2.0, 0.50, Medium)),
            ("orchards", crop("Orchards & tree crops", 7.5, 0.28, 3.5, 0.55, Deep)),
            ("vineyards", crop("Vineyards", 7.5, 0.24, 3.0, 0.50, Deep)),
        ];

        let soils = [
            ("light", 1.0, "Light (sand, loamy sand)"),
            ("medium", 1.5, "Medium (loam, silt loam)"),
            ("heavy", 2.0, "Heavy (clay loam, clay)"),
        ];

        let climates = [("cool", 0.8), ("moderate", 1.0), ("hot", 1.2)];

        let systems = [
            ("drip", system("Drip / subsurface drip", 90.0, Some(0.10), Some(16.0), Some(20.0))),
            ("micro", system("Micro-sprinklers", 85.0, None, Some(16.0), Some(30.0))),
            ("sprinkler", system("Well-designed sprinklers", 80.0, Some(0.25), Some(20.0), Some(45.0))),
            ("solid", system("Solid-set sprinklers (rotated)", 80.0, None, Some(12.0), None)),
            ("pivot", system("Center pivots", 80.0, Some(0.25), Some(20.0), Some(50.0))),
            ("surface", system("Surface / furrow / flood", 60.0, Some(0.20), Some(12.0), None)),
            ("big_gun", system("Big gun / traveling gun", 60.0, None, None, Some(100.0))),
        ];

        Self {
            crops: crops.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            soils: soils
                .into_iter()
                .map(|(k, awc, label)| {
                    (
                        k.to_string(),
                        SoilBenchmark {
                            label: label.to_string(),
                            available_water_in_per_ft: awc,
                        },
                    )
                })
                .collect(),
            climates: climates.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            systems: systems.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            depths: [
                (Shallow, depths((8.0, 15.0), (10.0, 20.0), (12.0, 25.0))),
                (Medium, depths((16.0, 28.0), (20.0, 35.0), (24.0, 42.0))),
                (Deep, depths((24.0, 40.0), (30.0, 50.0), (36.0, 60.0))),
            ]
            .into_iter()
            .collect(),
        }
    }
}

fn lookup<'a, T>(table: &'static str, map: &'a BTreeMap<String, T>, key: &str) -> CalcResult<&'a T> {
    map.get(&key.trim().to_lowercase())
        .ok_or_else(|| CalcError::unknown_benchmark(table, key))
}

impl BenchmarkTables {
    /// Parse tables from JSON
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn crop(&self, key: &str) -> CalcResult<&CropBenchmark> {
        lookup("crop", &self.crops, key)
    }

    pub fn soil(&self, key: &str) -> CalcResult<&SoilBenchmark> {
        lookup("soil", &self.soils, key)
    }

    pub fn climate_multiplier(&self, key: &str) -> CalcResult<f64> {
        lookup("climate", &self.climates, key).copied()
    }

    pub fn system(&self, key: &str) -> CalcResult<&SystemBenchmark> {
        lookup("system", &self.systems, key)
    }

    /// Crop water use adjusted for climate (in/day)
    pub fn crop_water_use(&self, crop: &str, climate: &str) -> CalcResult<f64> {
        Ok(self.crop(crop)?.water_use_in_per_day * self.climate_multiplier(climate)?)
    }

    /// Target net depth per irrigation for a crop on a soil
    pub fn target_depth_mm(&self, crop: &str, soil: &str) -> CalcResult<DepthRange> {
        let class = self.crop(crop)?.root_class;
        let by_soil = self
            .depths
            .get(&class)
            .ok_or_else(|| CalcError::unknown_benchmark("depth", format!("{:?}", class)))?;
        lookup("depth", by_soil, soil).copied()
    }

    /// Run time request pre-filled from crop, climate and system.
    ///
    /// A system with no typical application rate leaves that input empty, so
    /// evaluating the request gives no result until the caller supplies one.
    pub fn run_time_request(&self, crop: &str, climate: &str, system: &str) -> CalcResult<CalculationRequest> {
        let crop_row = self.crop(crop)?;
        let water_use = self.crop_water_use(crop, climate)?;
        let system_row = self.system(system)?;

        let mut request = CalculationRequest::new(Formula::IrrigationRunTime.id(), "min")
            .with_input("interval", crop_row.interval_days, "days")
            .with_input("crop_water_use", water_use, "in/day")
            .with_input("efficiency", system_row.efficiency_percent, "%");
        if let Some(rate) = system_row.application_rate_in_per_hr {
            request = request.with_input("application_rate", rate, "in/hr");
        }
        Ok(request)
    }

    /// Frequency request pre-filled from soil, crop and climate
    pub fn frequency_request(&self, soil: &str, crop: &str, climate: &str) -> CalcResult<CalculationRequest> {
        let soil_row = self.soil(soil)?;
        let crop_row = self.crop(crop)?;
        let water_use = self.crop_water_use(crop, climate)?;

        Ok(CalculationRequest::new(Formula::IrrigationFrequency.id(), "days")
            .with_input("available_water_capacity", soil_row.available_water_in_per_ft, "in/ft")
            .with_input("root_zone_depth", crop_row.root_depth_ft, "ft")
            .with_input("allowable_depletion", crop_row.allowable_depletion, "decimal")
            .with_input("crop_water_use", water_use, "in/day"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::Evaluator;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        ((a - b) / b).abs() < tol
    }

    #[test]
    fn test_crop_water_use() {
        let tables = BenchmarkTables::default();
        assert!(approx_eq(tables.crop_water_use("orchards", "hot").unwrap(), 0.336, 1e-12));
        assert!(approx_eq(tables.crop_water_use("Leafy", "cool").unwrap(), 0.128, 1e-12));
    }

    #[test]
    fn test_unknown_keys() {
        let tables = BenchmarkTables::default();
        let err = tables.crop_water_use("kelp", "hot").unwrap_err();
        assert_eq!(err, CalcError::unknown_benchmark("crop", "kelp"));
        let err = tables.crop_water_use("leafy", "arctic").unwrap_err();
        assert_eq!(err, CalcError::unknown_benchmark("climate", "arctic"));
    }

    #[test]
    fn test_target_depth() {
        let tables = BenchmarkTables::default();
        let range = tables.target_depth_mm("vineyards", "heavy").unwrap();
        assert_eq!(range, DepthRange { min_mm: 36.0, max_mm: 60.0 });
        assert_eq!(range.midpoint_mm(), 48.0);
        assert!(range.contains(40.0));
        assert!(!range.contains(61.0));
    }

    #[test]
    fn test_run_time_request_evaluates() {
        let tables = BenchmarkTables::default();
        let request = tables.run_time_request("fruiting", "moderate", "drip").unwrap();
        let result = Evaluator::default().evaluate_request(&request).unwrap().unwrap();
        // 60 * 3.5 * 0.20 / (0.10 * 0.90)
        assert!(approx_eq(result.value, 466.666_667, 1e-6));
    }

    #[test]
    fn test_run_time_request_without_rate_is_incomplete() {
        let tables = BenchmarkTables::default();
        let request = tables.run_time_request("leafy", "moderate", "micro").unwrap();
        assert!(!request.inputs.contains_key("application_rate"));
        assert_eq!(Evaluator::default().evaluate_request(&request).unwrap(), None);
    }

    #[test]
    fn test_surface_run_time() {
        let tables = BenchmarkTables::default();
        let request = tables.run_time_request("cereals", "moderate", "surface").unwrap();
        let result = Evaluator::default().evaluate_request(&request).unwrap().unwrap();
        // 60 * 5.5 * 0.18 / (0.20 * 0.60)
        assert!(approx_eq(result.value, 495.0, 1e-9));
    }

    #[test]
    fn test_every_run_time_system_evaluates() {
        let tables = BenchmarkTables::default();
        for system in ["drip", "sprinkler", "pivot", "surface"] {
            for crop in tables.crops.keys() {
                let request = tables.run_time_request(crop, "hot", system).unwrap();
                let result = Evaluator::default().evaluate_request(&request).unwrap();
                assert!(result.is_some(), "{} on {} gave no run time", crop, system);
            }
        }
    }

    #[test]
    fn test_solid_set_hours() {
        let tables = BenchmarkTables::default();
        let solid = tables.system("solid").unwrap();
        assert_eq!(solid.efficiency_percent, 80.0);
        assert_eq!(solid.hours_per_day, Some(12.0));
    }

    #[test]
    fn test_frequency_request_evaluates() {
        let tables = BenchmarkTables::default();
        let request = tables.frequency_request("medium", "cereals", "moderate").unwrap();
        let result = Evaluator::default().evaluate_request(&request).unwrap().unwrap();
        // 1.5 * 2.5 * 0.5 / 0.18
        assert!(approx_eq(result.value, 10.416_667, 1e-6));
    }

    #[test]
    fn test_json_round_trip() {
        let tables = BenchmarkTables::default();
        let json = serde_json::to_string(&tables).unwrap();
        assert!(json.contains("\"shallow\""));
        let back = BenchmarkTables::from_json(&json).unwrap();
        assert_eq!(back, tables);
    }
}
