//! # Unit Conversion Table
//!
//! One shared mapping from (category, unit label) to a linear factor relative
//! to the category's base unit. Categories are independent of each other.
//!
//! | Category | Base unit |
//! |----------|-----------|
//! | Flow Rate | lps |
//! | Area | sq. meter |
//! | Distance | m |
//! | Time | sec |
//! | Volume | liter |
//! | Pressure | psi |
//! | Power | hp |
//! | Precipitation | in/hr |
//! | Salinity | dS/m |
//! | Speed | m/sec |
//! | Efficiency | decimal |
//! | Soil Water Capacity | in/ft |
//! | Dimensionless | - |
//!
//! Labels match case-insensitively, ignoring surrounding whitespace. An
//! unknown label is a configuration error and fails with
//! [`CalcError::UnknownUnit`].
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::conversion::{convert, UnitCategory};
//!
//! let gpm = convert("Flow Rate", 1.0, "lps", "gpm").unwrap();
//! assert!((gpm - 15.8503).abs() < 1e-4);
//!
//! let kpa = UnitCategory::Pressure.convert(30.0, "psi", "kPa").unwrap();
//! assert!((kpa - 206.843).abs() < 1e-3);
//! ```

pub mod constants;
mod tables;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Unit Categories
// ============================================================================

/// A family of interconvertible units sharing one base unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitCategory {
    #[serde(rename = "Flow Rate")]
    FlowRate,
    Area,
    Distance,
    Time,
    Volume,
    Pressure,
    Power,
    Precipitation,
    Salinity,
    Speed,
    Efficiency,
    #[serde(rename = "Soil Water Capacity")]
    SoilWaterCapacity,
    Dimensionless,
}

impl UnitCategory {
    /// Every category, in display order
    pub const ALL: [UnitCategory; 13] = [
        UnitCategory::FlowRate,
        UnitCategory::Area,
        UnitCategory::Distance,
        UnitCategory::Time,
        UnitCategory::Volume,
        UnitCategory::Pressure,
        UnitCategory::Power,
        UnitCategory::Precipitation,
        UnitCategory::Salinity,
        UnitCategory::Speed,
        UnitCategory::Efficiency,
        UnitCategory::SoilWaterCapacity,
        UnitCategory::Dimensionless,
    ];

    /// Human-facing category name
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitCategory::FlowRate => "Flow Rate",
            UnitCategory::Area => "Area",
            UnitCategory::Distance => "Distance",
            UnitCategory::Time => "Time",
            UnitCategory::Volume => "Volume",
            UnitCategory::Pressure => "Pressure",
            UnitCategory::Power => "Power",
            UnitCategory::Precipitation => "Precipitation",
            UnitCategory::Salinity => "Salinity",
            UnitCategory::Speed => "Speed",
            UnitCategory::Efficiency => "Efficiency",
            UnitCategory::SoilWaterCapacity => "Soil Water Capacity",
            UnitCategory::Dimensionless => "Dimensionless",
        }
    }

    /// All units in this category. The first entry is the base unit.
    pub fn units(&self) -> &'static [UnitDefinition] {
        match self {
            UnitCategory::FlowRate => tables::FLOW_RATE,
            UnitCategory::Area => tables::AREA,
            UnitCategory::Distance => tables::DISTANCE,
            UnitCategory::Time => tables::TIME,
            UnitCategory::Volume => tables::VOLUME,
            UnitCategory::Pressure => tables::PRESSURE,
            UnitCategory::Power => tables::POWER,
            UnitCategory::Precipitation => tables::PRECIPITATION,
            UnitCategory::Salinity => tables::SALINITY,
            UnitCategory::Speed => tables::SPEED,
            UnitCategory::Efficiency => tables::EFFICIENCY,
            UnitCategory::SoilWaterCapacity => tables::SOIL_WATER_CAPACITY,
            UnitCategory::Dimensionless => tables::DIMENSIONLESS,
        }
    }

    /// The unit every other unit in this category is expressed against
    pub fn base_unit(&self) -> &'static UnitDefinition {
        &self.units()[0]
    }

    /// Look up a unit by label or alias.
    ///
    /// # Errors
    ///
    /// `CalcError::UnknownUnit` when the label is not in this category.
    pub fn unit(&self, label: &str) -> CalcResult<&'static UnitDefinition> {
        UNIT_INDEX
            .get(&(*self, normalize_label(label)))
            .copied()
            .ok_or_else(|| CalcError::unknown_unit(self.display_name(), label))
    }

    /// Express `value` (in unit `label`) in the base unit
    pub fn to_base(&self, value: f64, label: &str) -> CalcResult<f64> {
        Ok(self.unit(label)?.to_base(value))
    }

    /// Express `value` (in the base unit) in unit `label`
    pub fn from_base(&self, value: f64, label: &str) -> CalcResult<f64> {
        Ok(self.unit(label)?.from_base(value))
    }

    /// Convert `value` from one unit of this category to another
    pub fn convert(&self, value: f64, from: &str, to: &str) -> CalcResult<f64> {
        let from_unit = self.unit(from)?;
        let to_unit = self.unit(to)?;
        let result = to_unit.from_base(from_unit.to_base(value));
        trace!(
            category = self.display_name(),
            value,
            from = from_unit.label,
            to = to_unit.label,
            result,
            "converted"
        );
        Ok(result)
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for UnitCategory {
    type Err = CalcError;

    /// Accepts the display name in any case, with spaces, underscores or
    /// hyphens between words ("Flow Rate", "flow_rate", "FLOW-RATE").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = squash(s);
        UnitCategory::ALL
            .iter()
            .copied()
            .find(|c| squash(c.display_name()) == wanted)
            .ok_or_else(|| CalcError::unknown_category(s))
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// Unit Definition
// ============================================================================

/// A single unit and its linear factor relative to the category base unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDefinition {
    /// Canonical label (e.g., "gpm", "sq. ft.")
    pub label: &'static str,
    /// Alternative labels accepted on lookup
    pub aliases: &'static [&'static str],
    /// Owning category
    pub category: UnitCategory,
    /// Base units per one of this unit
    pub factor: f64,
}

impl UnitDefinition {
    #[inline]
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor
    }

    #[inline]
    pub fn from_base(&self, value: f64) -> f64 {
        value / self.factor
    }

    /// Canonical label followed by aliases
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.label).chain(self.aliases.iter().copied())
    }
}

// ============================================================================
// Lookup Index
// ============================================================================

fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

static UNIT_INDEX: Lazy<HashMap<(UnitCategory, String), &'static UnitDefinition>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for category in UnitCategory::ALL {
        for unit in category.units() {
            for label in unit.labels() {
                index.entry((category, normalize_label(label))).or_insert(unit);
            }
        }
    }
    index
});

// ============================================================================
// Free Functions
// ============================================================================

/// Convert `value` between two units of the named category.
///
/// # Errors
///
/// `UnknownCategory` for an unrecognized category name, `UnknownUnit` for an
/// unrecognized label.
pub fn convert(category: &str, value: f64, from: &str, to: &str) -> CalcResult<f64> {
    category.parse::<UnitCategory>()?.convert(value, from, to)
}

/// Every category, in display order
pub fn categories() -> &'static [UnitCategory] {
    &UnitCategory::ALL
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b == 0.0 {
            return a.abs() < tol;
        }
        ((a - b) / b).abs() < tol
    }

    #[test]
    fn test_lps_to_gpm() {
        let gpm = convert("Flow Rate", 1.0, "lps", "gpm").unwrap();
        assert!(approx_eq(gpm, 15.850_323, 1e-6));
    }

    #[test]
    fn test_cfs_to_gpm() {
        let gpm = UnitCategory::FlowRate.convert(1.0, "cfs", "gpm").unwrap();
        assert!(approx_eq(gpm, 448.831, 1e-6));
    }

    #[test]
    fn test_labels_case_insensitive() {
        let a = UnitCategory::Pressure.convert(1.0, "KPA", "PSI").unwrap();
        let b = UnitCategory::Pressure.convert(1.0, "kPa", "psi").unwrap();
        assert_eq!(a, b);
        assert!(UnitCategory::Area.unit("  Sq. Ft.  ").is_ok());
    }

    #[test]
    fn test_aliases() {
        let unit = UnitCategory::Distance.unit("feet").unwrap();
        assert_eq!(unit.label, "ft");
        assert_eq!(UnitCategory::Dimensionless.unit("").unwrap().label, "-");
        assert_eq!(UnitCategory::Dimensionless.unit("unitless").unwrap().label, "-");
    }

    #[test]
    fn test_unknown_unit() {
        let err = convert("Flow Rate", 1.0, "gpx", "lps").unwrap_err();
        assert_eq!(err, CalcError::unknown_unit("Flow Rate", "gpx"));
    }

    #[test]
    fn test_unknown_category() {
        let err = convert("Temperature", 1.0, "C", "F").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("flow_rate".parse::<UnitCategory>().unwrap(), UnitCategory::FlowRate);
        assert_eq!("SOIL-WATER-CAPACITY".parse::<UnitCategory>().unwrap(), UnitCategory::SoilWaterCapacity);
        assert_eq!("Precipitation".parse::<UnitCategory>().unwrap(), UnitCategory::Precipitation);
        assert_eq!(UnitCategory::FlowRate.to_string(), "Flow Rate");
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&UnitCategory::FlowRate).unwrap();
        assert_eq!(json, "\"Flow Rate\"");
    }

    #[test]
    fn test_base_unit_identity() {
        for category in categories() {
            let base = category.base_unit();
            assert_eq!(base.factor, 1.0);
            let x = 123.456;
            assert_eq!(category.from_base(category.to_base(x, base.label).unwrap(), base.label).unwrap(), x);
        }
    }

    #[test]
    fn test_labels_unique_within_category() {
        for category in categories() {
            let mut seen = std::collections::HashSet::new();
            for unit in category.units() {
                for label in unit.labels() {
                    assert!(
                        seen.insert(normalize_label(label)),
                        "duplicate label '{}' in {}",
                        label,
                        category
                    );
                }
            }
        }
    }

    #[test]
    fn test_head_conversion() {
        // 100 ft of head is 43.35 psi
        let psi = UnitCategory::Pressure.convert(100.0, "ft of water", "psi").unwrap();
        assert!(approx_eq(psi, 43.3527, 1e-9));
    }

    #[test]
    fn test_month_is_730_hours() {
        let hours = UnitCategory::Time.convert(1.0, "months", "hr").unwrap();
        assert!(approx_eq(hours, 730.0, 1e-12));
        let per_hr = UnitCategory::Precipitation.convert(730.0, "in/month", "in/hr").unwrap();
        assert!(approx_eq(per_hr, 1.0, 1e-12));
    }

    #[test]
    fn test_round_trip_every_pair() {
        for category in categories() {
            for a in category.units() {
                for b in category.units() {
                    let x = 37.25;
                    let there = category.convert(x, a.label, b.label).unwrap();
                    let back = category.convert(there, b.label, a.label).unwrap();
                    assert!(approx_eq(back, x, 1e-9), "{} {} <-> {}", category, a.label, b.label);
                }
            }
        }
    }

    #[test]
    fn test_conversion_is_monotonic() {
        for category in categories() {
            for a in category.units() {
                for b in category.units() {
                    let low = category.convert(1.0, a.label, b.label).unwrap();
                    let high = category.convert(2.0, a.label, b.label).unwrap();
                    assert!(high > low, "{} {} -> {}", category, a.label, b.label);
                }
            }
        }
    }
}
