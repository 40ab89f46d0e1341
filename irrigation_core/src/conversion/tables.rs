//! Per-category unit tables.
//!
//! The first entry of each table is the category's base unit (factor 1.0).
//! `factor` is the number of base units in one of the labelled unit.

use super::constants::*;
use super::{UnitCategory, UnitDefinition};

use UnitCategory::*;

const fn def(
    label: &'static str,
    aliases: &'static [&'static str],
    category: UnitCategory,
    factor: f64,
) -> UnitDefinition {
    UnitDefinition { label, aliases, category, factor }
}

// ============================================================================
// Flow Rate (base: liters per second)
// ============================================================================

pub(super) static FLOW_RATE: &[UnitDefinition] = &[
    def("lps", &["l/s", "liters/sec"], FlowRate, 1.0),
    def("lpm", &["l/min", "liters/min"], FlowRate, 1.0 / MINUTE_S),
    def("lph", &["l/hr", "liters/hr"], FlowRate, 1.0 / HOUR_S),
    def("lpd", &["l/day", "liters/day"], FlowRate, 1.0 / DAY_S),
    def("gpm", &["gal/min"], FlowRate, GALLON_L / MINUTE_S),
    def("gph", &["gal/hr"], FlowRate, GALLON_L / HOUR_S),
    def("gpd", &["gal/day"], FlowRate, GALLON_L / DAY_S),
    def("cfs", &["cu. ft/sec", "ft3/s"], FlowRate, CUFT_L),
    def("cfm", &["cu. ft/min", "ft3/min"], FlowRate, CUFT_L / MINUTE_S),
    def("cms", &["cu. m/sec", "m3/s"], FlowRate, 1_000.0),
    def("cu. m/hr", &["m3/hr", "cmh"], FlowRate, 1_000.0 / HOUR_S),
    def("cu. yd/min", &["yd3/min"], FlowRate, CUYD_L / MINUTE_S),
    def("mgd", &[], FlowRate, 1.0e6 * GALLON_L / DAY_S),
    def("acre-in/day", &[], FlowRate, ACRE_IN_L / DAY_S),
    def("acre-in/hour", &["acre-in/hr"], FlowRate, ACRE_IN_L / HOUR_S),
    def("acre-ft/day", &[], FlowRate, ACRE_FT_L / DAY_S),
];

// ============================================================================
// Area (base: square meters)
// ============================================================================

pub(super) static AREA: &[UnitDefinition] = &[
    def("sq. meter", &["m2", "sq. m"], Area, 1.0),
    def("acre", &["acres", "ac"], Area, ACRE_M2),
    def("hectare", &["hectares", "ha"], Area, HECTARE_M2),
    def("sq. in.", &["in2", "sq. in"], Area, INCH_M * INCH_M),
    def("sq. ft.", &["ft2", "sq. ft"], Area, SQFT_M2),
    def("sq. cm.", &["cm2", "sq. cm"], Area, 1.0e-4),
    def("sq. yd", &["yd2", "sq. yd."], Area, SQFT_M2 * 9.0),
    def("sq. km", &["km2", "sq. km."], Area, 1.0e6),
    def("sq. mile", &["mi2", "sq. mi"], Area, MILE_M * MILE_M),
];

// ============================================================================
// Distance (base: meters)
// ============================================================================

pub(super) static DISTANCE: &[UnitDefinition] = &[
    def("m", &["meter", "meters"], Distance, 1.0),
    def("ft", &["feet", "foot"], Distance, FOOT_M),
    def("in", &["inch", "inches"], Distance, INCH_M),
    def("mm", &["millimeters"], Distance, 0.001),
    def("cm", &["centimeters"], Distance, 0.01),
    def("yd", &["yard", "yards"], Distance, FOOT_M * 3.0),
    def("mile", &["miles", "mi"], Distance, MILE_M),
    def("km", &["kilometers"], Distance, 1_000.0),
    def("1/8 in", &[], Distance, INCH_M / 8.0),
    def("1/16 in", &[], Distance, INCH_M / 16.0),
    def("1/32 in", &[], Distance, INCH_M / 32.0),
    def("1/64 in", &[], Distance, INCH_M / 64.0),
    def("1/128 in", &[], Distance, INCH_M / 128.0),
];

// ============================================================================
// Time (base: seconds)
// ============================================================================

pub(super) static TIME: &[UnitDefinition] = &[
    def("sec", &["s", "seconds"], Time, 1.0),
    def("min", &["minutes"], Time, MINUTE_S),
    def("hr", &["h", "hours"], Time, HOUR_S),
    def("days", &["day", "d"], Time, DAY_S),
    def("weeks", &["week", "wk"], Time, WEEK_S),
    def("months", &["month"], Time, MONTH_H * HOUR_S),
    def("yrs", &["year", "years"], Time, YEAR_H * HOUR_S),
];

// ============================================================================
// Volume (base: liters)
// ============================================================================

pub(super) static VOLUME: &[UnitDefinition] = &[
    def("liter", &["liters", "l"], Volume, 1.0),
    def("ml", &["milliliters"], Volume, 0.001),
    def("cu. in.", &["in3", "cu. in"], Volume, CUIN_L),
    def("cu. ft.", &["ft3", "cu. ft"], Volume, CUFT_L),
    def("cu. yd.", &["yd3", "cu. yd"], Volume, CUYD_L),
    def("gal", &["gallons", "gal US"], Volume, GALLON_L),
    def("gal UK", &["imperial gal"], Volume, UK_GALLON_L),
    def("pints", &["pint"], Volume, GALLON_L / 8.0),
    def("quarts", &["quart"], Volume, GALLON_L / 4.0),
    def("cups", &["cup"], Volume, 0.24),
    def("cu. meter", &["m3", "cu. m"], Volume, 1_000.0),
    def("acre-in", &["acre-inch"], Volume, ACRE_IN_L),
    def("acre-ft", &["acre-foot"], Volume, ACRE_FT_L),
    def("hectare-mm", &["ha-mm"], Volume, HECTARE_M2 * 0.001 * 1_000.0),
    def("hectare-m", &["ha-m"], Volume, HECTARE_M2 * 1_000.0),
];

// ============================================================================
// Pressure (base: psi)
// ============================================================================

pub(super) static PRESSURE: &[UnitDefinition] = &[
    def("psi", &["lb/in2"], Pressure, 1.0),
    def("bar", &["bars"], Pressure, 1.0e5 / PSI_PA),
    def("milli bars", &["mbar", "millibars"], Pressure, 100.0 / PSI_PA),
    def("kPa", &["kilopascals"], Pressure, 1_000.0 / PSI_PA),
    def("atm", &["atmospheres"], Pressure, ATM_PA / PSI_PA),
    def("in of Mercury", &["inHg", "in Hg"], Pressure, IN_HG_PA / PSI_PA),
    def("ft of water", &["ft of head", "ft H2O", "ft"], Pressure, PSI_PER_FT_WATER),
    def("m of water", &["m of head", "m H2O", "m"], Pressure, PSI_PER_M_WATER),
];

// ============================================================================
// Power (base: horsepower)
// ============================================================================

pub(super) static POWER: &[UnitDefinition] = &[
    def("hp", &["horsepower"], Power, 1.0),
    def("kW", &["kilowatts"], Power, 1_000.0 / HP_W),
    def("BTU/min", &[], Power, BTU_J / MINUTE_S / HP_W),
    def("BTU/hr", &[], Power, BTU_J / HOUR_S / HP_W),
];

// ============================================================================
// Precipitation (base: inches per hour)
// ============================================================================

/// Inches per meter
const IN_PER_M: f64 = 1.0 / INCH_M;

pub(super) static PRECIPITATION: &[UnitDefinition] = &[
    def("in/hr", &["inches/hr"], Precipitation, 1.0),
    def("in/day", &["inches/day"], Precipitation, 1.0 / 24.0),
    def("in/month", &["inches/month"], Precipitation, 1.0 / MONTH_H),
    def("mm/hr", &[], Precipitation, IN_PER_M * 0.001),
    def("mm/day", &[], Precipitation, IN_PER_M * 0.001 / 24.0),
    def("mm/month", &[], Precipitation, IN_PER_M * 0.001 / MONTH_H),
    def("cm/hr", &[], Precipitation, IN_PER_M * 0.01),
    def("cm/day", &[], Precipitation, IN_PER_M * 0.01 / 24.0),
    def("cm/month", &[], Precipitation, IN_PER_M * 0.01 / MONTH_H),
    def(
        "gpm/acre",
        &[],
        Precipitation,
        GALLON_L * 0.001 * MINUTE_S / ACRE_M2 * IN_PER_M,
    ),
    def(
        "cfs/acre",
        &[],
        Precipitation,
        CUFT_L * 0.001 * HOUR_S / ACRE_M2 * IN_PER_M,
    ),
    def(
        "lps/ha",
        &["lps/hectare"],
        Precipitation,
        0.001 * HOUR_S / HECTARE_M2 * IN_PER_M,
    ),
    def(
        "cms/ha",
        &["cms/hectare"],
        Precipitation,
        HOUR_S / HECTARE_M2 * IN_PER_M,
    ),
];

// ============================================================================
// Salinity (base: deciSiemens per meter)
// ============================================================================

pub(super) static SALINITY: &[UnitDefinition] = &[
    def("dS/m", &[], Salinity, 1.0),
    def("mS/cm", &["mmhos/cm"], Salinity, 1.0),
    def("microS/cm", &["uS/cm", "micromhos/cm"], Salinity, 0.001),
    def("mg/l", &["mg/liter"], Salinity, 1.0 / MG_L_PER_DS_M),
    def("ppm", &[], Salinity, 1.0 / MG_L_PER_DS_M),
    def(
        "tons/acre-ft",
        &[],
        Salinity,
        SHORT_TON_MG / ACRE_FT_L / MG_L_PER_DS_M,
    ),
];

// ============================================================================
// Speed (base: meters per second)
// ============================================================================

pub(super) static SPEED: &[UnitDefinition] = &[
    def("m/sec", &["m/s"], Speed, 1.0),
    def("m/min", &[], Speed, 1.0 / MINUTE_S),
    def("m/hr", &[], Speed, 1.0 / HOUR_S),
    def("ft/sec", &["ft/s", "fps"], Speed, FOOT_M),
    def("ft/min", &["fpm"], Speed, FOOT_M / MINUTE_S),
    def("ft/hr", &[], Speed, FOOT_M / HOUR_S),
    def("in/min", &[], Speed, INCH_M / MINUTE_S),
    def("mph", &["mi/hr"], Speed, MILE_M / HOUR_S),
    def("km/hr", &["kph"], Speed, 1_000.0 / HOUR_S),
];

// ============================================================================
// Efficiency, soil water capacity, dimensionless
// ============================================================================

pub(super) static EFFICIENCY: &[UnitDefinition] = &[
    def("decimal", &["fraction"], Efficiency, 1.0),
    def("%", &["percent"], Efficiency, 0.01),
];

pub(super) static SOIL_WATER_CAPACITY: &[UnitDefinition] = &[
    def("in/ft", &["inches/ft"], SoilWaterCapacity, 1.0),
    def("mm/m", &[], SoilWaterCapacity, 0.001 / INCH_M * FOOT_M),
    def("cm/m", &[], SoilWaterCapacity, 0.01 / INCH_M * FOOT_M),
];

pub(super) static DIMENSIONLESS: &[UnitDefinition] = &[
    def("-", &["", "unitless"], Dimensionless, 1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        ((a - b) / b).abs() < tol
    }

    fn factor(table: &[UnitDefinition], label: &str) -> f64 {
        table
            .iter()
            .find(|u| u.label == label)
            .map(|u| u.factor)
            .unwrap()
    }

    #[test]
    fn test_first_entry_is_base() {
        for table in [
            FLOW_RATE,
            AREA,
            DISTANCE,
            TIME,
            VOLUME,
            PRESSURE,
            POWER,
            PRECIPITATION,
            SALINITY,
            SPEED,
            EFFICIENCY,
            SOIL_WATER_CAPACITY,
            DIMENSIONLESS,
        ] {
            assert_eq!(table[0].factor, 1.0, "{} is not a base unit", table[0].label);
        }
    }

    #[test]
    fn test_derived_precipitation_factors() {
        // 1 gpm over one acre is 1/452.57 in/hr
        assert!(approx_eq(factor(PRECIPITATION, "gpm/acre"), 1.0 / 452.57, 1e-4));
        assert!(approx_eq(factor(PRECIPITATION, "cfs/acre"), 0.991_736, 1e-5));
        assert!(approx_eq(factor(PRECIPITATION, "lps/ha"), 0.014_173_2, 1e-5));
    }

    #[test]
    fn test_salinity_tons_per_acre_ft() {
        // 1 ton/acre-ft is about 735 mg/l
        let mg_l = factor(SALINITY, "tons/acre-ft") * MG_L_PER_DS_M;
        assert!(approx_eq(mg_l, 735.47, 1e-4));
    }

    #[test]
    fn test_pressure_factors() {
        assert!(approx_eq(factor(PRESSURE, "bar"), 14.503_773_8, 1e-8));
        assert!(approx_eq(factor(PRESSURE, "atm"), 14.695_948_8, 1e-8));
        assert!(approx_eq(factor(PRESSURE, "in of Mercury"), 0.491_154, 1e-5));
    }

    #[test]
    fn test_power_factors() {
        assert!(approx_eq(factor(POWER, "kW"), 1.341_022, 1e-6));
        assert!(approx_eq(factor(POWER, "BTU/min"), 0.023_580_9, 1e-5));
    }

    #[test]
    fn test_soil_water_capacity() {
        assert!(approx_eq(factor(SOIL_WATER_CAPACITY, "mm/m"), 0.012, 1e-12));
        assert!(approx_eq(factor(SOIL_WATER_CAPACITY, "cm/m"), 0.12, 1e-12));
    }
}
