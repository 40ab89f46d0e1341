//! Authoritative physical constants.
//!
//! Every conversion factor in [`super::tables`] is derived from these values,
//! so a given physical relationship (gpm to lps, acre to square meters ...) is
//! encoded exactly once.

/// Liters per US gallon (exact)
pub const GALLON_L: f64 = 3.785_411_784;

/// Liters per imperial gallon (exact)
pub const UK_GALLON_L: f64 = 4.546_09;

/// Meters per foot (exact)
pub const FOOT_M: f64 = 0.3048;

/// Meters per inch (exact)
pub const INCH_M: f64 = 0.0254;

/// Meters per statute mile (exact)
pub const MILE_M: f64 = 1_609.344;

/// Square feet per acre (exact)
pub const SQFT_PER_ACRE: f64 = 43_560.0;

/// Square meters per square foot
pub const SQFT_M2: f64 = FOOT_M * FOOT_M;

/// Square meters per acre
pub const ACRE_M2: f64 = SQFT_PER_ACRE * SQFT_M2;

/// Square meters per hectare
pub const HECTARE_M2: f64 = 10_000.0;

/// Liters per cubic foot
pub const CUFT_L: f64 = SQFT_M2 * FOOT_M * 1_000.0;

/// Liters per cubic inch
pub const CUIN_L: f64 = INCH_M * INCH_M * INCH_M * 1_000.0;

/// Liters per cubic yard
pub const CUYD_L: f64 = CUFT_L * 27.0;

/// Liters per acre-inch (one inch of water over one acre)
pub const ACRE_IN_L: f64 = SQFT_PER_ACRE / 12.0 * CUFT_L;

/// Liters per acre-foot
pub const ACRE_FT_L: f64 = ACRE_IN_L * 12.0;

/// Pounds per square inch per foot of water column
pub const PSI_PER_FT_WATER: f64 = 0.433_527;

/// Pounds per square inch per meter of water column
pub const PSI_PER_M_WATER: f64 = PSI_PER_FT_WATER / FOOT_M;

/// Pascals per pound per square inch
pub const PSI_PA: f64 = 6_894.757_293_168;

/// Pascals per standard atmosphere (exact)
pub const ATM_PA: f64 = 101_325.0;

/// Pascals per inch of mercury (0 °C)
pub const IN_HG_PA: f64 = 3_386.389;

/// Watts per mechanical horsepower
pub const HP_W: f64 = 745.699_872;

/// Joules per international table BTU
pub const BTU_J: f64 = 1_055.055_852_62;

/// Seconds per minute, hour, day and week
pub const MINUTE_S: f64 = 60.0;
pub const HOUR_S: f64 = 3_600.0;
pub const DAY_S: f64 = 86_400.0;
pub const WEEK_S: f64 = DAY_S * 7.0;

/// Hours per month (a 365-day year split into twelve)
pub const MONTH_H: f64 = 730.0;

/// Hours per 365-day year
pub const YEAR_H: f64 = 8_760.0;

/// Milligrams per short ton
pub const SHORT_TON_MG: f64 = 2_000.0 * 453_592.37;

/// Milligrams per liter of dissolved salts per dS/m of electrical conductivity
pub const MG_L_PER_DS_M: f64 = 640.0;

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        ((a - b) / b).abs() < tol
    }

    #[test]
    fn test_derived_volumes() {
        assert!(approx_eq(CUFT_L, 28.316_846_592, 1e-12));
        assert!(approx_eq(CUIN_L, 0.016_387_064, 1e-12));
        assert!(approx_eq(ACRE_FT_L, 1_233_481.837_547_52, 1e-12));
    }

    #[test]
    fn test_acre_in_square_meters() {
        assert!(approx_eq(ACRE_M2, 4_046.856_422_4, 1e-12));
    }

    #[test]
    fn test_water_column() {
        assert!(approx_eq(PSI_PER_M_WATER, 1.42233, 1e-5));
    }

    #[test]
    fn test_cfs_in_gpm() {
        // 448.831 gpm per cfs
        let gpm_per_cfs = CUFT_L / (GALLON_L / 60.0);
        assert!(approx_eq(gpm_per_cfs, 448.831, 1e-6));
    }
}
