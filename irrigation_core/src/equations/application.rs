//! # Water Application and Scheduling
//!
//! Application rates, depths, run times and system capacity.
//!
//! ## Notation
//!
//! - `E` = Application efficiency (decimal, 0 < E ≤ 1)
//! - `PR` = Precipitation (application) rate (in/hr)
//! - `Q` = Flow (gpm unless noted)
//! - `A` = Irrigated area (acres unless noted)
//! - `X`, `Y` = Sprinkler spacing along and between laterals (ft)
//!
//! ## Constants
//!
//! - 231 = cubic inches per US gallon
//! - 96.25 ≈ 231 · 60 / 144, converts gpm over ft² to in/hr
//! - 452.57 = gpm per acre that applies 1 in/hr
//! - 27154 = US gallons per acre-inch
//! - 43560 = ft² per acre

use crate::units::{Acres, Days, Feet, Gph, Gpm, Hours, InPerDay, InPerFt, InPerHr, Inches, Minutes, SqFt};

/// Cubic inches per US gallon
pub const CUBIC_INCHES_PER_GALLON: f64 = 231.0;

/// Converts gpm per square foot to inches per hour
pub const SPRINKLER_RATE_K: f64 = 96.25;

/// gpm per acre for an application rate of 1 in/hr
pub const GPM_PER_ACRE_INCH_HOUR: f64 = 452.57;

/// Gallons per acre-inch
pub const GALLONS_PER_ACRE_INCH: f64 = 27_154.0;

/// Sprinkler rate constant as rounded in the set time equation
pub const SET_TIME_K: f64 = 96.3;

// =============================================================================
// APPLICATION RATES
// =============================================================================

/// Application rate under a drip grid
///
/// # Formula
/// ```text
/// PR = 231 · Qe · E / (R · S)
/// ```
///
/// # Arguments
/// * `emitter_flow` - Discharge per emitter
/// * `row_spacing` - Distance between drip rows
/// * `emitter_spacing` - Distance between emitters along a row
/// * `efficiency` - Application efficiency (decimal)
#[inline]
pub fn drip_application_rate(
    emitter_flow: Gph,
    row_spacing: Inches,
    emitter_spacing: Inches,
    efficiency: f64,
) -> InPerHr {
    InPerHr(CUBIC_INCHES_PER_GALLON * emitter_flow.0 * efficiency / (row_spacing.0 * emitter_spacing.0))
}

/// Application rate of a sprinkler grid
///
/// # Formula
/// ```text
/// PR = 96.25 · Qn · E / (X · Y)
/// ```
#[inline]
pub fn sprinkler_application_rate(
    nozzle_flow: Gpm,
    sprinkler_spacing: Feet,
    line_spacing: Feet,
    efficiency: f64,
) -> InPerHr {
    InPerHr(SPRINKLER_RATE_K * nozzle_flow.0 * efficiency / (sprinkler_spacing.0 * line_spacing.0))
}

/// Nozzle flow needed for a target application rate
///
/// # Formula
/// ```text
/// Qn = PR · X · Y / (96.25 · E)
/// ```
#[inline]
pub fn sprinkler_flow_for_rate(
    rate: InPerHr,
    sprinkler_spacing: Feet,
    line_spacing: Feet,
    efficiency: f64,
) -> Gpm {
    Gpm(rate.0 * sprinkler_spacing.0 * line_spacing.0 / (SPRINKLER_RATE_K * efficiency))
}

/// Average application rate of a flow spread over an area
///
/// # Formula
/// ```text
/// PR = Q / (452.57 · A)
/// ```
#[inline]
pub fn area_application_rate(flow: Gpm, area: Acres) -> InPerHr {
    InPerHr(flow.0 / (GPM_PER_ACRE_INCH_HOUR * area.0))
}

// =============================================================================
// DEPTHS
// =============================================================================

/// Depth of water applied over an area
///
/// # Formula
/// ```text
/// d = (Q · T) / (K · A) · E
/// ```
///
/// `k` pairs with the unit of `flow`: 453 for gpm, 1.01 for cfs.
#[inline]
pub fn water_depth(flow: f64, time: Hours, area: Acres, k: f64, efficiency: f64) -> Inches {
    Inches(flow * time.0 / (k * area.0) * efficiency)
}

// =============================================================================
// SCHEDULING
// =============================================================================

/// Run time per irrigation event
///
/// # Formula
/// ```text
/// T = 60 · I · W / (PR · E)
/// ```
///
/// # Arguments
/// * `interval` - Days between irrigations
/// * `water_use` - Crop water use
/// * `rate` - System application rate
/// * `efficiency` - Application efficiency (decimal)
#[inline]
pub fn irrigation_run_time(interval: Days, water_use: InPerDay, rate: InPerHr, efficiency: f64) -> Minutes {
    Minutes(60.0 * interval.0 * water_use.0 / (rate.0 * efficiency))
}

/// Days between irrigations that keep depletion within the allowable limit
///
/// # Formula
/// ```text
/// F = AWC · RZ · MAD / ETc
/// ```
#[inline]
pub fn irrigation_frequency(
    available_water: InPerFt,
    root_zone: Feet,
    allowable_depletion: f64,
    water_use: InPerDay,
) -> Days {
    Days(available_water.0 * root_zone.0 * allowable_depletion / water_use.0)
}

/// Hours to apply a net depth over a set
///
/// # Formula
/// ```text
/// T = D · A · 43560 / (96.3 · Q · E)
/// ```
#[inline]
pub fn irrigation_set_time(net_application: Inches, area: Acres, flow: Gpm, efficiency: f64) -> Hours {
    let area_sqft: SqFt = area.into();
    Hours(net_application.0 * area_sqft.0 / (SET_TIME_K * flow.0 * efficiency))
}

// =============================================================================
// SYSTEM CAPACITY
// =============================================================================

/// Area a supply can keep irrigated
///
/// # Formula
/// ```text
/// A = 96.25 · Q · H · E / Wn
/// ```
///
/// `H` is operating hours per day, `Wn` the daily water need.
#[inline]
pub fn irrigatable_area(flow: Gpm, water_need: InPerDay, operating_hours: Hours, efficiency: f64) -> SqFt {
    SqFt(SPRINKLER_RATE_K * flow.0 * operating_hours.0 * efficiency / water_need.0)
}

/// Flow needed to apply a net depth over an area within a schedule
///
/// # Formula
/// ```text
/// Q = 27154 · d · A / (60 · H · D · E)
/// ```
///
/// `H` is operating hours per day, `D` the number of days to cover the area.
#[inline]
pub fn system_flow_requirement(
    net_application: Inches,
    area: Acres,
    hours_per_day: Hours,
    days: Days,
    efficiency: f64,
) -> Gpm {
    Gpm(GALLONS_PER_ACRE_INCH * net_application.0 * area.0 / (60.0 * hours_per_day.0 * days.0 * efficiency))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        ((a - b) / b).abs() < tol
    }

    #[test]
    fn test_drip_application_rate() {
        // 1 gph emitters on a 30" x 12" grid
        let pr = drip_application_rate(Gph(1.0), Inches(30.0), Inches(12.0), 0.95);
        assert!(approx_eq(pr.0, 0.609_583, 1e-6), "got {}", pr.0);
    }

    #[test]
    fn test_sprinkler_rate_round_trip() {
        let pr = sprinkler_application_rate(Gpm(4.0), Feet(40.0), Feet(40.0), 0.8);
        assert!(approx_eq(pr.0, 0.1925, 1e-12));
        let q = sprinkler_flow_for_rate(pr, Feet(40.0), Feet(40.0), 0.8);
        assert!(approx_eq(q.0, 4.0, 1e-12));
    }

    #[test]
    fn test_area_application_rate() {
        let pr = area_application_rate(Gpm(452.57), Acres(1.0));
        assert!(approx_eq(pr.0, 1.0, 1e-12));
    }

    #[test]
    fn test_water_depth_gpm_basis() {
        // 453 gpm for 1 hr over 1 acre is 1 inch
        let d = water_depth(453.0, Hours(1.0), Acres(1.0), 453.0, 1.0);
        assert!(approx_eq(d.0, 1.0, 1e-12));
    }

    #[test]
    fn test_run_time() {
        // 3 days at 0.2 in/day, 0.1 in/hr, 90%: 400 minutes
        let t = irrigation_run_time(Days(3.0), InPerDay(0.2), InPerHr(0.1), 0.9);
        assert!(approx_eq(t.0, 400.0, 1e-12));
    }

    #[test]
    fn test_frequency() {
        // 1.5 in/ft * 2 ft * 0.5 / 0.25 in/day = 6 days
        let f = irrigation_frequency(InPerFt(1.5), Feet(2.0), 0.5, InPerDay(0.25));
        assert!(approx_eq(f.0, 6.0, 1e-12));
    }

    #[test]
    fn test_set_time() {
        let t = irrigation_set_time(Inches(1.0), Acres(1.0), Gpm(452.0), 1.0);
        assert!(approx_eq(t.0, 43_560.0 / (96.3 * 452.0), 1e-12));
    }

    #[test]
    fn test_irrigatable_area() {
        let a = irrigatable_area(Gpm(10.0), InPerDay(0.25), Hours(8.0), 0.8);
        assert!(approx_eq(a.0, 24_640.0, 1e-12));
    }

    #[test]
    fn test_system_flow_requirement() {
        // 1 inch over 10 acres in 5 days at 20 hr/day, 80%
        let q = system_flow_requirement(Inches(1.0), Acres(10.0), Hours(20.0), Days(5.0), 0.8);
        assert!(approx_eq(q.0, 56.570_833, 1e-6), "got {}", q.0);
    }
}
