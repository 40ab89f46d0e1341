//! # Pipe and Nozzle Hydraulics
//!
//! Closed-form hydraulic relationships in US customary working units.
//!
//! ## Notation
//!
//! - `Q` = Flow (gpm)
//! - `L` = Pipe length (ft)
//! - `D` = Pipe inside diameter (in)
//! - `C` = Hazen-Williams roughness coefficient (dimensionless)
//! - `P` = Pressure (psi)
//! - `d` = Nozzle orifice diameter (in)
//! - `V` = Velocity (ft/sec)
//!
//! ## References
//!
//! - Hazen-Williams equation, US customary form with the 4.53 psi constant
//! - NRCS National Engineering Handbook Part 652, Irrigation Guide, Chapter 6

use crate::materials::garden_hose::{length_factor, HoseSize};
use crate::units::{Feet, FtPerSec, Gallons, Gpm, Inches, Minutes, Psi};

/// Hazen-Williams constant for psi loss with L in ft, Q in gpm, D in in
pub const HAZEN_WILLIAMS_K: f64 = 4.53;

/// Hazen-Williams flow exponent
pub const HAZEN_WILLIAMS_FLOW_EXP: f64 = 1.852;

/// Hazen-Williams diameter exponent
pub const HAZEN_WILLIAMS_DIAMETER_EXP: f64 = 4.857;

/// Orifice constant for gpm with d in inches and P in psi
pub const ORIFICE_K: f64 = 29.84;

/// Velocity constant for ft/sec with Q in gpm and D in inches
pub const VELOCITY_K: f64 = 0.408;

// =============================================================================
// PIPE FRICTION
// =============================================================================

/// Friction loss through a pipe run (Hazen-Williams)
///
/// # Formula
/// ```text
/// Ploss = 4.53 · L · (Q/C)^1.852 / D^4.857
/// ```
///
/// Strictly increasing in `L` and `Q`, strictly decreasing in `C` and `D`.
#[inline]
pub fn hazen_williams_loss(length: Feet, flow: Gpm, c: f64, diameter: Inches) -> Psi {
    Psi(HAZEN_WILLIAMS_K * length.0 * (flow.0 / c).powf(HAZEN_WILLIAMS_FLOW_EXP)
        / diameter.0.powf(HAZEN_WILLIAMS_DIAMETER_EXP))
}

/// Smallest inside diameter that keeps friction loss at or below `max_loss`
///
/// Direct algebraic inversion of [`hazen_williams_loss`]:
/// ```text
/// D = [4.53 · L · (Q/C)^1.852 / Ploss]^(1/4.857)
/// ```
#[inline]
pub fn minimum_pipe_diameter(flow: Gpm, length: Feet, c: f64, max_loss: Psi) -> Inches {
    let ratio = HAZEN_WILLIAMS_K * length.0 * (flow.0 / c).powf(HAZEN_WILLIAMS_FLOW_EXP) / max_loss.0;
    Inches(ratio.powf(1.0 / HAZEN_WILLIAMS_DIAMETER_EXP))
}

// =============================================================================
// VELOCITY
// =============================================================================

/// Mean velocity of water in a full pipe
///
/// # Formula
/// ```text
/// V = 0.408 · Q / D²
/// ```
#[inline]
pub fn pipe_velocity(flow: Gpm, diameter: Inches) -> FtPerSec {
    FtPerSec(VELOCITY_K * flow.0 / (diameter.0 * diameter.0))
}

/// Inside diameter that carries `flow` at `velocity`
///
/// # Formula
/// ```text
/// D = √(0.408 · Q / V)
/// ```
#[inline]
pub fn diameter_for_velocity(flow: Gpm, velocity: FtPerSec) -> Inches {
    Inches((VELOCITY_K * flow.0 / velocity.0).sqrt())
}

// =============================================================================
// NOZZLES
// =============================================================================

/// Discharge of a round sprinkler nozzle
///
/// # Formula
/// ```text
/// Qn = 29.84 · C · d² · √P
/// ```
///
/// `discharge_coefficient` is typically 0.95 to 0.98 for a smooth nozzle.
#[inline]
pub fn nozzle_flow(diameter: Inches, pressure: Psi, discharge_coefficient: f64) -> Gpm {
    Gpm(ORIFICE_K * discharge_coefficient * diameter.0 * diameter.0 * pressure.0.sqrt())
}

/// Nozzle orifice diameter that discharges `flow` at `pressure`
///
/// # Formula
/// ```text
/// d = √(Qn / (29.84 · C · √P))
/// ```
#[inline]
pub fn nozzle_diameter(flow: Gpm, pressure: Psi, discharge_coefficient: f64) -> Inches {
    Inches((flow.0 / (ORIFICE_K * discharge_coefficient * pressure.0.sqrt())).sqrt())
}

// =============================================================================
// HOSES AND TANKS
// =============================================================================

/// Garden hose discharge from the size/pressure table and the length factor.
///
/// Returns `None` when the diameter, pressure or length is not a tabulated
/// value.
pub fn garden_hose_flow(diameter: Inches, pressure: Psi, length: Feet) -> Option<Gpm> {
    let size = HoseSize::from_inches(diameter.0)?;
    let base = size.flow_at(pressure.0)?;
    let factor = length_factor(length.0)?;
    Some(Gpm(base * factor))
}

/// Time to fill a container
///
/// # Formula
/// ```text
/// T = V / Q
/// ```
#[inline]
pub fn fill_time(volume: Gallons, flow: Gpm) -> Minutes {
    Minutes(volume.0 / flow.0)
}

/// Combined flow of `count` identical emitters
///
/// # Formula
/// ```text
/// Q = q N
/// ```
#[inline]
pub fn total_flow(emitter_flow: Gpm, count: f64) -> Gpm {
    emitter_flow * count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Gph;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        ((a - b) / b).abs() < tol
    }

    #[test]
    fn test_total_flow() {
        // 250 emitters at 0.5 gph
        let q = total_flow(Gph(0.5).into(), 250.0);
        assert!(approx_eq(q.0, 125.0 / 60.0, 1e-12));
    }

    #[test]
    fn test_velocity_4_inch() {
        let v = pipe_velocity(Gpm(100.0), Inches(4.026));
        assert!(approx_eq(v.0, 2.517_2, 1e-4), "got {}", v.0);
    }

    #[test]
    fn test_friction_loss_4_inch_pvc() {
        let loss = hazen_williams_loss(Feet(1000.0), Gpm(100.0), 150.0, Inches(4.026));
        assert!(loss.0 > 2.0 && loss.0 < 2.5, "got {}", loss.0);
    }

    #[test]
    fn test_friction_loss_monotonic() {
        let base = hazen_williams_loss(Feet(500.0), Gpm(50.0), 140.0, Inches(2.0));
        assert!(hazen_williams_loss(Feet(500.0), Gpm(60.0), 140.0, Inches(2.0)) > base);
        assert!(hazen_williams_loss(Feet(600.0), Gpm(50.0), 140.0, Inches(2.0)) > base);
        assert!(hazen_williams_loss(Feet(500.0), Gpm(50.0), 150.0, Inches(2.0)) < base);
        assert!(hazen_williams_loss(Feet(500.0), Gpm(50.0), 140.0, Inches(2.5)) < base);
    }

    #[test]
    fn test_minimum_diameter_inverts_friction_loss() {
        let d = Inches(3.068);
        let loss = hazen_williams_loss(Feet(800.0), Gpm(120.0), 150.0, d);
        let back = minimum_pipe_diameter(Gpm(120.0), Feet(800.0), 150.0, loss);
        assert!(approx_eq(back.0, d.0, 1e-10));
    }

    #[test]
    fn test_diameter_for_velocity_inverts_velocity() {
        let d = diameter_for_velocity(Gpm(100.0), FtPerSec(5.0));
        let v = pipe_velocity(Gpm(100.0), d);
        assert!(approx_eq(v.0, 5.0, 1e-12));
    }

    #[test]
    fn test_nozzle_round_trip() {
        let q = nozzle_flow(Inches(0.25), Psi(50.0), 0.97);
        // 29.84 * 0.97 * 0.0625 * 7.0711
        assert!(approx_eq(q.0, 12.792, 1e-3), "got {}", q.0);
        let d = nozzle_diameter(q, Psi(50.0), 0.97);
        assert!(approx_eq(d.0, 0.25, 1e-12));
    }

    #[test]
    fn test_garden_hose_flow() {
        // 5/8" at 50 psi, 100 ft: 12.5 gpm * 1.0
        let q = garden_hose_flow(Inches(0.625), Psi(50.0), Feet(100.0)).unwrap();
        assert_eq!(q.0, 12.5);
        // 3/4" at 60 psi, 50 ft: 22 * 2
        let q = garden_hose_flow(Inches(0.75), Psi(60.0), Feet(50.0)).unwrap();
        assert_eq!(q.0, 44.0);
    }

    #[test]
    fn test_garden_hose_off_table() {
        assert!(garden_hose_flow(Inches(1.0), Psi(50.0), Feet(100.0)).is_none());
        assert!(garden_hose_flow(Inches(0.5), Psi(55.0), Feet(100.0)).is_none());
        assert!(garden_hose_flow(Inches(0.5), Psi(50.0), Feet(110.0)).is_none());
    }

    #[test]
    fn test_fill_time() {
        assert_eq!(fill_time(Gallons(500.0), Gpm(10.0)).0, 50.0);
    }
}
