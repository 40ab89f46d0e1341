//! # Pump Power
//!
//! The three-stage horsepower chain for a pumping plant, and standard motor
//! sizing.
//!
//! ```text
//! WHP = Q · H / 3960
//! BHP = WHP / ηp
//! MHP = BHP / ηm
//! ```
//!
//! 3960 is the number of gpm·ft in one water horsepower
//! (33 000 ft·lb/min ÷ 8.33 lb/gal).

use serde::{Deserialize, Serialize};

use crate::units::{FeetOfHead, Gpm, Horsepower};

/// gpm·ft of head per water horsepower
pub const WATER_HP_K: f64 = 3960.0;

/// Standard NEMA motor ratings (hp)
pub const STANDARD_MOTOR_SIZES: [f64; 25] = [
    1.0, 1.5, 2.0, 3.0, 5.0, 7.5, 10.0, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0, 60.0, 75.0, 100.0, 125.0,
    150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 450.0, 500.0,
];

/// Power the water receives from the pump
#[inline]
pub fn water_horsepower(flow: Gpm, head: FeetOfHead) -> Horsepower {
    Horsepower(flow.0 * head.0 / WATER_HP_K)
}

/// Power the pump shaft must receive
#[inline]
pub fn brake_horsepower(water_hp: Horsepower, pump_efficiency: f64) -> Horsepower {
    water_hp / pump_efficiency
}

/// Power the motor draws
#[inline]
pub fn motor_horsepower(brake_hp: Horsepower, motor_efficiency: f64) -> Horsepower {
    brake_hp / motor_efficiency
}

/// Every stage of the horsepower chain for one operating point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PumpPower {
    pub water_hp: Horsepower,
    pub brake_hp: Horsepower,
    pub motor_hp: Horsepower,
}

/// Run the full chain: water, brake and motor horsepower.
///
/// # Example
///
/// ```rust
/// use irrigation_core::equations::pump::horsepower_chain;
/// use irrigation_core::units::{FeetOfHead, Gpm};
///
/// let power = horsepower_chain(Gpm(100.0), FeetOfHead(100.0), 0.70, 0.90);
/// assert!((power.water_hp.0 - 2.525).abs() < 1e-3);
/// assert!((power.motor_hp.0 - 4.008).abs() < 1e-3);
/// ```
pub fn horsepower_chain(flow: Gpm, head: FeetOfHead, pump_efficiency: f64, motor_efficiency: f64) -> PumpPower {
    let water_hp = water_horsepower(flow, head);
    let brake_hp = brake_horsepower(water_hp, pump_efficiency);
    let motor_hp = motor_horsepower(brake_hp, motor_efficiency);
    PumpPower { water_hp, brake_hp, motor_hp }
}

/// Smallest standard motor rating at or above `required · margin`.
///
/// Above the largest tabulated rating the result is rounded up to the next
/// multiple of 5 hp.
pub fn recommended_motor_size(required: Horsepower, margin: f64) -> Horsepower {
    let target = required.0 * margin;
    STANDARD_MOTOR_SIZES
        .iter()
        .copied()
        .find(|&size| size >= target)
        .map(Horsepower)
        .unwrap_or_else(|| Horsepower((target / 5.0).ceil() * 5.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        ((a - b) / b).abs() < tol
    }

    #[test]
    fn test_horsepower_chain() {
        let p = horsepower_chain(Gpm(100.0), FeetOfHead(100.0), 0.70, 0.90);
        assert!(approx_eq(p.water_hp.0, 2.525_253, 1e-6));
        assert!(approx_eq(p.brake_hp.0, 3.607_504, 1e-6));
        assert!(approx_eq(p.motor_hp.0, 4.008_338, 1e-6));
    }

    #[test]
    fn test_stages_match_chain() {
        let p = horsepower_chain(Gpm(250.0), FeetOfHead(180.0), 0.75, 0.92);
        let whp = water_horsepower(Gpm(250.0), FeetOfHead(180.0));
        assert_eq!(p.water_hp, whp);
        assert_eq!(p.brake_hp, brake_horsepower(whp, 0.75));
        assert_eq!(p.motor_hp, motor_horsepower(p.brake_hp, 0.92));
    }

    #[test]
    fn test_recommended_motor_size() {
        // 4.0 * 1.1 = 4.4 -> 5 hp
        assert_eq!(recommended_motor_size(Horsepower(4.0), 1.1).0, 5.0);
        // exact hit stays
        assert_eq!(recommended_motor_size(Horsepower(10.0), 1.0).0, 10.0);
        // 38 * 1.1 = 41.8 -> 50
        assert_eq!(recommended_motor_size(Horsepower(38.0), 1.1).0, 50.0);
    }

    #[test]
    fn test_recommended_motor_size_beyond_table() {
        // 480 * 1.1 = 528 -> 530
        assert_eq!(recommended_motor_size(Horsepower(480.0), 1.1).0, 530.0);
    }
}
