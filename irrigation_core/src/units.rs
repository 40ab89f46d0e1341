//! # Working Unit Types
//!
//! Type-safe wrappers for the US customary working units the irrigation
//! formulas are written in. Each formula's empirical constant (231, 96.25,
//! 4.53, 0.408, 3960 ...) only holds for one specific unit set, so the
//! equation functions take these wrappers instead of bare `f64`s.
//!
//! The runtime, label-driven conversions live in [`crate::conversion`]. These
//! types are what the evaluator hands to [`crate::equations`] once every input
//! has been normalized.
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::units::{Feet, Inches, Gph, Gpm};
//!
//! let spacing = Feet(2.5);
//! let spacing_in: Inches = spacing.into();
//! assert_eq!(spacing_in.0, 30.0);
//!
//! let emitter: Gpm = Gph(120.0).into();
//! assert_eq!(emitter.0, 2.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::conversion::constants::SQFT_PER_ACRE;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches (also used for depth of water)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Flow Units
// ============================================================================

/// Flow in US gallons per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gpm(pub f64);

/// Flow in US gallons per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gph(pub f64);

impl From<Gph> for Gpm {
    fn from(gph: Gph) -> Self {
        Gpm(gph.0 / 60.0)
    }
}

impl From<Gpm> for Gph {
    fn from(gpm: Gpm) -> Self {
        Gph(gpm.0 * 60.0)
    }
}

// ============================================================================
// Pressure and Head
// ============================================================================

/// Pressure in pounds per square inch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Total dynamic head in feet of water
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeetOfHead(pub f64);

// ============================================================================
// Rates of Water Application
// ============================================================================

/// Application (precipitation) rate in inches per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InPerHr(pub f64);

/// Crop water use or water need in inches per day
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InPerDay(pub f64);

impl From<InPerDay> for InPerHr {
    fn from(v: InPerDay) -> Self {
        InPerHr(v.0 / 24.0)
    }
}

/// Available water holding capacity in inches of water per foot of soil
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InPerFt(pub f64);

// ============================================================================
// Area and Volume
// ============================================================================

/// Area in acres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Acres(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl From<Acres> for SqFt {
    fn from(acres: Acres) -> Self {
        SqFt(acres.0 * SQFT_PER_ACRE)
    }
}

impl From<SqFt> for Acres {
    fn from(sqft: SqFt) -> Self {
        Acres(sqft.0 / SQFT_PER_ACRE)
    }
}

/// Volume in US gallons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallons(pub f64);

// ============================================================================
// Time
// ============================================================================

/// Duration in minutes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(pub f64);

/// Duration in hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(pub f64);

/// Duration in days
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Days(pub f64);

impl From<Hours> for Minutes {
    fn from(hr: Hours) -> Self {
        Minutes(hr.0 * 60.0)
    }
}

impl From<Minutes> for Hours {
    fn from(min: Minutes) -> Self {
        Hours(min.0 / 60.0)
    }
}

impl From<Days> for Hours {
    fn from(days: Days) -> Self {
        Hours(days.0 * 24.0)
    }
}

// ============================================================================
// Power and Velocity
// ============================================================================

/// Power in horsepower
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Horsepower(pub f64);

/// Velocity in feet per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FtPerSec(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Gpm);
impl_arithmetic!(Gph);
impl_arithmetic!(Psi);
impl_arithmetic!(FeetOfHead);
impl_arithmetic!(InPerHr);
impl_arithmetic!(InPerDay);
impl_arithmetic!(InPerFt);
impl_arithmetic!(Acres);
impl_arithmetic!(SqFt);
impl_arithmetic!(Gallons);
impl_arithmetic!(Minutes);
impl_arithmetic!(Hours);
impl_arithmetic!(Days);
impl_arithmetic!(Horsepower);
impl_arithmetic!(FtPerSec);
