//! Qualitative ratings for computed hydraulic values.
//!
//! Ratings are advisory and never change a computed number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipe velocity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityRating {
    /// Below 3 ft/sec, sediment may settle
    Low,
    /// 3 to 5 ft/sec
    Ideal,
    /// 5 to 7 ft/sec, surge risk grows
    High,
    /// Above 7 ft/sec
    Excessive,
}

impl VelocityRating {
    pub fn classify(ft_per_sec: f64) -> Self {
        if ft_per_sec < 3.0 {
            VelocityRating::Low
        } else if ft_per_sec <= 5.0 {
            VelocityRating::Ideal
        } else if ft_per_sec <= 7.0 {
            VelocityRating::High
        } else {
            VelocityRating::Excessive
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VelocityRating::Low => "Low velocity; sediment may settle in the line",
            VelocityRating::Ideal => "Within the recommended 3-5 ft/sec range",
            VelocityRating::High => "High velocity; check for water hammer",
            VelocityRating::Excessive => "Excessive velocity; use a larger pipe",
        }
    }
}

impl fmt::Display for VelocityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Friction loss band, judged per 100 ft of pipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrictionLossRating {
    Excellent,
    Acceptable,
    High,
    VeryHigh,
}

impl FrictionLossRating {
    /// Rate a loss given in psi per 100 ft
    pub fn classify(psi_per_100_ft: f64) -> Self {
        if psi_per_100_ft < 2.0 {
            FrictionLossRating::Excellent
        } else if psi_per_100_ft <= 5.0 {
            FrictionLossRating::Acceptable
        } else if psi_per_100_ft <= 10.0 {
            FrictionLossRating::High
        } else {
            FrictionLossRating::VeryHigh
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FrictionLossRating::Excellent => "Excellent, minimal pressure loss",
            FrictionLossRating::Acceptable => "Acceptable for most systems",
            FrictionLossRating::High => "High loss; consider a larger pipe",
            FrictionLossRating::VeryHigh => "Very high loss; pipe is undersized",
        }
    }
}

impl fmt::Display for FrictionLossRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Scale a total loss to psi per 100 ft. `None` for a non-positive length.
pub fn friction_loss_per_100_ft(loss_psi: f64, length_ft: f64) -> Option<f64> {
    if length_ft > 0.0 && loss_psi.is_finite() {
        Some(loss_psi * 100.0 / length_ft)
    } else {
        None
    }
}
