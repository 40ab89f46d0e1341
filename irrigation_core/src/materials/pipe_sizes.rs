//! PVC Schedule 40 Pipe Sizes
//!
//! Nominal sizes with their inside diameters, for turning a computed minimum
//! diameter into a pipe that can actually be bought.

use serde::{Deserialize, Serialize};

/// PVC Schedule 40 nominal pipe size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PipeSize {
    /// 1" (1.049" ID)
    P1,
    /// 1-1/4" (1.380" ID)
    P1_25,
    /// 1-1/2" (1.610" ID)
    P1_5,
    /// 2" (2.067" ID)
    P2,
    /// 2-1/2" (2.469" ID)
    P2_5,
    /// 3" (3.068" ID)
    P3,
    /// 4" (4.026" ID)
    P4,
    /// 6" (6.065" ID)
    P6,
    /// 8" (7.981" ID)
    P8,
    /// 10" (10.020" ID)
    P10,
    /// 12" (11.938" ID)
    P12,
}

impl PipeSize {
    /// All sizes, smallest first
    pub const ALL: [PipeSize; 11] = [
        PipeSize::P1,
        PipeSize::P1_25,
        PipeSize::P1_5,
        PipeSize::P2,
        PipeSize::P2_5,
        PipeSize::P3,
        PipeSize::P4,
        PipeSize::P6,
        PipeSize::P8,
        PipeSize::P10,
        PipeSize::P12,
    ];

    /// Inside diameter in inches
    pub fn inside_diameter_in(&self) -> f64 {
        match self {
            PipeSize::P1 => 1.049,
            PipeSize::P1_25 => 1.380,
            PipeSize::P1_5 => 1.610,
            PipeSize::P2 => 2.067,
            PipeSize::P2_5 => 2.469,
            PipeSize::P3 => 3.068,
            PipeSize::P4 => 4.026,
            PipeSize::P6 => 6.065,
            PipeSize::P8 => 7.981,
            PipeSize::P10 => 10.020,
            PipeSize::P12 => 11.938,
        }
    }

    /// Nominal size label (e.g., "1-1/2\"")
    pub fn display_name(&self) -> &'static str {
        match self {
            PipeSize::P1 => "1\"",
            PipeSize::P1_25 => "1-1/4\"",
            PipeSize::P1_5 => "1-1/2\"",
            PipeSize::P2 => "2\"",
            PipeSize::P2_5 => "2-1/2\"",
            PipeSize::P3 => "3\"",
            PipeSize::P4 => "4\"",
            PipeSize::P6 => "6\"",
            PipeSize::P8 => "8\"",
            PipeSize::P10 => "10\"",
            PipeSize::P12 => "12\"",
        }
    }

    /// Size whose inside diameter is closest to `inside_diameter_in`
    pub fn nearest(inside_diameter_in: f64) -> PipeSize {
        let mut best = PipeSize::P1;
        let mut best_diff = f64::INFINITY;
        for size in PipeSize::ALL {
            let diff = (size.inside_diameter_in() - inside_diameter_in).abs();
            if diff < best_diff {
                best = size;
                best_diff = diff;
            }
        }
        best
    }

    /// Smallest size with at least the required inside diameter.
    ///
    /// Returns `None` when the requirement exceeds 12".
    pub fn smallest_at_least(required_in: f64) -> Option<PipeSize> {
        PipeSize::ALL
            .iter()
            .copied()
            .find(|s| s.inside_diameter_in() >= required_in)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_ascending() {
        for pair in PipeSize::ALL.windows(2) {
            assert!(pair[0].inside_diameter_in() < pair[1].inside_diameter_in());
        }
    }

    #[test]
    fn test_nearest() {
        assert_eq!(PipeSize::nearest(4.0), PipeSize::P4);
        assert_eq!(PipeSize::nearest(0.5), PipeSize::P1);
        assert_eq!(PipeSize::nearest(20.0), PipeSize::P12);
    }

    #[test]
    fn test_smallest_at_least() {
        assert_eq!(PipeSize::smallest_at_least(2.1), Some(PipeSize::P2_5));
        assert_eq!(PipeSize::smallest_at_least(2.067), Some(PipeSize::P2));
        assert_eq!(PipeSize::smallest_at_least(12.5), None);
    }
}
