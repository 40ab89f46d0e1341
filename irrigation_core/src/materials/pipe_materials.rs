//! Hazen-Williams Roughness Coefficients
//!
//! Typical C values by pipe material. Higher C means a smoother pipe and less
//! friction loss.

use serde::{Deserialize, Serialize};

/// Pipe material with a tabulated Hazen-Williams C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PipeMaterial {
    /// PVC or other plastic
    #[default]
    Pvc,
    /// High-density polyethylene
    Hdpe,
    /// Epoxy coated steel
    EpoxyCoatedSteel,
    /// Cement asbestos
    CementAsbestos,
    /// New or galvanized steel
    Steel,
    /// Aluminum with couplers
    AluminumWithCouplers,
    /// Cast iron, or steel about 15 years old
    CastIron,
}

impl PipeMaterial {
    pub const ALL: [PipeMaterial; 7] = [
        PipeMaterial::Pvc,
        PipeMaterial::Hdpe,
        PipeMaterial::EpoxyCoatedSteel,
        PipeMaterial::CementAsbestos,
        PipeMaterial::Steel,
        PipeMaterial::AluminumWithCouplers,
        PipeMaterial::CastIron,
    ];

    /// Hazen-Williams roughness coefficient
    pub fn hazen_williams_c(&self) -> f64 {
        match self {
            PipeMaterial::Pvc => 150.0,
            PipeMaterial::Hdpe => 140.0,
            PipeMaterial::EpoxyCoatedSteel => 140.0,
            PipeMaterial::CementAsbestos => 140.0,
            PipeMaterial::Steel => 120.0,
            PipeMaterial::AluminumWithCouplers => 120.0,
            PipeMaterial::CastIron => 100.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PipeMaterial::Pvc => "PVC / Plastic",
            PipeMaterial::Hdpe => "HDPE",
            PipeMaterial::EpoxyCoatedSteel => "Epoxy coated steel",
            PipeMaterial::CementAsbestos => "Cement asbestos",
            PipeMaterial::Steel => "Steel (new or galvanized)",
            PipeMaterial::AluminumWithCouplers => "Aluminum with couplers",
            PipeMaterial::CastIron => "Cast iron / 15-year-old steel",
        }
    }
}
