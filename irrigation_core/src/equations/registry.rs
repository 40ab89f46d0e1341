//! # Formula Registry
//!
//! Central registry of every formula the evaluator can run. Each formula has
//! metadata: plain-text expression, reference, variables and assumptions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe formula identification via the `Formula` enum
//! - Stable string ids (`"pipe_friction_loss"`) for requests and the CLI
//! - Full metadata for the generated FORMULAS.md
//!
//! ## Usage
//!
//! ```rust
//! use irrigation_core::equations::registry::Formula;
//!
//! let formula: Formula = "pipe_velocity".parse().unwrap();
//! let meta = formula.metadata();
//! assert_eq!(meta.formula_plain, "V = 0.408 * Q / D^2");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

// ============================================================================
// References
// ============================================================================

/// Source of a formula or constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reference {
    /// NRCS National Engineering Handbook Part 652, Irrigation Guide
    NrcsIrrigationGuide { chapter: u8 },
    /// Hazen-Williams empirical pipe friction equation
    HazenWilliams,
    /// Orifice discharge equation
    Orifice,
    /// Hydraulic Institute pump power definitions
    HydraulicInstitute,
    /// Garden hose manufacturer flow tables
    HoseManufacturer,
    /// Volume balance (no specific reference needed)
    VolumeBalance,
}

impl Reference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            Reference::NrcsIrrigationGuide { chapter } => {
                format!("NRCS NEH Part 652 Irrigation Guide, Chapter {}", chapter)
            }
            Reference::HazenWilliams => "Hazen-Williams (US customary, psi form)".to_string(),
            Reference::Orifice => "Orifice equation, Q = C A sqrt(2gh)".to_string(),
            Reference::HydraulicInstitute => "Hydraulic Institute pump power definitions".to_string(),
            Reference::HoseManufacturer => "Garden hose manufacturer flow tables".to_string(),
            Reference::VolumeBalance => "Volume balance".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            Reference::NrcsIrrigationGuide { .. } => "NRCS 652",
            Reference::HazenWilliams => "Hazen-Williams",
            Reference::Orifice => "Orifice",
            Reference::HydraulicInstitute => "HI",
            Reference::HoseManufacturer => "Hose tables",
            Reference::VolumeBalance => "Volume balance",
        }
    }
}

// ============================================================================
// Formula Categories
// ============================================================================

/// Categories for grouping formulas in documentation and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaCategory {
    /// Drip, sprinkler and area application rates
    ApplicationRates,
    /// Nozzle discharge and sizing
    Nozzles,
    /// Friction loss, velocity and pipe sizing
    PipeHydraulics,
    /// Water, brake and motor horsepower
    PumpPower,
    /// Run time, frequency and set time
    Scheduling,
    /// Depth, area and flow capacity of a supply
    SystemCapacity,
}

impl FormulaCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaCategory::ApplicationRates => "Application Rates",
            FormulaCategory::Nozzles => "Nozzles",
            FormulaCategory::PipeHydraulics => "Pipe Hydraulics",
            FormulaCategory::PumpPower => "Pump Power",
            FormulaCategory::Scheduling => "Scheduling",
            FormulaCategory::SystemCapacity => "System Capacity",
        }
    }

    /// Sort order for listings (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            FormulaCategory::ApplicationRates => 1,
            FormulaCategory::Nozzles => 2,
            FormulaCategory::PipeHydraulics => 3,
            FormulaCategory::PumpPower => 4,
            FormulaCategory::Scheduling => 5,
            FormulaCategory::SystemCapacity => 6,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in a formula.
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    /// Symbol (e.g., "Q", "D", "E")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Working unit (e.g., "gpm", "in", "decimal")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Formula Metadata
// ============================================================================

/// Complete metadata for one formula.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaMetadata {
    /// Human-readable name (e.g., "Pipe Friction Loss")
    pub name: &'static str,
    /// Brief description of what this formula calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Source reference
    pub reference: Reference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: FormulaCategory,
    /// Source module where the formula is implemented
    pub source_module: &'static str,
    /// Function name implementing the formula
    pub source_function: &'static str,
}

// ============================================================================
// Formula Enum
// ============================================================================

/// Every closed-form formula the evaluator can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Formula {
    // -------------------------------------------------------------------------
    // Application rates
    // -------------------------------------------------------------------------
    /// PR = 231 Qe E / (R S)
    DripApplicationRate,
    /// PR = 96.25 Qn E / (X Y), Qn from the orifice equation
    NozzleApplicationRate,
    /// PR = Q / (452.57 A)
    WaterApplicationRate,

    // -------------------------------------------------------------------------
    // Nozzles
    // -------------------------------------------------------------------------
    /// Qn = 29.84 C d^2 sqrt(P)
    NozzleFlowRate,
    /// Qn = PR X Y / (96.25 E)
    NozzleFlowForApplicationRate,
    /// d = sqrt(Qn / (29.84 C sqrt(P)))
    NozzleDiameter,

    // -------------------------------------------------------------------------
    // Pipe hydraulics
    // -------------------------------------------------------------------------
    /// Hazen-Williams friction loss
    PipeFrictionLoss,
    /// Hazen-Williams solved for D
    MinimumPipeDiameter,
    /// V = 0.408 Q / D^2
    PipeVelocity,
    /// D = sqrt(0.408 Q / V)
    MinimumDiameterForVelocity,
    /// Table lookup with length factor
    GardenHoseFlow,

    // -------------------------------------------------------------------------
    // Pump power
    // -------------------------------------------------------------------------
    /// WHP = Q H / 3960
    WaterHorsepower,
    /// BHP = WHP / pump efficiency
    BrakeHorsepower,
    /// MHP = BHP / motor efficiency
    MotorHorsepower,

    // -------------------------------------------------------------------------
    // Scheduling
    // -------------------------------------------------------------------------
    /// T = 60 I W / (PR E)
    IrrigationRunTime,
    /// F = AWC RZ MAD / ETc
    IrrigationFrequency,
    /// T = D A 43560 / (96.3 Q E)
    IrrigationSetTime,

    // -------------------------------------------------------------------------
    // System capacity
    // -------------------------------------------------------------------------
    /// d = Q T / (K A) E
    WaterDepth,
    /// A = 96.25 Q H E / Wn
    IrrigatableArea,
    /// Q = 27154 d A / (60 H D E)
    SystemFlowRequirement,
    /// T = V / Q
    FillTime,
    /// Q = q N
    TotalFlow,
}

impl Formula {
    /// Stable identifier used in requests
    pub fn id(&self) -> &'static str {
        match self {
            Formula::DripApplicationRate => "drip_application_rate",
            Formula::NozzleApplicationRate => "nozzle_application_rate",
            Formula::WaterApplicationRate => "water_application_rate",
            Formula::NozzleFlowRate => "nozzle_flow_rate",
            Formula::NozzleFlowForApplicationRate => "nozzle_flow_for_application_rate",
            Formula::NozzleDiameter => "nozzle_diameter",
            Formula::PipeFrictionLoss => "pipe_friction_loss",
            Formula::MinimumPipeDiameter => "minimum_pipe_diameter",
            Formula::PipeVelocity => "pipe_velocity",
            Formula::MinimumDiameterForVelocity => "minimum_diameter_for_velocity",
            Formula::GardenHoseFlow => "garden_hose_flow",
            Formula::WaterHorsepower => "water_horsepower",
            Formula::BrakeHorsepower => "brake_horsepower",
            Formula::MotorHorsepower => "motor_horsepower",
            Formula::IrrigationRunTime => "irrigation_run_time",
            Formula::IrrigationFrequency => "irrigation_frequency",
            Formula::IrrigationSetTime => "irrigation_set_time",
            Formula::WaterDepth => "water_depth",
            Formula::IrrigatableArea => "irrigatable_area",
            Formula::SystemFlowRequirement => "system_flow_requirement",
            Formula::FillTime => "fill_time",
            Formula::TotalFlow => "total_flow",
        }
    }

    /// Get the full metadata for this formula
    pub fn metadata(&self) -> FormulaMetadata {
        match self {
            // Application rates
            Formula::DripApplicationRate => FormulaMetadata {
                name: "Drip Application Rate",
                description: "Average precipitation rate under a rectangular grid of drip emitters",
                formula_plain: "PR = 231 * Qe * E / (R * S)",
                reference: Reference::NrcsIrrigationGuide { chapter: 6 },
                variables: vec![
                    Variable::new("PR", "Application rate", "in/hr"),
                    Variable::new("Qe", "Emitter discharge", "gph"),
                    Variable::new("E", "Application efficiency", "decimal"),
                    Variable::new("R", "Row spacing", "in"),
                    Variable::new("S", "Emitter spacing along the row", "in"),
                    Variable::new("231", "Cubic inches per gallon", "in^3/gal"),
                ],
                assumptions: vec![
                    "Emitters on a uniform rectangular grid",
                    "Efficiency defaults to 0.95 when not supplied",
                ],
                category: FormulaCategory::ApplicationRates,
                source_module: "equations/application.rs",
                source_function: "drip_application_rate",
            },

            Formula::NozzleApplicationRate => FormulaMetadata {
                name: "Sprinkler Application Rate",
                description: "Average precipitation rate of a sprinkler grid from nozzle size and pressure",
                formula_plain: "PR = 96.25 * Qn * E / (X * Y), Qn = 29.84 * C * d^2 * sqrt(P)",
                reference: Reference::NrcsIrrigationGuide { chapter: 6 },
                variables: vec![
                    Variable::new("PR", "Application rate", "in/hr"),
                    Variable::new("Qn", "Nozzle discharge", "gpm"),
                    Variable::new("d", "Nozzle diameter", "in"),
                    Variable::new("P", "Nozzle pressure", "psi"),
                    Variable::new("X", "Sprinkler spacing along the lateral", "ft"),
                    Variable::new("Y", "Lateral spacing", "ft"),
                    Variable::new("E", "Application efficiency", "decimal"),
                ],
                assumptions: vec![
                    "Rectangular sprinkler layout with full overlap",
                    "Efficiency defaults to 0.80 when not supplied",
                ],
                category: FormulaCategory::ApplicationRates,
                source_module: "equations/application.rs",
                source_function: "sprinkler_application_rate",
            },

            Formula::WaterApplicationRate => FormulaMetadata {
                name: "Area Application Rate",
                description: "Gross application rate of a flow spread evenly over an area",
                formula_plain: "PR = Q / (452.57 * A)",
                reference: Reference::VolumeBalance,
                variables: vec![
                    Variable::new("PR", "Application rate", "in/hr"),
                    Variable::new("Q", "Flow", "gpm"),
                    Variable::new("A", "Area", "acre"),
                ],
                assumptions: vec!["Uniform distribution over the whole area"],
                category: FormulaCategory::ApplicationRates,
                source_module: "equations/application.rs",
                source_function: "area_application_rate",
            },

            // Nozzles
            Formula::NozzleFlowRate => FormulaMetadata {
                name: "Nozzle Flow Rate",
                description: "Discharge of a round nozzle at a given pressure",
                formula_plain: "Qn = 29.84 * C * d^2 * sqrt(P)",
                reference: Reference::Orifice,
                variables: vec![
                    Variable::new("Qn", "Nozzle discharge", "gpm"),
                    Variable::new("C", "Discharge coefficient", "-"),
                    Variable::new("d", "Nozzle diameter", "in"),
                    Variable::new("P", "Nozzle pressure", "psi"),
                ],
                assumptions: vec!["C = 0.97 unless configured otherwise"],
                category: FormulaCategory::Nozzles,
                source_module: "equations/hydraulics.rs",
                source_function: "nozzle_flow",
            },

            Formula::NozzleFlowForApplicationRate => FormulaMetadata {
                name: "Nozzle Flow for Application Rate",
                description: "Nozzle discharge needed to reach a target application rate",
                formula_plain: "Qn = PR * X * Y / (96.25 * E)",
                reference: Reference::NrcsIrrigationGuide { chapter: 6 },
                variables: vec![
                    Variable::new("Qn", "Nozzle discharge", "gpm"),
                    Variable::new("PR", "Target application rate", "in/hr"),
                    Variable::new("X", "Sprinkler spacing along the lateral", "ft"),
                    Variable::new("Y", "Lateral spacing", "ft"),
                    Variable::new("E", "Application efficiency", "decimal"),
                ],
                assumptions: vec!["Efficiency defaults to 0.80 when not supplied"],
                category: FormulaCategory::Nozzles,
                source_module: "equations/application.rs",
                source_function: "sprinkler_flow_for_rate",
            },

            Formula::NozzleDiameter => FormulaMetadata {
                name: "Nozzle Diameter",
                description: "Nozzle size that delivers a target application rate at a given pressure",
                formula_plain: "d = sqrt(Qn / (29.84 * C * sqrt(P))), Qn = PR * X * Y / (96.25 * E)",
                reference: Reference::Orifice,
                variables: vec![
                    Variable::new("d", "Nozzle diameter", "in"),
                    Variable::new("Qn", "Required nozzle discharge", "gpm"),
                    Variable::new("C", "Discharge coefficient", "-"),
                    Variable::new("P", "Nozzle pressure", "psi"),
                ],
                assumptions: vec!["C = 0.97 unless configured otherwise"],
                category: FormulaCategory::Nozzles,
                source_module: "equations/hydraulics.rs",
                source_function: "nozzle_diameter",
            },

            // Pipe hydraulics
            Formula::PipeFrictionLoss => FormulaMetadata {
                name: "Pipe Friction Loss",
                description: "Pressure lost to friction along a pipe run",
                formula_plain: "Ploss = 4.53 * L * (Q/C)^1.852 / D^4.857",
                reference: Reference::HazenWilliams,
                variables: vec![
                    Variable::new("Ploss", "Friction loss", "psi"),
                    Variable::new("L", "Pipe length", "ft"),
                    Variable::new("Q", "Flow", "gpm"),
                    Variable::new("C", "Hazen-Williams roughness coefficient", "-"),
                    Variable::new("D", "Inside diameter", "in"),
                ],
                assumptions: vec![
                    "Water at ordinary temperatures",
                    "Turbulent flow in a full pipe",
                ],
                category: FormulaCategory::PipeHydraulics,
                source_module: "equations/hydraulics.rs",
                source_function: "hazen_williams_loss",
            },

            Formula::MinimumPipeDiameter => FormulaMetadata {
                name: "Minimum Pipe Diameter",
                description: "Smallest inside diameter that keeps friction loss within a limit",
                formula_plain: "D = [4.53 * L * (Q/C)^1.852 / Ploss]^(1/4.857)",
                reference: Reference::HazenWilliams,
                variables: vec![
                    Variable::new("D", "Inside diameter", "in"),
                    Variable::new("L", "Pipe length", "ft"),
                    Variable::new("Q", "Flow", "gpm"),
                    Variable::new("C", "Hazen-Williams roughness coefficient", "-"),
                    Variable::new("Ploss", "Allowable friction loss", "psi"),
                ],
                assumptions: vec!["Algebraic inversion of the friction loss equation"],
                category: FormulaCategory::PipeHydraulics,
                source_module: "equations/hydraulics.rs",
                source_function: "minimum_pipe_diameter",
            },

            Formula::PipeVelocity => FormulaMetadata {
                name: "Pipe Velocity",
                description: "Mean velocity of water in a full pipe",
                formula_plain: "V = 0.408 * Q / D^2",
                reference: Reference::NrcsIrrigationGuide { chapter: 6 },
                variables: vec![
                    Variable::new("V", "Velocity", "ft/sec"),
                    Variable::new("Q", "Flow", "gpm"),
                    Variable::new("D", "Inside diameter", "in"),
                ],
                assumptions: vec!["Full pipe, uniform velocity profile"],
                category: FormulaCategory::PipeHydraulics,
                source_module: "equations/hydraulics.rs",
                source_function: "pipe_velocity",
            },

            Formula::MinimumDiameterForVelocity => FormulaMetadata {
                name: "Minimum Diameter for Velocity",
                description: "Inside diameter that carries a flow at the design velocity",
                formula_plain: "D = sqrt(0.408 * Q / V)",
                reference: Reference::NrcsIrrigationGuide { chapter: 6 },
                variables: vec![
                    Variable::new("D", "Inside diameter", "in"),
                    Variable::new("Q", "Flow", "gpm"),
                    Variable::new("V", "Design velocity", "ft/sec"),
                ],
                assumptions: vec!["Design velocity defaults to 5 ft/sec"],
                category: FormulaCategory::PipeHydraulics,
                source_module: "equations/hydraulics.rs",
                source_function: "diameter_for_velocity",
            },

            Formula::GardenHoseFlow => FormulaMetadata {
                name: "Garden Hose Flow",
                description: "Discharge of a garden hose by size, supply pressure and length",
                formula_plain: "Q = SP(size, P) * LF(L)",
                reference: Reference::HoseManufacturer,
                variables: vec![
                    Variable::new("Q", "Hose discharge", "gpm"),
                    Variable::new("SP", "Tabulated flow of a 100 ft hose", "gpm"),
                    Variable::new("LF", "Length factor", "-"),
                    Variable::new("L", "Hose length", "ft"),
                ],
                assumptions: vec![
                    "Sizes 1/2, 5/8 and 3/4 in at 40, 45, 50 or 60 psi",
                    "Lengths 25 to 200 ft in 25 ft steps",
                ],
                category: FormulaCategory::PipeHydraulics,
                source_module: "equations/hydraulics.rs",
                source_function: "garden_hose_flow",
            },

            // Pump power
            Formula::WaterHorsepower => FormulaMetadata {
                name: "Water Horsepower",
                description: "Power delivered to the water",
                formula_plain: "WHP = Q * H / 3960",
                reference: Reference::HydraulicInstitute,
                variables: vec![
                    Variable::new("WHP", "Water horsepower", "hp"),
                    Variable::new("Q", "Flow", "gpm"),
                    Variable::new("H", "Total dynamic head", "ft of water"),
                ],
                assumptions: vec!["Fresh water, specific gravity 1.0"],
                category: FormulaCategory::PumpPower,
                source_module: "equations/pump.rs",
                source_function: "water_horsepower",
            },

            Formula::BrakeHorsepower => FormulaMetadata {
                name: "Brake Horsepower",
                description: "Power required at the pump shaft",
                formula_plain: "BHP = (Q * H / 3960) / Ep",
                reference: Reference::HydraulicInstitute,
                variables: vec![
                    Variable::new("BHP", "Brake horsepower", "hp"),
                    Variable::new("Ep", "Pump efficiency", "decimal"),
                ],
                assumptions: vec!["Pump efficiency at the operating point"],
                category: FormulaCategory::PumpPower,
                source_module: "equations/pump.rs",
                source_function: "brake_horsepower",
            },

            Formula::MotorHorsepower => FormulaMetadata {
                name: "Motor Horsepower",
                description: "Power drawn by the motor",
                formula_plain: "MHP = BHP / Em",
                reference: Reference::HydraulicInstitute,
                variables: vec![
                    Variable::new("MHP", "Motor input horsepower", "hp"),
                    Variable::new("Em", "Motor efficiency", "decimal"),
                ],
                assumptions: vec!["Direct drive, no transmission losses"],
                category: FormulaCategory::PumpPower,
                source_module: "equations/pump.rs",
                source_function: "motor_horsepower",
            },

            // Scheduling
            Formula::IrrigationRunTime => FormulaMetadata {
                name: "Irrigation Run Time",
                description: "Minutes per event to replace crop water use since the last irrigation",
                formula_plain: "T = 60 * I * W / (PR * E)",
                reference: Reference::NrcsIrrigationGuide { chapter: 4 },
                variables: vec![
                    Variable::new("T", "Run time", "min"),
                    Variable::new("I", "Irrigation interval", "days"),
                    Variable::new("W", "Crop water use", "in/day"),
                    Variable::new("PR", "Application rate", "in/hr"),
                    Variable::new("E", "Application efficiency", "decimal"),
                ],
                assumptions: vec!["No effective rainfall during the interval"],
                category: FormulaCategory::Scheduling,
                source_module: "equations/application.rs",
                source_function: "irrigation_run_time",
            },

            Formula::IrrigationFrequency => FormulaMetadata {
                name: "Irrigation Frequency",
                description: "Days between irrigations before allowable depletion is reached",
                formula_plain: "F = AWC * RZ * MAD / ETc",
                reference: Reference::NrcsIrrigationGuide { chapter: 2 },
                variables: vec![
                    Variable::new("F", "Irrigation interval", "days"),
                    Variable::new("AWC", "Available water capacity", "in/ft"),
                    Variable::new("RZ", "Effective root zone depth", "ft"),
                    Variable::new("MAD", "Management allowed depletion", "decimal"),
                    Variable::new("ETc", "Crop water use", "in/day"),
                ],
                assumptions: vec!["Uniform soil through the root zone"],
                category: FormulaCategory::Scheduling,
                source_module: "equations/application.rs",
                source_function: "irrigation_frequency",
            },

            Formula::IrrigationSetTime => FormulaMetadata {
                name: "Irrigation Set Time",
                description: "Hours to apply a net depth over one set",
                formula_plain: "T = D * A * 43560 / (96.3 * Q * E)",
                reference: Reference::NrcsIrrigationGuide { chapter: 6 },
                variables: vec![
                    Variable::new("T", "Set time", "hr"),
                    Variable::new("D", "Net application depth", "in"),
                    Variable::new("A", "Set area", "acre"),
                    Variable::new("Q", "Flow", "gpm"),
                    Variable::new("E", "Application efficiency", "decimal"),
                ],
                assumptions: vec!["43560 ft^2 per acre"],
                category: FormulaCategory::Scheduling,
                source_module: "equations/application.rs",
                source_function: "irrigation_set_time",
            },

            // System capacity
            Formula::WaterDepth => FormulaMetadata {
                name: "Water Depth",
                description: "Depth of water applied by a flow over an area for a time",
                formula_plain: "d = (Q * T) / (K * A) * E, K = 453 (gpm) or 1.01 (cfs)",
                reference: Reference::VolumeBalance,
                variables: vec![
                    Variable::new("d", "Depth applied", "in"),
                    Variable::new("Q", "Flow", "gpm or cfs"),
                    Variable::new("T", "Time", "hr"),
                    Variable::new("A", "Area", "acre"),
                    Variable::new("K", "Flow basis constant", "-"),
                    Variable::new("E", "Efficiency", "decimal"),
                ],
                assumptions: vec!["Efficiency defaults to 1.0 (gross depth)"],
                category: FormulaCategory::SystemCapacity,
                source_module: "equations/application.rs",
                source_function: "water_depth",
            },

            Formula::IrrigatableArea => FormulaMetadata {
                name: "Irrigatable Area",
                description: "Area a supply can keep irrigated at a daily water need",
                formula_plain: "A = 96.25 * Q * H * E / Wn",
                reference: Reference::NrcsIrrigationGuide { chapter: 6 },
                variables: vec![
                    Variable::new("A", "Irrigatable area", "sq. ft."),
                    Variable::new("Q", "Available flow", "gpm"),
                    Variable::new("H", "Operating hours per day", "hr"),
                    Variable::new("E", "Application efficiency", "decimal"),
                    Variable::new("Wn", "Daily water need", "in/day"),
                ],
                assumptions: vec!["Supply runs the stated hours every day"],
                category: FormulaCategory::SystemCapacity,
                source_module: "equations/application.rs",
                source_function: "irrigatable_area",
            },

            Formula::SystemFlowRequirement => FormulaMetadata {
                name: "System Flow Requirement",
                description: "Flow needed to apply a net depth over an area within a schedule",
                formula_plain: "Q = 27154 * d * A / (60 * H * D * E)",
                reference: Reference::NrcsIrrigationGuide { chapter: 6 },
                variables: vec![
                    Variable::new("Q", "Required flow", "gpm"),
                    Variable::new("d", "Net application depth", "in"),
                    Variable::new("A", "Area", "acre"),
                    Variable::new("H", "Operating hours per day", "hr"),
                    Variable::new("D", "Days to cover the area", "days"),
                    Variable::new("E", "Application efficiency", "decimal"),
                ],
                assumptions: vec!["27154 gallons per acre-inch"],
                category: FormulaCategory::SystemCapacity,
                source_module: "equations/application.rs",
                source_function: "system_flow_requirement",
            },

            Formula::FillTime => FormulaMetadata {
                name: "Fill Time",
                description: "Time to fill a tank or pond at a constant flow",
                formula_plain: "T = V / Q",
                reference: Reference::VolumeBalance,
                variables: vec![
                    Variable::new("T", "Fill time", "min"),
                    Variable::new("V", "Volume", "gal"),
                    Variable::new("Q", "Flow", "gpm"),
                ],
                assumptions: vec!["Constant inflow, no losses"],
                category: FormulaCategory::SystemCapacity,
                source_module: "equations/hydraulics.rs",
                source_function: "fill_time",
            },

            Formula::TotalFlow => FormulaMetadata {
                name: "Total Flow",
                description: "Combined flow of a number of identical emitters or sprinklers",
                formula_plain: "Q = q * N",
                reference: Reference::VolumeBalance,
                variables: vec![
                    Variable::new("Q", "Total flow", "gpm"),
                    Variable::new("q", "Flow per emitter", "gpm"),
                    Variable::new("N", "Number of emitters", "-"),
                ],
                assumptions: vec!["Every emitter runs at the same flow"],
                category: FormulaCategory::SystemCapacity,
                source_module: "equations/hydraulics.rs",
                source_function: "total_flow",
            },
        }
    }

    /// Get all formulas in a given category
    pub fn in_category(category: FormulaCategory) -> Vec<Formula> {
        ALL_FORMULAS
            .iter()
            .filter(|f| f.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in listing order
    pub fn all_categories() -> Vec<FormulaCategory> {
        use FormulaCategory::*;
        let mut cats = vec![
            ApplicationRates,
            Nozzles,
            PipeHydraulics,
            PumpPower,
            Scheduling,
            SystemCapacity,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Formula {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_FORMULAS
            .iter()
            .copied()
            .find(|f| f.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalcError::unknown_formula(s))
    }
}

/// All formulas in the registry (for iteration)
pub static ALL_FORMULAS: &[Formula] = &[
    // Application rates
    Formula::DripApplicationRate,
    Formula::NozzleApplicationRate,
    Formula::WaterApplicationRate,
    // Nozzles
    Formula::NozzleFlowRate,
    Formula::NozzleFlowForApplicationRate,
    Formula::NozzleDiameter,
    // Pipe hydraulics
    Formula::PipeFrictionLoss,
    Formula::MinimumPipeDiameter,
    Formula::PipeVelocity,
    Formula::MinimumDiameterForVelocity,
    Formula::GardenHoseFlow,
    // Pump power
    Formula::WaterHorsepower,
    Formula::BrakeHorsepower,
    Formula::MotorHorsepower,
    // Scheduling
    Formula::IrrigationRunTime,
    Formula::IrrigationFrequency,
    Formula::IrrigationSetTime,
    // System capacity
    Formula::WaterDepth,
    Formula::IrrigatableArea,
    Formula::SystemFlowRequirement,
    Formula::FillTime,
    Formula::TotalFlow,
];

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the FORMULAS.md reference from the registry.
///
/// Lists every formula with its expression, inputs (from the evaluator
/// specs), reference and assumptions, grouped by category.
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(24_000);

    output.push_str(
        r#"# Irrigation Formulas Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

Every formula below is evaluated in the working units shown. Inputs given in
any other unit of the same category are converted first, and the result is
converted to the requested output unit last.

A formula returns no result (`null`) when a required input is missing, zero,
negative or not finite. It never divides by zero.

---

"#,
    );

    let categories = Formula::all_categories();

    for category in &categories {
        let formulas = Formula::in_category(*category);
        if formulas.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for formula in formulas {
            let meta = formula.metadata();
            let spec = formula.spec();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("`{}`\n\n", formula.id()));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            // Inputs table
            output.push_str("**Inputs:**\n\n");
            output.push_str("| Field | Category | Working unit | Default |\n");
            output.push_str("|-------|----------|--------------|---------|\n");
            for input in spec.inputs {
                let default = input
                    .default
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "required".to_string());
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    input.field, input.category, input.working_unit, default
                ));
            }
            output.push('\n');
            output.push_str(&format!(
                "**Output:** {} ({})\n\n",
                spec.output_category, spec.output_working_unit
            ));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`](src/{})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Formulas:** {}\n- **Categories:** {}\n",
        ALL_FORMULAS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formulas_have_metadata() {
        assert_eq!(ALL_FORMULAS.len(), 22);

        for formula in ALL_FORMULAS {
            let meta = formula.metadata();
            assert!(!meta.name.is_empty(), "Formula {:?} has no name", formula);
            assert!(!meta.formula_plain.is_empty(), "Formula {:?} has no formula", formula);
            assert!(!meta.variables.is_empty(), "Formula {:?} has no variables", formula);
        }

        let friction = Formula::PipeFrictionLoss.metadata();
        assert!(friction.formula_plain.contains("(Q/C)^1.852"));
    }

    #[test]
    fn test_ids_round_trip() {
        for formula in ALL_FORMULAS {
            let parsed: Formula = formula.id().parse().unwrap();
            assert_eq!(parsed, *formula);
        }
    }

    #[test]
    fn test_serde_id_matches() {
        for formula in ALL_FORMULAS {
            let json = serde_json::to_string(formula).unwrap();
            assert_eq!(json, format!("\"{}\"", formula.id()));
        }
    }

    #[test]
    fn test_unknown_formula() {
        let err = "pipe_velocityy".parse::<Formula>().unwrap_err();
        assert_eq!(err, CalcError::unknown_formula("pipe_velocityy"));
    }

    #[test]
    fn test_every_category_populated() {
        for category in Formula::all_categories() {
            assert!(!Formula::in_category(category).is_empty(), "{:?} is empty", category);
        }
    }

    #[test]
    fn test_reference_citation() {
        let nrcs = Reference::NrcsIrrigationGuide { chapter: 6 };
        assert_eq!(nrcs.citation(), "NRCS NEH Part 652 Irrigation Guide, Chapter 6");
        assert_eq!(nrcs.short_form(), "NRCS 652");
    }

    #[test]
    fn test_generate_markdown() {
        let md = generate_formulas_markdown();
        assert!(md.contains("# Irrigation Formulas Reference"));
        assert!(md.contains("### Pipe Friction Loss"));
        assert!(md.contains("| emitter_flow | Flow Rate | gph | required |"));
        assert!(md.contains("**Total Formulas:** 22"));
    }
}
