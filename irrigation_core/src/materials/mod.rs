//! # Reference Tables
//!
//! Physical product data the formulas are used with.
//!
//! - [`pipe_sizes`] - PVC Schedule 40 nominal sizes and inside diameters
//! - [`pipe_materials`] - Hazen-Williams C by pipe material
//! - [`garden_hose`] - Garden hose flow by size, pressure and length
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::materials::{PipeMaterial, PipeSize};
//!
//! let size = PipeSize::smallest_at_least(3.5).unwrap();
//! assert_eq!(size, PipeSize::P4);
//! assert_eq!(PipeMaterial::Pvc.hazen_williams_c(), 150.0);
//! ```

pub mod garden_hose;
pub mod pipe_materials;
pub mod pipe_sizes;

pub use garden_hose::{length_factor, HoseSize};
pub use pipe_materials::PipeMaterial;
pub use pipe_sizes::PipeSize;
