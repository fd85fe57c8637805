//! Synthetic 1-D spherical model files for neutron-star transport tests.
//!
//! Each generator evaluates closed-form radial laws on a linear grid and
//! writes the result in the `1D_sphere` text layout read by the transport
//! code's custom model loader.

pub mod scripts;
pub mod submodules;
