#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants (ε₀, Coulomb constant).
pub mod constants;
/// Scalar and vector aliases.
pub mod math;
/// Fixed-step double integration.
pub mod quadrature;
/// Charged surfaces, Coulomb kernel, closed-form references.
pub mod fields;
/// Solver configuration and the surface field solver.
pub mod simulation;
/// Sample ranges and 3D observation grids.
pub mod sweep;
/// Console report lines.
pub mod report;
/// 3D quiver plots.
#[cfg(feature = "plot")]
pub mod plot;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
