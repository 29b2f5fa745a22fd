//! # Knotwork
//!
//! Numerical kernels for piecewise-cubic spline interpolation and
//! fixed-step integration of ordinary differential equations.
//!
//! This crate provides:
//!
//! - **Interpolation**: cubic Hermite splines with user-supplied slopes, and
//!   a natural-continuity variant that solves for the slopes so the second
//!   derivative is continuous across every interior node
//! - **Linear Algebra**: the tridiagonal (Thomas) solve backing the
//!   natural-spline slope system
//! - **ODE**: fixed-step time integrators (explicit Euler, Euler-Cromer,
//!   leapfrog, classical RK4) over arbitrary time grids
//!
//! ## Design Philosophy
//!
//! - **Fail fast**: all validation happens at construction; a spline you
//!   hold is always fully built
//! - **Evaluation never fails**: out-of-domain queries extrapolate with the
//!   boundary segment's cubic instead of erroring
//! - **Vectorized**: batch evaluation and integration operate on `ndarray`
//!   arrays of any shape, preserving that shape

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod linear_algebra;
pub mod ode;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{NumericsError, NumericsResult};
    pub use crate::interpolation::{HermiteSpline, Interpolator};
    pub use crate::linear_algebra::solve_tridiagonal;
    pub use crate::ode::{euler, euler_cromer, leapfrog, rk4, Trajectory};
}

pub use error::{NumericsError, NumericsResult};
