//! Fixed-step time integrators for ordinary differential equations.
//!
//! All integrators walk a caller-supplied time grid (not necessarily
//! uniform; step n uses `dt = t[n+1] - t[n]`) and take the derivative or
//! acceleration as a closure of fixed signature `(state, time) -> rate`.
//! Extra parameters of the physical model are captured by the closure at
//! the call site.
//!
//! State is an [`ndarray`] array of any dimensionality, so a whole family
//! of initial conditions integrates in a single call and the output states
//! keep the input shape.
//!
//! # Available Methods
//!
//! | Method | Order | Form | Notes |
//! |--------|-------|------|-------|
//! | [`euler`] | 1 | `r' = f(r, t)` | Simplest; short horizons only |
//! | [`rk4`] | 4 | `r' = f(r, t)` | Workhorse for smooth problems |
//! | [`euler_cromer`] | 1 | `r' = v`, `v' = a(r, t)` | Symplectic |
//! | [`leapfrog`] | 2 | `r' = v`, `v' = a(r, t)` | Symplectic, one accel eval per step |

mod euler;
mod euler_cromer;
mod leapfrog;
mod rk4;

pub use euler::euler;
pub use euler_cromer::euler_cromer;
pub use leapfrog::leapfrog;
pub use rk4::rk4;

use ndarray::{Array, Dimension};

use crate::error::{NumericsError, NumericsResult};

/// History of states, one entry per time in the integration grid.
pub type Trajectory<D> = Vec<Array<f64, D>>;

/// An empty grid has no initial instant to attach `r0` to.
pub(crate) fn check_time_grid(t: &[f64]) -> NumericsResult<()> {
    if t.is_empty() {
        return Err(NumericsError::invalid_time_grid("time grid is empty"));
    }
    Ok(())
}

/// Position and velocity initial conditions must agree in shape.
pub(crate) fn check_paired_states<D: Dimension>(
    r0: &Array<f64, D>,
    v0: &Array<f64, D>,
) -> NumericsResult<()> {
    if r0.shape() != v0.shape() {
        return Err(NumericsError::shape_mismatch(
            "initial velocities",
            format!("{:?}", r0.shape()),
            format!("{:?}", v0.shape()),
        ));
    }
    Ok(())
}
