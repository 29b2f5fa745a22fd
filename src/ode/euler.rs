//! Explicit (forward) Euler integration.

use ndarray::{Array, Dimension};

use crate::error::NumericsResult;
use crate::ode::{check_time_grid, Trajectory};

/// Integrates `r'(t) = f(r, t)` with the explicit Euler update
///
/// ```text
/// r(t + dt) = r(t) + dt · f(r(t), t)
/// ```
///
/// over every consecutive pair of the time grid `t`. First order in the
/// step size; prefer [`rk4`](crate::ode::rk4) unless the horizon is short.
///
/// # Arguments
///
/// * `f` - Derivative callback `(state, time) -> rate`
/// * `r0` - Initial state `r(t[0])`, any array shape
/// * `t` - Integration times, at least one
///
/// # Returns
///
/// One state per integration time, each with the shape of `r0`.
///
/// # Example
///
/// ```rust
/// use knotwork::ode::euler;
/// use ndarray::array;
///
/// // Exponential decay with the rate captured by the closure.
/// let rate = 0.5;
/// let f = move |r: &ndarray::Array1<f64>, _t: f64| r.mapv(|x| -rate * x);
///
/// let t: Vec<f64> = (0..=100).map(|k| f64::from(k) * 0.01).collect();
/// let path = euler(f, array![1.0, 2.0], &t).unwrap();
///
/// assert_eq!(path.len(), t.len());
/// assert_eq!(path[0].len(), 2);
/// ```
pub fn euler<D, F>(f: F, r0: Array<f64, D>, t: &[f64]) -> NumericsResult<Trajectory<D>>
where
    D: Dimension,
    F: Fn(&Array<f64, D>, f64) -> Array<f64, D>,
{
    check_time_grid(t)?;

    let mut path = Vec::with_capacity(t.len());
    path.push(r0);

    for n in 0..t.len() - 1 {
        let dt = t[n + 1] - t[n];
        let r = &path[n];
        let next = r + &(f(r, t[n]) * dt);
        path.push(next);
    }

    Ok(path)
}
