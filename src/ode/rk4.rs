//! Classical fourth-order Runge-Kutta integration.

use ndarray::{Array, Dimension};

use crate::error::NumericsResult;
use crate::ode::{check_time_grid, Trajectory};

/// Integrates `r'(t) = f(r, t)` with the classical four-stage update
///
/// ```text
/// K1 = dt · f(r, t)
/// K2 = dt · f(r + K1/2, t + dt/2)
/// K3 = dt · f(r + K2/2, t + dt/2)
/// K4 = dt · f(r + K3, t + dt)
/// r(t + dt) = r(t) + (K1 + 2·K2 + 2·K3 + K4) / 6
/// ```
///
/// Fourth order in the step size; four derivative evaluations per step.
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
/// use knotwork::ode::rk4;
/// use ndarray::array;
///
/// // Pendulum as a first-order system: state = [angle, angular velocity].
/// let omega_sq = 1.0;
/// let f = move |x: &ndarray::Array1<f64>, _t: f64| {
///     array![x[1], -omega_sq * x[0].sin()]
/// };
///
/// let t: Vec<f64> = (0..=200).map(|k| f64::from(k) * 0.05).collect();
/// let path = rk4(f, array![0.1, 0.0], &t).unwrap();
/// assert_eq!(path.len(), t.len());
/// ```
pub fn rk4<D, F>(f: F, r0: Array<f64, D>, t: &[f64]) -> NumericsResult<Trajectory<D>>
where
    D: Dimension,
    F: Fn(&Array<f64, D>, f64) -> Array<f64, D>,
{
    check_time_grid(t)?;

    let mut path = Vec::with_capacity(t.len());
    path.push(r0);

    for n in 0..t.len() - 1 {
        let dt = t[n + 1] - t[n];
        let half = 0.5 * dt;
        let r = &path[n];

        let k1 = f(r, t[n]) * dt;
        let k2 = f(&(r + &(&k1 * 0.5)), t[n] + half) * dt;
        let k3 = f(&(r + &(&k2 * 0.5)), t[n] + half) * dt;
        let k4 = f(&(r + &k3), t[n] + dt) * dt;

        let next = r + &((k1 + k2 * 2.0 + k3 * 2.0 + k4) / 6.0);
        path.push(next);
    }

    Ok(path)
}
