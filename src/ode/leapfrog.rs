//! Leapfrog (Störmer-Verlet) integration in kick-drift-kick form.

use ndarray::{Array, Dimension};

use crate::error::NumericsResult;
use crate::ode::{check_paired_states, check_time_grid, Trajectory};

/// Integrates the second-order system `r' = v`, `v' = a(r, t)` with the
/// kick-drift-kick leapfrog update
///
/// ```text
/// v(t + dt/2) = v(t) + (dt/2) · a(r(t), t)
/// r(t + dt)   = r(t) + dt · v(t + dt/2)
/// v(t + dt)   = v(t + dt/2) + (dt/2) · a(r(t + dt), t + dt)
/// ```
///
/// Second order and symplectic. The closing acceleration of one step is
/// reused to open the next, so the cost is one acceleration evaluation per
/// step despite the two half kicks.
///
/// # Arguments
///
/// * `accel` - Acceleration callback `(position, time) -> acceleration`
/// * `r0` - Initial positions, any array shape
/// * `v0` - Initial velocities, same shape as `r0`
/// * `t` - Integration times, at least one
///
/// # Returns
///
/// Position and velocity histories, one entry per integration time.
///
/// # Example
///
/// ```rust
/// use knotwork::ode::leapfrog;
/// use ndarray::array;
///
/// // Ten pendulum release angles advanced together.
/// let accel = |r: &ndarray::Array1<f64>, _t: f64| r.mapv(|x| -x.sin());
/// let r0 = ndarray::Array1::linspace(0.0, 3.0, 10);
/// let v0 = ndarray::Array1::zeros(10);
///
/// let t: Vec<f64> = (0..=256).map(|k| f64::from(k) * 20.0 / 256.0).collect();
/// let (rs, vs) = leapfrog(accel, r0, v0, &t).unwrap();
///
/// assert_eq!(rs.len(), t.len());
/// assert_eq!(rs[0].len(), 10);
/// # let _ = vs;
/// ```
pub fn leapfrog<D, F>(
    accel: F,
    r0: Array<f64, D>,
    v0: Array<f64, D>,
    t: &[f64],
) -> NumericsResult<(Trajectory<D>, Trajectory<D>)>
where
    D: Dimension,
    F: Fn(&Array<f64, D>, f64) -> Array<f64, D>,
{
    check_time_grid(t)?;
    check_paired_states(&r0, &v0)?;

    let mut rs = Vec::with_capacity(t.len());
    let mut vs = Vec::with_capacity(t.len());

    let mut acc = accel(&r0, t[0]);
    rs.push(r0);
    vs.push(v0);

    for n in 0..t.len() - 1 {
        let dt = t[n + 1] - t[n];
        let half = 0.5 * dt;

        let v_mid = &vs[n] + &(&acc * half);
        let r_next = &rs[n] + &(&v_mid * dt);

        // Acceleration at the new position closes this step and opens the
        // next one.
        acc = accel(&r_next, t[n + 1]);
        let v_next = v_mid + &acc * half;

        rs.push(r_next);
        vs.push(v_next);
    }

    Ok((rs, vs))
}
