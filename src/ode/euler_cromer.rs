//! Euler-Cromer (semi-implicit Euler) integration.

use ndarray::{Array, Dimension};

use crate::error::NumericsResult;
use crate::ode::{check_paired_states, check_time_grid, Trajectory};

/// Integrates the second-order system `r' = v`, `v' = a(r, t)` with the
/// Euler-Cromer update
///
/// ```text
/// r(t + dt) = r(t) + dt · v(t)
/// v(t + dt) = v(t) + dt · a(r(t + dt), t + dt)
/// ```
///
/// Using the already-updated position in the velocity step makes the
/// scheme symplectic: on oscillatory problems the energy stays bounded
/// where plain Euler spirals outward.
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
pub fn euler_cromer<D, F>(
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
    rs.push(r0);
    vs.push(v0);

    for n in 0..t.len() - 1 {
        let dt = t[n + 1] - t[n];
        let r_next = &rs[n] + &(&vs[n] * dt);
        let v_next = &vs[n] + &(accel(&r_next, t[n + 1]) * dt);
        rs.push(r_next);
        vs.push(v_next);
    }

    Ok((rs, vs))
}
