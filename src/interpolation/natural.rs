//! Natural-continuity slope construction.
//!
//! Solves for the per-node slopes that make the piecewise cubic's second
//! derivative continuous at every interior node, then hands them to the
//! Hermite engine. The coupling is pure composition: this module only
//! produces a slope vector.

use log::debug;

use crate::error::{NumericsError, NumericsResult};
use crate::interpolation::hermite::validate_nodes;
use crate::interpolation::HermiteSpline;
use crate::linear_algebra::solve_tridiagonal;

impl HermiteSpline {
    /// Creates a spline through `(xs, ys)` with solved-for slopes so that
    /// the second derivative is continuous across every interior node.
    ///
    /// The two boundary rows use the one-sided condition
    /// `2·s_0 + s_1 = 3·dy_0/dx_0` (mirrored at the far end), not the
    /// textbook zero-second-derivative natural boundary. End-segment
    /// extrapolation follows the usual clamp policy of
    /// [`HermiteSpline::evaluate`].
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::ShapeMismatch`] or
    /// [`NumericsError::InvalidNodes`] for bad inputs, and
    /// [`NumericsError::SingularSystem`] if the continuity system cannot be
    /// eliminated (it is diagonally dominant for valid nodes, so this
    /// indicates non-finite input values).
    ///
    /// # Example
    ///
    /// ```rust
    /// use knotwork::interpolation::HermiteSpline;
    ///
    /// let spline = HermiteSpline::natural(
    ///     vec![0.0, 1.0, 2.0, 3.0],
    ///     vec![0.0, 1.0, 0.0, 1.0],
    /// ).unwrap();
    ///
    /// assert!((spline.evaluate(1.0) - 1.0).abs() < 1e-10);
    /// ```
    pub fn natural(xs: Vec<f64>, ys: Vec<f64>) -> NumericsResult<Self> {
        if ys.len() != xs.len() {
            return Err(NumericsError::shape_mismatch("values", xs.len(), ys.len()));
        }
        validate_nodes(&xs)?;

        let slopes = continuity_slopes(&xs, &ys)?;
        debug!("solved {} continuity slopes", slopes.len());

        Self::new(xs, ys, slopes)
    }
}

/// Assembles and solves the tridiagonal C² continuity system over the node
/// slopes `s_0..s_{N-1}`.
///
/// Interior row k matches the second derivatives of the segments meeting at
/// node k:
///
/// ```text
/// dx_k·s_{k-1} + 2(dx_{k-1}+dx_k)·s_k + dx_{k-1}·s_{k+1}
///     = 3·(dy_{k-1}/dx_{k-1}·dx_k + dy_k/dx_k·dx_{k-1})
/// ```
///
/// Both end rows are the one-sided condition on the boundary interval.
fn continuity_slopes(xs: &[f64], ys: &[f64]) -> NumericsResult<Vec<f64>> {
    let n = xs.len();

    let dx: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let chord: Vec<f64> = ys
        .windows(2)
        .zip(&dx)
        .map(|(w, &h)| (w[1] - w[0]) / h)
        .collect();

    let mut sub = vec![0.0; n - 1];
    let mut main = vec![0.0; n];
    let mut sup = vec![0.0; n - 1];
    let mut rhs = vec![0.0; n];

    // Boundary rows use only the first and last intervals.
    main[0] = 2.0;
    sup[0] = 1.0;
    rhs[0] = 3.0 * chord[0];

    main[n - 1] = 2.0;
    sub[n - 2] = 1.0;
    rhs[n - 1] = 3.0 * chord[n - 2];

    for k in 1..n - 1 {
        sub[k - 1] = dx[k];
        main[k] = 2.0 * (dx[k - 1] + dx[k]);
        sup[k] = dx[k - 1];
        rhs[k] = 3.0 * (chord[k - 1] * dx[k] + chord[k] * dx[k - 1]);
    }

    solve_tridiagonal(&sub, &main, &sup, &rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn test_natural_reproduces_nodes() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 0.0, 1.0];

        let spline = HermiteSpline::natural(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_abs_diff_eq!(spline.evaluate(*x), *y, epsilon = 1e-10);
        }

        // Batch evaluation over the nodes reproduces the values too.
        let at_nodes = spline.evaluate_slice(&xs);
        for (v, y) in at_nodes.iter().zip(ys.iter()) {
            assert_abs_diff_eq!(*v, *y, epsilon = 1e-10);
        }

        // Between the first two nodes the curve stays strictly between them.
        let mid = spline.evaluate(0.5);
        assert!(mid > 0.0 && mid < 1.0, "evaluate(0.5) = {}", mid);
    }

    #[test]
    fn test_symmetric_hump_slopes() {
        // x=[0,1,2], y=[0,1,0]: by symmetry the solved slopes are
        // [3/2, 0, -3/2] and the peak slope vanishes.
        let spline =
            HermiteSpline::natural(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();

        let s = spline.slopes();
        assert_relative_eq!(s[0], 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(s[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(s[2], -1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_second_derivative_continuous_at_interior_nodes() {
        let xs = vec![0.0, 0.7, 1.5, 2.2, 4.0, 5.0];
        let ys = vec![0.0, 2.0, -1.0, 0.5, 3.0, 2.5];

        let spline = HermiteSpline::natural(xs.clone(), ys).unwrap();

        // The second derivative is linear inside each segment, so its
        // left-limit at a node is recovered exactly by linear extrapolation
        // from two interior samples.
        let h = 1e-3;
        for &x in &xs[1..xs.len() - 1] {
            let left_limit =
                2.0 * spline.second_derivative(x - h) - spline.second_derivative(x - 2.0 * h);
            let right = spline.second_derivative(x);
            assert_abs_diff_eq!(left_limit, right, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_first_derivative_continuous_at_interior_nodes() {
        let xs = vec![0.0, 1.0, 2.0, 3.5, 5.0];
        let ys = vec![1.0, 0.0, 2.0, -1.0, 0.5];

        let spline = HermiteSpline::natural(xs.clone(), ys).unwrap();

        for &x in &xs[1..xs.len() - 1] {
            let h = 1e-7;
            let from_left = (spline.evaluate(x) - spline.evaluate(x - h)) / h;
            let from_right = (spline.evaluate(x + h) - spline.evaluate(x)) / h;
            assert_abs_diff_eq!(from_left, from_right, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_boundary_rows_pinned() {
        // The end rows are the one-sided conditions 2·s_0 + s_1 = 3·dy_0/dx_0
        // and s_{N-2} + 2·s_{N-1} = 3·dy_{N-2}/dx_{N-2}. The latter is a
        // deliberate mirror of the first row, not the textbook natural
        // boundary; this test pins the choice down.
        let xs = vec![0.0, 0.5, 1.7, 3.0, 3.2];
        let ys = vec![1.0, 3.0, -2.0, 0.0, 0.4];

        let spline = HermiteSpline::natural(xs.clone(), ys.clone()).unwrap();
        let s = spline.slopes();
        let n = xs.len();

        let first_chord = (ys[1] - ys[0]) / (xs[1] - xs[0]);
        let last_chord = (ys[n - 1] - ys[n - 2]) / (xs[n - 1] - xs[n - 2]);

        assert_relative_eq!(2.0 * s[0] + s[1], 3.0 * first_chord, epsilon = 1e-10);
        assert_relative_eq!(s[n - 2] + 2.0 * s[n - 1], 3.0 * last_chord, epsilon = 1e-10);
    }

    #[test]
    fn test_two_nodes_degenerates_to_chord() {
        let spline = HermiteSpline::natural(vec![1.0, 3.0], vec![2.0, 8.0]).unwrap();

        // The 2x2 system forces both slopes to the chord slope, so the
        // "spline" is the straight line through the two points.
        assert_relative_eq!(spline.slopes()[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(spline.slopes()[1], 3.0, epsilon = 1e-12);
        assert_relative_eq!(spline.evaluate(2.0), 5.0, epsilon = 1e-12);
        assert_relative_eq!(spline.evaluate(0.0), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_natural_error_propagation() {
        let err = HermiteSpline::natural(vec![1.0, 0.5, 2.0], vec![0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, NumericsError::InvalidNodes { .. }));

        let err = HermiteSpline::natural(vec![0.0, 1.0, 2.0], vec![0.0, 0.0]).unwrap_err();
        assert!(matches!(err, NumericsError::ShapeMismatch { .. }));
    }

    proptest! {
        #[test]
        fn prop_natural_interpolates_all_nodes(
            gaps in prop::collection::vec(0.1f64..2.0, 1..12),
            seed in prop::collection::vec(-100.0f64..100.0, 13),
        ) {
            let mut xs = vec![0.0];
            for g in &gaps {
                let next = xs[xs.len() - 1] + g;
                xs.push(next);
            }
            let ys: Vec<f64> = seed.iter().take(xs.len()).copied().collect();

            let spline = HermiteSpline::natural(xs.clone(), ys.clone()).unwrap();

            for (x, y) in xs.iter().zip(ys.iter()) {
                let v = spline.evaluate(*x);
                prop_assert!(
                    (v - y).abs() <= 1e-8 * y.abs().max(1.0),
                    "node ({}, {}) reproduced as {}",
                    x, y, v
                );
            }
        }
    }
}
