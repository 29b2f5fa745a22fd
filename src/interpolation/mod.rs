//! Piecewise-cubic spline interpolation.
//!
//! Two ways to build the same spline object:
//!
//! - [`HermiteSpline::new`]: you supply the first derivative at every node
//!   (C¹ by construction, second derivative generally jumps at nodes)
//! - [`HermiteSpline::natural`]: the slopes are solved from a tridiagonal
//!   continuity system so the second derivative is also continuous (C²)
//!
//! Either way, evaluation is the same engine: binary segment lookup plus a
//! Horner step over precomputed per-segment coefficients. Queries outside
//! the node range extrapolate with the nearest boundary segment's cubic —
//! they never error and never clamp to the boundary value.

mod hermite;
mod natural;

pub use hermite::HermiteSpline;

/// Trait for interpolation methods.
///
/// Evaluation is infallible: implementors define behaviour over the whole
/// real line, extrapolating outside their node range.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn evaluate(&self, x: f64) -> f64;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> f64;

    /// Returns the first node position.
    fn min_x(&self) -> f64;

    /// Returns the last node position.
    fn max_x(&self) -> f64;

    /// Checks whether x lies inside the node range (no extrapolation).
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_derivative(interp: &dyn Interpolator, x: f64, name: &str) {
        let h = 1e-6;
        let numerical = (interp.evaluate(x + h) - interp.evaluate(x - h)) / (2.0 * h);
        let analytical = interp.derivative(x);

        assert!(
            (analytical - numerical).abs() < 1e-5,
            "{} derivative at x={}: analytical={}, numerical={}",
            name,
            x,
            analytical,
            numerical
        );
    }

    #[test]
    fn test_derivative_consistency() {
        let xs = vec![0.0, 1.0, 2.5, 3.0, 5.0];
        let ys = vec![0.0, 1.0, -0.5, 2.0, 1.0];

        let hermite =
            HermiteSpline::new(xs.clone(), ys.clone(), vec![1.0, 0.0, -2.0, 0.5, 0.0]).unwrap();
        let natural = HermiteSpline::natural(xs, ys).unwrap();

        for x in [0.3, 1.5, 2.75, 4.2] {
            check_derivative(&hermite, x, "Hermite");
            check_derivative(&natural, x, "Natural");
        }

        // The derivative contract also holds in the extrapolation regions.
        check_derivative(&natural, -0.5, "Natural (below range)");
        check_derivative(&natural, 5.5, "Natural (above range)");
    }

    #[test]
    fn test_in_range() {
        let spline =
            HermiteSpline::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![1.0, 1.0]).unwrap();

        assert!(spline.in_range(0.0));
        assert!(spline.in_range(0.7));
        assert!(spline.in_range(1.0));
        assert!(!spline.in_range(-0.1));
        assert!(!spline.in_range(1.1));
    }
}
