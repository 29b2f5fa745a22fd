//! Linear algebra primitives.
//!
//! The natural-spline continuity system is tridiagonal and diagonally
//! dominant, so the only solver this crate carries is the specialized
//! Thomas elimination. No pivoting is performed; a zero pivot is reported
//! as [`NumericsError::SingularSystem`] rather than repaired.

use crate::error::{NumericsError, NumericsResult};

/// Pivot magnitudes below this are treated as singular.
const PIVOT_TOLERANCE: f64 = 1e-15;

/// Solves a tridiagonal system of equations with the Thomas algorithm.
///
/// The system has the form:
///
/// ```text
/// | main[0]  sup[0]    0      ...     0      | | x[0]   |   | rhs[0]   |
/// | sub[0]   main[1]  sup[1]  ...     0      | | x[1]   |   | rhs[1]   |
/// |   0      sub[1]   main[2] ...     0      | | x[2]   | = | rhs[2]   |
/// |  ...      ...      ...    ...    ...     | | ...    |   | ...      |
/// |   0        0        0   sub[n-2] main[n-1] | | x[n-1] |   | rhs[n-1] |
/// ```
///
/// # Arguments
///
/// * `sub` - Sub-diagonal (length n-1)
/// * `main` - Main diagonal (length n)
/// * `sup` - Super-diagonal (length n-1)
/// * `rhs` - Right-hand side (length n)
///
/// # Errors
///
/// Returns [`NumericsError::ShapeMismatch`] if the band lengths are
/// inconsistent, and [`NumericsError::SingularSystem`] if any elimination
/// pivot falls below tolerance. O(n); exact in exact arithmetic.
pub fn solve_tridiagonal(
    sub: &[f64],
    main: &[f64],
    sup: &[f64],
    rhs: &[f64],
) -> NumericsResult<Vec<f64>> {
    let n = main.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    if sub.len() != n - 1 {
        return Err(NumericsError::shape_mismatch("sub-diagonal", n - 1, sub.len()));
    }
    if sup.len() != n - 1 {
        return Err(NumericsError::shape_mismatch("super-diagonal", n - 1, sup.len()));
    }
    if rhs.len() != n {
        return Err(NumericsError::shape_mismatch("right-hand side", n, rhs.len()));
    }

    // Forward sweep: `upper` collects the rescaled super-diagonal and `x`
    // the rescaled right-hand side.
    let mut upper = vec![0.0; n - 1];
    let mut x = vec![0.0; n];

    let mut pivot = main[0];
    if pivot.abs() < PIVOT_TOLERANCE {
        return Err(NumericsError::SingularSystem { pivot });
    }
    if n > 1 {
        upper[0] = sup[0] / pivot;
    }
    x[0] = rhs[0] / pivot;

    for i in 1..n {
        pivot = main[i] - sub[i - 1] * upper[i - 1];
        if pivot.abs() < PIVOT_TOLERANCE {
            return Err(NumericsError::SingularSystem { pivot });
        }
        if i < n - 1 {
            upper[i] = sup[i] / pivot;
        }
        x[i] = (rhs[i] - sub[i - 1] * x[i - 1]) / pivot;
    }

    // Back substitution, in place.
    for i in (0..n - 1).rev() {
        x[i] -= upper[i] * x[i + 1];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Multiplies the band representation back against a candidate solution.
    fn residual(sub: &[f64], main: &[f64], sup: &[f64], rhs: &[f64], x: &[f64]) -> f64 {
        let n = main.len();
        let mut worst: f64 = 0.0;
        for i in 0..n {
            let mut row = main[i] * x[i];
            if i > 0 {
                row += sub[i - 1] * x[i - 1];
            }
            if i < n - 1 {
                row += sup[i] * x[i + 1];
            }
            worst = worst.max((row - rhs[i]).abs());
        }
        worst
    }

    #[test]
    fn test_tridiagonal_simple() {
        let sub = vec![1.0, 1.0];
        let main = vec![2.0, 2.0, 2.0];
        let sup = vec![1.0, 1.0];
        let rhs = vec![1.0, 2.0, 3.0];

        let x = solve_tridiagonal(&sub, &main, &sup, &rhs).unwrap();

        assert!(residual(&sub, &main, &sup, &rhs, &x) < 1e-12);
    }

    #[test]
    fn test_tridiagonal_diagonally_dominant() {
        let sub = vec![1.0, -0.5, 2.0, 0.25];
        let main = vec![4.0, 5.0, 6.0, 5.0, 4.0];
        let sup = vec![-1.0, 1.5, 0.5, 1.0];
        let rhs = vec![3.0, -2.0, 7.0, 0.5, 1.0];

        let x = solve_tridiagonal(&sub, &main, &sup, &rhs).unwrap();

        assert!(residual(&sub, &main, &sup, &rhs, &x) < 1e-12);
    }

    #[test]
    fn test_tridiagonal_single_equation() {
        let x = solve_tridiagonal(&[], &[4.0], &[], &[2.0]).unwrap();
        assert_relative_eq!(x[0], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_tridiagonal_zero_pivot() {
        // First pivot is exactly zero.
        let err = solve_tridiagonal(&[1.0], &[0.0, 2.0], &[1.0], &[1.0, 1.0]).unwrap_err();
        assert!(matches!(err, NumericsError::SingularSystem { .. }));

        // Elimination drives the second pivot to zero: 2 - 2*(1/1) = 0.
        let err = solve_tridiagonal(&[2.0], &[1.0, 2.0], &[1.0], &[1.0, 1.0]).unwrap_err();
        assert!(matches!(err, NumericsError::SingularSystem { .. }));
    }

    #[test]
    fn test_tridiagonal_band_length_mismatch() {
        let err = solve_tridiagonal(&[1.0, 1.0], &[2.0, 2.0], &[1.0], &[1.0, 1.0]).unwrap_err();
        assert!(matches!(err, NumericsError::ShapeMismatch { .. }));

        let err = solve_tridiagonal(&[1.0], &[2.0, 2.0], &[1.0], &[1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(err, NumericsError::ShapeMismatch { .. }));
    }
}
