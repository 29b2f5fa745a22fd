//! Cubic Hermite spline with per-node slopes.

use log::debug;
use ndarray::{Array, Dimension};

use crate::error::{NumericsError, NumericsResult};
use crate::interpolation::Interpolator;

/// Piecewise-cubic Hermite spline.
///
/// Each of the N-1 segments `[x_i, x_{i+1}]` carries its own cubic
///
/// ```text
/// p_i(x) = y_i + s_i·(x - x_i) + a_i·(x - x_i)² + b_i·(x - x_i)³
/// ```
///
/// with `a_i` and `b_i` chosen so the cubic matches the value and slope at
/// both segment ends. The coefficients are derived once at construction and
/// never recomputed; evaluation is a binary segment lookup plus a Horner
/// step, O(log N) per query.
///
/// Queries outside `[x_0, x_{N-1}]` reuse the boundary segment's cubic
/// (genuine extrapolation, not truncation), so evaluation never fails. The
/// spline is immutable after construction and freely shareable across
/// threads.
///
/// # Example
///
/// ```rust
/// use knotwork::interpolation::HermiteSpline;
///
/// // A single flat-ended segment from (0, 0) to (1, 1).
/// let spline = HermiteSpline::new(
///     vec![0.0, 1.0],
///     vec![0.0, 1.0],
///     vec![0.0, 0.0],
/// ).unwrap();
///
/// assert!((spline.evaluate(0.5) - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct HermiteSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    slopes: Vec<f64>,
    /// Per-segment quadratic coefficient `a_i`.
    quad: Vec<f64>,
    /// Per-segment cubic coefficient `b_i`.
    cubic: Vec<f64>,
}

/// Rejects node sequences that cannot index segments.
pub(super) fn validate_nodes(xs: &[f64]) -> NumericsResult<()> {
    if xs.len() < 2 {
        return Err(NumericsError::invalid_nodes(format!(
            "need at least 2 nodes, got {}",
            xs.len()
        )));
    }
    for pair in xs.windows(2) {
        if pair[1] <= pair[0] {
            return Err(NumericsError::invalid_nodes(
                "nodes must be strictly increasing",
            ));
        }
    }
    Ok(())
}

impl HermiteSpline {
    /// Creates a Hermite spline from nodes, values and per-node slopes.
    ///
    /// # Arguments
    ///
    /// * `xs` - Node positions, strictly increasing, at least 2
    /// * `ys` - Interpolated values, one per node
    /// * `slopes` - First derivative imposed at each node
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::ShapeMismatch`] if the three sequences
    /// disagree in length, and [`NumericsError::InvalidNodes`] if the nodes
    /// are not strictly increasing or fewer than 2.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, slopes: Vec<f64>) -> NumericsResult<Self> {
        if ys.len() != xs.len() {
            return Err(NumericsError::shape_mismatch("values", xs.len(), ys.len()));
        }
        if slopes.len() != xs.len() {
            return Err(NumericsError::shape_mismatch("slopes", xs.len(), slopes.len()));
        }
        validate_nodes(&xs)?;

        let n = xs.len();
        let mut quad = Vec::with_capacity(n - 1);
        let mut cubic = Vec::with_capacity(n - 1);

        for i in 0..n - 1 {
            let dx = xs[i + 1] - xs[i];
            let chord = (ys[i + 1] - ys[i]) / dx;
            quad.push((3.0 * chord - slopes[i + 1] - 2.0 * slopes[i]) / dx);
            cubic.push((slopes[i + 1] + slopes[i] - 2.0 * chord) / (dx * dx));
        }

        debug!(
            "built Hermite spline: {} nodes over [{}, {}]",
            n,
            xs[0],
            xs[n - 1]
        );

        Ok(Self {
            xs,
            ys,
            slopes,
            quad,
            cubic,
        })
    }

    /// Finds the segment governing x: the index of the last node at or
    /// below x, clamped so out-of-range queries land on a boundary segment.
    fn segment(&self, x: f64) -> usize {
        let insertion = self.xs.partition_point(|&node| node <= x);
        insertion.saturating_sub(1).min(self.xs.len() - 2)
    }

    /// Evaluates the spline at x.
    ///
    /// Outside the node range this extrapolates with the nearest boundary
    /// segment's cubic. Never fails.
    pub fn evaluate(&self, x: f64) -> f64 {
        let i = self.segment(x);
        let dx = x - self.xs[i];
        self.ys[i] + dx * (self.slopes[i] + dx * (self.quad[i] + dx * self.cubic[i]))
    }

    /// Evaluates the analytic first derivative at x.
    pub fn derivative(&self, x: f64) -> f64 {
        let i = self.segment(x);
        let dx = x - self.xs[i];
        self.slopes[i] + dx * (2.0 * self.quad[i] + 3.0 * dx * self.cubic[i])
    }

    /// Evaluates the analytic second derivative at x.
    ///
    /// Piecewise linear; continuous at interior nodes only for splines built
    /// with [`HermiteSpline::natural`].
    pub fn second_derivative(&self, x: f64) -> f64 {
        let i = self.segment(x);
        let dx = x - self.xs[i];
        2.0 * self.quad[i] + 6.0 * dx * self.cubic[i]
    }

    /// Evaluates the spline elementwise over an array of queries.
    ///
    /// The result has exactly the shape of the input, for any
    /// dimensionality.
    ///
    /// # Example
    ///
    /// ```rust
    /// use knotwork::interpolation::HermiteSpline;
    /// use ndarray::array;
    ///
    /// let spline = HermiteSpline::natural(
    ///     vec![0.0, 1.0, 2.0, 3.0],
    ///     vec![0.0, 1.0, 0.0, 1.0],
    /// ).unwrap();
    ///
    /// let grid = array![[0.0, 0.5], [1.5, 3.0]];
    /// let values = spline.evaluate_array(&grid);
    /// assert_eq!(values.shape(), grid.shape());
    /// ```
    pub fn evaluate_array<D: Dimension>(&self, queries: &Array<f64, D>) -> Array<f64, D> {
        queries.mapv(|x| self.evaluate(x))
    }

    /// Evaluates the spline over a plain slice of queries.
    pub fn evaluate_slice(&self, queries: &[f64]) -> Vec<f64> {
        queries.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Returns the node positions.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the interpolated values.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns the per-node slopes.
    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }
}

impl Interpolator for HermiteSpline {
    fn evaluate(&self, x: f64) -> f64 {
        HermiteSpline::evaluate(self, x)
    }

    fn derivative(&self, x: f64) -> f64 {
        HermiteSpline::derivative(self, x)
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
