//! The objective-function contract.

/// A black-box objective function over a fixed-dimensional continuous domain.
///
/// This is the **only** trait a user must implement to run the engine.
/// It maps a decoded point (one `f64` per decision variable) to a cost
/// value. Lower cost is better (minimization); for maximization problems,
/// negate the value.
///
/// The function must be pure, deterministic, and total over the configured
/// [`Domain`](crate::Domain). It is called once per genotype per ranking
/// pass and never sees the engine's internals.
///
/// A blanket implementation covers plain closures and function pointers:
///
/// ```
/// use evobit::Objective;
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(sphere.evaluate(&[3.0, 4.0]), 25.0);
/// ```
///
/// # Thread Safety
///
/// `Objective` must be `Send + Sync` because the engine may evaluate a
/// population in parallel using rayon.
pub trait Objective: Send + Sync {
    /// Evaluates one decoded point and returns its cost.
    ///
    /// `point.len()` equals the configured dimensionality.
    fn evaluate(&self, point: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, point: &[f64]) -> f64 {
        self(point)
    }
}
