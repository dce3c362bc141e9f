//! Defines the [`RootReport`] struct returned by all
//! root-finding algorithms.

use super::algorithms::Algorithm;


/// Which convergence test ended the run.
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - bisection, false position, newton, modified newton
///     - |f(x)| <= tol  (modified newton: |f(x)| < tol)
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - bisection
///     - |b - a| <= tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - secant
///     - |x_n - x_{n-1}| <= tol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootReport`]
/// - `root`                : root estimate
/// - `iterations`          : completed refinement steps, not counting the
///                           initial evaluation; always `< max_iter`
/// - `tolerance_satisfied` : which test ended the run ([`ToleranceSatisfied`])
/// - `algorithm`           : method that produced the root
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootReport {
    pub root                : f64,
    pub iterations          : usize,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub algorithm           : Algorithm,
}

impl RootReport {
    /// The `(root, iterations)` pair.
    pub fn into_pair(self) -> (f64, usize) {
        (self.root, self.iterations)
    }
}

impl std::fmt::Display for RootReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Root: {}\nIterations: {}", self.root, self.iterations)
    }
}
