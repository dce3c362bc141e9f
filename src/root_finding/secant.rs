use log::{debug, trace};

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::function::Function;
use super::report::{RootReport, ToleranceSatisfied};

const ALGORITHM: Algorithm = Algorithm::SECANT;


/// Calculates the secant x-intercept for the line
/// connecting `(x0, fx0)` and `(x1, fx1)`, stepping from `x1`.
///
/// # Returns
/// - `Some(x)` if `fx1 - fx0 != 0`
/// - `None`    otherwise
#[inline]
fn calculate_secant_x_intercept(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
) -> Option<f64> {
    let denom = fx1 - fx0;
    if denom == 0.0 {
        return None;
    }

    Some(x1 - fx1 * (x1 - x0) / denom)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess
/// - `x1`   : Second initial guess
/// - `cfg`  : [`SolverCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`RootReport`] with
/// - `root`                : latest iterate
/// - `iterations`          : number of secant steps taken
/// - `tolerance_satisfied` : always [`ToleranceSatisfied::StepSizeReached`]
///
/// # Errors
/// - [`RootFindingError::DegenerateGuesses`]     : `f(x0) == f(x1)`, including `x0 == x1`
/// - [`RootFindingError::ZeroDenominator`]       : `f(x_k) == f(x_{k-1})` mid-iteration
/// - [`RootFindingError::Diverged`]              : a step produced a non-finite iterate
/// - [`RootFindingError::MaxIterationsExceeded`] : `max_iter` steps without convergence
/// - [`RootFindingError::Evaluation`]            : `func` failed at some point
///
/// # Behavior
/// - Update:
///   x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))
/// - Runs while `|x_k - x_{k-1}| > tol`; the residual is never tested, so a
///   guess pair closer than `tol` is returned as-is with `iterations = 0`.
///
/// # Warning
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn secant<F>(
    func: &F,
    mut x0: f64,
    mut x1: f64,
    cfg: SolverCfg,
) -> Result<RootReport, RootFindingError>
where F: Function + ?Sized {

    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    let mut fx0 = func.evaluate(x0)?;
    let mut fx1 = func.evaluate(x1)?;
    if fx0 == fx1 {
        debug!("{ALGORITHM}: f(x0) == f(x1) == {fx0} for x0={x0}, x1={x1}");
        return Err(RootFindingError::DegenerateGuesses { x0, x1, fx: fx0 });
    }

    debug!("{ALGORITHM}: start at x0={x0}, x1={x1}, tol={tol}, max_iter={max_iter}");

    let mut n = 0;
    while (x1 - x0).abs() > tol && n < max_iter {
        // x1 is only evaluated once the loop needs it
        if n > 0 {
            fx1 = func.evaluate(x1)?;
        }
        trace!("{ALGORITHM}: n={n} x0={x0} x1={x1} f(x0)={fx0} f(x1)={fx1}");

        let x = calculate_secant_x_intercept((x0, fx0), (x1, fx1))
            .ok_or(RootFindingError::ZeroDenominator { algorithm: ALGORITHM, x: x1, iteration: n })?;
        if !x.is_finite() {
            debug!("{ALGORITHM}: step from x1={x1} is not finite");
            return Err(RootFindingError::Diverged { algorithm: ALGORITHM, x, iteration: n + 1 });
        }

        x0  = x1;
        fx0 = fx1;
        x1  = x;
        n  += 1;
    }

    if n == max_iter {
        debug!("{ALGORITHM}: iteration limit {max_iter} reached, last x={x1}");
        return Err(RootFindingError::MaxIterationsExceeded { algorithm: ALGORITHM, max_iter });
    }

    debug!("{ALGORITHM}: |x1 - x0| <= tol at x={x1} after {n} iterations");
    Ok(RootReport {
        root                : x1,
        iterations          : n,
        tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
        algorithm           : ALGORITHM,
    })
}
