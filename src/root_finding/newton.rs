//! Newton-Raphson method

use log::{debug, trace};

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::function::Function;
use super::report::{RootReport, ToleranceSatisfied};

const ALGORITHM: Algorithm = Algorithm::NEWTON;


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : its first derivative
/// - `x0`    : initial guess
/// - `cfg`   : [`SolverCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`RootReport`] with:
/// - `root`                : iterate with `|f(root)| <= tol`
/// - `iterations`          : number of Newton steps taken, `0` if `x0` is a root
/// - `tolerance_satisfied` : always [`ToleranceSatisfied::AbsFxReached`]
///
/// # Errors
/// - [`RootFindingError::ZeroDerivative`]        : `f'(x0) == 0`, checked before iterating
/// - [`RootFindingError::Diverged`]              : a step produced a non-finite iterate
/// - [`RootFindingError::MaxIterationsExceeded`] : `max_iter` steps without convergence
/// - [`RootFindingError::Evaluation`]            : `func` or `dfunc` failed at some point
///
/// # Behavior
/// - Update: `x <- x - f(x) / f'(x)` while `|f(x)| > tol`.
/// - The derivative is only checked for zero at `x0`. A derivative that
///   vanishes later makes the step infinite, which is reported as
///   [`RootFindingError::Diverged`], not as a zero derivative.
///
/// # Notes
/// - Convergence is *local only*: quadratic near a simple root given a good
///   `x0`, but poor guesses can diverge or cycle. For guaranteed convergence,
///   use a bracketed method (e.g. bisection).
pub fn newton<F, G>(
    func: &F,
    dfunc: &G,
    x0: f64,
    cfg: SolverCfg,
) -> Result<RootReport, RootFindingError>
where
    F: Function + ?Sized,
    G: Function + ?Sized {

    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    if dfunc.evaluate(x0)? == 0.0 {
        debug!("{ALGORITHM}: f'(x0) == 0 at x0={x0}");
        return Err(RootFindingError::ZeroDerivative { x0 });
    }

    debug!("{ALGORITHM}: start at x0={x0}, tol={tol}, max_iter={max_iter}");

    let mut x  = x0;
    let mut fx = func.evaluate(x)?;
    let mut n  = 0;
    while fx.abs() > tol && n < max_iter {
        let dfx = dfunc.evaluate(x)?;
        trace!("{ALGORITHM}: n={n} x={x} f(x)={fx} f'(x)={dfx}");

        let x_next = x - fx / dfx;
        if !x_next.is_finite() {
            debug!("{ALGORITHM}: step from x={x} with f'(x)={dfx} is not finite");
            return Err(RootFindingError::Diverged { algorithm: ALGORITHM, x: x_next, iteration: n + 1 });
        }

        x  = x_next;
        fx = func.evaluate(x)?;
        n += 1;
    }

    if n == max_iter {
        debug!("{ALGORITHM}: iteration limit {max_iter} reached, last x={x}, f(x)={fx}");
        return Err(RootFindingError::MaxIterationsExceeded { algorithm: ALGORITHM, max_iter });
    }

    debug!("{ALGORITHM}: |f(x)| <= tol at x={x} after {n} iterations");
    Ok(RootReport {
        root                : x,
        iterations          : n,
        tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
        algorithm           : ALGORITHM,
    })
}
