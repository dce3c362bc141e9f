//! Modified Newton method for roots of any multiplicity.
//!
//! Applies Newton's method to `u(x) = f(x) / f'(x)`, which has only simple
//! roots wherever `f` has a root, giving
//!
//! `x <- x - f(x) f'(x) / (f'(x)^2 - f(x) f''(x))`

use log::{debug, trace};

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::function::Function;
use super::report::{RootReport, ToleranceSatisfied};

const ALGORITHM: Algorithm = Algorithm::MODIFIED_NEWTON;


/// Finds a root of `func` with the multiplicity-robust Newton variant.
///
/// # Arguments
/// - `func`   : function whose root is sought
/// - `dfunc`  : first derivative
/// - `ddfunc` : second derivative
/// - `x0`     : initial guess
/// - `cfg`    : [`SolverCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`RootReport`] with:
/// - `root`                : iterate with `|f(root)| < tol` (strict)
/// - `iterations`          : updates applied before `root` was accepted;
///                           `0` when `x0` is accepted
/// - `tolerance_satisfied` : always [`ToleranceSatisfied::AbsFxReached`]
///
/// # Errors
/// - [`RootFindingError::ZeroDenominator`]       : `f'(x)^2 - f(x) f''(x) == 0`
/// - [`RootFindingError::Diverged`]              : an update produced a non-finite iterate
/// - [`RootFindingError::MaxIterationsExceeded`] : `max_iter` updates applied and
///                                                 none of the checked iterates converged
/// - [`RootFindingError::Evaluation`]            : a handle failed at some point
///
/// # Behavior
/// - Each of the `max_iter` passes first checks `|f(x)| < tol`, then applies
///   one update. The iterate produced by the final pass is never checked:
///   with `max_iter = k` at most `k - 1` updates can lead to success.
pub fn modified_newton<F, G, H>(
    func: &F,
    dfunc: &G,
    ddfunc: &H,
    x0: f64,
    cfg: SolverCfg,
) -> Result<RootReport, RootFindingError>
where
    F: Function + ?Sized,
    G: Function + ?Sized,
    H: Function + ?Sized {

    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    debug!("{ALGORITHM}: start at x0={x0}, tol={tol}, max_iter={max_iter}");

    let mut x = x0;
    for n in 0..max_iter {
        let fx   = func.evaluate(x)?;
        let dfx  = dfunc.evaluate(x)?;
        let ddfx = ddfunc.evaluate(x)?;
        trace!("{ALGORITHM}: n={n} x={x} f(x)={fx} f'(x)={dfx} f''(x)={ddfx}");

        // check |f(x)| tolerance
        if fx.abs() < tol {
            debug!("{ALGORITHM}: |f(x)| < tol at x={x} after {n} iterations");
            return Ok(RootReport {
                root                : x,
                iterations          : n,
                tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
                algorithm           : ALGORITHM,
            });
        }

        let denom = dfx * dfx - fx * ddfx;
        if denom == 0.0 {
            debug!("{ALGORITHM}: zero denominator at x={x}");
            return Err(RootFindingError::ZeroDenominator { algorithm: ALGORITHM, x, iteration: n });
        }

        let x_next = x - fx * dfx / denom;
        if !x_next.is_finite() {
            debug!("{ALGORITHM}: update from x={x} is not finite");
            return Err(RootFindingError::Diverged { algorithm: ALGORITHM, x: x_next, iteration: n + 1 });
        }
        x = x_next;
    }

    debug!("{ALGORITHM}: iteration limit {max_iter} reached, last x={x}");
    Err(RootFindingError::MaxIterationsExceeded { algorithm: ALGORITHM, max_iter })
}
