use log::{debug, trace};

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::function::Function;
use super::report::{RootReport, ToleranceSatisfied};
use super::signs::{brackets_root, root_in_left};

const ALGORITHM: Algorithm = Algorithm::BISECTION;


/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the search interval.
/// ├ `b`    - Other end of the search interval.
/// └ `cfg`  - [`SolverCfg`] with `tol` and `max_iter`.
///
/// # Returns
///
/// On success, a [`RootReport`] with
/// ├ `root`                : midpoint that met the residual test, or the
/// │                         midpoint of the final bracket
/// ├ `iterations`          : number of halvings performed
/// └ `tolerance_satisfied` : [`ToleranceSatisfied::AbsFxReached`] or
///                           [`ToleranceSatisfied::WidthTolReached`]
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidBracket`]        - `f(a) * f(b) > 0`.
/// ├ [`RootFindingError::MaxIterationsExceeded`] - `max_iter` halvings without convergence.
/// └ [`RootFindingError::Evaluation`]            - `func` failed at some point.
///
/// # Behavior
///
/// ├ Each pass evaluates the midpoint `x`; `|f(x)| <= tol` returns `x` at once,
/// │ whatever the bracket width.
/// ├ Otherwise the bracket becomes `[a, x]` if `f(a) * f(x) < 0`, else `[x, b]`.
/// │   └ A zero product (only possible when `f(a) == 0`) moves `a`, so an exact
/// │     root sitting on `a` is not kept.
/// └ The loop runs while `|b - a| > tol` and fewer than `max_iter` halvings
///   have been done; ending on the width test returns the final midpoint.
pub fn bisection<F>(
    func: &F,
    mut a: f64,
    mut b: f64,
    cfg: SolverCfg,
) -> Result<RootReport, RootFindingError>
where F: Function + ?Sized {

    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    let mut fa = func.evaluate(a)?;
    let fb     = func.evaluate(b)?;
    if !brackets_root(fa, fb) {
        debug!("{ALGORITHM}: no sign change on [{a}, {b}]");
        return Err(RootFindingError::InvalidBracket { a, b, fa, fb });
    }

    debug!("{ALGORITHM}: start on [{a}, {b}], tol={tol}, max_iter={max_iter}");

    let mut n = 0;
    while (b - a).abs() > tol && n < max_iter {
        let x  = calculate_bisection(a, b);
        let fx = func.evaluate(x)?;
        trace!("{ALGORITHM}: n={n} a={a} b={b} x={x} f(x)={fx}");

        // check for abs fx tolerance
        if fx.abs() <= tol {
            debug!("{ALGORITHM}: |f(x)| <= tol at x={x} after {n} iterations");
            return Ok(RootReport {
                root                : x,
                iterations          : n,
                tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
                algorithm           : ALGORITHM,
            });
        }

        // shrink interval
        if root_in_left(fa, fx) {
            b = x;
        } else {
            a  = x;
            fa = fx;
        }

        n += 1;
    }

    if n == max_iter {
        debug!("{ALGORITHM}: iteration limit {max_iter} reached on [{a}, {b}]");
        return Err(RootFindingError::MaxIterationsExceeded { algorithm: ALGORITHM, max_iter });
    }

    let root = calculate_bisection(a, b);
    debug!("{ALGORITHM}: |b - a| <= tol, root={root} after {n} iterations");
    Ok(RootReport {
        root,
        iterations          : n,
        tolerance_satisfied : ToleranceSatisfied::WidthTolReached,
        algorithm           : ALGORITHM,
    })
}
