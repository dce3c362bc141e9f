use log::{debug, trace};

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::function::Function;
use super::report::{RootReport, ToleranceSatisfied};
use super::signs::{brackets_root, root_in_left};

const ALGORITHM: Algorithm = Algorithm::FALSE_POSITION;


/// Calculates the secant intersection point for the line
/// connecting `(a, fa)` and `(b, fb)`
///
/// # Returns
/// ├ `Some(x)` for a nonzero denominator `fb - fa`
/// └ `None`    if `fb == fa`, which on a valid bracket means both are zero
#[inline]
fn calculate_secant_x_intercept(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
) -> Option<f64> {
    let denom = fb - fa;
    if denom == 0.0 {
        return None;
    }

    Some(a - fa * (b - a) / denom)
}


/// Finds a root of a function using the
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi)
/// (pure regula falsi, no Illinois-type correction).
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
/// ├ `root`                : last secant intercept, `|f(root)| <= tol`
/// ├ `iterations`          : number of endpoint replacements
/// └ `tolerance_satisfied` : always [`ToleranceSatisfied::AbsFxReached`]
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidBracket`]        - `f(a) * f(b) > 0`.
/// ├ [`RootFindingError::ZeroDenominator`]       - `f(b) == f(a)` when forming the
/// │                                               intercept (both ends exact roots).
/// ├ [`RootFindingError::MaxIterationsExceeded`] - `max_iter` replacements without convergence.
/// └ [`RootFindingError::Evaluation`]            - `func` failed at some point.
///
/// # Notes
///
/// ├ Convergence is judged on `|f(x)|` only, never on the bracket width.
/// ├ Endpoint replacement uses the same strict `f(a) * f(x) < 0` test as
/// │ [`bisection`](super::bisection::bisection).
/// └ One endpoint may stay fixed for many iterations on convex or concave
///   functions; convergence is then linear and may exhaust `max_iter`.
pub fn false_position<F>(
    func: &F,
    mut a: f64,
    mut b: f64,
    cfg: SolverCfg,
) -> Result<RootReport, RootFindingError>
where F: Function + ?Sized {

    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    let mut fa = func.evaluate(a)?;
    let mut fb = func.evaluate(b)?;
    if !brackets_root(fa, fb) {
        debug!("{ALGORITHM}: no sign change on [{a}, {b}]");
        return Err(RootFindingError::InvalidBracket { a, b, fa, fb });
    }

    debug!("{ALGORITHM}: start on [{a}, {b}], tol={tol}, max_iter={max_iter}");

    let mut n  = 0;
    let mut x  = calculate_secant_x_intercept((a, fa), (b, fb))
        .ok_or(RootFindingError::ZeroDenominator { algorithm: ALGORITHM, x: a, iteration: n })?;
    let mut fx = func.evaluate(x)?;

    while fx.abs() > tol && n < max_iter {
        trace!("{ALGORITHM}: n={n} a={a} b={b} x={x} f(x)={fx}");

        if root_in_left(fa, fx) {
            b  = x;
            fb = fx;
        } else {
            a  = x;
            fa = fx;
        }

        x  = calculate_secant_x_intercept((a, fa), (b, fb))
            .ok_or(RootFindingError::ZeroDenominator { algorithm: ALGORITHM, x: a, iteration: n })?;
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
