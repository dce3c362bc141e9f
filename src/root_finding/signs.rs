//! Sign utilities for bracketing algorithms.
//! - `brackets_root` : `true` if `[a, b]` brackets a root, `f(a) * f(b) <= 0`
//! - `root_in_left`  : `true` if the root lies in `[a, x]`, `f(a) * f(x) < 0`
//!
//! Both work on the product, so an exact zero on either side counts as a
//! valid bracket but never selects the left half.

/// Returns `true` if `fa` and `fb` have opposite signs or either is zero.
#[inline]
pub(crate) fn brackets_root(fa: f64, fb: f64) -> bool {
    fa * fb <= 0.0
}


/// Returns `true` if `fa` and `fx` have strictly opposite signs.
#[inline]
pub(crate) fn root_in_left(fa: f64, fx: f64) -> bool {
    fa * fx < 0.0
}
