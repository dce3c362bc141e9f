//! Function handles consumed by the solvers.
//!
//! [`Function`] is the only capability a solver needs from the caller:
//! evaluate at a point, or report why that was impossible.
//!
//! ┌ `Fn(f64) -> f64`  : implemented directly, non-finite results are errors
//! ├ [`Fallible`]      : wraps `Fn(f64) -> Result<f64, E>` for evaluators with
//! │                     their own domain errors; also usable by reference
//! └ [`Objective`]     : f together with optional f' and f'', as handed over
//!                       by an expression front end

use std::error::Error as StdError;

use super::errors::EvaluationError;


/// A unary numeric mapping `f64 -> f64` that may fail at some points.
///
/// Implementations must be pure: the same `x` always gives the same result.
pub trait Function {
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError>;
}

#[inline]
fn finite(x: f64, fx: f64) -> Result<f64, EvaluationError> {
    if fx.is_finite() {
        Ok(fx)
    } else {
        Err(EvaluationError::NonFinite { x, fx })
    }
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        finite(x, self(x))
    }
}


/// Adapter for evaluators that report their own errors.
///
/// ```
/// use fxroot::{Fallible, Function};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("log of non-positive value")]
/// struct Domain;
///
/// let ln = Fallible(|x: f64| if x > 0.0 { Ok(x.ln()) } else { Err(Domain) });
/// assert!(ln.evaluate(1.0).is_ok());
/// assert!(ln.evaluate(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Function for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        let fx = (self.0)(x).map_err(|e| EvaluationError::Failed { x, source: Box::new(e) })?;
        finite(x, fx)
    }
}

// borrowed closures are covered by the `Fn` blanket impl
impl<F, E> Function for &Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        (**self).evaluate(x)
    }
}


/// A function with its optional first and second derivatives.
///
/// # Construction
/// ```
/// use fxroot::Objective;
///
/// let objective = Objective::new(|x: f64| x * x - 2.0)
///     .with_derivative(|x: f64| 2.0 * x)
///     .with_second_derivative(|_x: f64| 2.0);
/// assert!(objective.second_derivative().is_some());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Objective<F, D = fn(f64) -> f64, DD = fn(f64) -> f64> {
    f:   F,
    df:  Option<D>,
    ddf: Option<DD>,
}

impl<F> Objective<F> {
    pub fn new(f: F) -> Self {
        Self { f, df: None, ddf: None }
    }
}

impl<F, D, DD> Objective<F, D, DD> {
    pub fn with_derivative<D2>(self, df: D2) -> Objective<F, D2, DD> {
        Objective { f: self.f, df: Some(df), ddf: self.ddf }
    }

    pub fn with_second_derivative<DD2>(self, ddf: DD2) -> Objective<F, D, DD2> {
        Objective { f: self.f, df: self.df, ddf: Some(ddf) }
    }

    #[inline] pub fn function(&self)          -> &F         { &self.f }
    #[inline] pub fn derivative(&self)        -> Option<&D>  { self.df.as_ref() }
    #[inline] pub fn second_derivative(&self) -> Option<&DD> { self.ddf.as_ref() }
}
