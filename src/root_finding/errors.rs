//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : solver failures, returned by every algorithm
//! │   ├ precondition failures (bracket, derivative, guesses)
//! │   ├ update failures (zero denominator, divergence)
//! │   ├ iteration budget exhausted
//! │   └ function evaluation failures ([`EvaluationError`])
//! │
//! ├ [`EvaluationError`]  : a function handle could not produce a value at `x`
//! │
//! ├ [`ConfigError`]      : invalid `tol` / `max_iter`
//! │
//! └ [`InputError`]       : invalid method selection or method inputs
//!
//! Every variant is recoverable: callers show the message and let the user
//! adjust the bracket, guesses, tolerance or iteration budget.

use std::error::Error as StdError;

use thiserror::Error;

use super::algorithms::Algorithm;


/// Root-finding runtime errors.
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error(
        "the function does not change sign within [{a}, {b}]: f(a)={fa}, f(b)={fb}; \
         adjust the interval"
    )]
    InvalidBracket { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("derivative is zero at the initial guess x0={x0}; adjust the initial guess")]
    ZeroDerivative { x0: f64 },

    #[error(
        "{algorithm}: update denominator became zero at x={x} (iteration {iteration}); \
         adjust the initial guess or use another method"
    )]
    ZeroDenominator { algorithm: Algorithm, x: f64, iteration: usize },

    #[error(
        "function values of the two guesses are the same (f({x0}) = f({x1}) = {fx}), \
         causing division by zero"
    )]
    DegenerateGuesses { x0: f64, x1: f64, fx: f64 },

    #[error(
        "{algorithm}: exceeded maximum iterations ({max_iter}); adjust the initial \
         values, tolerance, or try another method"
    )]
    MaxIterationsExceeded { algorithm: Algorithm, max_iter: usize },

    #[error("{algorithm}: iterate diverged to x={x} at iteration {iteration}")]
    Diverged { algorithm: Algorithm, x: f64, iteration: usize },

    #[error("{algorithm} needs derivative of order {order}, none was supplied")]
    MissingDerivative { algorithm: Algorithm, order: usize },

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}


/// Failure of a single function-handle evaluation.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFinite { x: f64, fx: f64 },

    #[error("function evaluation failed at x={x}")]
    Failed {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl EvaluationError {
    /// Point at which the evaluation failed.
    pub fn x(&self) -> f64 {
        match self {
            EvaluationError::NonFinite { x, .. } | EvaluationError::Failed { x, .. } => *x,
        }
    }
}


/// Convergence parameter errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid {field}: could not parse {text:?}")]
    Unparsable { field: &'static str, text: String },
}


/// Method selection and method input errors.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("unknown root-finding method {name:?}")]
    UnknownAlgorithm { name: String },

    #[error("{algorithm} takes {expected} input(s), got {got}")]
    WrongInputCount { algorithm: Algorithm, expected: usize, got: usize },

    #[error("invalid {field}: {text:?} is not a finite number")]
    NotANumber { field: &'static str, text: String },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}
