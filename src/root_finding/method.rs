//! Runtime method selection.
//!
//! [`Method`] pairs an [`Algorithm`] with its numeric inputs, and [`solve`]
//! runs it against an [`Objective`]. [`Method::parse`] validates the raw text
//! an input form collects for each method.

use log::debug;

use super::algorithms::{Algorithm, BracketFamily, OpenFamily};
use super::bisection::bisection;
use super::config::SolverCfg;
use super::errors::{InputError, RootFindingError};
use super::false_position::false_position;
use super::function::{Function, Objective};
use super::modified_newton::modified_newton;
use super::newton::newton;
use super::report::RootReport;
use super::secant::secant;


/// A root-finding method with its starting values.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    Bisection      { a: f64, b: f64 },
    FalsePosition  { a: f64, b: f64 },
    Newton         { x0: f64 },
    ModifiedNewton { x0: f64 },
    Secant         { x0: f64, x1: f64 },
}

impl Method {
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Method::Bisection { .. }      => Algorithm::BISECTION,
            Method::FalsePosition { .. }  => Algorithm::FALSE_POSITION,
            Method::Newton { .. }         => Algorithm::NEWTON,
            Method::ModifiedNewton { .. } => Algorithm::MODIFIED_NEWTON,
            Method::Secant { .. }         => Algorithm::SECANT,
        }
    }

    /// Starting values: bracket ends or initial guesses.
    pub fn inputs(&self) -> Vec<f64> {
        match *self {
            Method::Bisection { a, b } | Method::FalsePosition { a, b } => vec![a, b],
            Method::Newton { x0 } | Method::ModifiedNewton { x0 }       => vec![x0],
            Method::Secant { x0, x1 }                                   => vec![x0, x1],
        }
    }

    /// Builds a method from the text of its input fields.
    ///
    /// # Arguments
    /// - `algorithm` : selected method
    /// - `fields`    : `[a, b]` for bracket methods, `[x0]` for Newton and
    ///                 modified Newton, `[x0, x1]` for secant
    ///
    /// # Errors
    /// - [`InputError::WrongInputCount`] : field count does not match `algorithm`
    /// - [`InputError::NotANumber`]      : a field is blank, unparsable or non-finite
    /// - [`InputError::InvalidBounds`]   : bracket with `b <= a`
    pub fn parse(algorithm: Algorithm, fields: &[&str]) -> Result<Self, InputError> {
        let expected = algorithm.input_count();
        if fields.len() != expected {
            return Err(InputError::WrongInputCount { algorithm, expected, got: fields.len() });
        }

        let names: &[&'static str] = if algorithm.is_bracketing() { &["a", "b"] } else { &["x0", "x1"] };
        let values = fields
            .iter()
            .zip(names)
            .map(|(text, &field)| parse_finite(field, text))
            .collect::<Result<Vec<_>, _>>()?;

        let method = match algorithm {
            Algorithm::Bracket(family) => {
                let (a, b) = (values[0], values[1]);
                if b <= a {
                    return Err(InputError::InvalidBounds { a, b });
                }
                match family {
                    BracketFamily::Bisection     => Method::Bisection { a, b },
                    BracketFamily::FalsePosition => Method::FalsePosition { a, b },
                }
            }
            Algorithm::Open(OpenFamily::Newton)         => Method::Newton { x0: values[0] },
            Algorithm::Open(OpenFamily::ModifiedNewton) => Method::ModifiedNewton { x0: values[0] },
            Algorithm::Open(OpenFamily::Secant)         => Method::Secant { x0: values[0], x1: values[1] },
        };

        Ok(method)
    }
}

fn parse_finite(field: &'static str, text: &str) -> Result<f64, InputError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::NotANumber { field, text: text.to_string() })
}


/// Runs `method` on `objective`.
///
/// Derivatives are only looked up for the methods that use them, so an
/// [`Objective`] without derivatives is enough for bracketing methods and
/// secant.
///
/// # Errors
/// - [`RootFindingError::MissingDerivative`] : Newton without `f'`, or
///   modified Newton without `f'` or `f''`
/// - everything the selected solver returns
pub fn solve<F, D, DD>(
    method: &Method,
    objective: &Objective<F, D, DD>,
    cfg: SolverCfg,
) -> Result<RootReport, RootFindingError>
where
    F: Function,
    D: Function,
    DD: Function,
{
    let algorithm = method.algorithm();
    debug!("solve: {algorithm} with inputs {:?}", method.inputs());

    let f = objective.function();
    let df = || {
        objective
            .derivative()
            .ok_or(RootFindingError::MissingDerivative { algorithm, order: 1 })
    };
    let ddf = || {
        objective
            .second_derivative()
            .ok_or(RootFindingError::MissingDerivative { algorithm, order: 2 })
    };

    match *method {
        Method::Bisection { a, b }     => bisection(f, a, b, cfg),
        Method::FalsePosition { a, b } => false_position(f, a, b, cfg),
        Method::Newton { x0 }          => newton(f, df()?, x0, cfg),
        Method::ModifiedNewton { x0 }  => modified_newton(f, df()?, ddf()?, x0, cfg),
        Method::Secant { x0, x1 }      => secant(f, x0, x1, cfg),
    }
}
