//! Scalar root-finding.
//!
//! Five independent solvers over a caller-supplied [`Function`] handle:
//!
//! ┌ [`bisection`]       : bracket, converges on width or residual
//! ├ [`false_position`]  : bracket, converges on residual
//! ├ [`newton`]          : one guess + f', converges on residual
//! ├ [`modified_newton`] : one guess + f' + f'', converges on residual
//! └ [`secant`]          : two guesses, converges on step size
//!
//! [`solve`] dispatches a [`Method`] over an [`Objective`] for callers that
//! pick the method at runtime.
//!
//! [`Function`]: root_finding::function::Function
//! [`Objective`]: root_finding::function::Objective
//! [`Method`]: root_finding::method::Method
//! [`bisection`]: root_finding::bisection::bisection
//! [`false_position`]: root_finding::false_position::false_position
//! [`newton`]: root_finding::newton::newton
//! [`modified_newton`]: root_finding::modified_newton::modified_newton
//! [`secant`]: root_finding::secant::secant
//! [`solve`]: root_finding::method::solve

pub mod root_finding;

pub use root_finding::algorithms::Algorithm;
pub use root_finding::bisection::bisection;
pub use root_finding::config::SolverCfg;
pub use root_finding::errors::{ConfigError, EvaluationError, InputError, RootFindingError};
pub use root_finding::false_position::false_position;
pub use root_finding::function::{Fallible, Function, Objective};
pub use root_finding::method::{solve, Method};
pub use root_finding::modified_newton::modified_newton;
pub use root_finding::newton::newton;
pub use root_finding::report::{RootReport, ToleranceSatisfied};
pub use root_finding::sampling::{sample, Sample, SampleWindow};
pub use root_finding::secant::secant;
