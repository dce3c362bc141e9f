// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod function;
pub mod report;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod false_position;
pub mod newton;
pub mod modified_newton;
pub mod secant;

// dispatch and plotting support
pub mod method;
pub mod sampling;
