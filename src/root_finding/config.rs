//! Shared configuration for root-finding algorithms.
//!
//! [`SolverCfg`] : fields shared by every solver
//! ├ `tol`      : convergence tolerance, compared against the residual,
//! │              the bracket width or the step size depending on the method
//! └ `max_iter` : iteration cap
//!
//! Values are validated once, when set. Solvers trust the config they get.
//! [`SolverCfg::from_fields`] is the entry point for text input where a blank
//! field means "use the default".

use super::errors::ConfigError;


#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolverCfg {
    tol: f64,
    max_iter: usize,
}

impl SolverCfg {
    pub const DEFAULT_TOL: f64        = 1e-5;
    pub const DEFAULT_MAX_ITER: usize = 100;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    // getters
    #[inline] #[must_use] pub fn tol(&self)      -> f64   { self.tol }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter }

    // setters
    pub fn set_tol(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidTolerance { got: v });
        }
        self.tol = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }

    /// Builds a config from the optional text fields of an input form.
    ///
    /// # Arguments
    /// - `tol`      : e.g. `"1e-8"`; blank uses [`SolverCfg::DEFAULT_TOL`]
    /// - `max_iter` : e.g. `"250"`; blank uses [`SolverCfg::DEFAULT_MAX_ITER`]
    ///
    /// # Errors
    /// - [`ConfigError::Unparsable`]       : field is not a number
    /// - [`ConfigError::InvalidTolerance`] : `tol` <= 0 or non-finite
    /// - [`ConfigError::InvalidMaxIter`]   : `max_iter` == 0
    pub fn from_fields(tol: &str, max_iter: &str) -> Result<Self, ConfigError> {
        let mut cfg = Self::new();

        let tol = tol.trim();
        if !tol.is_empty() {
            let v = tol.parse::<f64>().map_err(|_| ConfigError::Unparsable {
                field: "tolerance",
                text: tol.to_string(),
            })?;
            cfg = cfg.set_tol(v)?;
        }

        let max_iter = max_iter.trim();
        if !max_iter.is_empty() {
            let v = max_iter.parse::<usize>().map_err(|_| ConfigError::Unparsable {
                field: "max_iter",
                text: max_iter.to_string(),
            })?;
            cfg = cfg.set_max_iter(v)?;
        }

        Ok(cfg)
    }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            tol:      Self::DEFAULT_TOL,
            max_iter: Self::DEFAULT_MAX_ITER,
        }
    }
}
