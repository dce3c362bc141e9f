//! Evenly spaced samples of a [`Function`] for plotting.
//!
//! Points where the function cannot be evaluated come back as `y = NaN`, so
//! a renderer can break the curve there instead of aborting the plot.

use log::{debug, trace};

use super::function::Function;


/// One `(x, f(x))` point; `y` is NaN where evaluation failed.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// Sampling window `[center - half_width, center + half_width]`.
///
/// The sign of `half_width` is ignored. A window with a non-finite `center`
/// or `half_width` samples nothing.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleWindow {
    pub center: f64,
    pub half_width: f64,
    pub points: usize,
}

impl SampleWindow {
    pub const DEFAULT_HALF_WIDTH: f64 = 10.0;
    pub const DEFAULT_POINTS: usize   = 400;

    /// Default-sized window centered on the mean of the finite values in `xs`
    /// (bracket ends, guesses, a root). Falls back to `0.0` if there are none.
    pub fn around(xs: &[f64]) -> Self {
        let finite: Vec<f64> = xs.iter().copied().filter(|x| x.is_finite()).collect();
        let center = if finite.is_empty() {
            0.0
        } else {
            finite.iter().sum::<f64>() / finite.len() as f64
        };

        Self { center, ..Self::default() }
    }

    pub fn lo(&self) -> f64 { self.center - self.half_width.abs() }
    pub fn hi(&self) -> f64 { self.center + self.half_width.abs() }

    fn is_finite(&self) -> bool {
        self.center.is_finite() && self.half_width.is_finite()
    }
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self {
            center: 0.0,
            half_width: Self::DEFAULT_HALF_WIDTH,
            points: Self::DEFAULT_POINTS,
        }
    }
}


/// Evaluates `func` at `window.points` evenly spaced points, both ends included.
///
/// A single point samples `window.center`; zero points or a non-finite
/// window give an empty vector.
pub fn sample<F>(func: &F, window: SampleWindow) -> Vec<Sample>
where F: Function + ?Sized {
    if !window.is_finite() {
        debug!("sample: non-finite window {window:?}");
        return Vec::new();
    }
    let (lo, hi) = (window.lo(), window.hi());

    let xs: Vec<f64> = match window.points {
        0 => Vec::new(),
        1 => vec![window.center],
        n => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n).map(|i| if i == n - 1 { hi } else { lo + step * i as f64 }).collect()
        }
    };

    xs.into_iter()
        .map(|x| {
            let y = func.evaluate(x).unwrap_or_else(|err| {
                trace!("sample: {err}");
                f64::NAN
            });
            Sample { x, y }
        })
        .collect()
}
