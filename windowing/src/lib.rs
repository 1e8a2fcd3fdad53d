//! Sliding-window sample construction for one-step-ahead forecasting.
//!
//! A series of `N` observations becomes `N - window` samples, each pairing
//! `window` consecutive observations with the observation that follows them.

use ndarray::{s, Array2, Array3, ArrayView1, ArrayView2};

/// Number of past observations per sample when the caller does not choose one.
pub const DEFAULT_WINDOW: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("window length must be positive")]
    ZeroWindow,
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}

/// Windowed dataset: inputs of shape `(n, window, 1)` and targets of shape `(n, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    inputs: Array3<f32>,
    targets: Array2<f32>,
}

/// Borrowed view of one sample.
#[derive(Debug, Clone, Copy)]
pub struct Sample<'a> {
    pub input: ArrayView2<'a, f32>,
    pub target: ArrayView1<'a, f32>,
}

impl SampleSet {
    /// Wraps arrays built elsewhere after checking they have the windowed layout.
    pub fn from_arrays(inputs: Array3<f32>, targets: Array2<f32>) -> Result<Self, WindowError> {
        let (n, window, features) = inputs.dim();
        let (targets_n, target_width) = targets.dim();
        if features != 1 {
            return Err(WindowError::ShapeMismatch(format!(
                "inputs must have one feature per step, got {features}"
            )));
        }
        if target_width != 1 {
            return Err(WindowError::ShapeMismatch(format!(
                "targets must have one value per sample, got {target_width}"
            )));
        }
        if n != targets_n {
            return Err(WindowError::ShapeMismatch(format!(
                "{n} input windows but {targets_n} targets"
            )));
        }
        if window == 0 {
            return Err(WindowError::ZeroWindow);
        }
        Ok(Self { inputs, targets })
    }

    pub fn len(&self) -> usize {
        self.inputs.dim().0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Steps per input window (`T`).
    pub fn window(&self) -> usize {
        self.inputs.dim().1
    }

    pub fn inputs(&self) -> &Array3<f32> {
        &self.inputs
    }

    pub fn targets(&self) -> &Array2<f32> {
        &self.targets
    }

    pub fn sample(&self, index: usize) -> Option<Sample<'_>> {
        if index >= self.len() {
            return None;
        }
        Some(Sample {
            input: self.inputs.slice(s![index, .., ..]),
            target: self.targets.slice(s![index, ..]),
        })
    }

    /// Input value of sample `index` at step `step`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()` or `step >= self.window()`; use
    /// [`SampleSet::sample`] for a checked lookup.
    pub fn input_at(&self, index: usize, step: usize) -> f32 {
        self.inputs[[index, step, 0]]
    }

    /// Target value of sample `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn target_at(&self, index: usize) -> f32 {
        self.targets[[index, 0]]
    }

    pub fn into_arrays(self) -> (Array3<f32>, Array2<f32>) {
        (self.inputs, self.targets)
    }
}

/// Builds one sample per start index `s` in `0..N - window`: the input is
/// `series[s..s + window]` and the target is `series[s + window]`.
///
/// A series no longer than `window` yields an empty set rather than an error.
pub fn make_samples(series: &[f64], window: usize) -> Result<SampleSet, WindowError> {
    if window == 0 {
        return Err(WindowError::ZeroWindow);
    }
    Ok(build_samples(series, window))
}

pub fn make_default_samples(series: &[f64]) -> SampleSet {
    build_samples(series, DEFAULT_WINDOW)
}

// Caller guarantees `window > 0`.
fn build_samples(series: &[f64], window: usize) -> SampleSet {
    let count = series.len().saturating_sub(window);
    let mut inputs = Array3::zeros((count, window, 1));
    let mut targets = Array2::zeros((count, 1));

    for start in 0..count {
        for step in 0..window {
            inputs[[start, step, 0]] = series[start + step] as f32;
        }
        targets[[start, 0]] = series[start + window] as f32;
    }

    log::debug!(
        "windowed {} observations into {count} samples (window = {window})",
        series.len()
    );
    SampleSet { inputs, targets }
}
