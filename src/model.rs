//! Data model for the composition analysis.
//!
//! This module contains the data structures passed between pipeline stages:
//! - The flattened input sequence
//! - Validated window/step parameters
//! - The per-window statistics table

use thiserror::Error;

/// A single flattened nucleotide sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    data: Vec<u8>,
}

impl Sequence {
    /// Creates a sequence from raw bytes.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Returns the length of the sequence.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Errors raised when window parameters are inconsistent.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParamsError {
    #[error("Window size must be at least 1")]
    ZeroWindow,

    #[error("Step size must be at least 1")]
    ZeroStep,

    #[error("Step size ({step}) cannot exceed window size ({window})")]
    StepExceedsWindow { step: usize, window: usize },
}

/// Window and step sizes, with `1 <= step <= window` guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowParams {
    window: usize,
    step: usize,
}

impl WindowParams {
    pub const DEFAULT_WINDOW: usize = 100;
    pub const DEFAULT_STEP: usize = 25;

    /// Validates and creates window parameters.
    pub fn new(window: usize, step: usize) -> Result<Self, ParamsError> {
        if step > window {
            return Err(ParamsError::StepExceedsWindow { step, window });
        }
        if window == 0 {
            return Err(ParamsError::ZeroWindow);
        }
        if step == 0 {
            return Err(ParamsError::ZeroStep);
        }
        Ok(Self { window, step })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn step(&self) -> usize {
        self.step
    }
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            window: Self::DEFAULT_WINDOW,
            step: Self::DEFAULT_STEP,
        }
    }
}

/// One window's statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsRow {
    /// Window midpoint (0-based, in original sequence coordinates once offset)
    pub position: usize,
    /// (G + T) / window size
    pub gt_fraction: f64,
    /// G / T, or 0 when the window holds no T
    pub g_t_ratio: f64,
}

/// Position-aligned statistics for all windows, in increasing position order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatsTable {
    pub positions: Vec<usize>,
    pub gt_fractions: Vec<f64>,
    pub g_t_ratios: Vec<f64>,
}

impl StatsTable {
    /// Creates an empty table with room for `capacity` rows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            gt_fractions: Vec::with_capacity(capacity),
            g_t_ratios: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: StatsRow) {
        self.positions.push(row.position);
        self.gt_fractions.push(row.gt_fraction);
        self.g_t_ratios.push(row.g_t_ratio);
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if no window was produced.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates over rows in position order.
    pub fn rows(&self) -> impl Iterator<Item = StatsRow> + '_ {
        self.positions
            .iter()
            .zip(&self.gt_fractions)
            .zip(&self.g_t_ratios)
            .map(|((&position, &gt_fraction), &g_t_ratio)| StatsRow {
                position,
                gt_fraction,
                g_t_ratio,
            })
    }

    /// Shifts every position by `offset`, mapping subsequence-local
    /// coordinates back onto the full sequence.
    pub fn offset_positions(&mut self, offset: usize) {
        for pos in &mut self.positions {
            *pos += offset;
        }
    }
}
