//! Sliding-window composition statistics.
//!
//! A window of `W` symbols slides over the sequence in steps of `S`. For every
//! window fully contained in the sequence it reports:
//! - the window midpoint `i + W / 2` (floor division)
//! - `(G + T) / W`
//! - `G / T`, or `0` when the window holds no `T`
//!
//! Counting is case-sensitive: only uppercase `G` and `T` are tracked.

use crate::model::{StatsRow, StatsTable, WindowParams};

/// G and T counts of a single window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GtCounts {
    pub g: usize,
    pub t: usize,
}

impl GtCounts {
    /// Counts `G` and `T` in one pass.
    pub fn of(window: &[u8]) -> Self {
        let mut counts = Self::default();
        for &b in window {
            match b {
                b'G' => counts.g += 1,
                b'T' => counts.t += 1,
                _ => {}
            }
        }
        counts
    }

    /// Fraction of the window made of G or T.
    pub fn gt_fraction(&self, window_size: usize) -> f64 {
        (self.g + self.t) as f64 / window_size as f64
    }

    /// G/T ratio, defined as 0 when there is no T.
    pub fn g_t_ratio(&self) -> f64 {
        if self.t > 0 {
            self.g as f64 / self.t as f64
        } else {
            0.0
        }
    }
}

/// Number of windows that fit in a sequence of length `len`.
pub fn window_count(len: usize, params: WindowParams) -> usize {
    if len < params.window() {
        0
    } else {
        (len - params.window()) / params.step() + 1
    }
}

/// Computes statistics for every complete window of `sequence`.
///
/// Positions are local to `sequence` (0-based); use
/// [`StatsTable::offset_positions`] to map them back after subsetting.
/// A sequence shorter than the window yields an empty table.
pub fn compute(sequence: &[u8], params: WindowParams) -> StatsTable {
    let window_size = params.window();
    let mut table = StatsTable::with_capacity(window_count(sequence.len(), params));

    for (start, window) in sequence
        .windows(window_size)
        .enumerate()
        .step_by(params.step())
    {
        let counts = GtCounts::of(window);
        table.push(StatsRow {
            position: start + window_size / 2,
            gt_fraction: counts.gt_fraction(window_size),
            g_t_ratio: counts.g_t_ratio(),
        });
    }

    table
}
