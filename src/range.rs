//! Coordinate subrange selection.
//!
//! Users give 1-based `--start`/`--end` positions. Internally the range is the
//! half-open 0-based interval `[start - 1, end)`, so both bounds are included
//! from the user's point of view. The start must lie strictly before the end
//! in the user's coordinates, so a range always spans at least two symbols.

use thiserror::Error;

/// Errors raised when a requested subrange does not fit the sequence.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RangeError {
    #[error("Start position ({0}) must be positive")]
    StartNotPositive(i64),

    #[error("End position ({end}) exceeds sequence length ({len})")]
    EndBeyondSequence { end: i64, len: usize },

    #[error("Start position ({start}) must be less than end position ({end})")]
    StartNotBeforeEnd { start: i64, end: i64 },
}

/// A validated 0-based half-open interval over a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqRange {
    start: usize,
    end: usize,
}

impl SeqRange {
    /// Resolves optional 1-based bounds against a sequence of `len` symbols.
    ///
    /// A missing start means the first symbol, a missing end the last one.
    /// Checks run in order: start >= 1, end <= len, start < end (1-based).
    pub fn select(len: usize, start: Option<i64>, end: Option<i64>) -> Result<Self, RangeError> {
        // Widened so that any i64 bound can be shifted without overflow.
        let start0 = start.map_or(0, |s| i128::from(s) - 1);
        let end0 = end.map_or(len as i128, i128::from);

        if start0 < 0 {
            return Err(RangeError::StartNotPositive(start.unwrap_or_default()));
        }
        if end0 > len as i128 {
            return Err(RangeError::EndBeyondSequence { end: end0 as i64, len });
        }
        if start0 + 1 >= end0 {
            return Err(RangeError::StartNotBeforeEnd {
                start: (start0 + 1) as i64,
                end: end0 as i64,
            });
        }

        Ok(Self {
            start: start0 as usize,
            end: end0 as usize,
        })
    }

    /// The whole of a sequence of `len` symbols.
    pub fn full(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    /// 0-based start, i.e. the offset to add back to local positions.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Effective 1-based start.
    pub fn display_start(&self) -> usize {
        self.start + 1
    }

    /// Effective 1-based inclusive end.
    pub fn display_end(&self) -> usize {
        self.end
    }

    /// Returns the selected part of `sequence`.
    ///
    /// The range must have been selected against a sequence of this length.
    pub fn apply<'a>(&self, sequence: &'a [u8]) -> &'a [u8] {
        &sequence[self.start..self.end]
    }
}
