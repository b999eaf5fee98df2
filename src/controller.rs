//! Analysis controller.
//!
//! This module orchestrates one run of the pipeline:
//! - Parameter and input validation
//! - Sequence loading and range selection
//! - Window statistics
//! - Writing the CSV table and the plot
//!
//! Every validation step runs before any output file is touched.

use std::path::PathBuf;

use log::info;
use thiserror::Error;

use crate::formats::{self, LoadError};
use crate::model::{ParamsError, Sequence, StatsTable, WindowParams};
use crate::range::{RangeError, SeqRange};
use crate::report::plot::PlotStyle;
use crate::report::{self, OutputPaths, ReportError};
use crate::window;

/// Errors that abort an analysis run.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Settings for one run, independent of how they were collected.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub file: PathBuf,
    pub window: usize,
    pub step: usize,
    /// 1-based first position, inclusive
    pub start: Option<i64>,
    /// 1-based last position, inclusive
    pub end: Option<i64>,
    /// Output directory; `None` writes next to the working directory
    pub out_dir: Option<PathBuf>,
    pub plot_style: PlotStyle,
}

impl AnalysisConfig {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            window: WindowParams::DEFAULT_WINDOW,
            step: WindowParams::DEFAULT_STEP,
            start: None,
            end: None,
            out_dir: None,
            plot_style: PlotStyle::default(),
        }
    }
}

/// Statistics of a run together with where they will be written.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub params: WindowParams,
    pub range: SeqRange,
    /// Positions are in original (full sequence) coordinates
    pub table: StatsTable,
    pub outputs: OutputPaths,
}

/// Computes statistics for `sequence` restricted to `range`.
pub fn analyze_sequence(sequence: &Sequence, params: WindowParams, range: SeqRange) -> StatsTable {
    let mut table = window::compute(range.apply(sequence.as_bytes()), params);
    table.offset_positions(range.start());
    table
}

/// Validates the configuration, loads the input and computes statistics.
///
/// Nothing is written to disk.
pub fn analyze(config: &AnalysisConfig) -> Result<Analysis, AnalysisError> {
    if !config.file.exists() {
        return Err(LoadError::NotFound(config.file.display().to_string()).into());
    }
    let params = WindowParams::new(config.window, config.step)?;

    let sequence = formats::read_sequence_file(&config.file)?;
    let range = SeqRange::select(sequence.len(), config.start, config.end)?;
    info!(
        "Analysing positions {}-{} with window {} and step {}",
        range.display_start(),
        range.display_end(),
        params.window(),
        params.step()
    );

    let table = analyze_sequence(&sequence, params, range);
    info!("Computed {} windows", table.len());

    Ok(Analysis {
        params,
        range,
        table,
        outputs: OutputPaths::new(config.out_dir.as_deref(), params, range),
    })
}

/// Runs the full pipeline and returns the paths of the written files.
pub fn run_analysis(config: &AnalysisConfig) -> Result<OutputPaths, AnalysisError> {
    let analysis = analyze(config)?;
    report::write_report(&analysis.outputs, &analysis.table, &config.plot_style)?;
    Ok(analysis.outputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subrange_positions_are_offset() {
        let sequence = Sequence::from_bytes("AGGTTGTAGC");
        let params = WindowParams::new(3, 1).unwrap();
        let range = SeqRange::select(sequence.len(), Some(3), Some(7)).unwrap();

        let offset = analyze_sequence(&sequence, params, range);
        let local = window::compute(b"GTTGT", params);

        assert_eq!(offset.len(), local.len());
        for (shifted, raw) in offset.positions.iter().zip(&local.positions) {
            assert_eq!(*shifted, raw + 2);
        }
        assert_eq!(offset.gt_fractions, local.gt_fractions);
        assert_eq!(offset.g_t_ratios, local.g_t_ratios);
    }

    #[test]
    fn test_missing_file_checked_first() {
        let mut config = AnalysisConfig::new("/nonexistent/path/chr.fa");
        config.window = 20;
        config.step = 30;
        let err = analyze(&config).unwrap_err();
        assert!(matches!(err, AnalysisError::Load(LoadError::NotFound(_))));
    }

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::new("chr.fa");
        assert_eq!(config.window, 100);
        assert_eq!(config.step, 25);
        assert!(config.out_dir.is_none());
        assert!(config.start.is_none() && config.end.is_none());
    }
}
