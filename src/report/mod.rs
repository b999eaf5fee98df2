//! Output of analysis results.
//!
//! Both outputs share a file stem encoding the run parameters, so re-running
//! with the same parameters overwrites the previous results:
//!
//! ```text
//! window100-step25-pos1-439888.csv
//! window100-step25-pos1-439888.png
//! ```

pub mod csv;
pub mod plot;

use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::model::{StatsTable, WindowParams};
use crate::range::SeqRange;
use plot::PlotStyle;

/// Errors that can occur while writing results.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] ::csv::Error),

    #[error("Plot error: {0}")]
    Plot(String),
}

/// Result type for reporting operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// File stem shared by the CSV and plot outputs.
pub fn output_stem(params: WindowParams, range: SeqRange) -> String {
    format!(
        "window{}-step{}-pos{}-{}",
        params.window(),
        params.step(),
        range.display_start(),
        range.display_end()
    )
}

/// Paths of the files produced by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub csv: PathBuf,
    pub plot: PathBuf,
}

impl OutputPaths {
    /// Builds the output paths inside `dir`, or relative to the working
    /// directory when `dir` is `None`.
    pub fn new(dir: Option<&Path>, params: WindowParams, range: SeqRange) -> Self {
        let stem = output_stem(params, range);
        let dir = dir.unwrap_or(Path::new(""));
        Self {
            csv: dir.join(format!("{}.csv", stem)),
            plot: dir.join(format!("{}.png", stem)),
        }
    }
}

/// Writes the CSV table, then renders the plot.
pub fn write_report(paths: &OutputPaths, table: &StatsTable, style: &PlotStyle) -> ReportResult<()> {
    if table.is_empty() {
        warn!("No complete window fits in the selected range; writing empty results");
    }

    csv::write_table(&paths.csv, table)?;
    info!("Wrote {} rows to {}", table.len(), paths.csv.display());

    plot::render(&paths.plot, table, style)?;
    info!("Wrote plot to {}", paths.plot.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_stem() {
        let params = WindowParams::new(100, 25).unwrap();
        let range = SeqRange::select(439_888, None, None).unwrap();
        assert_eq!(output_stem(params, range), "window100-step25-pos1-439888");
    }

    #[test]
    fn test_output_stem_with_subrange() {
        let params = WindowParams::new(20, 5).unwrap();
        let range = SeqRange::select(1000, Some(101), Some(600)).unwrap();
        assert_eq!(output_stem(params, range), "window20-step5-pos101-600");
    }

    #[test]
    fn test_output_paths() {
        let params = WindowParams::new(4, 2).unwrap();
        let paths = OutputPaths::new(Some(Path::new("results")), params, SeqRange::full(8));
        assert_eq!(paths.csv, PathBuf::from("results/window4-step2-pos1-8.csv"));
        assert_eq!(paths.plot, PathBuf::from("results/window4-step2-pos1-8.png"));

        let paths = OutputPaths::new(None, params, SeqRange::full(8));
        assert_eq!(paths.csv, PathBuf::from("window4-step2-pos1-8.csv"));
    }
}
