//! Dual-axis composition plot.
//!
//! G+T fraction is drawn as black dots against the left axis, the G/T ratio
//! as red triangles against the right axis. Both axes span `[0, 1.8]`.

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;

use super::{ReportError, ReportResult};
use crate::model::StatsTable;

/// Fixed vertical range shared by both axes.
pub const Y_RANGE: Range<f64> = 0.0..1.8;

pub const X_LABEL: &str = "Position (midpoint of sliding window)";
pub const Y_LABEL: &str = "T+G / total # bases";
pub const Y2_LABEL: &str = "G/T";

/// Appearance of the rendered figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotStyle {
    pub title: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl PlotStyle {
    pub const DEFAULT_TITLE: &'static str = "Chromosome IX";

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Base font size, scaled with the image height.
    fn font_size(&self) -> u32 {
        (self.height / 45).max(10)
    }

    fn marker_size(&self) -> i32 {
        (self.height / 300).max(2) as i32
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        // 15 x 6 inches at 300 dpi
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            width: 4500,
            height: 1800,
        }
    }
}

/// Horizontal range covering all positions with a 5% margin on each side.
///
/// An empty table gets `[0, 1]`; a single position is padded by one unit.
pub fn x_range(positions: &[usize]) -> Range<f64> {
    let (Some(&min), Some(&max)) = (positions.iter().min(), positions.iter().max()) else {
        return 0.0..1.0;
    };
    let (min, max) = (min as f64, max as f64);
    let pad = if max > min { (max - min) * 0.05 } else { 1.0 };
    (min - pad)..(max + pad)
}

/// Renders the table as a PNG image at `path`.
pub fn render<P: AsRef<Path>>(path: P, table: &StatsTable, style: &PlotStyle) -> ReportResult<()> {
    draw(path.as_ref(), table, style).map_err(|e| ReportError::Plot(e.to_string()))
}

fn draw(path: &Path, table: &StatsTable, style: &PlotStyle) -> Result<(), Box<dyn Error>> {
    let font = style.font_size();
    let marker = style.marker_size();
    let x = x_range(&table.positions);

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&style.title, ("sans-serif", font * 3 / 2))
        .margin(font)
        .x_label_area_size(font * 3)
        .y_label_area_size(font * 4)
        .right_y_label_area_size(font * 4)
        .build_cartesian_2d(x.clone(), Y_RANGE)?
        .set_secondary_coord(x, Y_RANGE);

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .label_style(("sans-serif", font))
        .axis_desc_style(("sans-serif", font))
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc(Y2_LABEL)
        .label_style(("sans-serif", font).into_font().color(&RED))
        .axis_desc_style(("sans-serif", font).into_font().color(&RED))
        .draw()?;

    let gt_points: Vec<(f64, f64)> = table
        .positions
        .iter()
        .zip(&table.gt_fractions)
        .map(|(&pos, &value)| (pos as f64, value))
        .collect();
    let ratio_points: Vec<(f64, f64)> = table
        .positions
        .iter()
        .zip(&table.g_t_ratios)
        .map(|(&pos, &value)| (pos as f64, value))
        .collect();

    chart
        .draw_series(gt_points.into_iter().map(|p| Circle::new(p, marker, BLACK.filled())))?
        .label("G+T")
        .legend(move |(x, y)| Circle::new((x, y), marker, BLACK.filled()));

    chart
        .draw_secondary_series(
            ratio_points
                .into_iter()
                .map(|p| TriangleMarker::new(p, marker, RED.filled())),
        )?
        .label("G/T")
        .legend(move |(x, y)| TriangleMarker::new((x, y), marker, RED.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .label_font(("sans-serif", font))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_range_empty() {
        assert_eq!(x_range(&[]), 0.0..1.0);
    }

    #[test]
    fn test_x_range_single_position() {
        assert_eq!(x_range(&[50]), 49.0..51.0);
    }

    #[test]
    fn test_x_range_margin() {
        let range = x_range(&[100, 150, 300]);
        assert_eq!(range, 90.0..310.0);
    }

    fn assert_png_written(path: &Path) {
        let meta = std::fs::metadata(path).unwrap();
        assert!(meta.len() > 0, "{} is empty", path.display());
    }

    #[test]
    fn test_render_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("window4-step2-pos1-8.png");
        let table = StatsTable {
            positions: vec![2, 4, 6],
            gt_fractions: vec![1.0, 0.5, 0.5],
            g_t_ratios: vec![1.0, 0.0, 0.0],
        };
        let style = PlotStyle {
            title: "chrIX".to_string(),
            width: 900,
            height: 360,
        };

        render(&path, &table, &style).unwrap();
        assert_png_written(&path);
    }

    #[test]
    fn test_render_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");

        render(&path, &StatsTable::default(), &PlotStyle::default()).unwrap();
        assert_png_written(&path);
    }

    #[test]
    fn test_default_style() {
        let style = PlotStyle::default();
        assert_eq!(style.title, "Chromosome IX");
        assert_eq!((style.width, style.height), (4500, 1800));
        assert_eq!(PlotStyle::with_title("chrI").width, 4500);
        assert_eq!(style.font_size(), 40);
        assert_eq!(style.marker_size(), 6);
    }
}
