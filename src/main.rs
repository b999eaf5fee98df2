//! gtskew - Sliding-window G/T composition
//!
//! ## Usage
//!
//! ```bash
//! gtskew -f chrIX.fasta
//! gtskew -f chrIX.fasta -w 200 -s 50 --start 1000 --end 50000
//! ```
//!
//! Writes `window{W}-step{S}-pos{START}-{END}.csv` and `.png` to the output
//! directory (current directory by default).

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use gtskew::controller::{run_analysis, AnalysisConfig};
use gtskew::model::WindowParams;
use gtskew::report::plot::PlotStyle;

/// Analyze nucleotide composition in sliding windows
///
/// Reports, for every window, the fraction of G+T bases and the G/T ratio,
/// as a CSV table and a plot.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to input FASTA/FASTQ file
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Window size for sliding window analysis
    #[arg(short = 'w', long = "window", default_value_t = WindowParams::DEFAULT_WINDOW)]
    window: usize,

    /// Step size for sliding window (must not exceed window size)
    #[arg(short = 's', long = "step", default_value_t = WindowParams::DEFAULT_STEP)]
    step: usize,

    /// Start position for analysis (1-based)
    #[arg(long = "start", allow_negative_numbers = true)]
    start: Option<i64>,

    /// End position for analysis (1-based, inclusive)
    #[arg(long = "end", allow_negative_numbers = true)]
    end: Option<i64>,

    /// Directory where the CSV and plot are written (default: current directory)
    #[arg(short = 'o', long = "outdir")]
    outdir: Option<PathBuf>,

    /// Plot title
    #[arg(long = "title", default_value = PlotStyle::DEFAULT_TITLE)]
    title: String,
}

impl From<Args> for AnalysisConfig {
    fn from(args: Args) -> Self {
        Self {
            file: args.file,
            window: args.window,
            step: args.step,
            start: args.start,
            end: args.end,
            out_dir: args.outdir,
            plot_style: PlotStyle::with_title(args.title),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = AnalysisConfig::from(args);

    let outputs = run_analysis(&config)?;

    println!("Analysis complete. Results saved to:");
    println!("  CSV: {}", outputs.csv.display());
    println!("  Plot: {}", outputs.plot.display());

    Ok(())
}
