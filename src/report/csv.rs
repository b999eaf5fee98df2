//! CSV serialization of the statistics table.
//!
//! ```text
//! Position,G+T/window,G/T_ratio
//! 50,0.52,1.1666666666666667
//! 75,0.5,1.0
//! ```

use std::io::Write;
use std::path::Path;

use super::ReportResult;
use crate::model::StatsTable;

/// Column names, in output order.
pub const HEADER: [&str; 3] = ["Position", "G+T/window", "G/T_ratio"];

/// Formats a float as its shortest round-trip representation, keeping a
/// trailing `.0` on integral values and a two-digit exponent (`5e-05`).
pub fn format_float(value: f64) -> String {
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// Writes the table to any writer. An empty table produces the header only.
pub fn write_table_to<W: Write>(writer: W, table: &StatsTable) -> ReportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for row in table.rows() {
        csv_writer.write_record([
            row.position.to_string(),
            format_float(row.gt_fraction),
            format_float(row.g_t_ratio),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes the table to `path`, replacing any existing file.
pub fn write_table<P: AsRef<Path>>(path: P, table: &StatsTable) -> ReportResult<()> {
    let file = std::fs::File::create(path)?;
    write_table_to(std::io::BufWriter::new(file), table)
}
