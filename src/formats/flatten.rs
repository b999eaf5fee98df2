//! Header-stripping sequence reader.
//!
//! FASTA and FASTQ records are read the same way: every line starting with a
//! record marker is dropped and the remaining lines are trimmed and joined.
//!
//! ```text
//! >chrIX description          <- dropped
//! ACGTACGT                     <- kept
//! @read1                       <- dropped
//! ACGT                         <- kept
//! +                            <- dropped
//! IIII                         <- kept (quality lines are not recognised)
//! ```

use std::io::BufRead;

use super::LoadResult;
use crate::model::Sequence;

/// Characters that mark a line to be skipped: FASTA name lines, FASTQ read
/// names and FASTQ quality separators.
pub const RECORD_MARKERS: [u8; 3] = [b'>', b'@', b'+'];

/// Returns true if the raw (untrimmed) line is a header or separator line.
pub fn is_marker_line(line: &[u8]) -> bool {
    line.first().is_some_and(|b| RECORD_MARKERS.contains(b))
}

/// Reads all lines from `reader` and concatenates the sequence lines.
///
/// `\n`, `\r\n` and lone `\r` all end a line. The marker test looks at the
/// first byte of the raw line, so an indented `>` line is kept as sequence.
pub fn parse_sequence<R: BufRead>(reader: R) -> LoadResult<Sequence> {
    let mut data: Vec<u8> = Vec::new();

    for chunk in reader.split(b'\n') {
        let chunk = chunk?;
        for line in chunk.split(|&b| b == b'\r') {
            if is_marker_line(line) {
                continue;
            }
            data.extend_from_slice(line.trim_ascii());
        }
    }

    data.shrink_to_fit();
    Ok(Sequence::from_bytes(data))
}

/// Parses sequence content from a string.
///
/// Useful for testing or processing in-memory data.
pub fn parse_sequence_str(content: &str) -> LoadResult<Sequence> {
    parse_sequence(content.as_bytes())
}
