//! Sequence file loading.
//!
//! Supports:
//! - FASTA (.fasta, .fa, .fna, .fas, .ffn, .frn)
//! - FASTQ (.fastq, .fq)
//!
//! Both formats are flattened into a single sequence by [`flatten`]. The
//! detected format is only reported, it does not change how lines are read.

pub mod flatten;

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

pub use flatten::{parse_sequence, parse_sequence_str};
use crate::model::Sequence;

/// Detected file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceFormat {
    Fasta,
    Fastq,
}

impl std::fmt::Display for SequenceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceFormat::Fasta => write!(f, "FASTA"),
            SequenceFormat::Fastq => write!(f, "FASTQ"),
        }
    }
}

/// Errors that can occur while loading a sequence file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File {0} does not exist")]
    NotFound(String),

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Detects format from file extension.
pub fn detect_format_from_extension<P: AsRef<Path>>(path: P) -> Option<SequenceFormat> {
    let ext = path.as_ref().extension().and_then(OsStr::to_str)?;
    match ext.to_lowercase().as_str() {
        "fa" | "fas" | "fasta" | "fna" | "ffn" | "frn" => Some(SequenceFormat::Fasta),
        "fq" | "fastq" => Some(SequenceFormat::Fastq),
        _ => None,
    }
}

/// Detects the format from the first non-empty line.
pub fn detect_format_from_content(first_line: &str) -> Option<SequenceFormat> {
    match first_line.trim_start().as_bytes().first()? {
        b'>' => Some(SequenceFormat::Fasta),
        b'@' => Some(SequenceFormat::Fastq),
        _ => None,
    }
}

/// Reads the first non-empty line of a file, if any.
fn peek_first_line(path: &Path) -> LoadResult<Option<String>> {
    let reader = BufReader::new(File::open(path)?);
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
    }
    Ok(None)
}

/// Detects the format of a file: extension first, then content.
pub fn detect_format<P: AsRef<Path>>(path: P) -> LoadResult<Option<SequenceFormat>> {
    let path = path.as_ref();
    if let Some(format) = detect_format_from_extension(path) {
        return Ok(Some(format));
    }
    // Binary or non-UTF8 content simply yields no detection.
    match peek_first_line(path) {
        Ok(line) => Ok(line.as_deref().and_then(detect_format_from_content)),
        Err(LoadError::IoError(e)) if e.kind() == std::io::ErrorKind::InvalidData => Ok(None),
        Err(e) => Err(e),
    }
}

/// Loads a FASTA/FASTQ file as one flat sequence.
///
/// # Examples
///
/// ```no_run
/// use gtskew::formats::read_sequence_file;
///
/// let sequence = read_sequence_file("chrIX.fasta").unwrap();
/// println!("Loaded {} bases", sequence.len());
/// ```
pub fn read_sequence_file<P: AsRef<Path>>(path: P) -> LoadResult<Sequence> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    match detect_format(path)? {
        Some(format) => debug!("Detected {} input: {}", format, path.display()),
        None => debug!("Unrecognised format, reading as plain sequence: {}", path.display()),
    }

    let file = File::open(path)?;
    let reader = BufReader::with_capacity(1024 * 1024, file);
    let sequence = parse_sequence(reader)?;

    info!("Loaded {} symbols from {}", sequence.len(), path.display());
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_detect_from_extension() {
        assert_eq!(detect_format_from_extension("chr.fa"), Some(SequenceFormat::Fasta));
        assert_eq!(detect_format_from_extension("chr.FASTA"), Some(SequenceFormat::Fasta));
        assert_eq!(detect_format_from_extension("chr.fna"), Some(SequenceFormat::Fasta));
        assert_eq!(detect_format_from_extension("reads.fq"), Some(SequenceFormat::Fastq));
        assert_eq!(detect_format_from_extension("reads.fastq"), Some(SequenceFormat::Fastq));
        assert_eq!(detect_format_from_extension("notes.txt"), None);
        assert_eq!(detect_format_from_extension("noext"), None);
    }

    #[test]
    fn test_detect_from_content() {
        assert_eq!(detect_format_from_content(">chrIX"), Some(SequenceFormat::Fasta));
        assert_eq!(detect_format_from_content("@read"), Some(SequenceFormat::Fastq));
        assert_eq!(detect_format_from_content("ACGT"), None);
        assert_eq!(detect_format_from_content(""), None);
    }

    #[test]
    fn test_detect_format_falls_back_to_content() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "\n@read1\nACGT\n+\nIIII").unwrap();
        assert_eq!(detect_format(file.path()).unwrap(), Some(SequenceFormat::Fastq));
    }

    #[test]
    fn test_read_sequence_file() {
        let mut file = tempfile::Builder::new().suffix(".fasta").tempfile().unwrap();
        writeln!(file, ">chrIX\nGGTT\nAAGG").unwrap();
        let seq = read_sequence_file(file.path()).unwrap();
        assert_eq!(seq.as_bytes(), b"GGTTAAGG");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_sequence_file(dir.path().join("absent.fa"));
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }
}
