//! # gtskew - Sliding-window G/T composition
//!
//! Computes, along a DNA sequence read from a FASTA or FASTQ file, the
//! fraction of G+T bases and the G/T ratio in sliding windows, then writes
//! the results as a CSV table and a dual-axis plot.
//!
//! ## Architecture
//!
//! The pipeline is a single sequential pass:
//! - `formats`: Loading and flattening of FASTA/FASTQ files
//! - `range`: 1-based subrange selection
//! - `window`: Sliding-window statistics
//! - `report`: CSV and plot output
//! - `controller`: Orchestration of one run
//! - `model`: Data structures shared by the stages

pub mod controller;
pub mod formats;
pub mod model;
pub mod range;
pub mod report;
pub mod window;
