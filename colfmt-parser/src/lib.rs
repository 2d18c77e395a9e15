//! # colfmt-parser
//!
//! Front end for fixed-column source files.
//!
//! Each physical line is split into its fixed regions: an optional sequence number in
//! columns 1-6, an indicator in column 7, and the code areas A and B in columns 8-72. The
//! preprocessor classifies every line, extracts the code text with its original column,
//! and collects issues for malformed lines instead of stopping at the first one.
//!
//! See [colfmt::preprocessing] for the run protocol and [colfmt::layout] for the columns.

pub mod colfmt;
