//! The tools module provides the helper stages and the command line handling.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Frequency count and cumulative starts over the 256 byte values.
//! - mtf: Move-To-Front transform, encode and decode.
//!
pub mod cli;
pub mod freq_count;
pub mod mtf;
