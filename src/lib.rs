//! Burrows-Wheeler and Move-To-Front transforms, the preprocessing half of a block-sorting
//! compressor such as bzip2.
//!
//! The Burrows-Wheeler Transform (BWT) sorts every cyclic rotation of a block and keeps the last
//! column of the sorted table, plus a pointer to the row holding the original block. Bytes that
//! share a context end up side by side, so the output is full of runs. Move-To-Front (MTF) then
//! replaces each byte with its position in a list ordered by recent use, turning those runs into
//! runs of zeros and small numbers that an entropy coder handles well. Both transforms are exactly
//! reversible.
//!
//! Entropy coding is not part of this crate.
//!
//! Basic usage from the command line:
//!
//! `$> bwmtf pipeline - -i test.txt -o test.bwm`
//!
//! `$> bwmtf pipeline + -i test.bwm`
//!
//! '-' encodes and '+' decodes. The `bwt` and `mtf` stages can be run separately the same way.
//!
pub mod bitstream;
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod tools;
