//! The compression module drives the stages over streams.
//!
//! Compression happens in the following steps:
//! - Burrows Wheeler Transform: Sort the rotations of the block to increase the probability of runs of identical bytes.
//! - Move To Front transform: Turn those runs into runs of small indecies, mostly zeros.
//!
//! Entropy coding of the result is left to a later stage.
//!
//! Decompression follows the inverse of the compression process.
//! - MTF transform: Convert from the Move-To-Front indecies to the symbols represented by the indecies.
//! - BWT reversal: Restore the original data from the BWT transform.
//!
//! Each stage can also be run on its own.
//!

pub mod compress;
pub mod decompress;

use std::io::{Read, Write};

use log::info;

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::Result;
use crate::tools::cli::{Mode, Stage};

/// Run one stage (or the whole pipeline) in the given direction, from `reader` to `writer`.
pub fn run<R: Read, W: Write>(stage: Stage, mode: Mode, reader: R, writer: W) -> Result<()> {
    let mut br = BitReader::new(reader);
    let mut bw = BitWriter::new(writer);

    info!("Starting {} {}.", stage, mode);
    match (stage, mode) {
        (Stage::Bwt, Mode::Encode) => compress::bwt_encode_stream(&mut br, &mut bw),
        (Stage::Bwt, Mode::Decode) => decompress::bwt_decode_stream(&mut br, &mut bw),
        (Stage::Mtf, Mode::Encode) => compress::mtf_encode_stream(&mut br, &mut bw),
        (Stage::Mtf, Mode::Decode) => decompress::mtf_decode_stream(&mut br, &mut bw),
        (Stage::Pipeline, Mode::Encode) => compress::compress_stream(&mut br, &mut bw),
        (Stage::Pipeline, Mode::Decode) => decompress::decompress_stream(&mut br, &mut bw),
    }?;
    bw.into_inner()?;
    Ok(())
}
