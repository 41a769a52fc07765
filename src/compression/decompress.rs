use std::io::{Read, Write};

use log::{debug, info};

use super::compress::next_symbol;
use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::bwt_algorithms::bwt_sort::bwt_decode;
use crate::error::{Error, Result};
use crate::tools::mtf::{mtf_decode, MtfList};

const FIRST_POINTER: &str = "the first pointer";

/// Read the `first` pointer and the transformed block, and write the original data.
/// The payload is trusted; only a stream too short to hold the pointer is an error.
pub fn bwt_decode_stream<R: Read, W: Write>(
    br: &mut BitReader<R>,
    bw: &mut BitWriter<W>,
) -> Result<()> {
    if br.is_empty()? {
        info!("No input data, nothing to reverse.");
        return Ok(bw.flush()?);
    }
    let first = br.u32()?.ok_or(Error::UnexpectedEof(FIRST_POINTER))?;
    let transformed = br.read_to_end()?;
    info!("First pointer is {}, block is {} bytes.", first, transformed.len());

    let data = bwt_decode(first, &transformed);
    bw.out_bytes(&data)?;
    bw.flush()?;
    Ok(())
}

/// Move-To-Front decode the input one index at a time.
pub fn mtf_decode_stream<R: Read, W: Write>(
    br: &mut BitReader<R>,
    bw: &mut BitWriter<W>,
) -> Result<()> {
    let mut list = MtfList::new();
    let mut count = 0_usize;
    while let Some(idx) = next_symbol(br)? {
        bw.out8(list.decode_symbol(idx))?;
        count += 1;
    }
    bw.flush()?;

    info!("MTF decoded {} symbols.", count);
    Ok(())
}

/// Undo compress_stream: MTF decode the indecies, then reverse the BWT.
pub fn decompress_stream<R: Read, W: Write>(
    br: &mut BitReader<R>,
    bw: &mut BitWriter<W>,
) -> Result<()> {
    if br.is_empty()? {
        info!("No input data, nothing to decompress.");
        return Ok(bw.flush()?);
    }
    let first = br.u32()?.ok_or(Error::UnexpectedEof(FIRST_POINTER))?;
    let indecies = br.read_to_end()?;
    debug!("First pointer is {}, {} indecies.", first, indecies.len());

    let data = bwt_decode(first, &mtf_decode(&indecies));
    bw.out_bytes(&data)?;
    bw.flush()?;

    info!("Restored {} bytes.", data.len());
    Ok(())
}
