use std::io::{Read, Write};

use log::{debug, info};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::bwt_algorithms::bwt_sort::bwt_encode;
use crate::error::Result;
use crate::tools::mtf::{mtf_encode, MtfList};

/// Read the whole input, apply the BWT, and write the `first` pointer (u32) followed by the
/// transformed block. Empty input produces empty output.
pub fn bwt_encode_stream<R: Read, W: Write>(
    br: &mut BitReader<R>,
    bw: &mut BitWriter<W>,
) -> Result<()> {
    let data = br.read_to_end()?;
    if data.is_empty() {
        info!("No input data, nothing to transform.");
        return Ok(bw.flush()?);
    }
    info!("Read {} bytes.", data.len());

    let block = bwt_encode(&data)?;
    bw.out32(block.first)?;
    bw.out_bytes(&block.data)?;
    bw.flush()?;

    debug!("Wrote first pointer {} and {} bytes.", block.first, block.data.len());
    Ok(())
}

/// Move-To-Front encode the input one symbol at a time.
pub fn mtf_encode_stream<R: Read, W: Write>(
    br: &mut BitReader<R>,
    bw: &mut BitWriter<W>,
) -> Result<()> {
    let mut list = MtfList::new();
    let mut count = 0_usize;
    while let Some(byte) = next_symbol(br)? {
        bw.out8(list.encode_symbol(byte))?;
        count += 1;
    }
    bw.flush()?;

    info!("MTF encoded {} symbols.", count);
    Ok(())
}

/// Run the whole compression side: BWT, then MTF over the transformed block.
/// The output is the `first` pointer (u32) followed by the MTF indecies.
pub fn compress_stream<R: Read, W: Write>(
    br: &mut BitReader<R>,
    bw: &mut BitWriter<W>,
) -> Result<()> {
    let data = br.read_to_end()?;
    if data.is_empty() {
        info!("No input data, nothing to compress.");
        return Ok(bw.flush()?);
    }
    info!("Read {} bytes.", data.len());

    let block = bwt_encode(&data)?;
    let indecies = mtf_encode(&block.data);
    debug!(
        "{} of {} MTF indecies are zero.",
        indecies.iter().filter(|&&i| i == 0).count(),
        indecies.len()
    );

    bw.out32(block.first)?;
    bw.out_bytes(&indecies)?;
    bw.flush()?;
    Ok(())
}

/// Next symbol from the reader, or None at the end of the stream.
pub(super) fn next_symbol<R: Read>(br: &mut BitReader<R>) -> Result<Option<u8>> {
    if br.is_empty()? {
        return Ok(None);
    }
    Ok(br.byte()?)
}
