use log::{debug, info, warn};

use super::circular_suffix::CircularSuffixArray;
use crate::error::{Error, Result};
use crate::tools::freq_count::{freqs, starts};

/// Output of the forward transform. `first` is the row of the sorted rotation table holding the
/// untransformed data, `data` is the last column of that table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BwtBlock {
    pub first: u32,
    pub data: Vec<u8>,
}

/// Burrows-Wheeler-Transform. Ranks the rotations of the input and reads off the byte that
/// (cyclically) precedes each one.
pub fn bwt_encode(data: &[u8]) -> Result<BwtBlock> {
    let csa = CircularSuffixArray::new(data)?;
    let end = data.len();

    // The unmoved rotation starts at offset 0. It is always ranked somewhere.
    let first = csa.rank_of(0).ok_or(Error::OutOfRange { index: 0, len: end })?;

    let bwt = csa
        .as_slice()
        .iter()
        .map(|&offset| data[(offset as usize + end - 1) % end])
        .collect::<Vec<u8>>();

    info!("BWT of {} bytes, first is {}.", end, first);
    Ok(BwtBlock {
        first: first as u32,
        data: bwt,
    })
}

/// Decode a Burrows-Wheeler-Transform without sorting anything. A stable counting sort of the
/// transformed data gives, for each row of the rotation table, the row that follows it in the
/// original data; walking that chain from `first` rebuilds the input.
///
/// The payload is trusted. A `first` that is out of range produces no output.
pub fn bwt_decode(first: u32, bwt_in: &[u8]) -> Vec<u8> {
    let end = bwt_in.len();
    if first as usize >= end {
        if end > 0 {
            warn!("First pointer {} is past the end of a {} byte block.", first, end);
        }
        return Vec::new();
    }

    // Cumulative frequencies give the first row of each symbol in the sorted column.
    let mut start = starts(&freqs(bwt_in));

    // Key indexed counting to build the chain of next rows
    let mut next = vec![0_u32; end];
    for (i, &s) in bwt_in.iter().enumerate() {
        next[start[s as usize] as usize] = i as u32;
        start[s as usize] += 1;
    }

    let mut out = Vec::with_capacity(end);
    let mut i = next[first as usize] as usize;
    for _ in 0..end {
        out.push(bwt_in[i]);
        i = next[i] as usize;
    }

    debug!("Reversed BWT of {} bytes.", end);
    out
}
