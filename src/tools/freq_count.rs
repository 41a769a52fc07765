/// Returns a frequency count of each byte value in the input data.
pub fn freqs(data: &[u8]) -> [u32; 256] {
    let mut freqs = [0_u32; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

/// Converts a frequency count into the starting position of each symbol in sorted order
/// (an exclusive prefix sum).
pub fn starts(freqs: &[u32; 256]) -> [u32; 256] {
    let mut start = [0_u32; 256];
    for i in 0..255 {
        start[i + 1] = start[i] + freqs[i];
    }
    start
}
