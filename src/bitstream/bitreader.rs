//! BitReader: the input half of the bitstream, read a whole byte at a time.
//!
//! NOTE: This module can read from any I/O source that supports the read() call. Read errors
//! other than `Interrupted` are handed back to the caller, never folded into end of stream.
//!

use std::io::{self, ErrorKind, Read};

use log::trace;

const BUFFER_SIZE: usize = 1024 * 1024;

/// Buffered reader for bytes and big-endian u32 values.
#[derive(Debug)]
pub struct BitReader<R> {
    buffer: Vec<u8>,
    cursor: usize,
    source: R,
}

impl<R: Read> BitReader<R> {
    /// Creates a new bitReader (with a 1Mbyte buffer).
    pub fn new(source: R) -> Self {
        Self {
            buffer: vec![0; BUFFER_SIZE],
            cursor: BUFFER_SIZE,
            source,
        }
    }

    /// Check (and refill) buffer. Ok(false) once the source is exhausted.
    fn have_data(&mut self) -> io::Result<bool> {
        if self.cursor < self.buffer.len() {
            return Ok(true);
        }
        self.buffer.resize(BUFFER_SIZE, 0);
        let size = loop {
            match self.source.read(&mut self.buffer) {
                Ok(size) => break size,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    // Leave nothing half read behind
                    self.buffer.clear();
                    self.cursor = 0;
                    return Err(e);
                }
            }
        };
        self.buffer.truncate(size);
        self.cursor = 0;
        trace!("Refilled input buffer with {} bytes.", size);
        Ok(size > 0)
    }

    /// End of stream predicate.
    pub fn is_empty(&mut self) -> io::Result<bool> {
        Ok(!self.have_data()?)
    }

    /// Next byte, or None at the end of the stream.
    pub fn byte(&mut self) -> io::Result<Option<u8>> {
        if !self.have_data()? {
            return Ok(None);
        }
        let byte = self.buffer[self.cursor];
        self.cursor += 1;
        Ok(Some(byte))
    }

    /// Returns a big-endian u32, or None if the stream ends first.
    pub fn u32(&mut self) -> io::Result<Option<u32>> {
        let mut word = 0_u32;
        for _ in 0..4 {
            match self.byte()? {
                Some(byte) => word = word << 8 | byte as u32,
                None => return Ok(None),
            }
        }
        Ok(Some(word))
    }

    /// Reads every remaining byte of the stream.
    pub fn read_to_end(&mut self) -> io::Result<Vec<u8>> {
        let mut result = Vec::new();
        while self.have_data()? {
            result.extend_from_slice(&self.buffer[self.cursor..]);
            self.cursor = self.buffer.len();
        }
        Ok(result)
    }
}
