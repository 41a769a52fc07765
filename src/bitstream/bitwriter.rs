use std::io::Write;

use log::trace;

/// Bytes held in the output buffer before they are handed to the sink.
const OUTPUT_CHUNK: usize = 64 * 1024;

/// Writes a bitstream to any sink that supports write(). Values are packed most significant bit
/// first, so fixed width integers land on the stream big-endian.
pub struct BitWriter<W: Write> {
    /// Output buffer used to collect whole bytes before they are written.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Handle to the output stream
    writer: W,
}

impl<W: Write> BitWriter<W> {
    /// Create a new BitWriter on top of the given sink.
    pub fn new(writer: W) -> Self {
        Self {
            output: Vec::with_capacity(OUTPUT_CHUNK),
            queue: 0,
            q_bits: 0,
            writer,
        }
    }

    /// Internal bitstream write function common to all out.XX functions.
    fn push_queue(&mut self) -> std::io::Result<()> {
        // Make room for up to 32 more bits by moving all full bytes to the output buffer.
        if self.q_bits > 32 {
            while self.q_bits > 7 {
                let byte = (self.queue >> (self.q_bits - 8)) as u8;
                self.output.push(byte); //push the packed byte out
                self.q_bits -= 8; //adjust the count of bits left in the queue
            }
        }
        if self.output.len() >= OUTPUT_CHUNK {
            self.writer.write_all(&self.output)?;
            self.output.clear();
        }
        Ok(())
    }

    /// Put the low `n` bits (at most 32) of `data` on the stream.
    pub fn out_bits(&mut self, n: u8, data: u32) -> std::io::Result<()> {
        debug_assert!(n <= 32);
        self.push_queue()?;
        let mask = if n == 32 { u32::MAX } else { (1_u32 << n) - 1 };
        self.queue <<= n;
        self.queue |= (data & mask) as u64;
        self.q_bits += n;
        Ok(())
    }

    /// Put a byte on the stream.
    pub fn out8(&mut self, data: u8) -> std::io::Result<()> {
        self.out_bits(8, data as u32)
    }

    /// Put a u32 on the stream, most significant byte first.
    pub fn out32(&mut self, data: u32) -> std::io::Result<()> {
        self.out_bits(32, data)
    }

    /// Put a slice of bytes on the stream.
    pub fn out_bytes(&mut self, data: &[u8]) -> std::io::Result<()> {
        data.iter().try_for_each(|&x| self.out8(x))
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits, and hands everything buffered to the sink. Flush MUST be called when
    /// writing is done or data may be left in the internal queue.
    pub fn flush(&mut self) -> std::io::Result<()> {
        // First push out all the full bytes
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
        // Then push out the remaining bits
        if self.q_bits > 0 {
            let mut byte = (self.queue & (0xff >> (8 - self.q_bits)) as u64) as u8;
            byte <<= 8 - self.q_bits;
            self.output.push(byte);
            self.q_bits = 0;
        }
        trace!("Flushing {} bytes.", self.output.len());
        self.writer.write_all(&self.output)?;
        self.output.clear();
        self.writer.flush()
    }

    /// Flush and give back the sink.
    pub fn into_inner(mut self) -> std::io::Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}
