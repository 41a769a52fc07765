//! Error type shared by the transforms, the stream drivers and the command line.

use thiserror::Error;

/// Errors that can occur while ranking, transforming or moving data.
#[derive(Error, Debug)]
pub enum Error {
    /// The circular suffix array (and so the forward BWT) needs at least one byte.
    #[error("Input sequence is empty")]
    EmptyInput,

    #[error("Block of {0} bytes is too large to rank with 32 bit offsets")]
    BlockTooLarge(usize),

    #[error("Position {index} is out of range for a sequence of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("Illegal mode selector: {0} (use '-' to encode or '+' to decode)")]
    InvalidMode(String),

    #[error("Unexpected end of stream while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
