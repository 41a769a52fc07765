//! The bitstream module forms the I/O subsystem of the pipeline.
//!
//! Every stage reads its input through a BitReader and writes its output through a BitWriter. The
//! transforms themselves only ever see whole in-memory blocks; these two types are the boundary
//! where bytes and fixed width integers come in from, and go out to, files or standard I/O.
//!
//! Fixed width integers (the BWT `first` pointer) are stored big-endian.
//!
pub mod bitreader;
pub mod bitwriter;
