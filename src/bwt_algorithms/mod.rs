//! The bwt_algorithms module forms the sorting subsystem of the pipeline.
//!
//! The Burrows-Wheeler Transform rearranges a block of data so that bytes which appear in similar
//! contexts end up next to each other. Runs of identical bytes become far more likely, which the
//! Move-To-Front stage turns into runs of small numbers.
//!
//! - circular_suffix: ranks every cyclic rotation of a block with a three-way radix quicksort.
//! - bwt_sort: the forward transform (built on the ranking) and the inverse (key indexed counting,
//!   no sorting needed).
//!
pub mod bwt_sort;
pub mod circular_suffix;
