//! This crate contains a histogram datastructure for counting occurances of
//! byte values and reporting on their distribution.
//!
//! Unlike general-purpose value histograms there is no bucketing or binning
//! strategy to choose: the key space is exactly the 256 possible byte values,
//! so the histogram is a flat table indexed directly by byte value. Increments
//! are a single array write, making updates blazingly fast.
//!
//! * `ByteHistogram` - accumulates counts across arbitrarily many updates
//! * `Entry` - a `(value, count)` pair produced when reading the histogram out
//!
//! Reading the histogram out produces only the byte values that were actually
//! seen, either in byte-value order or ranked by count.

mod entry;
mod histogram;

pub use entry::Entry;
pub use histogram::ByteHistogram;
