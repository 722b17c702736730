use crate::Entry;

use core::cmp::Ordering;

/// The number of distinct byte values, and therefore the table size.
const SLOTS: usize = 256;

/// A histogram that tracks how many times each byte value has occurred in the
/// data fed to it. Internally it is a flat table of 64bit counters indexed
/// directly by byte value, plus a running total of bytes processed.
///
/// The total always equals the sum of all counters. Counter arithmetic wraps
/// on overflow; with 64bit counters this is out of practical range for real
/// inputs and is not guarded.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ByteHistogram {
    pub(crate) counts: [u64; SLOTS],
    pub(crate) total: u64,
}

impl Default for ByteHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteHistogram {
    /// Construct a new `ByteHistogram` with all counts at zero.
    pub fn new() -> Self {
        Self {
            counts: [0; SLOTS],
            total: 0,
        }
    }

    /// Restore the histogram to the all-zero state.
    pub fn reset(&mut self) {
        self.counts = [0; SLOTS];
        self.total = 0;
    }

    /// Count every byte in the provided slice. An empty slice leaves the
    /// histogram unchanged. There is no bound on how many times this may be
    /// called; counters wrap on overflow.
    pub fn update(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.counts[*byte as usize] = self.counts[*byte as usize].wrapping_add(1);
        }
        self.total = self.total.wrapping_add(bytes.len() as u64);
    }

    /// The total number of bytes processed so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The number of times the given byte value has been seen.
    pub fn count(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    /// Iterate over the byte values that have been seen at least once, in
    /// ascending byte-value order.
    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(value, count)| Entry {
                value: value as u8,
                count: *count,
            })
    }

    /// Returns two aligned vectors: the byte values that have been seen at
    /// least once, in ascending byte-value order, and their counts.
    pub fn byte_list(&self) -> (Vec<u8>, Vec<u64>) {
        self.iter().map(|e| (e.value, e.count)).unzip()
    }

    /// Returns the same aligned vectors as `byte_list()` but ordered by count,
    /// lowest first when `ascending` is true and highest first otherwise.
    /// Entries with equal counts are ordered by ascending byte value in both
    /// directions; the direction flag flips only the count comparison.
    pub fn sorted_byte_list(&self, ascending: bool) -> (Vec<u8>, Vec<u64>) {
        let mut entries: Vec<Entry> = self.iter().collect();

        entries.sort_by(|a, b| rank(a, b, ascending));

        entries.into_iter().map(|e| (e.value, e.count)).unzip()
    }
}

/// A single comparator serves both sort directions so that the tie-break on
/// byte value cannot drift between them.
fn rank(a: &Entry, b: &Entry, ascending: bool) -> Ordering {
    let by_count = if ascending {
        a.count.cmp(&b.count)
    } else {
        b.count.cmp(&a.count)
    };

    by_count.then_with(|| a.value.cmp(&b.value))
}
