#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub(crate) value: u8,
    pub(crate) count: u64,
}

impl Entry {
    /// The byte value this entry counts occurrences of.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// The number of times the byte value has been seen.
    pub fn count(&self) -> u64 {
        self.count
    }
}
