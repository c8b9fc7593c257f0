//! Mutable generator state guarded by the generator's mutex

/// Last issued timestamp and the sequence used with it.
/// Both fields are only ever updated together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State {
    /// Unix milliseconds of the most recent ID, `None` before the first one
    pub(crate) last_timestamp: Option<u64>,
    pub(crate) sequence: u16,
}

impl State {
    pub(crate) const fn new(initial_sequence: u16) -> Self {
        Self {
            last_timestamp: None,
            sequence: initial_sequence,
        }
    }
}
