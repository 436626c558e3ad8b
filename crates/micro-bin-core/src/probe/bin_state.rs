/// Occupancy of the recycle bin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BinState {
    /// No items in any bin.
    #[default]
    Empty,
    /// At least one item.
    Full,
}

impl BinState {
    /// Map an item count to a state.
    pub fn from_count(items: i64) -> Self {
        if items > 0 {
            BinState::Full
        } else {
            BinState::Empty
        }
    }

    /// `true` for [`BinState::Full`].
    pub fn has_items(self) -> bool {
        self == BinState::Full
    }

    pub(crate) fn to_bits(self) -> u8 {
        match self {
            BinState::Empty => 0,
            BinState::Full => 1,
        }
    }

    pub(crate) fn from_bits(bits: u8) -> Self {
        if bits == 0 {
            BinState::Empty
        } else {
            BinState::Full
        }
    }
}

impl From<bool> for BinState {
    fn from(has_items: bool) -> Self {
        if has_items {
            BinState::Full
        } else {
            BinState::Empty
        }
    }
}

/// Outcome of one probe with the fail-safe policy applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeReading {
    /// The OS answered.
    Confirmed(BinState),
    /// The OS query failed; reported as empty.
    FailedAsEmpty,
}

impl ProbeReading {
    /// State to display for this reading.
    pub fn state(self) -> BinState {
        match self {
            ProbeReading::Confirmed(state) => state,
            ProbeReading::FailedAsEmpty => BinState::Empty,
        }
    }

    /// Whether the reading came from a failed query.
    pub fn is_fallback(self) -> bool {
        matches!(self, ProbeReading::FailedAsEmpty)
    }
}
