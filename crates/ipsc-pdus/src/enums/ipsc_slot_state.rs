/// IPSC state of one repeater timeslot, as announced in the linking byte
/// Bits: 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpscSlotState {
    Off,
    On,
    /// 0 and 3 have no known meaning
    Unknown(u8),
}

impl IpscSlotState {
    pub fn from_raw(value: u8) -> Self {
        match value & 0x03 {
            1 => IpscSlotState::Off,
            2 => IpscSlotState::On,
            other => IpscSlotState::Unknown(other),
        }
    }

    pub fn into_raw(self) -> u8 {
        match self {
            IpscSlotState::Off => 1,
            IpscSlotState::On => 2,
            IpscSlotState::Unknown(v) => v & 0x03,
        }
    }
}

impl core::fmt::Display for IpscSlotState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IpscSlotState::Off => write!(f, "OFF"),
            IpscSlotState::On => write!(f, "ON"),
            IpscSlotState::Unknown(_) => write!(f, "Unknown"),
        }
    }
}
