/// Peer mode, bits 5..4 of the linking byte
/// Bits: 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PeerMode {
    NoRadio = 0,
    AnalogRadio = 1,
    DigitalRadio = 2,
    Unknown = 3,
}

impl PeerMode {
    pub fn from_raw(value: u8) -> Self {
        match value & 0x03 {
            0 => PeerMode::NoRadio,
            1 => PeerMode::AnalogRadio,
            2 => PeerMode::DigitalRadio,
            _ => PeerMode::Unknown,
        }
    }

    pub fn into_raw(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for PeerMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PeerMode::NoRadio => write!(f, "No Radio"),
            PeerMode::AnalogRadio => write!(f, "Analog Radio"),
            PeerMode::DigitalRadio => write!(f, "Digital Radio"),
            PeerMode::Unknown => write!(f, "Unknown"),
        }
    }
}
