/// Peer operation, bits 7..6 of the linking byte
/// Bits: 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerOperation {
    Operational,
    /// 0, 2 and 3 have no known meaning
    Unknown(u8),
}

impl PeerOperation {
    pub fn from_raw(value: u8) -> Self {
        match value & 0x03 {
            0x1 => PeerOperation::Operational,
            other => PeerOperation::Unknown(other),
        }
    }

    pub fn into_raw(self) -> u8 {
        match self {
            PeerOperation::Operational => 0x1,
            PeerOperation::Unknown(v) => v & 0x03,
        }
    }
}

impl core::fmt::Display for PeerOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PeerOperation::Operational => write!(f, "Peer Operational"),
            PeerOperation::Unknown(_) => write!(f, "Unknown"),
        }
    }
}
