/// DMR burst data type, low nibble of the "Data Type Voice Hdr" byte of voice and data bursts
/// Bits: 4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    PiHeader,
    VoiceLcHeader,
    TerminatorWithLc,
    Csbk,
    MbcHeader,
    MbcContinuation,
    DataHeader,
    Rate12Data,
    Rate34Data,
    Idle,
    Rate1Data,
    /// 0xb..=0xf
    Reserved(u8),
}

impl DataType {
    /// Only the low nibble of `value` is considered
    pub fn from_raw(value: u8) -> Self {
        match value & 0x0f {
            0x0 => DataType::PiHeader,
            0x1 => DataType::VoiceLcHeader,
            0x2 => DataType::TerminatorWithLc,
            0x3 => DataType::Csbk,
            0x4 => DataType::MbcHeader,
            0x5 => DataType::MbcContinuation,
            0x6 => DataType::DataHeader,
            0x7 => DataType::Rate12Data,
            0x8 => DataType::Rate34Data,
            0x9 => DataType::Idle,
            0xa => DataType::Rate1Data,
            other => DataType::Reserved(other),
        }
    }

    pub fn into_raw(self) -> u8 {
        match self {
            DataType::PiHeader => 0x0,
            DataType::VoiceLcHeader => 0x1,
            DataType::TerminatorWithLc => 0x2,
            DataType::Csbk => 0x3,
            DataType::MbcHeader => 0x4,
            DataType::MbcContinuation => 0x5,
            DataType::DataHeader => 0x6,
            DataType::Rate12Data => 0x7,
            DataType::Rate34Data => 0x8,
            DataType::Idle => 0x9,
            DataType::Rate1Data => 0xa,
            DataType::Reserved(v) => v & 0x0f,
        }
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::PiHeader => write!(f, "PI header"),
            DataType::VoiceLcHeader => write!(f, "Voice LC Header"),
            DataType::TerminatorWithLc => write!(f, "Terminator with LC"),
            DataType::Csbk => write!(f, "CSBK"),
            DataType::MbcHeader => write!(f, "MBC Header"),
            DataType::MbcContinuation => write!(f, "MBC Continuation"),
            DataType::DataHeader => write!(f, "Data Header"),
            DataType::Rate12Data => write!(f, "Rate 1/2 Data"),
            DataType::Rate34Data => write!(f, "Rate 3/4 Data"),
            DataType::Idle => write!(f, "Idle"),
            DataType::Rate1Data => write!(f, "Rate 1 Data"),
            DataType::Reserved(_) => write!(f, "Reserved"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_nibble_ignored() {
        assert_eq!(DataType::from_raw(0xf6), DataType::DataHeader);
        assert_eq!(DataType::from_raw(0x23), DataType::Csbk);
        assert_eq!(DataType::from_raw(0x0c), DataType::Reserved(0xc));
    }

    #[test]
    fn test_raw_values_stable() {
        for v in 0u8..16 {
            assert_eq!(DataType::from_raw(v).into_raw(), v);
        }
    }
}
