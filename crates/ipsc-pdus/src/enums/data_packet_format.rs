/// Data Packet Format (DPF), low nibble of data header byte 1
/// Bits: 4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DataPacketFormat {
    /// Unified Data Transport
    Udt = 0x0,
    ResponsePacket = 0x1,
    UnconfirmedData = 0x2,
    ConfirmedData = 0x3,
    ShortDataDefined = 0xd,
    ShortDataRawOrStatus = 0xe,
    ProprietaryData = 0xf,
}

impl std::convert::TryFrom<u64> for DataPacketFormat {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0x0 => Ok(DataPacketFormat::Udt),
            0x1 => Ok(DataPacketFormat::ResponsePacket),
            0x2 => Ok(DataPacketFormat::UnconfirmedData),
            0x3 => Ok(DataPacketFormat::ConfirmedData),
            0xd => Ok(DataPacketFormat::ShortDataDefined),
            0xe => Ok(DataPacketFormat::ShortDataRawOrStatus),
            0xf => Ok(DataPacketFormat::ProprietaryData),
            _ => Err(()),
        }
    }
}

impl DataPacketFormat {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }
}

impl From<DataPacketFormat> for u64 {
    fn from(e: DataPacketFormat) -> Self {
        e.into_raw() as u64
    }
}

impl core::fmt::Display for DataPacketFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataPacketFormat::Udt => write!(f, "Unified Data Transport (UDT)"),
            DataPacketFormat::ResponsePacket => write!(f, "Response Packet"),
            DataPacketFormat::UnconfirmedData => write!(f, "Data packet with unconfirmed delivery"),
            DataPacketFormat::ConfirmedData => write!(f, "Data packet with confirmed delivery"),
            DataPacketFormat::ShortDataDefined => write!(f, "Short Data: Defined"),
            DataPacketFormat::ShortDataRawOrStatus => write!(f, "Short Data: Raw or Status/Precoded"),
            DataPacketFormat::ProprietaryData => write!(f, "Proprietary Data Packet"),
        }
    }
}
