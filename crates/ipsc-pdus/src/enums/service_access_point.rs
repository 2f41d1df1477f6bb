/// Service Access Point (SAP), high nibble of data header byte 2
/// Bits: 4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAccessPoint {
    /// Unified Data Transport
    Udt,
    TcpIpHeaderCompression,
    UdpIpHeaderCompression,
    IpPacketData,
    /// Address Resolution Protocol
    Arp,
    ProprietaryPacketData,
    ShortData,
    /// 0x1, 0x6..=0x8, 0xb..=0xf
    Reserved(u8),
}

impl ServiceAccessPoint {
    /// Only the low nibble of `value` is considered
    pub fn from_raw(value: u8) -> Self {
        match value & 0x0f {
            0x0 => ServiceAccessPoint::Udt,
            0x2 => ServiceAccessPoint::TcpIpHeaderCompression,
            0x3 => ServiceAccessPoint::UdpIpHeaderCompression,
            0x4 => ServiceAccessPoint::IpPacketData,
            0x5 => ServiceAccessPoint::Arp,
            0x9 => ServiceAccessPoint::ProprietaryPacketData,
            0xa => ServiceAccessPoint::ShortData,
            other => ServiceAccessPoint::Reserved(other),
        }
    }

    pub fn into_raw(self) -> u8 {
        match self {
            ServiceAccessPoint::Udt => 0x0,
            ServiceAccessPoint::TcpIpHeaderCompression => 0x2,
            ServiceAccessPoint::UdpIpHeaderCompression => 0x3,
            ServiceAccessPoint::IpPacketData => 0x4,
            ServiceAccessPoint::Arp => 0x5,
            ServiceAccessPoint::ProprietaryPacketData => 0x9,
            ServiceAccessPoint::ShortData => 0xa,
            ServiceAccessPoint::Reserved(v) => v & 0x0f,
        }
    }
}

impl core::fmt::Display for ServiceAccessPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ServiceAccessPoint::Udt => write!(f, "Unified Data Transport (UDT)"),
            ServiceAccessPoint::TcpIpHeaderCompression => write!(f, "TCP/IP header compression"),
            ServiceAccessPoint::UdpIpHeaderCompression => write!(f, "UDP/IP header compression"),
            ServiceAccessPoint::IpPacketData => write!(f, "IP based Packet data"),
            ServiceAccessPoint::Arp => write!(f, "Address Resolution Protocol (ARP)"),
            ServiceAccessPoint::ProprietaryPacketData => write!(f, "Proprietary Packet data"),
            ServiceAccessPoint::ShortData => write!(f, "Short Data"),
            ServiceAccessPoint::Reserved(_) => write!(f, "Reserved"),
        }
    }
}
