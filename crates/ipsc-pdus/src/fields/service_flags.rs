use core::fmt;

use ipsc_core::{ByteBuffer, ByteWriter, IpscParseErr, bitfield};

pub const FLAGS3_RDAC_MASK: u8 = 0x80;
pub const FLAGS3_CALL_MONITORING_MASK: u8 = 0x40;
pub const FLAGS3_THIRD_PARTY_MASK: u8 = 0x20;
pub const FLAGS3_RESERVED_MASK: u8 = 0x1f;

pub const FLAGS4_XNL_CONNECTED_MASK: u8 = 0x80;
pub const FLAGS4_XNL_MASTER_MASK: u8 = 0x40;
pub const FLAGS4_XNL_SLAVE_MASK: u8 = 0x20;
pub const FLAGS4_AUTHENTICATED_MASK: u8 = 0x10;
pub const FLAGS4_VOICE_MASK: u8 = 0x08;
pub const FLAGS4_DATA_MASK: u8 = 0x04;
pub const FLAGS4_RESERVED_MASK: u8 = 0x02;
pub const FLAGS4_MASTER_MASK: u8 = 0x01;

/// Third service flags byte: application level services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceFlagsByte3 {
    /// Repeater Diagnostics And Control
    pub rdac: bool,
    pub call_monitoring: bool,
    pub third_party_app: bool,
    // 5
    pub reserved: u8,
}

impl ServiceFlagsByte3 {
    pub fn from_byte(byte: u8) -> Self {
        ServiceFlagsByte3 {
            rdac: bitfield::flag(byte, FLAGS3_RDAC_MASK),
            call_monitoring: bitfield::flag(byte, FLAGS3_CALL_MONITORING_MASK),
            third_party_app: bitfield::flag(byte, FLAGS3_THIRD_PARTY_MASK),
            reserved: bitfield::extract(byte, FLAGS3_RESERVED_MASK),
        }
    }

    pub fn to_byte(&self) -> u8 {
        let mut b = bitfield::insert(0, FLAGS3_RESERVED_MASK, self.reserved);
        b = bitfield::set_flag(b, FLAGS3_RDAC_MASK, self.rdac);
        b = bitfield::set_flag(b, FLAGS3_CALL_MONITORING_MASK, self.call_monitoring);
        bitfield::set_flag(b, FLAGS3_THIRD_PARTY_MASK, self.third_party_app)
    }
}

/// Fourth service flags byte: link level capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceFlagsByte4 {
    pub xnl_connected: bool,
    pub xnl_master: bool,
    pub xnl_slave: bool,
    pub authenticated: bool,
    pub voice: bool,
    pub data: bool,
    pub reserved: bool,
    pub master: bool,
}

impl ServiceFlagsByte4 {
    pub fn from_byte(byte: u8) -> Self {
        ServiceFlagsByte4 {
            xnl_connected: bitfield::flag(byte, FLAGS4_XNL_CONNECTED_MASK),
            xnl_master: bitfield::flag(byte, FLAGS4_XNL_MASTER_MASK),
            xnl_slave: bitfield::flag(byte, FLAGS4_XNL_SLAVE_MASK),
            authenticated: bitfield::flag(byte, FLAGS4_AUTHENTICATED_MASK),
            voice: bitfield::flag(byte, FLAGS4_VOICE_MASK),
            data: bitfield::flag(byte, FLAGS4_DATA_MASK),
            reserved: bitfield::flag(byte, FLAGS4_RESERVED_MASK),
            master: bitfield::flag(byte, FLAGS4_MASTER_MASK),
        }
    }

    pub fn to_byte(&self) -> u8 {
        [
            (FLAGS4_XNL_CONNECTED_MASK, self.xnl_connected),
            (FLAGS4_XNL_MASTER_MASK, self.xnl_master),
            (FLAGS4_XNL_SLAVE_MASK, self.xnl_slave),
            (FLAGS4_AUTHENTICATED_MASK, self.authenticated),
            (FLAGS4_VOICE_MASK, self.voice),
            (FLAGS4_DATA_MASK, self.data),
            (FLAGS4_RESERVED_MASK, self.reserved),
            (FLAGS4_MASTER_MASK, self.master),
        ]
        .iter()
        .fold(0, |b, &(mask, set)| bitfield::set_flag(b, mask, set))
    }
}

/// Four service flag bytes following the linking byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceFlags {
    /// No known meaning, kept raw
    pub byte1: u8,
    /// No known meaning, kept raw
    pub byte2: u8,
    pub byte3: ServiceFlagsByte3,
    pub byte4: ServiceFlagsByte4,
}

impl ServiceFlags {
    pub fn from_bytebuf(buf: &mut ByteBuffer) -> Result<Self, IpscParseErr> {
        let byte1 = buf.read_u8("service_flags_byte1")?;
        let byte2 = buf.read_u8("service_flags_byte2")?;
        let byte3 = ServiceFlagsByte3::from_byte(buf.read_u8("service_flags_byte3")?);
        let byte4 = ServiceFlagsByte4::from_byte(buf.read_u8("service_flags_byte4")?);
        Ok(ServiceFlags { byte1, byte2, byte3, byte4 })
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) {
        buf.write_u8(self.byte1);
        buf.write_u8(self.byte2);
        buf.write_u8(self.byte3.to_byte());
        buf.write_u8(self.byte4.to_byte());
    }
}

impl fmt::Display for ServiceFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b3 = &self.byte3;
        let b4 = &self.byte4;
        write!(
            f,
            "ServiceFlags {{ byte1: 0x{:02x} byte2: 0x{:02x} rdac: {} call_monitoring: {} 3rd_party: {} xnl_connected: {} xnl_master: {} xnl_slave: {} authenticated: {} voice: {} data: {} master: {} }}",
            self.byte1,
            self.byte2,
            b3.rdac,
            b3.call_monitoring,
            b3.third_party_app,
            b4.xnl_connected,
            b4.xnl_master,
            b4.xnl_slave,
            b4.authenticated,
            b4.voice,
            b4.data,
            b4.master,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_flags_decode() {
        let data = [0x00, 0x00, 0xa1, 0x2d];
        let mut buf = ByteBuffer::new(&data);
        let flags = ServiceFlags::from_bytebuf(&mut buf).unwrap();
        assert!(flags.byte3.rdac);
        assert!(!flags.byte3.call_monitoring);
        assert!(flags.byte3.third_party_app);
        assert_eq!(flags.byte3.reserved, 0x01);

        assert!(!flags.byte4.xnl_connected);
        assert!(!flags.byte4.xnl_master);
        assert!(flags.byte4.xnl_slave);
        assert!(!flags.byte4.authenticated);
        assert!(flags.byte4.voice);
        assert!(flags.byte4.data);
        assert!(!flags.byte4.reserved);
        assert!(flags.byte4.master);

        let mut w = ByteWriter::new();
        flags.to_bytebuf(&mut w);
        assert_eq!(w.as_bytes(), &data);
    }

    #[test]
    fn test_service_flags_truncated() {
        let data = [0x00, 0x00, 0xa1];
        let mut buf = ByteBuffer::new(&data);
        assert!(matches!(
            ServiceFlags::from_bytebuf(&mut buf),
            Err(IpscParseErr::Truncated { field: "service_flags_byte4", .. })
        ));
    }
}
