use core::fmt;

use ipsc_core::{ByteBuffer, ByteSpan, ByteWriter, DIGEST_LEN, IpscParseErr};

use crate::enums::msg_type::IpscMsgType;
use crate::fields::linking::Linking;
use crate::fields::service_flags::ServiceFlags;
use crate::pdus::call_ctl::expect_span_len;

pub const LONG_MESSAGE_LEN: usize = 24;

/// Registration, keep-alive and peer list messages sharing the linking layout
/// (0x90, 0x91, 0x94..=0x99).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongMessage<'a> {
    pub msg_type: IpscMsgType,
    // 4
    pub repeater_id: u32,
    // 1
    pub linking: Linking,
    // 4
    pub service_flags: ServiceFlags,
    // 4
    pub version: u32,
    // 10
    pub digest: ByteSpan<'a>,
}

impl<'a> LongMessage<'a> {
    pub fn from_bytebuf(buf: &mut ByteBuffer<'a>) -> Result<Self, IpscParseErr> {
        let raw_type = buf.read_u8("msg_type")?;
        let msg_type = IpscMsgType::try_from(raw_type as u64)
            .ok()
            .filter(|t| t.is_long_message())
            .ok_or(IpscParseErr::InvalidPduType { expected: IpscMsgType::MasterRegReq.into_raw(), found: raw_type })?;

        let repeater_id = buf.read_u32("repeater_id")?;
        let linking = Linking::from_bytebuf(buf)?;
        let service_flags = ServiceFlags::from_bytebuf(buf)?;
        let version = buf.read_u32("version")?;
        let digest = buf.read_span(DIGEST_LEN, "digest")?;

        Ok(LongMessage { msg_type, repeater_id, linking, service_flags, version, digest })
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) -> Result<(), IpscParseErr> {
        if !self.msg_type.is_long_message() {
            return Err(IpscParseErr::InvalidValue { field: "msg_type", value: self.msg_type.into() });
        }
        expect_span_len(&self.digest, DIGEST_LEN, "digest")?;

        buf.write_u8(self.msg_type.into_raw());
        buf.write_u32(self.repeater_id);
        self.linking.to_bytebuf(buf);
        self.service_flags.to_bytebuf(buf);
        buf.write_u32(self.version);
        buf.write_bytes(self.digest.bytes);
        Ok(())
    }
}

impl fmt::Display for LongMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LongMessage {{ type: {} repeater_id: {} {} {} version: 0x{:08x} digest: {} }}",
            self.msg_type, self.repeater_id, self.linking, self.service_flags, self.version, self.digest
        )
    }
}
