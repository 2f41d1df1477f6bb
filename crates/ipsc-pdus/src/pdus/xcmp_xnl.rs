use core::fmt;

use ipsc_core::{ByteBuffer, ByteSpan, ByteWriter, DIGEST_LEN, IpscParseErr, expect_pdu_type};

use crate::enums::msg_type::IpscMsgType;
use crate::pdus::call_ctl::expect_span_len;

/// XCMP/XNL control message tunnelled between peers (0x70).
/// The payload is carried opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XcmpXnl<'a> {
    // 4
    pub repeater_id: u32,
    /// 2, in bytes
    pub length: u16,
    pub data: ByteSpan<'a>,
    // 10
    pub digest: ByteSpan<'a>,
}

impl<'a> XcmpXnl<'a> {
    pub fn from_bytebuf(buf: &mut ByteBuffer<'a>) -> Result<Self, IpscParseErr> {
        let msg_type = buf.read_u8("msg_type")?;
        expect_pdu_type!(msg_type, IpscMsgType::XcmpXnl)?;

        let repeater_id = buf.read_u32("repeater_id")?;
        let length = buf.read_u16("length")?;
        let data = buf.read_span(length as usize, "data")?;
        let digest = buf.read_span(DIGEST_LEN, "digest")?;

        Ok(XcmpXnl { repeater_id, length, data, digest })
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) -> Result<(), IpscParseErr> {
        expect_span_len(&self.data, self.length as usize, "data")?;
        expect_span_len(&self.digest, DIGEST_LEN, "digest")?;

        buf.write_u8(IpscMsgType::XcmpXnl.into_raw());
        buf.write_u32(self.repeater_id);
        buf.write_u16(self.length);
        buf.write_bytes(self.data.bytes);
        buf.write_bytes(self.digest.bytes);
        Ok(())
    }
}

impl fmt::Display for XcmpXnl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "XcmpXnl {{ repeater_id: {} length: {} data: {} digest: {} }}",
            self.repeater_id, self.length, self.data, self.digest
        )
    }
}
