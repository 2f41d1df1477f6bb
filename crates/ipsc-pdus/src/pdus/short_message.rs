use core::fmt;

use ipsc_core::{ByteBuffer, ByteSpan, ByteWriter, DIGEST_LEN, IpscParseErr, expect_pdu_type};

use crate::enums::msg_type::IpscMsgType;
use crate::pdus::call_ctl::expect_span_len;

pub const SHORT_MESSAGE_LEN: usize = 24;
const SHORT_MESSAGE_PADDING_LEN: usize = 9;

/// Peer list request (0x92)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortMessage<'a> {
    // 4
    pub repeater_id: u32,
    /// Bytes 5..=13, no known meaning
    pub padding: ByteSpan<'a>,
    // 10
    pub digest: ByteSpan<'a>,
}

impl<'a> ShortMessage<'a> {
    pub fn from_bytebuf(buf: &mut ByteBuffer<'a>) -> Result<Self, IpscParseErr> {
        let msg_type = buf.read_u8("msg_type")?;
        expect_pdu_type!(msg_type, IpscMsgType::PeerListReq)?;

        let repeater_id = buf.read_u32("repeater_id")?;
        let padding = buf.read_span(SHORT_MESSAGE_PADDING_LEN, "padding")?;
        let digest = buf.read_span(DIGEST_LEN, "digest")?;

        Ok(ShortMessage { repeater_id, padding, digest })
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) -> Result<(), IpscParseErr> {
        expect_span_len(&self.padding, SHORT_MESSAGE_PADDING_LEN, "padding")?;
        expect_span_len(&self.digest, DIGEST_LEN, "digest")?;

        buf.write_u8(IpscMsgType::PeerListReq.into_raw());
        buf.write_u32(self.repeater_id);
        buf.write_bytes(self.padding.bytes);
        buf.write_bytes(self.digest.bytes);
        Ok(())
    }
}

impl fmt::Display for ShortMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShortMessage {{ repeater_id: {} digest: {} }}", self.repeater_id, self.digest)
    }
}
