use core::fmt;

use ipsc_core::{ByteBuffer, ByteSpan, ByteWriter, DIGEST_LEN, IpscParseErr, expect_pdu_type};

use crate::enums::msg_type::IpscMsgType;

pub const CALL_CTL_1_LEN: usize = 36;
pub const CALL_CTL_2_LEN: usize = 17;
pub const CALL_CTL_3_LEN: usize = 16;

const CALL_CTL_1_UNKNOWN_LEN: usize = 17;
const CALL_CTL_2_UNKNOWN_LEN: usize = 2;
const CALL_CTL_3_UNKNOWN_LEN: usize = 1;

/// Checks that a span about to be written has exactly the length its layout dictates
pub(crate) fn expect_span_len(span: &ByteSpan, expected: usize, field: &'static str) -> Result<(), IpscParseErr> {
    if span.len() != expected {
        return Err(IpscParseErr::InvalidLength { field, value: span.len() as u64 });
    }
    Ok(())
}

/// Call control message, variant 1 (0x61).
/// Carries two repeater ids and a block of bytes without known meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallCtl1<'a> {
    // 4
    pub repeater_id: u32,
    // 4
    pub second_repeater_id: u32,
    /// 17 bytes, opaque
    pub unknown: ByteSpan<'a>,
    // 10
    pub digest: ByteSpan<'a>,
}

impl<'a> CallCtl1<'a> {
    pub fn from_bytebuf(buf: &mut ByteBuffer<'a>) -> Result<Self, IpscParseErr> {
        let msg_type = buf.read_u8("msg_type")?;
        expect_pdu_type!(msg_type, IpscMsgType::CallCtl1)?;

        let repeater_id = buf.read_u32("repeater_id")?;
        let second_repeater_id = buf.read_u32("second_repeater_id")?;
        let unknown = buf.read_span(CALL_CTL_1_UNKNOWN_LEN, "unknown")?;
        let digest = buf.read_span(DIGEST_LEN, "digest")?;

        Ok(CallCtl1 { repeater_id, second_repeater_id, unknown, digest })
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) -> Result<(), IpscParseErr> {
        expect_span_len(&self.unknown, CALL_CTL_1_UNKNOWN_LEN, "unknown")?;
        expect_span_len(&self.digest, DIGEST_LEN, "digest")?;

        buf.write_u8(IpscMsgType::CallCtl1.into_raw());
        buf.write_u32(self.repeater_id);
        buf.write_u32(self.second_repeater_id);
        buf.write_bytes(self.unknown.bytes);
        buf.write_bytes(self.digest.bytes);
        Ok(())
    }
}

impl fmt::Display for CallCtl1<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CallCtl1 {{ repeater_id: {} second_repeater_id: {} unknown: {} digest: {} }}",
            self.repeater_id, self.second_repeater_id, self.unknown, self.digest
        )
    }
}

/// Call control message, variant 2 (0x62)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallCtl2<'a> {
    // 4
    pub repeater_id: u32,
    /// 2 bytes, opaque
    pub unknown: ByteSpan<'a>,
    // 10
    pub digest: ByteSpan<'a>,
}

impl<'a> CallCtl2<'a> {
    pub fn from_bytebuf(buf: &mut ByteBuffer<'a>) -> Result<Self, IpscParseErr> {
        let msg_type = buf.read_u8("msg_type")?;
        expect_pdu_type!(msg_type, IpscMsgType::CallCtl2)?;

        let repeater_id = buf.read_u32("repeater_id")?;
        let unknown = buf.read_span(CALL_CTL_2_UNKNOWN_LEN, "unknown")?;
        let digest = buf.read_span(DIGEST_LEN, "digest")?;

        Ok(CallCtl2 { repeater_id, unknown, digest })
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) -> Result<(), IpscParseErr> {
        expect_span_len(&self.unknown, CALL_CTL_2_UNKNOWN_LEN, "unknown")?;
        expect_span_len(&self.digest, DIGEST_LEN, "digest")?;

        buf.write_u8(IpscMsgType::CallCtl2.into_raw());
        buf.write_u32(self.repeater_id);
        buf.write_bytes(self.unknown.bytes);
        buf.write_bytes(self.digest.bytes);
        Ok(())
    }
}

impl fmt::Display for CallCtl2<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CallCtl2 {{ repeater_id: {} unknown: {} digest: {} }}",
            self.repeater_id, self.unknown, self.digest
        )
    }
}

/// Call control message, variant 3 (0x63)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallCtl3<'a> {
    // 4
    pub repeater_id: u32,
    /// 1 byte, opaque
    pub unknown: ByteSpan<'a>,
    // 10
    pub digest: ByteSpan<'a>,
}

impl<'a> CallCtl3<'a> {
    pub fn from_bytebuf(buf: &mut ByteBuffer<'a>) -> Result<Self, IpscParseErr> {
        let msg_type = buf.read_u8("msg_type")?;
        expect_pdu_type!(msg_type, IpscMsgType::CallCtl3)?;

        let repeater_id = buf.read_u32("repeater_id")?;
        let unknown = buf.read_span(CALL_CTL_3_UNKNOWN_LEN, "unknown")?;
        let digest = buf.read_span(DIGEST_LEN, "digest")?;

        Ok(CallCtl3 { repeater_id, unknown, digest })
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) -> Result<(), IpscParseErr> {
        expect_span_len(&self.unknown, CALL_CTL_3_UNKNOWN_LEN, "unknown")?;
        expect_span_len(&self.digest, DIGEST_LEN, "digest")?;

        buf.write_u8(IpscMsgType::CallCtl3.into_raw());
        buf.write_u32(self.repeater_id);
        buf.write_bytes(self.unknown.bytes);
        buf.write_bytes(self.digest.bytes);
        Ok(())
    }
}

impl fmt::Display for CallCtl3<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CallCtl3 {{ repeater_id: {} unknown: {} digest: {} }}",
            self.repeater_id, self.unknown, self.digest
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(msg_type: u8, len: usize) -> Vec<u8> {
        let mut data: Vec<u8> = (0..len as u8).collect();
        data[0] = msg_type;
        data
    }

    #[test]
    fn test_call_ctl_1() {
        let data = frame(0x61, CALL_CTL_1_LEN);
        let mut buf = ByteBuffer::new(&data);
        let pdu = CallCtl1::from_bytebuf(&mut buf).unwrap();
        assert_eq!(pdu.repeater_id, 0x01020304);
        assert_eq!(pdu.second_repeater_id, 0x05060708);
        assert_eq!(pdu.unknown.offset, 9);
        assert_eq!(pdu.unknown.len(), 17);
        assert_eq!(pdu.digest.offset, 26);
        assert_eq!(buf.get_len_remaining(), 0);

        let mut w = ByteWriter::new();
        pdu.to_bytebuf(&mut w).unwrap();
        assert_eq!(w.into_bytes(), data);
    }

    #[test]
    fn test_call_ctl_2_and_3() {
        let data = frame(0x62, CALL_CTL_2_LEN);
        let pdu = CallCtl2::from_bytebuf(&mut ByteBuffer::new(&data)).unwrap();
        assert_eq!(pdu.unknown.bytes, &[5, 6]);
        assert_eq!(pdu.digest.offset, 7);

        let data = frame(0x63, CALL_CTL_3_LEN);
        let pdu = CallCtl3::from_bytebuf(&mut ByteBuffer::new(&data)).unwrap();
        assert_eq!(pdu.unknown.bytes, &[5]);
        assert_eq!(pdu.digest.offset, 6);
        let mut w = ByteWriter::new();
        pdu.to_bytebuf(&mut w).unwrap();
        assert_eq!(w.into_bytes(), data);
    }

    #[test]
    fn test_call_ctl_truncated() {
        let data = frame(0x61, CALL_CTL_1_LEN - 1);
        assert!(matches!(
            CallCtl1::from_bytebuf(&mut ByteBuffer::new(&data)),
            Err(IpscParseErr::Truncated { field: "digest", offset: 26, .. })
        ));
    }

    #[test]
    fn test_call_ctl_wrong_type() {
        let data = frame(0x62, CALL_CTL_1_LEN);
        assert_eq!(
            CallCtl1::from_bytebuf(&mut ByteBuffer::new(&data)),
            Err(IpscParseErr::InvalidPduType { expected: 0x61, found: 0x62 })
        );
    }
}
