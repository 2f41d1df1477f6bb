use core::fmt;

use ipsc_core::{ByteBuffer, ByteWriter, IpscParseErr, expect_pdu_type};

use crate::enums::msg_type::IpscMsgType;

pub const RPT_WAKE_UP_LEN: usize = 5;

/// Repeater wake-up beacon (0x85). The only message without a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RptWakeUp {
    // 4
    pub repeater_id: u32,
}

impl RptWakeUp {
    pub fn from_bytebuf(buf: &mut ByteBuffer) -> Result<Self, IpscParseErr> {
        let msg_type = buf.read_u8("msg_type")?;
        expect_pdu_type!(msg_type, IpscMsgType::RptWakeUp)?;
        let repeater_id = buf.read_u32("repeater_id")?;
        Ok(RptWakeUp { repeater_id })
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) {
        buf.write_u8(IpscMsgType::RptWakeUp.into_raw());
        buf.write_u32(self.repeater_id);
    }
}

impl fmt::Display for RptWakeUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RptWakeUp {{ repeater_id: {} }}", self.repeater_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wake_up_length() {
        let data = [0x85, 0x00, 0x01, 0x00, 0x01];
        let mut buf = ByteBuffer::new(&data);
        let pdu = RptWakeUp::from_bytebuf(&mut buf).unwrap();
        assert_eq!(pdu.repeater_id, 0x0001_0001);
        assert_eq!(buf.get_pos(), RPT_WAKE_UP_LEN);

        let mut w = ByteWriter::new();
        pdu.to_bytebuf(&mut w);
        assert_eq!(w.get_len(), RPT_WAKE_UP_LEN);

        assert!(RptWakeUp::from_bytebuf(&mut ByteBuffer::new(&data[..RPT_WAKE_UP_LEN - 1])).is_err());
    }
}
