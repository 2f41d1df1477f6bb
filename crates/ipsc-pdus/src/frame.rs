use core::fmt;

use ipsc_core::{ByteBuffer, ByteSpan, ByteWriter, IpscParseErr, unimplemented_log};

use crate::enums::msg_type::IpscMsgType;
use crate::pdus::call_ctl::{CallCtl1, CallCtl2, CallCtl3};
use crate::pdus::group_voice::GroupVoice;
use crate::pdus::long_message::LongMessage;
use crate::pdus::pvt_data::PvtData;
use crate::pdus::rpt_wake_up::RptWakeUp;
use crate::pdus::short_message::ShortMessage;
use crate::pdus::xcmp_xnl::XcmpXnl;

/// One decoded IPSC datagram. Opaque regions borrow from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame<'a> {
    CallCtl1(CallCtl1<'a>),
    CallCtl2(CallCtl2<'a>),
    CallCtl3(CallCtl3<'a>),
    XcmpXnl(XcmpXnl<'a>),
    GroupVoice(GroupVoice<'a>),
    PvtData(PvtData<'a>),
    RptWakeUp(RptWakeUp),
    LongMessage(LongMessage<'a>),
    ShortMessage(ShortMessage<'a>),
    /// Type byte without a known layout; nothing beyond it is decoded
    Unrecognized { msg_type: u8 },
}

/// Decode one datagram. Bytes following the end of the message layout are ignored.
pub fn decode(data: &[u8]) -> Result<Frame<'_>, IpscParseErr> {
    let mut buf = ByteBuffer::new(data);
    let raw_type = buf.peek_u8_at(0, "msg_type")?;

    let frame = match IpscMsgType::try_from(raw_type as u64) {
        Ok(IpscMsgType::CallCtl1) => Frame::CallCtl1(CallCtl1::from_bytebuf(&mut buf)?),
        Ok(IpscMsgType::CallCtl2) => Frame::CallCtl2(CallCtl2::from_bytebuf(&mut buf)?),
        Ok(IpscMsgType::CallCtl3) => Frame::CallCtl3(CallCtl3::from_bytebuf(&mut buf)?),
        Ok(IpscMsgType::XcmpXnl) => Frame::XcmpXnl(XcmpXnl::from_bytebuf(&mut buf)?),
        Ok(IpscMsgType::GroupVoice) => Frame::GroupVoice(GroupVoice::from_bytebuf(&mut buf)?),
        Ok(IpscMsgType::PvtData) => Frame::PvtData(PvtData::from_bytebuf(&mut buf)?),
        Ok(IpscMsgType::RptWakeUp) => Frame::RptWakeUp(RptWakeUp::from_bytebuf(&mut buf)?),
        Ok(IpscMsgType::PeerListReq) => Frame::ShortMessage(ShortMessage::from_bytebuf(&mut buf)?),
        Ok(
            IpscMsgType::MasterRegReq
            | IpscMsgType::MasterRegReply
            | IpscMsgType::PeerRegReq
            | IpscMsgType::PeerRegReply
            | IpscMsgType::MasterAliveReq
            | IpscMsgType::MasterAliveReply
            | IpscMsgType::PeerAliveReq
            | IpscMsgType::PeerAliveReply,
        ) => Frame::LongMessage(LongMessage::from_bytebuf(&mut buf)?),
        Ok(t @ (IpscMsgType::GroupData | IpscMsgType::DeRegReq | IpscMsgType::DeRegReply)) => {
            unimplemented_log!("no layout known for {} (0x{:02x})", t, raw_type);
            Frame::Unrecognized { msg_type: raw_type }
        }
        Err(()) => {
            tracing::debug!("unrecognized message type 0x{:02x}", raw_type);
            Frame::Unrecognized { msg_type: raw_type }
        }
    };

    if buf.get_len_remaining() > 0 && !matches!(frame, Frame::Unrecognized { .. }) {
        tracing::trace!("ignoring {} trailing bytes after {}", buf.get_len_remaining(), frame.kind_name());
    }
    tracing::trace!("decoded {}", frame);
    Ok(frame)
}

impl<'a> Frame<'a> {
    /// Raw type byte this frame was decoded from
    pub fn msg_type(&self) -> u8 {
        match self {
            Frame::CallCtl1(_) => IpscMsgType::CallCtl1.into_raw(),
            Frame::CallCtl2(_) => IpscMsgType::CallCtl2.into_raw(),
            Frame::CallCtl3(_) => IpscMsgType::CallCtl3.into_raw(),
            Frame::XcmpXnl(_) => IpscMsgType::XcmpXnl.into_raw(),
            Frame::GroupVoice(_) => IpscMsgType::GroupVoice.into_raw(),
            Frame::PvtData(_) => IpscMsgType::PvtData.into_raw(),
            Frame::RptWakeUp(_) => IpscMsgType::RptWakeUp.into_raw(),
            Frame::LongMessage(m) => m.msg_type.into_raw(),
            Frame::ShortMessage(_) => IpscMsgType::PeerListReq.into_raw(),
            Frame::Unrecognized { msg_type } => *msg_type,
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Frame::CallCtl1(_) => "CallCtl1",
            Frame::CallCtl2(_) => "CallCtl2",
            Frame::CallCtl3(_) => "CallCtl3",
            Frame::XcmpXnl(_) => "XcmpXnl",
            Frame::GroupVoice(_) => "GroupVoice",
            Frame::PvtData(_) => "PvtData",
            Frame::RptWakeUp(_) => "RptWakeUp",
            Frame::LongMessage(_) => "LongMessage",
            Frame::ShortMessage(_) => "ShortMessage",
            Frame::Unrecognized { .. } => "Unrecognized",
        }
    }

    pub fn repeater_id(&self) -> Option<u32> {
        match self {
            Frame::CallCtl1(p) => Some(p.repeater_id),
            Frame::CallCtl2(p) => Some(p.repeater_id),
            Frame::CallCtl3(p) => Some(p.repeater_id),
            Frame::XcmpXnl(p) => Some(p.repeater_id),
            Frame::GroupVoice(p) => Some(p.repeater_id),
            Frame::PvtData(p) => Some(p.repeater_id),
            Frame::RptWakeUp(p) => Some(p.repeater_id),
            Frame::LongMessage(p) => Some(p.repeater_id),
            Frame::ShortMessage(p) => Some(p.repeater_id),
            Frame::Unrecognized { .. } => None,
        }
    }

    /// Trailing authentication digest, if this frame carries one
    pub fn digest(&self) -> Option<ByteSpan<'a>> {
        match self {
            Frame::CallCtl1(p) => Some(p.digest),
            Frame::CallCtl2(p) => Some(p.digest),
            Frame::CallCtl3(p) => Some(p.digest),
            Frame::XcmpXnl(p) => Some(p.digest),
            Frame::GroupVoice(p) => p.digest(),
            Frame::PvtData(p) => Some(p.digest),
            Frame::LongMessage(p) => Some(p.digest),
            Frame::ShortMessage(p) => Some(p.digest),
            Frame::RptWakeUp(_) | Frame::Unrecognized { .. } => None,
        }
    }

    /// Turns an unrecognized frame into an error, for callers that only handle known layouts
    pub fn check_recognized(&self) -> Result<&Self, IpscParseErr> {
        match self {
            Frame::Unrecognized { msg_type } => Err(IpscParseErr::UnrecognizedType { found: *msg_type }),
            _ => Ok(self),
        }
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) -> Result<(), IpscParseErr> {
        match self {
            Frame::CallCtl1(p) => p.to_bytebuf(buf),
            Frame::CallCtl2(p) => p.to_bytebuf(buf),
            Frame::CallCtl3(p) => p.to_bytebuf(buf),
            Frame::XcmpXnl(p) => p.to_bytebuf(buf),
            Frame::GroupVoice(p) => p.to_bytebuf(buf),
            Frame::PvtData(p) => p.to_bytebuf(buf),
            Frame::RptWakeUp(p) => {
                p.to_bytebuf(buf);
                Ok(())
            }
            Frame::LongMessage(p) => p.to_bytebuf(buf),
            Frame::ShortMessage(p) => p.to_bytebuf(buf),
            Frame::Unrecognized { msg_type } => Err(IpscParseErr::UnrecognizedType { found: *msg_type }),
        }
    }

    /// Compose this frame into a fresh buffer
    pub fn to_bytes(&self) -> Result<Vec<u8>, IpscParseErr> {
        let mut buf = ByteWriter::with_capacity(64);
        self.to_bytebuf(&mut buf)?;
        Ok(buf.into_bytes())
    }
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::CallCtl1(p) => fmt::Display::fmt(p, f),
            Frame::CallCtl2(p) => fmt::Display::fmt(p, f),
            Frame::CallCtl3(p) => fmt::Display::fmt(p, f),
            Frame::XcmpXnl(p) => fmt::Display::fmt(p, f),
            Frame::GroupVoice(p) => fmt::Display::fmt(p, f),
            Frame::PvtData(p) => fmt::Display::fmt(p, f),
            Frame::RptWakeUp(p) => fmt::Display::fmt(p, f),
            Frame::LongMessage(p) => fmt::Display::fmt(p, f),
            Frame::ShortMessage(p) => fmt::Display::fmt(p, f),
            Frame::Unrecognized { msg_type } => write!(f, "Unrecognized {{ msg_type: 0x{:02x} }}", msg_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer() {
        assert_eq!(
            decode(&[]),
            Err(IpscParseErr::Truncated { field: "msg_type", offset: 0, len: 1, available: 0 })
        );
    }

    #[test]
    fn test_unrecognized() {
        let frame = decode(&[0xff, 0x01, 0x02]).unwrap();
        assert_eq!(frame, Frame::Unrecognized { msg_type: 0xff });
        assert_eq!(frame.msg_type(), 0xff);
        assert_eq!(frame.repeater_id(), None);
        assert_eq!(frame.check_recognized(), Err(IpscParseErr::UnrecognizedType { found: 0xff }));
        assert!(frame.to_bytes().is_err());
    }

    #[test]
    fn test_labelled_but_unhandled_types() {
        for t in [0x83u8, 0x9a, 0x9b] {
            assert_eq!(decode(&[t]).unwrap(), Frame::Unrecognized { msg_type: t });
        }
    }

    #[test]
    fn test_wake_up() {
        let data = [0x85, 0x00, 0x00, 0x30, 0x39];
        let frame = decode(&data).unwrap();
        assert_eq!(frame, Frame::RptWakeUp(RptWakeUp { repeater_id: 12345 }));
        assert_eq!(frame.digest(), None);
        assert!(frame.check_recognized().is_ok());
        assert_eq!(frame.to_bytes().unwrap(), data);
        assert_eq!(frame.to_string(), "RptWakeUp { repeater_id: 12345 }");
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let data = [0x85, 0x00, 0x00, 0x30, 0x39, 0xee, 0xee];
        let frame = decode(&data).unwrap();
        assert_eq!(frame.repeater_id(), Some(12345));
        assert_eq!(frame.to_bytes().unwrap(), &data[..5]);
    }
}
