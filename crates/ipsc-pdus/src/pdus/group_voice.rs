use core::fmt;

use ipsc_core::{ByteBuffer, ByteSpan, ByteWriter, DIGEST_LEN, IpscParseErr, assert_warn, expect_pdu_type};

use crate::enums::{data_type::DataType, msg_type::IpscMsgType};
use crate::fields::burst_payload::{BURST_DATA_OFFSET, BurstPayload};
use crate::fields::call_preamble::{CallPreamble, DATA_TYPE_OFFSET};
use crate::fields::full_lc::{FULL_LC_LEN, FullLcVoicePdu};
use crate::pdus::call_ctl::expect_span_len;

/// Status bytes, link control header and digest of a voice LC header or terminator burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceLcBurst<'a> {
    pub payload: BurstPayload<'a>,
    /// View of the first bytes of the data region
    pub full_lc: FullLcVoicePdu,
    // 10
    pub digest: ByteSpan<'a>,
}

/// Layout of a group voice burst after the call preamble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupVoiceBody<'a> {
    /// Voice LC header (0x1) and terminator with LC (0x2)
    VoiceLc {
        rssi_threshold_and_parity: u8,
        /// In 16-bit words. Zero means the burst ends here, without a digest.
        length_to_follow: u16,
        burst: Option<VoiceLcBurst<'a>>,
    },
    /// Rate 1 data (0xa), length counted in bytes
    Rate1Data { length_to_follow: u8, data: ByteSpan<'a>, digest: ByteSpan<'a> },
    /// Any other data type; the digest starts at the data type byte itself
    Other { digest: ByteSpan<'a> },
}

/// Group voice burst (0x80)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupVoice<'a> {
    // 4
    pub repeater_id: u32,
    pub preamble: CallPreamble,
    pub body: GroupVoiceBody<'a>,
}

impl<'a> GroupVoice<'a> {
    pub fn from_bytebuf(buf: &mut ByteBuffer<'a>) -> Result<Self, IpscParseErr> {
        let msg_type = buf.read_u8("msg_type")?;
        expect_pdu_type!(msg_type, IpscMsgType::GroupVoice)?;

        let repeater_id = buf.read_u32("repeater_id")?;
        let preamble = CallPreamble::from_bytebuf(buf)?;

        let body = match preamble.data_type() {
            DataType::VoiceLcHeader | DataType::TerminatorWithLc => {
                let rssi_threshold_and_parity = buf.read_u8("rssi_threshold_and_parity")?;
                let length_to_follow = buf.read_u16("length_to_follow")?;
                let burst = if length_to_follow == 0 {
                    None
                } else {
                    let payload = BurstPayload::from_bytebuf(buf, length_to_follow)?;
                    assert_warn!(payload.data.len() >= FULL_LC_LEN, "full LC overlaps the digest, region is {} bytes", payload.data.len());
                    let mut lc = ByteBuffer::new(buf.as_bytes());
                    lc.seek(BURST_DATA_OFFSET);
                    let full_lc = FullLcVoicePdu::from_bytebuf(&mut lc)?;
                    let digest = buf.read_span(DIGEST_LEN, "digest")?;
                    Some(VoiceLcBurst { payload, full_lc, digest })
                };
                GroupVoiceBody::VoiceLc { rssi_threshold_and_parity, length_to_follow, burst }
            }
            DataType::Rate1Data => {
                let length_to_follow = buf.read_u8("length_to_follow")?;
                let data = buf.read_span(length_to_follow as usize, "data")?;
                let digest = buf.read_span(DIGEST_LEN, "digest")?;
                GroupVoiceBody::Rate1Data { length_to_follow, data, digest }
            }
            _ => {
                buf.seek(DATA_TYPE_OFFSET);
                GroupVoiceBody::Other { digest: buf.read_span(DIGEST_LEN, "digest")? }
            }
        };

        tracing::trace!("GroupVoice: data type {} ends at {}", preamble.data_type(), buf.get_pos());

        Ok(GroupVoice { repeater_id, preamble, body })
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) -> Result<(), IpscParseErr> {
        // The body variant is implied by the data type, a mismatch would not decode back
        let data_type = self.preamble.data_type();
        let consistent = match self.body {
            GroupVoiceBody::VoiceLc { .. } => matches!(data_type, DataType::VoiceLcHeader | DataType::TerminatorWithLc),
            GroupVoiceBody::Rate1Data { .. } => data_type == DataType::Rate1Data,
            GroupVoiceBody::Other { .. } => !matches!(
                data_type,
                DataType::VoiceLcHeader | DataType::TerminatorWithLc | DataType::Rate1Data
            ),
        };
        if !consistent {
            return Err(IpscParseErr::InvalidValue {
                field: "data_type_voice_hdr",
                value: self.preamble.data_type_voice_hdr as u64,
            });
        }

        buf.write_u8(IpscMsgType::GroupVoice.into_raw());
        buf.write_u32(self.repeater_id);

        match &self.body {
            GroupVoiceBody::VoiceLc { rssi_threshold_and_parity, length_to_follow, burst } => {
                self.preamble.to_bytebuf(buf)?;
                buf.write_u8(*rssi_threshold_and_parity);
                buf.write_u16(*length_to_follow);
                match (burst, *length_to_follow) {
                    (None, 0) => {}
                    (Some(burst), ltf) if ltf != 0 => {
                        expect_span_len(&burst.digest, DIGEST_LEN, "digest")?;
                        burst.payload.to_bytebuf(buf, ltf)?;
                        buf.write_bytes(burst.digest.bytes);
                    }
                    _ => {
                        return Err(IpscParseErr::InvalidLength {
                            field: "length_to_follow",
                            value: *length_to_follow as u64,
                        });
                    }
                }
            }
            GroupVoiceBody::Rate1Data { length_to_follow, data, digest } => {
                if data.len() != *length_to_follow as usize {
                    return Err(IpscParseErr::InvalidLength { field: "length_to_follow", value: *length_to_follow as u64 });
                }
                expect_span_len(digest, DIGEST_LEN, "digest")?;
                self.preamble.to_bytebuf(buf)?;
                buf.write_u8(*length_to_follow);
                buf.write_bytes(data.bytes);
                buf.write_bytes(digest.bytes);
            }
            GroupVoiceBody::Other { digest } => {
                // The digest's first byte is the data type byte already written with the preamble
                expect_span_len(digest, DIGEST_LEN, "digest")?;
                if digest.bytes[0] != self.preamble.data_type_voice_hdr {
                    return Err(IpscParseErr::InvalidValue { field: "digest", value: digest.bytes[0] as u64 });
                }
                self.preamble.to_bytebuf(buf)?;
                buf.write_bytes(&digest.bytes[1..]);
            }
        }
        Ok(())
    }

    pub fn digest(&self) -> Option<ByteSpan<'a>> {
        match self.body {
            GroupVoiceBody::VoiceLc { burst, .. } => burst.map(|b| b.digest),
            GroupVoiceBody::Rate1Data { digest, .. } => Some(digest),
            GroupVoiceBody::Other { digest } => Some(digest),
        }
    }
}

impl fmt::Display for GroupVoice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupVoice {{ repeater_id: {} {}", self.repeater_id, self.preamble)?;
        match &self.body {
            GroupVoiceBody::VoiceLc { rssi_threshold_and_parity, length_to_follow, burst } => {
                write!(f, " rssi_thr_parity: 0x{:02x} ltf: {}", rssi_threshold_and_parity, length_to_follow)?;
                if let Some(burst) = burst {
                    write!(f, " {} {} digest: {}", burst.payload, burst.full_lc, burst.digest)?;
                }
            }
            GroupVoiceBody::Rate1Data { length_to_follow, data, digest } => {
                write!(f, " ltf: {} data: {} digest: {}", length_to_follow, data, digest)?;
            }
            GroupVoiceBody::Other { digest } => {
                write!(f, " digest: {}", digest)?;
            }
        }
        write!(f, " }}")
    }
}
