use core::fmt;

use ipsc_core::{ByteBuffer, ByteSpan, ByteWriter, DIGEST_LEN, IpscParseErr, assert_warn, expect_pdu_type};

use crate::enums::{data_type::DataType, msg_type::IpscMsgType};
use crate::fields::burst_payload::{BURST_DATA_OFFSET, BurstPayload};
use crate::fields::call_preamble::CallPreamble;
use crate::fields::csbk_header::{CSBK_HEADER_LEN, CsbkHeader};
use crate::fields::data_header::{DATA_HEADER_LEN, DataHeader};
use crate::pdus::call_ctl::expect_span_len;

/// Structure found at the start of a private data burst region, selected by the data type nibble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PvtDataSubHeader {
    Csbk(CsbkHeader),
    Data(DataHeader),
}

impl PvtDataSubHeader {
    /// Parses the sub-header at the fixed burst data offset. The header is
    /// bounds checked against the whole frame, not the data region, so a
    /// short region lets it overlap the digest.
    fn from_frame(data: &[u8], data_type: DataType, region_len: usize) -> Result<Option<Self>, IpscParseErr> {
        let mut sub = ByteBuffer::new(data);
        sub.seek(BURST_DATA_OFFSET);
        let header_len = match data_type {
            DataType::Csbk => CSBK_HEADER_LEN,
            DataType::DataHeader => DATA_HEADER_LEN,
            _ => return Ok(None),
        };
        assert_warn!(region_len >= header_len, "{} header overlaps the digest, region is {} bytes", data_type, region_len);
        if data_type == DataType::Csbk {
            Ok(Some(PvtDataSubHeader::Csbk(CsbkHeader::from_bytebuf(&mut sub)?)))
        } else {
            Ok(Some(PvtDataSubHeader::Data(DataHeader::from_bytebuf(&mut sub)?)))
        }
    }
}

impl fmt::Display for PvtDataSubHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PvtDataSubHeader::Csbk(h) => fmt::Display::fmt(h, f),
            PvtDataSubHeader::Data(h) => fmt::Display::fmt(h, f),
        }
    }
}

/// Private (individually addressed) data burst (0x84)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PvtData<'a> {
    // 4
    pub repeater_id: u32,
    pub preamble: CallPreamble,
    // 1
    pub rssi_threshold_and_parity: u8,
    /// 2, in 16-bit words, counting the four status bytes
    pub length_to_follow: u16,
    /// Present iff length_to_follow is nonzero
    pub burst: Option<BurstPayload<'a>>,
    /// Decoded view of the start of the burst data region. Composing writes
    /// the data region bytes, this field is not consulted.
    pub sub_header: Option<PvtDataSubHeader>,
    // 10
    pub digest: ByteSpan<'a>,
}

impl<'a> PvtData<'a> {
    pub fn from_bytebuf(buf: &mut ByteBuffer<'a>) -> Result<Self, IpscParseErr> {
        let msg_type = buf.read_u8("msg_type")?;
        expect_pdu_type!(msg_type, IpscMsgType::PvtData)?;

        let repeater_id = buf.read_u32("repeater_id")?;
        let preamble = CallPreamble::from_bytebuf(buf)?;
        let rssi_threshold_and_parity = buf.read_u8("rssi_threshold_and_parity")?;
        let length_to_follow = buf.read_u16("length_to_follow")?;

        let (burst, sub_header) = if length_to_follow == 0 {
            (None, None)
        } else {
            let burst = BurstPayload::from_bytebuf(buf, length_to_follow)?;
            let sub_header = PvtDataSubHeader::from_frame(buf.as_bytes(), preamble.data_type(), burst.data.len())?;
            (Some(burst), sub_header)
        };

        let digest = buf.read_span(DIGEST_LEN, "digest")?;

        tracing::trace!("PvtData: ltf {} data type {} digest at {}", length_to_follow, preamble.data_type(), digest.offset);

        Ok(PvtData {
            repeater_id,
            preamble,
            rssi_threshold_and_parity,
            length_to_follow,
            burst,
            sub_header,
            digest,
        })
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) -> Result<(), IpscParseErr> {
        expect_span_len(&self.digest, DIGEST_LEN, "digest")?;

        buf.write_u8(IpscMsgType::PvtData.into_raw());
        buf.write_u32(self.repeater_id);
        self.preamble.to_bytebuf(buf)?;
        buf.write_u8(self.rssi_threshold_and_parity);
        buf.write_u16(self.length_to_follow);
        match (&self.burst, self.length_to_follow) {
            (None, 0) => {}
            (Some(burst), ltf) if ltf != 0 => burst.to_bytebuf(buf, ltf)?,
            _ => {
                return Err(IpscParseErr::InvalidLength {
                    field: "length_to_follow",
                    value: self.length_to_follow as u64,
                });
            }
        }
        buf.write_bytes(self.digest.bytes);
        Ok(())
    }
}

impl fmt::Display for PvtData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PvtData {{ repeater_id: {} {} rssi_thr_parity: 0x{:02x} ltf: {}",
            self.repeater_id, self.preamble, self.rssi_threshold_and_parity, self.length_to_follow
        )?;
        if let Some(burst) = &self.burst {
            write!(f, " {}", burst)?;
        }
        if let Some(sub_header) = &self.sub_header {
            write!(f, " {}", sub_header)?;
        }
        write!(f, " digest: {} }}", self.digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Header through length_to_follow, 34 bytes
    fn head(data_type: u8, ltf: u16) -> Vec<u8> {
        let mut data = vec![0x84, 0x00, 0x00, 0x00, 0x2a];
        data.extend_from_slice(&[0x01, 0x00, 0x0c, 0x35, 0x00, 0x00, 0x09, 0x00]);
        data.extend_from_slice(&[0u8; 17]);
        data.push(data_type);
        data.push(0x55);
        data.extend_from_slice(&ltf.to_be_bytes());
        data
    }

    #[test]
    fn test_pvt_data_zero_ltf() {
        let mut data = head(0x06, 0);
        data.extend_from_slice(&[0xd0; 10]);
        assert_eq!(data.len(), 44);
        let pdu = PvtData::from_bytebuf(&mut ByteBuffer::new(&data)).unwrap();
        assert_eq!(pdu.repeater_id, 42);
        assert_eq!(pdu.preamble.src_id, 3125);
        assert!(pdu.burst.is_none());
        assert!(pdu.sub_header.is_none());
        assert_eq!(pdu.digest.offset, 34);

        let mut w = ByteWriter::new();
        pdu.to_bytebuf(&mut w).unwrap();
        assert_eq!(w.into_bytes(), data);
    }

    #[test]
    fn test_pvt_data_csbk() {
        let mut data = head(0x03, 8);
        data.extend_from_slice(&[0x01, 0x02, 0x00, 0x0c]);
        data.extend_from_slice(&[0xbd, 0x10, 0x00, 0x01, 0x00, 0x00, 0x63, 0x00, 0x0c, 0x35, 0xbe, 0xef]);
        data.extend_from_slice(&[0xd0; 10]);
        let pdu = PvtData::from_bytebuf(&mut ByteBuffer::new(&data)).unwrap();
        let burst = pdu.burst.unwrap();
        assert_eq!(burst.rssi_status, 0x01);
        assert_eq!(burst.slot_type_sync, 0x02);
        assert_eq!(burst.data_size, 12);
        assert_eq!(burst.data.len(), 12);
        match pdu.sub_header {
            Some(PvtDataSubHeader::Csbk(h)) => {
                assert_eq!(h.dst, 99);
                assert_eq!(h.src, 3125);
            }
            other => panic!("expected CSBK header, got {:?}", other),
        }
        assert_eq!(pdu.digest.offset, 50);

        let mut w = ByteWriter::new();
        pdu.to_bytebuf(&mut w).unwrap();
        assert_eq!(w.into_bytes(), data);
    }

    #[test]
    fn test_pvt_data_ltf_one() {
        let mut data = head(0x06, 1);
        data.extend_from_slice(&[0u8; 30]);
        assert_eq!(
            PvtData::from_bytebuf(&mut ByteBuffer::new(&data)),
            Err(IpscParseErr::InvalidLength { field: "length_to_follow", value: 1 })
        );
    }

    #[test]
    fn test_pvt_data_burst_without_ltf() {
        let mut data = head(0x00, 0);
        data.extend_from_slice(&[0u8; 10]);
        let mut pdu = PvtData::from_bytebuf(&mut ByteBuffer::new(&data)).unwrap();
        pdu.length_to_follow = 2;
        let mut w = ByteWriter::new();
        assert!(pdu.to_bytebuf(&mut w).is_err());
    }
}
