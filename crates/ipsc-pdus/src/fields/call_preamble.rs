use core::fmt;

use ipsc_core::{ByteBuffer, ByteWriter, IpscParseErr, expect_fits, let_field};

use crate::enums::data_type::DataType;

/// Offset of the data type byte within group voice and private data frames
pub const DATA_TYPE_OFFSET: usize = 30;

/// Call preamble shared by group voice and private data bursts.
/// Occupies bytes 5..=30, directly after the repeater id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallPreamble {
    // 1
    pub seq_no: u8,
    // 3
    pub src_id: u32,
    // 3
    pub dst_id: u32,
    // 1
    pub priority: u8,
    // 4
    pub call_ctrl: u32,
    // 1
    pub call_ctrl_info: u8,
    // 1
    pub call_ctrl_src: u8,
    // 1
    pub payload_type: u8,
    // 2
    pub call_seq_no: u16,
    // 4
    pub timestamp: u32,
    // 4
    pub sync_src: u32,
    /// 1, low nibble selects the burst layout
    pub data_type_voice_hdr: u8,
}

impl CallPreamble {
    pub fn from_bytebuf(buf: &mut ByteBuffer) -> Result<Self, IpscParseErr> {
        let_field!(buf, seq_no: u8, 1);
        let_field!(buf, src_id: u32, 3);
        let_field!(buf, dst_id: u32, 3);
        let_field!(buf, priority: u8, 1);
        let_field!(buf, call_ctrl: u32, 4);
        let_field!(buf, call_ctrl_info: u8, 1);
        let_field!(buf, call_ctrl_src: u8, 1);
        let_field!(buf, payload_type: u8, 1);
        let_field!(buf, call_seq_no: u16, 2);
        let_field!(buf, timestamp: u32, 4);
        let_field!(buf, sync_src: u32, 4);
        let_field!(buf, data_type_voice_hdr: u8, 1);

        Ok(CallPreamble {
            seq_no,
            src_id,
            dst_id,
            priority,
            call_ctrl,
            call_ctrl_info,
            call_ctrl_src,
            payload_type,
            call_seq_no,
            timestamp,
            sync_src,
            data_type_voice_hdr,
        })
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) -> Result<(), IpscParseErr> {
        expect_fits!(self.src_id, 24, "src_id")?;
        expect_fits!(self.dst_id, 24, "dst_id")?;

        buf.write_u8(self.seq_no);
        buf.write_u24(self.src_id);
        buf.write_u24(self.dst_id);
        buf.write_u8(self.priority);
        buf.write_u32(self.call_ctrl);
        buf.write_u8(self.call_ctrl_info);
        buf.write_u8(self.call_ctrl_src);
        buf.write_u8(self.payload_type);
        buf.write_u16(self.call_seq_no);
        buf.write_u32(self.timestamp);
        buf.write_u32(self.sync_src);
        buf.write_u8(self.data_type_voice_hdr);
        Ok(())
    }

    pub fn data_type(&self) -> DataType {
        DataType::from_raw(self.data_type_voice_hdr)
    }
}

impl fmt::Display for CallPreamble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seq_no: {} src: {} dst: {} prio: {} call_ctrl: 0x{:08x} call_ctrl_info: 0x{:02x} call_ctrl_src: {} payload_type: {} call_seq_no: {} ts: {} sync_src: {} data_type: {}",
            self.seq_no,
            self.src_id,
            self.dst_id,
            self.priority,
            self.call_ctrl,
            self.call_ctrl_info,
            self.call_ctrl_src,
            self.payload_type,
            self.call_seq_no,
            self.timestamp,
            self.sync_src,
            self.data_type(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_layout() {
        let mut data = vec![0u8; 5];
        data.extend_from_slice(&[
            0x07, // seq_no
            0x00, 0x0c, 0x35, // src
            0x00, 0x00, 0x09, // dst
            0x02, // priority
            0x00, 0x00, 0x12, 0x34, // call_ctrl
            0x40, 0x01, 0x5d, // info, src, payload type
            0xab, 0xcd, // call_seq_no
            0x00, 0x01, 0x02, 0x03, // timestamp
            0x11, 0x22, 0x33, 0x44, // sync_src
            0x36, // data type (low nibble 6)
        ]);
        let mut buf = ByteBuffer::new(&data);
        buf.seek(5);
        let p = CallPreamble::from_bytebuf(&mut buf).unwrap();
        assert_eq!(buf.get_pos(), DATA_TYPE_OFFSET + 1);
        assert_eq!(p.src_id, 3125);
        assert_eq!(p.dst_id, 9);
        assert_eq!(p.call_ctrl, 0x1234);
        assert_eq!(p.call_seq_no, 0xabcd);
        assert_eq!(p.sync_src, 0x11223344);
        assert_eq!(p.data_type(), DataType::DataHeader);

        let mut w = ByteWriter::new();
        p.to_bytebuf(&mut w).unwrap();
        assert_eq!(w.as_bytes(), &data[5..]);
    }

    #[test]
    fn test_preamble_rejects_wide_id() {
        let p = CallPreamble { dst_id: 0x0100_0000, ..Default::default() };
        let mut w = ByteWriter::new();
        assert_eq!(
            p.to_bytebuf(&mut w),
            Err(IpscParseErr::InvalidValue { field: "dst_id", value: 0x0100_0000 })
        );
    }
}
