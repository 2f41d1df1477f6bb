use core::fmt;

use ipsc_core::{ByteBuffer, ByteWriter, IpscParseErr, bitfield, expect_fits, let_field};

use crate::enums::{data_packet_format::DataPacketFormat, service_access_point::ServiceAccessPoint};

pub const DATA_HEADER_LEN: usize = 12;

pub const BYTE1_GROUP_MASK: u8 = 0x80;
pub const BYTE1_ACK_REQUESTED_MASK: u8 = 0x40;
pub const BYTE1_HEADER_COMPRESSION_MASK: u8 = 0x20;
pub const BYTE1_POC_MSB_MASK: u8 = 0x10;
pub const BYTE1_DPF_MASK: u8 = 0x0f;
pub const BYTE2_SAP_MASK: u8 = 0xf0;
pub const BYTE2_POC_MASK: u8 = 0x0f;
pub const BYTE8_FULL_MESSAGE_MASK: u8 = 0x80;
pub const BYTE8_BLOCKS_TO_FOLLOW_MASK: u8 = 0x7f;
pub const BYTE9_RESYNC_MASK: u8 = 0x80;
pub const BYTE9_SEND_SEQ_MASK: u8 = 0x70;
pub const BYTE9_NIBBLE1_MASK: u8 = 0xf0;
pub const BYTE9_FSN_MASK: u8 = 0x0f;

/// Data header byte 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataHeaderByte1 {
    /// G/I, set for group addressed data
    pub group: bool,
    /// A, response requested
    pub ack_requested: bool,
    /// HC
    pub header_compression: bool,
    /// Most significant bit of the pad octet count
    pub poc_msb: bool,
    /// Data packet format, 4 bits. Kept raw since not every value is assigned.
    pub dpf: u8,
}

impl DataHeaderByte1 {
    pub fn from_byte(byte: u8) -> Self {
        DataHeaderByte1 {
            group: bitfield::flag(byte, BYTE1_GROUP_MASK),
            ack_requested: bitfield::flag(byte, BYTE1_ACK_REQUESTED_MASK),
            header_compression: bitfield::flag(byte, BYTE1_HEADER_COMPRESSION_MASK),
            poc_msb: bitfield::flag(byte, BYTE1_POC_MSB_MASK),
            dpf: bitfield::extract(byte, BYTE1_DPF_MASK),
        }
    }

    pub fn to_byte(&self) -> u8 {
        let mut b = bitfield::insert(0, BYTE1_DPF_MASK, self.dpf);
        b = bitfield::set_flag(b, BYTE1_GROUP_MASK, self.group);
        b = bitfield::set_flag(b, BYTE1_ACK_REQUESTED_MASK, self.ack_requested);
        b = bitfield::set_flag(b, BYTE1_HEADER_COMPRESSION_MASK, self.header_compression);
        bitfield::set_flag(b, BYTE1_POC_MSB_MASK, self.poc_msb)
    }

    pub fn packet_format(&self) -> Option<DataPacketFormat> {
        DataPacketFormat::try_from(self.dpf as u64).ok()
    }
}

/// Data header byte 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataHeaderByte2 {
    /// Service access point, 4 bits
    pub sap: u8,
    /// Pad octet count, low 4 bits
    pub poc: u8,
}

impl DataHeaderByte2 {
    pub fn from_byte(byte: u8) -> Self {
        DataHeaderByte2 {
            sap: bitfield::extract(byte, BYTE2_SAP_MASK),
            poc: bitfield::extract(byte, BYTE2_POC_MASK),
        }
    }

    pub fn to_byte(&self) -> u8 {
        bitfield::insert(bitfield::insert(0, BYTE2_SAP_MASK, self.sap), BYTE2_POC_MASK, self.poc)
    }

    pub fn service_access_point(&self) -> ServiceAccessPoint {
        ServiceAccessPoint::from_raw(self.sap)
    }
}

/// Data header byte 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataHeaderByte8 {
    /// F, set when this header carries a full message
    pub full_message: bool,
    // 7
    pub blocks_to_follow: u8,
}

impl DataHeaderByte8 {
    pub fn from_byte(byte: u8) -> Self {
        DataHeaderByte8 {
            full_message: bitfield::flag(byte, BYTE8_FULL_MESSAGE_MASK),
            blocks_to_follow: bitfield::extract(byte, BYTE8_BLOCKS_TO_FOLLOW_MASK),
        }
    }

    pub fn to_byte(&self) -> u8 {
        let b = bitfield::insert(0, BYTE8_BLOCKS_TO_FOLLOW_MASK, self.blocks_to_follow);
        bitfield::set_flag(b, BYTE8_FULL_MESSAGE_MASK, self.full_message)
    }
}

/// High nibble of data header byte 9. Its meaning depends on byte 1's ack-requested bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataHeaderSequence {
    /// Ack requested: S and N(S)
    Confirmed { resync: bool, send_seq: u8 },
    /// No ack requested: undefined nibble, kept raw
    Unconfirmed { nibble1: u8 },
}

/// Data header byte 9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataHeaderByte9 {
    pub sequence: DataHeaderSequence,
    /// Fragment sequence number, 4 bits
    pub fsn: u8,
}

impl DataHeaderByte9 {
    pub fn from_byte(byte: u8, ack_requested: bool) -> Self {
        let sequence = if ack_requested {
            DataHeaderSequence::Confirmed {
                resync: bitfield::flag(byte, BYTE9_RESYNC_MASK),
                send_seq: bitfield::extract(byte, BYTE9_SEND_SEQ_MASK),
            }
        } else {
            DataHeaderSequence::Unconfirmed { nibble1: bitfield::extract(byte, BYTE9_NIBBLE1_MASK) }
        };
        DataHeaderByte9 { sequence, fsn: bitfield::extract(byte, BYTE9_FSN_MASK) }
    }

    pub fn to_byte(&self) -> u8 {
        let b = bitfield::insert(0, BYTE9_FSN_MASK, self.fsn);
        match self.sequence {
            DataHeaderSequence::Confirmed { resync, send_seq } => {
                let b = bitfield::insert(b, BYTE9_SEND_SEQ_MASK, send_seq);
                bitfield::set_flag(b, BYTE9_RESYNC_MASK, resync)
            }
            DataHeaderSequence::Unconfirmed { nibble1 } => bitfield::insert(b, BYTE9_NIBBLE1_MASK, nibble1),
        }
    }
}

/// Header block of a DMR data transfer, found at the start of a data header burst region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataHeader {
    pub byte1: DataHeaderByte1,
    pub byte2: DataHeaderByte2,
    // 3
    pub dst: u32,
    // 3
    pub src: u32,
    pub byte8: DataHeaderByte8,
    pub byte9: DataHeaderByte9,
    // 2
    pub crc: u16,
}

impl DataHeader {
    pub fn from_bytebuf(buf: &mut ByteBuffer) -> Result<Self, IpscParseErr> {
        let byte1 = DataHeaderByte1::from_byte(buf.read_u8("data_header_byte1")?);
        let byte2 = DataHeaderByte2::from_byte(buf.read_u8("data_header_byte2")?);
        let_field!(buf, dst: u32, 3);
        let_field!(buf, src: u32, 3);
        let byte8 = DataHeaderByte8::from_byte(buf.read_u8("data_header_byte8")?);
        let byte9 = DataHeaderByte9::from_byte(buf.read_u8("data_header_byte9")?, byte1.ack_requested);
        let_field!(buf, crc: u16, 2);

        Ok(DataHeader { byte1, byte2, dst, src, byte8, byte9, crc })
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) -> Result<(), IpscParseErr> {
        expect_fits!(self.dst, 24, "dst")?;
        expect_fits!(self.src, 24, "src")?;

        // The sequence nibble layout must agree with the A bit, or the byte would decode differently
        let confirmed = matches!(self.byte9.sequence, DataHeaderSequence::Confirmed { .. });
        if confirmed != self.byte1.ack_requested {
            return Err(IpscParseErr::InvalidValue { field: "data_header_byte9", value: self.byte9.to_byte() as u64 });
        }

        buf.write_u8(self.byte1.to_byte());
        buf.write_u8(self.byte2.to_byte());
        buf.write_u24(self.dst);
        buf.write_u24(self.src);
        buf.write_u8(self.byte8.to_byte());
        buf.write_u8(self.byte9.to_byte());
        buf.write_u16(self.crc);
        Ok(())
    }
}

impl fmt::Display for DataHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dpf = match self.byte1.packet_format() {
            Some(dpf) => dpf.to_string(),
            None => format!("Unknown ({})", self.byte1.dpf),
        };
        write!(
            f,
            "DataHeader {{ group: {} ack: {} hc: {} poc_msb: {} dpf: {} sap: {} poc: {} dst: {} src: {} full: {} btf: {} seq: {:?} fsn: {} crc: 0x{:04x} }}",
            self.byte1.group,
            self.byte1.ack_requested,
            self.byte1.header_compression,
            self.byte1.poc_msb,
            dpf,
            self.byte2.service_access_point(),
            self.byte2.poc,
            self.dst,
            self.src,
            self.byte8.full_message,
            self.byte8.blocks_to_follow,
            self.byte9.sequence,
            self.byte9.fsn,
            self.crc,
        )
    }
}
