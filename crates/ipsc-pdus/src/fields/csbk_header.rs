use core::fmt;

use ipsc_core::{ByteBuffer, ByteWriter, IpscParseErr, expect_fits, let_field};

pub const CSBK_HEADER_LEN: usize = 12;

/// Control Signalling Block header found at the start of a CSBK data region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CsbkHeader {
    // 1
    pub byte1: u8,
    /// Feature set id
    pub fid: u8,
    // 1
    pub byte3: u8,
    // 1
    pub byte4: u8,
    // 3
    pub dst: u32,
    // 3
    pub src: u32,
    // 2
    pub crc: u16,
}

impl CsbkHeader {
    pub fn from_bytebuf(buf: &mut ByteBuffer) -> Result<Self, IpscParseErr> {
        let_field!(buf, byte1: u8, 1);
        let_field!(buf, fid: u8, 1);
        let_field!(buf, byte3: u8, 1);
        let_field!(buf, byte4: u8, 1);
        let_field!(buf, dst: u32, 3);
        let_field!(buf, src: u32, 3);
        let_field!(buf, crc: u16, 2);
        Ok(CsbkHeader { byte1, fid, byte3, byte4, dst, src, crc })
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) -> Result<(), IpscParseErr> {
        expect_fits!(self.dst, 24, "dst")?;
        expect_fits!(self.src, 24, "src")?;
        buf.write_u8(self.byte1);
        buf.write_u8(self.fid);
        buf.write_u8(self.byte3);
        buf.write_u8(self.byte4);
        buf.write_u24(self.dst);
        buf.write_u24(self.src);
        buf.write_u16(self.crc);
        Ok(())
    }
}

impl fmt::Display for CsbkHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CsbkHeader {{ byte1: 0x{:02x} fid: 0x{:02x} byte3: 0x{:02x} byte4: 0x{:02x} dst: {} src: {} crc: 0x{:04x} }}",
            self.byte1, self.fid, self.byte3, self.byte4, self.dst, self.src, self.crc
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csbk_header() {
        let data = [0xbd, 0x10, 0x00, 0x01, 0x00, 0x00, 0x63, 0x00, 0x0c, 0x35, 0xbe, 0xef];
        let mut buf = ByteBuffer::new(&data);
        let h = CsbkHeader::from_bytebuf(&mut buf).unwrap();
        assert_eq!(buf.get_pos(), CSBK_HEADER_LEN);
        assert_eq!(h.byte1, 0xbd);
        assert_eq!(h.fid, 0x10);
        assert_eq!(h.dst, 99);
        assert_eq!(h.src, 3125);
        assert_eq!(h.crc, 0xbeef);

        let mut w = ByteWriter::new();
        h.to_bytebuf(&mut w).unwrap();
        assert_eq!(w.as_bytes(), &data);
    }
}
