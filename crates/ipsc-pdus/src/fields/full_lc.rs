use core::fmt;

use ipsc_core::{ByteBuffer, ByteWriter, IpscParseErr, expect_fits, let_field};

pub const FULL_LC_LEN: usize = 9;

/// Full link control voice PDU header carried by voice LC header and terminator bursts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FullLcVoicePdu {
    // 1
    pub byte1: u8,
    /// Feature set id
    pub fid: u8,
    // 1
    pub service_options: u8,
    // 3
    pub dst: u32,
    // 3
    pub src: u32,
}

impl FullLcVoicePdu {
    pub fn from_bytebuf(buf: &mut ByteBuffer) -> Result<Self, IpscParseErr> {
        let_field!(buf, byte1: u8, 1);
        let_field!(buf, fid: u8, 1);
        let_field!(buf, service_options: u8, 1);
        let_field!(buf, dst: u32, 3);
        let_field!(buf, src: u32, 3);
        Ok(FullLcVoicePdu { byte1, fid, service_options, dst, src })
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) -> Result<(), IpscParseErr> {
        expect_fits!(self.dst, 24, "dst")?;
        expect_fits!(self.src, 24, "src")?;
        buf.write_u8(self.byte1);
        buf.write_u8(self.fid);
        buf.write_u8(self.service_options);
        buf.write_u24(self.dst);
        buf.write_u24(self.src);
        Ok(())
    }
}

impl fmt::Display for FullLcVoicePdu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FullLcVoicePdu {{ byte1: 0x{:02x} fid: 0x{:02x} service_options: 0x{:02x} dst: {} src: {} }}",
            self.byte1, self.fid, self.service_options, self.dst, self.src
        )
    }
}
