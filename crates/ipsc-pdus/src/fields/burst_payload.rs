use core::fmt;

use ipsc_core::{ByteBuffer, ByteSpan, ByteWriter, IpscParseErr};

/// Offset of the opaque data region in length-prefixed voice and data bursts
pub const BURST_DATA_OFFSET: usize = 38;

/// Number of data region bytes implied by a length-to-follow word count.
/// The count includes the four status bytes preceding the region, so
/// anything below 2 words cannot describe a valid region.
pub fn data_region_len(length_to_follow: u16) -> Result<usize, IpscParseErr> {
    if length_to_follow < 2 {
        return Err(IpscParseErr::InvalidLength { field: "length_to_follow", value: length_to_follow as u64 });
    }
    Ok(2 * length_to_follow as usize - 4)
}

/// Status bytes and data region following a nonzero length-to-follow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstPayload<'a> {
    // 1
    pub rssi_status: u8,
    // 1
    pub slot_type_sync: u8,
    // 2
    pub data_size: u16,
    /// 2 * length_to_follow - 4 bytes
    pub data: ByteSpan<'a>,
}

impl<'a> BurstPayload<'a> {
    pub fn from_bytebuf(buf: &mut ByteBuffer<'a>, length_to_follow: u16) -> Result<Self, IpscParseErr> {
        let region_len = data_region_len(length_to_follow)?;
        let rssi_status = buf.read_u8("rssi_status")?;
        let slot_type_sync = buf.read_u8("slot_type_sync")?;
        let data_size = buf.read_u16("data_size")?;
        let data = buf.read_span(region_len, "data")?;
        Ok(BurstPayload { rssi_status, slot_type_sync, data_size, data })
    }

    /// Writes the status bytes and data region. The caller has already written
    /// `length_to_follow`, which must describe this region.
    pub fn to_bytebuf(&self, buf: &mut ByteWriter, length_to_follow: u16) -> Result<(), IpscParseErr> {
        let region_len = data_region_len(length_to_follow)?;
        if region_len != self.data.len() {
            return Err(IpscParseErr::InvalidLength { field: "length_to_follow", value: length_to_follow as u64 });
        }
        buf.write_u8(self.rssi_status);
        buf.write_u8(self.slot_type_sync);
        buf.write_u16(self.data_size);
        buf.write_bytes(self.data.bytes);
        Ok(())
    }
}

impl fmt::Display for BurstPayload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rssi_status: 0x{:02x} slot_type_sync: 0x{:02x} data_size: {} data: {}",
            self.rssi_status, self.slot_type_sync, self.data_size, self.data
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_len() {
        assert_eq!(data_region_len(2).unwrap(), 0);
        assert_eq!(data_region_len(6).unwrap(), 8);
        assert_eq!(data_region_len(u16::MAX).unwrap(), 131066);
        assert_eq!(
            data_region_len(1),
            Err(IpscParseErr::InvalidLength { field: "length_to_follow", value: 1 })
        );
        assert!(data_region_len(0).is_err());
    }

    #[test]
    fn test_payload_mismatched_region() {
        let data = [0xaa, 0xbb];
        let payload = BurstPayload {
            rssi_status: 0,
            slot_type_sync: 0,
            data_size: 0,
            data: ByteSpan::new(38, &data),
        };
        let mut w = ByteWriter::new();
        assert!(payload.to_bytebuf(&mut w, 6).is_err());
        assert!(payload.to_bytebuf(&mut w, 3).is_ok());
        assert_eq!(w.as_bytes(), &[0, 0, 0, 0, 0xaa, 0xbb]);
    }
}
