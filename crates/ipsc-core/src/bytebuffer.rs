use std::fmt;

use crate::error::IpscParseErr;

/// Read `width` bytes at `offset` as a big-endian unsigned integer.
/// `width` may be 0..=8; a zero-width read returns 0.
pub fn read_uint(data: &[u8], offset: usize, width: usize, field: &'static str) -> Result<u64, IpscParseErr> {
    if width > 8 {
        return Err(IpscParseErr::InvalidValue { field, value: width as u64 });
    }
    let bytes = read_bytes(data, offset, width, field)?;
    Ok(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
}

/// Borrow `len` bytes at `offset`, failing if the region extends past the end of `data`
pub fn read_bytes<'a>(data: &'a [u8], offset: usize, len: usize, field: &'static str) -> Result<&'a [u8], IpscParseErr> {
    let truncated = || IpscParseErr::Truncated { field, offset, len, available: data.len() };
    let end = offset.checked_add(len).ok_or_else(truncated)?;
    if end > data.len() {
        return Err(truncated());
    }
    Ok(&data[offset..end])
}

/// A region of the input buffer, remembered together with its absolute offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSpan<'a> {
    pub offset: usize,
    pub bytes: &'a [u8],
}

impl<'a> ByteSpan<'a> {
    pub fn new(offset: usize, bytes: &'a [u8]) -> Self {
        ByteSpan { offset, bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Offset of the first byte after this span
    pub fn end(&self) -> usize {
        self.offset + self.bytes.len()
    }

    pub fn dump_hex(&self) -> String {
        dump_hex(self.bytes)
    }
}

impl fmt::Display for ByteSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}+{}] {}", self.offset, self.len(), self.dump_hex())
    }
}

/// Uppercase hex without separators
pub fn dump_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        s.push_str(&format!("{:02X}", b));
    }
    s
}

/// Read cursor over an immutable byte slice. Every read is bounds checked and
/// reports the name of the field that could not be read.
pub struct ByteBuffer<'a> {
    data: &'a [u8],
    pos: usize, // next byte offset for read (absolute)
}

impl<'a> ByteBuffer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteBuffer { data, pos: 0 }
    }

    /// Total length of the underlying buffer
    pub fn get_len(&self) -> usize {
        self.data.len()
    }

    /// Bytes left between pos and the end of the buffer
    pub fn get_len_remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn get_pos(&self) -> usize {
        self.pos
    }

    /// Move the cursor to an absolute offset. Seeking past the end is allowed,
    /// the next read will fail.
    pub fn seek(&mut self, offset: usize) {
        self.pos = offset;
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Read a `width`-byte big-endian field at pos, advancing on success.
    pub fn read_field(&mut self, width: usize, field: &'static str) -> Result<u64, IpscParseErr> {
        let v = read_uint(self.data, self.pos, width, field)?;
        self.pos += width;
        Ok(v)
    }

    /// Read a `width`-byte big-endian field at an absolute offset, without moving pos.
    pub fn read_field_at(&self, offset: usize, width: usize, field: &'static str) -> Result<u64, IpscParseErr> {
        read_uint(self.data, offset, width, field)
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8, IpscParseErr> {
        Ok(self.read_field(1, field)? as u8)
    }

    pub fn read_u16(&mut self, field: &'static str) -> Result<u16, IpscParseErr> {
        Ok(self.read_field(2, field)? as u16)
    }

    pub fn read_u24(&mut self, field: &'static str) -> Result<u32, IpscParseErr> {
        Ok(self.read_field(3, field)? as u32)
    }

    pub fn read_u32(&mut self, field: &'static str) -> Result<u32, IpscParseErr> {
        Ok(self.read_field(4, field)? as u32)
    }

    /// Byte at an absolute offset, without moving pos
    pub fn peek_u8_at(&self, offset: usize, field: &'static str) -> Result<u8, IpscParseErr> {
        Ok(read_uint(self.data, offset, 1, field)? as u8)
    }

    /// Take `len` bytes at pos as a span, advancing on success.
    pub fn read_span(&mut self, len: usize, field: &'static str) -> Result<ByteSpan<'a>, IpscParseErr> {
        let span = self.read_span_at(self.pos, len, field)?;
        self.pos += len;
        Ok(span)
    }

    /// Take `len` bytes at an absolute offset as a span, without moving pos.
    pub fn read_span_at(&self, offset: usize, len: usize, field: &'static str) -> Result<ByteSpan<'a>, IpscParseErr> {
        let bytes = read_bytes(self.data, offset, len, field)?;
        Ok(ByteSpan::new(offset, bytes))
    }

    pub fn dump_hex(&self) -> String {
        dump_hex(self.data)
    }
}

impl fmt::Debug for ByteBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteBuffer {{ len: {} pos: {} data: {} }}", self.data.len(), self.pos, self.dump_hex())
    }
}

/// Growable big-endian writer used when composing messages
#[derive(Debug, Default, Clone)]
pub struct ByteWriter {
    buffer: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        ByteWriter { buffer: Vec::new() }
    }

    pub fn with_capacity(len: usize) -> Self {
        ByteWriter { buffer: Vec::with_capacity(len) }
    }

    /// Append the low `width` bytes of `value`, most significant first.
    /// `width` may be 0..=8, like [`read_uint`].
    pub fn write_uint(&mut self, value: u64, width: usize, field: &'static str) -> Result<(), IpscParseErr> {
        if width > 8 {
            return Err(IpscParseErr::InvalidValue { field, value: width as u64 });
        }
        self.buffer.extend_from_slice(&value.to_be_bytes()[8 - width..]);
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buffer.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_u24(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_be_bytes()[1..]);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    pub fn get_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}
