use crate::errors::{ProtocolError, Result};

use byteorder::{ByteOrder, LittleEndian};
use std::str;

/// Sequential reader over a received datagram.
///
/// Every read starts at the current position and advances it by the number of
/// bytes consumed. A failed read leaves the position untouched. Offsets in
/// errors are relative to the start of the wrapped buffer.
#[derive(Clone, Debug)]
pub struct FieldCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> FieldCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::at(buf, 0)
    }

    /// Starts reading at `pos`, clamped to the end of the buffer.
    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        Self {
            buf,
            pos: pos.min(buf.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if available < needed {
            return Err(ProtocolError::BufferUnderrun {
                offset: self.pos,
                needed,
                available,
            });
        }

        let out = &self.buf[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(out)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.take(8)?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.take(4)?))
    }

    /// Reads a null-terminated UTF-8 string and steps over the terminator.
    pub fn read_cstring(&mut self) -> Result<String> {
        let offset = self.pos;
        let rest = &self.buf[offset..];
        let len = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(ProtocolError::UnterminatedString { offset })?;
        let s = str::from_utf8(&rest[..len])
            .map_err(|source| ProtocolError::InvalidUtf8 { offset, source })?;

        self.pos += len + 1;
        Ok(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_reads() {
        let data = [
            0x7F, 0xFE, 0x34, 0x12, 0xFF, 0xFF, 0x78, 0x56, 0x34, 0x12, 0x01, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x20, 0x41,
        ];
        let mut cur = FieldCursor::new(&data);

        assert_eq!(cur.read_u8().unwrap(), 0x7F);
        assert_eq!(cur.read_i8().unwrap(), -2);
        assert_eq!(cur.read_u16().unwrap(), 0x1234);
        assert_eq!(cur.read_i16().unwrap(), -1);
        assert_eq!(cur.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(cur.read_u64().unwrap(), 0x8000_0000_0000_0001);
        assert_eq!(cur.read_f32().unwrap(), 10.0);
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn test_underrun_reports_context_and_keeps_position() {
        let data = [0x01, 0x02, 0x03];
        let mut cur = FieldCursor::new(&data);
        cur.read_u8().unwrap();

        match cur.read_i32() {
            Err(ProtocolError::BufferUnderrun {
                offset,
                needed,
                available,
            }) => assert_eq!((offset, needed, available), (1, 4, 2)),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(cur.position(), 1);
        assert_eq!(cur.read_u16().unwrap(), 0x0302);
    }

    #[test]
    fn test_read_cstring() {
        let data = b"de_dust2\0\0tail";
        let mut cur = FieldCursor::new(data);

        assert_eq!(cur.read_cstring().unwrap(), "de_dust2");
        assert_eq!(cur.position(), 9);
        assert_eq!(cur.read_cstring().unwrap(), "");
        assert_eq!(cur.position(), 10);

        match cur.read_cstring() {
            Err(ProtocolError::UnterminatedString { offset }) => assert_eq!(offset, 10),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(cur.remaining(), 4);
    }

    #[test]
    fn test_read_cstring_rejects_invalid_utf8() {
        let data = [b'a', 0xC3, 0x28, 0x00];
        let mut cur = FieldCursor::new(&data);

        assert!(matches!(
            cur.read_cstring(),
            Err(ProtocolError::InvalidUtf8 { offset: 0, .. })
        ));
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn test_at_clamps_to_buffer() {
        let data = [0xFF; 3];
        let cur = FieldCursor::at(&data, 10);
        assert_eq!(cur.position(), 3);
        assert_eq!(cur.remaining(), 0);
    }
}
