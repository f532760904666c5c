//! Byte-level reader with bounded operations.

use crate::error::{ByteError, ByteResult};
use crate::primitives::{ColorArgb, ColorXrgb, Flag32, Vec2, Vec3, ViewAngle};
use crate::text::Text;

/// A cursor over a byte slice for decoding little-endian data.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> ByteResult<&'a [u8]> {
        self.ensure(len)?;
        let out = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Reads a fixed-size byte array.
    pub fn read_array<const N: usize>(&mut self) -> ByteResult<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> ByteResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_i8(&mut self) -> ByteResult<i8> {
        Ok(i8::from_le_bytes(self.read_array::<1>()?))
    }

    pub fn read_u16(&mut self) -> ByteResult<u16> {
        Ok(u16::from_le_bytes(self.read_array::<2>()?))
    }

    pub fn read_i16(&mut self) -> ByteResult<i16> {
        Ok(i16::from_le_bytes(self.read_array::<2>()?))
    }

    pub fn read_u32(&mut self) -> ByteResult<u32> {
        Ok(u32::from_le_bytes(self.read_array::<4>()?))
    }

    pub fn read_i32(&mut self) -> ByteResult<i32> {
        Ok(i32::from_le_bytes(self.read_array::<4>()?))
    }

    pub fn read_u64(&mut self) -> ByteResult<u64> {
        Ok(u64::from_le_bytes(self.read_array::<8>()?))
    }

    pub fn read_f32(&mut self) -> ByteResult<f32> {
        Ok(f32::from_le_bytes(self.read_array::<4>()?))
    }

    pub fn read_vec2(&mut self) -> ByteResult<Vec2> {
        Ok(Vec2::new(self.read_f32()?, self.read_f32()?))
    }

    pub fn read_vec3(&mut self) -> ByteResult<Vec3> {
        Ok(Vec3::new(
            self.read_f32()?,
            self.read_f32()?,
            self.read_f32()?,
        ))
    }

    pub fn read_argb(&mut self) -> ByteResult<ColorArgb> {
        let [b, g, r, a] = self.read_array::<4>()?;
        Ok(ColorArgb { b, g, r, a })
    }

    pub fn read_xrgb(&mut self) -> ByteResult<ColorXrgb> {
        let [b, g, r, x] = self.read_array::<4>()?;
        Ok(ColorXrgb { b, g, r, x })
    }

    pub fn read_view_angle(&mut self) -> ByteResult<ViewAngle> {
        Ok(ViewAngle::new(self.read_u16()?, self.read_i16()?))
    }

    pub fn read_flag32(&mut self) -> ByteResult<Flag32> {
        Ok(Flag32::from_raw(self.read_array::<4>()?))
    }

    /// Reads a zero-padded string occupying exactly `len` bytes.
    ///
    /// Trailing NUL bytes are stripped. The remaining bytes are kept as
    /// read, whatever their encoding.
    pub fn read_padded_string(&mut self, len: usize) -> ByteResult<Text> {
        let bytes = self.read_bytes(len)?;
        let end = bytes
            .iter()
            .rposition(|&byte| byte != 0)
            .map_or(0, |idx| idx + 1);
        Ok(Text::from(&bytes[..end]))
    }

    /// Reads a NUL-terminated string, scanning at most `max` bytes for the
    /// terminator. The terminator is consumed but not returned.
    pub fn read_cstring(&mut self, max: usize) -> ByteResult<Text> {
        let start = self.pos;
        let window = &self.data[start..];
        let scan = &window[..window.len().min(max.saturating_add(1))];
        match scan.iter().position(|&byte| byte == 0) {
            Some(len) => {
                let bytes = &window[..len];
                self.pos += len + 1;
                Ok(Text::from(bytes))
            }
            None if window.len() > max => Err(ByteError::UnterminatedString { offset: start, max }),
            None => Err(ByteError::UnexpectedEof {
                offset: start,
                requested: window.len() + 1,
                available: window.len(),
            }),
        }
    }

    fn ensure(&self, len: usize) -> ByteResult<()> {
        let available = self.remaining();
        if len > available {
            return Err(ByteError::UnexpectedEof {
                offset: self.pos,
                requested: len,
                available,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reader() {
        let reader = ByteReader::new(&[]);
        assert!(reader.is_empty());
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = ByteReader::new(&[]);
        let result = reader.read_u8();
        assert!(matches!(result, Err(ByteError::UnexpectedEof { .. })));
    }

    #[test]
    fn read_u32_little_endian() {
        let mut reader = ByteReader::new(&[0x78, 0x56, 0x34, 0x12]);
        assert_eq!(reader.read_u32().unwrap(), 0x1234_5678);
        assert!(reader.is_empty());
    }

    #[test]
    fn eof_reports_offset_of_failed_read() {
        let mut reader = ByteReader::new(&[1, 2, 3]);
        reader.read_u16().unwrap();
        let err = reader.read_u32().unwrap_err();
        assert_eq!(
            err,
            ByteError::UnexpectedEof {
                offset: 2,
                requested: 4,
                available: 1,
            }
        );
        assert_eq!(reader.position(), 2, "failed reads do not advance");
    }

    #[test]
    fn read_view_angle_signed_pitch() {
        let mut reader = ByteReader::new(&[0x10, 0x00, 0xFF, 0xFF]);
        assert_eq!(reader.read_view_angle().unwrap(), ViewAngle::new(16, -1));
    }

    #[test]
    fn read_padded_string_strips_trailing_nuls() {
        let mut reader = ByteReader::new(b"dm6\0\0\0\0\0tail");
        assert_eq!(reader.read_padded_string(8).unwrap(), "dm6");
        assert_eq!(reader.position(), 8);
    }

    #[test]
    fn read_padded_string_keeps_interior_bytes() {
        let mut reader = ByteReader::new(b"ab\0cd\0");
        assert_eq!(reader.read_padded_string(6).unwrap(), "ab\0cd");
    }

    #[test]
    fn read_padded_string_keeps_invalid_utf8() {
        let mut reader = ByteReader::new(&[b'a', 0xFF, b'b', 0]);
        let text = reader.read_padded_string(4).unwrap();
        assert_eq!(text.as_bytes(), &[b'a', 0xFF, b'b']);
        assert_eq!(text.to_string(), "a\u{FFFD}b");
    }

    #[test]
    fn read_cstring_keeps_invalid_utf8() {
        let mut reader = ByteReader::new(&[0x41, 0xFF, 0x00]);
        assert_eq!(reader.read_cstring(8).unwrap().as_bytes(), &[0x41, 0xFF]);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_cstring_consumes_terminator() {
        let mut reader = ByteReader::new(b"rocket\0x");
        assert_eq!(reader.read_cstring(64).unwrap(), "rocket");
        assert_eq!(reader.read_u8().unwrap(), b'x');
    }

    #[test]
    fn read_cstring_without_terminator_is_eof() {
        let mut reader = ByteReader::new(b"abc");
        let err = reader.read_cstring(64).unwrap_err();
        assert!(matches!(err, ByteError::UnexpectedEof { offset: 0, .. }));
    }

    #[test]
    fn read_cstring_respects_max() {
        let mut reader = ByteReader::new(b"abcdef\0");
        let err = reader.read_cstring(3).unwrap_err();
        assert_eq!(err, ByteError::UnterminatedString { offset: 0, max: 3 });

        let mut reader = ByteReader::new(b"abc\0");
        assert_eq!(reader.read_cstring(3).unwrap(), "abc");
    }

    #[test]
    fn read_colors_in_stream_order() {
        let mut reader = ByteReader::new(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            reader.read_argb().unwrap(),
            ColorArgb {
                b: 1,
                g: 2,
                r: 3,
                a: 4
            }
        );
        assert_eq!(
            reader.read_xrgb().unwrap(),
            ColorXrgb {
                b: 5,
                g: 6,
                r: 7,
                x: 8
            }
        );
    }
}
