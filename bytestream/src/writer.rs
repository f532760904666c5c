//! Byte-level writer for encoding little-endian data.

use crate::error::{ByteError, ByteResult};
use crate::primitives::{ColorArgb, ColorXrgb, Flag32, Vec2, Vec3, ViewAngle};

/// A growable writer for little-endian binary data.
///
/// Writes are accumulated in an internal buffer. Call [`finish`](Self::finish)
/// to get the final byte buffer. Only string slots can fail.
#[derive(Debug, Default, Clone)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    pub fn write_i8(&mut self, value: i8) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_u16(&mut self, value: u16) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_i16(&mut self, value: i16) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_i32(&mut self, value: i32) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_f32(&mut self, value: f32) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_vec2(&mut self, value: Vec2) {
        self.write_f32(value.x);
        self.write_f32(value.y);
    }

    pub fn write_vec3(&mut self, value: Vec3) {
        self.write_f32(value.x);
        self.write_f32(value.y);
        self.write_f32(value.z);
    }

    pub fn write_argb(&mut self, value: ColorArgb) {
        self.write_bytes(&[value.b, value.g, value.r, value.a]);
    }

    pub fn write_xrgb(&mut self, value: ColorXrgb) {
        self.write_bytes(&[value.b, value.g, value.r, value.x]);
    }

    pub fn write_view_angle(&mut self, value: ViewAngle) {
        self.write_u16(value.x);
        self.write_i16(value.y);
    }

    pub fn write_flag32(&mut self, value: Flag32) {
        self.write_bytes(&value.raw());
    }

    /// Writes `value` into a zero-padded slot of exactly `len` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ByteError::LengthExceeded`] if `value` is longer than `len`.
    pub fn write_padded_string(&mut self, value: impl AsRef<[u8]>, len: usize) -> ByteResult<()> {
        let bytes = value.as_ref();
        if bytes.len() > len {
            return Err(ByteError::LengthExceeded {
                max: len,
                actual: bytes.len(),
            });
        }
        self.write_bytes(bytes);
        self.bytes.resize(self.bytes.len() + (len - bytes.len()), 0);
        Ok(())
    }

    /// Writes `value` followed by a NUL terminator.
    ///
    /// # Errors
    ///
    /// Returns [`ByteError::InteriorNul`] if `value` contains a NUL byte,
    /// which would truncate it on the next decode.
    pub fn write_cstring(&mut self, value: impl AsRef<[u8]>) -> ByteResult<()> {
        let bytes = value.as_ref();
        if let Some(position) = bytes.iter().position(|&byte| byte == 0) {
            return Err(ByteError::InteriorNul { position });
        }
        self.write_bytes(bytes);
        self.write_u8(0);
        Ok(())
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        let writer = ByteWriter::new();
        assert!(writer.is_empty());
        assert!(writer.finish().is_empty());
    }

    #[test]
    fn write_u32_little_endian() {
        let mut writer = ByteWriter::new();
        writer.write_u32(0x1234_5678);
        assert_eq!(writer.finish(), vec![0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn write_padded_string_pads_with_zeros() {
        let mut writer = ByteWriter::new();
        writer.write_padded_string("dm6", 6).unwrap();
        assert_eq!(writer.finish(), b"dm6\0\0\0".to_vec());
    }

    #[test]
    fn write_padded_string_exact_fit_has_no_terminator() {
        let mut writer = ByteWriter::new();
        writer.write_padded_string("abcd", 4).unwrap();
        assert_eq!(writer.finish(), b"abcd".to_vec());
    }

    #[test]
    fn write_padded_string_too_long_fails() {
        let mut writer = ByteWriter::new();
        let err = writer.write_padded_string("abcdef", 4).unwrap_err();
        assert_eq!(err, ByteError::LengthExceeded { max: 4, actual: 6 });
        assert!(writer.is_empty(), "nothing written on failure");
    }

    #[test]
    fn write_cstring_appends_terminator() {
        let mut writer = ByteWriter::new();
        writer.write_cstring("hi").unwrap();
        assert_eq!(writer.finish(), b"hi\0".to_vec());
    }

    #[test]
    fn non_utf8_text_is_written_verbatim() {
        let mut writer = ByteWriter::new();
        writer.write_padded_string([0xE9; 4], 4).unwrap();
        writer.write_cstring([0x41, 0xFF]).unwrap();
        assert_eq!(writer.finish(), vec![0xE9, 0xE9, 0xE9, 0xE9, 0x41, 0xFF, 0x00]);
    }

    #[test]
    fn write_cstring_rejects_interior_nul() {
        let mut writer = ByteWriter::new();
        let err = writer.write_cstring("a\0b").unwrap_err();
        assert_eq!(err, ByteError::InteriorNul { position: 1 });
    }

    #[test]
    fn finish_into_appends() {
        let mut buf = vec![9];
        let mut writer = ByteWriter::new();
        writer.write_u16(0xBEEF);
        writer.finish_into(&mut buf);
        assert_eq!(buf, vec![9, 0xEF, 0xBE]);
    }
}
