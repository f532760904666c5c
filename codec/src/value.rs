//! Decoded field values and their stream encoding.

use bitflags::bitflags;
use bytestream::{
    ByteReader, ByteWriter, ColorArgb, ColorXrgb, Flag32, Text, Vec2, Vec3, ViewAngle,
};
use schema::FieldCodec;
use smallvec::SmallVec;

use crate::error::CodecResult;

bitflags! {
    /// Buttons held by a player during a tick.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InputFlags: u8 {
        const FORWARD = 0x01;
        const BACK = 0x02;
        const LEFT = 0x04;
        const RIGHT = 0x08;
        const JUMP = 0x10;
        const UNKNOWN_20 = 0x20;
        const CROUCH = 0x40;
        const UNKNOWN_80 = 0x80;
    }
}

/// A field value in decoded form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    F32(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    ViewAngle(ViewAngle),
    Argb(ColorArgb),
    Xrgb(ColorXrgb),
    /// NUL-terminated or zero-padded text, bytes as recorded.
    Text(Text),
    /// Raw flag byte; non-zero means set.
    Flag(u8),
    Flag32(Flag32),
    Input(InputFlags),
    Opaque(SmallVec<[u8; 8]>),
    /// A zero-width bit that is set.
    Marker,
}

impl FieldValue {
    /// Returns `true` if this value can be written with `codec`.
    #[must_use]
    pub fn matches(&self, codec: FieldCodec) -> bool {
        match (self, codec) {
            (Self::U8(_), FieldCodec::U8)
            | (Self::I8(_), FieldCodec::I8)
            | (Self::U16(_), FieldCodec::U16)
            | (Self::I16(_), FieldCodec::I16)
            | (Self::U32(_), FieldCodec::U32)
            | (Self::I32(_), FieldCodec::I32)
            | (Self::F32(_), FieldCodec::F32)
            | (Self::Vec2(_), FieldCodec::Vec2)
            | (Self::Vec3(_), FieldCodec::Vec3)
            | (Self::ViewAngle(_), FieldCodec::ViewAngle)
            | (Self::Argb(_), FieldCodec::Argb)
            | (Self::Xrgb(_), FieldCodec::Xrgb)
            | (Self::Text(_), FieldCodec::CString | FieldCodec::Padded(_))
            | (Self::Flag(_), FieldCodec::Flag)
            | (Self::Flag32(_), FieldCodec::Flag32)
            | (Self::Input(_), FieldCodec::Input)
            | (Self::Marker, FieldCodec::Marker) => true,
            (Self::Opaque(bytes), FieldCodec::Opaque(len)) => bytes.len() == len,
            _ => false,
        }
    }

    #[must_use]
    pub const fn as_u32(&self) -> Option<u32> {
        match self {
            Self::U32(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_vec3(&self) -> Option<Vec3> {
        match self {
            Self::Vec3(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_view_angle(&self) -> Option<ViewAngle> {
        match self {
            Self::ViewAngle(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the flag state for `Flag` and `Flag32` values.
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(raw) => Some(*raw != 0),
            Self::Flag32(flag) => Some(flag.is_set()),
            _ => None,
        }
    }
}

/// Reads one value with `codec`.
///
/// `max_string_len` bounds the scan for a NUL terminator.
pub(crate) fn read_value(
    reader: &mut ByteReader<'_>,
    codec: FieldCodec,
    max_string_len: usize,
) -> CodecResult<FieldValue> {
    let value = match codec {
        FieldCodec::U8 => FieldValue::U8(reader.read_u8()?),
        FieldCodec::I8 => FieldValue::I8(reader.read_i8()?),
        FieldCodec::U16 => FieldValue::U16(reader.read_u16()?),
        FieldCodec::I16 => FieldValue::I16(reader.read_i16()?),
        FieldCodec::U32 => FieldValue::U32(reader.read_u32()?),
        FieldCodec::I32 => FieldValue::I32(reader.read_i32()?),
        FieldCodec::F32 => FieldValue::F32(reader.read_f32()?),
        FieldCodec::Vec2 => FieldValue::Vec2(reader.read_vec2()?),
        FieldCodec::Vec3 => FieldValue::Vec3(reader.read_vec3()?),
        FieldCodec::ViewAngle => FieldValue::ViewAngle(reader.read_view_angle()?),
        FieldCodec::Argb => FieldValue::Argb(reader.read_argb()?),
        FieldCodec::Xrgb => FieldValue::Xrgb(reader.read_xrgb()?),
        FieldCodec::CString => FieldValue::Text(reader.read_cstring(max_string_len)?),
        FieldCodec::Padded(len) => FieldValue::Text(reader.read_padded_string(len)?),
        FieldCodec::Flag => FieldValue::Flag(reader.read_u8()?),
        FieldCodec::Flag32 => FieldValue::Flag32(reader.read_flag32()?),
        FieldCodec::Input => FieldValue::Input(InputFlags::from_bits_retain(reader.read_u8()?)),
        FieldCodec::Opaque(len) => FieldValue::Opaque(SmallVec::from_slice(reader.read_bytes(len)?)),
        FieldCodec::Marker => FieldValue::Marker,
    };
    Ok(value)
}

/// Writes `value` with `codec`.
///
/// Returns `Ok(false)` without writing if the value does not match the codec.
pub(crate) fn write_value(
    writer: &mut ByteWriter,
    codec: FieldCodec,
    value: &FieldValue,
) -> CodecResult<bool> {
    if !value.matches(codec) {
        return Ok(false);
    }
    match value {
        FieldValue::U8(v) | FieldValue::Flag(v) => writer.write_u8(*v),
        FieldValue::I8(v) => writer.write_i8(*v),
        FieldValue::U16(v) => writer.write_u16(*v),
        FieldValue::I16(v) => writer.write_i16(*v),
        FieldValue::U32(v) => writer.write_u32(*v),
        FieldValue::I32(v) => writer.write_i32(*v),
        FieldValue::F32(v) => writer.write_f32(*v),
        FieldValue::Vec2(v) => writer.write_vec2(*v),
        FieldValue::Vec3(v) => writer.write_vec3(*v),
        FieldValue::ViewAngle(v) => writer.write_view_angle(*v),
        FieldValue::Argb(v) => writer.write_argb(*v),
        FieldValue::Xrgb(v) => writer.write_xrgb(*v),
        FieldValue::Text(text) => match codec {
            FieldCodec::Padded(len) => writer.write_padded_string(text, len)?,
            _ => writer.write_cstring(text)?,
        },
        FieldValue::Flag32(v) => writer.write_flag32(*v),
        FieldValue::Input(v) => writer.write_u8(v.bits()),
        FieldValue::Opaque(bytes) => writer.write_bytes(bytes),
        FieldValue::Marker => {}
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(codec: FieldCodec, value: &FieldValue) -> FieldValue {
        let mut writer = ByteWriter::new();
        assert!(write_value(&mut writer, codec, value).unwrap());
        let bytes = writer.finish();
        assert_eq!(codec.fixed_size().unwrap_or(bytes.len()), bytes.len());
        let mut reader = ByteReader::new(&bytes);
        let decoded = read_value(&mut reader, codec, 256).unwrap();
        assert!(reader.is_empty());
        decoded
    }

    #[test]
    fn input_keeps_unknown_bits() {
        let input = InputFlags::FORWARD | InputFlags::JUMP | InputFlags::UNKNOWN_80;
        let decoded = roundtrip(FieldCodec::Input, &FieldValue::Input(input));
        assert_eq!(decoded, FieldValue::Input(input));
    }

    #[test]
    fn text_uses_codec_form() {
        let text = FieldValue::Text("dm6".into());
        let mut cstring = ByteWriter::new();
        write_value(&mut cstring, FieldCodec::CString, &text).unwrap();
        assert_eq!(cstring.finish(), b"dm6\0".to_vec());

        let mut padded = ByteWriter::new();
        write_value(&mut padded, FieldCodec::Padded(6), &text).unwrap();
        assert_eq!(padded.finish(), b"dm6\0\0\0".to_vec());
    }

    #[test]
    fn non_utf8_text_roundtrips_in_both_forms() {
        for (codec, bytes) in [
            (FieldCodec::Padded(4), vec![0x63, 0x61, 0x66, 0xE9]),
            (FieldCodec::Padded(4), vec![0xE9; 4]),
            (FieldCodec::CString, vec![0x41, 0xFF, 0x00]),
        ] {
            let mut reader = ByteReader::new(&bytes);
            let decoded = read_value(&mut reader, codec, 16).unwrap();
            assert!(reader.is_empty());

            let mut writer = ByteWriter::new();
            assert!(write_value(&mut writer, codec, &decoded).unwrap());
            assert_eq!(writer.finish(), bytes, "{codec:?}");
        }
    }

    #[test]
    fn opaque_length_must_match() {
        let value = FieldValue::Opaque(SmallVec::from_slice(&[1, 2, 3]));
        assert!(value.matches(FieldCodec::Opaque(3)));
        assert!(!value.matches(FieldCodec::Opaque(4)));
        let mut writer = ByteWriter::new();
        assert!(!write_value(&mut writer, FieldCodec::Opaque(4), &value).unwrap());
        assert!(writer.is_empty());
    }

    #[test]
    fn marker_consumes_nothing() {
        let mut reader = ByteReader::new(&[0xAA]);
        assert_eq!(
            read_value(&mut reader, FieldCodec::Marker, 16).unwrap(),
            FieldValue::Marker
        );
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn flag_keeps_raw_byte() {
        let decoded = roundtrip(FieldCodec::Flag, &FieldValue::Flag(0x67));
        assert_eq!(decoded, FieldValue::Flag(0x67));
        assert_eq!(decoded.as_flag(), Some(true));
    }

    #[test]
    fn accessors() {
        assert_eq!(FieldValue::U32(9).as_u32(), Some(9));
        assert_eq!(FieldValue::U16(9).as_u32(), None);
        assert_eq!(
            FieldValue::Vec3(Vec3::new(1.0, 2.0, 3.0)).as_vec3(),
            Some(Vec3::new(1.0, 2.0, 3.0))
        );
        assert_eq!(
            FieldValue::Text("a".into()).as_text(),
            Some(&Text::from("a"))
        );
    }

    #[test]
    fn truncated_value_is_eof() {
        let mut reader = ByteReader::new(&[1, 2]);
        let err = read_value(&mut reader, FieldCodec::Vec3, 16).unwrap_err();
        assert_eq!(err.offset(), Some(0));
    }
}
