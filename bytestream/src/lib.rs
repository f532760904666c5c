//! Byte-aligned little-endian primitives for the reflay replay codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] plus the small fixed-size
//! values (vectors, colors, view angles, padded flags, raw text) that every record in a
//! replay is built from. It is designed for bounded, panic-free operation with
//! explicit error handling.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked and report their offset.
//! - **No domain knowledge** - This crate knows nothing about entities, ticks, or prefabs.
//! - **Lossless where possible** - Pad bytes are kept so unmodified data re-encodes exactly.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter, Vec3};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u32(89);
//! writer.write_vec3(Vec3::new(1.0, 2.0, 3.0));
//! writer.write_cstring("dm6").unwrap();
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_u32().unwrap(), 89);
//! assert_eq!(reader.read_vec3().unwrap(), Vec3::new(1.0, 2.0, 3.0));
//! assert_eq!(reader.read_cstring(64).unwrap(), "dm6");
//! ```

mod error;
mod primitives;
mod reader;
mod text;
mod writer;

pub use error::{ByteError, ByteResult};
pub use primitives::{ColorArgb, ColorXrgb, Flag32, Vec2, Vec3, ViewAngle};
pub use reader::ByteReader;
pub use text::Text;
pub use writer::ByteWriter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_reads_nothing() {
        let writer = ByteWriter::new();
        let bytes = writer.finish();
        assert!(bytes.is_empty());

        let reader = ByteReader::new(&bytes);
        assert!(reader.is_empty());
    }

    #[test]
    fn mixed_primitives_share_one_buffer() {
        let mut writer = ByteWriter::new();
        writer.write_u8(0xFF);
        writer.write_i32(-7);
        writer.write_vec2(Vec2::new(0.5, -0.5));
        writer.write_view_angle(ViewAngle::new(1200, -300));
        writer.write_flag32(Flag32::new(true));
        writer.write_padded_string("Arena", 32).unwrap();
        let bytes = writer.finish();
        assert_eq!(bytes.len(), 1 + 4 + 8 + 4 + 4 + 32);

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_u8().unwrap(), 0xFF);
        assert_eq!(reader.read_i32().unwrap(), -7);
        assert_eq!(reader.read_vec2().unwrap(), Vec2::new(0.5, -0.5));
        assert_eq!(reader.read_view_angle().unwrap(), ViewAngle::new(1200, -300));
        assert!(reader.read_flag32().unwrap().is_set());
        assert_eq!(reader.read_padded_string(32).unwrap(), "Arena");
        assert!(reader.is_empty());
    }
}
