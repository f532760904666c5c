//! Brush geometry records.

use bytestream::{ByteError, ByteReader, ByteWriter, ColorXrgb, Text, Vec2, Vec3};

use crate::error::CodecResult;
use crate::types::EntityId;

/// One polygon face of a brush.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Face {
    pub index: u8,
    pub edge_count: u8,
    pub unknown: u16,
    pub offset: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
}

/// A material name and its tint.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    pub name: Text,
    pub color: ColorXrgb,
}

/// The geometry shared by level brushes and prefab template brushes.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrushGeometry {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<Face>,
    pub face_table: Vec<u8>,
    pub materials: Vec<Material>,
}

/// A level brush, optionally attached to an entity.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Brush {
    pub brush_id: u32,
    pub unknown: u8,
    /// Total byte length of the material name array, as recorded.
    pub material_bytes: u32,
    pub attached_entity: u32,
    pub unknown2: i32,
    pub geometry: BrushGeometry,
}

impl Brush {
    /// Returns the attached entity's ID.
    #[must_use]
    pub const fn attached_to(&self) -> EntityId {
        EntityId::new(self.attached_entity)
    }
}

/// A brush inside a prefab template.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrefabBrush {
    pub material_bytes: u32,
    pub unknown1: u32,
    pub unknown2: i32,
    pub geometry: BrushGeometry,
}

/// Element counts, in stream order.
struct Counts {
    vertices: u8,
    faces: u8,
    face_table: u8,
    materials: u8,
}

impl Counts {
    fn read(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            vertices: reader.read_u8()?,
            faces: reader.read_u8()?,
            face_table: reader.read_u8()?,
            materials: reader.read_u8()?,
        })
    }

    fn of(geometry: &BrushGeometry) -> CodecResult<Self> {
        Ok(Self {
            vertices: count(geometry.vertices.len())?,
            faces: count(geometry.faces.len())?,
            face_table: count(geometry.face_table.len())?,
            materials: count(geometry.materials.len())?,
        })
    }

    fn write(&self, writer: &mut ByteWriter) {
        writer.write_u8(self.vertices);
        writer.write_u8(self.faces);
        writer.write_u8(self.face_table);
        writer.write_u8(self.materials);
    }
}

fn count(len: usize) -> CodecResult<u8> {
    u8::try_from(len).map_err(|_| {
        ByteError::LengthExceeded {
            max: usize::from(u8::MAX),
            actual: len,
        }
        .into()
    })
}

fn read_face(reader: &mut ByteReader<'_>) -> CodecResult<Face> {
    Ok(Face {
        index: reader.read_u8()?,
        edge_count: reader.read_u8()?,
        unknown: reader.read_u16()?,
        offset: reader.read_vec2()?,
        scale: reader.read_vec2()?,
        rotation: reader.read_f32()?,
    })
}

fn write_face(writer: &mut ByteWriter, face: &Face) {
    writer.write_u8(face.index);
    writer.write_u8(face.edge_count);
    writer.write_u16(face.unknown);
    writer.write_vec2(face.offset);
    writer.write_vec2(face.scale);
    writer.write_f32(face.rotation);
}

fn read_geometry(
    reader: &mut ByteReader<'_>,
    counts: &Counts,
    max_string_len: usize,
) -> CodecResult<BrushGeometry> {
    let vertices = (0..counts.vertices)
        .map(|_| reader.read_vec3())
        .collect::<Result<Vec<_>, _>>()?;
    let faces = (0..counts.faces)
        .map(|_| read_face(reader))
        .collect::<CodecResult<Vec<_>>>()?;
    let face_table = reader.read_bytes(usize::from(counts.face_table))?.to_vec();
    let names = (0..counts.materials)
        .map(|_| reader.read_cstring(max_string_len))
        .collect::<Result<Vec<_>, _>>()?;
    let mut materials = Vec::with_capacity(names.len());
    for name in names {
        materials.push(Material {
            name,
            color: reader.read_xrgb()?,
        });
    }
    Ok(BrushGeometry {
        vertices,
        faces,
        face_table,
        materials,
    })
}

fn write_geometry(writer: &mut ByteWriter, geometry: &BrushGeometry) -> CodecResult<()> {
    for vertex in &geometry.vertices {
        writer.write_vec3(*vertex);
    }
    for face in &geometry.faces {
        write_face(writer, face);
    }
    writer.write_bytes(&geometry.face_table);
    for material in &geometry.materials {
        writer.write_cstring(&material.name)?;
    }
    for material in &geometry.materials {
        writer.write_xrgb(material.color);
    }
    Ok(())
}

pub(crate) fn decode_brush(reader: &mut ByteReader<'_>, max_string_len: usize) -> CodecResult<Brush> {
    let brush_id = reader.read_u32()?;
    let unknown = reader.read_u8()?;
    let counts = Counts::read(reader)?;
    let material_bytes = reader.read_u32()?;
    let attached_entity = reader.read_u32()?;
    let unknown2 = reader.read_i32()?;
    let geometry = read_geometry(reader, &counts, max_string_len)?;
    Ok(Brush {
        brush_id,
        unknown,
        material_bytes,
        attached_entity,
        unknown2,
        geometry,
    })
}

pub(crate) fn encode_brush(writer: &mut ByteWriter, brush: &Brush) -> CodecResult<()> {
    let counts = Counts::of(&brush.geometry)?;
    writer.write_u32(brush.brush_id);
    writer.write_u8(brush.unknown);
    counts.write(writer);
    writer.write_u32(brush.material_bytes);
    writer.write_u32(brush.attached_entity);
    writer.write_i32(brush.unknown2);
    write_geometry(writer, &brush.geometry)
}

pub(crate) fn decode_prefab_brush(
    reader: &mut ByteReader<'_>,
    max_string_len: usize,
) -> CodecResult<PrefabBrush> {
    let counts = Counts::read(reader)?;
    let material_bytes = reader.read_u32()?;
    let unknown1 = reader.read_u32()?;
    let unknown2 = reader.read_i32()?;
    let geometry = read_geometry(reader, &counts, max_string_len)?;
    Ok(PrefabBrush {
        material_bytes,
        unknown1,
        unknown2,
        geometry,
    })
}

pub(crate) fn encode_prefab_brush(writer: &mut ByteWriter, brush: &PrefabBrush) -> CodecResult<()> {
    let counts = Counts::of(&brush.geometry)?;
    counts.write(writer);
    writer.write_u32(brush.material_bytes);
    writer.write_u32(brush.unknown1);
    writer.write_i32(brush.unknown2);
    write_geometry(writer, &brush.geometry)
}
