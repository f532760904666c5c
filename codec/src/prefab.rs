//! Prefab placement records.
//!
//! A placement carries a name and the entity templates an instance of that
//! prefab expands to. Template fields have no masks: each type has a fixed
//! block described by [`schema::template_layout`].

use bytestream::{ByteReader, ByteWriter, Text};
use schema::{template_layout, EntityType};
use wire::{LimitKind, WireError};

use crate::brush::{decode_prefab_brush, encode_prefab_brush, PrefabBrush};
use crate::error::{CodecError, CodecResult};
use crate::session::Session;
use crate::types::Timecode;
use crate::value::{read_value, write_value, FieldValue};

/// Width of the padded name slot.
pub const PREFAB_NAME_LEN: usize = 32;

/// One template entity of a prefab.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityTemplate {
    pub entity_type: EntityType,
    /// The type tag widened to 32 bits, as recorded.
    pub type32: u32,
    pub unknown: i32,
    /// Values in [`template_layout`] order.
    pub fields: Vec<FieldValue>,
    pub brushes: Vec<PrefabBrush>,
}

impl EntityTemplate {
    /// Returns the template field called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        template_layout(self.entity_type)
            .iter()
            .position(|def| def.name == name)
            .and_then(|index| self.fields.get(index))
    }
}

/// A prefab placement record.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefabPlacement {
    pub prefab_id: u32,
    pub name: Text,
    pub templates: Vec<EntityTemplate>,
}

impl PrefabPlacement {
    /// Types registered for an instance's sub-entities, in ID order.
    pub fn sub_entity_types(&self) -> impl Iterator<Item = EntityType> + '_ {
        self.templates.iter().map(|template| template.entity_type)
    }

    /// Number of IDs an instance occupies after its own.
    #[must_use]
    pub fn span(&self) -> usize {
        self.templates.len()
    }
}

fn check_limit(kind: LimitKind, limit: usize, actual: usize) -> CodecResult<()> {
    if actual > limit {
        return Err(WireError::LimitsExceeded {
            kind,
            limit,
            actual,
        }
        .into());
    }
    Ok(())
}

fn decode_template(
    reader: &mut ByteReader<'_>,
    session: &Session,
    timecode: Timecode,
) -> CodecResult<EntityTemplate> {
    let limits = session.limits();
    let brush_count = reader.read_u32()? as usize;
    check_limit(
        LimitKind::TemplateBrushes,
        limits.max_template_brushes,
        brush_count,
    )?;
    let raw = reader.read_u8()?;
    let entity_type = EntityType::from_raw(raw).ok_or(CodecError::UnknownEntityType {
        raw,
        id: None,
        timecode,
    })?;
    let type32 = reader.read_u32()?;
    let unknown = reader.read_i32()?;

    let layout = template_layout(entity_type);
    let mut fields = Vec::with_capacity(layout.len());
    for def in layout {
        fields.push(read_value(reader, def.codec, limits.max_string_len)?);
    }

    let mut brushes = Vec::with_capacity(brush_count.min(reader.remaining()));
    for _ in 0..brush_count {
        brushes.push(decode_prefab_brush(reader, limits.max_string_len)?);
    }

    Ok(EntityTemplate {
        entity_type,
        type32,
        unknown,
        fields,
        brushes,
    })
}

fn encode_template(writer: &mut ByteWriter, template: &EntityTemplate) -> CodecResult<()> {
    let entity_type = template.entity_type;
    let layout = template_layout(entity_type);
    if let Some(def) = layout.get(template.fields.len()) {
        return Err(CodecError::MissingField {
            entity_type,
            field: def.name,
        });
    }
    if template.fields.len() > layout.len() {
        return Err(CodecError::UnknownField {
            entity_type,
            name: format!("#{}", layout.len()),
        });
    }

    writer.write_u32(u32::try_from(template.brushes.len()).unwrap_or(u32::MAX));
    writer.write_u8(entity_type.raw());
    writer.write_u32(template.type32);
    writer.write_i32(template.unknown);
    for (def, value) in layout.iter().zip(&template.fields) {
        if !write_value(writer, def.codec, value)? {
            return Err(CodecError::ValueMismatch {
                entity_type,
                field: def.name,
                expected: def.codec,
            });
        }
    }
    for brush in &template.brushes {
        encode_prefab_brush(writer, brush)?;
    }
    Ok(())
}

/// Decodes one placement and registers it with the session.
pub(crate) fn decode_prefab(
    reader: &mut ByteReader<'_>,
    session: &mut Session,
    timecode: Timecode,
) -> CodecResult<PrefabPlacement> {
    let prefab_id = reader.read_u32()?;
    let name = reader.read_padded_string(PREFAB_NAME_LEN)?;
    let count = reader.read_u32()? as usize;
    check_limit(
        LimitKind::PrefabTemplates,
        session.limits().max_prefab_templates,
        count,
    )?;

    let mut templates = Vec::with_capacity(count.min(reader.remaining()));
    for _ in 0..count {
        templates.push(decode_template(reader, session, timecode)?);
    }

    let placement = PrefabPlacement {
        prefab_id,
        name,
        templates,
    };
    session.observe_prefab(&placement);
    tracing::trace!(
        name = %placement.name,
        templates = placement.templates.len(),
        %timecode,
        "prefab"
    );
    Ok(placement)
}

/// Encodes one placement and registers it with the session.
pub(crate) fn encode_prefab(
    writer: &mut ByteWriter,
    session: &mut Session,
    placement: &PrefabPlacement,
) -> CodecResult<()> {
    writer.write_u32(placement.prefab_id);
    writer.write_padded_string(&placement.name, PREFAB_NAME_LEN)?;
    writer.write_u32(u32::try_from(placement.templates.len()).unwrap_or(u32::MAX));
    for template in &placement.templates {
        encode_template(writer, template)?;
    }
    session.observe_prefab(placement);
    Ok(())
}
