//! Entity delta records.
//!
//! An entity record is a packed ID word followed, unless it is a destroy, by a
//! chain of mask bytes. Each mask byte is immediately followed by the fields
//! its set bits gate, in table order. The table for a record is chosen by the
//! type tag on CREATE, or by the type registered for the ID on UPDATE.

use bytestream::{ByteReader, ByteWriter, Text};
use schema::{schema_for, EntitySchema, EntityType, FieldDef, Slot, CREATE_BIT};
use smallvec::SmallVec;

use crate::error::{CodecError, CodecResult};
use crate::session::Session;
use crate::types::{EntityId, Timecode};
use crate::value::{read_value, write_value, FieldValue};

/// Field values of one record, keyed by the schema's flat field index.
///
/// Set mask bits that have no table entry are kept per mask byte so they
/// survive a round trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    values: SmallVec<[(u16, FieldValue); 8]>,
    unknown_bits: SmallVec<[(u8, u8); 2]>,
}

impl FieldSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn position(&self, index: u16) -> Result<usize, usize> {
        self.values.binary_search_by_key(&index, |(key, _)| *key)
    }

    #[must_use]
    pub fn contains(&self, index: u16) -> bool {
        self.position(index).is_ok()
    }

    #[must_use]
    pub fn get(&self, index: u16) -> Option<&FieldValue> {
        self.position(index).ok().map(|pos| &self.values[pos].1)
    }

    pub fn get_mut(&mut self, index: u16) -> Option<&mut FieldValue> {
        self.position(index).ok().map(|pos| &mut self.values[pos].1)
    }

    /// Sets the value at `index`, returning the previous value.
    pub fn insert(&mut self, index: u16, value: FieldValue) -> Option<FieldValue> {
        match self.position(index) {
            Ok(pos) => Some(std::mem::replace(&mut self.values[pos].1, value)),
            Err(pos) => {
                self.values.insert(pos, (index, value));
                None
            }
        }
    }

    pub fn remove(&mut self, index: u16) -> Option<FieldValue> {
        self.position(index)
            .ok()
            .map(|pos| self.values.remove(pos).1)
    }

    /// Iterates present values in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &FieldValue)> + '_ {
        self.values.iter().map(|(index, value)| (*index, value))
    }

    /// Returns the unassigned bits that were set in mask byte `mask`.
    #[must_use]
    pub fn unknown_bits(&self, mask: usize) -> u8 {
        self.unknown_bits
            .iter()
            .find(|(candidate, _)| usize::from(*candidate) == mask)
            .map_or(0, |(_, bits)| *bits)
    }

    pub fn set_unknown_bits(&mut self, mask: usize, bits: u8) {
        let Ok(key) = u8::try_from(mask) else {
            return;
        };
        self.unknown_bits.retain(|(candidate, _)| *candidate != key);
        if bits != 0 {
            self.unknown_bits.push((key, bits));
            self.unknown_bits.sort_unstable_by_key(|(candidate, _)| *candidate);
        }
    }

    /// Returns `true` if any mask byte carried unassigned bits.
    #[must_use]
    pub fn has_unknown_bits(&self) -> bool {
        !self.unknown_bits.is_empty()
    }
}

/// The typed field payload of a CREATE or UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityState {
    pub entity_type: EntityType,
    pub fields: FieldSet,
}

impl EntityState {
    #[must_use]
    pub fn new(entity_type: EntityType) -> Self {
        Self {
            entity_type,
            fields: FieldSet::new(),
        }
    }

    #[must_use]
    pub fn schema(&self) -> &'static EntitySchema {
        schema_for(self.entity_type)
    }

    /// Returns the value of the field called `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.schema()
            .index_of(name)
            .and_then(|index| self.fields.get(index))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldValue> {
        let index = self.schema().index_of(name)?;
        self.fields.get_mut(index)
    }

    /// Sets the field called `name`, checking the value against its codec.
    pub fn set(&mut self, name: &str, value: FieldValue) -> CodecResult<Option<FieldValue>> {
        let schema = self.schema();
        let index = schema
            .index_of(name)
            .ok_or_else(|| CodecError::UnknownField {
                entity_type: self.entity_type,
                name: name.to_owned(),
            })?;
        let def = schema.field(index).ok_or_else(|| CodecError::UnknownField {
            entity_type: self.entity_type,
            name: name.to_owned(),
        })?;
        if !value.matches(def.codec) {
            return Err(CodecError::ValueMismatch {
                entity_type: self.entity_type,
                field: def.name,
                expected: def.codec,
            });
        }
        Ok(self.fields.insert(index, value))
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: &str, value: FieldValue) -> CodecResult<Self> {
        self.set(name, value)?;
        Ok(self)
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        let index = self.schema().index_of(name)?;
        self.fields.remove(index)
    }

    /// Iterates present fields with their definitions.
    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldDef, &FieldValue)> + '_ {
        let schema = self.schema();
        self.fields
            .iter()
            .filter_map(move |(index, value)| schema.field(index).map(|def| (def, value)))
    }

    /// Returns the prefab name carried by a prefab entity.
    #[must_use]
    pub fn prefab_name(&self) -> Option<&Text> {
        if self.entity_type != EntityType::Prefab {
            return None;
        }
        self.get("prefab_name").and_then(FieldValue::as_text)
    }
}

/// What a record does to its entity.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityDelta {
    Destroy,
    Create(EntityState),
    Update(EntityState),
}

/// One entity delta record.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    pub id: EntityId,
    pub delta: EntityDelta,
}

impl EntityRecord {
    #[must_use]
    pub const fn destroy(id: EntityId) -> Self {
        Self {
            id,
            delta: EntityDelta::Destroy,
        }
    }

    #[must_use]
    pub const fn create(id: EntityId, state: EntityState) -> Self {
        Self {
            id,
            delta: EntityDelta::Create(state),
        }
    }

    #[must_use]
    pub const fn update(id: EntityId, state: EntityState) -> Self {
        Self {
            id,
            delta: EntityDelta::Update(state),
        }
    }

    #[must_use]
    pub const fn is_create(&self) -> bool {
        matches!(self.delta, EntityDelta::Create(_))
    }

    #[must_use]
    pub const fn is_destroy(&self) -> bool {
        matches!(self.delta, EntityDelta::Destroy)
    }

    /// Returns the field payload of a CREATE or UPDATE.
    #[must_use]
    pub const fn state(&self) -> Option<&EntityState> {
        match &self.delta {
            EntityDelta::Create(state) | EntityDelta::Update(state) => Some(state),
            EntityDelta::Destroy => None,
        }
    }

    pub fn state_mut(&mut self) -> Option<&mut EntityState> {
        match &mut self.delta {
            EntityDelta::Create(state) | EntityDelta::Update(state) => Some(state),
            EntityDelta::Destroy => None,
        }
    }

    /// Returns the entity type carried by the payload.
    #[must_use]
    pub fn entity_type(&self) -> Option<EntityType> {
        self.state().map(|state| state.entity_type)
    }
}

/// Decodes one entity record, updating the session's registries.
pub(crate) fn decode_entity(
    reader: &mut ByteReader<'_>,
    session: &mut Session,
    timecode: Timecode,
) -> CodecResult<EntityRecord> {
    let (id, destroy) = EntityId::unpack(reader.read_u32()?);
    if destroy {
        session.observe_destroy(id, timecode)?;
        tracing::trace!(%id, %timecode, "destroy");
        return Ok(EntityRecord::destroy(id));
    }

    let primary = reader.read_u8()?;
    let create = primary & CREATE_BIT != 0;
    let entity_type = if create {
        let raw = reader.read_u8()?;
        EntityType::from_raw(raw).ok_or(CodecError::UnknownEntityType {
            raw,
            id: Some(id),
            timecode,
        })?
    } else {
        session.entities.resolve(id, timecode)?
    };

    let max_string_len = session.limits().max_string_len;
    let fields = read_fields(reader, schema_for(entity_type), primary, max_string_len)?;
    let state = EntityState {
        entity_type,
        fields,
    };

    if create {
        session.observe_create(id, &state, timecode)?;
        tracing::trace!(%id, %entity_type, %timecode, "create");
        Ok(EntityRecord::create(id, state))
    } else {
        tracing::trace!(%id, %entity_type, %timecode, "update");
        Ok(EntityRecord::update(id, state))
    }
}

/// Encodes one entity record, applying the same registry rules as decoding.
pub(crate) fn encode_entity(
    writer: &mut ByteWriter,
    session: &mut Session,
    record: &EntityRecord,
    timecode: Timecode,
) -> CodecResult<()> {
    let id = record.id;
    let (state, create) = match &record.delta {
        EntityDelta::Destroy => {
            let word = id.pack(true).ok_or(CodecError::EntityIdOutOfRange { id })?;
            session.observe_destroy(id, timecode)?;
            writer.write_u32(word);
            return Ok(());
        }
        EntityDelta::Create(state) => (state, true),
        EntityDelta::Update(state) => {
            let registered = session.entities.resolve(id, timecode)?;
            if registered != state.entity_type {
                return Err(CodecError::EntityTypeMismatch {
                    id,
                    registered,
                    found: state.entity_type,
                });
            }
            (state, false)
        }
    };

    let word = id.pack(false).ok_or(CodecError::EntityIdOutOfRange { id })?;
    let schema = state.schema();
    let masks = mask_bytes(schema, &state.fields, create)?;

    writer.write_u32(word);
    writer.write_u8(masks[0]);
    if create {
        writer.write_u8(state.entity_type.raw());
    }
    write_fields(writer, schema, &state.fields, &masks)?;

    if create {
        session.observe_create(id, state, timecode)?;
    }
    Ok(())
}

/// Reads the fields gated by `primary` and any further mask bytes.
///
/// The primary mask byte has already been consumed by the caller.
pub(crate) fn read_fields(
    reader: &mut ByteReader<'_>,
    schema: &EntitySchema,
    primary: u8,
    max_string_len: usize,
) -> CodecResult<FieldSet> {
    let mut fields = FieldSet::new();
    let mut index = 0u16;

    for (mask_index, mask) in schema.masks.iter().enumerate() {
        let bits = if mask_index == 0 {
            primary & !CREATE_BIT
        } else if mask.presence.is_present(primary) {
            reader.read_u8()?
        } else {
            index = index.saturating_add(mask.field_count());
            continue;
        };

        for def in mask.fields {
            if let Slot::Bit(bit) = def.slot {
                if bits & bit != 0 {
                    fields.insert(index, read_value(reader, def.codec, max_string_len)?);
                }
            }
            index += 1;
        }

        let unknown = bits & !mask.assigned_bits();
        if unknown != 0 {
            tracing::debug!(
                entity_type = %schema.entity_type,
                mask = mask_index,
                bits = format_args!("{unknown:#04x}"),
                "unknown mask bits"
            );
            fields.set_unknown_bits(mask_index, unknown);
        }
    }

    for def in schema.trailing {
        fields.insert(index, read_value(reader, def.codec, max_string_len)?);
        index += 1;
    }
    Ok(fields)
}

/// Computes the mask bytes for `fields`, one per mask of the schema.
///
/// Bytes for conditional masks whose condition is unmet are zero and are not
/// written.
pub(crate) fn mask_bytes(
    schema: &EntitySchema,
    fields: &FieldSet,
    create: bool,
) -> CodecResult<SmallVec<[u8; 4]>> {
    let entity_type = schema.entity_type;
    let mut masks = SmallVec::<[u8; 4]>::with_capacity(schema.masks.len().max(1));
    let mut index = 0u16;
    let mut covered = 0usize;

    for (mask_index, mask) in schema.masks.iter().enumerate() {
        let start = index;
        let mut bits = fields.unknown_bits(mask_index) & !mask.assigned_bits();
        if mask_index == 0 {
            bits &= !CREATE_BIT;
            if create {
                bits |= CREATE_BIT;
            }
        }

        for def in mask.fields {
            if fields.contains(index) {
                bits |= def.bit().unwrap_or(0);
                covered += 1;
            }
            index += 1;
        }

        let mut field_index = start;
        for def in mask.fields {
            if let Some(bit) = def.bit() {
                if bits & bit != 0 && !fields.contains(field_index) {
                    return Err(CodecError::IncompleteBit {
                        entity_type,
                        field: def.name,
                    });
                }
            }
            field_index += 1;
        }

        if mask_index > 0 && !mask.presence.is_present(masks[0]) {
            if bits != 0 {
                return Err(CodecError::MaskUnreachable {
                    entity_type,
                    mask: mask_index,
                });
            }
            masks.push(0);
            continue;
        }
        masks.push(bits);
    }

    if masks.is_empty() {
        masks.push(if create { CREATE_BIT } else { 0 });
    }

    for def in schema.trailing {
        if !fields.contains(index) {
            return Err(CodecError::MissingField {
                entity_type,
                field: def.name,
            });
        }
        covered += 1;
        index += 1;
    }

    if covered != fields.len() {
        let stray = fields
            .iter()
            .map(|(key, _)| key)
            .find(|key| usize::from(*key) >= usize::from(index))
            .unwrap_or(index);
        return Err(CodecError::UnknownField {
            entity_type,
            name: format!("#{stray}"),
        });
    }
    Ok(masks)
}

/// Writes every mask byte after the primary one, each followed by its fields.
pub(crate) fn write_fields(
    writer: &mut ByteWriter,
    schema: &EntitySchema,
    fields: &FieldSet,
    masks: &[u8],
) -> CodecResult<()> {
    let primary = masks.first().copied().unwrap_or(0);
    let mut index = 0u16;

    for (mask_index, mask) in schema.masks.iter().enumerate() {
        if mask_index > 0 {
            if !mask.presence.is_present(primary) {
                index = index.saturating_add(mask.field_count());
                continue;
            }
            writer.write_u8(masks.get(mask_index).copied().unwrap_or(0));
        }
        for def in mask.fields {
            if let Some(value) = fields.get(index) {
                write_field(writer, schema, def, value)?;
            }
            index += 1;
        }
    }

    for def in schema.trailing {
        let value = fields.get(index).ok_or(CodecError::MissingField {
            entity_type: schema.entity_type,
            field: def.name,
        })?;
        write_field(writer, schema, def, value)?;
        index += 1;
    }
    Ok(())
}

fn write_field(
    writer: &mut ByteWriter,
    schema: &EntitySchema,
    def: &FieldDef,
    value: &FieldValue,
) -> CodecResult<()> {
    if write_value(writer, def.codec, value)? {
        Ok(())
    } else {
        Err(CodecError::ValueMismatch {
            entity_type: schema.entity_type,
            field: def.name,
            expected: def.codec,
        })
    }
}
