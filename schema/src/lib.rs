//! Entity type tags and field tables for the reflay replay codec.
//!
//! This crate describes how entity records are laid out on the wire:
//! - The 33 entity type tags
//! - One static field table per type: chained mask bytes and the fields each bit gates
//! - The fixed field blocks of prefab templates
//! - Validation of the tables' structural invariants
//!
//! # Design Principles
//!
//! - **Tables are data** - Layouts are static lookups, never per-field branching code.
//! - **No I/O** - This crate knows nothing about byte streams; the codec interprets the tables.
//! - **Unknowns are explicit** - Fields of unknown meaning keep their exact width as opaque bytes.

mod entity_type;
mod error;
mod field;
mod tables;

use std::collections::HashSet;

pub use entity_type::{EntityType, ENTITY_TYPE_COUNT};
pub use error::{SchemaError, SchemaResult};
pub use field::{
    entity_ref, field, fixed, marker, EntitySchema, FieldCodec, FieldDef, FieldRole, MaskDef,
    MaskPresence, Slot,
};
pub use tables::template_layout;

/// Mask bit that marks an entity record as a CREATE.
pub const CREATE_BIT: u8 = 0x01;

/// Returns the field table for `entity_type`.
#[must_use]
pub fn schema_for(entity_type: EntityType) -> &'static EntitySchema {
    &tables::ENTITY_SCHEMAS[usize::from(entity_type.raw())]
}

/// Validates the structural invariants of one entity table.
pub fn validate(schema: &EntitySchema) -> SchemaResult<()> {
    let entity_type = schema.entity_type;
    let mut names = HashSet::new();

    for (mask_index, mask) in schema.masks.iter().enumerate() {
        if mask_index == 0 && mask.presence != MaskPresence::Always {
            return Err(SchemaError::ConditionalPrimary { entity_type });
        }

        let mut previous = 0u8;
        for def in mask.fields {
            let Slot::Bit(bit) = def.slot else {
                return Err(SchemaError::SlotMismatch {
                    entity_type,
                    name: def.name,
                });
            };
            if bit.count_ones() != 1 || (mask_index == 0 && bit == CREATE_BIT) {
                return Err(SchemaError::InvalidBit {
                    entity_type,
                    mask: mask_index,
                    bit,
                });
            }
            if bit < previous {
                return Err(SchemaError::UnorderedBits {
                    entity_type,
                    mask: mask_index,
                    name: def.name,
                });
            }
            previous = bit;
            if !names.insert(def.name) {
                return Err(SchemaError::DuplicateFieldName {
                    entity_type,
                    name: def.name,
                });
            }
        }
    }

    for def in schema.trailing {
        if def.slot != Slot::Always {
            return Err(SchemaError::SlotMismatch {
                entity_type,
                name: def.name,
            });
        }
        if !names.insert(def.name) {
            return Err(SchemaError::DuplicateFieldName {
                entity_type,
                name: def.name,
            });
        }
    }
    Ok(())
}

/// Validates the fixed field block of one template layout.
pub fn validate_template(entity_type: EntityType, layout: &[FieldDef]) -> SchemaResult<()> {
    let mut names = HashSet::new();
    for def in layout {
        if def.slot != Slot::Always {
            return Err(SchemaError::SlotMismatch {
                entity_type,
                name: def.name,
            });
        }
        if def.codec.fixed_size().is_none() {
            return Err(SchemaError::VariableTemplateField {
                entity_type,
                name: def.name,
            });
        }
        if !names.insert(def.name) {
            return Err(SchemaError::DuplicateFieldName {
                entity_type,
                name: def.name,
            });
        }
    }
    Ok(())
}

/// Validates every built-in entity table and template layout.
pub fn validate_all() -> SchemaResult<()> {
    for entity_type in EntityType::ALL {
        validate(schema_for(entity_type))?;
        validate_template(entity_type, template_layout(entity_type))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_indexed_by_tag() {
        for entity_type in EntityType::ALL {
            assert_eq!(schema_for(entity_type).entity_type, entity_type);
        }
    }

    #[test]
    fn builtin_tables_validate() {
        validate_all().unwrap();
    }

    #[test]
    fn mask_counts() {
        let expected = [
            (EntityType::WorldSpawn, 27),
            (EntityType::Player, 21),
            (EntityType::Effect, 5),
            (EntityType::Pickup, 3),
            (EntityType::PlayerSpawn, 2),
            (EntityType::ProjectileStake, 2),
            (EntityType::CameraPath, 2),
            (EntityType::Prefab, 2),
            (EntityType::Message, 2),
            (EntityType::Turret, 2),
            (EntityType::Shootable, 2),
            (EntityType::PointLight, 1),
            (EntityType::Vote, 1),
            (EntityType::NavLink, 1),
        ];
        for (entity_type, count) in expected {
            assert_eq!(schema_for(entity_type).mask_count(), count, "{entity_type}");
        }
    }

    #[test]
    fn flat_indices_follow_mask_field_counts() {
        for entity_type in EntityType::ALL {
            let schema = schema_for(entity_type);
            let mut start = 0u16;
            for mask in schema.masks {
                if let Some(first) = mask.fields.first() {
                    assert_eq!(schema.field(start).map(|def| def.name), Some(first.name));
                }
                start += mask.field_count();
            }
            let total = start + u16::try_from(schema.trailing.len()).unwrap();
            let indices: Vec<u16> = schema.fields().map(|(index, _)| index).collect();
            assert_eq!(indices, (0..total).collect::<Vec<_>>(), "{entity_type}");
        }
    }

    #[test]
    fn camera_path_second_mask_is_conditional() {
        let schema = schema_for(EntityType::CameraPath);
        assert_eq!(
            schema.masks[1].presence,
            MaskPresence::IfPrimaryAny(0x04 | 0x40 | 0x80)
        );
        let position = schema.index_of("position").unwrap();
        let rotation = schema.index_of("rotation").unwrap();
        assert_eq!(schema.field(position).unwrap().bit(), Some(0x08));
        assert_eq!(schema.field(rotation).unwrap().bit(), Some(0x08));
        assert_eq!(rotation, position + 1);
    }

    #[test]
    fn vote_has_trailing_text() {
        let schema = schema_for(EntityType::Vote);
        assert_eq!(schema.trailing.len(), 1);
        assert_eq!(schema.trailing[0].codec, FieldCodec::CString);
    }

    #[test]
    fn reference_roles() {
        let refs = |entity_type| -> Vec<&'static str> {
            schema_for(entity_type)
                .id_fields()
                .map(|(_, def)| def.name)
                .collect()
        };
        for entity_type in EntityType::ALL.into_iter().filter(|ty| ty.is_projectile()) {
            assert_eq!(refs(entity_type), vec!["spawned_by_entity_id"]);
        }
        assert_eq!(refs(EntityType::ChatMessage), vec!["sender_id"]);
        assert_eq!(refs(EntityType::CameraPath), vec!["entity_id_attached_to"]);
        assert_eq!(refs(EntityType::Vote), vec!["creator_id"]);
        assert_eq!(refs(EntityType::Damage), vec!["sender_id", "receiver_id"]);
        assert_eq!(
            refs(EntityType::Prefab),
            vec!["next_sub_entity_id", "next_normal_entity_id"]
        );
        assert!(refs(EntityType::Player).is_empty());
    }

    #[test]
    fn unknown_bits_are_left_unassigned() {
        assert_eq!(schema_for(EntityType::WorldSpawn).masks[0].assigned_bits() & 0x02, 0);
        assert_eq!(schema_for(EntityType::ReflectionProbe).masks[0].assigned_bits(), 0x0E);
        assert_eq!(schema_for(EntityType::Prefab).masks[1].assigned_bits(), 0x03);
        assert_eq!(schema_for(EntityType::Effect).masks[4].assigned_bits() & 0xC0, 0);
    }

    #[test]
    fn template_layouts() {
        assert!(template_layout(EntityType::Player).is_empty());
        let light = template_layout(EntityType::PointLight);
        let size: usize = light.iter().filter_map(|def| def.codec.fixed_size()).sum();
        assert_eq!(size, 12 + 12 + 4 + 4 + 4 + 4);
        let prefab = template_layout(EntityType::Prefab);
        assert_eq!(prefab[2].name, "prefab_name");
        assert_eq!(prefab[2].codec, FieldCodec::Padded(64));
    }

    #[test]
    fn validation_rejects_create_bit() {
        const BAD: EntitySchema = EntitySchema {
            entity_type: EntityType::Exit,
            masks: &[MaskDef {
                presence: MaskPresence::Always,
                fields: &[field(CREATE_BIT, "oops", FieldCodec::U8)],
            }],
            trailing: &[],
        };
        assert!(matches!(
            validate(&BAD),
            Err(SchemaError::InvalidBit { bit: 0x01, .. })
        ));
    }

    #[test]
    fn validation_rejects_unordered_bits() {
        const BAD: EntitySchema = EntitySchema {
            entity_type: EntityType::Exit,
            masks: &[MaskDef {
                presence: MaskPresence::Always,
                fields: &[
                    field(0x08, "b", FieldCodec::U8),
                    field(0x04, "a", FieldCodec::U8),
                ],
            }],
            trailing: &[],
        };
        assert!(matches!(
            validate(&BAD),
            Err(SchemaError::UnorderedBits { name: "a", .. })
        ));
    }

    #[test]
    fn validation_rejects_variable_template_fields() {
        let layout = [fixed("name", FieldCodec::CString)];
        assert!(matches!(
            validate_template(EntityType::Goal, &layout),
            Err(SchemaError::VariableTemplateField { .. })
        ));
    }
}
