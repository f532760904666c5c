//! Read-only queries over a decoded replay.

use bytestream::{Vec3, ViewAngle};
use indexmap::{IndexMap, IndexSet};
use schema::EntityType;

use crate::registry::PrefabRegistry;
use crate::replay::Replay;
use crate::types::{EntityId, Timecode};

/// IDs a replay refers to again after creating them.
///
/// Destroy and update records contribute their ID, as do camera path
/// creates. World settings records never contribute. Order is first
/// appearance.
#[must_use]
pub fn referenced_entity_ids(replay: &Replay) -> IndexSet<EntityId> {
    let mut ids = IndexSet::new();
    for (_, record) in replay.entities() {
        if record.entity_type() == Some(EntityType::WorldSpawn) {
            continue;
        }
        let referenced = record.is_destroy()
            || !record.is_create()
            || record.entity_type() == Some(EntityType::CameraPath);
        if referenced {
            ids.insert(record.id);
        }
    }
    ids
}

/// The prefab registry as it stands at the end of the stream.
#[must_use]
pub fn prefab_registry(replay: &Replay) -> PrefabRegistry {
    let mut registry = PrefabRegistry::new();
    for tick in &replay.ticks {
        for placement in &tick.prefabs {
            registry.register(placement.name.clone(), placement.sub_entity_types().collect());
        }
    }
    registry
}

/// One movement sample of a player.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSample {
    pub timecode: Timecode,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub position: Option<Vec3>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub velocity: Option<Vec3>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub view_angle: Option<ViewAngle>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub camera_rotation: Option<Vec3>,
}

impl PlayerSample {
    const fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.velocity.is_none()
            && self.view_angle.is_none()
            && self.camera_rotation.is_none()
    }
}

/// The movement history of one player entity.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerTrack {
    pub id: EntityId,
    /// Name from the most recent record that carried one.
    pub name: Option<String>,
    pub samples: Vec<PlayerSample>,
}

/// Collects a movement track for every entity ever created as a player.
///
/// Records that carry none of the sampled fields are skipped. Tracks are
/// ordered by first creation.
#[must_use]
pub fn player_tracks(replay: &Replay) -> Vec<PlayerTrack> {
    let mut tracks: IndexMap<EntityId, PlayerTrack> = IndexMap::new();
    for (timecode, record) in replay.entities() {
        let Some(state) = record.state() else {
            continue;
        };
        if state.entity_type != EntityType::Player {
            continue;
        }
        let track = tracks.entry(record.id).or_insert_with(|| PlayerTrack {
            id: record.id,
            ..PlayerTrack::default()
        });
        if let Some(name) = state.get("name").and_then(|value| value.as_text()) {
            track.name = Some(name.to_string());
        }
        let sample = PlayerSample {
            timecode,
            position: state.get("position").and_then(|value| value.as_vec3()),
            velocity: state.get("velocity").and_then(|value| value.as_vec3()),
            view_angle: state.get("view_angle").and_then(|value| value.as_view_angle()),
            camera_rotation: state
                .get("camera_rotation")
                .and_then(|value| value.as_vec3()),
        };
        if !sample.is_empty() {
            track.samples.push(sample);
        }
    }
    tracks.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityRecord, EntityState};
    use crate::prefab::PrefabPlacement;
    use crate::tick::Tick;
    use crate::value::FieldValue;

    fn create(id: u32, entity_type: EntityType) -> EntityRecord {
        EntityRecord::create(EntityId::new(id), EntityState::new(entity_type))
    }

    fn update(id: u32, entity_type: EntityType) -> EntityRecord {
        EntityRecord::update(EntityId::new(id), EntityState::new(entity_type))
    }

    fn replay(ticks: Vec<(u32, Vec<EntityRecord>)>) -> Replay {
        Replay {
            ticks: ticks
                .into_iter()
                .map(|(timecode, entities)| Tick {
                    entities,
                    ..Tick::new(Timecode::new(timecode))
                })
                .collect(),
            ..Replay::default()
        }
    }

    #[test]
    fn referenced_ids() {
        let replay = replay(vec![
            (
                0,
                vec![
                    create(0, EntityType::WorldSpawn),
                    create(1, EntityType::Player),
                    create(2, EntityType::PointLight),
                    create(3, EntityType::CameraPath),
                ],
            ),
            (
                10,
                vec![
                    update(0, EntityType::WorldSpawn),
                    update(1, EntityType::Player),
                    EntityRecord::destroy(EntityId::new(5)),
                    update(1, EntityType::Player),
                ],
            ),
        ]);
        let ids: Vec<u32> = referenced_entity_ids(&replay)
            .into_iter()
            .map(EntityId::raw)
            .collect();
        assert_eq!(ids, vec![3, 1, 5]);
    }

    #[test]
    fn tracks_follow_players_only() {
        let moving = EntityState::new(EntityType::Player)
            .with("position", FieldValue::Vec3(Vec3::new(1.0, 2.0, 3.0)))
            .unwrap()
            .with("view_angle", FieldValue::ViewAngle(ViewAngle::new(9, -9)))
            .unwrap();
        let named = EntityState::new(EntityType::Player)
            .with("name", FieldValue::Text("ana".into()))
            .unwrap();
        let replay = replay(vec![
            (
                0,
                vec![
                    EntityRecord::create(EntityId::new(4), named),
                    create(5, EntityType::PointLight),
                ],
            ),
            (
                8,
                vec![
                    EntityRecord::update(EntityId::new(4), moving),
                    update(5, EntityType::PointLight),
                ],
            ),
        ]);

        let tracks = player_tracks(&replay);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, EntityId::new(4));
        assert_eq!(tracks[0].name.as_deref(), Some("ana"));
        assert_eq!(
            tracks[0].samples,
            vec![PlayerSample {
                timecode: Timecode::new(8),
                position: Some(Vec3::new(1.0, 2.0, 3.0)),
                view_angle: Some(ViewAngle::new(9, -9)),
                ..PlayerSample::default()
            }]
        );
    }

    #[test]
    fn registry_keeps_last_placement() {
        let mut first = Tick::new(Timecode::new(0));
        first.prefabs.push(PrefabPlacement {
            prefab_id: 1,
            name: "door".into(),
            templates: vec![],
        });
        let mut replay = replay(vec![]);
        replay.ticks.push(first.clone());
        first.prefabs[0].name = "gate".into();
        replay.ticks.push(first);
        let registry = prefab_registry(&replay);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["door", "gate"]);
    }
}
