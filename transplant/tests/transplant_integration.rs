use bytestream::{ColorXrgb, Vec3};
use codec::{
    Brush, EntityId, EntityRecord, EntityState, EntityTemplate, FieldValue, PrefabPlacement,
    Replay, Session, Tick, Timecode,
};
use schema::{template_layout, EntityType, FieldCodec};
use transplant::{transplant, transplant_bytes, Side, TransplantError, TransplantPlan};
use wire::Limits;

fn template(entity_type: EntityType) -> EntityTemplate {
    let fields = template_layout(entity_type)
        .iter()
        .map(|def| match def.codec {
            FieldCodec::Vec3 => FieldValue::Vec3(Vec3::new(0.0, 2.0, 0.0)),
            FieldCodec::Xrgb => FieldValue::Xrgb(ColorXrgb::new(9, 9, 9)),
            FieldCodec::F32 => FieldValue::F32(1.0),
            FieldCodec::U8 => FieldValue::U8(0),
            FieldCodec::U16 => FieldValue::U16(0),
            FieldCodec::U32 => FieldValue::U32(0),
            FieldCodec::I32 => FieldValue::I32(0),
            FieldCodec::Flag => FieldValue::Flag(0),
            FieldCodec::Padded(_) => FieldValue::Text("".into()),
            FieldCodec::Opaque(len) => FieldValue::Opaque(std::iter::repeat(0).take(len).collect()),
            other => panic!("no template value for {other:?}"),
        })
        .collect();
    EntityTemplate {
        entity_type,
        type32: u32::from(entity_type.raw()),
        unknown: 0,
        fields,
        brushes: vec![],
    }
}

fn create(id: u32, entity_type: EntityType) -> EntityRecord {
    EntityRecord::create(EntityId::new(id), EntityState::new(entity_type))
}

fn update(id: u32, entity_type: EntityType) -> EntityRecord {
    EntityRecord::update(EntityId::new(id), EntityState::new(entity_type))
}

fn with(record: EntityRecord, name: &str, value: FieldValue) -> EntityRecord {
    let mut record = record;
    record.state_mut().unwrap().set(name, value).unwrap();
    record
}

fn tick(timecode: u32, entities: Vec<EntityRecord>) -> Tick {
    Tick {
        entities,
        ..Tick::new(Timecode::new(timecode))
    }
}

fn replay(ticks: Vec<Tick>) -> Replay {
    Replay {
        ticks,
        ..Replay::default()
    }
}

fn initial_layout(replay: &Replay) -> Vec<(u32, EntityType)> {
    replay.ticks[0]
        .entities
        .iter()
        .map(|record| (record.id.raw(), record.entity_type().unwrap()))
        .collect()
}

#[test]
fn recipient_player_keeps_its_slot() {
    let mut recipient = replay(vec![
        tick(
            0,
            vec![
                create(0, EntityType::WorldSpawn),
                create(1, EntityType::Player),
                create(2, EntityType::PointLight),
            ],
        ),
        tick(16, vec![update(1, EntityType::Player)]),
    ]);
    recipient.header.workshop_id = 1_234_567;
    let donor = replay(vec![tick(
        0,
        vec![
            with(
                create(0, EntityType::WorldSpawn),
                "target_game_over_camera",
                FieldValue::Text("donor".into()),
            ),
            create(1, EntityType::PointLight),
        ],
    )]);

    let merged = transplant(&donor, recipient).unwrap();
    assert_eq!(
        initial_layout(&merged),
        vec![
            (0, EntityType::WorldSpawn),
            (1, EntityType::Player),
            (2, EntityType::PointLight),
        ]
    );
    assert_eq!(
        merged.ticks[0].entities[0]
            .state()
            .unwrap()
            .get("target_game_over_camera"),
        Some(&FieldValue::Text("donor".into()))
    );
    assert_eq!(merged.ticks[1].entities, vec![update(1, EntityType::Player)]);
    assert_eq!(merged.header.workshop_id, 0);
    merged.encode().unwrap();
}

#[test]
fn donor_prefab_moves_with_its_span() {
    let mut donor_first = tick(
        0,
        vec![
            create(0, EntityType::WorldSpawn),
            with(
                with(
                    with(
                        create(1, EntityType::Prefab),
                        "prefab_name",
                        FieldValue::Text("lamp".into()),
                    ),
                    "next_sub_entity_id",
                    FieldValue::U32(2),
                ),
                "next_normal_entity_id",
                FieldValue::U32(4),
            ),
            create(4, EntityType::Target),
        ],
    );
    donor_first.prefabs.push(PrefabPlacement {
        prefab_id: 1,
        name: "lamp".into(),
        templates: vec![template(EntityType::PointLight), template(EntityType::JumpPad)],
    });
    donor_first.brushes.push(Brush {
        brush_id: 1,
        attached_entity: 1,
        ..Brush::default()
    });
    let donor = replay(vec![
        donor_first,
        tick(16, vec![update(2, EntityType::PointLight)]),
    ]);
    let recipient = replay(vec![
        tick(
            0,
            vec![
                create(0, EntityType::WorldSpawn),
                create(1, EntityType::Player),
                create(2, EntityType::Player),
            ],
        ),
        tick(
            16,
            vec![update(1, EntityType::Player), update(2, EntityType::Player)],
        ),
    ]);

    let plan = TransplantPlan::build(&donor, &recipient).unwrap();
    assert_eq!(
        plan.reassignments(Side::Donor).into_iter().collect::<Vec<_>>(),
        vec![
            (EntityId::new(1), EntityId::new(3)),
            (EntityId::new(4), EntityId::new(6)),
        ]
    );
    assert_eq!(plan.next_id, 7);

    let merged = plan.apply(&donor, recipient).unwrap();
    assert_eq!(
        initial_layout(&merged),
        vec![
            (0, EntityType::WorldSpawn),
            (1, EntityType::Player),
            (2, EntityType::Player),
            (3, EntityType::Prefab),
            (6, EntityType::Target),
        ]
    );
    let prefab = merged.ticks[0].entities[3].state().unwrap();
    assert_eq!(prefab.get("next_sub_entity_id"), Some(&FieldValue::U32(4)));
    assert_eq!(prefab.get("next_normal_entity_id"), Some(&FieldValue::U32(6)));
    assert_eq!(merged.ticks[0].brushes[0].attached_entity, 3);
    assert_eq!(merged.ticks[0].prefabs.len(), 1);

    let bytes = merged.encode().unwrap();
    let mut session = Session::new(Limits::default());
    let decoded = Replay::decode_in(&bytes, &mut session).unwrap();
    assert_eq!(decoded, merged);
    assert_eq!(
        session.entities().get(EntityId::new(4)),
        Some(EntityType::PointLight)
    );
    assert_eq!(
        session.entities().get(EntityId::new(5)),
        Some(EntityType::JumpPad)
    );
}

#[test]
fn later_ticks_follow_the_merged_block() {
    let recipient = replay(vec![
        tick(
            0,
            vec![create(0, EntityType::WorldSpawn), create(1, EntityType::Player)],
        ),
        tick(
            16,
            vec![
                update(0, EntityType::WorldSpawn),
                update(1, EntityType::Player),
                with(
                    create(2, EntityType::ProjectileRocket),
                    "spawned_by_entity_id",
                    FieldValue::U32(1),
                ),
            ],
        ),
        tick(32, vec![EntityRecord::destroy(EntityId::new(2))]),
    ]);
    let donor = replay(vec![tick(
        0,
        vec![create(0, EntityType::Target), create(1, EntityType::WorldSpawn)],
    )]);

    let merged = transplant(&donor, recipient).unwrap();
    assert_eq!(
        initial_layout(&merged),
        vec![
            (0, EntityType::Target),
            (1, EntityType::Player),
            (2, EntityType::WorldSpawn),
        ]
    );
    let later: Vec<u32> = merged.ticks[1]
        .entities
        .iter()
        .map(|record| record.id.raw())
        .collect();
    assert_eq!(later, vec![2, 1, 3]);
    assert_eq!(
        merged.ticks[1].entities[2]
            .state()
            .unwrap()
            .get("spawned_by_entity_id"),
        Some(&FieldValue::U32(1))
    );
    assert_eq!(
        merged.ticks[2].entities,
        vec![EntityRecord::destroy(EntityId::new(3))]
    );
    merged.encode().unwrap();
}

#[test]
fn reference_to_dropped_recipient_entity_is_a_gap() {
    let recipient = replay(vec![
        tick(
            0,
            vec![
                create(0, EntityType::WorldSpawn),
                create(1, EntityType::Player),
                create(2, EntityType::PointLight),
            ],
        ),
        tick(
            16,
            vec![
                update(1, EntityType::Player),
                with(
                    create(3, EntityType::ProjectileRocket),
                    "spawned_by_entity_id",
                    FieldValue::U32(2),
                ),
            ],
        ),
    ]);
    let donor = replay(vec![tick(0, vec![create(0, EntityType::WorldSpawn)])]);

    assert_eq!(
        transplant(&donor, recipient).unwrap_err(),
        TransplantError::ReferenceGap {
            side: Side::Recipient,
            id: EntityId::new(2),
            field: "spawned_by_entity_id",
            timecode: Timecode::new(16),
        }
    );
}

#[test]
fn donor_brush_on_retained_donor_entity_is_a_gap() {
    let mut donor_first = tick(
        0,
        vec![create(0, EntityType::WorldSpawn), create(1, EntityType::Target)],
    );
    donor_first.brushes.push(Brush {
        attached_entity: 1,
        ..Brush::default()
    });
    let donor = replay(vec![
        donor_first,
        tick(16, vec![update(1, EntityType::Target)]),
    ]);
    let recipient = replay(vec![tick(0, vec![create(0, EntityType::WorldSpawn)])]);

    assert_eq!(
        transplant(&donor, recipient).unwrap_err(),
        TransplantError::ReferenceGap {
            side: Side::Donor,
            id: EntityId::new(1),
            field: "attached_entity",
            timecode: Timecode::new(0),
        }
    );
}

#[test]
fn kept_recipient_prefab_needs_a_donor_placement() {
    let mut recipient_first = tick(
        0,
        vec![with(
            create(1, EntityType::Prefab),
            "prefab_name",
            FieldValue::Text("door".into()),
        )],
    );
    recipient_first.prefabs.push(PrefabPlacement {
        prefab_id: 4,
        name: "door".into(),
        templates: vec![template(EntityType::PointLight)],
    });
    let recipient = replay(vec![
        recipient_first,
        tick(16, vec![update(1, EntityType::Prefab)]),
    ]);
    let donor = replay(vec![tick(0, vec![create(0, EntityType::WorldSpawn)])]);

    let err = TransplantPlan::build(&donor, &recipient).unwrap_err();
    assert_eq!(
        err,
        TransplantError::UnknownPrefab {
            side: Side::Recipient,
            id: EntityId::new(1),
            name: Some("door".to_owned()),
            timecode: Timecode::new(0),
        }
    );
    assert!(err.to_string().contains("door"));
}

#[test]
fn byte_level_transplant_matches_value_transplant() {
    let recipient = replay(vec![
        tick(
            0,
            vec![
                create(0, EntityType::WorldSpawn),
                create(1, EntityType::Player),
                create(2, EntityType::Pickup),
            ],
        ),
        tick(8, vec![update(1, EntityType::Player)]),
    ]);
    let donor = replay(vec![tick(
        0,
        vec![
            create(0, EntityType::WorldSpawn),
            create(1, EntityType::JumpPad),
            create(2, EntityType::Teleporter),
        ],
    )]);

    let bytes = transplant_bytes(
        &donor.encode().unwrap(),
        &recipient.encode().unwrap(),
        &Limits::default(),
    )
    .unwrap();
    let expected = transplant(&donor, recipient).unwrap();
    assert_eq!(Replay::decode(&bytes).unwrap(), expected);
}

#[test]
fn corrupt_input_surfaces_codec_error() {
    let err = transplant_bytes(&[0; 16], &[0; 16], &Limits::default()).unwrap_err();
    assert!(matches!(err, TransplantError::Codec(_)));
}
