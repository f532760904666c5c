//! Per-type field tables for entity records.
//!
//! Each table lists the mask bytes of one entity type, and for each mask the
//! fields in stream order. Bit `0x01` of the first mask is the CREATE flag and
//! never appears here. Bits with no entry are unknown and carry no data.

use crate::entity_type::{EntityType, ENTITY_TYPE_COUNT};
use crate::field::FieldCodec::{
    Argb, CString, Flag, Input, Opaque, Vec3, ViewAngle, Xrgb, F32, I32, I8, U16, U32, U8,
};
use crate::field::{entity_ref, field, fixed, marker, EntitySchema, FieldRole, MaskDef, MaskPresence};

const WORLD_SPAWN: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x04, "target_game_over_camera", CString),
            field(0x08, "time_of_day", F32),
            field(0x10, "sky_angle", F32),
            field(0x20, "sky_top_color", Xrgb),
            field(0x40, "sky_horizon_color", Xrgb),
            field(0x80, "sky_bottom_color", Xrgb),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "sky_top_color_intensity", F32),
            field(0x02, "sky_horizon_color_intensity", F32),
            field(0x04, "sky_bottom_color_intensity", F32),
            field(0x08, "sun_color", Xrgb),
            field(0x10, "sun_intensity_size", F32),
            field(0x20, "sun_sharpness", F32),
            field(0x40, "sun_enabled", Flag),
            field(0x80, "horizon_color", Xrgb),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "horizon_intensity", F32),
            field(0x02, "horizon_halo_exponent", F32),
            field(0x04, "horizon_halo_exponent_sun", F32),
            field(0x08, "horizon_halo_exponent_sun_intensity", F32),
            field(0x10, "horizon_line", F32),
            field(0x20, "stars_intensity", F32),
            field(0x40, "clouds_color", F32),
            field(0x80, "clouds_coverage", F32),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "clouds_speed_x", F32),
            field(0x02, "clouds_speed_y", F32),
            field(0x04, "clouds_coverage_multiplier", F32),
            field(0x08, "clouds_bias", F32),
            field(0x10, "clouds_roughness", F32),
            field(0x20, "clouds_density", F32),
            field(0x40, "clouds_thickness", F32),
            field(0x80, "color_team_a", Xrgb),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "color_team_b", Xrgb),
            field(0x02, "fog_color", Xrgb),
            field(0x04, "fog_distance_start", F32),
            field(0x08, "fog_distance_end", F32),
            field(0x10, "fog_height_top", F32),
            field(0x20, "fog_height_bottom", F32),
            field(0x40, "title", CString),
            field(0x80, "owner_string", CString),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "players_min", U8),
            field(0x02, "players_max", U8),
            field(0x04, "mode_ctf", Flag),
            field(0x08, "mode_ffa", Flag),
            field(0x10, "mode_tdm", Flag),
            field(0x20, "mode_1v1", Flag),
            field(0x40, "mode_2v2", Flag),
            field(0x80, "mode_race", Flag),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "mode_training", Flag),
            field(0x02, "unknown_7_02", Opaque(2)),
            field(0x04, "unknown_7_04", Opaque(1)),
            field(0x08, "unknown_7_08", CString),
            field(0x10, "unknown_7_10", Opaque(1)),
            field(0x20, "unknown_7_20", Opaque(1)),
            field(0x40, "unknown_7_40", Opaque(1)),
            field(0x80, "unknown_7_80", Opaque(1)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_8_01", Opaque(1)),
            field(0x02, "unknown_8_02", CString),
            field(0x04, "unknown_8_04", Opaque(1)),
            field(0x08, "unknown_8_08", Opaque(1)),
            field(0x10, "server_name", CString),
            field(0x20, "map_name", CString),
            field(0x40, "mutator_mask", U32),
            field(0x80, "unknown_8_80", Opaque(8)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_9_01", Opaque(4)),
            field(0x02, "unknown_9_02", Opaque(4)),
            field(0x04, "unknown_9_04", Opaque(4)),
            field(0x08, "unknown_9_08", Opaque(4)),
            field(0x10, "unknown_9_10", Opaque(1)),
            field(0x20, "unknown_9_20", Opaque(1)),
            field(0x40, "unknown_9_40", Opaque(1)),
            field(0x80, "unknown_9_80", Opaque(1)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_10_01", Opaque(2)),
            field(0x02, "unknown_10_02", Opaque(2)),
            field(0x04, "unknown_10_04", Opaque(1)),
            field(0x08, "unknown_10_08", Opaque(1)),
            field(0x10, "unknown_10_10", Opaque(1)),
            field(0x20, "unknown_10_20", Opaque(1)),
            field(0x40, "unknown_10_40", CString),
            field(0x80, "unknown_10_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_11_01", Opaque(4)),
            field(0x02, "unknown_11_02", Opaque(4)),
            field(0x04, "unknown_11_04", Opaque(4)),
            field(0x08, "unknown_11_08", Opaque(4)),
            field(0x10, "unknown_11_10", Opaque(2)),
            field(0x20, "unknown_11_20", Opaque(4)),
            field(0x40, "unknown_11_40", Opaque(4)),
            field(0x80, "unknown_11_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_12_01", Opaque(4)),
            field(0x02, "unknown_12_02", Opaque(4)),
            field(0x04, "unknown_12_04", Opaque(4)),
            field(0x08, "unknown_12_08", Opaque(4)),
            field(0x10, "unknown_12_10", Opaque(4)),
            field(0x20, "unknown_12_20", Opaque(4)),
            field(0x40, "unknown_12_40", Opaque(4)),
            field(0x80, "unknown_12_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_13_01", Opaque(4)),
            field(0x02, "unknown_13_02", Opaque(4)),
            field(0x04, "unknown_13_04", Opaque(4)),
            field(0x08, "unknown_13_08", Opaque(4)),
            field(0x10, "unknown_13_10", Opaque(4)),
            field(0x20, "unknown_13_20", Opaque(4)),
            field(0x40, "unknown_13_40", Opaque(4)),
            field(0x80, "unknown_13_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_14_01", Opaque(4)),
            field(0x02, "unknown_14_02", Opaque(4)),
            field(0x04, "unknown_14_04", Opaque(4)),
            field(0x08, "unknown_14_08", Opaque(4)),
            field(0x10, "unknown_14_10", Opaque(4)),
            field(0x20, "unknown_14_20", Opaque(4)),
            field(0x40, "unknown_14_40", Opaque(4)),
            field(0x80, "unknown_14_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_15_01", Opaque(4)),
            field(0x02, "unknown_15_02", Opaque(4)),
            field(0x04, "unknown_15_04", Opaque(4)),
            field(0x08, "unknown_15_08", Opaque(4)),
            field(0x10, "unknown_15_10", Opaque(4)),
            field(0x20, "unknown_15_20", Opaque(4)),
            field(0x40, "unknown_15_40", Opaque(4)),
            field(0x80, "unknown_15_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_16_01", Opaque(4)),
            field(0x02, "unknown_16_02", Opaque(4)),
            field(0x04, "unknown_16_04", Opaque(4)),
            field(0x08, "unknown_16_08", Opaque(4)),
            field(0x10, "unknown_16_10", Opaque(4)),
            field(0x20, "unknown_16_20", Opaque(4)),
            field(0x40, "unknown_16_40", Opaque(4)),
            field(0x80, "unknown_16_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_17_01", Opaque(4)),
            field(0x02, "unknown_17_02", Opaque(4)),
            field(0x04, "unknown_17_04", Opaque(4)),
            field(0x08, "unknown_17_08", Opaque(4)),
            field(0x10, "unknown_17_10", Opaque(4)),
            field(0x20, "unknown_17_20", Opaque(4)),
            field(0x40, "unknown_17_40", Opaque(4)),
            field(0x80, "unknown_17_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_18_01", Opaque(4)),
            field(0x02, "unknown_18_02", Opaque(4)),
            field(0x04, "unknown_18_04", Opaque(4)),
            field(0x08, "unknown_18_08", Opaque(4)),
            field(0x10, "unknown_18_10", Opaque(4)),
            field(0x20, "unknown_18_20", Opaque(4)),
            field(0x40, "unknown_18_40", Opaque(4)),
            field(0x80, "unknown_18_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_19_01", Opaque(4)),
            field(0x02, "unknown_19_02", Opaque(4)),
            field(0x04, "unknown_19_04", Opaque(4)),
            field(0x08, "unknown_19_08", Opaque(4)),
            field(0x10, "unknown_19_10", Opaque(4)),
            field(0x20, "unknown_19_20", Opaque(4)),
            field(0x40, "unknown_19_40", Opaque(4)),
            field(0x80, "unknown_19_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_20_01", Opaque(4)),
            field(0x02, "unknown_20_02", Opaque(4)),
            field(0x04, "unknown_20_04", Opaque(4)),
            field(0x08, "unknown_20_08", Opaque(4)),
            field(0x10, "unknown_20_10", Opaque(4)),
            field(0x20, "unknown_20_20", Opaque(4)),
            field(0x40, "unknown_20_40", Opaque(4)),
            field(0x80, "unknown_20_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_21_01", Opaque(4)),
            field(0x02, "unknown_21_02", Opaque(4)),
            field(0x04, "unknown_21_04", Opaque(4)),
            field(0x08, "unknown_21_08", Opaque(4)),
            field(0x10, "unknown_21_10", Opaque(4)),
            field(0x20, "unknown_21_20", Opaque(4)),
            field(0x40, "unknown_21_40", Opaque(4)),
            field(0x80, "unknown_21_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_22_01", Opaque(4)),
            field(0x02, "unknown_22_02", Opaque(4)),
            field(0x04, "unknown_22_04", Opaque(4)),
            field(0x08, "unknown_22_08", Opaque(4)),
            field(0x10, "unknown_22_10", Opaque(4)),
            field(0x20, "unknown_22_20", Opaque(4)),
            field(0x40, "unknown_22_40", Opaque(4)),
            field(0x80, "unknown_22_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_23_01", Opaque(4)),
            field(0x02, "unknown_23_02", Opaque(4)),
            field(0x04, "unknown_23_04", Opaque(4)),
            field(0x08, "unknown_23_08", Opaque(4)),
            field(0x10, "unknown_23_10", Opaque(4)),
            field(0x20, "unknown_23_20", Opaque(4)),
            field(0x40, "unknown_23_40", Opaque(4)),
            field(0x80, "unknown_23_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_24_01", Opaque(4)),
            field(0x02, "unknown_24_02", Opaque(4)),
            field(0x04, "unknown_24_04", Opaque(4)),
            field(0x08, "unknown_24_08", Opaque(4)),
            field(0x10, "unknown_24_10", Opaque(4)),
            field(0x20, "unknown_24_20", Opaque(4)),
            field(0x40, "unknown_24_40", Opaque(4)),
            field(0x80, "unknown_24_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_25_01", Opaque(4)),
            field(0x02, "unknown_25_02", Opaque(4)),
            field(0x04, "unknown_25_04", Opaque(4)),
            field(0x08, "unknown_25_08", Opaque(4)),
            field(0x10, "unknown_25_10", Opaque(4)),
            field(0x20, "unknown_25_20", Opaque(4)),
            field(0x40, "unknown_25_40", Opaque(4)),
            field(0x80, "unknown_25_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_26_01", Opaque(4)),
            field(0x02, "unknown_26_02", Opaque(4)),
            field(0x04, "unknown_26_04", Opaque(4)),
            field(0x08, "unknown_26_08", Opaque(4)),
            field(0x10, "unknown_26_10", Opaque(4)),
            field(0x20, "unknown_26_20", Opaque(4)),
            field(0x40, "unknown_26_40", Opaque(4)),
            field(0x80, "unknown_26_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_27_01", Opaque(4)),
            field(0x02, "unknown_27_02", Opaque(4)),
            field(0x04, "unknown_27_04", Opaque(4)),
            field(0x08, "unknown_27_08", Opaque(4)),
            field(0x10, "unknown_27_10", Opaque(4)),
            field(0x20, "unknown_27_20", Opaque(4)),
            marker(0x40, "marker_27_40"),
            marker(0x80, "marker_27_80"),
        ],
    },
];

const PLAYER_SPAWN: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "unknown_1_02", Opaque(1)),
            field(0x04, "is_selected", Opaque(2)),
            field(0x08, "position", Vec3),
            field(0x10, "angles", Vec3),
            field(0x20, "team_a", Flag),
            field(0x40, "team_b", Flag),
            field(0x80, "initial_spawn", Flag),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "mode_ctf", Flag),
            field(0x02, "mode_ffa", Flag),
            field(0x04, "mode_tdm", Flag),
            field(0x08, "mode_1v1", Flag),
            field(0x10, "mode_race", Flag),
            field(0x20, "mode_2v2", Flag),
            marker(0x40, "marker_2_40"),
            marker(0x80, "marker_2_80"),
        ],
    },
];

const PLAYER: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "primary_color", U8),
            field(0x04, "secondary_color", U8),
            field(0x08, "name", CString),
            field(0x10, "unknown_1_10", Opaque(1)),
            field(0x20, "unknown_1_20", Opaque(1)),
            field(0x40, "unknown_1_40", Opaque(1)),
            field(0x80, "unknown_1_80", Opaque(1)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "timecode", U32),
            field(0x02, "position", Vec3),
            field(0x04, "velocity", Vec3),
            field(0x08, "unknown_2_08", Opaque(2)),
            field(0x10, "view_angle", ViewAngle),
            field(0x20, "unknown_2_20", Opaque(4)),
            field(0x40, "unknown_2_40", Opaque(2)),
            field(0x80, "input", Input),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "time_since_last_jump", U16),
            field(0x02, "unknown_3_02", Opaque(2)),
            field(0x04, "unknown_3_04", Opaque(1)),
            field(0x08, "unknown_3_08", Opaque(1)),
            field(0x10, "unknown_3_10", Opaque(1)),
            field(0x20, "unknown_3_20", Opaque(1)),
            field(0x40, "weapon_held", U8),
            field(0x80, "unknown_3_80", Opaque(1)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_4_01", Opaque(4)),
            field(0x02, "glow_color", Opaque(1)),
            field(0x04, "unknown_4_04", Opaque(1)),
            field(0x08, "unknown_4_08", Opaque(1)),
            field(0x10, "unknown_4_10", Opaque(1)),
            field(0x20, "unknown_4_20", Opaque(1)),
            field(0x40, "unknown_4_40", Opaque(1)),
            field(0x80, "unknown_4_80", Opaque(1)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_5_01", Opaque(2)),
            field(0x02, "unknown_5_02", Opaque(4)),
            field(0x04, "unknown_5_04", Opaque(4)),
            field(0x08, "unknown_5_08", Opaque(1)),
            field(0x10, "camera_rotation", Vec3),
            field(0x20, "unknown_5_20", Opaque(1)),
            field(0x40, "unknown_5_40", Opaque(1)),
            field(0x80, "unknown_5_80", Opaque(1)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_6_01", Opaque(2)),
            field(0x02, "unknown_6_02", Opaque(2)),
            field(0x04, "unknown_6_04", Opaque(2)),
            field(0x08, "unknown_6_08", Opaque(2)),
            field(0x10, "unknown_6_10", Opaque(1)),
            field(0x20, "unknown_6_20", Opaque(1)),
            field(0x40, "unknown_6_40", Opaque(2)),
            field(0x80, "unknown_6_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_7_01", Opaque(1)),
            field(0x02, "unknown_7_02", Opaque(1)),
            field(0x04, "unknown_7_04", Opaque(1)),
            field(0x08, "unknown_7_08", Opaque(1)),
            field(0x10, "unknown_7_10", Opaque(1)),
            field(0x20, "unknown_7_20", Opaque(1)),
            field(0x40, "unknown_7_40", Opaque(2)),
            field(0x80, "unknown_7_80", Opaque(2)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_8_01", Opaque(1)),
            field(0x02, "unknown_8_02", Opaque(1)),
            field(0x04, "unknown_8_04", Opaque(4)),
            field(0x08, "unknown_8_08", Opaque(4)),
            field(0x10, "unknown_8_10", Opaque(4)),
            field(0x20, "hor_speed", U16),
            field(0x40, "unknown_8_40", Opaque(4)),
            field(0x80, "melee_skin", U32),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "head_skin", U32),
            field(0x02, "legs_skin", U32),
            field(0x04, "arms_skin", U32),
            field(0x08, "chest_skin", U32),
            field(0x10, "burstgun_skin", U32),
            field(0x20, "shotgun_skin", U32),
            field(0x40, "grenade_launcher_skin", U32),
            field(0x80, "plasma_gun_skin", U32),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "rocket_launcher_skin", U32),
            field(0x02, "ion_cannon_skin", U32),
            field(0x04, "bolt_rifle_skin", U32),
            field(0x08, "unknown_10_08", Opaque(8)),
            field(0x10, "country", CString),
            field(0x20, "unknown_10_20", Opaque(2)),
            field(0x40, "unknown_10_40", Opaque(2)),
            field(0x80, "unknown_10_80", Opaque(2)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_11_01", Opaque(1)),
            field(0x02, "unknown_11_02", Opaque(1)),
            field(0x04, "unknown_11_04", Opaque(1)),
            field(0x08, "unknown_11_08", Opaque(1)),
            field(0x10, "unknown_11_10", Opaque(1)),
            field(0x20, "unknown_11_20", Opaque(1)),
            field(0x40, "unknown_11_40", Opaque(1)),
            field(0x80, "unknown_11_80", Opaque(1)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_12_01", Opaque(2)),
            field(0x02, "unknown_12_02", Opaque(2)),
            field(0x04, "unknown_12_04", Opaque(2)),
            field(0x08, "unknown_12_08", Opaque(2)),
            field(0x10, "distance_travelled", F32),
            field(0x20, "unknown_12_20", Opaque(1)),
            field(0x40, "unknown_12_40", Opaque(1)),
            field(0x80, "unknown_12_80", Opaque(2)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_13_01", Opaque(2)),
            field(0x02, "unknown_13_02", Opaque(2)),
            field(0x04, "unknown_13_04", Opaque(2)),
            field(0x08, "unknown_13_08", Opaque(1)),
            field(0x10, "unknown_13_10", Opaque(1)),
            field(0x20, "unknown_13_20", Opaque(2)),
            field(0x40, "unknown_13_40", Opaque(2)),
            field(0x80, "unknown_13_80", Opaque(2)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_14_01", Opaque(2)),
            field(0x02, "unknown_14_02", Opaque(1)),
            field(0x04, "unknown_14_04", Opaque(1)),
            field(0x08, "unknown_14_08", Opaque(2)),
            field(0x10, "unknown_14_10", Opaque(2)),
            field(0x20, "unknown_14_20", Opaque(2)),
            field(0x40, "unknown_14_40", Opaque(2)),
            field(0x80, "unknown_14_80", Opaque(1)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_15_01", Opaque(1)),
            field(0x02, "unknown_15_02", Opaque(2)),
            field(0x04, "unknown_15_04", Opaque(2)),
            field(0x08, "unknown_15_08", Opaque(2)),
            field(0x10, "unknown_15_10", Opaque(2)),
            field(0x20, "unknown_15_20", Opaque(1)),
            field(0x40, "unknown_15_40", Opaque(1)),
            field(0x80, "unknown_15_80", Opaque(2)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_16_01", Opaque(2)),
            field(0x02, "unknown_16_02", Opaque(2)),
            field(0x04, "unknown_16_04", Opaque(2)),
            field(0x08, "unknown_16_08", Opaque(1)),
            field(0x10, "unknown_16_10", Opaque(1)),
            field(0x20, "unknown_16_20", Opaque(2)),
            field(0x40, "unknown_16_40", Opaque(2)),
            field(0x80, "unknown_16_80", Opaque(2)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_17_01", Opaque(2)),
            field(0x02, "unknown_17_02", Opaque(1)),
            field(0x04, "unknown_17_04", Opaque(1)),
            field(0x08, "unknown_17_08", Opaque(2)),
            field(0x10, "unknown_17_10", Opaque(2)),
            field(0x20, "unknown_17_20", Opaque(2)),
            field(0x40, "unknown_17_40", Opaque(2)),
            field(0x80, "unknown_17_80", Opaque(1)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_18_01", Opaque(1)),
            field(0x02, "unknown_18_02", Opaque(2)),
            field(0x04, "unknown_18_04", Opaque(2)),
            field(0x08, "unknown_18_08", Opaque(2)),
            field(0x10, "unknown_18_10", Opaque(2)),
            field(0x20, "unknown_18_20", Opaque(1)),
            field(0x40, "unknown_18_40", Opaque(1)),
            field(0x80, "unknown_18_80", Opaque(2)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_19_01", Opaque(2)),
            field(0x02, "unknown_19_02", Opaque(2)),
            field(0x04, "unknown_19_04", Opaque(2)),
            field(0x08, "rec_distance_travelled", F32),
            field(0x10, "rec_time", U32),
            field(0x20, "rec_top_speed", U16),
            field(0x40, "unknown_19_40", Opaque(4)),
            field(0x80, "unknown_19_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_20_01", Opaque(2)),
            field(0x02, "unknown_20_02", Opaque(4)),
            field(0x04, "unknown_20_04", Opaque(4)),
            field(0x08, "unknown_20_08", Opaque(2)),
            field(0x10, "unknown_20_10", Opaque(4)),
            field(0x20, "unknown_20_20", Opaque(4)),
            field(0x40, "unknown_20_40", Opaque(2)),
            field(0x80, "unknown_20_80", Opaque(4)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_21_01", Opaque(4)),
            field(0x02, "unknown_21_02", Opaque(2)),
            marker(0x04, "marker_21_04"),
            marker(0x08, "marker_21_08"),
            marker(0x10, "marker_21_10"),
            marker(0x20, "marker_21_20"),
            marker(0x40, "marker_21_40"),
            marker(0x80, "marker_21_80"),
        ],
    },
];

const POINT_LIGHT: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "unknown_1_02", Opaque(1)),
            field(0x04, "is_selected", U16),
            field(0x08, "position", Vec3),
            field(0x10, "color", Xrgb),
            field(0x20, "intensity", F32),
            field(0x40, "near_attenuation", F32),
            field(0x80, "far_attenuation", F32),
        ],
    },
];

const PROJECTILE_GRENADE: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "unknown_1_02", Opaque(1)),
            field(0x04, "origin", Vec3),
            field(0x08, "angle", Vec3),
            field(0x10, "spawned_at_timecode", U32),
            entity_ref(0x20, "spawned_by_entity_id"),
            field(0x40, "projectile_death_location", Vec3),
            marker(0x80, "marker_1_80"),
        ],
    },
];

const PROJECTILE_ROCKET: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "unknown_1_02", Opaque(1)),
            field(0x04, "origin", Vec3),
            field(0x08, "angle", Vec3),
            field(0x10, "spawned_at_timecode", U32),
            entity_ref(0x20, "spawned_by_entity_id"),
            field(0x40, "projectile_death_location", Vec3),
            field(0x80, "unknown_1_80", Vec3),
        ],
    },
];

const PROJECTILE_PLASMA: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "unknown_1_02", Opaque(1)),
            field(0x04, "origin", Vec3),
            field(0x08, "angle", ViewAngle),
            field(0x10, "spawned_at_timecode", U32),
            entity_ref(0x20, "spawned_by_entity_id"),
            field(0x40, "projectile_death_location", Vec3),
            field(0x80, "unknown_1_80", I32),
        ],
    },
];

const PROJECTILE_BURSTGUN: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "unknown_1_02", Opaque(1)),
            field(0x04, "origin", Vec3),
            field(0x08, "angle", ViewAngle),
            field(0x10, "spawned_at_timecode", U32),
            entity_ref(0x20, "spawned_by_entity_id"),
            field(0x40, "unknown_1_40", Vec3),
            field(0x80, "unknown_1_80", I32),
        ],
    },
];

const PROJECTILE_STAKE: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "unknown_1_02", Opaque(1)),
            field(0x04, "origin", Vec3),
            field(0x08, "angle", ViewAngle),
            field(0x10, "spawned_at_timecode", U32),
            entity_ref(0x20, "spawned_by_entity_id"),
            field(0x40, "projectile_death_location", Vec3),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "projectile_death_angle", Vec3),
            marker(0x02, "marker_2_02"),
            marker(0x04, "marker_2_04"),
            marker(0x08, "marker_2_08"),
            marker(0x10, "marker_2_10"),
            marker(0x20, "marker_2_20"),
            marker(0x40, "marker_2_40"),
            marker(0x80, "marker_2_80"),
        ],
    },
];

const TELEPORTER: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            field(0x04, "target", CString),
            field(0x08, "link_out_on_exit", CString),
            marker(0x10, "marker_1_10"),
            marker(0x20, "marker_1_20"),
            marker(0x40, "marker_1_40"),
            marker(0x80, "marker_1_80"),
        ],
    },
];

const TARGET: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            field(0x04, "position", Vec3),
            field(0x08, "angles", Vec3),
            field(0x10, "name", CString),
            field(0x20, "name_next", CString),
            field(0x40, "speed", F32),
            marker(0x80, "marker_1_80"),
        ],
    },
];

const JUMP_PAD: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            field(0x04, "target", CString),
            marker(0x08, "marker_1_08"),
            marker(0x10, "marker_1_10"),
            marker(0x20, "marker_1_20"),
            marker(0x40, "marker_1_40"),
            marker(0x80, "marker_1_80"),
        ],
    },
];

const EFFECT: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "unknown_1_02", Opaque(1)),
            field(0x04, "is_selected", U16),
            field(0x08, "position", Vec3),
            field(0x10, "angles", Vec3),
            field(0x20, "effect_name", CString),
            field(0x40, "effect_scale", F32),
            field(0x80, "material0_name", CString),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "material0_albedo", Argb),
            field(0x02, "material1_name", CString),
            field(0x04, "material1_albedo", Argb),
            field(0x08, "material2_name", CString),
            field(0x10, "material2_albedo", Argb),
            field(0x20, "material3_name", CString),
            field(0x40, "material3_albedo", Argb),
            field(0x80, "material4_name", CString),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "material4_albedo", Argb),
            field(0x02, "material5_name", CString),
            field(0x04, "material5_albedo", Argb),
            field(0x08, "material6_name", CString),
            field(0x10, "material6_albedo", Argb),
            field(0x20, "material7_name", CString),
            field(0x40, "material7_albedo", Argb),
            field(0x80, "point_light_overridden", Flag),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "point_light_near", F32),
            field(0x02, "point_light_far", F32),
            field(0x04, "point_light_color", Xrgb),
            field(0x08, "point_light_intensity", F32),
            field(0x10, "point_light_team_index", I8),
            field(0x20, "spot_light_overridden", Flag),
            field(0x40, "spot_light_near", F32),
            field(0x80, "spot_light_far", F32),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "spot_light_inner_angle_degrees", F32),
            field(0x02, "spot_light_outer_angle_degrees", F32),
            field(0x04, "spot_light_color", Xrgb),
            field(0x08, "spot_light_intensity", F32),
            field(0x10, "spot_light_casts_shadow", Flag),
            field(0x20, "spot_light_team_index", I8),
        ],
    },
];

const PICKUP: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "unknown_1_02", Opaque(1)),
            field(0x04, "is_selected", U16),
            field(0x08, "position", Vec3),
            field(0x10, "angles", Vec3),
            field(0x20, "unknown_1_20", Vec3),
            field(0x40, "link_out_on_pickup", CString),
            field(0x80, "token_index", U8),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "pickup_type", U8),
            field(0x02, "unknown_2_02", Opaque(1)),
            field(0x04, "unknown_2_04", Opaque(1)),
            field(0x08, "unknown_2_08", Opaque(1)),
            field(0x10, "unknown_2_10", Opaque(1)),
            field(0x20, "unknown_2_20", Opaque(1)),
            field(0x40, "unknown_2_40", Opaque(1)),
            field(0x80, "unknown_2_80", Opaque(1)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_3_01", Opaque(1)),
            field(0x02, "unknown_3_02", Opaque(1)),
            field(0x04, "unknown_3_04", Opaque(4)),
            field(0x08, "unknown_3_08", Opaque(4)),
            field(0x10, "unknown_3_10", Opaque(4)),
            field(0x20, "unknown_3_20", Opaque(4)),
            marker(0x40, "marker_3_40"),
            marker(0x80, "marker_3_80"),
        ],
    },
];

const CHAT_MESSAGE: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "unknown_1_02", Opaque(1)),
            field(0x04, "unknown_1_04", Vec3),
            field(0x08, "unknown_1_08", Vec3),
            entity_ref(0x10, "sender_id"),
            field(0x20, "unknown_1_20", Opaque(4)),
            field(0x40, "content", CString),
            marker(0x80, "marker_1_80"),
        ],
    },
];

const CAMERA_PATH: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "angle", ViewAngle),
            marker(0x04, "marker_1_04"),
            field(0x08, "position", Vec3),
            field(0x08, "rotation", Vec3),
            entity_ref(0x10, "entity_id_attached_to"),
            field(0x20, "unknown_1_20", Opaque(4)),
            field(0x40, "unknown_1_40", Opaque(1)),
            field(0x80, "unknown_1_80", Opaque(1)),
        ],
    },
    MaskDef {
        presence: MaskPresence::IfPrimaryAny(0x04 | 0x40 | 0x80),
        fields: &[
            field(0x01, "unknown_2_01", Opaque(1)),
            field(0x02, "unknown_2_02", Opaque(1)),
            field(0x04, "unknown_2_04", Opaque(1)),
            marker(0x08, "marker_2_08"),
            marker(0x10, "marker_2_10"),
            marker(0x20, "marker_2_20"),
            marker(0x40, "marker_2_40"),
            marker(0x80, "marker_2_80"),
        ],
    },
];

const VOTE: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "unknown_1_02", Opaque(1)),
            field(0x04, "created_at", Opaque(4)),
            entity_ref(0x08, "creator_id"),
            field(0x10, "votes_yes", Opaque(4)),
            field(0x20, "votes_no", Opaque(4)),
            field(0x40, "is_passed", Opaque(1)),
            field(0x80, "is_failed", Opaque(1)),
        ],
    },
];

const DAMAGE: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "unknown_1_02", Opaque(1)),
            field(0x04, "unknown_1_04", Vec3),
            field(0x08, "unknown_1_08", Opaque(4)),
            entity_ref(0x10, "sender_id"),
            entity_ref(0x20, "receiver_id"),
            field(0x40, "damage_info", Opaque(4)),
            marker(0x80, "marker_1_80"),
        ],
    },
];

const RACE_START: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            marker(0x04, "marker_1_04"),
            marker(0x08, "marker_1_08"),
            marker(0x10, "marker_1_10"),
            marker(0x20, "marker_1_20"),
            marker(0x40, "marker_1_40"),
            marker(0x80, "marker_1_80"),
        ],
    },
];

const RACE_FINISH: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            marker(0x04, "marker_1_04"),
            marker(0x08, "marker_1_08"),
            marker(0x10, "marker_1_10"),
            marker(0x20, "marker_1_20"),
            marker(0x40, "marker_1_40"),
            marker(0x80, "marker_1_80"),
        ],
    },
];

const WEAPON_RESTRICTOR: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            field(0x04, "allowed_weapon_mask", U32),
            marker(0x08, "marker_1_08"),
            marker(0x10, "marker_1_10"),
            marker(0x20, "marker_1_20"),
            marker(0x40, "marker_1_40"),
            marker(0x80, "marker_1_80"),
        ],
    },
];

const PREFAB: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "unknown_1_02", Opaque(1)),
            field(0x04, "is_selected", U16),
            field(0x08, "position", Vec3),
            field(0x10, "angles", Vec3),
            field(0x20, "prefab_name", CString),
            field(0x40, "next_sub_entity_id", U32).role(FieldRole::NextSubEntity),
            field(0x80, "unknown_1_80", U32),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "next_normal_entity_id", U32).role(FieldRole::NextNormalEntity),
            field(0x02, "unknown_2_02", U32),
        ],
    },
];

const VOLUME_SELECT: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            marker(0x04, "marker_1_04"),
            marker(0x08, "marker_1_08"),
            marker(0x10, "marker_1_10"),
            marker(0x20, "marker_1_20"),
            marker(0x40, "marker_1_40"),
            marker(0x80, "marker_1_80"),
        ],
    },
];

const WORKSHOP_SCREENSHOT: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            field(0x04, "position", Vec3),
            field(0x08, "angles", Vec3),
            marker(0x10, "marker_1_10"),
            marker(0x20, "marker_1_20"),
            marker(0x40, "marker_1_40"),
            marker(0x80, "marker_1_80"),
        ],
    },
];

const REFLECTION_PROBE: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            field(0x04, "position", Vec3),
            field(0x08, "angles", Vec3),
        ],
    },
];

const TRIGGER_VOLUME: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            field(0x04, "link_out_on_enter", CString),
            field(0x08, "link_out_on_exit", CString),
            marker(0x10, "marker_1_10"),
            marker(0x20, "marker_1_20"),
            marker(0x40, "marker_1_40"),
            marker(0x80, "marker_1_80"),
        ],
    },
];

const MESSAGE: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            field(0x04, "position", Vec3),
            field(0x08, "angles", Vec3),
            field(0x10, "link_in_display", CString),
            field(0x20, "link_in_show", CString),
            field(0x40, "link_in_hide", CString),
            field(0x80, "message", CString),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "unknown_2_01", Opaque(2)),
            marker(0x02, "marker_2_02"),
            marker(0x04, "marker_2_04"),
            marker(0x08, "marker_2_08"),
            marker(0x10, "marker_2_10"),
            marker(0x20, "marker_2_20"),
            marker(0x40, "marker_2_40"),
            marker(0x80, "marker_2_80"),
        ],
    },
];

const GOAL: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            field(0x04, "position", Vec3),
            field(0x08, "angles", Vec3),
            field(0x10, "link_in_done", CString),
            field(0x20, "message", CString),
            field(0x40, "sort_index", F32),
            field(0x80, "unknown_1_80", Opaque(1)),
        ],
    },
];

const TURRET: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "unknown_1_02", Opaque(1)),
            field(0x04, "is_selected", U16),
            field(0x08, "position", Vec3),
            field(0x10, "angles", Vec3),
            field(0x20, "weapon_type", U8),
            field(0x40, "unknown_1_40", Opaque(1)),
            field(0x80, "unknown_1_80", Opaque(1)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "health", U16),
            field(0x02, "unknown_2_02", U32),
            field(0x04, "unknown_2_04", Opaque(4)),
            marker(0x08, "marker_2_08"),
            marker(0x10, "marker_2_10"),
            marker(0x20, "marker_2_20"),
            marker(0x40, "marker_2_40"),
            marker(0x80, "marker_2_80"),
        ],
    },
];

const SHOOTABLE: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            field(0x04, "position", Vec3),
            field(0x08, "angles", Vec3),
            field(0x10, "link_out_destroyed", CString),
            field(0x20, "target_name", CString),
            field(0x40, "dmg_taken", U16),
            field(0x80, "unknown_1_80", Opaque(1)),
        ],
    },
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x01, "weapon_type", U8),
            field(0x02, "unknown_2_02", Opaque(4)),
            field(0x04, "unknown_2_04", Opaque(4)),
            field(0x08, "unknown_2_08", Opaque(4)),
            field(0x10, "unknown_2_10", Opaque(4)),
            marker(0x20, "marker_2_20"),
            marker(0x40, "marker_2_40"),
            marker(0x80, "marker_2_80"),
        ],
    },
];

const ACCUMULATOR: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            field(0x04, "position", Vec3),
            field(0x08, "angles", Vec3),
            field(0x10, "link_in_count", CString),
            field(0x20, "link_out_done", CString),
            field(0x40, "count_target", U16),
            field(0x80, "unknown_1_80", Opaque(2)),
        ],
    },
];

const EXIT: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            field(0x04, "position", Vec3),
            field(0x08, "angles", Vec3),
            field(0x10, "link_in_exit", CString),
            marker(0x20, "marker_1_20"),
            marker(0x40, "marker_1_40"),
            marker(0x80, "marker_1_80"),
        ],
    },
];

const NAV_LINK: &[MaskDef] = &[
    MaskDef {
        presence: MaskPresence::Always,
        fields: &[
            field(0x02, "is_selected", U16),
            field(0x04, "position", Vec3),
            field(0x08, "angles", Vec3),
            field(0x10, "name", CString),
            field(0x20, "is_start", Flag),
            field(0x40, "is_bidirectional", Flag),
            marker(0x80, "marker_1_80"),
        ],
    },
];

/// Indexed by raw entity type tag.
pub(crate) static ENTITY_SCHEMAS: [EntitySchema; ENTITY_TYPE_COUNT] = [
    EntitySchema {
        entity_type: EntityType::WorldSpawn,
        masks: WORLD_SPAWN,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::PlayerSpawn,
        masks: PLAYER_SPAWN,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::Player,
        masks: PLAYER,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::PointLight,
        masks: POINT_LIGHT,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::ProjectileGrenade,
        masks: PROJECTILE_GRENADE,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::ProjectileRocket,
        masks: PROJECTILE_ROCKET,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::ProjectilePlasma,
        masks: PROJECTILE_PLASMA,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::ProjectileBurstgun,
        masks: PROJECTILE_BURSTGUN,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::ProjectileStake,
        masks: PROJECTILE_STAKE,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::Teleporter,
        masks: TELEPORTER,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::Target,
        masks: TARGET,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::JumpPad,
        masks: JUMP_PAD,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::Effect,
        masks: EFFECT,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::Pickup,
        masks: PICKUP,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::ChatMessage,
        masks: CHAT_MESSAGE,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::CameraPath,
        masks: CAMERA_PATH,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::Vote,
        masks: VOTE,
        trailing: &[fixed("vote", CString)],
    },
    EntitySchema {
        entity_type: EntityType::Damage,
        masks: DAMAGE,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::RaceStart,
        masks: RACE_START,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::RaceFinish,
        masks: RACE_FINISH,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::WeaponRestrictor,
        masks: WEAPON_RESTRICTOR,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::Prefab,
        masks: PREFAB,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::VolumeSelect,
        masks: VOLUME_SELECT,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::WorkshopScreenshot,
        masks: WORKSHOP_SCREENSHOT,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::ReflectionProbe,
        masks: REFLECTION_PROBE,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::TriggerVolume,
        masks: TRIGGER_VOLUME,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::Message,
        masks: MESSAGE,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::Goal,
        masks: GOAL,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::Turret,
        masks: TURRET,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::Shootable,
        masks: SHOOTABLE,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::Accumulator,
        masks: ACCUMULATOR,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::Exit,
        masks: EXIT,
        trailing: &[],
    },
    EntitySchema {
        entity_type: EntityType::NavLink,
        masks: NAV_LINK,
        trailing: &[],
    },
];
