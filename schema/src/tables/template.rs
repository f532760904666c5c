//! Fixed field blocks of prefab templates.
//!
//! Templates carry no masks: every field of the layout is always present.
//! Types that never appear inside a prefab have an empty layout.

use crate::entity_type::EntityType;
use crate::field::FieldCodec::{
    Argb, Flag, Flag32, Opaque, Padded, Vec3, Xrgb, F32, I32, U16, U32, U8,
};
use crate::field::{fixed, FieldDef};

const WORLD_SPAWN: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("target_game_over_camera", Padded(32)),
    fixed("time_of_day", F32),
    fixed("sky_angle", F32),
    fixed("sky_top_color", Xrgb),
    fixed("sky_horizon_color", Xrgb),
    fixed("sky_bottom_color", Xrgb),
    fixed("sky_top_color_intensity", F32),
    fixed("sky_horizon_color_intensity", F32),
    fixed("sky_bottom_color_intensity", F32),
    fixed("sun_color", Xrgb),
    fixed("sun_intensity_size", F32),
    fixed("sun_sharpness", F32),
    fixed("sun_enabled", Flag32),
    fixed("horizon_color", Xrgb),
    fixed("horizon_intensity", F32),
    fixed("horizon_halo_exponent", F32),
    fixed("horizon_halo_exponent_sun", F32),
    fixed("horizon_halo_exponent_sun_intensity", F32),
    fixed("horizon_line", F32),
    fixed("stars_intensity", F32),
    fixed("clouds_color", Xrgb),
    fixed("clouds_coverage", F32),
    fixed("clouds_speed_x", F32),
    fixed("clouds_speed_y", F32),
    fixed("clouds_coverage_multiplier", F32),
    fixed("clouds_bias", F32),
    fixed("clouds_roughness", F32),
    fixed("clouds_density", F32),
    fixed("clouds_thickness", F32),
    fixed("color_team_a", Xrgb),
    fixed("color_team_b", Xrgb),
    fixed("fog_color", Xrgb),
    fixed("fog_distance_start", F32),
    fixed("fog_distance_end", F32),
    fixed("fog_height_top", F32),
    fixed("fog_height_bottom", F32),
    fixed("title", Padded(256)),
    fixed("owner_string", Padded(256)),
    fixed("players_min", U8),
    fixed("players_max", U8),
    fixed("mode_ctf", Flag),
    fixed("mode_ffa", Flag),
    fixed("mode_tdm", Flag),
    fixed("mode_1v1", Flag),
    fixed("mode_2v2", Flag),
    fixed("mode_race", Flag),
    fixed("mode_training", Flag),
    fixed("unknown_1", Opaque(1883)),
];

const PLAYER_SPAWN: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("team_a", Flag),
    fixed("team_b", Flag),
    fixed("initial_spawn", Flag),
    fixed("mode_ctf", Flag),
    fixed("mode_ffa", Flag),
    fixed("mode_tdm", Flag),
    fixed("mode_1v1", Flag),
    fixed("mode_race", Flag),
    fixed("mode_2v2", Flag32),
];

const POINT_LIGHT: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("color", Xrgb),
    fixed("intensity", F32),
    fixed("near_attenuation", F32),
    fixed("far_attenuation", F32),
];

const TELEPORTER: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("target", Padded(32)),
    fixed("link_out_on_used", Padded(32)),
];

const TARGET: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("name", Padded(32)),
    fixed("name_next", Padded(32)),
    fixed("speed", F32),
];

const JUMP_PAD: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("target", Padded(32)),
];

const EFFECT: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("effect_name", Padded(64)),
    fixed("effect_scale", F32),
    fixed("material0_name", Padded(256)),
    fixed("material0_albedo", Argb),
    fixed("material1_name", Padded(256)),
    fixed("material1_albedo", Argb),
    fixed("material2_name", Padded(256)),
    fixed("material2_albedo", Argb),
    fixed("material3_name", Padded(256)),
    fixed("material3_albedo", Argb),
    fixed("material4_name", Padded(256)),
    fixed("material4_albedo", Argb),
    fixed("material5_name", Padded(256)),
    fixed("material5_albedo", Argb),
    fixed("material6_name", Padded(256)),
    fixed("material6_albedo", Argb),
    fixed("material7_name", Padded(256)),
    fixed("material7_albedo", Argb),
    fixed("point_light_overridden", Flag32),
    fixed("point_light_near", F32),
    fixed("point_light_far", F32),
    fixed("point_light_color", Xrgb),
    fixed("point_light_intensity", F32),
    fixed("point_light_team_index", U8),
    fixed("unknown_1", Opaque(31)),
];

const PICKUP: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("unknown_1", Vec3),
    fixed("pickup_type", U8),
    fixed("unknown_2", Opaque(9)),
    fixed("token_index", U8),
    fixed("unknown_3", Opaque(17)),
    fixed("link_out_on_picked_up", Padded(32)),
];

const CAMERA_PATH: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("entity_id_attached_to", U32),
    fixed("unknown_1", U32),
    fixed("unknown_2", U8),
    fixed("pos_lerp", U8),
    fixed("angle_lerp", U8),
    fixed("unknown_3", Opaque(5)),
];

const RACE_START: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
];

const RACE_FINISH: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
];

const WEAPON_RESTRICTOR: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("allowed_weapon_mask", U32),
];

const PREFAB: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("prefab_name", Padded(64)),
    fixed("unknown", Opaque(16)),
];

const VOLUME_SELECT: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("unknown_1", Opaque(4)),
];

const WORKSHOP_SCREENSHOT: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
];

const REFLECTION_PROBE: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
];

const TRIGGER_VOLUME: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("unknown_1", Opaque(4)),
    fixed("link_out_on_enter", Padded(32)),
    fixed("link_out_on_exit", Padded(32)),
];

const MESSAGE: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("link_in_display", Padded(32)),
    fixed("link_in_show", Padded(32)),
    fixed("link_in_hide", Padded(32)),
    fixed("message", Padded(256)),
    fixed("unknown", Opaque(4)),
];

const GOAL: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("link_in_done", Padded(32)),
    fixed("message", Padded(256)),
    fixed("sort_index", F32),
];

const TURRET: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("weapon_type", U8),
    fixed("unknown_1", Opaque(23)),
];

const SHOOTABLE: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("link_out_destroyed", Padded(32)),
    fixed("target", Padded(32)),
    fixed("unknown_1", Opaque(3)),
    fixed("weapon_type", U8),
    fixed("unknown_2", I32),
    fixed("unknown_3", I32),
    fixed("unknown_4", I32),
    fixed("unknown_5", I32),
];

const ACCUMULATOR: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("link_in_count", Padded(32)),
    fixed("link_out_done", Padded(32)),
    fixed("count_target", U16),
    fixed("unknown_1", U16),
];

const EXIT: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("link_in_exit", Padded(32)),
];

const NAV_LINK: &[FieldDef] = &[
    fixed("position", Vec3),
    fixed("angles", Vec3),
    fixed("name", Padded(32)),
    fixed("is_start", Flag),
    fixed("is_bidirectional", Flag),
    fixed("unknown_1", Flag),
    fixed("unknown_2", Flag),
];

/// Returns the fixed field block a prefab template of `entity_type` carries.
#[must_use]
pub fn template_layout(entity_type: EntityType) -> &'static [FieldDef] {
    match entity_type {
        EntityType::WorldSpawn => WORLD_SPAWN,
        EntityType::PlayerSpawn => PLAYER_SPAWN,
        EntityType::PointLight => POINT_LIGHT,
        EntityType::Teleporter => TELEPORTER,
        EntityType::Target => TARGET,
        EntityType::JumpPad => JUMP_PAD,
        EntityType::Effect => EFFECT,
        EntityType::Pickup => PICKUP,
        EntityType::CameraPath => CAMERA_PATH,
        EntityType::RaceStart => RACE_START,
        EntityType::RaceFinish => RACE_FINISH,
        EntityType::WeaponRestrictor => WEAPON_RESTRICTOR,
        EntityType::Prefab => PREFAB,
        EntityType::VolumeSelect => VOLUME_SELECT,
        EntityType::WorkshopScreenshot => WORKSHOP_SCREENSHOT,
        EntityType::ReflectionProbe => REFLECTION_PROBE,
        EntityType::TriggerVolume => TRIGGER_VOLUME,
        EntityType::Message => MESSAGE,
        EntityType::Goal => GOAL,
        EntityType::Turret => TURRET,
        EntityType::Shootable => SHOOTABLE,
        EntityType::Accumulator => ACCUMULATOR,
        EntityType::Exit => EXIT,
        EntityType::NavLink => NAV_LINK,
        _ => &[],
    }
}
