//! Inspection and maintenance tools for reflay replays.
//!
//! This crate backs the `reflay-tools` binary:
//!
//! - Summarize a replay's header and record counts
//! - Verify that decode then encode reproduces the input byte for byte
//! - Collect replay files from a directory, optionally filtered by glob
//!
//! Reports derive `Serialize` so the binary can print them as JSON.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use codec::{CodecResult, EntityDelta, Limits, Replay};
use glob::Pattern;
use serde::Serialize;

/// One occupied player slot from the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub score: i32,
    pub team: i32,
    pub steam_id: u64,
}

/// Record counts per kind across a whole replay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordCounts {
    pub prefabs: usize,
    pub creates: usize,
    pub updates: usize,
    pub destroys: usize,
    pub brushes: usize,
}

/// Summary of one decoded replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub protocol_version: u32,
    pub map_title: String,
    pub game_mode: String,
    pub host_name: String,
    pub workshop_id: u64,
    pub started_at: Option<String>,
    pub players: Vec<PlayerSummary>,
    pub ticks: usize,
    pub first_timecode: Option<u32>,
    pub last_timecode: Option<u32>,
    pub records: RecordCounts,
    /// CREATE records per entity type name.
    pub created_types: BTreeMap<&'static str, usize>,
}

/// Decodes `bytes` and summarizes the replay.
pub fn inspect_replay(bytes: &[u8], limits: &Limits) -> CodecResult<InspectReport> {
    let replay = Replay::decode_with_limits(bytes, limits)?;
    Ok(inspect(&replay))
}

/// Summarizes an already decoded replay.
pub fn inspect(replay: &Replay) -> InspectReport {
    let header = &replay.header;
    let mut records = RecordCounts::default();
    let mut created_types = BTreeMap::new();
    for tick in &replay.ticks {
        records.prefabs += tick.prefabs.len();
        records.brushes += tick.brushes.len();
        for record in &tick.entities {
            match &record.delta {
                EntityDelta::Create(state) => {
                    records.creates += 1;
                    *created_types.entry(state.entity_type.name()).or_insert(0) += 1;
                }
                EntityDelta::Update(_) => records.updates += 1,
                EntityDelta::Destroy => records.destroys += 1,
            }
        }
    }

    InspectReport {
        protocol_version: header.protocol_version,
        map_title: header.map_title.to_string(),
        game_mode: header.game_mode.to_string(),
        host_name: header.host_name.to_string(),
        workshop_id: header.workshop_id,
        started_at: header.started_at().map(|time| time.to_rfc3339()),
        players: header
            .active_players()
            .iter()
            .map(|slot| PlayerSummary {
                name: slot.name.to_string(),
                score: slot.score,
                team: slot.team,
                steam_id: slot.steam_id,
            })
            .collect(),
        ticks: replay.ticks.len(),
        first_timecode: replay.ticks.first().map(|tick| tick.timecode.raw()),
        last_timecode: replay.ticks.last().map(|tick| tick.timecode.raw()),
        records,
        created_types,
    }
}

/// Renders a report for a terminal.
pub fn format_inspect_pretty(report: &InspectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "protocol: {} map: {:?} mode: {:?} host: {:?}",
        report.protocol_version, report.map_title, report.game_mode, report.host_name
    );
    match &report.started_at {
        Some(started) => {
            let _ = writeln!(out, "started: {started} workshop: {}", report.workshop_id);
        }
        None => {
            let _ = writeln!(out, "started: n/a workshop: {}", report.workshop_id);
        }
    }
    if !report.players.is_empty() {
        let _ = writeln!(out, "players:");
        for player in &report.players {
            let _ = writeln!(
                out,
                "  {} (team {}, score {})",
                player.name, player.team, player.score
            );
        }
    }
    let span = report
        .first_timecode
        .zip(report.last_timecode)
        .map(|(first, last)| format!("{first}..={last}"))
        .unwrap_or_else(|| "empty".to_string());
    let _ = writeln!(out, "ticks: {} (timecodes {span})", report.ticks);
    let records = &report.records;
    let _ = writeln!(
        out,
        "records: {} prefabs, {} creates, {} updates, {} destroys, {} brushes",
        records.prefabs, records.creates, records.updates, records.destroys, records.brushes
    );
    if !report.created_types.is_empty() {
        let _ = writeln!(out, "created entities:");
        for (name, count) in &report.created_types {
            let _ = writeln!(out, "  {name}: {count}");
        }
    }
    out
}

/// Outcome of re-encoding a decoded replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub input_len: usize,
    pub output_len: usize,
    pub input_digest: String,
    pub output_digest: String,
}

impl VerifyReport {
    #[must_use]
    pub fn is_lossless(&self) -> bool {
        self.input_len == self.output_len && self.input_digest == self.output_digest
    }
}

/// Decodes and re-encodes `bytes`, comparing BLAKE3 digests.
pub fn verify_replay(bytes: &[u8], limits: &Limits) -> CodecResult<VerifyReport> {
    let replay = Replay::decode_with_limits(bytes, limits)?;
    let output = replay.encode()?;
    Ok(VerifyReport {
        input_len: bytes.len(),
        output_len: output.len(),
        input_digest: blake3::hash(bytes).to_hex().to_string(),
        output_digest: blake3::hash(&output).to_hex().to_string(),
    })
}

/// A replay file found while scanning a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayEntry {
    pub path: PathBuf,
    pub size: u64,
}

/// Lists the files in `dir`, keeping those whose path or file name matches
/// `glob` when one is given. Entries are sorted by path.
pub fn collect_replays(dir: &Path, glob: Option<&str>) -> Result<Vec<ReplayEntry>> {
    let pattern = glob
        .map(|value| Pattern::new(value).context("invalid glob pattern"))
        .transpose()?;

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(ReplayEntry { path, size });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}
