//! Whole-replay decode and encode.

use bytestream::{ByteReader, ByteWriter};
use wire::{decode_header, encode_header, LimitKind, Limits, ReplayHeader, WireError, HEADER_SIZE};

use crate::brush::Brush;
use crate::entity::EntityRecord;
use crate::error::CodecResult;
use crate::prefab::PrefabPlacement;
use crate::session::Session;
use crate::tick::{decode_tick, encode_tick, Tick};
use crate::types::Timecode;

/// A decoded replay: the header and every tick in stream order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Replay {
    pub header: ReplayHeader,
    pub ticks: Vec<Tick>,
}

impl Replay {
    /// Decodes a replay with default limits.
    pub fn decode(bytes: &[u8]) -> CodecResult<Self> {
        Self::decode_with_limits(bytes, &Limits::default())
    }

    /// Decodes a replay, bounding every stream-supplied length by `limits`.
    pub fn decode_with_limits(bytes: &[u8], limits: &Limits) -> CodecResult<Self> {
        let mut session = Session::new(limits.clone());
        Self::decode_in(bytes, &mut session)
    }

    /// Decodes a replay through an existing session.
    ///
    /// The session's registries reflect the end of the stream afterwards.
    pub fn decode_in(bytes: &[u8], session: &mut Session) -> CodecResult<Self> {
        let mut reader = ByteReader::new(bytes);
        let header = decode_header(&mut reader)?;
        let max_ticks = session.limits().max_ticks;

        let mut ticks = Vec::new();
        while !reader.is_empty() {
            if ticks.len() >= max_ticks {
                return Err(WireError::LimitsExceeded {
                    kind: LimitKind::Ticks,
                    limit: max_ticks,
                    actual: ticks.len() + 1,
                }
                .into());
            }
            ticks.push(decode_tick(&mut reader, session)?);
        }

        tracing::debug!(
            ticks = ticks.len(),
            entities = session.entities().len(),
            prefabs = session.prefabs().len(),
            "decoded replay"
        );
        Ok(Self { header, ticks })
    }

    /// Encodes the replay.
    ///
    /// Records are validated against fresh registries exactly as a decoder
    /// would see them.
    pub fn encode(&self) -> CodecResult<Vec<u8>> {
        let mut writer = ByteWriter::with_capacity(HEADER_SIZE);
        self.encode_into(&mut writer, &mut Session::default())?;
        Ok(writer.finish())
    }

    /// Encodes the replay into `writer` through an existing session.
    pub fn encode_into(&self, writer: &mut ByteWriter, session: &mut Session) -> CodecResult<()> {
        encode_header(&self.header, writer)?;
        for tick in &self.ticks {
            encode_tick(writer, session, tick)?;
        }
        tracing::debug!(ticks = self.ticks.len(), bytes = writer.len(), "encoded replay");
        Ok(())
    }

    /// Iterates every entity record with its tick's timecode.
    pub fn entities(&self) -> impl Iterator<Item = (Timecode, &EntityRecord)> + '_ {
        self.ticks
            .iter()
            .flat_map(|tick| tick.entities.iter().map(move |record| (tick.timecode, record)))
    }

    /// Iterates entity records in ticks whose timecode is greater than `after`.
    pub fn entities_after(
        &self,
        after: Timecode,
    ) -> impl Iterator<Item = (Timecode, &EntityRecord)> + '_ {
        self.entities().filter(move |(timecode, _)| *timecode > after)
    }

    /// Iterates prefab placements in ticks whose timecode is greater than `after`.
    pub fn prefabs_after(
        &self,
        after: Timecode,
    ) -> impl Iterator<Item = (Timecode, &PrefabPlacement)> + '_ {
        self.ticks
            .iter()
            .filter(move |tick| tick.timecode > after)
            .flat_map(|tick| tick.prefabs.iter().map(move |prefab| (tick.timecode, prefab)))
    }

    /// Iterates brushes in ticks whose timecode is greater than `after`.
    pub fn brushes_after(&self, after: Timecode) -> impl Iterator<Item = (Timecode, &Brush)> + '_ {
        self.ticks
            .iter()
            .filter(move |tick| tick.timecode > after)
            .flat_map(|tick| tick.brushes.iter().map(move |brush| (tick.timecode, brush)))
    }

    /// Iterates the CREATE records of the first tick.
    pub fn initial_entities(&self) -> impl Iterator<Item = &EntityRecord> + '_ {
        self.ticks
            .first()
            .into_iter()
            .flat_map(|tick| tick.entities.iter())
            .filter(|record| record.is_create())
    }
}

/// Decodes a replay with default limits.
pub fn decode(bytes: &[u8]) -> CodecResult<Replay> {
    Replay::decode(bytes)
}

/// Encodes a replay.
pub fn encode(replay: &Replay) -> CodecResult<Vec<u8>> {
    replay.encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityState;
    use crate::error::CodecError;
    use crate::types::EntityId;
    use schema::EntityType;
    use wire::HeaderReason;

    fn tick(timecode: u32, entities: Vec<EntityRecord>) -> Tick {
        Tick {
            entities,
            ..Tick::new(Timecode::new(timecode))
        }
    }

    fn sample() -> Replay {
        Replay {
            header: ReplayHeader::default(),
            ticks: vec![
                tick(
                    0,
                    vec![
                        EntityRecord::create(EntityId::new(0), EntityState::new(EntityType::WorldSpawn)),
                        EntityRecord::create(EntityId::new(1), EntityState::new(EntityType::Target)),
                    ],
                ),
                tick(
                    16,
                    vec![
                        EntityRecord::update(EntityId::new(1), EntityState::new(EntityType::Target)),
                        EntityRecord::create(EntityId::new(2), EntityState::new(EntityType::Pickup)),
                    ],
                ),
                tick(32, vec![EntityRecord::destroy(EntityId::new(1))]),
            ],
        }
    }

    #[test]
    fn empty_replay_is_header_only() {
        let replay = Replay::default();
        let bytes = replay.encode().unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(Replay::decode(&bytes).unwrap(), replay);
    }

    #[test]
    fn roundtrip() {
        let replay = sample();
        let bytes = encode(&replay).unwrap();
        assert_eq!(decode(&bytes).unwrap(), replay);
    }

    #[test]
    fn traversal_filters_by_timecode() {
        let replay = sample();
        let after: Vec<_> = replay
            .entities_after(Timecode::new(0))
            .map(|(timecode, record)| (timecode.raw(), record.id.raw()))
            .collect();
        assert_eq!(after, vec![(16, 1), (16, 2), (32, 1)]);
        assert_eq!(replay.entities().count(), 5);
        assert_eq!(replay.initial_entities().count(), 2);
        assert_eq!(replay.prefabs_after(Timecode::new(0)).count(), 0);
        assert_eq!(replay.brushes_after(Timecode::new(0)).count(), 0);
    }

    #[test]
    fn encode_rejects_update_after_destroy() {
        let mut replay = sample();
        replay.ticks.push(tick(
            48,
            vec![EntityRecord::update(EntityId::new(1), EntityState::new(EntityType::Target))],
        ));
        assert!(matches!(
            replay.encode(),
            Err(CodecError::DanglingEntityReference { .. })
        ));
    }

    #[test]
    fn wrong_version_rejected_before_ticks() {
        let mut bytes = sample().encode().unwrap();
        bytes[4..8].copy_from_slice(&88u32.to_le_bytes());
        let err = Replay::decode(&bytes).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Wire(WireError::MalformedHeader(HeaderReason::UnsupportedVersion {
                found: 88,
                ..
            }))
        ));
    }

    #[test]
    fn tick_limit() {
        let bytes = sample().encode().unwrap();
        let limits = Limits {
            max_ticks: 2,
            ..Limits::default()
        };
        assert!(matches!(
            Replay::decode_with_limits(&bytes, &limits),
            Err(CodecError::Wire(WireError::LimitsExceeded {
                kind: LimitKind::Ticks,
                limit: 2,
                actual: 3,
            }))
        ));
    }

    #[test]
    fn truncated_tick_reports_offset() {
        let bytes = sample().encode().unwrap();
        let err = Replay::decode(&bytes[..bytes.len() - 2]).unwrap_err();
        assert!(err.offset().is_some_and(|offset| offset >= HEADER_SIZE));
    }
}
