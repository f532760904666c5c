//! Tick framing.
//!
//! A tick is a timecode followed by three chunk sequences: prefab
//! placements, entity records, then brushes.

use bytestream::{ByteReader, ByteWriter};
use wire::{read_chunked, write_chunked};

use crate::brush::{decode_brush, encode_brush, Brush};
use crate::entity::{decode_entity, encode_entity, EntityRecord};
use crate::error::CodecResult;
use crate::prefab::{decode_prefab, encode_prefab, PrefabPlacement};
use crate::session::Session;
use crate::types::Timecode;

/// One timestamped batch of records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tick {
    pub timecode: Timecode,
    pub prefabs: Vec<PrefabPlacement>,
    pub entities: Vec<EntityRecord>,
    pub brushes: Vec<Brush>,
}

impl Tick {
    #[must_use]
    pub fn new(timecode: Timecode) -> Self {
        Self {
            timecode,
            ..Self::default()
        }
    }

    /// Returns the total number of records in the tick.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.prefabs.len() + self.entities.len() + self.brushes.len()
    }
}

pub(crate) fn decode_tick(reader: &mut ByteReader<'_>, session: &mut Session) -> CodecResult<Tick> {
    let timecode = Timecode::new(reader.read_u32()?);
    let limits = session.limits().clone();

    let prefabs = read_chunked(reader, &limits, |r| decode_prefab(r, session, timecode))?;
    let entities = read_chunked(reader, &limits, |r| decode_entity(r, session, timecode))?;
    let brushes = read_chunked(reader, &limits, |r| decode_brush(r, limits.max_string_len))?;

    tracing::debug!(
        %timecode,
        prefabs = prefabs.len(),
        entities = entities.len(),
        brushes = brushes.len(),
        "decoded tick"
    );
    Ok(Tick {
        timecode,
        prefabs,
        entities,
        brushes,
    })
}

pub(crate) fn encode_tick(
    writer: &mut ByteWriter,
    session: &mut Session,
    tick: &Tick,
) -> CodecResult<()> {
    let timecode = tick.timecode;
    writer.write_u32(timecode.raw());
    write_chunked(writer, &tick.prefabs, |w, prefab| {
        encode_prefab(w, session, prefab)
    })?;
    write_chunked(writer, &tick.entities, |w, record| {
        encode_entity(w, session, record, timecode)
    })?;
    write_chunked(writer, &tick.brushes, encode_brush)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityState;
    use crate::types::EntityId;
    use schema::EntityType;
    use wire::CHUNK_CONTINUE;

    fn target(id: u32) -> EntityRecord {
        EntityRecord::create(EntityId::new(id), EntityState::new(EntityType::Target))
    }

    fn target_bytes(id: u32) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        encode_entity(&mut writer, &mut Session::default(), &target(id), Timecode::new(0)).unwrap();
        writer.finish()
    }

    fn tick_with_entity_counts(counts: &[u8], ids: &mut impl Iterator<Item = u32>) -> Vec<u8> {
        let mut bytes = 5u32.to_le_bytes().to_vec();
        bytes.push(0);
        for count in counts {
            bytes.push(*count);
            for _ in 0..*count {
                bytes.extend(target_bytes(ids.next().unwrap()));
            }
        }
        bytes.push(0);
        bytes
    }

    fn decode(bytes: &[u8]) -> Tick {
        let mut reader = ByteReader::new(bytes);
        let tick = decode_tick(&mut reader, &mut Session::default()).unwrap();
        assert!(reader.is_empty());
        tick
    }

    #[test]
    fn empty_tick() {
        let bytes = [7, 0, 0, 0, 0, 0, 0];
        let tick = decode(&bytes);
        assert_eq!(tick, Tick::new(Timecode::new(7)));
        let mut writer = ByteWriter::new();
        encode_tick(&mut writer, &mut Session::default(), &tick).unwrap();
        assert_eq!(writer.finish(), bytes.to_vec());
    }

    #[test]
    fn continuation_chunks_flatten() {
        let single = decode(&tick_with_entity_counts(&[0], &mut (0..)));
        assert!(single.entities.is_empty());

        let split = decode(&tick_with_entity_counts(&[CHUNK_CONTINUE, 3], &mut (0..)));
        assert_eq!(split.entities.len(), 258);
        assert_eq!(split.entities[257], target(257));

        let double = decode(&tick_with_entity_counts(
            &[CHUNK_CONTINUE, CHUNK_CONTINUE, 0],
            &mut (0..),
        ));
        assert_eq!(double.entities.len(), 510);
        assert_eq!(double.entities[..258], split.entities[..]);
    }

    #[test]
    fn reencode_rechunks() {
        let bytes = tick_with_entity_counts(&[CHUNK_CONTINUE, CHUNK_CONTINUE, 0], &mut (0..));
        let tick = decode(&bytes);
        let mut writer = ByteWriter::new();
        encode_tick(&mut writer, &mut Session::default(), &tick).unwrap();
        assert_eq!(writer.finish(), bytes);
    }

    #[test]
    fn record_count_sums_kinds() {
        let mut tick = Tick::new(Timecode::new(1));
        tick.entities.push(target(1));
        tick.brushes.push(Brush::default());
        assert_eq!(tick.record_count(), 2);
    }
}
