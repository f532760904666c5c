//! Chunk framing for the record sequences of a tick.
//!
//! A sequence is a run of chunks, each a count byte followed by that many
//! records. A count of [`CHUNK_CONTINUE`] means another chunk follows; the
//! first count below it ends the sequence (its records are still part of it).

use bytestream::{ByteReader, ByteWriter};

use crate::error::{LimitKind, WireError};
use crate::limits::Limits;

/// Count byte that signals a further chunk in the same sequence.
pub const CHUNK_CONTINUE: u8 = 0xFF;

/// Maximum number of records carried by a single chunk.
pub const MAX_CHUNK_RECORDS: usize = CHUNK_CONTINUE as usize;

/// Reads one chunk sequence, decoding each record with `read_record`.
///
/// Records are returned as one flat list; chunk boundaries carry no meaning
/// beyond the continuation rule and are recomputed by [`write_chunked`].
pub fn read_chunked<'a, T, E, F>(
    reader: &mut ByteReader<'a>,
    limits: &Limits,
    mut read_record: F,
) -> Result<Vec<T>, E>
where
    F: FnMut(&mut ByteReader<'a>) -> Result<T, E>,
    E: From<WireError>,
{
    let mut records = Vec::new();
    let mut chunks = 0usize;
    loop {
        let count = reader.read_u8().map_err(WireError::from)?;
        chunks += 1;
        if chunks > limits.max_chunks_per_sequence {
            return Err(WireError::LimitsExceeded {
                kind: LimitKind::ChunksPerSequence,
                limit: limits.max_chunks_per_sequence,
                actual: chunks,
            }
            .into());
        }
        records.reserve(usize::from(count));
        for _ in 0..count {
            records.push(read_record(reader)?);
        }
        if count != CHUNK_CONTINUE {
            return Ok(records);
        }
    }
}

/// Writes `records` as a chunk sequence.
///
/// Full chunks carry [`MAX_CHUNK_RECORDS`] records; the terminating chunk
/// carries the remainder, which is zero when the length is an exact multiple.
pub fn write_chunked<T, E, F>(
    writer: &mut ByteWriter,
    records: &[T],
    mut write_record: F,
) -> Result<(), E>
where
    F: FnMut(&mut ByteWriter, &T) -> Result<(), E>,
{
    let mut rest = records;
    loop {
        let take = rest.len().min(MAX_CHUNK_RECORDS);
        writer.write_u8(u8::try_from(take).unwrap_or(CHUNK_CONTINUE));
        for record in &rest[..take] {
            write_record(writer, record)?;
        }
        rest = &rest[take..];
        if take < MAX_CHUNK_RECORDS {
            return Ok(());
        }
    }
}

/// Returns the count bytes [`write_chunked`] emits for `len` records.
#[must_use]
pub fn chunk_counts(len: usize) -> Vec<u8> {
    let full = len / MAX_CHUNK_RECORDS;
    let mut counts = vec![CHUNK_CONTINUE; full];
    counts.push(u8::try_from(len % MAX_CHUNK_RECORDS).unwrap_or(0));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_bytes(input: &[u8]) -> Result<Vec<u8>, WireError> {
        let mut reader = ByteReader::new(input);
        read_chunked(&mut reader, &Limits::default(), |r| {
            r.read_u8().map_err(WireError::from)
        })
    }

    fn write_bytes(records: &[u8]) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        write_chunked(&mut writer, records, |w, r| {
            w.write_u8(*r);
            Ok::<_, WireError>(())
        })
        .unwrap();
        writer.finish()
    }

    #[test]
    fn empty_sequence_is_single_zero() {
        assert_eq!(read_bytes(&[0]).unwrap(), Vec::<u8>::new());
        assert_eq!(write_bytes(&[]), vec![0]);
    }

    #[test]
    fn continuation_then_partial() {
        let mut input = vec![CHUNK_CONTINUE];
        input.extend(std::iter::repeat(7).take(255));
        input.push(3);
        input.extend([1, 2, 3]);
        let records = read_bytes(&input).unwrap();
        assert_eq!(records.len(), 258);
        assert_eq!(&records[255..], &[1, 2, 3]);
    }

    #[test]
    fn exact_multiple_ends_with_zero_chunk() {
        let records = vec![5u8; 510];
        assert_eq!(chunk_counts(510), vec![CHUNK_CONTINUE, CHUNK_CONTINUE, 0]);
        let bytes = write_bytes(&records);
        assert_eq!(bytes.len(), 510 + 3);
        assert_eq!(bytes[bytes.len() - 1], 0);
        assert_eq!(read_bytes(&bytes).unwrap(), records);
    }

    #[test]
    fn chunk_counts_remainder() {
        assert_eq!(chunk_counts(0), vec![0]);
        assert_eq!(chunk_counts(254), vec![254]);
        assert_eq!(chunk_counts(255), vec![CHUNK_CONTINUE, 0]);
        assert_eq!(chunk_counts(300), vec![CHUNK_CONTINUE, 45]);
    }

    #[test]
    fn truncated_sequence_is_eof() {
        let err = read_bytes(&[2, 1]).unwrap_err();
        assert!(matches!(err, WireError::Bytes(_)));
    }

    #[test]
    fn too_many_chunks_is_limited() {
        let mut input = Vec::new();
        for _ in 0..9 {
            input.push(CHUNK_CONTINUE);
            input.extend(std::iter::repeat(0).take(255));
        }
        input.push(0);
        let mut reader = ByteReader::new(&input);
        let err = read_chunked(&mut reader, &Limits::for_testing(), |r| {
            r.read_u8().map_err(WireError::from)
        })
        .unwrap_err();
        assert!(matches!(
            err,
            WireError::LimitsExceeded {
                kind: LimitKind::ChunksPerSequence,
                ..
            }
        ));
    }
}
