use super::BufferError;
use bytes::{Buf, Bytes};

const FIELD_ID_SIZE: usize = 8;
const FIELD_LENGTH_SIZE: usize = 8;

/// One `(id, value)` pair of a fielded buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldedEntry {
    pub id: i64,
    pub data: Bytes,
}

/// Decodes the fielded encoding: repeated `id: i64 BE`, `length: i64 BE`,
/// followed by `length` bytes of value data.
pub fn decode_fielded(mut data: Bytes) -> Result<Vec<FieldedEntry>, BufferError> {
    let total = data.len();
    let mut entries = Vec::new();

    while data.has_remaining() {
        let offset = total - data.remaining();
        if data.remaining() < FIELD_ID_SIZE + FIELD_LENGTH_SIZE {
            return Err(BufferError::FieldedTruncated {
                offset,
                needed: FIELD_ID_SIZE + FIELD_LENGTH_SIZE,
                available: data.remaining(),
            });
        }

        let id = data.get_i64();
        let length = data.get_i64();
        if length < 0 {
            return Err(BufferError::FieldedNegativeLength {
                field_id: id,
                length,
            });
        }
        // Lengths beyond the address space can never be satisfied.
        let length = usize::try_from(length).unwrap_or(usize::MAX);

        if data.remaining() < length {
            return Err(BufferError::FieldedTruncated {
                offset: total - data.remaining(),
                needed: length,
                available: data.remaining(),
            });
        }

        entries.push(FieldedEntry {
            id,
            data: data.split_to(length),
        });
    }

    Ok(entries)
}
