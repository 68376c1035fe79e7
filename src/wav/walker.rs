use crate::wav::chunk::{CHUNK_HEADER_SIZE, ChunkHeader, FourCc, read_u32_le};
use crate::wav::error::WavResult;
use std::io::{Read, Seek, SeekFrom};

/// Walks the top-level chunks of a RIFF/WAVE container.
///
/// Each chunk is followed directly by the next header, odd sizes are not padded.
#[derive(Debug)]
pub struct RiffWalker<R> {
    reader: R,
    end: u64,
    next: u64,
}

impl<R: Read + Seek> RiffWalker<R> {
    /// Checks the `RIFF`/`WAVE` header. Returns `None` for anything that is not a WAVE file.
    pub fn open(mut reader: R) -> WavResult<Option<Self>> {
        reader.seek(SeekFrom::Start(0))?;

        if FourCc::read(&mut reader)? != Some(FourCc::RIFF) {
            return Ok(None);
        }
        let Some(declared_size) = read_u32_le(&mut reader)? else {
            return Ok(None);
        };
        if FourCc::read(&mut reader)? != Some(FourCc::WAVE) {
            return Ok(None);
        }

        let position = reader.stream_position()?;
        let end = (position + u64::from(declared_size)).saturating_sub(4);

        Ok(Some(Self {
            reader,
            end,
            next: position,
        }))
    }

    /// Offset of the end of the container as declared by the RIFF header.
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Reads the next chunk header, `None` at the container end or when fewer than 8 bytes remain.
    pub fn next_chunk(&mut self) -> WavResult<Option<ChunkHeader>> {
        if self.next >= self.end {
            return Ok(None);
        }

        let chunk_start = self.next;
        self.reader.seek(SeekFrom::Start(chunk_start))?;

        let Some(id) = FourCc::read(&mut self.reader)? else {
            return Ok(None);
        };
        let Some(size) = read_u32_le(&mut self.reader)? else {
            return Ok(None);
        };

        let header = ChunkHeader {
            id,
            size,
            data_start: chunk_start + CHUNK_HEADER_SIZE,
        };
        self.next = header.data_end();

        Ok(Some(header))
    }

    /// Reads a chunk's payload, truncated if the file ends early.
    pub fn read_payload(&mut self, header: &ChunkHeader) -> WavResult<Vec<u8>> {
        self.reader.seek(SeekFrom::Start(header.data_start))?;

        let mut payload = Vec::new();
        (&mut self.reader)
            .take(u64::from(header.size))
            .read_to_end(&mut payload)?;

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::test_support::WavBuilder;
    use std::io::Cursor;

    fn chunk_ids(bytes: Vec<u8>) -> Vec<(FourCc, u32)> {
        let mut walker = RiffWalker::open(Cursor::new(bytes)).unwrap().unwrap();
        let mut ids = Vec::new();
        while let Some(header) = walker.next_chunk().unwrap() {
            ids.push((header.id, header.size));
        }
        ids
    }

    #[test]
    fn rejects_non_wave_input() {
        assert!(RiffWalker::open(Cursor::new(b"RIFX\0\0\0\0WAVE".to_vec())).unwrap().is_none());
        assert!(RiffWalker::open(Cursor::new(b"RIFF\x04\0\0\0AVI ".to_vec())).unwrap().is_none());
        assert!(RiffWalker::open(Cursor::new(b"RIFF\x04\0".to_vec())).unwrap().is_none());
        assert!(RiffWalker::open(Cursor::new(Vec::new())).unwrap().is_none());
    }

    #[test]
    fn walks_all_chunks() {
        let bytes = WavBuilder::new()
            .fmt(44100)
            .chunk(b"data", &[0u8; 16])
            .labl(1, "Hello")
            .build();

        let ids = chunk_ids(bytes);
        assert_eq!(
            ids,
            vec![
                (FourCc::FMT, 16),
                (FourCc(*b"data"), 16),
                (FourCc::LABL, 10),
            ]
        );
    }

    #[test]
    fn stops_at_declared_container_end() {
        let mut bytes = WavBuilder::new().chunk(b"junk", &[1, 2, 3, 4]).build();
        // trailing chunk outside the declared RIFF size
        bytes.extend_from_slice(b"labl");
        bytes.extend_from_slice(&4u32.to_le_bytes());
        bytes.extend_from_slice(&[0, 0, 0, 0]);

        assert_eq!(chunk_ids(bytes), vec![(FourCc(*b"junk"), 4)]);
    }

    #[test]
    fn stops_when_header_is_truncated() {
        let mut bytes = WavBuilder::new().chunk(b"junk", &[1, 2, 3, 4]).build();
        bytes.extend_from_slice(b"cue ");
        bytes.extend_from_slice(&[1, 0]);
        let declared = (bytes.len() - 8) as u32;
        bytes[4..8].copy_from_slice(&declared.to_le_bytes());

        assert_eq!(chunk_ids(bytes), vec![(FourCc(*b"junk"), 4)]);
    }

    #[test]
    fn odd_sized_chunks_are_not_padded() {
        let bytes = WavBuilder::new()
            .chunk(b"odd ", &[1, 2, 3])
            .chunk(b"next", &[4, 5, 6, 7])
            .build();

        assert_eq!(
            chunk_ids(bytes),
            vec![(FourCc(*b"odd "), 3), (FourCc(*b"next"), 4)]
        );
    }

    #[test]
    fn payload_is_truncated_at_end_of_file() {
        let mut bytes = WavBuilder::new().chunk(b"cue ", &[1, 0, 0, 0]).build();
        // claim a larger payload than present
        bytes[16..20].copy_from_slice(&100u32.to_le_bytes());

        let mut walker = RiffWalker::open(Cursor::new(bytes)).unwrap().unwrap();
        let header = walker.next_chunk().unwrap().unwrap();
        assert_eq!(header.size, 100);
        assert_eq!(walker.read_payload(&header).unwrap(), vec![1, 0, 0, 0]);
        assert_eq!(walker.next_chunk().unwrap(), None);
    }
}
