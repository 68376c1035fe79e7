use byteorder::{LittleEndian, ReadBytesExt};
use std::fmt::{Display, Formatter};
use std::io::{ErrorKind, Read};

/// Size of a RIFF chunk header: 4-byte id followed by a little-endian u32 size.
pub const CHUNK_HEADER_SIZE: u64 = 8;

/// A four character code as used for RIFF chunk ids and list types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc(pub [u8; 4]);

impl FourCc {
    pub const RIFF: FourCc = FourCc(*b"RIFF");
    pub const WAVE: FourCc = FourCc(*b"WAVE");
    pub const FMT: FourCc = FourCc(*b"fmt ");
    pub const CUE: FourCc = FourCc(*b"cue ");
    pub const SMPL: FourCc = FourCc(*b"smpl");
    pub const LABL: FourCc = FourCc(*b"labl");
    pub const NOTE: FourCc = FourCc(*b"note");
    pub const LTXT: FourCc = FourCc(*b"ltxt");
    pub const LIST: FourCc = FourCc(*b"LIST");
    pub const ADTL: FourCc = FourCc(*b"adtl");

    /// Reads a four character code, `None` when the source ends first.
    pub fn read(reader: &mut impl Read) -> std::io::Result<Option<Self>> {
        let mut bytes = [0u8; 4];
        match reader.read_exact(&mut bytes) {
            Ok(()) => Ok(Some(Self(bytes))),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl Display for FourCc {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text: String = self
            .0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect();
        write!(f, "{text}")
    }
}

/// Header of a chunk found by the walker, with the absolute offset of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: FourCc,
    pub size: u32,
    pub data_start: u64,
}

impl ChunkHeader {
    /// Offset of the byte following the payload. Top-level chunks are not word aligned.
    pub fn data_end(&self) -> u64 {
        self.data_start + u64::from(self.size)
    }
}

/// Reads a little-endian u32, `None` when the source ends first.
pub fn read_u32_le(reader: &mut impl Read) -> std::io::Result<Option<u32>> {
    match reader.read_u32::<LittleEndian>() {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    }
}

/// Decodes label text: cut at the first NUL, invalid UTF-8 replaced, whitespace trimmed.
pub fn decode_text(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).trim().to_string()
}

/// A sub-chunk inside a `LIST` payload. `data` is truncated to what the payload holds.
#[derive(Debug, Clone, Copy)]
pub struct SubChunk<'a> {
    pub id: FourCc,
    pub size: u32,
    pub offset: usize,
    pub data: &'a [u8],
}

/// Iterates the sub-chunks of a `LIST` payload (list type already stripped).
///
/// Unlike the top level, an odd declared size is followed by one pad byte.
pub struct SubChunks<'a> {
    payload: &'a [u8],
    position: usize,
}

impl<'a> SubChunks<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self {
            payload,
            position: 0,
        }
    }
}

impl<'a> Iterator for SubChunks<'a> {
    type Item = SubChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.payload.len().checked_sub(self.position)?;
        if remaining < CHUNK_HEADER_SIZE as usize {
            return None;
        }

        let header = &self.payload[self.position..self.position + CHUNK_HEADER_SIZE as usize];
        let id = FourCc([header[0], header[1], header[2], header[3]]);
        let size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);

        let data_start = self.position + CHUNK_HEADER_SIZE as usize;
        let data_end = data_start
            .saturating_add(size as usize)
            .min(self.payload.len());

        let sub_chunk = SubChunk {
            id,
            size,
            offset: self.position,
            data: &self.payload[data_start..data_end],
        };

        let padded_size = size as usize + (size as usize & 1);
        self.position = data_start.saturating_add(padded_size);

        Some(sub_chunk)
    }
}
