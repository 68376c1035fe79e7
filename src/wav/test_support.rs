//! In-memory WAVE fixtures for unit tests.

use crate::wav::models::{
    CuePointRecord, FormatPrefix, LabelledTextHeader, SampleLoopRecord, SamplerHeader,
};
use binrw::BinWrite;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Cursor;

fn encode(write: impl FnOnce(&mut Cursor<&mut Vec<u8>>) -> binrw::BinResult<()>) -> Vec<u8> {
    let mut buf = Vec::new();
    write(&mut Cursor::new(&mut buf)).unwrap();
    buf
}

/// Builds a RIFF/WAVE file chunk by chunk. Top-level chunks are written without padding.
#[derive(Debug, Default)]
pub struct WavBuilder {
    chunks: Vec<u8>,
}

impl WavBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chunk(mut self, id: &[u8; 4], payload: &[u8]) -> Self {
        self.chunks.extend_from_slice(id);
        self.chunks
            .write_u32::<LittleEndian>(payload.len() as u32)
            .unwrap();
        self.chunks.extend_from_slice(payload);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.chunks.extend_from_slice(bytes);
        self
    }

    /// 16-byte PCM `fmt ` chunk for 16-bit stereo.
    pub fn fmt(self, sample_rate: u32) -> Self {
        let prefix = FormatPrefix {
            format_tag: 1,
            channels: 2,
            sample_rate,
        };
        let mut payload = encode(|w| prefix.write(w));
        payload.write_u32::<LittleEndian>(sample_rate * 4).unwrap();
        payload.write_u16::<LittleEndian>(4).unwrap();
        payload.write_u16::<LittleEndian>(16).unwrap();
        self.chunk(b"fmt ", &payload)
    }

    /// `cue ` chunk from `(id, sample_offset)` pairs.
    pub fn cue(self, points: &[(u32, u32)]) -> Self {
        let mut payload = Vec::new();
        payload
            .write_u32::<LittleEndian>(points.len() as u32)
            .unwrap();
        for &(id, sample_offset) in points {
            let record = CuePointRecord {
                id,
                position: id,
                data_chunk_id: *b"data",
                chunk_start: 0,
                block_start: 0,
                sample_offset,
            };
            payload.extend(encode(|w| record.write(w)));
        }
        self.chunk(b"cue ", &payload)
    }

    /// `smpl` chunk from `(id, start, end)` loops.
    pub fn smpl(self, loops: &[(u32, u32, u32)]) -> Self {
        self.chunk(b"smpl", &smpl_payload(loops, loops.len() as u32))
    }

    /// Standalone `labl` chunk.
    pub fn labl(self, id: u32, text: &str) -> Self {
        self.chunk(b"labl", &label_payload(id, text))
    }

    /// `LIST` chunk wrapping already encoded sub-chunks.
    pub fn list(self, list_type: &[u8; 4], sub_chunks: &[Vec<u8>]) -> Self {
        let mut payload = list_type.to_vec();
        for sub_chunk in sub_chunks {
            payload.extend_from_slice(sub_chunk);
        }
        self.chunk(b"LIST", &payload)
    }

    pub fn build(self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.chunks.len() + 12);
        bytes.extend_from_slice(b"RIFF");
        bytes
            .write_u32::<LittleEndian>(self.chunks.len() as u32 + 4)
            .unwrap();
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(&self.chunks);
        bytes
    }
}

/// `smpl` payload whose header claims `declared_loops` loops.
pub fn smpl_payload(loops: &[(u32, u32, u32)], declared_loops: u32) -> Vec<u8> {
    let header = SamplerHeader {
        manufacturer: 0,
        product: 0,
        sample_period: 20833,
        midi_unity_note: 60,
        midi_pitch_fraction: 0,
        smpte_format: 0,
        smpte_offset: 0,
        sample_loop_count: declared_loops,
        sampler_data_size: 0,
    };
    let mut payload = encode(|w| header.write(w));
    for &(id, start, end) in loops {
        let record = SampleLoopRecord {
            id,
            loop_type: 0,
            start,
            end,
            fraction: 0,
            play_count: 0,
        };
        payload.extend(encode(|w| record.write(w)));
    }
    payload
}

/// Label payload: id, text, terminating NUL.
pub fn label_payload(id: u32, text: &str) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.write_u32::<LittleEndian>(id).unwrap();
    payload.extend_from_slice(text.as_bytes());
    payload.push(0);
    payload
}

/// `ltxt` payload: header, text, terminating NUL.
pub fn ltxt_payload(id: u32, sample_length: u32, text: &str) -> Vec<u8> {
    let header = LabelledTextHeader {
        cue_id: id,
        sample_length,
        purpose: *b"rgn ",
        country: 0,
        language: 0,
        dialect: 0,
        code_page: 0,
    };
    let mut payload = encode(|w| header.write(w));
    payload.extend_from_slice(text.as_bytes());
    payload.push(0);
    payload
}

/// Encodes a `LIST` sub-chunk, adding the pad byte after an odd payload.
pub fn sub_chunk(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut bytes = id.to_vec();
    bytes
        .write_u32::<LittleEndian>(payload.len() as u32)
        .unwrap();
    bytes.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        bytes.push(0);
    }
    bytes
}
