use crate::metadata::ParsedMetadata;
use crate::metadata::models::{CuePoint, Label, LoopEnd};
use crate::wav::ReadOptions;
use crate::wav::adtl::parse_list;
use crate::wav::chunk::{ChunkHeader, FourCc, decode_text, read_u32_le};
use crate::wav::error::WavResult;
use crate::wav::models::{CuePointRecord, FormatPrefix, SampleLoopRecord, SamplerHeader};
use crate::wav::walker::RiffWalker;
use binrw::BinRead;
use log::{debug, warn};
use std::io::{Cursor, Read, Seek};

const MIN_FMT_SIZE: u32 = 12;
const MIN_CUE_SIZE: u32 = 4;
const MIN_SMPL_SIZE: u32 = 44;
const MIN_LABL_SIZE: u32 = 4;
const MIN_LIST_SIZE: u32 = 4;

/// Single pass over a WAVE file collecting cue points, loops and labels.
#[derive(Debug, Clone, Default)]
pub struct WavMetaParser {
    options: ReadOptions,
}

impl WavMetaParser {
    pub fn new(options: ReadOptions) -> Self {
        Self { options }
    }

    /// Returns `None` when the source is not a RIFF/WAVE container.
    pub fn parse<R: Read + Seek>(&self, reader: R) -> WavResult<Option<ParsedMetadata>> {
        let Some(mut walker) = RiffWalker::open(reader)? else {
            debug!("Missing RIFF/WAVE header, no metadata to read");
            return Ok(None);
        };

        let mut metadata = ParsedMetadata::new(self.options.default_sample_rate);

        while let Some(header) = walker.next_chunk()? {
            debug!(
                "Found \"{}\" chunk at offset {} ({} bytes)",
                header.id,
                header.data_start - 8,
                header.size
            );

            if !Self::is_wanted(&header) {
                continue;
            }

            let payload = walker.read_payload(&header)?;
            match header.id {
                FourCc::FMT => {
                    if let Some(sample_rate) = parse_sample_rate(&payload)? {
                        metadata.sample_rate = sample_rate;
                    }
                }
                FourCc::CUE => {
                    for cue in parse_cue_points(&payload)? {
                        metadata.add_cue_point(cue);
                    }
                }
                FourCc::SMPL => {
                    for loop_end in parse_loop_ends(&payload)? {
                        metadata.add_loop_end(loop_end);
                    }
                }
                FourCc::LABL => {
                    if let Some(label) = parse_label(&payload) {
                        metadata.add_standalone_label(label);
                    }
                }
                FourCc::LIST => parse_list(&payload, &mut metadata)?,
                _ => {}
            }
        }

        Ok(Some(metadata))
    }

    fn is_wanted(header: &ChunkHeader) -> bool {
        match header.id {
            FourCc::FMT => header.size >= MIN_FMT_SIZE,
            FourCc::CUE => header.size >= MIN_CUE_SIZE,
            FourCc::SMPL => header.size >= MIN_SMPL_SIZE,
            FourCc::LABL => header.size >= MIN_LABL_SIZE,
            FourCc::LIST => header.size >= MIN_LIST_SIZE,
            _ => false,
        }
    }
}

/// Sample rate from a `fmt ` payload. A zero rate is ignored.
pub fn parse_sample_rate(payload: &[u8]) -> WavResult<Option<u32>> {
    if payload.len() < FormatPrefix::SIZE {
        return Ok(None);
    }

    let format = FormatPrefix::read(&mut Cursor::new(payload))?;
    debug!(
        "Format tag {:#06x}, {} channel(s), {} Hz",
        format.format_tag, format.channels, format.sample_rate
    );

    if format.sample_rate == 0 {
        warn!("Ignoring fmt chunk with a sample rate of 0");
        return Ok(None);
    }

    Ok(Some(format.sample_rate))
}

/// Cue points of a `cue ` payload. Records that do not fit the payload are dropped.
pub fn parse_cue_points(payload: &[u8]) -> WavResult<Vec<CuePoint>> {
    let mut cursor = Cursor::new(payload);
    let Some(count) = read_u32_le(&mut cursor)? else {
        return Ok(Vec::new());
    };

    let mut cue_points = Vec::new();
    for _ in 0..count {
        if remaining(&cursor) < CuePointRecord::SIZE {
            break;
        }
        let record = CuePointRecord::read(&mut cursor)?;
        cue_points.push(CuePoint {
            cue_id: record.id,
            sample_offset: record.sample_offset,
        });
    }

    if cue_points.len() < count as usize {
        debug!(
            "cue chunk declares {} point(s) but holds {}",
            count,
            cue_points.len()
        );
    }

    Ok(cue_points)
}

/// Loop end samples of a `smpl` payload, keyed by loop id.
pub fn parse_loop_ends(payload: &[u8]) -> WavResult<Vec<LoopEnd>> {
    if payload.len() < SamplerHeader::SIZE {
        return Ok(Vec::new());
    }

    let mut cursor = Cursor::new(payload);
    let header = SamplerHeader::read(&mut cursor)?;

    let mut loop_ends = Vec::new();
    for _ in 0..header.sample_loop_count {
        if remaining(&cursor) < SampleLoopRecord::SIZE {
            break;
        }
        let record = SampleLoopRecord::read(&mut cursor)?;
        loop_ends.push(LoopEnd {
            loop_id: record.id,
            end_sample: record.end,
        });
    }

    Ok(loop_ends)
}

/// A `labl` or `note` payload: cue id followed by text.
pub fn parse_label(payload: &[u8]) -> Option<Label> {
    let (id, text) = payload.split_first_chunk::<4>()?;
    Some(Label {
        id: u32::from_le_bytes(*id),
        text: decode_text(text),
    })
}

fn remaining(cursor: &Cursor<&[u8]>) -> usize {
    cursor.get_ref().len().saturating_sub(cursor.position() as usize)
}
