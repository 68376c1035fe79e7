use crate::metadata::DEFAULT_SAMPLE_RATE;
use crate::metadata::models::MetadataEvent;
use crate::metadata::resolver::resolve;
use crate::wav::chunk::{FourCc, SubChunks};
use crate::wav::error::{WavError, WavResult};
use crate::wav::parser::WavMetaParser;
use crate::wav::walker::RiffWalker;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

pub mod adtl;
pub mod chunk;
pub mod error;
pub mod models;
pub mod parser;
pub mod walker;

#[cfg(test)]
pub(crate) mod test_support;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Sample rate used when the file has no usable `fmt ` chunk.
    pub default_sample_rate: u32,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            default_sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// Reads the markers and regions of a WAV file.
///
/// Files that are not RIFF/WAVE, or that carry cue points without any label, label range or
/// loop, give an empty list. Only I/O failures are errors.
pub fn read_wav_meta(path: impl AsRef<Path>) -> WavResult<Vec<MetadataEvent>> {
    read_wav_meta_with(path, &ReadOptions::default())
}

pub fn read_wav_meta_with(
    path: impl AsRef<Path>,
    options: &ReadOptions,
) -> WavResult<Vec<MetadataEvent>> {
    let path = path.as_ref();
    debug!("Reading WAV metadata from {:?}", path);

    let reader = open(path)?;
    read_wav_meta_from(reader, options)
}

/// Same as [`read_wav_meta`] for any seekable source.
pub fn read_wav_meta_from<R: Read + Seek>(
    reader: R,
    options: &ReadOptions,
) -> WavResult<Vec<MetadataEvent>> {
    let parser = WavMetaParser::new(*options);
    match parser.parse(reader)? {
        Some(metadata) => Ok(resolve(metadata)),
        None => Ok(Vec::new()),
    }
}

/// Layout entry for the chunk listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkInfo {
    pub id: FourCc,
    pub offset: u64,
    pub size: u32,
    /// List type and sub-chunks, for `LIST` chunks only.
    pub list_type: Option<FourCc>,
    pub children: Vec<ChunkInfo>,
}

/// Lists the top-level chunks of a WAV file and the contents of its `LIST` chunks.
///
/// `None` when the file is not RIFF/WAVE.
pub fn list_chunks(path: impl AsRef<Path>) -> WavResult<Option<Vec<ChunkInfo>>> {
    let reader = open(path.as_ref())?;
    list_chunks_from(reader)
}

pub fn list_chunks_from<R: Read + Seek>(reader: R) -> WavResult<Option<Vec<ChunkInfo>>> {
    let Some(mut walker) = RiffWalker::open(reader)? else {
        return Ok(None);
    };

    let mut chunks = Vec::new();
    while let Some(header) = walker.next_chunk()? {
        let mut info = ChunkInfo {
            id: header.id,
            offset: header.data_start - chunk::CHUNK_HEADER_SIZE,
            size: header.size,
            list_type: None,
            children: Vec::new(),
        };

        if header.id == FourCc::LIST {
            let payload = walker.read_payload(&header)?;
            if let Some((list_type, sub_chunks)) = payload.split_first_chunk::<4>() {
                let body_offset = header.data_start + 4;
                info.list_type = Some(FourCc(*list_type));
                info.children = SubChunks::new(sub_chunks)
                    .map(|sub_chunk| ChunkInfo {
                        id: sub_chunk.id,
                        offset: body_offset + sub_chunk.offset as u64,
                        size: sub_chunk.size,
                        list_type: None,
                        children: Vec::new(),
                    })
                    .collect();
            }
        }

        chunks.push(info);
    }

    Ok(Some(chunks))
}

fn open(path: &Path) -> WavResult<BufReader<File>> {
    let file = File::open(path).map_err(|source| WavError::OpenError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
