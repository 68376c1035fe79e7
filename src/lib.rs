//! Reads cue markers, loop regions and labels embedded in WAV files.

pub mod metadata;
pub mod table;
pub mod wav;

pub use metadata::models::MetadataEvent;
pub use wav::error::{WavError, WavResult};
pub use wav::{ReadOptions, read_wav_meta, read_wav_meta_from, read_wav_meta_with};
