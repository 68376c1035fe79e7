use binrw::{BinRead, BinWrite};

/// Leading fields of the `fmt ` chunk. Only the sample rate is used downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct FormatPrefix {
    /// Codec id, 1 for PCM.
    pub format_tag: u16,

    /// Number of interleaved channels.
    pub channels: u16,

    /// Samples per second, the unit of every position in the cue and loop chunks.
    pub sample_rate: u32,
}

impl FormatPrefix {
    pub const SIZE: usize = 8;
}

/// One record of the `cue ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct CuePointRecord {
    /// Unique identifier of the cue point, referenced by labels and loops.
    pub id: u32,

    /// Play order position, unused here.
    pub position: u32,

    /// Id of the chunk holding the cue point, `data` for plain PCM files.
    pub data_chunk_id: [u8; 4],

    /// Offset of that chunk, zero for files with a single `data` chunk.
    pub chunk_start: u32,

    /// Offset of the block containing the sample, zero for PCM.
    pub block_start: u32,

    /// Sample offset of the cue point inside the block.
    pub sample_offset: u32,
}

impl CuePointRecord {
    pub const SIZE: usize = 24;
}

/// Fixed part of the `smpl` chunk preceding the loop records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct SamplerHeader {
    pub manufacturer: u32,
    pub product: u32,
    pub sample_period: u32,
    pub midi_unity_note: u32,
    pub midi_pitch_fraction: u32,
    pub smpte_format: u32,
    pub smpte_offset: u32,
    pub sample_loop_count: u32,
    pub sampler_data_size: u32,
}

impl SamplerHeader {
    pub const SIZE: usize = 36;
}

/// One loop record of the `smpl` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct SampleLoopRecord {
    /// Matches the id of a cue point.
    pub id: u32,
    pub loop_type: u32,
    pub start: u32,

    /// Last sample of the loop.
    pub end: u32,
    pub fraction: u32,
    pub play_count: u32,
}

impl SampleLoopRecord {
    pub const SIZE: usize = 24;
}

/// Fixed part of an `ltxt` sub-chunk, followed by the label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct LabelledTextHeader {
    pub cue_id: u32,
    pub sample_length: u32,
    pub purpose: [u8; 4],
    pub country: u16,
    pub language: u16,
    pub dialect: u16,
    pub code_page: u16,
}

impl LabelledTextHeader {
    pub const SIZE: usize = 20;
}
