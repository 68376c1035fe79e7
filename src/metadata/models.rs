use serde::Serialize;

/// A cue point as stored in the `cue ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuePoint {
    pub cue_id: u32,
    pub sample_offset: u32,
}

/// End sample of a `smpl` loop, keyed by the cue id it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopEnd {
    pub loop_id: u32,
    pub end_sample: u32,
}

/// Text attached to a cue id by a `labl` or `note` chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub id: u32,
    pub text: String,
}

/// A labelled sample range from an `ltxt` sub-chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRange {
    pub id: u32,
    pub sample_length: u32,
    pub text: String,
}

/// A resolved marker or region. Times are in seconds.
///
/// Markers have `end == position` and a zero `length`, regions a positive one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataEvent {
    /// 1-based position in the time-sorted output.
    pub index: usize,
    pub cue_id: u32,
    pub position: f64,
    pub end: f64,
    pub length: f64,
    pub label: String,
}

impl MetadataEvent {
    pub fn marker(cue_id: u32, position: f64, label: impl Into<String>) -> Self {
        Self {
            index: 0,
            cue_id,
            position,
            end: position,
            length: 0.0,
            label: label.into(),
        }
    }

    pub fn region(cue_id: u32, position: f64, end: f64, label: impl Into<String>) -> Self {
        Self {
            index: 0,
            cue_id,
            position,
            end,
            length: end - position,
            label: label.into(),
        }
    }

    pub fn is_marker(&self) -> bool {
        self.length == 0.0
    }
}
