use crate::metadata::models::{CuePoint, Label, LabelRange, LoopEnd};
use crate::metadata::ordered::OrderedMap;
use log::trace;
use std::collections::HashMap;

pub mod models;
pub mod ordered;
pub mod resolver;

/// Sample rate assumed when a file carries no `fmt ` chunk.
pub const DEFAULT_SAMPLE_RATE: u32 = 48000;

/// Everything collected from one pass over a WAVE file, before resolution.
#[derive(Debug, Clone)]
pub struct ParsedMetadata {
    pub sample_rate: u32,
    pub cue_points: OrderedMap<u32, u32>,
    pub loop_ends: HashMap<u32, u32>,
    pub labels: OrderedMap<u32, String>,
    pub label_ranges: HashMap<u32, LabelRange>,
}

impl Default for ParsedMetadata {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

impl ParsedMetadata {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            cue_points: OrderedMap::new(),
            loop_ends: HashMap::new(),
            labels: OrderedMap::new(),
            label_ranges: HashMap::new(),
        }
    }

    pub fn add_cue_point(&mut self, cue: CuePoint) {
        trace!("cue {} at sample {}", cue.cue_id, cue.sample_offset);
        self.cue_points.insert(cue.cue_id, cue.sample_offset);
    }

    pub fn add_loop_end(&mut self, loop_end: LoopEnd) {
        trace!("loop {} ends at sample {}", loop_end.loop_id, loop_end.end_sample);
        self.loop_ends.insert(loop_end.loop_id, loop_end.end_sample);
    }

    /// Top-level `labl` chunk: the first one seen for an id is kept.
    pub fn add_standalone_label(&mut self, label: Label) {
        trace!("labl {} = {:?}", label.id, label.text);
        self.labels.insert_if_absent(label.id, label.text);
    }

    /// `labl` inside a `LIST`: replaces any earlier text for the id.
    pub fn add_list_label(&mut self, label: Label) {
        trace!("LIST labl {} = {:?}", label.id, label.text);
        self.labels.insert(label.id, label.text);
    }

    /// `note` inside a `LIST`: only used when the id has no label yet.
    pub fn add_note(&mut self, note: Label) {
        trace!("LIST note {} = {:?}", note.id, note.text);
        self.labels.insert_if_absent(note.id, note.text);
    }

    pub fn add_label_range(&mut self, range: LabelRange) {
        trace!(
            "ltxt {} spans {} samples = {:?}",
            range.id, range.sample_length, range.text
        );
        self.label_ranges.insert(range.id, range);
    }

    /// True when any label, label range or loop was found. Cue points alone do not count.
    pub fn has_annotations(&self) -> bool {
        !self.labels.is_empty() || !self.label_ranges.is_empty() || !self.loop_ends.is_empty()
    }
}
