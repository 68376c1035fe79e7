use crate::metadata::models::MetadataEvent;
use crate::wav::error::WavResult;
use crate::wav::{ReadOptions, read_wav_meta_with};
use log::error;
use std::path::{Path, PathBuf};

pub mod render;

/// Column names of the header row.
pub const HEADER: [&str; 6] = ["index", "cue_id", "position", "end", "length", "label"];

/// Supplies the path of the file to load. An empty or blank path means "unset".
pub trait PathProvider {
    fn path(&self) -> String;
}

impl PathProvider for str {
    fn path(&self) -> String {
        self.to_string()
    }
}

impl PathProvider for String {
    fn path(&self) -> String {
        self.clone()
    }
}

impl PathProvider for Path {
    fn path(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}

impl PathProvider for PathBuf {
    fn path(&self) -> String {
        self.as_path().path()
    }
}

impl<T: PathProvider> PathProvider for Option<T> {
    fn path(&self) -> String {
        self.as_ref().map(PathProvider::path).unwrap_or_default()
    }
}

/// Receives the rows of the result table.
pub trait TableSink {
    fn clear(&mut self);
    fn append_row(&mut self, row: Vec<String>);
}

/// In-memory table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

impl TableSink for Table {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

pub fn header_row() -> Vec<String> {
    HEADER.iter().map(|column| column.to_string()).collect()
}

/// Renders an event with times in seconds to 3 decimals.
pub fn event_row(event: &MetadataEvent) -> Vec<String> {
    vec![
        event.index.to_string(),
        event.cue_id.to_string(),
        format!("{:.3}", event.position),
        format!("{:.3}", event.end),
        format!("{:.3}", event.length),
        event.label.clone(),
    ]
}

/// Loads the file named by `provider` and replaces the contents of `sink`.
///
/// On success the sink holds the header and one row per event. A blank path leaves only the
/// header. An I/O failure leaves a single `["error", message]` row and is also returned.
pub fn load_meta(
    provider: &(impl PathProvider + ?Sized),
    sink: &mut impl TableSink,
) -> WavResult<Vec<MetadataEvent>> {
    load_meta_with(provider, sink, &ReadOptions::default())
}

pub fn load_meta_with(
    provider: &(impl PathProvider + ?Sized),
    sink: &mut impl TableSink,
    options: &ReadOptions,
) -> WavResult<Vec<MetadataEvent>> {
    let path = provider.path();
    let path = path.trim();

    if path.is_empty() {
        sink.clear();
        sink.append_row(header_row());
        return Ok(Vec::new());
    }

    match read_wav_meta_with(path, options) {
        Ok(events) => {
            sink.clear();
            sink.append_row(header_row());
            for event in &events {
                sink.append_row(event_row(event));
            }
            Ok(events)
        }
        Err(e) => {
            error!("Failed to read WAV metadata: {e}");
            sink.clear();
            sink.append_row(vec!["error".to_string(), e.to_string()]);
            Err(e)
        }
    }
}
