use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Prints the markers and regions of a WAV file, sorted by time
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    long_about = "Prints the markers and regions of a WAV file, sorted by time\n\nMarkers have a length of 0, regions come from smpl loops or ltxt ranges. Files with cue points but no labels, ranges or loops print no rows."
)]
pub struct ReadCommand {
    /// Input WAV file, prints only the header row when unset
    #[arg(value_name = "INPUT", env = "WAV_MARKERS_FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Sample rate used when the file has no fmt chunk
    #[arg(long, value_name = "HZ", default_value_t = 48000)]
    pub default_sample_rate: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned columns
    Table,
    /// Tab separated values
    Tsv,
    /// JSON array of events
    Json,
}
