use clap::Parser;
use std::path::PathBuf;

/// Lists the chunk layout of a WAV file
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct ChunksCommand {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}
