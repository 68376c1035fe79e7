use crate::commands::chunks::ChunksCommand;
use crate::commands::read::ReadCommand;
use clap::{Parser, Subcommand};

pub mod chunks;
pub mod read;

/// CLI for reading markers and regions stored in WAV files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Read(ReadCommand),
    Chunks(ChunksCommand),
}
