use crate::commands::chunks::ChunksCommand;
use crate::commands::read::{OutputFormat, ReadCommand};
use crate::commands::{Cli, Commands};
use anyhow::{Result, bail};
use clap::Parser;
use std::io::Write;
use wav_markers::ReadOptions;
use wav_markers::table::render::{write_aligned, write_tsv};
use wav_markers::table::{Table, load_meta_with};
use wav_markers::wav::{ChunkInfo, list_chunks};

mod commands;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Read(cmd) => read(cmd)?,
        Commands::Chunks(cmd) => chunks(cmd)?,
    }

    Ok(())
}

fn read(cmd: ReadCommand) -> Result<()> {
    let options = ReadOptions {
        default_sample_rate: cmd.default_sample_rate,
    };

    let mut table = Table::new();
    let result = load_meta_with(&cmd.input, &mut table, &options);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cmd.format {
        OutputFormat::Table => write_aligned(table.rows(), &mut out)?,
        OutputFormat::Tsv => write_tsv(table.rows(), &mut out)?,
        OutputFormat::Json => {
            if let Ok(events) = &result {
                serde_json::to_writer_pretty(&mut out, events)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;

    result?;
    Ok(())
}

fn chunks(cmd: ChunksCommand) -> Result<()> {
    let Some(chunks) = list_chunks(&cmd.input)? else {
        bail!("{} is not a RIFF/WAVE file", cmd.input.display());
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for chunk in &chunks {
        print_chunk(&mut out, chunk, 0)?;
    }

    Ok(())
}

fn print_chunk(out: &mut impl Write, chunk: &ChunkInfo, depth: usize) -> Result<()> {
    let indent = "    ".repeat(depth);
    match chunk.list_type {
        Some(list_type) => writeln!(
            out,
            "{indent}\"{}\" at {} ({} bytes), list type \"{list_type}\"",
            chunk.id, chunk.offset, chunk.size
        )?,
        None => writeln!(
            out,
            "{indent}\"{}\" at {} ({} bytes)",
            chunk.id, chunk.offset, chunk.size
        )?,
    }

    for child in &chunk.children {
        print_chunk(out, child, depth + 1)?;
    }

    Ok(())
}
