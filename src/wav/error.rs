use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WavError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    #[error("Could not open {}: {source}", .path.display())]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type WavResult<T> = Result<T, WavError>;
