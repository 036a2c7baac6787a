// src/error.rs
use std::io::Error as IoError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("No table found at {url}")]
    TableNotFound { url: String },

    #[error("Missing expected column: {0}")]
    MissingColumn(String),

    #[error("Season {0} is outside the supported range")]
    YearOutOfRange(u32),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] IoError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(String),
}

pub type Result<T> = std::result::Result<T, Error>;
