use derive_more::IsVariant;
use thiserror::Error;

#[derive(Error, Debug, IsVariant)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("no existing export files found to derive the next id from")]
    NoExistingOutputs,

    #[error("malformed output filename: {0}")]
    MalformedOutputFilename(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
