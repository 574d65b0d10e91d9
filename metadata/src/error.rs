use crate::identity::PackageIdentity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("no metadata found for {0}")]
    NotFound(PackageIdentity),

    #[error("metadata source error: {0}")]
    Source(String),

    #[error("metadata resolution cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, MetadataError>;
