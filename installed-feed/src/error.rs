use depot_metadata::MetadataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("continuation token was not minted by this feed")]
    InvalidContinuation,

    #[error("invalid feed configuration: {0}")]
    InvalidConfig(String),

    #[error("search cancelled")]
    Cancelled,

    #[error("metadata error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("metadata resolution task failed: {0}")]
    Resolve(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, FeedError>;
