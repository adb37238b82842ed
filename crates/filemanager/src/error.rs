use std::path::PathBuf;

use poseidon_fm_protocol::Operation;

/// Errors returned by the remote client and configuration loading
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection could not be established or was interrupted
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a status other than 200; `body` is the raw response text
    #[error("{operation} failed: {body}")]
    Remote {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// Path lookup succeeded but the body was not `{"path": "..."}`
    #[error("invalid path response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
