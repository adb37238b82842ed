//! poseidon-fm
//!
//! File helpers for Poseidon plugins: direct operations on the local
//! filesystem, and a blocking client for the remote file-manager plugin API.

pub mod client;
pub mod config;
pub mod error;
pub mod local;

pub use client::FileManagerClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use local::{create_file, delete_file, read_file};

pub use poseidon_fm_protocol::{Operation, DEFAULT_BASE_URL};
