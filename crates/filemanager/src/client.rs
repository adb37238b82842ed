//! Blocking client for the Poseidon file-manager plugin API
//!
//! Every operation is a single JSON `POST` to `<base>/api/plugins/file-manager/<op>`.
//! A `200 OK` is success; any other status surfaces the raw response body
//! as [`Error::Remote`].

use std::io;

use poseidon_fm_protocol::{
    CreateFileRequest, DeleteFileRequest, FilePathRequest, FilePathResponse, Operation,
    DEFAULT_BASE_URL,
};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Client for the file-manager service
///
/// Holds no per-call state; clones share the underlying connection pool and
/// can be used from several threads at once.
#[derive(Debug, Clone)]
pub struct FileManagerClient {
    /// Base URL without trailing slash
    base_url: String,
    http: Client,
}

impl FileManagerClient {
    /// Create a client for the service at `http://localhost:2014`
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client for a service at another host
    ///
    /// If the HTTP client cannot be built, reqwest's default client is used
    /// instead, which carries a 30 second request timeout. Use
    /// [`FileManagerClient::try_with_base_url`] to get the build error.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = unbounded_client().unwrap_or_else(|e| {
            tracing::warn!("HTTP client build failed, requests will time out after 30s: {e}");
            Client::default()
        });
        Self {
            base_url: trim_base_url(&base_url.into()),
            http,
        }
    }

    /// Like [`FileManagerClient::with_base_url`], but returns the build error
    /// instead of falling back to a client with a timeout
    pub fn try_with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: trim_base_url(&base_url.into()),
            http: unbounded_client()?,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_base_url(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create (or overwrite) `filename` in the plugin's namespace
    pub fn create_file(&self, plugin_name: &str, filename: &str, content: &str) -> Result<()> {
        let request = CreateFileRequest::new(plugin_name, filename, content);
        let response = self.post(Operation::Create, plugin_name, filename, &request)?;
        drain(response);
        Ok(())
    }

    /// Delete `filename` from the plugin's namespace
    pub fn delete_file(&self, plugin_name: &str, filename: &str) -> Result<()> {
        let request = DeleteFileRequest::new(plugin_name, filename);
        let response = self.post(Operation::Delete, plugin_name, filename, &request)?;
        drain(response);
        Ok(())
    }

    /// Resolve the path the service stores `filename` under
    pub fn get_file_path(&self, plugin_name: &str, filename: &str) -> Result<String> {
        let request = FilePathRequest::new(plugin_name, filename);
        let response = self.post(Operation::Path, plugin_name, filename, &request)?;
        let body = response.bytes()?;
        let decoded: FilePathResponse = serde_json::from_slice(&body)?;
        Ok(decoded.path)
    }

    fn endpoint_url(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.endpoint())
    }

    /// Send one request; non-200 responses are turned into `Error::Remote`
    fn post<T: Serialize + ?Sized>(
        &self,
        operation: Operation,
        plugin_name: &str,
        filename: &str,
        body: &T,
    ) -> Result<Response> {
        let url = self.endpoint_url(operation);
        tracing::debug!(
            operation = operation.segment(),
            url = %url,
            plugin = plugin_name,
            filename,
            "file-manager request"
        );
        let response = self.http.post(&url).json(body).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            // A body that fails to read mid-stream still reports the status
            let body = response.text().unwrap_or_default();
            return Err(Error::Remote {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

impl Default for FileManagerClient {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client without a request timeout: calls wait for the service
fn unbounded_client() -> reqwest::Result<Client> {
    Client::builder().timeout(None).build()
}

fn trim_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Read and discard an unused success body so the connection can be reused
fn drain(mut response: Response) {
    if let Err(e) = io::copy(&mut response, &mut io::sink()) {
        tracing::trace!("discarding response body: {e}");
    }
}
