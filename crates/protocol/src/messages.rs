use serde::{Deserialize, Serialize};

/// Body of `POST /api/plugins/file-manager/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest {
    pub plugin_name: String,
    pub filename: String,
    pub content: String,
}

/// Body of `POST /api/plugins/file-manager/delete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFileRequest {
    pub plugin_name: String,
    pub filename: String,
}

/// Body of `POST /api/plugins/file-manager/path`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePathRequest {
    pub plugin_name: String,
    pub filename: String,
}

/// Successful response of the path lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePathResponse {
    pub path: String,
}

impl CreateFileRequest {
    pub fn new(
        plugin_name: impl Into<String>,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            filename: filename.into(),
            content: content.into(),
        }
    }
}

impl DeleteFileRequest {
    pub fn new(plugin_name: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            filename: filename.into(),
        }
    }
}

impl FilePathRequest {
    pub fn new(plugin_name: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            filename: filename.into(),
        }
    }
}
