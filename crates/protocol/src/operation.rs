/// Prefix shared by every file-manager endpoint
pub const API_PREFIX: &str = "/api/plugins/file-manager";

/// Remote file-manager operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create, // create
    Delete, // delete
    Path,   // path
}

impl Operation {
    /// Last path segment of the endpoint
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Path => "path",
        }
    }

    /// Endpoint path relative to the service base URL
    pub fn endpoint(self) -> String {
        format!("{API_PREFIX}/{}", self.segment())
    }

    /// Parse an endpoint's last path segment
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "create" => Some(Self::Create),
            "delete" => Some(Self::Delete),
            "path" => Some(Self::Path),
            _ => None,
        }
    }
}

/// Human-readable label, used as the prefix of remote error messages
impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Create => "create file",
            Self::Delete => "delete file",
            Self::Path => "get path",
        };
        write!(f, "{s}")
    }
}
