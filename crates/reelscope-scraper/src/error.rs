use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("profile @{username} does not exist")]
    ProfileNotFound { username: String },

    #[error(
        "profile @{username} is not accessible with the current credentials (HTTP {status}); \
         re-run with --login and a session that follows the profile"
    )]
    AccessDenied { username: String, status: u16 },

    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        source: serde_json::Error,
    },

    #[error("no saved session '{name}' at {path}; place the session token there first")]
    SessionMissing { name: String, path: PathBuf },

    #[error("failed to read session file {path}: {source}")]
    SessionRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("timeline for @{username} exceeded {max_pages} pages before reaching the target")]
    PaginationLimit { username: String, max_pages: usize },
}
