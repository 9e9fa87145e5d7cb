//! Saved session token loading.
//!
//! A session is one opaque token per file, `{dir}/{name}.session`,
//! holding the `sessionid` cookie value. How the token gets there is a
//! concern of whatever saved it; this module only reads.

use std::path::Path;

use crate::error::ProviderError;

/// Load the saved session token for `name` from `dir`.
///
/// Surrounding whitespace (trailing newline from an editor) is ignored.
///
/// # Errors
///
/// - [`ProviderError::SessionMissing`] — no file, or the file is empty.
/// - [`ProviderError::SessionRead`] — the file exists but cannot be read.
pub fn load_session_token(dir: &Path, name: &str) -> Result<String, ProviderError> {
    let path = dir.join(format!("{name}.session"));
    if !path.exists() {
        return Err(ProviderError::SessionMissing {
            name: name.to_owned(),
            path,
        });
    }
    let token = std::fs::read_to_string(&path).map_err(|source| ProviderError::SessionRead {
        path: path.clone(),
        source,
    })?;
    let token = token.trim();
    if token.is_empty() {
        return Err(ProviderError::SessionMissing {
            name: name.to_owned(),
            path,
        });
    }
    tracing::debug!(name, path = %path.display(), "loaded saved session");
    Ok(token.to_owned())
}
