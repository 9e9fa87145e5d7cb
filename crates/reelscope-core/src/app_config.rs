use std::path::PathBuf;

/// Runtime knobs for the HTTP provider and session handling.
///
/// Everything has a working default; env vars override individual fields.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Posts requested per timeline page.
    pub page_size: u32,
    /// Directory holding saved session token files.
    pub session_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            user_agent: concat!(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
                "AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36"
            )
            .to_owned(),
            page_size: 50,
            session_dir: PathBuf::from(".reelscope/sessions"),
        }
    }
}

impl AppConfig {
    /// Build a config from defaults plus optional env overrides.
    ///
    /// Unset or unparseable numeric overrides fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(v) = std::env::var("REELSCOPE_TIMEOUT_SECS") {
            if let Ok(secs) = v.parse() {
                config.request_timeout_secs = secs;
            }
        }
        if let Ok(v) = std::env::var("REELSCOPE_USER_AGENT") {
            if !v.is_empty() {
                config.user_agent = v;
            }
        }
        if let Ok(v) = std::env::var("REELSCOPE_PAGE_SIZE") {
            if let Ok(size) = v.parse() {
                config.page_size = size;
            }
        }
        if let Ok(v) = std::env::var("REELSCOPE_SESSION_DIR") {
            if !v.is_empty() {
                config.session_dir = PathBuf::from(v);
            }
        }
        config
    }
}
