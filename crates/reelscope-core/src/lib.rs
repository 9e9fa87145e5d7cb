pub mod app_config;
pub mod caption;
pub mod format;
pub mod types;

pub use app_config::AppConfig;
pub use types::{PostPage, ProfileHandle, RawPost, VideoRecord};
