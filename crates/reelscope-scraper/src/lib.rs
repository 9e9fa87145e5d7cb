pub mod collect;
pub mod error;
pub mod instagram;
pub mod provider;
pub mod session;

pub use collect::{collect_videos, CollectOutcome};
pub use error::ProviderError;
pub use instagram::InstagramProvider;
pub use provider::PostProvider;
pub use session::load_session_token;
