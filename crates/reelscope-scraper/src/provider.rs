//! The profile data provider seam.
//!
//! The collector and CLI only see resolved profiles and timeline pages;
//! authentication, endpoints, and pagination mechanics live behind this
//! trait so everything downstream is testable against a fake provider.

use reelscope_core::{PostPage, ProfileHandle};

use crate::error::ProviderError;

/// Yields a profile and its timeline pages, most recent first.
#[allow(async_fn_in_trait)]
pub trait PostProvider {
    /// Resolve a username into a profile handle.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::ProfileNotFound`] — no such profile.
    /// - [`ProviderError::AccessDenied`] — profile exists but the current
    ///   credentials may not read it.
    /// - Any transport or decode failure, propagated without retry.
    async fn resolve_profile(&self, username: &str) -> Result<ProfileHandle, ProviderError>;

    /// Fetch one timeline page. `cursor` of `None` requests the first
    /// (most recent) page; subsequent pages use the previous page's
    /// `end_cursor`.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::resolve_profile`].
    async fn fetch_posts(
        &self,
        profile: &ProfileHandle,
        cursor: Option<&str>,
    ) -> Result<PostPage, ProviderError>;
}
