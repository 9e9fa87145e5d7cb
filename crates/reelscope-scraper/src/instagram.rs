//! Instagram-backed [`PostProvider`] over the web app's JSON endpoints.
//!
//! Profile resolution goes through `api/v1/users/web_profile_info`; the
//! timeline is paged through the GraphQL query endpoint with the public
//! user-timeline query hash. An optional saved session token is sent as
//! the `sessionid` cookie for profiles that rate-limit anonymous access.
//!
//! No retry or backoff: transient failures propagate to the caller.

use std::time::Duration;

use chrono::DateTime;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;

use reelscope_core::{AppConfig, PostPage, ProfileHandle, RawPost};

use crate::error::ProviderError;
use crate::provider::PostProvider;

const DEFAULT_BASE_URL: &str = "https://www.instagram.com";

/// Public app id the Instagram web client sends with every API request.
const IG_APP_ID: &str = "936619743392459";

/// Query hash for the user timeline GraphQL query.
const TIMELINE_QUERY_HASH: &str = "e769aa130647d2354c40ea6a439bfc08";

pub struct InstagramProvider {
    client: Client,
    base_url: String,
    page_size: u32,
    /// `sessionid` cookie value, when a saved session was loaded.
    session_token: Option<String>,
}

impl InstagramProvider {
    /// Build a provider from config, optionally carrying a session token.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &AppConfig, session_token: Option<String>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_owned(),
            page_size: config.page_size,
            session_token,
        })
    }

    /// Point the provider at a different origin. Used by tests to run
    /// against a local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url).header("X-IG-App-ID", IG_APP_ID);
        if let Some(token) = &self.session_token {
            request = request.header(header::COOKIE, format!("sessionid={token}"));
        }
        request
    }

    /// Shared status triage for both endpoints.
    fn check_status(
        status: StatusCode,
        url: &str,
        username: &str,
    ) -> Result<(), ProviderError> {
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::ProfileNotFound {
                username: username.to_owned(),
            });
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ProviderError::AccessDenied {
                username: username.to_owned(),
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(ProviderError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(())
    }
}

impl PostProvider for InstagramProvider {
    async fn resolve_profile(&self, username: &str) -> Result<ProfileHandle, ProviderError> {
        let encoded = utf8_percent_encode(username, NON_ALPHANUMERIC);
        let url = format!(
            "{}/api/v1/users/web_profile_info/?username={encoded}",
            self.base_url
        );

        let response = self.get(&url).send().await?;
        Self::check_status(response.status(), &url, username)?;

        let body = response.text().await?;
        let parsed: WebProfileEnvelope =
            serde_json::from_str(&body).map_err(|source| ProviderError::Decode {
                context: format!("profile response for @{username}"),
                source,
            })?;

        // The endpoint answers 200 with a null user for some unknown
        // usernames instead of a 404.
        let Some(user) = parsed.data.user else {
            return Err(ProviderError::ProfileNotFound {
                username: username.to_owned(),
            });
        };

        tracing::debug!(
            username,
            user_id = %user.id,
            followers = user.edge_followed_by.count,
            "resolved profile"
        );

        Ok(ProfileHandle {
            user_id: user.id,
            username: username.to_owned(),
            full_name: user.full_name,
            followers: user.edge_followed_by.count,
            followees: user.edge_follow.count,
            media_count: user.edge_owner_to_timeline_media.count,
            biography: user.biography,
            external_url: user.external_url,
            is_private: user.is_private,
        })
    }

    async fn fetch_posts(
        &self,
        profile: &ProfileHandle,
        cursor: Option<&str>,
    ) -> Result<PostPage, ProviderError> {
        let variables = serde_json::json!({
            "id": profile.user_id,
            "first": self.page_size,
            "after": cursor,
        })
        .to_string();
        let encoded = utf8_percent_encode(&variables, NON_ALPHANUMERIC);
        let url = format!(
            "{}/graphql/query/?query_hash={TIMELINE_QUERY_HASH}&variables={encoded}",
            self.base_url
        );

        let response = self.get(&url).send().await?;
        Self::check_status(response.status(), &url, &profile.username)?;

        let body = response.text().await?;
        let parsed: TimelineEnvelope =
            serde_json::from_str(&body).map_err(|source| ProviderError::Decode {
                context: format!("timeline page for @{}", profile.username),
                source,
            })?;

        let Some(user) = parsed.data.user else {
            return Err(ProviderError::ProfileNotFound {
                username: profile.username.clone(),
            });
        };

        let media = user.edge_owner_to_timeline_media;
        let end_cursor = if media.page_info.has_next_page {
            media.page_info.end_cursor
        } else {
            None
        };
        let posts = media.edges.into_iter().map(|e| e.node.into_raw()).collect();

        Ok(PostPage { posts, end_cursor })
    }
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct WebProfileEnvelope {
    data: WebProfileData,
}

#[derive(Deserialize)]
struct WebProfileData {
    user: Option<WebProfileUser>,
}

#[derive(Deserialize)]
struct WebProfileUser {
    id: String,
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    biography: String,
    #[serde(default)]
    external_url: Option<String>,
    #[serde(default)]
    is_private: bool,
    #[serde(default)]
    edge_followed_by: EdgeCount,
    #[serde(default)]
    edge_follow: EdgeCount,
    #[serde(default)]
    edge_owner_to_timeline_media: EdgeCount,
}

#[derive(Deserialize, Default)]
struct EdgeCount {
    #[serde(default)]
    count: u64,
}

#[derive(Deserialize)]
struct TimelineEnvelope {
    data: TimelineData,
}

#[derive(Deserialize)]
struct TimelineData {
    user: Option<TimelineUser>,
}

#[derive(Deserialize)]
struct TimelineUser {
    edge_owner_to_timeline_media: TimelineConnection,
}

#[derive(Deserialize)]
struct TimelineConnection {
    page_info: PageInfo,
    #[serde(default)]
    edges: Vec<TimelineEdge>,
}

#[derive(Deserialize)]
struct PageInfo {
    #[serde(default)]
    has_next_page: bool,
    #[serde(default)]
    end_cursor: Option<String>,
}

#[derive(Deserialize)]
struct TimelineEdge {
    node: TimelineNode,
}

#[derive(Deserialize)]
struct TimelineNode {
    #[serde(rename = "__typename", default)]
    typename: String,
    shortcode: String,
    #[serde(default)]
    taken_at_timestamp: i64,
    #[serde(default)]
    is_video: bool,
    #[serde(default)]
    video_view_count: Option<u64>,
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    video_duration: Option<f64>,
    #[serde(default)]
    display_url: Option<String>,
    #[serde(default)]
    edge_media_to_caption: CaptionEdges,
    #[serde(default)]
    edge_media_preview_like: EdgeCount,
    #[serde(default)]
    edge_media_to_comment: EdgeCount,
    #[serde(default)]
    edge_media_to_tagged_user: TaggedEdges,
    #[serde(default)]
    location: Option<LocationNode>,
    #[serde(default)]
    is_paid_partnership: bool,
}

#[derive(Deserialize, Default)]
struct CaptionEdges {
    #[serde(default)]
    edges: Vec<CaptionEdge>,
}

#[derive(Deserialize)]
struct CaptionEdge {
    node: CaptionNode,
}

#[derive(Deserialize)]
struct CaptionNode {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize, Default)]
struct TaggedEdges {
    #[serde(default)]
    edges: Vec<TaggedEdge>,
}

#[derive(Deserialize)]
struct TaggedEdge {
    node: TaggedNode,
}

#[derive(Deserialize)]
struct TaggedNode {
    user: TaggedUser,
}

#[derive(Deserialize)]
struct TaggedUser {
    username: String,
}

#[derive(Deserialize)]
struct LocationNode {
    #[serde(default)]
    name: String,
}

impl TimelineNode {
    fn into_raw(self) -> RawPost {
        let caption = self
            .edge_media_to_caption
            .edges
            .into_iter()
            .next()
            .map(|e| e.node.text);
        RawPost {
            shortcode: self.shortcode,
            taken_at: DateTime::from_timestamp(self.taken_at_timestamp, 0)
                .unwrap_or(DateTime::UNIX_EPOCH),
            caption,
            likes: self.edge_media_preview_like.count,
            comments: self.edge_media_to_comment.count,
            is_video: self.is_video,
            video_view_count: self.video_view_count,
            video_url: self.video_url,
            video_duration: self.video_duration,
            typename: self.typename,
            is_sponsored: self.is_paid_partnership,
            tagged_users: self
                .edge_media_to_tagged_user
                .edges
                .into_iter()
                .map(|e| e.node.user.username)
                .collect(),
            location: self.location.map(|l| l.name).filter(|n| !n.is_empty()),
            thumbnail_url: self.display_url,
        }
    }
}
