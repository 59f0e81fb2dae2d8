//! Status entities.
//!
//! See <https://docs.joinmastodon.org/entities/Status/>.

use crate::Account;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A status posted by an account.
///
/// The `content` field is HTML. Use the `tootkit-content` crate to turn it
/// into something a client can render.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    /// Status id in the instance database.
    pub id: String,
    /// URI used for federation.
    pub uri: String,
    /// When the status was created.
    pub created_at: DateTime<Utc>,
    /// The account that authored the status.
    pub account: Account,
    /// HTML-encoded status content.
    pub content: String,
    /// Whether the status is marked as sensitive content.
    pub sensitive: bool,
    /// Subject or summary line; content is collapsed below it until expanded.
    pub spoiler_text: String,
    /// The application used to post the status.
    pub application: Option<StatusApplication>,
    /// Users mentioned within the content.
    pub mentions: Vec<StatusMention>,
    /// Hashtags used within the content.
    pub tags: Vec<StatusTag>,
    /// Boost count.
    pub reblogs_count: i32,
    /// Favourite count.
    pub favourites_count: i32,
    /// Reply count.
    pub replies_count: u32,
    /// Link to the HTML representation of the status.
    pub url: Option<String>,
    /// Id of the status being replied to.
    pub in_reply_to_id: Option<String>,
    /// Id of the account that authored the status being replied to.
    pub in_reply_to_account_id: Option<String>,
    /// The status being boosted.
    pub reblog: Option<Box<Status>>,
    /// Primary language of the status.
    pub language: Option<String>,
    /// Plain-text source of the status.
    ///
    /// Returned instead of `content` when the status is deleted, so a client
    /// can redraft without reverse-engineering the original text from HTML.
    pub text: Option<String>,
    /// When the status was last edited.
    pub edited_at: Option<DateTime<Utc>>,
    /// With an authorized user: whether that user favourited the status.
    pub favourited: Option<bool>,
    /// With an authorized user: whether that user boosted the status.
    pub reblogged: Option<bool>,
    /// With an authorized user: whether that user muted the conversation.
    pub muted: Option<bool>,
    /// With an authorized user: whether that user bookmarked the status.
    pub bookmarked: Option<bool>,
    /// With an authorized user: whether that user pinned the status.
    ///
    /// Only present when the status is pinnable.
    pub pinned: Option<bool>,
}

/// The application a status was posted from.
///
/// See <https://docs.joinmastodon.org/entities/Application/>.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize)]
pub struct StatusApplication {
    /// Application name.
    pub name: String,
    /// Website associated with the application.
    pub website: Option<String>,
}

/// A user mentioned in a status.
///
/// See <https://docs.joinmastodon.org/entities/Status/#Mention>.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize)]
pub struct StatusMention {
    /// Account id of the mentioned user.
    pub id: String,
    /// Username of the mentioned user.
    pub username: String,
    /// Location of the mentioned user's profile.
    pub url: String,
    /// Webfinger account URI.
    ///
    /// Equal to `username` for local users, `username@domain` for remote ones.
    pub acct: String,
}

/// A hashtag used in a status.
///
/// See <https://docs.joinmastodon.org/entities/Status/#Tag>.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize)]
pub struct StatusTag {
    /// Hashtag value, without the `#`.
    pub name: String,
    /// Link to the hashtag on the instance.
    pub url: String,
}
