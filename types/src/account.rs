//! Account entities.
//!
//! See <https://docs.joinmastodon.org/entities/Account/>.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A Mastodon user and their associated profile.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// Account id in the instance database.
    pub id: String,
    /// Username, without the domain part.
    pub username: String,
    /// Webfinger account URI.
    ///
    /// Equal to `username` for local users, `username@domain` for remote ones.
    pub acct: String,
    /// Location of the profile page.
    pub url: String,
    /// Display name of the profile.
    pub display_name: String,
    /// Profile bio or description.
    pub note: String,
    /// Avatar image shown next to statuses and on the profile.
    pub avatar: String,
    /// Static version of the avatar.
    ///
    /// Differs from `avatar` only when the avatar is an animated GIF.
    pub avatar_static: String,
    /// Banner image shown above the profile and in profile cards.
    pub header: String,
    /// Static version of the header.
    pub header_static: String,
    /// Whether the account manually approves follow requests.
    pub locked: bool,
    /// Additional profile metadata as name/value pairs.
    pub fields: Vec<AccountField>,
    /// Whether the account identifies as a bot and may act automatically.
    pub bot: bool,
    /// Whether the account represents a Group actor.
    pub group: bool,
    /// Whether the account opted into discovery features.
    pub discoverable: Option<bool>,
    /// Whether the local user opted out of search engine indexing.
    pub noindex: Option<bool>,
    /// Set when the profile is inactive and its user moved to a new account.
    pub moved: Option<Box<Account>>,
    /// Returned only when the account is suspended.
    pub suspended: Option<bool>,
    /// Returned only when the account is silenced.
    ///
    /// When true, clients should hide the account behind a warning screen.
    pub limited: Option<bool>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the most recent status was posted.
    pub last_status_at: Option<DateTime<Utc>>,
    /// Number of statuses attached to this account.
    pub statuses_count: i32,
    /// Reported follower count.
    pub followers_count: i32,
    /// Reported follow count.
    pub following_count: i32,
}

/// A name/value metadata pair on a profile.
///
/// See <https://docs.joinmastodon.org/entities/Account/#Field>.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize)]
pub struct AccountField {
    /// Key of the pair.
    pub name: String,
    /// Value associated with `name`.
    pub value: String,
    /// When the server verified a URL value for a rel="me" link.
    pub verified_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::Account;

    const ACCOUNT_JSON: &str = r#"{
        "id": "23634",
        "username": "noiob",
        "acct": "noiob@awoo.space",
        "url": "https://awoo.space/@noiob",
        "display_name": "ikea shark fan account",
        "note": "<p>:ms_rainbow_flag:</p>",
        "avatar": "https://files.mastodon.social/accounts/avatars/000/023/634/original/shark.png",
        "avatar_static": "https://files.mastodon.social/accounts/avatars/000/023/634/static/shark.png",
        "header": "https://files.mastodon.social/accounts/headers/000/023/634/original/header.png",
        "header_static": "https://files.mastodon.social/accounts/headers/000/023/634/static/header.png",
        "locked": false,
        "fields": [
            {
                "name": "Pronouns",
                "value": "they/them",
                "verified_at": null
            },
            {
                "name": "Website",
                "value": "https://shark.house",
                "verified_at": "2019-11-10T10:31:10.744Z"
            }
        ],
        "bot": false,
        "group": false,
        "discoverable": true,
        "created_at": "2017-02-08T02:00:53.274Z",
        "last_status_at": "2019-11-30T20:02:00.000Z",
        "statuses_count": 28468,
        "followers_count": 547,
        "following_count": 404
    }"#;

    #[test]
    fn deserializes_remote_account() {
        let account: Account = serde_json::from_str(ACCOUNT_JSON).unwrap();
        assert_eq!(account.acct, "noiob@awoo.space");
        assert_eq!(account.fields.len(), 2);
        assert!(account.fields[0].verified_at.is_none());
        assert!(account.fields[1].verified_at.is_some());
        assert_eq!(account.discoverable, Some(true));
        // Absent optional fields deserialize as None
        assert!(account.noindex.is_none());
        assert!(account.moved.is_none());
        assert!(account.suspended.is_none());
    }

    #[test]
    fn timestamps_parse_with_subsecond_precision() {
        let account: Account = serde_json::from_str(ACCOUNT_JSON).unwrap();
        assert_eq!(account.created_at.timestamp(), 1_486_519_253);
    }
}
