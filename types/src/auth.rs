//! Application registration and OAuth entities.
//!
//! See <https://docs.joinmastodon.org/entities/Application/> and
//! <https://docs.joinmastodon.org/entities/Token/>.

use serde::Deserialize;

/// An application registered against the REST API.
///
/// Returned by the app registration endpoint. The client id and secret are
/// the credentials used to obtain OAuth tokens.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredApp {
    /// Application name.
    pub name: String,
    /// Website associated with the application.
    pub website: Option<String>,
    /// Push streaming server key.
    pub vapid_key: String,
    /// Client id, used when obtaining OAuth tokens.
    pub client_id: String,
    /// Client secret, used when obtaining OAuth tokens.
    pub client_secret: String,
}

/// An OAuth token used for authenticating with the API.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    /// The token itself, sent as a bearer credential.
    pub access_token: String,
    /// OAuth token type. Mastodon issues `Bearer` tokens.
    pub token_type: Option<String>,
    /// Space-separated OAuth scopes granted by the token.
    pub scope: String,
    /// When the token was generated, as a unix timestamp.
    pub created_at: i64,
}
