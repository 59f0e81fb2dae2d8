//! Request bodies for application registration and OAuth token grants.
//!
//! Both bodies use builder-style constructors: the required fields go
//! through the constructor, optional ones through `with_*` methods.
//! `None` fields are omitted from the serialized payload.

use serde::Serialize;

/// Body for registering an application.
///
/// See <https://docs.joinmastodon.org/methods/apps/#create>.
#[derive(Debug, Clone, Serialize)]
pub struct AppRegistration {
    client_name: String,
    redirect_uris: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scopes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    website: Option<String>,
}

impl AppRegistration {
    /// A registration for `client_name`, redirecting to `redirect_uris`.
    ///
    /// Use `urn:ietf:wg:oauth:2.0:oob` as the redirect URI for out-of-band
    /// authorization.
    #[must_use]
    pub fn new(client_name: impl Into<String>, redirect_uris: impl Into<String>) -> Self {
        AppRegistration {
            client_name: client_name.into(),
            redirect_uris: redirect_uris.into(),
            scopes: None,
            website: None,
        }
    }

    /// Request specific space-separated OAuth scopes.
    #[must_use]
    pub fn with_scopes(mut self, scopes: impl Into<String>) -> Self {
        self.scopes = Some(scopes.into());
        self
    }

    /// Attach the application website.
    #[must_use]
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }
}

/// Body for obtaining an OAuth token.
///
/// See <https://docs.joinmastodon.org/methods/oauth/#token>.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    grant_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
}

impl TokenRequest {
    /// Authorization code grant, the flow used by interactive clients.
    ///
    /// `redirect_uri` must match the one used during app registration.
    #[must_use]
    pub fn authorization_code(
        code: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        TokenRequest {
            grant_type: "authorization_code".to_string(),
            code: Some(code.into()),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scope: None,
        }
    }

    /// Client credentials grant, for tokens acting as the application itself.
    #[must_use]
    pub fn client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        TokenRequest {
            grant_type: "client_credentials".to_string(),
            code: None,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scope: None,
        }
    }

    /// Request a narrower scope than the one granted at registration.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}
