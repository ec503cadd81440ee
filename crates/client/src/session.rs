use std::collections::HashMap;

use api_types::auth::{ErrorDetail, RegisterRequest, TokenPair, TokenRequest};
use api_types::user::User;
use reqwest::Url;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::{ClientError, Result};
use crate::token_store::TokenStore;

/// Authentication lifecycle state.
///
/// `Resolving` means a stored token exists but the identity check has not
/// completed yet; callers should treat it as "logged in until proven
/// otherwise" for rendering purposes only.
#[derive(Debug)]
pub enum Session {
    Unauthenticated,
    Resolving,
    Authenticated(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Owns the token pair and the resolved user identity.
///
/// The token pair in durable storage is written only by [`login`],
/// [`logout`] and the failure path of [`resolve`]; [`auth_headers`] reads it
/// without ever validating. There is no token refresh: once the access token
/// expires the next identity check clears the session.
///
/// [`login`]: SessionStore::login
/// [`logout`]: SessionStore::logout
/// [`resolve`]: SessionStore::resolve
/// [`auth_headers`]: SessionStore::auth_headers
#[derive(Debug)]
pub struct SessionStore {
    base_url: Url,
    http: reqwest::Client,
    tokens: TokenStore,
    session: Session,
}

impl SessionStore {
    /// Creates a store over `base_url` (e.g. `http://127.0.0.1:8000/api/`).
    ///
    /// Starts in `Resolving` when an access token is already stored, so the
    /// caller knows to run [`resolve`](SessionStore::resolve) before trusting
    /// the state.
    pub fn new(base_url: &str, tokens: TokenStore) -> Result<Self> {
        let base_url = crate::api::parse_base_url(base_url)?;
        let session = if tokens.access_token().is_some() {
            Session::Resolving
        } else {
            Session::Unauthenticated
        };

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
            tokens,
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    /// Header material for authenticated requests.
    ///
    /// Returns a `Bearer` authorization entry when an access token is stored,
    /// otherwise an empty map. Never blocks and never validates the token;
    /// validation happens only through [`resolve`](SessionStore::resolve).
    pub fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.tokens.access_token()
            && let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}"))
        {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    /// Exchanges credentials for a token pair and resolves the identity.
    ///
    /// On a non-2xx answer the server-reported detail is surfaced as
    /// [`ClientError::Credentials`] and neither state nor storage changes.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let endpoint = self.join("token/")?;
        let payload = TokenRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let res = self.http.post(endpoint).json(&payload).send().await?;
        if !res.status().is_success() {
            let detail = res
                .json::<ErrorDetail>()
                .await
                .map(|body| body.detail)
                .unwrap_or_else(|_| "login failed".to_string());
            return Err(ClientError::Credentials(detail));
        }

        let pair: TokenPair = res.json().await?;
        self.tokens.set_tokens(&pair.access, &pair.refresh)?;
        self.resolve_with_token(pair.access).await
    }

    /// Creates a new user account.
    ///
    /// Validation failures come back as a field-keyed message map
    /// ([`ClientError::Validation`]) so forms can annotate individual fields.
    /// Does not touch the session.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User> {
        let endpoint = self.join("register/")?;

        let res = self.http.post(endpoint).json(request).send().await?;
        let status = res.status();
        if status.is_success() {
            return Ok(res.json::<User>().await?);
        }

        let body = res.text().await.unwrap_or_default();
        if let Ok(map) = serde_json::from_str::<HashMap<String, Vec<String>>>(&body) {
            return Err(ClientError::Validation(map));
        }
        Err(ClientError::Server(format!(
            "registration failed with status {status}"
        )))
    }

    /// Validates the stored access token against the identity endpoint.
    ///
    /// Success transitions to `Authenticated`. A rejected token clears both
    /// stored tokens and transitions to `Unauthenticated`; transport failures
    /// are logged and fail safe to the same logged-out state.
    pub async fn resolve(&mut self) -> Result<()> {
        let Some(token) = self.tokens.access_token().map(str::to_owned) else {
            self.session = Session::Unauthenticated;
            return Ok(());
        };

        self.session = Session::Resolving;
        self.resolve_with_token(token).await
    }

    async fn resolve_with_token(&mut self, token: String) -> Result<()> {
        let endpoint = self.join("user/")?;

        match self.http.get(endpoint).bearer_auth(&token).send().await {
            Ok(res) if res.status().is_success() => match res.json::<User>().await {
                Ok(user) => {
                    self.session = Session::Authenticated(user);
                    Ok(())
                }
                Err(err) => {
                    tracing::warn!("malformed identity response: {err}");
                    self.clear_session()
                }
            },
            Ok(res) => {
                tracing::debug!(status = %res.status(), "access token rejected");
                self.clear_session()
            }
            Err(err) => {
                tracing::warn!("identity check failed: {err}");
                self.clear_session()
            }
        }
    }

    /// Drops the session locally. Synchronous, no network call.
    pub fn logout(&mut self) -> Result<()> {
        self.clear_session()
    }

    fn clear_session(&mut self) -> Result<()> {
        self.tokens.clear()?;
        self.session = Session::Unauthenticated;
        Ok(())
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::BaseUrl(err.to_string()))
    }
}
