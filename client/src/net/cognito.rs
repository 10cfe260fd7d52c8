//! Cognito user-pool identity adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements `sampleapp_core::IdentityProvider` against the Cognito Identity
//! Provider JSON API (`POST https://cognito-idp.<region>.amazonaws.com/` with
//! an `X-Amz-Target` operation header). Tokens are persisted under the same
//! `localStorage` keys `amazon-cognito-identity-js` uses, so an existing
//! browser session survives a switch between the two clients.
//!
//! DESIGN
//! ======
//! Request bodies, response parsing, token claims and the restore decision are
//! pure functions tested natively. Only [`CognitoIdentity::call`] performs
//! I/O, and only in the browser (`hydrate`); on the server it reports the
//! provider as unavailable.
//!
//! Restore performs at most one `REFRESH_TOKEN_AUTH` exchange when the stored
//! ID token has expired. Nothing refreshes tokens on a timer.

#[cfg(test)]
#[path = "cognito_test.rs"]
mod cognito_test;

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sampleapp_core::{IdentityError, IdentityProvider, Session};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::ClientConfig;
use crate::util::storage::TokenStorage;

const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService.";
const KEY_PREFIX: &str = "CognitoIdentityServiceProvider";

pub(crate) const AMZ_JSON: &str = "application/x-amz-json-1.1";

// =============================================================================
// TOKENS & CLAIMS
// =============================================================================

/// Tokens returned by a successful `InitiateAuth`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tokens {
    pub id_token: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// The ID token claims this app reads.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct IdClaims {
    pub exp: i64,
    #[serde(default)]
    pub email: Option<String>,
}

/// Decode the payload segment of a JWT without verifying its signature.
/// The API server is responsible for verification.
///
/// # Errors
///
/// Returns [`IdentityError::Malformed`] if the token is not a three-part JWT
/// with a base64url JSON payload.
pub fn decode_claims(jwt: &str) -> Result<IdClaims, IdentityError> {
    let mut parts = jwt.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(IdentityError::Malformed("id token is not a JWT".to_owned())),
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| IdentityError::Malformed(format!("id token payload: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| IdentityError::Malformed(format!("id token claims: {e}")))
}

/// Build a session from fresh tokens. The email claim wins over `username`.
///
/// # Errors
///
/// Returns [`IdentityError::Malformed`] if the ID token cannot be decoded or
/// is empty.
pub fn session_from_tokens(tokens: &Tokens, username: &str) -> Result<Session, IdentityError> {
    let claims = decode_claims(&tokens.id_token)?;
    let email = claims.email.unwrap_or_else(|| username.to_owned());
    Session::new(tokens.id_token.clone(), email)
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

#[must_use]
pub fn endpoint(region: &str) -> String {
    format!("https://cognito-idp.{region}.amazonaws.com/")
}

#[must_use]
pub fn target(operation: &str) -> String {
    format!("{TARGET_PREFIX}{operation}")
}

#[must_use]
pub fn sign_up_body(client_id: &str, email: &str, password: &str) -> Value {
    json!({
        "ClientId": client_id,
        "Username": email,
        "Password": password,
        "UserAttributes": [],
    })
}

#[must_use]
pub fn confirm_sign_up_body(client_id: &str, email: &str, code: &str) -> Value {
    json!({
        "ClientId": client_id,
        "Username": email,
        "ConfirmationCode": code,
        "ForceAliasCreation": true,
    })
}

#[must_use]
pub fn password_auth_body(client_id: &str, email: &str, password: &str) -> Value {
    json!({
        "AuthFlow": "USER_PASSWORD_AUTH",
        "ClientId": client_id,
        "AuthParameters": { "USERNAME": email, "PASSWORD": password },
    })
}

#[must_use]
pub fn refresh_auth_body(client_id: &str, refresh_token: &str) -> Value {
    json!({
        "AuthFlow": "REFRESH_TOKEN_AUTH",
        "ClientId": client_id,
        "AuthParameters": { "REFRESH_TOKEN": refresh_token },
    })
}

#[must_use]
pub fn revoke_token_body(client_id: &str, refresh_token: &str) -> Value {
    json!({ "ClientId": client_id, "Token": refresh_token })
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthResponse {
    #[serde(default)]
    authentication_result: Option<AuthenticationResult>,
    #[serde(default)]
    challenge_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticationResult {
    id_token: String,
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type", default)]
    kind: Option<String>,
    #[serde(alias = "Message", default)]
    message: Option<String>,
}

/// Parse an `InitiateAuth` success body.
///
/// # Errors
///
/// A challenge (MFA, new password, ...) is reported as
/// [`IdentityError::Rejected`]; a body without tokens as
/// [`IdentityError::Malformed`].
pub fn parse_auth_result(body: &str) -> Result<Tokens, IdentityError> {
    let parsed: InitiateAuthResponse =
        serde_json::from_str(body).map_err(|e| IdentityError::Malformed(e.to_string()))?;
    if let Some(challenge) = parsed.challenge_name {
        return Err(IdentityError::Rejected {
            kind: "ChallengeRequired".to_owned(),
            message: format!("Sign-in requires an unsupported challenge: {challenge}"),
        });
    }
    let result = parsed
        .authentication_result
        .ok_or_else(|| IdentityError::Malformed("missing AuthenticationResult".to_owned()))?;
    Ok(Tokens {
        id_token: result.id_token,
        access_token: result.access_token,
        refresh_token: result.refresh_token,
    })
}

/// Map a non-2xx Cognito response to an [`IdentityError`].
#[must_use]
pub fn parse_error(status: u16, body: &str) -> IdentityError {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return IdentityError::Malformed(format!("status {status}: {body}"));
    };
    // `__type` is sometimes namespaced: `com.amazonaws...#NotAuthorizedException`.
    let kind = parsed
        .kind
        .as_deref()
        .map(|raw| raw.rsplit('#').next().unwrap_or(raw).to_owned())
        .unwrap_or_else(|| format!("Http{status}"));
    let message = parsed.message.unwrap_or_else(|| kind.clone());
    IdentityError::Rejected { kind, message }
}

// =============================================================================
// PERSISTED SESSION
// =============================================================================

/// `localStorage` key layout shared with `amazon-cognito-identity-js`.
#[derive(Clone, Debug)]
pub struct StorageKeys {
    client_id: String,
}

impl StorageKeys {
    #[must_use]
    pub fn new(client_id: &str) -> Self {
        Self { client_id: client_id.to_owned() }
    }

    #[must_use]
    pub fn last_user(&self) -> String {
        format!("{KEY_PREFIX}.{}.LastAuthUser", self.client_id)
    }

    #[must_use]
    pub fn id_token(&self, username: &str) -> String {
        self.user_key(username, "idToken")
    }

    #[must_use]
    pub fn access_token(&self, username: &str) -> String {
        self.user_key(username, "accessToken")
    }

    #[must_use]
    pub fn refresh_token(&self, username: &str) -> String {
        self.user_key(username, "refreshToken")
    }

    fn user_key(&self, username: &str, name: &str) -> String {
        format!("{KEY_PREFIX}.{}.{username}.{name}", self.client_id)
    }
}

/// What the persisted tokens allow at restore time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredSession {
    None,
    Valid(Session),
    Expired { username: String, refresh_token: String },
}

/// Inspect persisted tokens. An expired ID token without a refresh token is
/// treated as no session.
///
/// # Errors
///
/// Returns [`IdentityError::Malformed`] when a stored ID token cannot be decoded.
pub fn stored_session(
    storage: &dyn TokenStorage,
    keys: &StorageKeys,
    now_secs: i64,
) -> Result<StoredSession, IdentityError> {
    let Some(username) = storage.get(&keys.last_user()) else {
        return Ok(StoredSession::None);
    };
    let Some(id_token) = storage.get(&keys.id_token(&username)) else {
        return Ok(StoredSession::None);
    };
    let claims = decode_claims(&id_token)?;
    if claims.exp > now_secs {
        let email = claims.email.unwrap_or_else(|| username.clone());
        return Ok(StoredSession::Valid(Session::new(id_token, email)?));
    }
    match storage.get(&keys.refresh_token(&username)) {
        Some(refresh_token) if !refresh_token.is_empty() => Ok(StoredSession::Expired { username, refresh_token }),
        _ => Ok(StoredSession::None),
    }
}

/// Write tokens for `username` and mark them as the last signed-in user.
///
/// # Errors
///
/// Propagates storage write failures.
pub fn persist_tokens(
    storage: &dyn TokenStorage,
    keys: &StorageKeys,
    username: &str,
    tokens: &Tokens,
) -> Result<(), IdentityError> {
    storage.set(&keys.id_token(username), &tokens.id_token)?;
    storage.set(&keys.access_token(username), &tokens.access_token)?;
    if let Some(refresh) = &tokens.refresh_token {
        storage.set(&keys.refresh_token(username), refresh)?;
    }
    storage.set(&keys.last_user(), username)
}

/// Remove the last user's tokens. Returns the refresh token that was stored,
/// for remote revocation.
pub fn clear_tokens(storage: &dyn TokenStorage, keys: &StorageKeys) -> Option<String> {
    let username = storage.get(&keys.last_user())?;
    let refresh = storage.get(&keys.refresh_token(&username));
    storage.remove(&keys.id_token(&username));
    storage.remove(&keys.access_token(&username));
    storage.remove(&keys.refresh_token(&username));
    storage.remove(&keys.last_user());
    refresh
}

// =============================================================================
// PROVIDER
// =============================================================================

/// Cognito-backed [`IdentityProvider`].
pub struct CognitoIdentity {
    config: ClientConfig,
    keys: StorageKeys,
    storage: Arc<dyn TokenStorage>,
}

impl CognitoIdentity {
    #[must_use]
    pub fn new(config: ClientConfig, storage: Arc<dyn TokenStorage>) -> Self {
        let keys = StorageKeys::new(&config.client_id);
        Self { config, keys, storage }
    }

    fn endpoint(&self) -> Result<String, IdentityError> {
        if self.config.client_id.is_empty() {
            return Err(IdentityError::NotConfigured("COGNITO_CLIENT_ID is not set".to_owned()));
        }
        self.config
            .region()
            .map(endpoint)
            .ok_or_else(|| IdentityError::NotConfigured("COGNITO_USER_POOL_ID is not set or invalid".to_owned()))
    }

    /// POST one Cognito operation and return the raw success body.
    async fn call(&self, operation: &str, body: &Value) -> Result<String, IdentityError> {
        let url = self.endpoint()?;
        send_operation(&url, operation, body).await
    }

    async fn exchange(&self, body: &Value) -> Result<Tokens, IdentityError> {
        let text = self.call("InitiateAuth", body).await?;
        parse_auth_result(&text)
    }
}

#[cfg(feature = "hydrate")]
async fn send_operation(url: &str, operation: &str, body: &Value) -> Result<String, IdentityError> {
    let response = gloo_net::http::Request::post(url)
        .header("Content-Type", AMZ_JSON)
        .header("X-Amz-Target", &target(operation))
        .body(body.to_string())
        .map_err(|e| IdentityError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| IdentityError::Transport(e.to_string()))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| IdentityError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(parse_error(status, &text));
    }
    Ok(text)
}

#[cfg(not(feature = "hydrate"))]
#[allow(clippy::unused_async)]
async fn send_operation(url: &str, operation: &str, body: &Value) -> Result<String, IdentityError> {
    let _ = (url, body);
    Err(IdentityError::NotConfigured(format!("{operation} is only available in the browser")))
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for CognitoIdentity {
    async fn register(&self, email: &str, password: &str) -> Result<(), IdentityError> {
        let body = sign_up_body(&self.config.client_id, email, password);
        self.call("SignUp", &body).await?;
        Ok(())
    }

    async fn confirm_registration(&self, email: &str, code: &str) -> Result<(), IdentityError> {
        let body = confirm_sign_up_body(&self.config.client_id, email, code);
        self.call("ConfirmSignUp", &body).await?;
        Ok(())
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let tokens = self
            .exchange(&password_auth_body(&self.config.client_id, email, password))
            .await?;
        let session = session_from_tokens(&tokens, email)?;
        persist_tokens(self.storage.as_ref(), &self.keys, email, &tokens)?;
        Ok(session)
    }

    async fn restore_session(&self) -> Result<Option<Session>, IdentityError> {
        match stored_session(self.storage.as_ref(), &self.keys, now_secs())? {
            StoredSession::None => Ok(None),
            StoredSession::Valid(session) => Ok(Some(session)),
            StoredSession::Expired { username, refresh_token } => {
                log::debug!("cognito: id token expired, refreshing once");
                let mut tokens = self
                    .exchange(&refresh_auth_body(&self.config.client_id, &refresh_token))
                    .await?;
                // REFRESH_TOKEN_AUTH does not rotate the refresh token.
                if tokens.refresh_token.is_none() {
                    tokens.refresh_token = Some(refresh_token);
                }
                let session = session_from_tokens(&tokens, &username)?;
                persist_tokens(self.storage.as_ref(), &self.keys, &username, &tokens)?;
                Ok(Some(session))
            }
        }
    }

    fn sign_out(&self) -> Result<(), IdentityError> {
        let Some(refresh_token) = clear_tokens(self.storage.as_ref(), &self.keys) else {
            return Ok(());
        };
        let url = self.endpoint()?;
        let body = revoke_token_body(&self.config.client_id, &refresh_token);
        revoke_in_background(url, body);
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
fn revoke_in_background(url: String, body: Value) {
    leptos::task::spawn_local(async move {
        if let Err(e) = send_operation(&url, "RevokeToken", &body).await {
            log::warn!("cognito: token revocation failed: {e}");
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn revoke_in_background(url: String, body: Value) {
    let _ = body;
    log::debug!("cognito: no browser, skipping token revocation at {url}");
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation)]
fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[cfg(not(feature = "hydrate"))]
fn now_secs() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
}
