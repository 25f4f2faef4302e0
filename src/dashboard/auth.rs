//! Credential extraction from requests.

use axum::http::{HeaderMap, header::AUTHORIZATION};

use crate::board::domain::{AccessDenied, Credential, SessionToken};

const BEARER_PREFIX: &str = "Bearer ";

/// Returns the bearer token from the `Authorization` header, if present.
pub(super) fn bearer_token(headers: &HeaderMap) -> Option<Result<SessionToken, AccessDenied>> {
    let value = headers.get(AUTHORIZATION)?;
    let token = value
        .to_str()
        .ok()
        .and_then(|raw| raw.strip_prefix(BEARER_PREFIX))
        .ok_or(AccessDenied::UnknownToken)
        .and_then(SessionToken::parse);
    Some(token)
}

/// Resolves the credential for a request: a bearer token takes precedence
/// over a password supplied in the body.
pub(super) fn credential(
    headers: &HeaderMap,
    password: Option<String>,
) -> Result<Credential, AccessDenied> {
    if let Some(token) = bearer_token(headers) {
        return token.map(Credential::Token);
    }
    password
        .map(Credential::Password)
        .ok_or(AccessDenied::MissingCredential)
}
