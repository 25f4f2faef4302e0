//! Credentials and identities for gated table mutations.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Bearer token issued to an operator after a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(Uuid);

impl SessionToken {
    /// Creates a new random session token.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a token presented in an `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied::UnknownToken`] when the value is not a UUID.
    pub fn parse(raw: &str) -> Result<Self, AccessDenied> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| AccessDenied::UnknownToken)
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Proof of authorisation supplied with a mutation.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// The shared secret, typed into a form.
    Password(String),
    /// A token issued by a previous login.
    Token(SessionToken),
}

impl Credential {
    /// Wraps a typed password.
    #[must_use]
    pub fn password(secret: impl Into<String>) -> Self {
        Self::Password(secret.into())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password(_) => f.write_str("Password(<redacted>)"),
            Self::Token(token) => f.debug_tuple("Token").field(token).finish(),
        }
    }
}

/// Identity a mutation is performed as.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Operator(String);

impl Operator {
    /// Name recorded for mutations authorised by the bare shared secret.
    pub const SHARED: &'static str = "shared-secret";

    /// Creates an operator identity, defaulting blank names to
    /// [`Operator::SHARED`].
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::shared();
        }
        Self(trimmed.to_owned())
    }

    /// Returns the identity used for password-only mutations.
    #[must_use]
    pub fn shared() -> Self {
        Self(Self::SHARED.to_owned())
    }

    /// Returns the operator name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reasons an access gate refuses a credential.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AccessDenied {
    /// No credential accompanied the request.
    #[error("a password or session token is required")]
    MissingCredential,

    /// The password does not match the shared secret.
    #[error("incorrect password")]
    IncorrectSecret,

    /// The token was never issued or has been revoked.
    #[error("unknown or revoked session token")]
    UnknownToken,
}
