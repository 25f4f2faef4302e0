//! Token sessions layered over the shared secret.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{debug, info};

use super::SharedSecretGate;
use crate::board::{
    domain::{AccessDenied, Credential, Operator, SessionToken},
    ports::AccessGate,
};

/// Session issued by [`SessionGate::login`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Bearer token to present on later requests.
    pub token: SessionToken,
    /// Identity the token acts as.
    pub operator: Operator,
    /// Time the session was opened.
    pub issued_at: DateTime<Utc>,
}

/// Gate accepting either the shared secret or a live session token.
#[derive(Debug)]
pub struct SessionGate {
    secret: SharedSecretGate,
    sessions: RwLock<HashMap<SessionToken, Session>>,
}

impl SessionGate {
    /// Creates a gate with no open sessions.
    #[must_use]
    pub fn new(secret: SharedSecretGate) -> Self {
        Self {
            secret,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Opens a session for `name` when `password` matches the secret.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied::IncorrectSecret`] on a wrong password.
    pub fn login(
        &self,
        name: &str,
        password: &str,
        clock: &impl Clock,
    ) -> Result<Session, AccessDenied> {
        if !self.secret.verify(password) {
            return Err(AccessDenied::IncorrectSecret);
        }

        let session = Session {
            token: SessionToken::new(),
            operator: Operator::new(name),
            issued_at: clock.utc(),
        };
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        sessions.insert(session.token, session.clone());
        info!(operator = %session.operator, "session opened");
        Ok(session)
    }

    /// Revokes a session.
    ///
    /// Returns the revoked session, or `None` when the token was unknown.
    pub fn logout(&self, token: SessionToken) -> Option<Session> {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let revoked = sessions.remove(&token);
        if let Some(session) = &revoked {
            info!(operator = %session.operator, "session closed");
        }
        revoked
    }

    /// Returns the number of open sessions.
    #[must_use]
    pub fn open_sessions(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

impl AccessGate for SessionGate {
    fn authorize(&self, credential: &Credential) -> Result<Operator, AccessDenied> {
        match credential {
            Credential::Password(_) => self.secret.authorize(credential),
            Credential::Token(token) => {
                let sessions = self
                    .sessions
                    .read()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                sessions
                    .get(token)
                    .map(|session| session.operator.clone())
                    .ok_or_else(|| {
                        debug!("rejected unknown session token");
                        AccessDenied::UnknownToken
                    })
            }
        }
    }
}
