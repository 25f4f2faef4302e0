//! Access port guarding table mutations.

use crate::board::domain::{AccessDenied, Credential, Operator};

/// Authorisation contract shared by every mutating table operation.
#[cfg_attr(test, mockall::automock)]
pub trait AccessGate: Send + Sync {
    /// Resolves a credential to the operator it identifies.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the credential is not accepted.
    fn authorize(&self, credential: &Credential) -> Result<Operator, AccessDenied>;
}
