//! Shared-secret access gate.

use sha2::{Digest, Sha256};

use crate::board::{
    domain::{AccessDenied, Credential, Operator},
    ports::AccessGate,
};

/// Gate accepting a single shared password.
///
/// Only the SHA-256 digest of the secret is retained, and candidate digests
/// are compared in constant time.
#[derive(Clone)]
pub struct SharedSecretGate {
    digest: [u8; 32],
}

impl SharedSecretGate {
    /// Creates a gate for the given secret.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            digest: digest_of(secret),
        }
    }

    /// Checks a typed password against the secret.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        let candidate_digest = digest_of(candidate);
        let difference = self
            .digest
            .iter()
            .zip(candidate_digest.iter())
            .fold(0_u8, |acc, (expected, actual)| acc | (expected ^ actual));
        difference == 0
    }
}

impl std::fmt::Debug for SharedSecretGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecretGate").finish_non_exhaustive()
    }
}

impl AccessGate for SharedSecretGate {
    fn authorize(&self, credential: &Credential) -> Result<Operator, AccessDenied> {
        match credential {
            Credential::Password(candidate) if self.verify(candidate) => Ok(Operator::shared()),
            Credential::Password(_) => Err(AccessDenied::IncorrectSecret),
            Credential::Token(_) => Err(AccessDenied::UnknownToken),
        }
    }
}

fn digest_of(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
