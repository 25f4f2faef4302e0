//! Access gate adapters.
//!
//! [`SharedSecretGate`] checks the configured secret. [`SessionGate`] wraps it
//! and additionally accepts bearer tokens issued by [`SessionGate::login`].

mod session;
mod shared_secret;

pub use session::{Session, SessionGate};
pub use shared_secret::SharedSecretGate;
