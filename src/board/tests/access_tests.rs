//! Access gate adapter tests.

use crate::board::{
    adapters::access::{SessionGate, SharedSecretGate},
    domain::{AccessDenied, Credential, Operator, SessionToken},
    ports::AccessGate,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn secret_gate() -> SharedSecretGate {
    SharedSecretGate::new("rabbit1")
}

#[fixture]
fn session_gate(secret_gate: SharedSecretGate) -> SessionGate {
    SessionGate::new(secret_gate)
}

#[rstest]
fn shared_secret_accepts_matching_password(secret_gate: SharedSecretGate) {
    let operator = secret_gate
        .authorize(&Credential::password("rabbit1"))
        .expect("correct password should be accepted");

    assert_eq!(operator, Operator::shared());
}

#[rstest]
#[case("rabbit2")]
#[case("")]
#[case("RABBIT1")]
fn shared_secret_rejects_other_passwords(secret_gate: SharedSecretGate, #[case] attempt: &str) {
    assert_eq!(
        secret_gate.authorize(&Credential::password(attempt)),
        Err(AccessDenied::IncorrectSecret)
    );
}

#[rstest]
fn shared_secret_rejects_tokens(secret_gate: SharedSecretGate) {
    assert_eq!(
        secret_gate.authorize(&Credential::Token(SessionToken::new())),
        Err(AccessDenied::UnknownToken)
    );
}

#[rstest]
fn shared_secret_debug_hides_digest(secret_gate: SharedSecretGate) {
    assert_eq!(format!("{secret_gate:?}"), "SharedSecretGate { .. }");
}

#[rstest]
fn login_issues_token_bound_to_operator(session_gate: SessionGate) {
    let session = session_gate
        .login("alice", "rabbit1", &DefaultClock)
        .expect("login should succeed");

    let operator = session_gate
        .authorize(&Credential::Token(session.token))
        .expect("issued token should be accepted");

    assert_eq!(operator.name(), "alice");
    assert_eq!(session_gate.open_sessions(), 1);
}

#[rstest]
fn login_with_wrong_password_opens_no_session(session_gate: SessionGate) {
    let result = session_gate.login("mallory", "carrot", &DefaultClock);

    assert_eq!(result, Err(AccessDenied::IncorrectSecret));
    assert_eq!(session_gate.open_sessions(), 0);
}

#[rstest]
fn logout_revokes_token(session_gate: SessionGate) {
    let session = session_gate
        .login("bob", "rabbit1", &DefaultClock)
        .expect("login should succeed");

    let revoked = session_gate.logout(session.token);

    assert_eq!(revoked.map(|closed| closed.operator), Some(Operator::new("bob")));
    assert_eq!(
        session_gate.authorize(&Credential::Token(session.token)),
        Err(AccessDenied::UnknownToken)
    );
    assert!(session_gate.logout(session.token).is_none());
}

#[rstest]
fn session_gate_still_accepts_shared_secret(session_gate: SessionGate) {
    let operator = session_gate
        .authorize(&Credential::password("rabbit1"))
        .expect("shared secret should be accepted");

    assert_eq!(operator, Operator::shared());
}
