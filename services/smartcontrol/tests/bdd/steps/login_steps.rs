//! BDD step definitions for the login feature

use cucumber::{then, when};
use smartcontrol_core::LoginPhase;

use crate::world::SmartControlWorld;

#[when(expr = "I log in as {string} with password {string}")]
async fn log_in(world: &mut SmartControlWorld, email: String, password: String) {
    let view = world
        .remote()
        .login(&email, &password)
        .await
        .expect("login driver failed");
    world.login_view = Some(view);
}

#[then(expr = "I should be signed in as {string}")]
fn signed_in_as(world: &mut SmartControlWorld, email: String) {
    let view = world.login_view.as_ref().expect("no login attempted");
    match view.phase() {
        LoginPhase::SignedIn(user) => assert_eq!(user.email, email),
        other => panic!("expected to be signed in, login view is {:?}", other),
    }
}

#[then(expr = "I should see the login error {string}")]
fn login_error(world: &mut SmartControlWorld, expected: String) {
    let view = world.login_view.as_ref().expect("no login attempted");
    assert_eq!(view.error(), Some(expected.as_str()));
    assert!(!view.is_submitting());
}

#[then(expr = "the stored session should belong to {string}")]
fn stored_session_belongs_to(world: &mut SmartControlWorld, email: String) {
    let raw = world.remote().store().raw().expect("no session stored");
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["email"], email.as_str());
}

#[then("no session should be stored")]
fn no_session_stored(world: &mut SmartControlWorld) {
    assert_eq!(world.remote().store().raw(), None);
}
