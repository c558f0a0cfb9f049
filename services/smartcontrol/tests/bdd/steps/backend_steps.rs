//! BDD step definitions describing the backend and stored session

use cucumber::{given, then, when};
use serde_json::json;
use smartcontrol_core::{Id, Session, User};

use crate::world::SmartControlWorld;

#[given("the backend is unreachable")]
fn backend_unreachable(world: &mut SmartControlWorld) {
    world.backend.set_unreachable();
}

#[when("the backend goes down")]
fn backend_goes_down(world: &mut SmartControlWorld) {
    world.backend.set_unreachable();
}

#[given(expr = "the backend accepts the login of {string} with user id {int}")]
fn backend_accepts_login(world: &mut SmartControlWorld, email: String, id: i64) {
    world.backend.set_login_reply(json!({
        "success": true,
        "user": {"id": id, "email": email},
    }));
}

#[given(expr = "the backend rejects logins with {string}")]
fn backend_rejects_login(world: &mut SmartControlWorld, error: String) {
    world
        .backend
        .set_login_reply(json!({"success": false, "error": error}));
}

#[given(expr = "the backend lists a TV {string} with address {string}")]
fn backend_lists_connected_tv(world: &mut SmartControlWorld, name: String, ip: String) {
    world.backend.add_tv(&name, "Samsung", Some(&ip));
}

#[given(expr = "the backend lists a TV {string} without an address")]
fn backend_lists_unconnected_tv(world: &mut SmartControlWorld, name: String) {
    world.backend.add_tv(&name, "LG", None);
}

#[given("the backend fails to list TVs")]
fn backend_fails_tv_list(world: &mut SmartControlWorld) {
    world.backend.fail_tv_list();
}

#[given(expr = "the backend finds a TV during discovery with message {string}")]
fn backend_discovers(world: &mut SmartControlWorld, message: String) {
    world
        .backend
        .set_discover_reply(json!({"success": true, "message": message}));
}

#[given(expr = "the backend finds no TV during discovery with message {string}")]
fn backend_discovers_nothing(world: &mut SmartControlWorld, message: String) {
    world
        .backend
        .set_discover_reply(json!({"success": false, "message": message}));
}

#[given(expr = "the backend rejects manual connections with {string}")]
fn backend_rejects_connect(world: &mut SmartControlWorld, message: String) {
    world
        .backend
        .set_connect_reply(json!({"success": false, "message": message}));
}

#[given(expr = "the backend answers commands with {string}")]
fn backend_answers_commands(world: &mut SmartControlWorld, message: String) {
    world
        .backend
        .set_command_reply(json!({"success": true, "message": message}));
}

#[given("no stored session")]
fn no_stored_session(world: &mut SmartControlWorld) {
    world.stored_session = None;
}

#[given(expr = "a stored session for {string} with user id {int}")]
fn stored_session(world: &mut SmartControlWorld, email: String, id: i64) {
    world.stored_session = Some(Session::new(User {
        id: Id::Number(id),
        email,
    }));
}

#[then("no request should have been sent")]
fn no_requests(world: &mut SmartControlWorld) {
    let requests = world.backend.requests();
    assert!(requests.is_empty(), "unexpected requests: {:?}", requests);
}

#[then(expr = "{string} should have been requested {int} time(s)")]
fn requested_times(world: &mut SmartControlWorld, path: String, times: usize) {
    let requests = world.backend.requests_to(&path);
    assert_eq!(
        requests.len(),
        times,
        "requests to {}: {:?}",
        path,
        requests
    );
}
