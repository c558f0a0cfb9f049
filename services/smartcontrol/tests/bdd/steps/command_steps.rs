//! BDD step definitions for remote buttons

use cucumber::{then, when};
use smartcontrol_core::{DashboardEvent, RemoteCommand};

use crate::world::SmartControlWorld;

const SEND_COMMAND: &str = "/api/send-command";

#[when(expr = "I press {string}")]
async fn press(world: &mut SmartControlWorld, button: String) {
    let command: RemoteCommand = button.parse().expect("unknown button");
    world.dispatch(DashboardEvent::SendCommand(command)).await;
}

#[then("no command should have been sent")]
fn no_command_sent(world: &mut SmartControlWorld) {
    assert!(world.backend.requests_to(SEND_COMMAND).is_empty());
}

#[then(expr = "a command {string} should have been sent to {string}")]
fn command_sent_to(world: &mut SmartControlWorld, command: String, ip: String) {
    let requests = world.backend.requests_to(SEND_COMMAND);
    let request = requests.last().expect("no command was sent");
    assert_eq!(request.method, "POST");

    let body = request.body.as_ref().expect("command without body");
    assert_eq!(body["command"], command.as_str());
    assert_eq!(body["tvIp"], ip.as_str());
}

#[then(expr = "the command should name the brand {string}")]
fn command_brand(world: &mut SmartControlWorld, brand: String) {
    let requests = world.backend.requests_to(SEND_COMMAND);
    let body = requests
        .last()
        .and_then(|r| r.body.clone())
        .expect("no command was sent");
    assert_eq!(body["tvBrand"], brand.as_str());
}

#[then("no command should be in flight")]
fn nothing_in_flight(world: &mut SmartControlWorld) {
    assert!(!world.dashboard().is_sending());
}
