//! BDD step definitions for discovery and the manual-connect form

use cucumber::{then, when};
use smartcontrol_core::{ConnectField, DashboardEvent, Id};

use crate::world::SmartControlWorld;

const CONNECT_TV: &str = "/api/connect-tv";

#[when("I open the connect form")]
async fn open_form(world: &mut SmartControlWorld) {
    if !world.dashboard().connect_form().open {
        world.dispatch(DashboardEvent::ToggleConnectForm).await;
    }
}

#[when("I close the connect form")]
async fn close_form(world: &mut SmartControlWorld) {
    if world.dashboard().connect_form().open {
        world.dispatch(DashboardEvent::ToggleConnectForm).await;
    }
}

#[when(expr = "I fill in name {string} and address {string}")]
async fn fill_in(world: &mut SmartControlWorld, name: String, ip: String) {
    world
        .dispatch(DashboardEvent::ConnectFieldChanged(ConnectField::Name, name))
        .await;
    world
        .dispatch(DashboardEvent::ConnectFieldChanged(ConnectField::Ip, ip))
        .await;
}

#[when(expr = "I fill in brand {string}")]
async fn fill_in_brand(world: &mut SmartControlWorld, brand: String) {
    world
        .dispatch(DashboardEvent::ConnectFieldChanged(ConnectField::Brand, brand))
        .await;
}

#[when("I submit the connect form")]
async fn submit(world: &mut SmartControlWorld) {
    world.dispatch(DashboardEvent::SubmitConnect).await;
}

#[then("the connect form should be open")]
fn form_open(world: &mut SmartControlWorld) {
    assert!(world.dashboard().connect_form().open);
}

#[then("the connect form should be hidden and empty")]
fn form_hidden_and_empty(world: &mut SmartControlWorld) {
    let form = world.dashboard().connect_form();
    assert!(!form.open);
    assert!(form.name.is_empty());
    assert!(form.brand.is_empty());
    assert!(form.ip.is_empty());
}

#[then(expr = "the connect request should carry name {string} and address {string}")]
fn connect_request(world: &mut SmartControlWorld, name: String, ip: String) {
    let requests = world.backend.requests_to(CONNECT_TV);
    let body = requests
        .last()
        .and_then(|r| r.body.clone())
        .expect("no connect request was sent");
    assert_eq!(body["tvName"], name.as_str());
    assert_eq!(body["tvIp"], ip.as_str());
    assert_eq!(
        serde_json::from_value::<Id>(body["userId"].clone()).ok(),
        world.dashboard().user().map(|u| u.id.clone())
    );
}

#[then("the connect request should not name a brand")]
fn connect_without_brand(world: &mut SmartControlWorld) {
    let requests = world.backend.requests_to(CONNECT_TV);
    let body = requests
        .last()
        .and_then(|r| r.body.clone())
        .expect("no connect request was sent");
    assert!(body.get("tvBrand").is_none());
}
