//! BDD step definitions for the dashboard feature

use cucumber::{then, when};
use smartcontrol_core::{messages, DashboardEvent, DashboardStatus, Id};

use crate::world::SmartControlWorld;

fn parse_status(s: &str) -> DashboardStatus {
    match s {
        "signed out" => DashboardStatus::SignedOut,
        "loading" => DashboardStatus::Loading,
        "without a selection" => DashboardStatus::NoneSelected,
        "connected" => DashboardStatus::Connected,
        "unconnected" => DashboardStatus::Unconnected,
        other => panic!("Unknown dashboard status: {}", other),
    }
}

#[when("I open the dashboard")]
async fn open_dashboard(world: &mut SmartControlWorld) {
    world.open_dashboard().await;
}

#[when(expr = "I select the TV with id {int}")]
async fn select_tv(world: &mut SmartControlWorld, id: i64) {
    world.dispatch(DashboardEvent::SelectTv(Id::Number(id))).await;
}

#[when("I start discovery")]
async fn start_discovery(world: &mut SmartControlWorld) {
    world.dispatch(DashboardEvent::Discover).await;
}

#[when("I log out")]
async fn log_out(world: &mut SmartControlWorld) {
    world.dispatch(DashboardEvent::Logout).await;
}

#[then(regex = r"^the dashboard should be (signed out|loading|without a selection|connected|unconnected)$")]
fn dashboard_status(world: &mut SmartControlWorld, status: String) {
    assert_eq!(world.dashboard().status(), parse_status(&status));
}

#[then(expr = "the selected TV should be {string}")]
fn selected_tv(world: &mut SmartControlWorld, name: String) {
    let selected = world
        .dashboard()
        .selected_tv()
        .map(|tv| tv.tv_name.clone());
    assert_eq!(selected, Some(name));
}

#[then(expr = "the dashboard should list {int} TV(s)")]
fn lists_tvs(world: &mut SmartControlWorld, count: usize) {
    assert_eq!(world.dashboard().tvs().len(), count);
}

#[then(expr = "I should see the notice {string}")]
fn notice(world: &mut SmartControlWorld, expected: String) {
    assert_eq!(world.dashboard().notice(), Some(expected.as_str()));
}

#[then("I should be told to discover the TV first")]
fn not_connected_warning(world: &mut SmartControlWorld) {
    assert_eq!(world.dashboard().notice(), Some(messages::TV_NOT_CONNECTED));
}

#[then("discovery should be available again")]
fn discovery_available(world: &mut SmartControlWorld) {
    assert!(!world.dashboard().is_discovering());
}
