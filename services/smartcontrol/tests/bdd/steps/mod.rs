//! BDD step definitions for the SmartControl+ service

pub mod backend_steps;
pub mod command_steps;
pub mod connect_steps;
pub mod dashboard_steps;
pub mod login_steps;
