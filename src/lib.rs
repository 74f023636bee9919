//! Desktop client for the legislative tracker: council members, state
//! representatives, bills and users, loaded from the tracker's HTTP API and
//! shown in egui panels.

pub mod api;
pub mod config;
pub mod gui;
pub mod loader;
pub mod models;
pub mod panel;
