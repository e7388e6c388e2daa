//! Terminal dashboard for browsing a paginated dog listing, favouriting
//! dogs and asking the match endpoint for the best one.

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod ui;
