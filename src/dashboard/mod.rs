//! Headless dashboard core.
//!
//! Everything here is synchronous and free of I/O so it can be driven by
//! any front-end and tested without a terminal or network.

pub mod controller;
pub mod filter;
pub mod matching;
pub mod mvi;
pub mod notify;
pub mod pagination;
pub mod selection;
pub mod trigger;
pub mod view;

pub use controller::{Dashboard, Effect};
pub use view::{CardView, DashboardView, MatchView, RenderOptions};
