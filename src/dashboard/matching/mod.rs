//! Match dialog: submits the favourites once per opening.
//!
//! ```text
//! Closed ──Open──→ Submitting ──Resolved──→ Settled
//!   ↑                  │ Failed
//!   │                  ↓
//!   └──────Close──── Failed / Settled / Submitting
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::MatchIntent;
pub use reducer::MatchReducer;
pub use state::MatchDialogState;
