//! State/intent/reducer primitives shared by the dashboard components.
//!
//! Each component (selection, match dialog) owns one state value. Events
//! become intents, and a reducer folds an intent into the next state:
//!
//! ```text
//! key press / response ──→ Intent ──→ Reducer::reduce ──→ State ──→ view()
//! ```
//!
//! Reducers are pure. Anything that talks to the network is returned by
//! the controller as an `Effect` instead.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
