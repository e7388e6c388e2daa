use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
///
/// Reducers must not perform I/O; side effects are derived by the
/// controller from the transition.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
