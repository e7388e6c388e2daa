use crate::dashboard::mvi::Reducer;

use super::intent::SelectionIntent;
use super::state::SelectionState;

pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Intent = SelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::Toggle { id } => state.toggled(id),
            SelectionIntent::Clear => SelectionState::default(),
        }
    }
}
