use crate::dashboard::mvi::Reducer;

use super::intent::MatchIntent;
use super::state::MatchDialogState;

pub struct MatchReducer;

impl Reducer for MatchReducer {
    type State = MatchDialogState;
    type Intent = MatchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MatchIntent::Open {
                submission,
                selection,
            } => match state {
                MatchDialogState::Closed => MatchDialogState::Submitting {
                    submission,
                    selection,
                },
                // Already open: re-opening must not resubmit.
                other => other,
            },

            MatchIntent::Resolved {
                submission,
                match_id,
            } => match state {
                MatchDialogState::Submitting {
                    submission: pending,
                    ..
                } if pending == submission => MatchDialogState::Settled {
                    submission,
                    match_id,
                },
                other => other,
            },

            MatchIntent::Failed {
                submission,
                message,
            } => match state {
                MatchDialogState::Submitting {
                    submission: pending,
                    ..
                } if pending == submission => MatchDialogState::Failed {
                    submission,
                    error: message,
                },
                other => other,
            },

            MatchIntent::Close => MatchDialogState::Closed,
        }
    }
}
