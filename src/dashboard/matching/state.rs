use crate::dashboard::mvi::UiState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MatchDialogState {
    #[default]
    Closed,
    Submitting {
        submission: u64,
        /// Ids sent with this submission, frozen at open time.
        selection: Vec<String>,
    },
    Settled {
        submission: u64,
        match_id: String,
    },
    Failed {
        submission: u64,
        error: String,
    },
}

impl UiState for MatchDialogState {}

impl MatchDialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn submission(&self) -> Option<u64> {
        match self {
            Self::Closed => None,
            Self::Submitting { submission, .. }
            | Self::Settled { submission, .. }
            | Self::Failed { submission, .. } => Some(*submission),
        }
    }

    pub fn match_id(&self) -> Option<&str> {
        match self {
            Self::Settled { match_id, .. } => Some(match_id),
            _ => None,
        }
    }
}
