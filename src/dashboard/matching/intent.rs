use crate::dashboard::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchIntent {
    /// The dialog was opened with a snapshot of the selection.
    Open {
        submission: u64,
        selection: Vec<String>,
    },

    /// The match endpoint answered.
    Resolved { submission: u64, match_id: String },

    /// The match request failed.
    Failed { submission: u64, message: String },

    /// User dismissed the dialog.
    Close,
}

impl Intent for MatchIntent {}
