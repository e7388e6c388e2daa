use crate::dashboard::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionIntent {
    /// Remove `id` if selected, append it otherwise.
    Toggle { id: String },
    /// Empty the selection.
    Clear,
}

impl Intent for SelectionIntent {}
