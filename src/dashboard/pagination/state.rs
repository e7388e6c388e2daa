/// Lifecycle of the page fetcher for the current query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing fetched yet for this query.
    #[default]
    Idle,
    /// First page in flight.
    LoadingInitial,
    /// A follow-up page in flight.
    LoadingNext,
    /// At least one page loaded and the last one carried a cursor.
    IdleWithMore,
    /// The last page had no cursor.
    IdleExhausted,
}
