/// Control actions an observer can return from any search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the current estimate.
    StopEarly,
}
