use crate::store::Counter;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    /// Empty until the first fetch resolves.
    pub counters: Vec<Counter>,
    /// Highlighted row.
    pub cursor: usize,
    pub loading: bool,
    /// Last fetch failure, cleared by the next successful fetch.
    pub error: Option<String>,
}

impl UiState for ListState {}

impl ListState {
    pub fn highlighted(&self) -> Option<&Counter> {
        self.counters.get(self.cursor)
    }
}
