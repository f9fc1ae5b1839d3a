use crate::store::{Counter, CounterId};
use crate::ui::mvi::UiState;

/// Magnitude field contents when the screen opens.
pub const DEFAULT_INPUT: &str = "5";

#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    /// Id from the navigation route.
    pub requested: Option<CounterId>,
    /// Visit number this screen was opened with; results tagged with another
    /// visit are not applied.
    pub visit: u64,
    /// Latest full list from the server.
    pub counters: Vec<Counter>,
    pub selected: Option<Counter>,
    /// Digits only; may be empty.
    pub input_value: String,
    pub in_flight: bool,
    pub error: Option<String>,
}

impl Default for DetailState {
    fn default() -> Self {
        Self {
            requested: None,
            visit: 0,
            counters: Vec::new(),
            selected: None,
            input_value: DEFAULT_INPUT.to_string(),
            in_flight: false,
            error: None,
        }
    }
}

impl UiState for DetailState {}

impl DetailState {
    pub fn for_route(requested: Option<CounterId>, visit: u64) -> Self {
        Self {
            requested,
            visit,
            ..Self::default()
        }
    }

    /// Nothing to show yet and nothing went wrong.
    pub fn is_loading(&self) -> bool {
        self.selected.is_none() && self.error.is_none()
    }

    pub fn magnitude(&self) -> i64 {
        parse_magnitude(&self.input_value)
    }
}

/// The delta magnitude typed by the user; 1 when the field does not hold a
/// non-negative integer.
pub fn parse_magnitude(input: &str) -> i64 {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|value| *value >= 0)
        .unwrap_or(1)
}
