use crate::store::Counter;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent {
    /// Screen shown, or retry requested.
    Load,
    Loaded { counters: Vec<Counter> },
    LoadFailed { message: String },
    MoveUp,
    MoveDown,
    /// Open the highlighted counter.
    Open,
}

impl Intent for ListIntent {}
