use crate::store::Counter;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Screen shown, or retry requested.
    Load,
    Loaded { counters: Vec<Counter> },
    RequestFailed { message: String },
    /// Typed character for the magnitude field. Non-digits are ignored.
    InputChar(char),
    InputBackspace,
    /// Apply `+magnitude`.
    Increase,
    /// Apply `-magnitude`.
    Decrease,
    /// Apply `+1` regardless of the field.
    AddOne,
}

impl Intent for DetailIntent {}
