use crate::store::{Counter, CounterId};
use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailState;
use crate::ui::effect::{Effect, Screen};
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Effect>) {
        match intent {
            DetailIntent::Load => {
                let screen = Screen::Detail(state.visit);
                (
                    DetailState {
                        in_flight: true,
                        error: None,
                        ..state
                    },
                    Some(Effect::FetchCounters { screen }),
                )
            }
            DetailIntent::Loaded { counters } => {
                let selected = match &state.selected {
                    // Refresh after an increment: follow the same counter.
                    Some(current) => find(&counters, current.counter_id).cloned(),
                    None => initial_selection(&counters, state.requested).cloned(),
                };
                let error = match (&selected, &state.selected) {
                    (Some(_), _) => None,
                    (None, Some(previous)) => {
                        Some(format!("Counter {} no longer exists", previous.counter_id))
                    }
                    (None, None) => Some("No counters yet".to_string()),
                };
                (
                    DetailState {
                        counters,
                        selected,
                        in_flight: false,
                        error,
                        ..state
                    },
                    None,
                )
            }
            DetailIntent::RequestFailed { message } => (
                DetailState {
                    in_flight: false,
                    error: Some(message),
                    ..state
                },
                None,
            ),
            DetailIntent::InputChar(ch) => {
                let mut state = state;
                if ch.is_ascii_digit() {
                    state.input_value.push(ch);
                }
                (state, None)
            }
            DetailIntent::InputBackspace => {
                let mut state = state;
                state.input_value.pop();
                (state, None)
            }
            DetailIntent::Increase => {
                let delta = state.magnitude();
                change_value(state, delta)
            }
            DetailIntent::Decrease => {
                let delta = -state.magnitude();
                change_value(state, delta)
            }
            DetailIntent::AddOne => change_value(state, 1),
        }
    }
}

fn change_value(state: DetailState, delta: i64) -> (DetailState, Option<Effect>) {
    let Some(id) = state.selected.as_ref().map(|c| c.counter_id) else {
        return (state, None);
    };
    let visit = state.visit;
    (
        DetailState {
            in_flight: true,
            error: None,
            ..state
        },
        Some(Effect::Increment { id, delta, visit }),
    )
}

fn find(counters: &[Counter], id: CounterId) -> Option<&Counter> {
    counters.iter().find(|c| c.counter_id == id)
}

/// The counter named by the route, or the first one when the route names none.
fn initial_selection(counters: &[Counter], requested: Option<CounterId>) -> Option<&Counter> {
    requested
        .and_then(|id| find(counters, id))
        .or_else(|| counters.first())
}
