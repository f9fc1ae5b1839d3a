use crate::ui::effect::{Effect, Screen};
use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::ListState;
use crate::ui::mvi::Reducer;
use crate::ui::navigation::Route;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Effect>) {
        match intent {
            ListIntent::Load => (
                ListState {
                    loading: true,
                    ..state
                },
                Some(Effect::FetchCounters {
                    screen: Screen::List,
                }),
            ),
            ListIntent::Loaded { counters } => {
                let cursor = state.cursor.min(counters.len().saturating_sub(1));
                (
                    ListState {
                        counters,
                        cursor,
                        loading: false,
                        error: None,
                    },
                    None,
                )
            }
            // Rows from an earlier fetch stay visible under the error line.
            ListIntent::LoadFailed { message } => (
                ListState {
                    loading: false,
                    error: Some(message),
                    ..state
                },
                None,
            ),
            ListIntent::MoveUp => {
                let cursor = if state.cursor == 0 {
                    state.counters.len().saturating_sub(1)
                } else {
                    state.cursor - 1
                };
                (ListState { cursor, ..state }, None)
            }
            ListIntent::MoveDown => {
                let cursor = if state.cursor + 1 >= state.counters.len() {
                    0
                } else {
                    state.cursor + 1
                };
                (ListState { cursor, ..state }, None)
            }
            ListIntent::Open => {
                let effect = state.highlighted().map(|counter| {
                    Effect::Navigate(Route::counter(counter.counter_id).to_string())
                });
                (state, effect)
            }
        }
    }
}
