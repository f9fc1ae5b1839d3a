use tallyboard::store::{Counter, CounterId};
use tallyboard::ui::detail::{DetailIntent, DetailReducer, DetailState};
use tallyboard::ui::effect::{Effect, Screen};
use tallyboard::ui::mvi::Reducer;

fn counter(id: i64, value: i64) -> Counter {
    Counter {
        counter_id: CounterId(id),
        counter_name: format!("Counter {id}"),
        value,
        group: None,
    }
}

fn two_counters() -> Vec<Counter> {
    vec![counter(1, 10), counter(2, 20)]
}

/// Visit number used by screens opened in these tests.
const VISIT: u64 = 3;

fn opened(requested: Option<i64>, counters: Vec<Counter>) -> DetailState {
    let state = DetailState::for_route(requested.map(CounterId), VISIT);
    let (state, _) = DetailReducer::reduce(state, DetailIntent::Load);
    DetailReducer::reduce(state, DetailIntent::Loaded { counters }).0
}

#[test]
fn load_requests_detail_fetch() {
    let state = DetailState::for_route(Some(CounterId(1)), 4);
    let (state, effect) = DetailReducer::reduce(state, DetailIntent::Load);
    assert!(state.in_flight);
    assert_eq!(
        effect,
        Some(Effect::FetchCounters {
            screen: Screen::Detail(4)
        })
    );
}

#[test]
fn selects_the_requested_counter() {
    let state = opened(Some(2), two_counters());
    assert_eq!(state.selected.as_ref().map(|c| c.value), Some(20));
    assert!(!state.in_flight);
    assert!(state.error.is_none());
}

#[test]
fn unknown_id_falls_back_to_first() {
    let state = opened(Some(99), two_counters());
    assert_eq!(state.selected.as_ref().map(|c| c.value), Some(10));
}

#[test]
fn unparseable_route_falls_back_to_first() {
    let state = opened(None, two_counters());
    assert_eq!(
        state.selected.as_ref().map(|c| c.counter_id),
        Some(CounterId(1))
    );
}

#[test]
fn empty_list_shows_error_instead_of_spinner() {
    let state = opened(Some(1), Vec::new());
    assert!(state.selected.is_none());
    assert!(!state.is_loading());
    assert_eq!(state.error.as_deref(), Some("No counters yet"));
}

#[test]
fn input_accepts_digits_only() {
    let mut state = DetailState::default();
    for ch in ['1', 'a', '-', '2'] {
        state = DetailReducer::reduce(state, DetailIntent::InputChar(ch)).0;
    }
    assert_eq!(state.input_value, "512");
    state = DetailReducer::reduce(state, DetailIntent::InputBackspace).0;
    assert_eq!(state.input_value, "51");
}

#[test]
fn increase_and_decrease_use_the_typed_magnitude() {
    let state = opened(Some(2), two_counters());

    let (state, effect) = DetailReducer::reduce(state, DetailIntent::Increase);
    assert!(state.in_flight);
    assert_eq!(
        effect,
        Some(Effect::Increment {
            id: CounterId(2),
            delta: 5,
            visit: VISIT
        })
    );

    let (_, effect) = DetailReducer::reduce(state, DetailIntent::Decrease);
    assert_eq!(
        effect,
        Some(Effect::Increment {
            id: CounterId(2),
            delta: -5,
            visit: VISIT
        })
    );
}

#[test]
fn empty_input_means_one() {
    let mut state = opened(Some(1), two_counters());
    state.input_value.clear();

    let (_, effect) = DetailReducer::reduce(state, DetailIntent::Decrease);
    assert_eq!(
        effect,
        Some(Effect::Increment {
            id: CounterId(1),
            delta: -1,
            visit: VISIT
        })
    );
}

#[test]
fn add_one_ignores_the_input() {
    let mut state = opened(Some(1), two_counters());
    state.input_value = "40".to_string();

    let (_, effect) = DetailReducer::reduce(state, DetailIntent::AddOne);
    assert_eq!(
        effect,
        Some(Effect::Increment {
            id: CounterId(1),
            delta: 1,
            visit: VISIT
        })
    );
}

#[test]
fn no_increment_without_selection() {
    let (state, effect) = DetailReducer::reduce(DetailState::default(), DetailIntent::Increase);
    assert!(effect.is_none());
    assert!(!state.in_flight);
}

#[test]
fn refresh_follows_the_selected_counter() {
    let state = opened(Some(2), two_counters());
    let (state, _) = DetailReducer::reduce(state, DetailIntent::AddOne);

    let refreshed = vec![counter(1, 10), counter(2, 21)];
    let (state, _) = DetailReducer::reduce(
        state,
        DetailIntent::Loaded {
            counters: refreshed,
        },
    );
    assert_eq!(state.selected.as_ref().map(|c| c.value), Some(21));
    assert!(!state.in_flight);
}

#[test]
fn refresh_reports_a_vanished_counter() {
    let state = opened(Some(2), two_counters());
    let (state, _) = DetailReducer::reduce(
        state,
        DetailIntent::Loaded {
            counters: vec![counter(1, 10)],
        },
    );
    assert!(state.selected.is_none());
    assert_eq!(state.error.as_deref(), Some("Counter 2 no longer exists"));
}

#[test]
fn failure_keeps_the_last_value() {
    let state = opened(Some(1), two_counters());
    let (state, _) = DetailReducer::reduce(state, DetailIntent::Increase);
    let (state, _) = DetailReducer::reduce(
        state,
        DetailIntent::RequestFailed {
            message: "Server unreachable".to_string(),
        },
    );
    assert_eq!(state.selected.as_ref().map(|c| c.value), Some(10));
    assert!(!state.in_flight);
    assert_eq!(state.error.as_deref(), Some("Server unreachable"));
}
