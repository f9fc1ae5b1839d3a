use super::intent::Intent;
use super::state::UiState;
use crate::ui::effect::Effect;

/// The only place screen state changes.
///
/// `reduce` must stay free of side effects; work the screen wants done
/// afterwards is returned as an [`Effect`].
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Effect>);
}
