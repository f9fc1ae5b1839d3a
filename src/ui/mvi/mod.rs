//! Model-View-Intent primitives for the screens.
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effect?) ──→ View
//!    ↑                        │
//!    └── network results ─────┘
//! ```
//!
//! Reducers stay pure; anything that touches the network or the navigator is
//! returned as an [`Effect`](crate::ui::effect::Effect) for the app to run.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
