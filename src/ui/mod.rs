//! Terminal client: a counter list and a counter detail screen.
//!
//! Each screen is an MVI triple (state, intent, reducer). Reducers are pure and
//! return an optional [`effect::Effect`]; [`app::App`] executes effects by
//! navigating or by handing commands to the network worker.

pub mod app;
pub mod detail;
pub mod effect;
pub mod events;
mod footer;
mod header;
pub mod input;
pub mod layout;
pub mod list;
pub mod mvi;
pub mod navigation;
pub mod render;
mod runtime;
pub mod terminal;
pub mod theme;
pub mod worker;

pub use runtime::run;
