//! String-keyed routes and the back stack.

use std::fmt;

use crate::store::CounterId;

/// A destination. Paths are `list` and `counter/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    /// `None` when the path segment is not a number.
    Counter(Option<CounterId>),
}

impl Route {
    pub fn counter(id: CounterId) -> Self {
        Route::Counter(Some(id))
    }

    pub fn parse(path: &str) -> Option<Self> {
        if path == "list" {
            return Some(Route::List);
        }
        let raw = path.strip_prefix("counter/")?;
        Some(Route::Counter(raw.parse::<i64>().ok().map(CounterId)))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => write!(f, "list"),
            Route::Counter(Some(id)) => write!(f, "counter/{id}"),
            Route::Counter(None) => write!(f, "counter/"),
        }
    }
}

/// Back stack with `list` at the bottom.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::List],
        }
    }

    pub fn current(&self) -> &Route {
        // The stack is never empty: pop() refuses to remove the start route.
        &self.stack[self.stack.len() - 1]
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(%route, "navigate");
        self.stack.push(route);
    }

    /// Pop the current route. Returns false at the start destination.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
