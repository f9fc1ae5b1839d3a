/// Marker trait for intents: key presses and network results addressed to a screen.
pub trait Intent: Send + 'static {}
