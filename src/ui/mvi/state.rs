/// Marker trait for screen state.
///
/// A state holds everything its view needs to render. `Default` is the
/// screen's state before its first fetch.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
