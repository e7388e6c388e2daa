/// Marker trait for reducer-owned state.
///
/// `Default` is the state a component starts in and lets the controller
/// move the value out with `std::mem::take` while reducing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
