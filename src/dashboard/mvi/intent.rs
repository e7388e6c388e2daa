/// Marker trait for intents: clicks, key presses, network responses.
pub trait Intent: Send + 'static {}
