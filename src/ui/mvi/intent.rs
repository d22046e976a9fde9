/// Marker trait for intents: user actions (filter changes, scrolling,
/// reload) and system events (a load finishing).
pub trait Intent: Send + 'static {}
