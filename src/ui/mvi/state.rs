/// Marker trait for view state.
///
/// States are cloned to produce new states and compared to skip redundant
/// redraws.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
