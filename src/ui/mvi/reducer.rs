use super::intent::Intent;
use super::state::UiState;

/// The only place where view state changes.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure: no I/O, no logging side channels the state depends on.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
