//! Model-View-Intent primitives for the browser view.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── key press / load ────┘
//! ```
//!
//! - **State**: everything the view draws from
//! - **Intent**: key presses and load results
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
