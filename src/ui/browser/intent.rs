use crate::api::Character;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BrowserIntent {
    /// Start a new activation: discard loaded data and selections, go back to
    /// pending. Results from older activations are ignored afterwards.
    Reload,
    /// The fetch for `generation` succeeded.
    Loaded {
        generation: u64,
        characters: Vec<Character>,
    },
    /// The fetch for `generation` failed. `message` is the user-facing text.
    LoadFailed { generation: u64, message: String },
    NextStatus,
    PreviousStatus,
    NextGender,
    PreviousGender,
    SetStatus(String),
    SetGender(String),
    /// Both selectors back to "all".
    ResetFilters,
    /// Terminal width changed; the grid now holds this many cards per row.
    SetColumns(usize),
    /// Move the card grid by `delta` rows.
    ScrollBy(isize),
    ScrollToTop,
}

impl Intent for BrowserIntent {}
