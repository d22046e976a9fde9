//! Status and gender filtering over the loaded character list.
//!
//! Filtering only borrows: the output is an order-preserving subsequence of
//! references into the loaded slice.

mod options;
mod selection;

pub use options::{FilterOptions, GENDER_OPTIONS, STATUS_OPTIONS};
pub use selection::{FilterOutcome, FilterSelection, FilterValue};

/// Shown instead of cards when the selection excludes every character.
pub const NO_MATCHES_MESSAGE: &str = "No characters match the selected filters.";
