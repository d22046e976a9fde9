use crate::api::Character;
use crate::filter::{FilterOutcome, FilterSelection};
use crate::ui::mvi::UiState;

/// Load lifecycle of one activation.
///
/// `Succeeded` and `Failed` are terminal; only a reload returns to `Pending`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Succeeded {
        characters: Vec<Character>,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowserState {
    pub load: LoadState,
    pub selection: FilterSelection,
    /// First visible card row.
    pub scroll: usize,
    /// Cards per grid row at the current terminal width; 0 before the first
    /// layout and treated as 1.
    pub columns: usize,
    /// Activation counter; load results carry the value they were started with.
    pub generation: u64,
}

impl UiState for BrowserState {}

impl BrowserState {
    pub fn is_pending(&self) -> bool {
        matches!(self.load, LoadState::Pending)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Loaded list, if the activation succeeded.
    pub fn characters(&self) -> Option<&[Character]> {
        match &self.load {
            LoadState::Succeeded { characters } => Some(characters),
            _ => None,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns.max(1)
    }

    /// Index of the last card row of the filtered view.
    pub fn last_row(&self) -> usize {
        self.filtered()
            .map(|outcome| outcome.len().div_ceil(self.columns()))
            .unwrap_or(0)
            .saturating_sub(1)
    }

    /// Filtered view of the loaded list under the current selection.
    pub fn filtered(&self) -> Option<FilterOutcome<'_>> {
        self.characters()
            .map(|characters| self.selection.apply(characters))
    }
}
