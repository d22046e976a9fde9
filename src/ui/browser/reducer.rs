use crate::filter::{FilterOptions, FilterSelection, FilterValue};
use crate::ui::browser::intent::BrowserIntent;
use crate::ui::browser::state::{BrowserState, LoadState};
use crate::ui::mvi::Reducer;

pub struct BrowserReducer;

impl Reducer for BrowserReducer {
    type State = BrowserState;
    type Intent = BrowserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowserIntent::Reload => BrowserState {
                load: LoadState::Pending,
                selection: FilterSelection::default(),
                scroll: 0,
                columns: state.columns,
                generation: state.generation.wrapping_add(1),
            },
            BrowserIntent::Loaded {
                generation,
                characters,
            } => {
                if !accepts_result(&state, generation) {
                    return state;
                }
                BrowserState {
                    load: LoadState::Succeeded { characters },
                    ..state
                }
            }
            BrowserIntent::LoadFailed {
                generation,
                message,
            } => {
                if !accepts_result(&state, generation) {
                    return state;
                }
                BrowserState {
                    load: LoadState::Failed { message },
                    ..state
                }
            }
            BrowserIntent::NextStatus => {
                let status = FilterOptions::STATUS.next(&state.selection.status);
                with_status(state, status)
            }
            BrowserIntent::PreviousStatus => {
                let status = FilterOptions::STATUS.previous(&state.selection.status);
                with_status(state, status)
            }
            BrowserIntent::NextGender => {
                let gender = FilterOptions::GENDER.next(&state.selection.gender);
                with_gender(state, gender)
            }
            BrowserIntent::PreviousGender => {
                let gender = FilterOptions::GENDER.previous(&state.selection.gender);
                with_gender(state, gender)
            }
            BrowserIntent::SetStatus(raw) => with_status(state, FilterValue::parse(&raw)),
            BrowserIntent::SetGender(raw) => with_gender(state, FilterValue::parse(&raw)),
            BrowserIntent::ResetFilters => BrowserState {
                selection: FilterSelection::default(),
                scroll: 0,
                ..state
            },
            BrowserIntent::SetColumns(columns) => {
                let mut state = BrowserState {
                    columns: columns.max(1),
                    ..state
                };
                state.scroll = state.scroll.min(state.last_row());
                state
            }
            BrowserIntent::ScrollBy(delta) => {
                let scroll = state
                    .scroll
                    .saturating_add_signed(delta)
                    .min(state.last_row());
                BrowserState { scroll, ..state }
            }
            BrowserIntent::ScrollToTop => BrowserState { scroll: 0, ..state },
        }
    }
}

/// A result applies only to the current activation while it is still pending.
fn accepts_result(state: &BrowserState, generation: u64) -> bool {
    if generation != state.generation {
        tracing::debug!(
            stale = generation,
            current = state.generation,
            "Discarding load result from an earlier activation"
        );
        return false;
    }
    state.is_pending()
}

fn with_status(mut state: BrowserState, status: FilterValue) -> BrowserState {
    state.selection.status = status;
    state.scroll = 0;
    state
}

fn with_gender(mut state: BrowserState, gender: FilterValue) -> BrowserState {
    state.selection.gender = gender;
    state.scroll = 0;
    state
}
