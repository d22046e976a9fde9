use crate::api::{Character, CharacterClient, FetchError};
use crate::filter::FilterSelection;
use crate::ui::browser::{BrowserIntent, BrowserReducer, BrowserState};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use std::sync::mpsc::Sender;
use tokio::runtime::Handle;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Loaded data, selections and scroll (MVI pattern).
    browser: BrowserState,
    client: CharacterClient,
    runtime: Handle,
    events: Sender<AppEvent>,
    /// Card rows that fit in the body; drives page scrolling.
    page_rows: usize,
    spinner_frame: usize,
}

impl App {
    pub fn new(client: CharacterClient, runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            should_quit: false,
            browser: BrowserState::default(),
            client,
            runtime,
            events,
            page_rows: 1,
            spinner_frame: 0,
        }
    }

    pub fn state(&self) -> &BrowserState {
        &self.browser
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub fn page_rows(&self) -> usize {
        self.page_rows
    }

    pub fn dispatch(&mut self, intent: BrowserIntent) {
        dispatch_mvi!(self, browser, BrowserReducer, intent);
    }

    /// Start a new activation and issue its single fetch.
    ///
    /// Earlier in-flight fetches are neither cancelled nor deduplicated; their
    /// results arrive with an old generation and are dropped by the reducer.
    pub fn activate(&mut self) {
        self.dispatch(BrowserIntent::Reload);
        let generation = self.browser.generation;
        let client = self.client.clone();
        let events = self.events.clone();
        tracing::debug!(generation, "Activation started");

        self.runtime.spawn(async move {
            let result = client.fetch_characters().await;
            if events.send(AppEvent::Load { generation, result }).is_err() {
                tracing::trace!(generation, "Load result dropped (view gone)");
            }
        });
    }

    /// Activate and then apply a starting selection.
    pub fn activate_with(&mut self, selection: &FilterSelection) {
        self.activate();
        self.dispatch(BrowserIntent::SetStatus(selection.status.to_string()));
        self.dispatch(BrowserIntent::SetGender(selection.gender.to_string()));
    }

    pub fn on_load(&mut self, generation: u64, result: Result<Vec<Character>, FetchError>) {
        match result {
            Ok(characters) => self.dispatch(BrowserIntent::Loaded {
                generation,
                characters,
            }),
            Err(err) => {
                tracing::warn!(
                    generation,
                    kind = err.kind(),
                    details = %err.details(),
                    "Character fetch failed"
                );
                self.dispatch(BrowserIntent::LoadFailed {
                    generation,
                    message: err.user_message().to_string(),
                });
            }
        }
    }

    pub fn on_tick(&mut self) {
        if self.browser.is_pending() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    /// Record the body size in card columns and rows.
    pub fn on_resize(&mut self, columns: usize, page_rows: usize) {
        self.page_rows = page_rows.max(1);
        self.dispatch(BrowserIntent::SetColumns(columns));
    }
}
