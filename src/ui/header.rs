use crate::card::capitalize;
use crate::filter::FilterValue;
use crate::ui::browser::{BrowserState, LoadState};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, TITLE};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE_TEXT: &str = "Character List";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &BrowserState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let value_style = text_style.add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let title = Line::from(Span::styled(
            TITLE_TEXT,
            Style::default().fg(TITLE).add_modifier(Modifier::BOLD),
        ));
        let selectors = Line::from(vec![
            Span::styled("Status: ", text_style),
            Span::styled(selector_label(&state.selection.status), value_style),
            Span::styled("  │  ", separator_style),
            Span::styled("Gender: ", text_style),
            Span::styled(selector_label(&state.selection.gender), value_style),
            Span::styled("  │  ", separator_style),
            Span::styled(count_label(state), text_style),
        ]);

        Paragraph::new(vec![title, selectors])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn selector_label(value: &FilterValue) -> String {
    format!("‹ {} ›", capitalize(value.as_str()))
}

fn count_label(state: &BrowserState) -> String {
    match &state.load {
        LoadState::Pending => "Loading...".to_string(),
        LoadState::Failed { .. } => "Unavailable".to_string(),
        LoadState::Succeeded { characters } => {
            let shown = state.filtered().map(|outcome| outcome.len()).unwrap_or(0);
            format!("Showing {} of {}", shown, characters.len())
        }
    }
}
