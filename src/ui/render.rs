use crate::card::CharacterCard;
use crate::filter::{FilterOutcome, NO_MATCHES_MESSAGE};
use crate::ui::browser::{BrowserState, LoadState};
use crate::ui::cards::CardGrid;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{HEADER_TEXT, SPINNER, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, state: &BrowserState, spinner_frame: usize, footer: &Footer) {
    let area = frame.area();
    let (header_area, body, footer_area) = layout_regions(area);

    frame.render_widget(Header::new().widget(state), header_area);
    frame.render_widget(Clear, body);

    match &state.load {
        LoadState::Pending => {
            let glyph = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
            render_message(frame, body, format!("{} Loading...", glyph), SPINNER);
        }
        LoadState::Failed { message } => {
            render_message(frame, body, format!("Error: {}", message), STATUS_ERROR);
        }
        LoadState::Succeeded { .. } => match state.filtered() {
            Some(FilterOutcome::Matches(characters)) => {
                let cards = characters
                    .iter()
                    .map(|character| CharacterCard::from_character(character))
                    .collect();
                frame.render_widget(CardGrid::new(cards, state.scroll), body);
            }
            _ => render_message(frame, body, NO_MATCHES_MESSAGE.to_string(), HEADER_TEXT),
        },
    }

    frame.render_widget(footer.widget(footer_area), footer_area);
}

fn render_message(frame: &mut Frame<'_>, body: Rect, text: String, color: Color) {
    let width = text.chars().count() as u16;
    let area = centered_rect_by_size(body, width, 1);
    let widget = Paragraph::new(Line::from(text))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
