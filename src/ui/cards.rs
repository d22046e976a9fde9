//! Card grid widget.

use crate::card::{Badge, CharacterCard};
use crate::ui::theme::{badge_background, BADGE_TEXT, CARD_BORDER, CARD_NAME, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Minimum card width including borders.
pub const CARD_WIDTH: u16 = 32;
/// Card height including borders.
pub const CARD_HEIGHT: u16 = 6;

/// Number of card columns that fit in `width`.
pub fn columns_for(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

/// Number of full card rows that fit in `height`.
pub fn rows_for(height: u16) -> usize {
    (height / CARD_HEIGHT).max(1) as usize
}

pub struct CardGrid<'a> {
    cards: Vec<CharacterCard<'a>>,
    scroll: usize,
}

impl<'a> CardGrid<'a> {
    pub fn new(cards: Vec<CharacterCard<'a>>, scroll: usize) -> Self {
        Self { cards, scroll }
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.cards.is_empty() {
            return;
        }

        let columns = columns_for(area.width);
        let card_width = area.width / columns as u16;
        let total_rows = self.cards.len().div_ceil(columns);
        let first_row = self.scroll.min(total_rows.saturating_sub(1));

        let mut y = area.y;
        for row in self.cards.chunks(columns).skip(first_row) {
            if y + CARD_HEIGHT > area.y + area.height {
                break;
            }
            for (col, card) in row.iter().enumerate() {
                let rect = Rect {
                    x: area.x + col as u16 * card_width,
                    y,
                    width: card_width,
                    height: CARD_HEIGHT,
                };
                card_widget(card).render(rect, buf);
            }
            y += CARD_HEIGHT;
        }
    }
}

fn card_widget<'a>(card: &CharacterCard<'a>) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER))
        .title(Span::styled(
            format!(" {} ", card.name),
            Style::default().fg(CARD_NAME).add_modifier(Modifier::BOLD),
        ));

    let lines = vec![
        Line::from(Span::styled(
            card.image,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from(vec![
            badge_span(&card.status),
            Span::raw("  "),
            badge_span(&card.gender),
        ]),
    ];

    Paragraph::new(lines).block(block)
}

fn badge_span(badge: &Badge) -> Span<'static> {
    Span::styled(
        format!(" {} ", badge.label),
        Style::default()
            .fg(BADGE_TEXT)
            .bg(badge_background(badge.tone)),
    )
}
