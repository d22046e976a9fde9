use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, TITLE};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str = " s/S: Status │ g/G: Gender │ a: All │ r: Reload │ ↑/↓: Scroll │ q: Quit";
const SHORT_HINTS: &str = " s g a r q";

/// Key hints on the left, data source and version on the right.
pub struct Footer {
    source: String,
}

impl Footer {
    /// `source` is the host the characters are loaded from.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let version = format!(" │ v{} ", VERSION);

        let content_width = area.width.saturating_sub(2) as usize;
        let right_width = self.source.chars().count() + version.chars().count();
        let hints = if HINTS.chars().count() + right_width <= content_width {
            HINTS
        } else {
            SHORT_HINTS
        };
        let gap = content_width.saturating_sub(hints.chars().count() + right_width);

        let line = Line::from(vec![
            Span::styled(hints, dim),
            Span::raw(" ".repeat(gap)),
            Span::styled(self.source.clone(), Style::default().fg(TITLE)),
            Span::styled(version, Style::default().fg(HEADER_SEPARATOR)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
