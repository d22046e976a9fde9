use ratatui::style::Color;

use crate::card::BadgeTone;

pub const TITLE: Color = Color::Rgb(0xdb, 0x27, 0x77);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CARD_BORDER: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
pub const CARD_NAME: Color = Color::Rgb(0xdb, 0x27, 0x77);
pub const BADGE_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SPINNER: Color = Color::Rgb(0xec, 0x48, 0x99);

pub fn badge_background(tone: BadgeTone) -> Color {
    match tone {
        BadgeTone::Positive => Color::Rgb(0x4a, 0xde, 0x80),
        BadgeTone::Negative => Color::Rgb(0xf8, 0x71, 0x71),
        BadgeTone::Masculine => Color::Rgb(0x60, 0xa5, 0xfa),
        BadgeTone::Feminine => Color::Rgb(0xf4, 0x72, 0xb6),
        BadgeTone::Neutral => Color::Rgb(0x9c, 0xa3, 0xaf),
    }
}
