//! Per-character display model.
//!
//! Cards carry only what the view needs: labels and the tone each badge is
//! drawn in. Colors are chosen by the theme, not here.

use crate::api::Character;

/// Visual class of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Positive,
    Negative,
    Masculine,
    Feminine,
    Neutral,
}

impl BadgeTone {
    pub fn for_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "alive" => BadgeTone::Positive,
            "dead" => BadgeTone::Negative,
            _ => BadgeTone::Neutral,
        }
    }

    pub fn for_gender(gender: &str) -> Self {
        match gender.to_lowercase().as_str() {
            "male" => BadgeTone::Masculine,
            "female" => BadgeTone::Feminine,
            _ => BadgeTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: BadgeTone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCard<'a> {
    pub id: i64,
    pub name: &'a str,
    pub image: &'a str,
    pub status: Badge,
    pub gender: Badge,
}

impl<'a> CharacterCard<'a> {
    pub fn from_character(character: &'a Character) -> Self {
        Self {
            id: character.id,
            name: &character.name,
            image: character.image.src(),
            status: Badge {
                label: capitalize(&character.status),
                tone: BadgeTone::for_status(&character.status),
            },
            gender: Badge {
                label: capitalize(&character.gender),
                tone: BadgeTone::for_gender(&character.gender),
            },
        }
    }

    /// Single-line rendering used by print mode.
    pub fn summary_line(&self) -> String {
        format!(
            "#{} {} [{}] [{}] {}",
            self.id, self.name, self.status.label, self.gender.label, self.image
        )
    }
}

/// Uppercase the first character, leave the rest as-is ("unknown" → "Unknown").
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ImageSource;

    #[test]
    fn status_tone_follows_lowercase_value() {
        assert_eq!(BadgeTone::for_status("Alive"), BadgeTone::Positive);
        assert_eq!(BadgeTone::for_status("DEAD"), BadgeTone::Negative);
        assert_eq!(BadgeTone::for_status("unknown"), BadgeTone::Neutral);
    }

    #[test]
    fn gender_tone_follows_lowercase_value() {
        assert_eq!(BadgeTone::for_gender("Male"), BadgeTone::Masculine);
        assert_eq!(BadgeTone::for_gender("female"), BadgeTone::Feminine);
        assert_eq!(BadgeTone::for_gender("Genderless"), BadgeTone::Neutral);
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("unknown"), "Unknown");
        assert_eq!(capitalize("Alive"), "Alive");
        assert_eq!(capitalize("mIXed"), "MIXed");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn card_borrows_from_character() {
        let character = Character {
            id: 7,
            name: "Abradolf Lincler".to_string(),
            status: "unknown".to_string(),
            gender: "Male".to_string(),
            image: ImageSource::Local {
                src: "/img/7.png".to_string(),
                width: None,
                height: None,
            },
        };
        let card = CharacterCard::from_character(&character);
        assert_eq!(card.image, "/img/7.png");
        assert_eq!(card.status.label, "Unknown");
        assert_eq!(card.status.tone, BadgeTone::Neutral);
        assert_eq!(card.gender.tone, BadgeTone::Masculine);
        assert_eq!(
            card.summary_line(),
            "#7 Abradolf Lincler [Unknown] [Male] /img/7.png"
        );
    }
}
