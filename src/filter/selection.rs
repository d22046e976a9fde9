use std::fmt;

use crate::api::Character;

/// One side of the selection: everything, or one lowercase value.
///
/// The value is only reachable through [`FilterValue::parse`], so a stored
/// selection is always lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterValue(Option<String>);

impl FilterValue {
    /// The "all" choice.
    pub const ALL: FilterValue = FilterValue(None);

    /// Parse a selection as typed by the user or authored in the options.
    ///
    /// Case is folded here so the comparison against entity fields is always
    /// lowercase on both sides.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        if lowered == "all" {
            FilterValue::ALL
        } else {
            FilterValue(Some(lowered))
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or("all")
    }

    pub fn is_all(&self) -> bool {
        self.0.is_none()
    }

    fn accepts(&self, field: &str) -> bool {
        match &self.0 {
            None => true,
            Some(value) => field.to_lowercase() == *value,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The (status, gender) pair currently applied to the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub status: FilterValue,
    pub gender: FilterValue,
}

/// Result of running the selection over a loaded list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome<'a> {
    Matches(Vec<&'a Character>),
    /// Nothing survived the filters. Shown as a message, not as an error.
    NoMatches,
}

impl<'a> FilterOutcome<'a> {
    pub fn len(&self) -> usize {
        match self {
            FilterOutcome::Matches(items) => items.len(),
            FilterOutcome::NoMatches => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FilterOutcome::NoMatches)
    }

    pub fn characters(&self) -> &[&'a Character] {
        match self {
            FilterOutcome::Matches(items) => items,
            FilterOutcome::NoMatches => &[],
        }
    }
}

impl FilterSelection {
    pub fn new(status: &str, gender: &str) -> Self {
        Self {
            status: FilterValue::parse(status),
            gender: FilterValue::parse(gender),
        }
    }

    /// Both predicates must hold.
    pub fn matches(&self, character: &Character) -> bool {
        self.status.accepts(&character.status) && self.gender.accepts(&character.gender)
    }

    /// Recompute the filtered view over the full loaded list.
    pub fn apply<'a>(&self, characters: &'a [Character]) -> FilterOutcome<'a> {
        let matched: Vec<&Character> = characters.iter().filter(|c| self.matches(c)).collect();
        if matched.is_empty() {
            FilterOutcome::NoMatches
        } else {
            FilterOutcome::Matches(matched)
        }
    }
}
