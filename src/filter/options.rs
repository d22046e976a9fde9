use super::FilterValue;

/// Status choices in the order the selector cycles through them.
pub const STATUS_OPTIONS: [&str; 4] = ["all", "alive", "dead", "unknown"];

/// Gender choices in the order the selector cycles through them.
pub const GENDER_OPTIONS: [&str; 4] = ["all", "male", "female", "unknown"];

/// A fixed list of selector choices.
#[derive(Debug, Clone, Copy)]
pub struct FilterOptions {
    options: &'static [&'static str],
}

impl FilterOptions {
    pub const STATUS: FilterOptions = FilterOptions {
        options: &STATUS_OPTIONS,
    };
    pub const GENDER: FilterOptions = FilterOptions {
        options: &GENDER_OPTIONS,
    };

    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    /// Choice after `current`, wrapping. A value outside the list restarts at
    /// the first option.
    pub fn next(&self, current: &FilterValue) -> FilterValue {
        let next = match self.position(current) {
            Some(idx) => (idx + 1) % self.options.len(),
            None => 0,
        };
        FilterValue::parse(self.options[next])
    }

    /// Choice before `current`, wrapping.
    pub fn previous(&self, current: &FilterValue) -> FilterValue {
        let len = self.options.len();
        let previous = match self.position(current) {
            Some(0) | None => len - 1,
            Some(idx) => idx - 1,
        };
        FilterValue::parse(self.options[previous])
    }

    fn position(&self, current: &FilterValue) -> Option<usize> {
        self.options
            .iter()
            .position(|option| *option == current.as_str())
    }
}
