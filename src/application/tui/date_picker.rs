use chrono::{Duration, NaiveDate};

const DATE_LEN: usize = 10;

/// Editable `YYYY-MM-DD` field that never steps past `max`.
#[derive(Debug, Clone, PartialEq)]
pub struct DatePicker {
    value: String,
    max: NaiveDate,
}

impl DatePicker {
    pub fn new(initial: NaiveDate, max: NaiveDate) -> Self {
        Self {
            value: initial.min(max).format("%Y-%m-%d").to_string(),
            max,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn max(&self) -> NaiveDate {
        self.max
    }

    pub fn set(&mut self, date: NaiveDate) {
        self.value = date.min(self.max).format("%Y-%m-%d").to_string();
    }

    /// Typed characters; only digits and dashes are accepted.
    pub fn insert(&mut self, c: char) {
        if (c.is_ascii_digit() || c == '-') && self.value.len() < DATE_LEN {
            self.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Move the date by `days`, starting from `max` when the field does not
    /// hold a valid date.
    pub fn step(&mut self, days: i64) {
        let current = NaiveDate::parse_from_str(self.value.trim(), "%Y-%m-%d").unwrap_or(self.max);
        let next = current
            .checked_add_signed(Duration::days(days))
            .unwrap_or(current);
        self.set(next);
    }
}
