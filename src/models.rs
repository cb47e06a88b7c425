use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Number of day lists in a [`WeekSchedule`] (Monday through Sunday).
pub const DAYS_IN_WEEK: usize = 7;

/// A field of [`SubjectFields`] that may hold zero, one or several values.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldValue {
    /// Nothing was recognized.
    #[default]
    Absent,
    /// Exactly one value.
    Single(String),
    /// Two or more values, in the order they appear in the source text.
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Collapses a list of matches: empty becomes `Absent`, a single element
    /// becomes `Single`.
    pub fn from_vec(mut values: Vec<String>) -> Self {
        match values.len() {
            0 => FieldValue::Absent,
            1 => FieldValue::Single(values.remove(0)),
            _ => FieldValue::Multiple(values),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// All values in order, empty when absent.
    pub fn values(&self) -> Vec<&str> {
        match self {
            FieldValue::Absent => Vec::new(),
            FieldValue::Single(value) => vec![value.as_str()],
            FieldValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// The content of a subject cell.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Subject {
    /// A plain cell with one subject string.
    Single(String),
    /// A cell holding a nested table, one string per inner cell
    /// (different streams or subgroups in the same slot).
    Multiple(Vec<String>),
}

impl Subject {
    /// Every subject string of the cell, in document order.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Subject::Single(text) => vec![text.as_str()],
            Subject::Multiple(texts) => texts.iter().map(String::as_str).collect(),
        }
    }
}

/// How often a subject occurs, as marked by the subject cell class.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    /// Every week (`td.tditem1`).
    Weekly,
    /// Only on odd or only on even weeks (`td.tdsmall1`). Which one is not
    /// encoded in the markup this crate reads.
    Biweekly,
}

/// Start and end of a class, as printed in the time cell.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

impl TimeSlot {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parses both ends as `H:MM` clock times.
    ///
    /// Returns `None` if either end is not a clock time; the raw strings are
    /// never validated during parsing, so this is the place to find out.
    pub fn bounds(&self) -> Option<(NaiveTime, NaiveTime)> {
        let start = NaiveTime::parse_from_str(self.start.trim(), "%H:%M").ok()?;
        let end = NaiveTime::parse_from_str(self.end.trim(), "%H:%M").ok()?;
        Some((start, end))
    }
}

/// One table row of a weekday.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Absent for rows without a time cell (typically the second half of a
    /// biweekly slot).
    pub time: Option<TimeSlot>,
    /// Absent for an empty slot.
    pub subject: Option<Subject>,
    /// Set whenever `subject` is.
    pub occurrence: Option<Occurrence>,
}

/// Entries of a whole week, indexed from Monday (0) to Sunday (6).
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct WeekSchedule {
    days: [Vec<Entry>; DAYS_IN_WEEK],
}

impl WeekSchedule {
    pub fn new(days: [Vec<Entry>; DAYS_IN_WEEK]) -> Self {
        Self { days }
    }

    /// Entries of the given weekday index, `None` past Sunday.
    pub fn day(&self, index: usize) -> Option<&[Entry]> {
        self.days.get(index).map(Vec::as_slice)
    }

    /// Entries of the given weekday.
    pub fn on(&self, weekday: Weekday) -> &[Entry] {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    /// `(index, entries)` pairs from Monday to Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Entry])> {
        self.days.iter().map(Vec::as_slice).enumerate()
    }

    pub fn total_entries(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }
}

/// A subject string decomposed into its parts.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SubjectFields {
    #[serde(default, skip_serializing_if = "FieldValue::is_absent")]
    pub group: FieldValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    /// Always present; falls back to the whole input when nothing else matched.
    pub name: String,
    #[serde(default, skip_serializing_if = "FieldValue::is_absent")]
    pub teacher: FieldValue,
}

/// Everything read from one timetable page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Timetable {
    pub schedule: WeekSchedule,
    /// Group numbers from the page header, duplicates kept.
    pub groups: Vec<String>,
}
