use crate::error::{Result, TimetableError};
use crate::models::DAYS_IN_WEEK;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, warn};

static DELIMITER_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.delimiter").expect("invalid selector: delimiter"));

/// Table rows of a timetable page grouped by weekday, Monday first.
#[derive(Debug)]
pub struct WeekdayBuckets<'a> {
    days: [Vec<ElementRef<'a>>; DAYS_IN_WEEK],
}

impl<'a> WeekdayBuckets<'a> {
    /// Rows of the given weekday index, `None` past Sunday.
    pub fn day(&self, index: usize) -> Option<&[ElementRef<'a>]> {
        self.days.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[ElementRef<'a>])> {
        self.days.iter().map(Vec::as_slice).enumerate()
    }

    pub fn total_rows(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }
}

/// Collects the rows that carry a delimiter cell, in document order.
fn delimiter_rows(document: &Html) -> Vec<ElementRef<'_>> {
    let mut rows: Vec<ElementRef> = Vec::new();

    for cell in document.select(&DELIMITER_CELL) {
        let Some(row) = cell
            .parent()
            .and_then(ElementRef::wrap)
            .filter(|parent| parent.value().name() == "tr")
        else {
            continue;
        };

        // A row with several delimiter cells is still one boundary.
        if rows.last().map(|last| last.id()) != Some(row.id()) {
            rows.push(row);
        }
    }

    rows
}

/// Splits the timetable table into weekday buckets.
///
/// Rows marked with a `td.delimiter` cell separate the header, the days of
/// the week and the footer. Walking forward from the first delimiter row, every
/// further delimiter row advances the weekday and every other `<tr>` sibling
/// lands in the current weekday's bucket. The walk ends at the last delimiter
/// row.
///
/// Fails with [`TimetableError::TooManyWeekdays`] if the delimiters describe
/// more than seven days: the page layout has changed and nothing parsed from it
/// can be trusted.
pub fn split_weekdays(document: &Html) -> Result<WeekdayBuckets<'_>> {
    let markers = delimiter_rows(document);

    let (Some(first), Some(last)) = (markers.first(), markers.last()) else {
        warn!("No delimiter rows on the page");
        return Err(TimetableError::NoDelimiters);
    };

    let marker_ids: HashSet<_> = markers.iter().map(|row| row.id()).collect();
    let last_id = last.id();

    let mut days: [Vec<ElementRef>; DAYS_IN_WEEK] = Default::default();
    let mut weekday = 0;
    let mut cursor = **first;

    while cursor.id() != last_id {
        cursor = match cursor.next_sibling() {
            Some(next) => next,
            None => {
                warn!(weekday, "Ran out of rows before the last delimiter");
                return Err(TimetableError::UnterminatedWeek);
            }
        };

        if marker_ids.contains(&cursor.id()) {
            weekday += 1;
            if weekday >= DAYS_IN_WEEK {
                warn!(delimiters = markers.len(), "Too many weekday delimiters");
                return Err(TimetableError::TooManyWeekdays);
            }
            continue;
        }

        // Whitespace between rows shows up as text siblings.
        if let Some(row) = ElementRef::wrap(cursor) {
            if row.value().name() == "tr" {
                days[weekday].push(row);
            }
        }
    }

    debug!(
        delimiters = markers.len(),
        rows = ?days.iter().map(Vec::len).collect::<Vec<_>>(),
        "Split timetable rows by weekday"
    );

    Ok(WeekdayBuckets { days })
}
