use crate::error::{Result, TimetableError};
use crate::models::{DAYS_IN_WEEK, Entry, Occurrence, TimeSlot, WeekSchedule};
use crate::parsers::cell::{child_texts, structure_cell};
use crate::parsers::weekdays::split_weekdays;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::warn;

static TIME_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.tdtime").expect("invalid selector: time cell"));
static SUBJECT_CELL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("td.tditem1, td.tdsmall1").expect("invalid selector: subject cell")
});

const BIWEEKLY_CLASS: &str = "tdsmall1";

/// Returns the only element matching `selector`, `None` if there is none.
/// More than one match is reported as `too_many`.
fn single_cell<'a>(
    row: ElementRef<'a>,
    selector: &Selector,
    too_many: TimetableError,
) -> Result<Option<ElementRef<'a>>> {
    let mut cells = row.select(selector);
    let first = cells.next();
    if cells.next().is_some() {
        warn!(html = %row.html(), "Unexpected row layout: {}", too_many);
        return Err(too_many);
    }
    Ok(first)
}

fn parse_time(cell: ElementRef<'_>) -> Result<TimeSlot> {
    let pieces = child_texts(cell);
    match (pieces.first(), pieces.last()) {
        (Some(start), Some(end)) => Ok(TimeSlot::new(start.as_str(), end.as_str())),
        _ => {
            warn!(html = %cell.html(), "Time cell has no content");
            Err(TimetableError::EmptyTimeCell)
        }
    }
}

fn occurrence_of(cell: ElementRef<'_>) -> Occurrence {
    if cell.value().classes().any(|class| class == BIWEEKLY_CLASS) {
        Occurrence::Biweekly
    } else {
        Occurrence::Weekly
    }
}

/// Parses one timetable row into its time slot and subject.
///
/// The time cell (`td.tdtime`) holds start and end as its first and last
/// pieces of content; they are kept verbatim. The subject cell is either
/// weekly (`td.tditem1`) or biweekly (`td.tdsmall1`). Either cell may be
/// missing, but two of a kind means the markup is not what this parser
/// understands.
pub fn parse_row(row: ElementRef<'_>) -> Result<Entry> {
    let time = single_cell(row, &TIME_CELL, TimetableError::TooManyTimeCells)?
        .map(parse_time)
        .transpose()?;

    let subject_cell = single_cell(row, &SUBJECT_CELL, TimetableError::TooManySubjectCells)?;

    Ok(Entry {
        time,
        subject: subject_cell.map(structure_cell),
        occurrence: subject_cell.map(occurrence_of),
    })
}

/// Parses every weekday of a timetable page, keeping row order.
pub fn parse_week(document: &Html) -> Result<WeekSchedule> {
    let buckets = split_weekdays(document)?;

    let mut days: [Vec<Entry>; DAYS_IN_WEEK] = Default::default();
    for (index, rows) in buckets.iter() {
        days[index] = rows
            .iter()
            .map(|row| parse_row(*row))
            .collect::<Result<Vec<_>>>()?;
    }

    Ok(WeekSchedule::new(days))
}
