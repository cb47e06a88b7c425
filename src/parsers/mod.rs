pub mod cell;
pub mod groups;
pub mod row;
pub mod subject;
pub mod weekdays;

use crate::error::Result;
use crate::models::Timetable;
use scraper::Html;

/// Parses a whole timetable page: the weekly schedule and the group numbers
/// in its header.
pub fn parse_timetable_from_html(html: &str) -> Result<Timetable> {
    let document = Html::parse_document(html);
    parse_timetable(&document)
}

/// Same as [`parse_timetable_from_html`] for an already parsed document.
pub fn parse_timetable(document: &Html) -> Result<Timetable> {
    let schedule = row::parse_week(document)?;
    let groups = groups::parse_group_numbers(document);
    Ok(Timetable { schedule, groups })
}
