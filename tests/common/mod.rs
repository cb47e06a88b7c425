// tests/common/mod.rs

#![allow(dead_code)]

use scraper::{ElementRef, Html, Selector};

/// Wraps table rows into a page shaped like the mobile timetable site.
pub fn page(rows: &str) -> String {
    format!(
        "<html><head><title>Расписание</title></head><body>\n<table>\n{}\n</table>\n</body></html>",
        rows
    )
}

pub const DELIMITER_ROW: &str = r#"<tr><td class="delimiter" colspan="2"></td></tr>"#;

pub const HEADER_ROW: &str = r#"<tr><td class="tdheader"><a href="/table/4/1/1.htm"><b>409</b></a></td><td class="tdheader"><a href="/table/4/1/2.htm"><b>411</b></a></td></tr>"#;

pub const FOOTER_ROW: &str = r#"<tr><td class="tdfooter">Обновлено 01.09</td></tr>"#;

/// A page whose days hold the given rows; one delimiter before Monday and one
/// after each day, seven in total for six days.
pub fn week_page(days: &[&[&str]]) -> String {
    let mut rows = vec![HEADER_ROW.to_string(), DELIMITER_ROW.to_string()];
    for day in days {
        for row in *day {
            rows.push(row.to_string());
        }
        rows.push(DELIMITER_ROW.to_string());
    }
    rows.push(FOOTER_ROW.to_string());
    page(&rows.join("\n"))
}

pub fn first<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
    let selector = Selector::parse(css).unwrap();
    document
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("no element matches {}", css))
}
