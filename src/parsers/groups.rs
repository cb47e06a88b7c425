use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static HEADER_LABEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".tdheader a > b").expect("invalid selector: header label"));
// The program letter appears both as Latin M and Cyrillic М.
static GROUP_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d\d\d[MmМм]?").expect("invalid regex: group number"));

/// Extracts group numbers from the page header.
///
/// Every bold label inside a header link is scanned for `NNN` optionally
/// followed by a master's program letter (`102M`). Matches are returned in
/// document order, duplicates included.
pub fn parse_group_numbers(document: &Html) -> Vec<String> {
    document
        .select(&HEADER_LABEL)
        .flat_map(|label| {
            let text = label.text().collect::<String>();
            GROUP_NUMBER
                .find_iter(&text)
                .map(|found| found.as_str().to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}
