use crate::models::Subject;
use regex::Regex;
use scraper::{ElementRef, Node, Selector};
use std::sync::LazyLock;

static NESTED_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("invalid selector: table"));
static NESTED_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("invalid selector: td"));
static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +").expect("invalid regex: space run"));

/// Renders each direct child of `element` to plain text.
///
/// Text nodes are kept as they are. Inline elements contribute their
/// descendant text, one space between pieces, so `<nobr>5-18</nobr>` becomes
/// `5-18` and `<br>` becomes an empty piece. Comments and other node kinds
/// render to nothing.
pub fn child_texts(element: ElementRef<'_>) -> Vec<String> {
    element
        .children()
        .map(|child| match child.value() {
            Node::Text(text) => String::from(&**text),
            Node::Element(_) => ElementRef::wrap(child)
                .map(|inline| inline.text().collect::<Vec<_>>().join(" "))
                .unwrap_or_default(),
            _ => String::new(),
        })
        .collect()
}

/// Joins rendered pieces into one clean line.
///
/// Non-breaking spaces become plain spaces, pieces are joined with a space,
/// runs of spaces collapse to one and the result is trimmed.
///
/// ```
/// use phys_timetable::parsers::cell::join_fragments;
///
/// let text = join_fragments(["Численные методы ", "5-18", " проф.\u{a0}Галкин"]);
/// assert_eq!(text, "Численные методы 5-18 проф. Галкин");
/// ```
pub fn join_fragments<I, S>(pieces: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = pieces
        .into_iter()
        .map(|piece| piece.as_ref().replace('\u{a0}', " "))
        .collect::<Vec<_>>()
        .join(" ");

    SPACE_RUN.replace_all(&joined, " ").trim().to_string()
}

/// Flattens the mixed text and markup content of a cell into one line.
pub fn linearize(cell: ElementRef<'_>) -> String {
    join_fragments(child_texts(cell))
}

/// Reads a subject cell.
///
/// A cell holding a nested table lists a different subject per inner cell
/// (per stream or subgroup); each inner cell is linearized on its own. Any
/// other cell is a single subject.
pub fn structure_cell(cell: ElementRef<'_>) -> Subject {
    match cell.select(&NESTED_TABLE).next() {
        Some(table) => Subject::Multiple(table.select(&NESTED_CELL).map(linearize).collect()),
        None => Subject::Single(linearize(cell)),
    }
}
