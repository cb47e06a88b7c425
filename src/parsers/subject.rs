//! Decomposition of a linearized subject string.
//!
//! A subject string looks like
//! `409, 411 - 414, 418, 438 - Численные методы в физике 5-18 проф. Галкин В. И.`:
//! an optional group list ending in ` - `, the subject name, a room and the
//! teacher. Nothing in the string is delimited reliably, so the fields are
//! recovered with a fixed sequence of patterns, each stage feeding the next:
//!
//! 1. [`find_groups`]: every `NNN` group number.
//! 2. [`find_room`]: the room, only if exactly one room-like token exists.
//! 3. [`extract_name`]: the text between the group list and the room.
//! 4. [`teacher_region`]: the text after the room (or after the name).
//! 5. [`split_teachers`]: up to two teachers, split after the first pair of
//!    initials.
//!
//! Known limitations:
//! - Without a room the teacher stays part of the name and no teacher is
//!   reported.
//! - Rooms are only recognized in the faculty numbering (`Ц-12`, `5-51`), as a
//!   department (`каф`) or a language lab (`Л.каб.`). Other schemes are missed
//!   or cut short: `ГЗ-13эт.` is read as `З-13`.
//! - A name containing ` - ` loses everything up to it to the group list.

use crate::models::{FieldValue, SubjectFields};
use regex::Regex;
use std::sync::LazyLock;

static GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d\d\d[^., ]?").expect("invalid regex: group"));
static ROOM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[А-Яа-яЁёA-Za-z0-9]-\d\d|каф|Л.каб.").expect("invalid regex: room")
});
static INITIALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-zА-Яа-яЁё]\.\s?[A-Za-zА-Яа-яЁё]\.").expect("invalid regex: initials")
});

/// Ends the group list in front of the name.
const GROUP_SEPARATOR: &str = " - ";

/// All group numbers in the string, in order.
pub fn find_groups(subject: &str) -> Vec<String> {
    GROUP
        .find_iter(subject)
        .map(|found| found.as_str().to_string())
        .collect()
}

/// The room token, when the string contains exactly one.
///
/// Several room-like tokens are ambiguous and yield `None`, leaving the room
/// inside the name or teacher.
pub fn find_room(subject: &str) -> Option<&str> {
    let mut rooms = ROOM.find_iter(subject);
    let room = rooms.next()?;
    match rooms.next() {
        Some(_) => None,
        None => Some(room.as_str()),
    }
}

/// The subject name: the group list prefix is dropped and, when a room is
/// known, so is everything from the room on.
///
/// The group list runs up to the last ` - ` in front of the room.
pub fn extract_name(subject: &str, room: Option<&str>) -> String {
    let head = match room.and_then(|room| subject.rfind(room)) {
        Some(room_start) => &subject[..room_start],
        None => subject,
    };
    let name = match head.rfind(GROUP_SEPARATOR) {
        Some(separator) => &head[separator + GROUP_SEPARATOR.len()..],
        None => head,
    };

    name.trim().to_string()
}

/// The text following the last occurrence of `anchor`, trimmed. The anchor is
/// the room if one was found, the name otherwise.
///
/// An anchor that does not occur leaves no teacher region.
pub fn teacher_region<'a>(subject: &'a str, anchor: &str) -> &'a str {
    subject
        .rfind(anchor)
        .map(|start| &subject[start + anchor.len()..])
        .unwrap_or("")
        .trim()
}

/// Splits a teacher region right after the first pair of initials, which ends
/// the first teacher's name. Empty pieces are dropped.
pub fn split_teachers(region: &str) -> Vec<String> {
    let (head, tail) = match INITIALS.find(region) {
        Some(initials) => region.split_at(initials.end()),
        None => (region, ""),
    };

    [head, tail]
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decomposes a subject string into groups, room, name and teacher.
///
/// Never fails: whatever cannot be recognized stays in `name`.
///
/// ```
/// use phys_timetable::{FieldValue, split_subject};
///
/// let fields = split_subject("409 - Физпрактикум 5-51 доц. Петров П. П.");
/// assert_eq!(fields.group, FieldValue::Single("409".into()));
/// assert_eq!(fields.room.as_deref(), Some("5-51"));
/// assert_eq!(fields.name, "Физпрактикум");
/// assert_eq!(fields.teacher, FieldValue::Single("доц. Петров П. П.".into()));
/// ```
pub fn split_subject(subject: &str) -> SubjectFields {
    let groups = find_groups(subject);
    let room = find_room(subject);
    let name = extract_name(subject, room);
    let region = teacher_region(subject, room.unwrap_or(&name));
    let teachers = split_teachers(region);

    SubjectFields {
        group: FieldValue::from_vec(groups),
        room: room.map(str::to_string),
        name,
        teacher: FieldValue::from_vec(teachers),
    }
}
