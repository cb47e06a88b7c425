// tests/client_test.rs

use dotenvy::from_path;
use phys_timetable::{
    ClientConfig, PageAddress, Result, TimetableClient, TimetableError, check_page,
};
use reqwest::StatusCode;
use std::env;
use std::path::PathBuf;

/// Reads the page to fetch from `TIMETABLE_TEST_PAGE` as `grade/stream/group`.
fn test_page() -> PageAddress {
    let env_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(".env");
    from_path(&env_path).ok();

    let raw = env::var("TIMETABLE_TEST_PAGE").unwrap_or_else(|_| "4/1/3".to_string());
    let parts: Vec<u16> = raw
        .split('/')
        .map(|part| part.trim().parse().expect("TIMETABLE_TEST_PAGE must be grade/stream/group"))
        .collect();
    assert_eq!(parts.len(), 3, "TIMETABLE_TEST_PAGE must be grade/stream/group");

    let grade = u8::try_from(parts[0]).expect("grade in TIMETABLE_TEST_PAGE must fit in u8");
    let stream = u8::try_from(parts[1]).expect("stream in TIMETABLE_TEST_PAGE must fit in u8");
    PageAddress::new(grade, stream, parts[2])
}

#[test]
fn test_no_data_page_is_reported_before_status() {
    let body = "<html><body><p>Нет данных</p></body></html>";

    assert!(matches!(
        check_page(StatusCode::NOT_FOUND, body),
        Err(TimetableError::NoData)
    ));
    assert!(matches!(
        check_page(StatusCode::OK, body),
        Err(TimetableError::NoData)
    ));
}

#[test]
fn test_error_status_is_reported() {
    assert!(matches!(
        check_page(StatusCode::INTERNAL_SERVER_ERROR, "<html>Internal error</html>"),
        Err(TimetableError::HttpStatus(500))
    ));
}

#[test]
fn test_timetable_page_is_accepted() {
    let body = r#"<html><body><table><tr><td class="delimiter"></td></tr></table></body></html>"#;

    assert!(check_page(StatusCode::OK, body).is_ok());
}

/// Fetches and parses a live page.
///
/// To run this test:
/// TIMETABLE_TEST_PAGE="4/1/3" cargo test -- --ignored --nocapture
#[tokio::test]
#[ignore]
async fn test_fetch_live_timetable() -> Result<()> {
    let page = test_page();
    let client = TimetableClient::with_config(ClientConfig::from_env()?)?;

    let timetable = client.get_timetable(&page).await?;

    println!("Groups on {}: {:?}", page.path(), timetable.groups);
    for (day, entries) in timetable.schedule.iter() {
        println!("Day {}: {} entries", day, entries.len());
    }
    assert!(!timetable.groups.is_empty(), "Header should list group numbers");
    assert!(timetable.schedule.total_entries() > 0, "Week should not be empty");
    Ok(())
}
