// Declare all our modules
mod client;
mod config;
mod error;
mod models;
pub mod parsers;

// Publicly export the parts of our library that users will need
pub use client::{PageAddress, TimetableClient, check_page};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, DelayConfig};
pub use error::{Result, TimetableError};
pub use models::*;
pub use parsers::subject::split_subject;
pub use parsers::{parse_timetable, parse_timetable_from_html};
