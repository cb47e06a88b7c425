use crate::config::{ClientConfig, DelayConfig};
use crate::error::{Result, TimetableError};
use crate::models::Timetable;
use crate::parsers;
use rand::Rng;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Marker the site prints instead of a table for pages that do not exist.
const NO_DATA_MARKER: &str = "НЕТ ДАННЫХ";

/// Location of one timetable page on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAddress {
    /// Year of study.
    pub grade: u8,
    pub stream: u8,
    /// Page number within the stream; equal to the group number for the first
    /// two years.
    pub group: u16,
}

impl PageAddress {
    pub fn new(grade: u8, stream: u8, group: u16) -> Self {
        Self {
            grade,
            stream,
            group,
        }
    }

    /// Path of the page relative to the site root.
    ///
    /// Example: `PageAddress::new(4, 1, 3).path()` returns `"/table/4/1/3.htm"`.
    pub fn path(&self) -> String {
        format!("/table/{}/{}/{}.htm", self.grade, self.stream, self.group)
    }
}

/// Classifies a response from the timetable site.
///
/// The site answers missing pages with a normal-looking page that says
/// "НЕТ ДАННЫХ", sometimes with an error status; that marker wins over the
/// status code.
pub fn check_page(status: StatusCode, body: &str) -> Result<()> {
    if body.to_uppercase().contains(NO_DATA_MARKER) {
        return Err(TimetableError::NoData);
    }
    if status != StatusCode::OK {
        return Err(TimetableError::HttpStatus(status.as_u16()));
    }
    Ok(())
}

pub struct TimetableClient {
    client: reqwest::Client,
    base_url: String,
    delay_config: DelayConfig,
}

impl TimetableClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| TimetableError::Config(format!("invalid user agent: {}", e)))?;
        headers.insert(USER_AGENT, user_agent);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            delay_config: config.delay,
        })
    }

    /// Sleeps for a random duration within the configured range.
    async fn random_delay(&self) {
        if !self.delay_config.enabled {
            return;
        }
        let millis = rand::rng()
            .random_range(self.delay_config.min_delay_ms..=self.delay_config.max_delay_ms);
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }

    /// Downloads the HTML of one timetable page.
    pub async fn fetch_page(&self, page: &PageAddress) -> Result<String> {
        self.random_delay().await;

        let url = format!("{}{}", self.base_url, page.path());
        debug!(url = %url, "Fetching timetable page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if let Err(error) = check_page(status, &body) {
            warn!(url = %url, status = status.as_u16(), "Timetable request failed: {}", error);
            return Err(error);
        }

        info!(url = %url, body_bytes = body.len(), "Fetched timetable page");
        Ok(body)
    }

    /// Fetches and parses one timetable page.
    pub async fn get_timetable(&self, page: &PageAddress) -> Result<Timetable> {
        let html = self.fetch_page(page).await?;
        parsers::parse_timetable_from_html(&html)
    }

    /// Fetches several pages one after another, stopping at the first failure.
    pub async fn get_timetables(&self, pages: &[PageAddress]) -> Result<Vec<Timetable>> {
        let mut timetables = Vec::with_capacity(pages.len());
        for page in pages {
            timetables.push(self.get_timetable(page).await?);
        }
        Ok(timetables)
    }
}
