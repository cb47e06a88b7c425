use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Request to the timetable site failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Timetable site answered with HTTP status {0}")]
    HttpStatus(u16),

    #[error("The requested page has no timetable data")]
    NoData,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("No delimiter rows found; the page is not a timetable")]
    NoDelimiters,

    #[error("Row walk ended before the last delimiter row was reached")]
    UnterminatedWeek,

    #[error("More than 7 weekdays found between delimiter rows")]
    TooManyWeekdays,

    #[error("Too many time cells in a row")]
    TooManyTimeCells,

    #[error("Too many subject cells in a row")]
    TooManySubjectCells,

    #[error("Time cell has no content")]
    EmptyTimeCell,
}

pub type Result<T> = std::result::Result<T, TimetableError>;
