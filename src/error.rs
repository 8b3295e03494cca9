use thiserror::Error;

#[derive(Error, Debug)]
pub enum RedstringError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid contribution date: {0}")]
    BadDate(String),

    #[error("Invalid contribution amount: {0}")]
    BadAmount(String),

    #[error("Record is missing a reference number")]
    MissingRefNo,

    #[error("Expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, RedstringError>;
