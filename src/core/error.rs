use thiserror::Error;

/// Outcome of a refused [`AnimalTable::add`](crate::storage::AnimalTable::add).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Duplicate animal name '{0}' is not allowed")]
    DuplicateName(String),

    #[error("Invalid animal data for '{0}'")]
    InvalidRecord(String),
}

/// Raw user input that never made it into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input! Missing {0}")]
    MissingField(&'static str),

    #[error("Invalid input! Size '{0}' is not a positive number")]
    InvalidSize(String),
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Table '{0}' not found")]
    UnknownTable(String),

    #[error("Unknown sort key '{0}'")]
    UnknownSortKey(String),

    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

pub type Result<T> = std::result::Result<T, TableError>;

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        Self::Seed(err.to_string())
    }
}
