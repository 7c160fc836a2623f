//! Defines the crate level error type and its conversion to user facing alerts.

use crate::{alert::Alert, record::RecordKind};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty or whitespace-only string was used to name a source,
    /// destination or bank.
    #[error("{0} name cannot be empty")]
    EmptyRecordName(RecordKind),

    /// A source or destination with the same name (ignoring case) already
    /// exists for the user.
    #[error("the {0} \"{1}\" already exists")]
    DuplicateRecordName(RecordKind, String),

    /// The email used to identify the owner of some data is not an email
    /// address.
    #[error("\"{0}\" is not a valid email address")]
    InvalidEmail(String),

    /// A page size that is not one of [crate::pagination::PAGE_SIZES].
    #[error("{0} is not a valid page size")]
    InvalidPageSize(usize),

    /// A transaction kind that is neither income nor expense.
    #[error("\"{0}\" is not a valid transaction kind")]
    InvalidTransactionKind(String),

    /// A transaction amount that is negative, infinite or NaN.
    ///
    /// The direction of a transaction is given by its kind, so amounts are
    /// always non-negative.
    #[error("{0} is not a valid transaction amount")]
    InvalidAmount(f64),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The config file could not be read or parsed.
    ///
    /// Callers should pass in the original error as a string.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    /// Convert the error into an alert that can be shown to the user.
    ///
    /// Errors that are not caused by the user get a generic message, the
    /// details should be in the logs.
    pub fn to_alert(&self) -> Alert {
        match self {
            Error::EmptyRecordName(kind) => Alert::error(
                "Error",
                &format!("The {kind} name cannot be empty. Enter a name and try again."),
            ),
            Error::DuplicateRecordName(kind, name) => Alert::error(
                "Error",
                &format!(
                    "The {kind} \"{name}\" already exists. \
                    Choose a different name or use the existing {kind}."
                ),
            ),
            Error::InvalidTimezoneError(timezone) => Alert::error(
                "Invalid Timezone Settings",
                &format!(
                    "Could not get local timezone \"{timezone}\". Check your settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            ),
            Error::DatabaseLockError => Alert::error(
                "Something went wrong",
                "Try again later or check the server logs",
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                )
            }
        }
    }
}
