use std::path::PathBuf;

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the expense core: the store, the record editor and the ledger.
///
/// The validation variants (`EmptyName`, `InvalidAmount`, `InvalidDate`, `IndexOutOfRange`) are
/// always raised before the list is touched, so the caller's list is unchanged and nothing has been
/// written to disk when one of them is returned.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    #[error("The expense name cannot be empty")]
    EmptyName,

    #[error("'{text}' is not a valid amount, please enter a number")]
    InvalidAmount {
        text: String,
        #[source]
        source: crate::model::AmountError,
    },

    #[error("'{text}' is not a valid date, expected YYYY-MM-DD")]
    InvalidDate {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Index {index} is out of range, there {}", count_phrase(.len))]
    IndexOutOfRange { index: usize, len: usize },

    #[error("The total for category '{category}' is too large to represent")]
    TotalOverflow { category: String },

    #[error("Unable to access the expenses file at '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse the expenses file at '{}'", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type ExpenseResult<T> = std::result::Result<T, ExpenseError>;

fn count_phrase(len: &usize) -> String {
    match *len {
        0 => String::from("are no expenses"),
        1 => String::from("is 1 expense"),
        n => format!("are {n} expenses"),
    }
}
