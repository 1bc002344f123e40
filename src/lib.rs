pub mod args;
pub mod commands;
mod config;
pub mod editor;
mod error;
pub mod ledger;
pub mod model;
pub mod store;
pub mod summary;
mod utils;


pub use config::{Config, DATA_FILE};
pub use error::{Error, ExpenseError, ExpenseResult, Result};
pub use ledger::Ledger;
pub use store::Store;
