//! These structs provide the CLI interface for the expenses CLI.

use crate::config::DATA_FILE;
use crate::model::ExpenseInput;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// expenses: A command-line tool for keeping track of personal expenses.
///
/// Expenses are stored as a JSON array in a single file, `expenses.json` in the current directory
/// unless --data-file or EXPENSES_FILE says otherwise. Each expense has a name, an amount, a
/// category and a date. Expenses are identified by the number shown next to them by the list
/// command.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show all expenses, numbered in the order they were added.
    List(ListArgs),
    /// Record a new expense.
    Add(ExpenseArgs),
    /// Replace an expense. Every field is overwritten, so pass the old values for anything that
    /// should stay the same.
    Edit(EditArgs),
    /// Delete an expense.
    Delete(DeleteArgs),
    /// Show the total spent per category.
    Summary(SummaryArgs),
    /// Draw a bar chart of the total spent per category.
    Chart(ChartArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The JSON file where expenses are stored.
    #[arg(long, env = "EXPENSES_FILE", default_value_t = default_data_file())]
    data_file: DisplayPath,
}

impl Common {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn data_file(&self) -> &DisplayPath {
        &self.data_file
    }
}

/// How a command renders its output.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Text,
    Json,
    Csv,
}

serde_plain::derive_display_from_serialize!(Format);
serde_plain::derive_fromstr_from_deserialize!(Format);

/// (Not shown): Args for the `expenses list` command.
#[derive(Debug, Parser, Clone)]
pub struct ListArgs {
    /// Output format: text, json or csv.
    #[arg(long, default_value_t = Format::Text)]
    format: Format,
}

impl ListArgs {
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    pub fn format(&self) -> Format {
        self.format
    }
}

/// (Not shown): The fields of an expense for the `add` and `edit` commands.
#[derive(Debug, Parser, Clone)]
pub struct ExpenseArgs {
    /// What the money was spent on.
    #[arg(long)]
    name: String,

    /// The amount spent, e.g. 12.50
    #[arg(long, allow_hyphen_values = true)]
    amount: String,

    /// The category, e.g. food or transport. May be left empty.
    #[arg(long, default_value = "")]
    category: String,

    /// The date in YYYY-MM-DD format. Defaults to today.
    #[arg(long, default_value = "")]
    date: String,
}

impl ExpenseArgs {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// The unvalidated input for the record editor.
    pub fn input(&self) -> ExpenseInput {
        ExpenseInput::new(
            self.name.clone(),
            self.amount.clone(),
            self.category.clone(),
            self.date.clone(),
        )
    }
}

/// (Not shown): Args for the `expenses edit` command.
#[derive(Debug, Parser, Clone)]
pub struct EditArgs {
    /// The number of the expense as shown by `expenses list`.
    number: NonZeroUsize,

    #[clap(flatten)]
    expense: ExpenseArgs,
}

impl EditArgs {
    pub fn new(number: NonZeroUsize, expense: ExpenseArgs) -> Self {
        Self { number, expense }
    }

    /// The zero-based index of the expense to replace.
    pub fn index(&self) -> usize {
        self.number.get() - 1
    }

    pub fn expense(&self) -> &ExpenseArgs {
        &self.expense
    }
}

/// (Not shown): Args for the `expenses delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// The number of the expense as shown by `expenses list`.
    number: NonZeroUsize,
}

impl DeleteArgs {
    pub fn new(number: NonZeroUsize) -> Self {
        Self { number }
    }

    /// The zero-based index of the expense to delete.
    pub fn index(&self) -> usize {
        self.number.get() - 1
    }
}

/// (Not shown): Args for the `expenses summary` command.
#[derive(Debug, Parser, Clone)]
pub struct SummaryArgs {
    /// Output format: text, json or csv.
    #[arg(long, default_value_t = Format::Text)]
    format: Format,
}

impl SummaryArgs {
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    pub fn format(&self) -> Format {
        self.format
    }
}

/// The widest bar the chart command will draw.
pub const MAX_CHART_WIDTH: u16 = 500;

/// (Not shown): Args for the `expenses chart` command.
#[derive(Debug, Parser, Clone)]
pub struct ChartArgs {
    /// The width, in characters, of the longest bar. Between 1 and 500.
    #[arg(
        long,
        default_value_t = 40,
        value_parser = clap::value_parser!(u16).range(1..=MAX_CHART_WIDTH as i64)
    )]
    width: u16,
}

impl ChartArgs {
    pub fn new(width: u16) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        usize::from(self.width)
    }
}

fn default_data_file() -> DisplayPath {
    DisplayPath(PathBuf::from(DATA_FILE))
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}
