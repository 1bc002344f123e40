//! Edit command handler.

use crate::args::EditArgs;
use crate::commands::Out;
use crate::ledger::Ledger;
use crate::model::Expense;
use crate::{Config, Result};
use anyhow::Context;
use serde::Serialize;

/// The record before and after an edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edited {
    pub previous: Expense,
    pub current: Expense,
}

/// Replaces the expense at the given number with the supplied fields.
///
/// This is a full replacement: any field left at its default (an empty category, or an empty date
/// which becomes today) overwrites the old value.
///
/// # Errors
///
/// - Returns an error if no expense has that number.
/// - Returns an error if the name is empty, the amount is not a number or the date is malformed.
/// - Returns an error if the expenses file cannot be read or written.
pub async fn edit(config: Config, args: EditArgs) -> Result<Out<Edited>> {
    let mut ledger = Ledger::open(config.store())
        .await
        .context("Unable to load expenses")?;
    let (previous, current) = ledger
        .edit(args.index(), &args.expense().input())
        .await
        .with_context(|| format!("Unable to edit expense {}", args.index() + 1))?;
    let message = format!(
        "Updated expense {}: {} - {} - {} ({})",
        args.index() + 1,
        current.date(),
        current.name(),
        current.amount(),
        current.category()
    );
    Ok(Out::new(message, Edited { previous, current }))
}
