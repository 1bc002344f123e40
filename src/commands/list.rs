//! List command handler.

use crate::args::{Format, ListArgs};
use crate::commands::Out;
use crate::ledger::Ledger;
use crate::model::{Expense, Expenses};
use crate::{Config, Result};
use anyhow::Context;

/// Loads every expense and renders it in the requested format.
///
/// The text format numbers expenses from 1, e.g.
/// `1. 2025-01-01 - Lunch - $10.00 (food)`. These numbers are what `edit` and `delete` accept.
pub async fn list(config: Config, args: ListArgs) -> Result<Out<Vec<Expense>>> {
    let ledger = Ledger::open(config.store())
        .await
        .context("Unable to load expenses")?;
    let expenses = ledger.expenses();

    let message = match args.format() {
        Format::Text => render_text(expenses),
        Format::Json => {
            serde_json::to_string_pretty(expenses).context("Unable to serialize expenses")?
        }
        Format::Csv => render_csv(expenses)?,
    };
    Ok(Out::new(message, expenses.data().clone()))
}

fn render_text(expenses: &Expenses) -> String {
    if expenses.is_empty() {
        return String::from("No expenses.");
    }
    expenses
        .iter()
        .enumerate()
        .map(|(ix, e)| {
            format!(
                "{}. {} - {} - {} ({})",
                ix + 1,
                e.date(),
                e.name(),
                e.amount(),
                e.category()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_csv(expenses: &Expenses) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "amount", "category", "date"])?;
    for e in expenses {
        let amount = e.amount().value().to_string();
        writer.write_record([e.name(), amount.as_str(), e.category(), e.date()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Unable to finish writing CSV data: {e}"))?;
    let csv = String::from_utf8(bytes).context("CSV output was not valid UTF-8")?;
    Ok(csv.trim_end().to_string())
}
