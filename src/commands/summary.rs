//! Summary command handler.

use crate::args::{Format, SummaryArgs};
use crate::commands::Out;
use crate::ledger::Ledger;
use crate::summary::Summary;
use crate::{Config, Result};
use anyhow::Context;

/// Totals the expenses per category, e.g. `food: $15.00`.
pub async fn summary(config: Config, args: SummaryArgs) -> Result<Out<Summary>> {
    let ledger = Ledger::open(config.store())
        .await
        .context("Unable to load expenses")?;
    if ledger.expenses().is_empty() {
        return Ok("No expenses to summarize.".into());
    }

    let summary = ledger.summary().context("Unable to summarize expenses")?;
    let message = match args.format() {
        Format::Text => summary.to_string(),
        Format::Json => {
            serde_json::to_string_pretty(&summary).context("Unable to serialize summary")?
        }
        Format::Csv => render_csv(&summary)?,
    };
    Ok(Out::new(message, summary))
}

fn render_csv(summary: &Summary) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["category", "total"])?;
    for t in summary.totals() {
        let total = format!("{:.2}", t.total);
        writer.write_record([t.category.as_str(), total.as_str()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Unable to finish writing CSV data: {e}"))?;
    let csv = String::from_utf8(bytes).context("CSV output was not valid UTF-8")?;
    Ok(csv.trim_end().to_string())
}
