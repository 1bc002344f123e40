//! Chart command handler.

use crate::args::{ChartArgs, MAX_CHART_WIDTH};
use crate::commands::Out;
use crate::ledger::Ledger;
use crate::summary::ChartSeries;
use crate::{Config, Result};
use anyhow::Context;

const TITLE: &str = "Expenses by Category";

/// Draws a horizontal bar chart of the total spent per category.
///
/// Bars are scaled so the largest total is `args.width()` characters long. Categories with a zero
/// or negative total get an empty bar.
pub async fn chart(config: Config, args: ChartArgs) -> Result<Out<ChartSeries>> {
    let ledger = Ledger::open(config.store())
        .await
        .context("Unable to load expenses")?;
    if ledger.expenses().is_empty() {
        return Ok("No expenses to plot.".into());
    }

    let series = ledger
        .chart_series()
        .context("Unable to summarize expenses")?;
    let message = render(&series, args.width());
    Ok(Out::new(message, series))
}

/// Bars are never longer than `MAX_CHART_WIDTH`, whatever `width` asks for.
fn render(series: &ChartSeries, width: usize) -> String {
    let width = width.min(usize::from(MAX_CHART_WIDTH));
    let label_width = series
        .categories
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0);
    let max = series.totals.iter().copied().fold(0.0_f64, f64::max);

    let mut lines = vec![TITLE.to_string(), "=".repeat(TITLE.len())];
    for (category, total) in series.categories.iter().zip(&series.totals) {
        let len = if max > 0.0 && *total > 0.0 {
            ((total / max) * width as f64).round() as usize
        } else {
            0
        };
        let bar = "#".repeat(len);
        lines.push(
            format!("{category:<label_width$} | {bar} {total:.2}")
                .trim_end()
                .to_string(),
        );
    }
    lines.join("\n")
}
