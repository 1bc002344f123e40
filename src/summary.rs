//! Groups expenses by category and sums their amounts.

use crate::error::{ExpenseError, ExpenseResult};
use crate::model::Expenses;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// The total spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Category totals in the order each category first appears in the expense list.
///
/// Categories are compared as exact strings: no trimming, case-sensitive, and the empty string is a
/// category of its own.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Summary {
    totals: Vec<CategoryTotal>,
}

impl Summary {
    pub fn totals(&self) -> &[CategoryTotal] {
        &self.totals
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// The total for `category`, if any expense carries it.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.totals
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.total)
    }
}

/// One line per category, e.g. `food: $15.00`.
impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for t in &self.totals {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{}: ${:.2}", t.category, t.total)?;
        }
        Ok(())
    }
}

/// Bar chart data: two parallel sequences in `Summary` order.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub categories: Vec<String>,
    pub totals: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Sums `expenses` per category, accumulating in list order.
///
/// # Errors
/// - `TotalOverflow` if a category's total is not a finite number.
pub fn summarize(expenses: &Expenses) -> ExpenseResult<Summary> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        let amount = expense.amount().value();
        match positions.get(expense.category()) {
            Some(&ix) => totals[ix].total += amount,
            None => {
                positions.insert(expense.category(), totals.len());
                totals.push(CategoryTotal {
                    category: expense.category().to_string(),
                    total: amount,
                });
            }
        }
    }
    // Once a sum leaves the finite range it cannot come back.
    if let Some(t) = totals.iter().find(|t| !t.total.is_finite()) {
        return Err(ExpenseError::TotalOverflow {
            category: t.category.clone(),
        });
    }
    Ok(Summary { totals })
}

/// Projects `summary` into chart data.
pub fn to_chart_series(summary: &Summary) -> ChartSeries {
    let (categories, totals) = summary
        .totals()
        .iter()
        .map(|t| (t.category.clone(), t.total))
        .unzip();
    ChartSeries { categories, totals }
}
