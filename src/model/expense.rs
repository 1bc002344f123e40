use crate::model::Amount;
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::Index;

/// Represents a single logged expense.
///
/// The serialized form is the on-disk record: `name`, `amount`, `category`, `date`, in that order.
/// There is no identifier; a record is identified by its position in `Expenses`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Expense {
    pub(crate) name: String,
    pub(crate) amount: Amount,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub(crate) category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub(crate) date: String,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            category: category.into(),
            date: date.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The date in `YYYY-MM-DD` form. Records written by older versions of the program may hold
    /// any string here, including an empty one.
    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Older files may carry `null` where a category or date dialog was cancelled.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The raw, unvalidated text a user supplied for a new or replacement expense.
///
/// The record editor turns this into an `Expense`, see `crate::editor`.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub name: String,
    pub amount: String,
    #[serde(default)]
    pub category: String,
    /// Leave empty to use today's date.
    #[serde(default)]
    pub date: String,
}

impl ExpenseInput {
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
}

/// The ordered list of expenses. Insertion order is display order and on-disk order.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expenses {
    data: Vec<Expense>,
}

impl Expenses {
    pub fn new(data: Vec<Expense>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &Vec<Expense> {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.data.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.data.iter()
    }

    pub(crate) fn data_mut(&mut self) -> &mut Vec<Expense> {
        &mut self.data
    }
}

impl Index<usize> for Expenses {
    type Output = Expense;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<'a> IntoIterator for &'a Expenses {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
