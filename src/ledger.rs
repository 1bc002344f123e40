//! Application state for a session working on one expenses file.

use crate::editor;
use crate::error::ExpenseResult;
use crate::model::{Expense, ExpenseInput, Expenses};
use crate::store::Store;
use crate::summary::{self, ChartSeries, Summary};
use crate::utils;
use tracing::debug;

/// Owns the `Store` and the most recently loaded snapshot of the expense list.
///
/// Every mutation reloads the list from disk, applies the record editor operation, writes the
/// whole list back and then refreshes the snapshot from disk. When the editor rejects the input
/// nothing is written and the snapshot is left as it was.
#[derive(Debug, Clone)]
pub struct Ledger {
    store: Store,
    expenses: Expenses,
}

impl Ledger {
    /// Opens the ledger by loading the current list from `store`.
    pub async fn open(store: Store) -> ExpenseResult<Self> {
        let expenses = store.load().await?;
        Ok(Self { store, expenses })
    }

    /// The snapshot loaded by the last `open`, `refresh` or mutation.
    pub fn expenses(&self) -> &Expenses {
        &self.expenses
    }

    /// Reloads the snapshot from disk.
    pub async fn refresh(&mut self) -> ExpenseResult<()> {
        self.expenses = self.store.load().await?;
        Ok(())
    }

    /// Adds a new expense and returns it as it was stored.
    pub async fn add(&mut self, input: &ExpenseInput) -> ExpenseResult<Expense> {
        let mut expenses = self.store.load().await?;
        let ix = editor::add(&mut expenses, input, utils::today())?;
        let added = expenses[ix].clone();
        self.commit(&expenses).await?;
        debug!("Added expense at index {ix}: {added:?}");
        Ok(added)
    }

    /// Replaces the expense at `index`. Returns the `(previous, current)` records.
    pub async fn edit(
        &mut self,
        index: usize,
        input: &ExpenseInput,
    ) -> ExpenseResult<(Expense, Expense)> {
        let mut expenses = self.store.load().await?;
        let previous = editor::edit(&mut expenses, index, input, utils::today())?;
        let current = expenses[index].clone();
        self.commit(&expenses).await?;
        debug!("Replaced expense at index {index}: {previous:?} -> {current:?}");
        Ok((previous, current))
    }

    /// Deletes the expense at `index` and returns it.
    pub async fn delete(&mut self, index: usize) -> ExpenseResult<Expense> {
        let mut expenses = self.store.load().await?;
        let removed = editor::delete(&mut expenses, index)?;
        self.commit(&expenses).await?;
        debug!("Deleted expense at index {index}: {removed:?}");
        Ok(removed)
    }

    /// Category totals for the current snapshot.
    pub fn summary(&self) -> ExpenseResult<Summary> {
        summary::summarize(&self.expenses)
    }

    /// Chart data for the current snapshot.
    pub fn chart_series(&self) -> ExpenseResult<ChartSeries> {
        Ok(summary::to_chart_series(&self.summary()?))
    }

    async fn commit(&mut self, expenses: &Expenses) -> ExpenseResult<()> {
        self.store.save(expenses).await?;
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use crate::test::TestEnv;
    use crate::utils::DATE_FORMAT;

    #[tokio::test]
    async fn test_open_missing_file() {
        let env = TestEnv::new();
        let ledger = Ledger::open(env.store()).await.unwrap();
        assert!(ledger.expenses().is_empty());
    }

    #[tokio::test]
    async fn test_add_persists_and_refreshes() {
        let env = TestEnv::new();
        env.insert_test_expenses().await;
        let mut ledger = Ledger::open(env.store()).await.unwrap();
        let before = ledger.expenses().len();

        let added = ledger
            .add(&ExpenseInput::new("Cinema", "14", "fun", ""))
            .await
            .unwrap();
        let today = utils::today().format(DATE_FORMAT).to_string();
        assert_eq!(added.date(), today);

        let loaded = env.store().load().await.unwrap();
        assert_eq!(loaded.len(), before + 1);
        assert_eq!(loaded[before], added);
        assert_eq!(ledger.expenses(), &loaded);
    }

    #[tokio::test]
    async fn test_add_invalid_amount_writes_nothing() {
        let env = TestEnv::new();
        let mut ledger = Ledger::open(env.store()).await.unwrap();
        let err = ledger
            .add(&ExpenseInput::new("Cinema", "abc", "fun", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidAmount { .. }));
        assert!(!env.store().path().exists());
        assert!(ledger.expenses().is_empty());
    }

    #[tokio::test]
    async fn test_mutations_start_from_disk() {
        let env = TestEnv::new();
        let mut ledger = Ledger::open(env.store()).await.unwrap();
        assert!(ledger.expenses().is_empty());

        // Another writer changes the file after the snapshot was taken.
        env.insert_test_expenses().await;
        let on_disk = env.store().load().await.unwrap().len();

        ledger
            .add(&ExpenseInput::new("Cinema", "14", "fun", "2025-05-05"))
            .await
            .unwrap();
        assert_eq!(ledger.expenses().len(), on_disk + 1);
    }

    #[tokio::test]
    async fn test_edit_and_delete() {
        let env = TestEnv::new();
        env.insert_test_expenses().await;
        let mut ledger = Ledger::open(env.store()).await.unwrap();
        let original = ledger.expenses().clone();

        let (previous, current) = ledger
            .edit(0, &ExpenseInput::new("Brunch", "30", "food", "2025-01-05"))
            .await
            .unwrap();
        assert_eq!(previous, original[0]);
        assert_eq!(current.name(), "Brunch");
        assert_eq!(env.store().load().await.unwrap()[0], current);

        let removed = ledger.delete(1).await.unwrap();
        assert_eq!(removed, original[1]);
        let loaded = env.store().load().await.unwrap();
        assert_eq!(loaded.len(), original.len() - 1);
        assert_eq!(loaded[1], original[2]);
    }

    #[tokio::test]
    async fn test_delete_out_of_range_writes_nothing() {
        let env = TestEnv::new();
        env.insert_test_expenses().await;
        let before = std::fs::read_to_string(env.store().path()).unwrap();
        let mut ledger = Ledger::open(env.store()).await.unwrap();
        let len = ledger.expenses().len();

        let err = ledger.delete(len).await.unwrap_err();
        assert!(matches!(err, ExpenseError::IndexOutOfRange { .. }));
        let after = std::fs::read_to_string(env.store().path()).unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_summary_and_chart_series() {
        let env = TestEnv::new();
        env.insert_test_expenses().await;
        let ledger = Ledger::open(env.store()).await.unwrap();
        let summary = ledger.summary().unwrap();
        assert_eq!(summary.get("food"), Some(15.0));
        assert_eq!(summary.get("transport"), Some(20.0));
        let series = ledger.chart_series().unwrap();
        assert_eq!(series.categories, vec!["food", "transport"]);
    }
}
