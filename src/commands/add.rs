//! Add command handler.

use crate::args::ExpenseArgs;
use crate::commands::Out;
use crate::ledger::Ledger;
use crate::model::Expense;
use crate::{Config, Result};
use anyhow::Context;

/// Appends a new expense to the expenses file.
///
/// # Arguments
///
/// - `config` - The application configuration naming the expenses file.
/// - `args` - The expense fields. `name` and `amount` are required; an empty `date` means today.
///
/// # Returns
///
/// On success, returns an `Out` containing a confirmation message and the stored `Expense`.
///
/// # Errors
///
/// - Returns an error if the name is empty, the amount is not a number or the date is malformed.
///   Nothing is written in that case.
/// - Returns an error if the expenses file cannot be read or written.
pub async fn add(config: Config, args: ExpenseArgs) -> Result<Out<Expense>> {
    let mut ledger = Ledger::open(config.store())
        .await
        .context("Unable to load expenses")?;
    let expense = ledger
        .add(&args.input())
        .await
        .context("Unable to add the expense")?;
    let message = format!(
        "Added expense {}: {} - {} - {} ({})",
        ledger.expenses().len(),
        expense.date(),
        expense.name(),
        expense.amount(),
        expense.category()
    );
    Ok(Out::new(message, expense))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_add_success() {
        let env = TestEnv::new();
        env.insert_test_expenses().await;
        let args = ExpenseArgs::new("Cinema", "12.5", "fun", "2025-02-14");
        let out = add(env.config(), args).await.unwrap();
        assert_eq!(
            out.message(),
            "Added expense 4: 2025-02-14 - Cinema - $12.50 (fun)"
        );

        let loaded = env.store().load().await.unwrap();
        assert_eq!(loaded.len(), 4);
        assert_eq!(&loaded[3], out.structure().unwrap());
    }

    #[tokio::test]
    async fn test_add_to_missing_file_creates_it() {
        let env = TestEnv::new();
        let args = ExpenseArgs::new("Cinema", "12.5", "", "");
        add(env.config(), args).await.unwrap();
        assert!(env.store().path().is_file());
        assert_eq!(env.store().load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_invalid_amount() {
        let env = TestEnv::new();
        let args = ExpenseArgs::new("Cinema", "abc", "fun", "");
        let err = add(env.config(), args).await.unwrap_err();
        assert!(err.to_string().contains("Unable to add the expense"));
        let root = err.downcast_ref::<ExpenseError>().unwrap();
        assert!(matches!(root, ExpenseError::InvalidAmount { .. }));
        assert!(!env.store().path().exists());
    }

    #[tokio::test]
    async fn test_add_empty_name() {
        let env = TestEnv::new();
        env.insert_test_expenses().await;
        let args = ExpenseArgs::new("", "1", "fun", "");
        let err = add(env.config(), args).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExpenseError>(),
            Some(ExpenseError::EmptyName)
        ));
        assert_eq!(env.store().load().await.unwrap(), TestEnv::test_expenses());
    }
}
