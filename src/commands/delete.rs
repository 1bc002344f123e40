//! Delete command handler.

use crate::args::DeleteArgs;
use crate::commands::{plural, Out};
use crate::ledger::Ledger;
use crate::model::Expense;
use crate::{Config, Result};
use anyhow::Context;

/// Deletes the expense at the given number. Every expense after it moves up by one number.
///
/// # Errors
///
/// - Returns an error if no expense has that number. Nothing is written in that case.
/// - Returns an error if the expenses file cannot be read or written.
pub async fn delete(config: Config, args: DeleteArgs) -> Result<Out<Expense>> {
    let mut ledger = Ledger::open(config.store())
        .await
        .context("Unable to load expenses")?;
    let removed = ledger
        .delete(args.index())
        .await
        .with_context(|| format!("Unable to delete expense {}", args.index() + 1))?;
    let message = format!(
        "Deleted expense {}: {} - {} - {} ({}), {} left",
        args.index() + 1,
        removed.date(),
        removed.name(),
        removed.amount(),
        removed.category(),
        plural(ledger.expenses().len(), "expense")
    );
    Ok(Out::new(message, removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use crate::test::TestEnv;
    use std::num::NonZeroUsize;

    fn args(n: usize) -> DeleteArgs {
        DeleteArgs::new(NonZeroUsize::new(n).unwrap())
    }

    #[tokio::test]
    async fn test_delete_success() {
        let env = TestEnv::new();
        env.insert_test_expenses().await;

        let out = delete(env.config(), args(1)).await.unwrap();
        assert_eq!(
            out.message(),
            "Deleted expense 1: 2025-01-01 - Lunch - $10.00 (food), 2 expenses left"
        );
        assert_eq!(out.structure().unwrap().name(), "Lunch");

        // The remaining expenses keep their relative order.
        let loaded = env.store().load().await.unwrap();
        let names: Vec<&str> = loaded.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Dinner", "Bus pass"]);
    }

    #[tokio::test]
    async fn test_delete_last_remaining() {
        let env = TestEnv::new();
        env.insert_test_expenses().await;
        delete(env.config(), args(3)).await.unwrap();
        delete(env.config(), args(2)).await.unwrap();
        let out = delete(env.config(), args(1)).await.unwrap();
        assert!(out.message().ends_with("0 expenses left"));
        assert!(env.store().load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_not_found_error() {
        let env = TestEnv::new();
        env.insert_test_expenses().await;
        let err = delete(env.config(), args(9)).await.unwrap_err();
        assert!(err.to_string().contains("Unable to delete expense 9"));
        assert!(matches!(
            err.downcast_ref::<ExpenseError>(),
            Some(ExpenseError::IndexOutOfRange { .. })
        ));
        assert_eq!(env.store().load().await.unwrap(), TestEnv::test_expenses());
    }

    #[tokio::test]
    async fn test_delete_from_missing_file() {
        let env = TestEnv::new();
        assert!(delete(env.config(), args(1)).await.is_err());
        assert!(!env.store().path().exists());
    }
}
