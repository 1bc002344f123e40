//! The record editor validates user input and applies add, edit and delete mutations to an
//! in-memory `Expenses` list.
//!
//! Nothing here touches the disk; the caller persists the list afterwards. Every function validates
//! fully before mutating, so on error the list is exactly as it was passed in.

use crate::error::{ExpenseError, ExpenseResult};
use crate::model::{Amount, Expense, ExpenseInput, Expenses};
use crate::utils::DATE_FORMAT;
use chrono::NaiveDate;
use std::str::FromStr;

/// Validates `input` and appends the resulting expense to `expenses`.
///
/// A blank `input.date` is replaced with `today`.
///
/// # Returns
/// The index of the new expense.
///
/// # Errors
/// - `EmptyName` if the name is blank.
/// - `InvalidAmount` if the amount is not a finite number.
/// - `InvalidDate` if a date was given that is not `YYYY-MM-DD`.
pub fn add(
    expenses: &mut Expenses,
    input: &ExpenseInput,
    today: NaiveDate,
) -> ExpenseResult<usize> {
    let expense = validate(input, today)?;
    let data = expenses.data_mut();
    data.push(expense);
    Ok(data.len() - 1)
}

/// Replaces the expense at `index` with one built from `input`. All fields are overwritten; nothing
/// from the previous record is carried over.
///
/// # Returns
/// The expense that was replaced.
///
/// # Errors
/// - `IndexOutOfRange` if `index` is not a valid position.
/// - Otherwise the same validation errors as `add`.
pub fn edit(
    expenses: &mut Expenses,
    index: usize,
    input: &ExpenseInput,
    today: NaiveDate,
) -> ExpenseResult<Expense> {
    check_index(expenses, index)?;
    let expense = validate(input, today)?;
    Ok(std::mem::replace(&mut expenses.data_mut()[index], expense))
}

/// Removes the expense at `index`, shifting every later expense down by one.
///
/// # Returns
/// The removed expense.
///
/// # Errors
/// - `IndexOutOfRange` if `index` is not a valid position.
pub fn delete(expenses: &mut Expenses, index: usize) -> ExpenseResult<Expense> {
    check_index(expenses, index)?;
    Ok(expenses.data_mut().remove(index))
}

/// Turns raw user input into an `Expense`.
pub fn validate(input: &ExpenseInput, today: NaiveDate) -> ExpenseResult<Expense> {
    if input.name.trim().is_empty() {
        return Err(ExpenseError::EmptyName);
    }

    let amount = Amount::from_str(&input.amount).map_err(|source| ExpenseError::InvalidAmount {
        text: input.amount.clone(),
        source,
    })?;

    let date_text = input.date.trim();
    let date = if date_text.is_empty() {
        today
    } else {
        NaiveDate::parse_from_str(date_text, DATE_FORMAT).map_err(|source| {
            ExpenseError::InvalidDate {
                text: input.date.clone(),
                source,
            }
        })?
    };

    Ok(Expense::new(
        input.name.clone(),
        amount,
        input.category.clone(),
        date.format(DATE_FORMAT).to_string(),
    ))
}

fn check_index(expenses: &Expenses, index: usize) -> ExpenseResult<()> {
    if index < expenses.len() {
        Ok(())
    } else {
        Err(ExpenseError::IndexOutOfRange {
            index,
            len: expenses.len(),
        })
    }
}
