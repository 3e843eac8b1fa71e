//! Spoken task-number resolution
//!
//! Turns an utterance like "delete task twenty two" into a validated 1-based
//! display index. Number words are rewritten to digit strings first, then the
//! first purely-numeric token wins.

use once_cell::sync::Lazy;
use thiserror::Error;

/// Number words replaced with digit strings, scanned in this order.
///
/// Replacement is destructive and runs in table order, so compound forms
/// come before their component words ("twenty two" must become "22", not
/// "20 2") and teens come before the singles embedded in them ("nineteen"
/// before "nine").
static WORD_NUMBERS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("twenty one", "21"),
        ("twenty two", "22"),
        ("twenty three", "23"),
        ("twenty four", "24"),
        ("twenty five", "25"),
        ("twenty six", "26"),
        ("twenty seven", "27"),
        ("twenty eight", "28"),
        ("twenty nine", "29"),
        ("thirty", "30"),
        ("twenty", "20"),
        ("nineteen", "19"),
        ("eighteen", "18"),
        ("seventeen", "17"),
        ("sixteen", "16"),
        ("fifteen", "15"),
        ("fourteen", "14"),
        ("thirteen", "13"),
        ("twelve", "12"),
        ("eleven", "11"),
        ("ten", "10"),
        ("zero", "0"),
        ("one", "1"),
        ("two", "2"),
        ("three", "3"),
        ("four", "4"),
        ("five", "5"),
        ("six", "6"),
        ("seven", "7"),
        ("eight", "8"),
        ("nine", "9"),
    ]
});

/// Why a spoken task number did not resolve.
///
/// The display strings are the exact sentences the assistant speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TaskNumberError {
    #[error("I couldn't understand the task number. Please try again.")]
    Unrecognized,

    #[error("Task number {0} is invalid. Please provide a valid task number.")]
    OutOfRange(u32),
}

/// Resolve a spoken task number against the currently displayed task count.
///
/// Returns the validated 1-based display index.
pub fn resolve_task_number(text: &str, task_count: usize) -> Result<usize, TaskNumberError> {
    let mut text = text.to_string();
    for (word, digits) in WORD_NUMBERS.iter() {
        text = text.replace(word, digits);
    }

    let number = text
        .split_whitespace()
        .find(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
        .and_then(|token| token.parse::<u32>().ok())
        .ok_or(TaskNumberError::Unrecognized)?;

    if number == 0 || number as usize > task_count {
        return Err(TaskNumberError::OutOfRange(number));
    }
    Ok(number as usize)
}
