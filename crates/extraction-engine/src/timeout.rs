//! Deadline-boxed execution for blocking parse work
//!
//! The underlying PDF/DOCX parsers do not support cooperative cancellation
//! and have been observed to hang on pathological inputs (embedded macros,
//! DRM). The work is therefore moved onto a blocking task and raced against
//! a timer; when the timer wins, the task is abandoned and its eventual
//! result dropped. The abandoned task keeps occupying its blocking thread
//! until the parse returns on its own.

use std::time::Duration;

use crate::error::ExtractError;

/// Budget for document text extraction
pub const TEXT_EXTRACTION_TIMEOUT_MS: u64 = 15_000;

/// Run a blocking closure under a wall-clock budget
///
/// Returns [`ExtractError::Timeout`] if the budget elapses first. A panic
/// inside the closure surfaces as [`ExtractError::TaskFailed`] rather than
/// propagating.
pub async fn run_with_deadline<T, F>(budget_ms: u64, task: F) -> Result<T, ExtractError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::time::timeout(
        Duration::from_millis(budget_ms),
        tokio::task::spawn_blocking(task),
    )
    .await;

    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(join_error)) => Err(ExtractError::TaskFailed(format!(
            "extraction task panicked: {}",
            join_error
        ))),
        Err(_elapsed) => Err(ExtractError::Timeout(budget_ms)),
    }
}
