//! Before/after logging around named theme operations.

use tracing::info;

/// Run `op`, logging a notice before it starts and another once it returns.
///
/// The closing notice is skipped if `op` panics.
///
/// ```
/// use apathy_theme::with_operation_log;
///
/// let total = with_operation_log("sum_slots", || 1 + 2);
/// assert_eq!(total, 3);
/// ```
pub fn with_operation_log<T>(operation: &str, op: impl FnOnce() -> T) -> T {
    info!(operation, "validating theme operation");
    let result = op();
    info!(operation, "theme operation completed");
    result
}
