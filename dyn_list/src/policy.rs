//! Capacity policy: how much a full list grows by, and when a trim shrinks it.

use crate::{ListError, Result};

/// Growth multiplier applied to a full buffer.
pub const GROWTH_MULTIPLIER: usize = 2;

/// Minimum number of slots a growth step adds.
pub const GROWTH_MIN: usize = 4;

/// `trim_excess` only shrinks when `len / capacity` is below this ratio.
pub const TRIM_THRESHOLD: f64 = 0.9;

/// Number of elements shown by the `Display` preview.
pub const PREVIEW_LIMIT: usize = 10;

/// Capacity to grow a full buffer of `capacity` slots to:
/// `max(capacity * 2, capacity + 4)`.
///
/// # Errors
///
/// Returns `ListError::OutOfResources` if the new size does not fit `usize`.
pub fn grown_capacity(capacity: usize) -> Result<usize> {
    let min = capacity
        .checked_add(GROWTH_MIN)
        .ok_or_else(|| ListError::capacity_overflow(usize::MAX))?;

    let doubled = capacity
        .checked_mul(GROWTH_MULTIPLIER)
        .ok_or_else(|| ListError::capacity_overflow(usize::MAX))?;

    Ok(doubled.max(min))
}

/// Whether a buffer of `capacity` slots holding `len` elements is sparse
/// enough to be trimmed. A zero-capacity buffer is already trimmed.
pub fn should_trim(len: usize, capacity: usize) -> bool {
    if capacity == 0 {
        return false;
    }
    (len as f64) / (capacity as f64) < TRIM_THRESHOLD
}
