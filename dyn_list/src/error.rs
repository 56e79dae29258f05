#[cfg(not(feature = "std"))]
use alloc::collections::TryReserveError;
#[cfg(feature = "std")]
use std::collections::TryReserveError;

#[cfg(feature = "std")]
use thiserror::Error;

pub type Result<T, E = ListError> = core::result::Result<T, E>;

/// List errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// An argument was absent or outside its accepted range.
    #[cfg_attr(feature = "std", error("invalid argument `{param}`: {reason}"))]
    InvalidArgument {
        param: &'static str,
        reason: &'static str,
    },

    /// Index outside the live range `[0, len)`.
    #[cfg_attr(feature = "std", error("Index {index} is out of range for length {len}"))]
    IndexOutOfRange { index: usize, len: usize },

    /// The allocator could not provide a buffer of `requested` slots.
    /// `source` is `None` when the size computation itself overflowed.
    #[cfg_attr(
        feature = "std",
        error("failed to allocate a buffer with capacity {requested}")
    )]
    OutOfResources {
        requested: usize,
        source: Option<TryReserveError>,
    },
}

/// Fieldless view of [`ListError`], for callers that only care which kind
/// of failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    IndexOutOfRange,
    OutOfResources,
}

impl ListError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            ListError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            ListError::OutOfResources { .. } => ErrorKind::OutOfResources,
        }
    }

    pub(crate) fn out_of_resources(requested: usize, source: TryReserveError) -> Self {
        ListError::OutOfResources {
            requested,
            source: Some(source),
        }
    }

    pub(crate) fn capacity_overflow(requested: usize) -> Self {
        ListError::OutOfResources {
            requested,
            source: None,
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ListError::InvalidArgument { param, reason } => {
                write!(f, "invalid argument `{}`: {}", param, reason)
            }
            ListError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} is out of range for length {}", index, len)
            }
            ListError::OutOfResources { requested, .. } => {
                write!(f, "failed to allocate a buffer with capacity {}", requested)
            }
        }
    }
}
