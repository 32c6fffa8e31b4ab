use alloc::string::String;

use thiserror::Error;

/// A malformed sequence found while scanning.
///
/// Reaching the end of the region is not an error: the scan functions
/// return `Ok(None)` for it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The lead unit at `at` declares a `expected`-unit character, but only
    /// `available` units remain before the end of the region.
    #[error("truncated sequence at {at}: lead unit declares {expected} units, {available} available")]
    TruncatedSequence {
        /// Position of the lead unit.
        at: usize,
        /// Width declared by the lead unit.
        expected: usize,
        /// Units left in `[at, end)`.
        available: usize,
    },
    /// The unit at `at` does not start any character of the encoding.
    #[error("invalid lead unit {unit:#04x} at {at}")]
    InvalidLeadUnit {
        /// Position of the unit.
        at: usize,
        /// The unit's value.
        unit: u32,
    },
}

impl ScanError {
    /// Position of the offending lead unit.
    #[must_use]
    pub fn at(&self) -> usize {
        match *self {
            ScanError::TruncatedSequence { at, .. } | ScanError::InvalidLeadUnit { at, .. } => at,
        }
    }

    /// Cursor position from which scanning can resume past the malformed
    /// units: the end of the region for a truncated sequence, the next unit
    /// for an invalid lead.
    #[must_use]
    pub fn resume_at(&self) -> usize {
        match *self {
            ScanError::TruncatedSequence { at, available, .. } => at + available,
            ScanError::InvalidLeadUnit { at, .. } => at + 1,
        }
    }
}

/// A charset label that does not name any built-in [`Charset`].
///
/// [`Charset`]: crate::Charset
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown charset `{0}`")]
pub struct UnknownCharset(pub String);
