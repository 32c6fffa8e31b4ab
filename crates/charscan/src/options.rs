/// What the scanner does when a multi-unit character is cut off by the end
/// of the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TruncationPolicy {
    /// Return [`ScanError::TruncatedSequence`] and leave the cursor where it
    /// was.
    ///
    /// [`ScanError::TruncatedSequence`]: crate::ScanError::TruncatedSequence
    #[default]
    Error,
    /// Return the remaining units as one span flagged
    /// [`SpanStatus::Truncated`].
    ///
    /// [`SpanStatus::Truncated`]: crate::SpanStatus::Truncated
    Truncate,
}

/// What the scanner does with a unit the encoding does not map to any
/// character width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnmappedLeadPolicy {
    /// Treat the unit as a one-unit character flagged
    /// [`SpanStatus::UnmappedLead`]. Keeps buffers of mixed or unknown
    /// encoding scannable.
    ///
    /// [`SpanStatus::UnmappedLead`]: crate::SpanStatus::UnmappedLead
    #[default]
    Single,
    /// Return [`ScanError::InvalidLeadUnit`] and leave the cursor where it
    /// was.
    ///
    /// [`ScanError::InvalidLeadUnit`]: crate::ScanError::InvalidLeadUnit
    Error,
}

/// Configuration options for the character scanner.
///
/// # Examples
///
/// ```rust
/// use charscan::{Charset, ScanOptions, TruncationPolicy, next_char};
///
/// let options = ScanOptions {
///     truncation: TruncationPolicy::Truncate,
///     ..Default::default()
/// };
/// // A Shift_JIS lead byte with its trail byte missing.
/// let span = next_char(&Charset::ShiftJis, b"\x82", 0, 1, options)
///     .unwrap()
///     .unwrap();
/// assert_eq!(span.len(), 1);
/// assert!(!span.is_well_formed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanOptions {
    /// Handling of multi-unit characters cut off by the end of the region.
    ///
    /// # Default
    ///
    /// [`TruncationPolicy::Error`]
    pub truncation: TruncationPolicy,

    /// Handling of units that start no known character.
    ///
    /// # Default
    ///
    /// [`UnmappedLeadPolicy::Single`]
    pub unmapped_lead: UnmappedLeadPolicy,
}

impl ScanOptions {
    /// Options that never fail: truncated sequences and unmapped leads both
    /// come back as flagged spans.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            truncation: TruncationPolicy::Truncate,
            unmapped_lead: UnmappedLeadPolicy::Single,
        }
    }

    /// Options that report every malformed sequence as an error.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            truncation: TruncationPolicy::Error,
            unmapped_lead: UnmappedLeadPolicy::Error,
        }
    }
}
