//! Scanner: delimits one logical character at a time.
//!
//! What it does
//! - Classifies the unit under the cursor with an [`Encoding`] rule and takes
//!   as many units as the rule declares, without looking at the trailing
//!   units themselves.
//! - Reports characters cut off by the end of the region, and units that
//!   start no character, according to [`ScanOptions`].
//!
//! Invariants
//! - Nothing at or past `end` is ever read: the buffer is narrowed to
//!   `..end` before the lead unit is inspected.
//! - A returned span starts at the cursor and is never empty, so successive
//!   spans tile `[start, end)` without gaps or overlaps.
//! - On `Ok(None)` and on `Err(_)` the cursor does not move.
//! - No state survives between calls beyond the cursor itself.
//!
//! Three entry points share one implementation:
//! - [`next_char`] is pure: the next cursor is the returned span's `last`.
//! - [`pop_next_char`] advances a caller-owned cursor in place.
//! - [`CharScanner`] owns its cursor and yields spans as an iterator.

use core::{fmt, iter::FusedIterator};

use crate::{
    encoding::{Encoding, LeadClass},
    error::ScanError,
    options::{ScanOptions, TruncationPolicy, UnmappedLeadPolicy},
    span::{CharSpan, SpanStatus},
};

/// Returns the span of the character starting at `cursor`.
///
/// `Ok(None)` means `cursor == end`: there are no more characters. It is the
/// normal end of an iteration, not a failure, and asking again keeps
/// returning `Ok(None)`.
///
/// # Errors
///
/// - [`ScanError::TruncatedSequence`] if the lead unit declares more units
///   than remain before `end` and `options.truncation` is
///   [`TruncationPolicy::Error`].
/// - [`ScanError::InvalidLeadUnit`] if the encoding maps the unit to no width
///   and `options.unmapped_lead` is [`UnmappedLeadPolicy::Error`].
///
/// # Panics
///
/// Panics if `end > buffer.len()` or `cursor > end`.
pub fn next_char<E: Encoding + ?Sized>(
    encoding: &E,
    buffer: &[E::Unit],
    cursor: usize,
    end: usize,
    options: ScanOptions,
) -> Result<Option<CharSpan>, ScanError> {
    assert!(
        end <= buffer.len(),
        "end {end} is past the buffer ({} units)",
        buffer.len()
    );
    assert!(cursor <= end, "cursor {cursor} is past end {end}");

    let region = &buffer[..end];
    let Some(&lead) = region.get(cursor) else {
        return Ok(None);
    };

    let span = match encoding.classify(lead) {
        LeadClass::Width(width) => {
            let expected = usize::from(width.get());
            let available = end - cursor;
            if expected <= available {
                CharSpan::new(cursor, cursor + expected, SpanStatus::WellFormed)
            } else {
                tracing::debug!(
                    encoding = encoding.name(),
                    at = cursor,
                    expected,
                    available,
                    "multi-unit sequence cut off by end of region"
                );
                match options.truncation {
                    TruncationPolicy::Error => {
                        return Err(ScanError::TruncatedSequence {
                            at: cursor,
                            expected,
                            available,
                        });
                    }
                    TruncationPolicy::Truncate => {
                        CharSpan::new(cursor, end, SpanStatus::Truncated)
                    }
                }
            }
        }
        LeadClass::Unmapped => {
            let unit: u32 = lead.into();
            tracing::debug!(
                encoding = encoding.name(),
                at = cursor,
                unit,
                "unit starts no character"
            );
            match options.unmapped_lead {
                UnmappedLeadPolicy::Single => {
                    CharSpan::new(cursor, cursor + 1, SpanStatus::UnmappedLead)
                }
                UnmappedLeadPolicy::Error => {
                    return Err(ScanError::InvalidLeadUnit { at: cursor, unit });
                }
            }
        }
    };

    Ok(Some(span))
}

/// Returns the span of the character at `*cursor` and moves the cursor to
/// the end of that span.
///
/// The cursor is left untouched when there are no more characters and when
/// an error is returned, so the caller decides whether to abort, skip to
/// [`ScanError::resume_at`], or substitute a replacement.
///
/// ```rust
/// use charscan::{Charset, ScanOptions, pop_next_char};
///
/// let text = b"foo";
/// let mut cursor = 0;
/// let mut lengths = Vec::new();
/// while let Some(span) =
///     pop_next_char(&Charset::Ascii, text, &mut cursor, text.len(), ScanOptions::default())
///         .unwrap()
/// {
///     lengths.push(span.len());
/// }
/// assert_eq!(lengths, [1, 1, 1]);
/// assert_eq!(cursor, 3);
/// ```
///
/// # Errors
///
/// Same as [`next_char`].
///
/// # Panics
///
/// Panics if `end > buffer.len()` or `*cursor > end`.
pub fn pop_next_char<E: Encoding + ?Sized>(
    encoding: &E,
    buffer: &[E::Unit],
    cursor: &mut usize,
    end: usize,
    options: ScanOptions,
) -> Result<Option<CharSpan>, ScanError> {
    let span = next_char(encoding, buffer, *cursor, end, options)?;
    if let Some(span) = span {
        *cursor = span.last;
    }
    Ok(span)
}

/// Iterator over the character spans of a region of a buffer.
///
/// The iterator owns its cursor and nothing else: it can be restarted from
/// any position with [`CharScanner::reset`], and cloning it forks the scan.
///
/// When a scan fails, the error is yielded and the cursor jumps to
/// [`ScanError::resume_at`], so iteration always terminates. Use
/// [`next_char`] directly for a different recovery.
pub struct CharScanner<'a, E: Encoding + ?Sized> {
    encoding: &'a E,
    buffer: &'a [E::Unit],
    cursor: usize,
    end: usize,
    options: ScanOptions,
}

impl<'a, E: Encoding + ?Sized> CharScanner<'a, E> {
    /// Scans the whole `buffer` with default options.
    pub fn new(encoding: &'a E, buffer: &'a [E::Unit]) -> Self {
        Self {
            encoding,
            buffer,
            cursor: 0,
            end: buffer.len(),
            options: ScanOptions::default(),
        }
    }

    /// Scans `buffer[start..end]`. Units at or after `end` are never read.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > buffer.len()`.
    pub fn with_range(encoding: &'a E, buffer: &'a [E::Unit], start: usize, end: usize) -> Self {
        assert!(
            end <= buffer.len(),
            "end {end} is past the buffer ({} units)",
            buffer.len()
        );
        assert!(start <= end, "start {start} is past end {end}");
        Self {
            encoding,
            buffer,
            cursor: start,
            end,
            options: ScanOptions::default(),
        }
    }

    /// Replaces the scan options.
    #[must_use]
    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Position of the next character.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// End of the scanned region.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Options in effect.
    #[inline]
    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// The buffer being scanned, including any units past `end`.
    #[inline]
    pub fn buffer(&self) -> &'a [E::Unit] {
        self.buffer
    }

    /// Units not yet scanned.
    #[inline]
    pub fn remaining(&self) -> &'a [E::Unit] {
        &self.buffer[self.cursor..self.end]
    }

    /// Moves the cursor to `cursor`. The position is trusted to be a
    /// character boundary.
    ///
    /// # Panics
    ///
    /// Panics if `cursor > end`.
    pub fn reset(&mut self, cursor: usize) {
        assert!(cursor <= self.end, "cursor {cursor} is past end {}", self.end);
        self.cursor = cursor;
    }
}

impl<E: Encoding + ?Sized> Iterator for CharScanner<'_, E> {
    type Item = Result<CharSpan, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        match next_char(
            self.encoding,
            self.buffer,
            self.cursor,
            self.end,
            self.options,
        ) {
            Ok(Some(span)) => {
                self.cursor = span.last;
                Some(Ok(span))
            }
            Ok(None) => None,
            Err(err) => {
                self.cursor = err.resume_at();
                tracing::trace!(resume_at = self.cursor, "skipping malformed sequence");
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.cursor;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl<E: Encoding + ?Sized> FusedIterator for CharScanner<'_, E> {}

impl<E: Encoding + ?Sized> Clone for CharScanner<'_, E> {
    fn clone(&self) -> Self {
        Self {
            encoding: self.encoding,
            buffer: self.buffer,
            cursor: self.cursor,
            end: self.end,
            options: self.options,
        }
    }
}

impl<E: Encoding + ?Sized> fmt::Debug for CharScanner<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharScanner")
            .field("encoding", &self.encoding.name())
            .field("cursor", &self.cursor)
            .field("end", &self.end)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
