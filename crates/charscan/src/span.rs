use core::ops::Range;

/// How a span came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpanStatus {
    /// The lead unit's declared width fit inside the region.
    #[default]
    WellFormed,
    /// The declared width ran past the end of the region; the span holds the
    /// units that were left.
    Truncated,
    /// The lead unit maps to no width and was taken as a single unit.
    UnmappedLead,
}

/// The half-open range `[first, last)` of code units holding one character.
///
/// Spans are never empty. A span returned by the scanner satisfies
/// `first < last <= end`, and `last` is where the next character starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharSpan {
    /// Position of the lead unit.
    pub first: usize,
    /// One past the last unit.
    pub last: usize,
    /// Whether the units form a complete character.
    pub status: SpanStatus,
}

impl CharSpan {
    pub(crate) fn new(first: usize, last: usize, status: SpanStatus) -> Self {
        debug_assert!(first < last, "empty span {first}..{last}");
        Self {
            first,
            last,
            status,
        }
    }

    /// Number of code units in the character.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.last - self.first
    }

    /// Always `false`; present for symmetry with [`CharSpan::len`].
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    /// The span as a `Range`.
    #[inline]
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.first..self.last
    }

    /// `true` if the span is a complete character of the encoding.
    #[inline]
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.status == SpanStatus::WellFormed
    }

    /// The units of `buffer` covered by this span.
    ///
    /// # Panics
    ///
    /// Panics if the span lies outside `buffer`, i.e. `buffer` is not the
    /// buffer the span was scanned from.
    #[inline]
    #[must_use]
    pub fn units<'b, U>(&self, buffer: &'b [U]) -> &'b [U] {
        &buffer[self.range()]
    }
}
