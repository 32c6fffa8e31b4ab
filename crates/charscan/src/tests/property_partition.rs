use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::utils::test_count;
use crate::{CharScanner, Charset, ScanOptions, Utf16, next_char};

/// Picks a charset and a sub-range `[start, end)` of `bytes` from the raw
/// quickcheck inputs.
fn region(bytes: &[u8], charset: u8, a: usize, b: usize) -> (Charset, usize, usize) {
    let charset = Charset::ALL[usize::from(charset) % Charset::ALL.len()];
    let len = bytes.len() + 1;
    let (x, y) = (a % len, b % len);
    (charset, x.min(y), x.max(y))
}

/// Property: with lenient options, the spans from `start` tile `[start, end)`
/// exactly and concatenate back to `bytes[start..end]`.
#[test]
fn partition_lenient_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, charset: u8, a: usize, b: usize) -> bool {
        let (charset, start, end) = region(&bytes, charset, a, b);
        let mut expected_first = start;
        let mut rebuilt = Vec::new();
        for span in CharScanner::with_range(&charset, &bytes, start, end)
            .with_options(ScanOptions::lenient())
        {
            let Ok(span) = span else { return false };
            if span.first != expected_first || span.is_empty() || span.last > end {
                return false;
            }
            rebuilt.extend_from_slice(span.units(&bytes));
            expected_first = span.last;
        }
        expected_first == end && rebuilt == bytes[start..end]
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>, u8, usize, usize) -> bool);
}

/// Property: under strict options the spans and the skipped error regions
/// together still cover `[start, end)` with no gaps or overlaps.
#[test]
fn partition_strict_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, charset: u8, a: usize, b: usize) -> bool {
        let (charset, start, end) = region(&bytes, charset, a, b);
        let mut at = start;
        for item in CharScanner::with_range(&charset, &bytes, start, end)
            .with_options(ScanOptions::strict())
        {
            let (first, last) = match item {
                Ok(span) => (span.first, span.last),
                Err(err) => (err.at(), err.resume_at()),
            };
            if first != at || last <= first || last > end {
                return false;
            }
            at = last;
        }
        at == end
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>, u8, usize, usize) -> bool);
}

/// Property: scanning the same input twice gives identical results, for
/// every policy combination.
#[test]
fn scan_is_deterministic_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, charset: u8, strict: bool) -> bool {
        let (charset, _, _) = region(&bytes, charset, 0, 0);
        let options = if strict {
            ScanOptions::strict()
        } else {
            ScanOptions::lenient()
        };
        let run = || -> Vec<_> {
            CharScanner::new(&charset, &bytes)
                .with_options(options)
                .collect()
        };
        run() == run()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>, u8, bool) -> bool);
}

/// Property: the pure form agrees with the iterator, span for span.
#[test]
fn next_char_matches_iterator_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(units: Vec<u16>) -> bool {
        let options = ScanOptions::lenient();
        let mut cursor = 0;
        for span in CharScanner::new(&Utf16, &units).with_options(options) {
            match next_char(&Utf16, &units, cursor, units.len(), options) {
                Ok(Some(pure)) if Ok(pure) == span => cursor = pure.last,
                _ => return false,
            }
        }
        cursor == units.len()
            && next_char(&Utf16, &units, cursor, units.len(), options) == Ok(None)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u16>) -> bool);
}
