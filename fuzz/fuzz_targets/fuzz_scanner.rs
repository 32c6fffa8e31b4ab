#![no_main]

use arbitrary::Arbitrary;
use charscan::{
    CharScanner, Charset, ScanOptions, TruncationPolicy, UnmappedLeadPolicy, Utf16, next_char,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    charset: u8,
    truncate: bool,
    strict_lead: bool,
    start: u16,
    end: u16,
    bytes: Vec<u8>,
}

impl Input {
    fn options(&self) -> ScanOptions {
        ScanOptions {
            truncation: if self.truncate {
                TruncationPolicy::Truncate
            } else {
                TruncationPolicy::Error
            },
            unmapped_lead: if self.strict_lead {
                UnmappedLeadPolicy::Error
            } else {
                UnmappedLeadPolicy::Single
            },
        }
    }

    /// A sub-range of the input, with sentinel units left past `end`.
    fn range(&self, len: usize) -> (usize, usize) {
        let a = usize::from(self.start) % (len + 1);
        let b = usize::from(self.end) % (len + 1);
        (a.min(b), a.max(b))
    }
}

/// Walk `[start, end)` and check that spans and skipped error regions tile
/// it exactly, never crossing `end`.
fn check_tiling<E>(encoding: &E, buffer: &[E::Unit], start: usize, end: usize, options: ScanOptions)
where
    E: charscan::Encoding + ?Sized,
{
    let mut at = start;
    for item in CharScanner::with_range(encoding, buffer, start, end).with_options(options) {
        let (first, last) = match item {
            Ok(span) => {
                assert!(!span.is_empty());
                (span.first, span.last)
            }
            Err(err) => (err.at(), err.resume_at()),
        };
        assert_eq!(first, at, "gap or overlap");
        assert!(last <= end, "read past end");
        at = last;
    }
    assert_eq!(at, end);
    assert_eq!(next_char(encoding, buffer, end, end, options), Ok(None));
}

fuzz_target!(|input: Input| {
    let options = input.options();

    let charset = Charset::ALL[usize::from(input.charset) % Charset::ALL.len()];
    let (start, end) = input.range(input.bytes.len());
    check_tiling(&charset, &input.bytes, start, end, options);

    let units: Vec<u16> = input
        .bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let (start, end) = input.range(units.len());
    check_tiling(&Utf16, &units, start, end, options);
});
