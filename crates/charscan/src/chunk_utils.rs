use alloc::vec::Vec;

use crate::{
    encoding::Encoding,
    error::ScanError,
    options::ScanOptions,
    scanner::{CharScanner, next_char},
};

/// Split `buffer` into approximately equal-sized chunks without breaking
/// characters.
///
/// Each chunk is extended to the next character boundary, so chunks may be
/// a few units longer than `buffer.len() / parts`. Malformed sequences are
/// kept whole the same way [`ScanOptions::lenient`] scans them.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks<'b, E: Encoding + ?Sized>(
    encoding: &E,
    buffer: &'b [E::Unit],
    parts: usize,
) -> Vec<&'b [E::Unit]> {
    assert!(parts > 0);
    let len = buffer.len();
    let chunk_size = len.div_ceil(parts);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut boundary = 0;
    while start < len {
        let target = core::cmp::min(start + chunk_size, len);
        while boundary < target {
            boundary = match next_char(encoding, buffer, boundary, len, ScanOptions::lenient()) {
                Ok(Some(span)) => span.last,
                // Lenient scans neither fail nor stop before `len`.
                Ok(None) | Err(_) => len,
            };
        }
        chunks.push(&buffer[start..boundary]);
        start = boundary;
    }
    chunks
}

/// Return a sequence of prefixes converging to `buffer`, each ending on a
/// character boundary.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_prefixes<'b, E: Encoding + ?Sized>(
    encoding: &E,
    buffer: &'b [E::Unit],
    parts: usize,
) -> Vec<&'b [E::Unit]> {
    let chunks = produce_chunks(encoding, buffer, parts);
    let mut prefixes = Vec::with_capacity(chunks.len());
    let mut end = 0;
    for chunk in chunks {
        end += chunk.len();
        prefixes.push(&buffer[..end]);
    }
    prefixes
}

/// Number of characters in `buffer`.
///
/// # Errors
///
/// Returns the first [`ScanError`] the scan reports under `options`.
pub fn count_chars<E: Encoding + ?Sized>(
    encoding: &E,
    buffer: &[E::Unit],
    options: ScanOptions,
) -> Result<usize, ScanError> {
    CharScanner::new(encoding, buffer)
        .with_options(options)
        .try_fold(0, |n, span| span.map(|_| n + 1))
}
