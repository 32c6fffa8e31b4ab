//! Character-boundary scanning for multi-unit character sets.
//!
//! Given a buffer of code units, a cursor and an end position, the scanner
//! determines where the current logical character ends and advances the
//! cursor past it. It never decodes the character; it only delimits the units
//! that belong to it. The lead unit of every character decides its width
//! through a static rule table (see [`Charset`] and [`Utf16`]).
//!
//! ```rust
//! use charscan::{CharScanner, Charset};
//!
//! let text = b"a\x82\xa0b"; // 'a', one Shift_JIS double-byte char, 'b'
//! let widths: Vec<usize> = CharScanner::new(&Charset::ShiftJis, text)
//!     .map(|span| span.unwrap().len())
//!     .collect();
//! assert_eq!(widths, [1, 2, 1]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod chunk_utils;
mod encoding;
mod error;
mod options;
mod print;
mod scanner;
mod span;

#[cfg(test)]
mod tests;

pub use chunk_utils::{count_chars, produce_chunks, produce_prefixes};
pub use encoding::{ByteTable, Charset, Encoding, LeadClass, Utf16};
pub use error::{ScanError, UnknownCharset};
pub use options::{ScanOptions, TruncationPolicy, UnmappedLeadPolicy};
pub use print::{
    SEPARATOR, render_buffer, write_buffer, write_chars, write_escaped, write_escaped_buffer,
};
pub use scanner::{CharScanner, next_char, pop_next_char};
pub use span::{CharSpan, SpanStatus};
