//! Diagnostic rendering of character spans.
//!
//! Each character becomes two lines, its length and its unit values, and the
//! end of input is marked with [`SEPARATOR`]:
//!
//! ```text
//! char length: 2
//! char: <130,160>
//! ----------------------------
//! ```

use alloc::string::String;
use core::fmt::{self, Write};

use bstr::BStr;

use crate::{encoding::Encoding, options::ScanOptions, scanner::CharScanner, span::CharSpan};

/// Line written after the last character of a buffer.
pub const SEPARATOR: &str = "----------------------------";

fn write_span<W, U>(out: &mut W, buffer: &[U], span: CharSpan) -> fmt::Result
where
    W: Write + ?Sized,
    U: Copy + Into<u32>,
{
    writeln!(out, "char length: {}", span.len())?;
    out.write_str("char: <")?;
    for (i, &unit) in span.units(buffer).iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write!(out, "{}", unit.into())?;
    }
    out.write_str(">\n")
}

fn write_escaped_span<W>(out: &mut W, buffer: &[u8], span: CharSpan) -> fmt::Result
where
    W: Write + ?Sized,
{
    writeln!(out, "char length: {}", span.len())?;
    writeln!(out, "char: {:?}", BStr::new(span.units(buffer)))
}

/// Writes every span in `spans`, then the separator.
///
/// Unit values are written as unsigned decimals.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_chars<W, U, I>(out: &mut W, buffer: &[U], spans: I) -> fmt::Result
where
    W: Write + ?Sized,
    U: Copy + Into<u32>,
    I: IntoIterator<Item = CharSpan>,
{
    for span in spans {
        write_span(out, buffer, span)?;
    }
    writeln!(out, "{SEPARATOR}")
}

/// Scans all of `buffer` and writes its characters, then the separator.
///
/// Scan errors do not stop the output: each one is written as an
/// `error: ...` line and scanning resumes past the malformed units.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_buffer<W, E>(
    out: &mut W,
    encoding: &E,
    buffer: &[E::Unit],
    options: ScanOptions,
) -> fmt::Result
where
    W: Write + ?Sized,
    E: Encoding + ?Sized,
{
    for item in CharScanner::new(encoding, buffer).with_options(options) {
        match item {
            Ok(span) => write_span(out, buffer, span)?,
            Err(err) => writeln!(out, "error: {err}")?,
        }
    }
    writeln!(out, "{SEPARATOR}")
}

/// [`write_buffer`] into a new `String`.
#[must_use]
pub fn render_buffer<E: Encoding + ?Sized>(
    encoding: &E,
    buffer: &[E::Unit],
    options: ScanOptions,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_buffer(&mut out, encoding, buffer, options);
    out
}

/// Like [`write_chars`] for byte buffers, but shows each character as an
/// escaped byte string (`"a"`, `"\x82\xA0"`, `"é"`) instead of numbers.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_escaped<W, I>(out: &mut W, buffer: &[u8], spans: I) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator<Item = CharSpan>,
{
    for span in spans {
        write_escaped_span(out, buffer, span)?;
    }
    writeln!(out, "{SEPARATOR}")
}

/// [`write_buffer`] for byte buffers, with characters shown as escaped byte
/// strings as in [`write_escaped`].
///
/// Scan errors are written as `error: ...` lines where they occur.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_escaped_buffer<W, E>(
    out: &mut W,
    encoding: &E,
    buffer: &[u8],
    options: ScanOptions,
) -> fmt::Result
where
    W: Write + ?Sized,
    E: Encoding<Unit = u8> + ?Sized,
{
    for item in CharScanner::new(encoding, buffer).with_options(options) {
        match item {
            Ok(span) => write_escaped_span(out, buffer, span)?,
            Err(err) => writeln!(out, "error: {err}")?,
        }
    }
    writeln!(out, "{SEPARATOR}")
}
