//! Prints every character of a few sample strings, one block per string.
//!
//! Each character is shown as its length in bytes followed by the decimal
//! value of each byte, and every string ends with a separator line:
//!
//! ```text
//! char length: 1
//! char: <102>
//! ...
//! ----------------------------
//! ```
//!
//! Run with
//!
//! ```bash
//! cargo run -p charscan --example print_chars
//! ```

use charscan::{CharScanner, Charset, ScanOptions, write_chars};

fn print_chars(charset: Charset, text: &[u8]) -> std::fmt::Result {
    let mut out = String::new();
    let spans = CharScanner::new(&charset, text)
        .with_options(ScanOptions::lenient())
        .filter_map(Result::ok);
    write_chars(&mut out, text, spans)?;
    print!("{out}");
    Ok(())
}

fn main() -> std::fmt::Result {
    print_chars(Charset::Ascii, b"foo")?;
    print_chars(Charset::Ascii, b"fo\x23 54")?;
    // "日本" in Shift_JIS, then a lead byte with no trail byte.
    print_chars(Charset::ShiftJis, b"\x93\xfa\x96\x7b\x82")?;
    Ok(())
}
