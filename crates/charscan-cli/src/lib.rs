//! Command-line front end for `charscan`.
//!
//! Prints the character spans of files (or literal strings) in the
//! diagnostic format of [`charscan::write_buffer`], which makes encoding
//! problems in real file names and file contents visible byte by byte.

use std::{
    env,
    ffi::{OsStr, OsString},
    fmt, fs,
    io::{self, Write},
    path::PathBuf,
    sync::Once,
};

use charscan::{
    Charset, ScanOptions, TruncationPolicy, UnknownCharset, UnmappedLeadPolicy, write_buffer,
    write_escaped_buffer,
};
use thiserror::Error;

/// Environment variable holding the default charset label.
pub const CHARSET_ENV: &str = "CHARSCAN_CHARSET";

/// Usage text shown by `--help` and on argument errors.
pub const USAGE: &str = "\
Usage: charscan [options] [--] <input>...

Prints the length and unit values of every character in each input.

Options:
  --charset <label>   Character set (default: $CHARSCAN_CHARSET or utf-8)
  --truncate          Report a character cut off at end of input as a span
  --strict-lead       Report bytes that start no character as errors
  --escaped           Show characters as escaped byte strings
  --literal           Treat inputs as text instead of file paths
  -h, --help          Show this help";

/// Errors that end a `charscan` run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),
    /// `--charset` or `CHARSCAN_CHARSET` names no known charset.
    #[error(transparent)]
    Charset(#[from] UnknownCharset),
    /// An input file could not be read.
    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        /// The input path.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// Output could not be written.
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
    /// Output could not be formatted.
    #[error("cannot format output")]
    Format(#[from] fmt::Error),
}

/// What the command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Print [`USAGE`].
    Help,
    /// Scan the configured inputs.
    Scan(Config),
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Charset used for every input.
    pub charset: Charset,
    /// Scanner policies.
    pub options: ScanOptions,
    /// Render characters as escaped byte strings.
    pub escaped: bool,
    /// Inputs are literal text rather than paths.
    pub literal: bool,
    /// Files or literal strings to scan, kept as raw OS strings so that
    /// names and text in any encoding pass through unchanged.
    pub inputs: Vec<OsString>,
}

impl Config {
    /// Parses command-line arguments (without the program name).
    ///
    /// Arguments need not be valid UTF-8; only flags and charset labels are
    /// read as text.
    ///
    /// `default_charset` is the value of [`CHARSET_ENV`], if set; `--charset`
    /// overrides it.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Usage`] for unknown flags or missing inputs and
    /// [`CliError::Charset`] for an unknown charset label.
    pub fn from_args<I>(args: I, default_charset: Option<&str>) -> Result<Command, CliError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut charset_label = default_charset.map(str::to_owned);
        let mut options = ScanOptions::default();
        let mut escaped = false;
        let mut literal = false;
        let mut inputs = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if let Some(label) = arg.to_str().and_then(|a| a.strip_prefix("--charset=")) {
                charset_label = Some(label.to_owned());
                continue;
            }
            match arg.to_str() {
                Some("-h" | "--help") => return Ok(Command::Help),
                Some("--truncate") => options.truncation = TruncationPolicy::Truncate,
                Some("--strict-lead") => options.unmapped_lead = UnmappedLeadPolicy::Error,
                Some("--escaped") => escaped = true,
                Some("--literal") => literal = true,
                Some("--charset") => {
                    let Some(label) = args.next() else {
                        return Err(CliError::Usage("--charset needs a label".into()));
                    };
                    charset_label = Some(utf8_label(label)?);
                }
                Some("--") => {
                    inputs.extend(args.by_ref());
                }
                _ => {
                    let raw = arg.as_encoded_bytes();
                    if raw.len() > 1 && raw[0] == b'-' {
                        return Err(CliError::Usage(format!(
                            "unknown option `{}`",
                            arg.to_string_lossy()
                        )));
                    }
                    inputs.push(arg);
                }
            }
        }

        if inputs.is_empty() {
            return Err(CliError::Usage("no inputs given".into()));
        }

        let charset = match charset_label {
            Some(label) => label.parse()?,
            None => Charset::default(),
        };

        Ok(Command::Scan(Config {
            charset,
            options,
            escaped,
            literal,
            inputs,
        }))
    }
}

fn utf8_label(label: OsString) -> Result<String, CliError> {
    label.into_string().map_err(|label| {
        CliError::Usage(format!(
            "charset label `{}` is not valid UTF-8",
            label.to_string_lossy()
        ))
    })
}

fn read_input(config: &Config, input: &OsStr) -> Result<Vec<u8>, CliError> {
    if config.literal {
        return Ok(input.as_encoded_bytes().to_vec());
    }
    let path = PathBuf::from(input);
    fs::read(&path).map_err(|source| CliError::Read { path, source })
}

fn render(config: &Config, bytes: &[u8]) -> Result<String, CliError> {
    let mut out = String::new();
    if config.escaped {
        write_escaped_buffer(&mut out, &config.charset, bytes, config.options)?;
    } else {
        write_buffer(&mut out, &config.charset, bytes, config.options)?;
    }
    Ok(out)
}

/// Scans every input and writes its characters to `out`.
///
/// With more than one input, each block is preceded by a `==> input <==`
/// header line.
///
/// # Errors
///
/// Returns the first read or write error.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<(), CliError> {
    let headers = config.inputs.len() > 1;
    for input in &config.inputs {
        let bytes = read_input(config, input)?;
        let name = input.to_string_lossy();
        tracing::debug!(
            input = %name,
            len = bytes.len(),
            charset = %config.charset,
            "scanning input"
        );
        if headers {
            writeln!(out, "==> {name} <==")?;
        }
        out.write_all(render(config, &bytes)?.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

static TRACING_INIT: Once = Once::new();

/// Installs a `tracing` subscriber writing to stderr.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=charscan=debug` or `RUST_LOG=charscan_cli=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        // Only initialize if RUST_LOG is set
        if env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
