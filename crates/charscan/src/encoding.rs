//! Lead-unit classification rules.
//!
//! Every supported character set is described by a rule that maps the first
//! code unit of a character to the character's total width. Byte charsets use
//! a 256-entry [`ByteTable`] built at compile time, so the whole rule set is
//! immutable `static` data that can be shared between threads freely.

use core::{fmt, num::NonZeroU8, str::FromStr};

use crate::error::UnknownCharset;

/// How a lead unit is classified by an [`Encoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadClass {
    /// The unit starts a character that is this many units wide.
    Width(NonZeroU8),
    /// The unit does not start any character known to the encoding (a stray
    /// continuation byte, an unassigned lead, a lone low surrogate).
    Unmapped,
}

impl LeadClass {
    /// Width of a single-unit character.
    pub const SINGLE: Self = Self::Width(NonZeroU8::MIN);

    /// Returns the declared width, or `None` for unmapped units.
    #[must_use]
    pub fn width(self) -> Option<usize> {
        match self {
            Self::Width(w) => Some(usize::from(w.get())),
            Self::Unmapped => None,
        }
    }
}

/// A rule that classifies the lead unit of a character.
///
/// Implementations must be pure: the same unit always classifies the same
/// way. The scanner relies on this for its determinism guarantees.
pub trait Encoding {
    /// The storage unit of buffers in this encoding.
    type Unit: Copy + Into<u32>;

    /// Classifies `unit` as the first unit of a character.
    fn classify(&self, unit: Self::Unit) -> LeadClass;

    /// Human-readable name, used in diagnostics.
    fn name(&self) -> &str;
}

/// Lead-byte width table for a byte-oriented character set.
///
/// Entry `0` marks an unmapped lead byte; any other entry is the width of
/// the character the byte starts. Tables are built with `const fn` so custom
/// charsets can live in a `static` too:
///
/// ```rust
/// use charscan::{ByteTable, CharScanner};
///
/// // 0xF0..=0xFF start two-byte characters, 0x80..=0xBF are unused.
/// static MY_TABLE: ByteTable = ByteTable::single_byte("my-dbcs")
///     .with_range(0x80, 0xBF, 0)
///     .with_range(0xF0, 0xFF, 2);
///
/// let spans: Vec<_> = CharScanner::new(&MY_TABLE, b"a\xF1\x01")
///     .map(|s| s.unwrap().range())
///     .collect();
/// assert_eq!(spans, [0..1, 1..3]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ByteTable {
    name: &'static str,
    widths: [u8; 256],
}

impl ByteTable {
    /// A table in which every byte is a single-byte character.
    #[must_use]
    pub const fn single_byte(name: &'static str) -> Self {
        Self {
            name,
            widths: [1; 256],
        }
    }

    /// Sets the width of every byte in `lo..=hi`. A width of `0` marks the
    /// bytes as unmapped.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `static`) if `lo > hi`.
    #[must_use]
    pub const fn with_range(mut self, lo: u8, hi: u8, width: u8) -> Self {
        assert!(lo <= hi, "empty byte range");
        let mut b = lo as usize;
        while b <= hi as usize {
            self.widths[b] = width;
            b += 1;
        }
        self
    }

    /// Raw table entry for `byte`: `0` if unmapped, otherwise the width.
    #[inline]
    #[must_use]
    pub const fn width_of(&self, byte: u8) -> u8 {
        self.widths[byte as usize]
    }

    /// Largest width any lead byte declares.
    #[must_use]
    pub fn max_width(&self) -> u8 {
        self.widths.iter().copied().max().unwrap_or(1)
    }
}

impl Encoding for ByteTable {
    type Unit = u8;

    #[inline]
    fn classify(&self, unit: u8) -> LeadClass {
        match NonZeroU8::new(self.width_of(unit)) {
            Some(w) => LeadClass::Width(w),
            None => LeadClass::Unmapped,
        }
    }

    fn name(&self) -> &str {
        self.name
    }
}

impl fmt::Debug for ByteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteTable")
            .field("name", &self.name)
            .field("max_width", &self.max_width())
            .finish_non_exhaustive()
    }
}

static ASCII: ByteTable = ByteTable::single_byte("ascii").with_range(0x80, 0xFF, 0);

static LATIN1: ByteTable = ByteTable::single_byte("latin1");

static UTF8: ByteTable = ByteTable::single_byte("utf-8")
    .with_range(0x80, 0xC1, 0)
    .with_range(0xC2, 0xDF, 2)
    .with_range(0xE0, 0xEF, 3)
    .with_range(0xF0, 0xF4, 4)
    .with_range(0xF5, 0xFF, 0);

// Half-width katakana (0xA1..=0xDF) stay single-byte.
static SHIFT_JIS: ByteTable = ByteTable::single_byte("shift_jis")
    .with_range(0x81, 0x9F, 2)
    .with_range(0xE0, 0xFC, 2);

// SS2 (0x8E) prefixes a half-width kana, SS3 (0x8F) a JIS X 0212 pair.
static EUC_JP: ByteTable = ByteTable::single_byte("euc-jp")
    .with_range(0x8E, 0x8E, 2)
    .with_range(0x8F, 0x8F, 3)
    .with_range(0xA1, 0xFE, 2);

static EUC_KR: ByteTable = ByteTable::single_byte("euc-kr").with_range(0x81, 0xFE, 2);

static GBK: ByteTable = ByteTable::single_byte("gbk").with_range(0x81, 0xFE, 2);

static BIG5: ByteTable = ByteTable::single_byte("big5").with_range(0x81, 0xFE, 2);

/// The built-in byte character sets.
///
/// A `Charset` is usually picked once at startup (see [`Charset::from_str`])
/// and then passed to every scan; it resolves to one of the static
/// [`ByteTable`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Charset {
    /// 7-bit ASCII; bytes `0x80..=0xFF` are unmapped.
    Ascii,
    /// ISO-8859-1; every byte is one character.
    Latin1,
    /// UTF-8, lead bytes only (continuations are not validated).
    #[default]
    Utf8,
    /// Shift_JIS / CP932.
    ShiftJis,
    /// EUC-JP, including SS2 and SS3 sequences.
    EucJp,
    /// EUC-KR / CP949.
    EucKr,
    /// GBK / CP936 (and its GB2312 subset).
    Gbk,
    /// Big5 / CP950.
    Big5,
}

impl Charset {
    /// Every built-in charset, in declaration order.
    pub const ALL: [Charset; 8] = [
        Charset::Ascii,
        Charset::Latin1,
        Charset::Utf8,
        Charset::ShiftJis,
        Charset::EucJp,
        Charset::EucKr,
        Charset::Gbk,
        Charset::Big5,
    ];

    /// The static rule table for this charset.
    #[must_use]
    pub fn table(self) -> &'static ByteTable {
        match self {
            Charset::Ascii => &ASCII,
            Charset::Latin1 => &LATIN1,
            Charset::Utf8 => &UTF8,
            Charset::ShiftJis => &SHIFT_JIS,
            Charset::EucJp => &EUC_JP,
            Charset::EucKr => &EUC_KR,
            Charset::Gbk => &GBK,
            Charset::Big5 => &BIG5,
        }
    }

    /// Canonical label, as accepted by [`Charset::from_str`].
    #[must_use]
    pub fn label(self) -> &'static str {
        self.table().name
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Charset::Ascii => &["ascii", "usascii"],
            Charset::Latin1 => &["latin1", "iso88591"],
            Charset::Utf8 => &["utf8"],
            Charset::ShiftJis => &["shiftjis", "sjis", "cp932"],
            Charset::EucJp => &["eucjp"],
            Charset::EucKr => &["euckr", "cp949"],
            Charset::Gbk => &["gbk", "cp936", "gb2312"],
            Charset::Big5 => &["big5", "cp950"],
        }
    }
}

impl Encoding for Charset {
    type Unit = u8;

    #[inline]
    fn classify(&self, unit: u8) -> LeadClass {
        self.table().classify(unit)
    }

    fn name(&self) -> &str {
        self.label()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive match that ignores `-` and `_`, so `Shift_JIS`,
/// `shift-jis` and `SHIFTJIS` are the same label.
fn label_matches(label: &str, alias: &str) -> bool {
    label
        .chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .eq(alias.chars())
}

impl FromStr for Charset {
    type Err = UnknownCharset;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Charset::ALL
            .into_iter()
            .find(|cs| cs.aliases().iter().any(|alias| label_matches(label, alias)))
            .ok_or_else(|| UnknownCharset(label.into()))
    }
}

/// UTF-16 over `u16` code units.
///
/// High surrogates start a two-unit pair, lone low surrogates are unmapped,
/// and every other unit is a character on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf16;

const SURROGATE_PAIR: NonZeroU8 = NonZeroU8::new(2).unwrap();

impl Encoding for Utf16 {
    type Unit = u16;

    #[inline]
    fn classify(&self, unit: u16) -> LeadClass {
        match unit {
            0xD800..=0xDBFF => LeadClass::Width(SURROGATE_PAIR),
            0xDC00..=0xDFFF => LeadClass::Unmapped,
            _ => LeadClass::SINGLE,
        }
    }

    fn name(&self) -> &str {
        "utf-16"
    }
}
