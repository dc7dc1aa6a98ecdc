//! Code-point classification for URL bodies.
//!
//! The grammar is defined over Unicode scalar values, not over any particular
//! regex engine's character classes. Regex engines disagree on surrogates and
//! noncharacters, so the forbidden set is spelled out here as an explicit
//! table and evaluated one code point at a time.

/// Scalar ranges (inclusive) that may never appear in a URL body.
///
/// Covers all C0 controls plus ASCII space, the UTF-16 surrogate range, and
/// the two BMP noncharacters. `U+FFFD` and private-use characters are allowed.
const FORBIDDEN_RANGES: &[(u32, u32)] = &[
    (0x0000, 0x0020),
    (0xD800, 0xDFFF),
    (0xFFFE, 0xFFFF),
];

/// Punctuation reserved by the grammar and therefore forbidden in a body.
///
/// `? = &` are reserved for query syntax the grammar does not support;
/// the rest are structural characters of no current or future meaning.
/// The markers `@ / * $ : #` are NOT listed here: they pass this check and
/// are policed by the splitter and segment parser instead.
const FORBIDDEN_PUNCTUATION: &[u8] = b"<>{}[]%|^~`\"\\;?=&";

/// Returns true if the scalar value is allowed in a URL body.
///
/// Takes a raw `u32` so the surrogate range can be classified and tested even
/// though a Rust `char` can never hold one.
#[must_use]
pub const fn is_allowed_scalar(cp: u32) -> bool {
    let mut i = 0;
    while i < FORBIDDEN_RANGES.len() {
        let (lo, hi) = FORBIDDEN_RANGES[i];
        if cp >= lo && cp <= hi {
            return false;
        }
        i += 1;
    }
    let mut i = 0;
    while i < FORBIDDEN_PUNCTUATION.len() {
        if cp == FORBIDDEN_PUNCTUATION[i] as u32 {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns true if the character is allowed in a URL body.
#[must_use]
pub const fn is_allowed(c: char) -> bool {
    is_allowed_scalar(c as u32)
}
