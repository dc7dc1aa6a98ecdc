//! Error types for LBRY URL parsing.

use std::fmt;

/// Error returned when an input is not a valid LBRY URL.
///
/// Parsing never partially succeeds: any rule violation at any stage
/// (character class, scheme, structure, modifier value) produces this one
/// error and no structure. The [`ParseErrorKind`] inside exists only for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The rule that rejected it
    pub kind: ParseErrorKind,
}

/// The specific rule that rejected an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The URL body is empty (empty input, or bare `lbry://`)
    Empty,
    /// The scheme prefix appears somewhere other than the start, or twice
    MisplacedScheme,
    /// A character outside the allowed code-point set
    ForbiddenChar {
        /// The forbidden character
        char: char,
        /// Position in the body, in characters
        position: usize,
    },
    /// The body starts with `/`, so there is no name before the separator
    MissingName,
    /// A `/` path is only allowed after a channel, and only one level deep
    UnexpectedPath,
    /// A channel or stream segment is malformed
    InvalidSegment(SegmentError),
    /// A stream segment in the channel slot, or a channel segment in the
    /// stream slot, when constructing from components
    MisplacedSegment,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid LBRY URL '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "URL has no body"),
            ParseErrorKind::MisplacedScheme => {
                write!(f, "'lbry://' may only appear once, at the start")
            }
            ParseErrorKind::ForbiddenChar { char, position } => {
                write!(f, "forbidden character '{}' at position {position}", char.escape_debug())
            }
            ParseErrorKind::MissingName => write!(f, "no name before '/'"),
            ParseErrorKind::UnexpectedPath => {
                write!(f, "a stream may only be nested one level below a channel")
            }
            ParseErrorKind::InvalidSegment(e) => write!(f, "{e}"),
            ParseErrorKind::MisplacedSegment => {
                write!(f, "channel and stream segments are in the wrong slots")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors for channel/stream segment parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// Segment is empty
    Empty,
    /// Segment has a modifier marker but no name before it, or a bare `@`
    MissingName,
    /// A character outside the allowed code-point set, or a stray `/`
    ForbiddenChar {
        /// The forbidden character
        char: char,
        /// Position in the segment, in characters
        position: usize,
    },
    /// `@` is only allowed as the first character of a channel
    StrayAt {
        /// Position of the stray `@`, in characters
        position: usize,
    },
    /// A modifier marker with nothing after it (`test*`, `test$`, `test:`, `test#`)
    EmptyModifier {
        /// The trailing marker
        marker: char,
    },
    /// Sequence or amount-order tail is not a positive decimal number
    InvalidOrdinal {
        /// The marker introducing the ordinal (`*` or `$`)
        marker: char,
        /// The rejected tail
        value: String,
    },
    /// Sequence or amount-order starting with `0` (ranks are 1-based)
    ZeroOrdinal {
        /// The marker introducing the ordinal (`*` or `$`)
        marker: char,
    },
    /// Claim id tail is not lowercase hex
    InvalidClaimId {
        /// The rejected tail
        value: String,
    },
    /// Claim id tail exceeds 40 hex characters
    ClaimIdTooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "segment cannot be empty"),
            Self::MissingName => write!(f, "segment has no name"),
            Self::ForbiddenChar { char, position } => {
                write!(f, "forbidden character '{}' at position {position}", char.escape_debug())
            }
            Self::StrayAt { position } => {
                write!(f, "'@' at position {position}; only a channel may start with '@'")
            }
            Self::EmptyModifier { marker } => {
                write!(f, "modifier '{marker}' has no value")
            }
            Self::InvalidOrdinal { marker, value } => {
                write!(f, "'{marker}{value}' is not a positive decimal number")
            }
            Self::ZeroOrdinal { marker } => {
                write!(f, "'{marker}' rank must be 1 or greater, without leading zeros")
            }
            Self::InvalidClaimId { value } => {
                write!(f, "claim id '{value}' is not lowercase hex")
            }
            Self::ClaimIdTooLong { max, actual } => {
                write!(f, "claim id is {actual} hex chars, max is {max}")
            }
        }
    }
}

impl std::error::Error for SegmentError {}
