//! Main LBRY URL type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::code_point;
use crate::constants::SCHEME_PREFIX;
use crate::error::{ParseError, ParseErrorKind};
use crate::segment::Segment;

/// A parsed and validated LBRY URL.
///
/// An LBRY URL names a channel, a stream, or a stream nested under a channel:
///
/// ```text
/// lbry://@channel[modifier][/stream[modifier]]
/// lbry://stream[modifier]
/// ```
///
/// The scheme prefix is optional on input and always present on output; the
/// legacy `#` claim-id marker is accepted on input and rendered as `:` on
/// output. [`is_canonical`](Self::is_canonical) reports whether the input
/// already was in the normalized spelling.
///
/// # Examples
///
/// ```
/// use lbry_url::LbryUrl;
///
/// let url = LbryUrl::parse("lbry://@chan/stream").unwrap();
/// assert_eq!(url.channel().unwrap().name(), "@chan");
/// assert_eq!(url.stream().unwrap().name(), "stream");
/// assert!(url.is_canonical());
///
/// // Legacy spelling: same fields, different serialization
/// let legacy = LbryUrl::parse("test#63f2da17b0d90042c559cc73b6b17f853945c43e").unwrap();
/// assert!(!legacy.is_canonical());
/// assert_eq!(
///     legacy.to_string(),
///     "lbry://test:63f2da17b0d90042c559cc73b6b17f853945c43e"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LbryUrl {
    channel: Option<Segment>,
    stream: Option<Segment>,
    /// Canonical string representation
    normalized: String,
    is_canonical: bool,
}

impl LbryUrl {
    /// Parses an LBRY URL from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The body is empty, or the scheme prefix is repeated or misplaced
    /// - Any character falls outside the allowed code-point set
    /// - A `/` path follows a bare stream, or nests more than one level
    /// - Either segment is malformed (see [`Segment`])
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Creates an LBRY URL from already-parsed segments.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if both segments are absent, if the channel slot
    /// holds a stream segment, or if the stream slot holds a channel segment.
    pub fn new(channel: Option<Segment>, stream: Option<Segment>) -> Result<Self, ParseError> {
        let misplaced = channel.as_ref().is_some_and(|c| !c.is_channel())
            || stream.as_ref().is_some_and(Segment::is_channel);
        if misplaced {
            return Err(ParseError {
                input: Self::normalize(channel.as_ref(), stream.as_ref()),
                kind: ParseErrorKind::MisplacedSegment,
            });
        }
        if channel.is_none() && stream.is_none() {
            return Err(ParseError {
                input: String::new(),
                kind: ParseErrorKind::Empty,
            });
        }

        let normalized = Self::normalize(channel.as_ref(), stream.as_ref());
        Ok(Self {
            channel,
            stream,
            normalized,
            is_canonical: true,
        })
    }

    /// Returns the channel segment, if present.
    #[must_use]
    pub const fn channel(&self) -> Option<&Segment> {
        self.channel.as_ref()
    }

    /// Returns the stream segment, if present.
    #[must_use]
    pub const fn stream(&self) -> Option<&Segment> {
        self.stream.as_ref()
    }

    /// Returns true if the parsed input was already in canonical form:
    /// scheme prefix present and a `:` claim-id marker, if any.
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        self.is_canonical
    }

    /// Returns the canonical URL string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        // The scheme prefix is optional; strip at most one occurrence.
        let body = input.strip_prefix(SCHEME_PREFIX).unwrap_or(input);

        if body.contains(SCHEME_PREFIX) {
            return Err(ParseErrorKind::MisplacedScheme);
        }
        if body.is_empty() {
            return Err(ParseErrorKind::Empty);
        }

        for (i, c) in body.chars().enumerate() {
            if !code_point::is_allowed(c) {
                return Err(ParseErrorKind::ForbiddenChar { char: c, position: i });
            }
        }

        if body.starts_with('/') {
            return Err(ParseErrorKind::MissingName);
        }

        let (channel, stream) = match body.split_once('/') {
            Some((before, after)) => {
                // Only a channel may carry a path, and only one level deep.
                if !before.starts_with('@') || after.contains('/') {
                    return Err(ParseErrorKind::UnexpectedPath);
                }
                let channel = Segment::parse(before).map_err(ParseErrorKind::InvalidSegment)?;
                let stream = Segment::parse(after).map_err(ParseErrorKind::InvalidSegment)?;
                (Some(channel), Some(stream))
            }
            None => {
                let segment = Segment::parse(body).map_err(ParseErrorKind::InvalidSegment)?;
                if segment.is_channel() {
                    (Some(segment), None)
                } else {
                    (None, Some(segment))
                }
            }
        };

        let normalized = Self::normalize(channel.as_ref(), stream.as_ref());
        let is_canonical = input == normalized;

        Ok(Self {
            channel,
            stream,
            normalized,
            is_canonical,
        })
    }

    fn normalize(channel: Option<&Segment>, stream: Option<&Segment>) -> String {
        let mut out = String::from(SCHEME_PREFIX);
        if let Some(channel) = channel {
            out.push_str(&channel.to_string());
            if stream.is_some() {
                out.push('/');
            }
        }
        if let Some(stream) = stream {
            out.push_str(&stream.to_string());
        }
        out
    }
}

impl fmt::Display for LbryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl FromStr for LbryUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for LbryUrl {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for LbryUrl {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

/// Equality is structural: the canonical and legacy spellings of the same
/// channel/stream fields compare equal.
impl PartialEq for LbryUrl {
    fn eq(&self, other: &Self) -> bool {
        self.channel == other.channel && self.stream == other.stream
    }
}

impl Eq for LbryUrl {}

impl Hash for LbryUrl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // The normalized form is a function of (channel, stream), so this
        // stays consistent with PartialEq.
        self.normalized.hash(state);
    }
}

impl PartialOrd for LbryUrl {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LbryUrl {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LbryUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LbryUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
