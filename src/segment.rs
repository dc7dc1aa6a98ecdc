//! Channel and stream segments.

use std::fmt;
use std::str::FromStr;

use crate::code_point;
use crate::error::SegmentError;
use crate::modifier::Modifier;

/// A validated channel or stream segment: a name plus an optional modifier.
///
/// A segment starting with `@` is a channel; its name keeps the `@` and must
/// have at least one character after it. Any other segment is a stream and
/// may not contain `@` at all.
///
/// # Examples
///
/// ```
/// use lbry_url::Segment;
///
/// let chan = Segment::parse("@lbry").unwrap();
/// assert!(chan.is_channel());
/// assert_eq!(chan.name(), "@lbry");
///
/// let stream = Segment::parse("what*3").unwrap();
/// assert!(!stream.is_channel());
/// assert_eq!(stream.name(), "what");
/// assert_eq!(stream.sequence(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    name: String,
    modifier: Option<Modifier>,
}

impl Segment {
    /// Parses a segment from a string.
    ///
    /// # Errors
    ///
    /// Returns `SegmentError` if:
    /// - The segment is empty, or is a name-less modifier or bare `@`
    /// - The segment contains a forbidden code point or a `/`
    /// - `@` appears anywhere other than the first character of a channel
    /// - The modifier tail is malformed (see [`Modifier`])
    pub fn parse(input: &str) -> Result<Self, SegmentError> {
        if input.is_empty() {
            return Err(SegmentError::Empty);
        }

        for (i, c) in input.chars().enumerate() {
            if c == '/' || !code_point::is_allowed(c) {
                return Err(SegmentError::ForbiddenChar { char: c, position: i });
            }
        }

        let marker = input
            .char_indices()
            .find(|&(_, c)| Modifier::is_marker(c));
        let (name, modifier) = match marker {
            Some((idx, marker)) => {
                let modifier = Modifier::parse(marker, &input[idx + marker.len_utf8()..])?;
                (&input[..idx], Some(modifier))
            }
            None => (input, None),
        };

        Self::check_name(name)?;

        Ok(Self {
            name: name.to_string(),
            modifier,
        })
    }

    fn check_name(name: &str) -> Result<(), SegmentError> {
        if name.is_empty() {
            return Err(SegmentError::MissingName);
        }
        if let Some(rest) = name.strip_prefix('@') {
            if rest.is_empty() {
                return Err(SegmentError::MissingName);
            }
            if let Some(pos) = rest.chars().position(|c| c == '@') {
                return Err(SegmentError::StrayAt { position: pos + 1 });
            }
        } else if let Some(pos) = name.chars().position(|c| c == '@') {
            return Err(SegmentError::StrayAt { position: pos });
        }
        Ok(())
    }

    /// Returns the name, including the leading `@` for a channel.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the modifier, if present.
    #[must_use]
    pub const fn modifier(&self) -> Option<&Modifier> {
        self.modifier.as_ref()
    }

    /// Returns true if this segment names a channel.
    #[must_use]
    pub fn is_channel(&self) -> bool {
        self.name.starts_with('@')
    }

    /// Returns the claim id, if this segment carries one.
    #[must_use]
    pub fn claim_id(&self) -> Option<&str> {
        match &self.modifier {
            Some(Modifier::ClaimId(hex)) => Some(hex),
            _ => None,
        }
    }

    /// Returns the sequence rank, if this segment carries one.
    #[must_use]
    pub const fn sequence(&self) -> Option<u64> {
        match self.modifier {
            Some(Modifier::Sequence(n)) => Some(n),
            _ => None,
        }
    }

    /// Returns the amount-order rank, if this segment carries one.
    #[must_use]
    pub const fn amount_order(&self) -> Option<u64> {
        match self.modifier {
            Some(Modifier::AmountOrder(n)) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for Segment {
    /// Renders the canonical spelling: name, then the modifier with a `:`
    /// claim-id marker regardless of how the input spelled it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(modifier) = &self.modifier {
            write!(f, "{modifier}")?;
        }
        Ok(())
    }
}

impl FromStr for Segment {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Segment {
    type Error = SegmentError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Segment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Segment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_stream() {
        let seg = Segment::parse("test").unwrap();
        assert_eq!(seg.name(), "test");
        assert!(seg.modifier().is_none());
        assert!(!seg.is_channel());
    }

    #[test]
    fn parse_bare_channel() {
        let seg = Segment::parse("@test").unwrap();
        assert_eq!(seg.name(), "@test");
        assert!(seg.is_channel());
    }

    #[test]
    fn parse_stream_with_sequence() {
        let seg = Segment::parse("test*1").unwrap();
        assert_eq!(seg.name(), "test");
        assert_eq!(seg.sequence(), Some(1));
        assert_eq!(seg.amount_order(), None);
        assert_eq!(seg.claim_id(), None);
    }

    #[test]
    fn parse_channel_with_amount_order() {
        let seg = Segment::parse("@test$2").unwrap();
        assert_eq!(seg.name(), "@test");
        assert_eq!(seg.amount_order(), Some(2));
    }

    #[test]
    fn parse_claim_id() {
        let seg = Segment::parse("test:63f2da17b0d90042c559cc73b6b17f853945c43e").unwrap();
        assert_eq!(
            seg.claim_id(),
            Some("63f2da17b0d90042c559cc73b6b17f853945c43e")
        );
    }

    #[test]
    fn legacy_marker_normalizes_on_display() {
        let seg = Segment::parse("test#abc123").unwrap();
        assert_eq!(seg.claim_id(), Some("abc123"));
        assert_eq!(seg.to_string(), "test:abc123");
    }

    #[test]
    fn empty_segment_fails() {
        assert!(matches!(Segment::parse(""), Err(SegmentError::Empty)));
    }

    #[test]
    fn bare_at_fails() {
        assert!(matches!(Segment::parse("@"), Err(SegmentError::MissingName)));
        assert!(matches!(Segment::parse("@:aa"), Err(SegmentError::MissingName)));
    }

    #[test]
    fn nameless_modifier_fails() {
        assert!(matches!(Segment::parse("*1"), Err(SegmentError::MissingName)));
        assert!(matches!(Segment::parse(":aa"), Err(SegmentError::MissingName)));
    }

    #[test]
    fn stray_at_fails() {
        assert!(matches!(
            Segment::parse("@test@"),
            Err(SegmentError::StrayAt { position: 5 })
        ));
        assert!(matches!(
            Segment::parse("tes@t"),
            Err(SegmentError::StrayAt { position: 3 })
        ));
        assert!(matches!(
            Segment::parse("test@"),
            Err(SegmentError::StrayAt { position: 4 })
        ));
    }

    #[test]
    fn second_marker_fails() {
        // The tail after the first marker is validated strictly, so a second
        // marker can never sneak through.
        assert!(matches!(
            Segment::parse("test:3$1"),
            Err(SegmentError::InvalidClaimId { .. })
        ));
        assert!(matches!(
            Segment::parse("test$1:1"),
            Err(SegmentError::InvalidOrdinal { .. })
        ));
        assert!(matches!(
            Segment::parse("test:1:1:1"),
            Err(SegmentError::InvalidClaimId { .. })
        ));
    }

    #[test]
    fn trailing_marker_fails() {
        for input in ["test*", "test$", "test:", "test#", "@test:"] {
            assert!(matches!(
                Segment::parse(input),
                Err(SegmentError::EmptyModifier { .. })
            ));
        }
    }

    #[test]
    fn forbidden_char_fails() {
        assert!(matches!(
            Segment::parse("no space"),
            Err(SegmentError::ForbiddenChar { char: ' ', position: 2 })
        ));
        assert!(matches!(
            Segment::parse("a/b"),
            Err(SegmentError::ForbiddenChar { char: '/', position: 1 })
        ));
    }

    #[test]
    fn unicode_names_allowed() {
        for name in ["\u{D799}", "\u{E000}", "\u{FFFD}"] {
            let seg = Segment::parse(name).unwrap();
            assert_eq!(seg.name(), name);
        }
    }
}
