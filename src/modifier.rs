//! Claim disambiguators: sequence, amount order, and claim id.

use std::fmt;

use crate::constants::MAX_CLAIM_ID_LENGTH;
use crate::error::SegmentError;

/// A disambiguator attached to a channel or stream name.
///
/// Several claims may share a name; a modifier picks one of them. A segment
/// carries at most one modifier, enforced here by construction: the three
/// kinds are variants of a single enum rather than separate optional fields.
///
/// # Examples
///
/// ```
/// use lbry_url::{LbryUrl, Modifier};
///
/// let url = LbryUrl::parse("test*2").unwrap();
/// let stream = url.stream().unwrap();
/// assert_eq!(stream.modifier(), Some(&Modifier::Sequence(2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Positional rank among same-named claims, 1-based (`*n`)
    Sequence(u64),
    /// Bid-amount rank among same-named claims, 1-based (`$n`)
    AmountOrder(u64),
    /// Explicit claim id: 1-40 lowercase hex characters (`:hex`, legacy `#hex`)
    ClaimId(String),
}

impl Modifier {
    /// Returns true if the character introduces a modifier.
    #[must_use]
    pub const fn is_marker(c: char) -> bool {
        matches!(c, '*' | '$' | ':' | '#')
    }

    /// Parses the tail following a marker character.
    pub(crate) fn parse(marker: char, tail: &str) -> Result<Self, SegmentError> {
        match marker {
            '*' => Ok(Self::Sequence(parse_ordinal(marker, tail)?)),
            '$' => Ok(Self::AmountOrder(parse_ordinal(marker, tail)?)),
            _ => {
                debug_assert!(matches!(marker, ':' | '#'));
                Ok(Self::ClaimId(parse_claim_id(marker, tail)?))
            }
        }
    }
}

impl fmt::Display for Modifier {
    /// Renders the canonical spelling. A claim id always uses `:`, never the
    /// legacy `#`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(n) => write!(f, "*{n}"),
            Self::AmountOrder(n) => write!(f, "${n}"),
            Self::ClaimId(hex) => write!(f, ":{hex}"),
        }
    }
}

/// Parses a 1-based rank: decimal digits only, no leading zeros.
fn parse_ordinal(marker: char, tail: &str) -> Result<u64, SegmentError> {
    if tail.is_empty() {
        return Err(SegmentError::EmptyModifier { marker });
    }
    if !tail.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SegmentError::InvalidOrdinal {
            marker,
            value: tail.to_string(),
        });
    }
    if tail.starts_with('0') {
        return Err(SegmentError::ZeroOrdinal { marker });
    }
    tail.parse().map_err(|_| SegmentError::InvalidOrdinal {
        marker,
        value: tail.to_string(),
    })
}

/// Parses a claim id: 1-40 lowercase hex characters.
fn parse_claim_id(marker: char, tail: &str) -> Result<String, SegmentError> {
    if tail.is_empty() {
        return Err(SegmentError::EmptyModifier { marker });
    }
    if !tail.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return Err(SegmentError::InvalidClaimId {
            value: tail.to_string(),
        });
    }
    if tail.len() > MAX_CLAIM_ID_LENGTH {
        return Err(SegmentError::ClaimIdTooLong {
            max: MAX_CLAIM_ID_LENGTH,
            actual: tail.len(),
        });
    }
    Ok(tail.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sequence() {
        let m = Modifier::parse('*', "12").unwrap();
        assert_eq!(m, Modifier::Sequence(12));
    }

    #[test]
    fn parse_amount_order() {
        let m = Modifier::parse('$', "3").unwrap();
        assert_eq!(m, Modifier::AmountOrder(3));
    }

    #[test]
    fn parse_claim_id_canonical_and_legacy() {
        let hex = "63f2da17b0d90042c559cc73b6b17f853945c43e";
        let canonical = Modifier::parse(':', hex).unwrap();
        let legacy = Modifier::parse('#', hex).unwrap();
        assert_eq!(canonical, Modifier::ClaimId(hex.to_string()));
        assert_eq!(canonical, legacy);
    }

    #[test]
    fn short_claim_id_allowed() {
        let m = Modifier::parse(':', "1").unwrap();
        assert_eq!(m, Modifier::ClaimId("1".to_string()));
    }

    #[test]
    fn empty_tail_fails() {
        for marker in ['*', '$', ':', '#'] {
            assert!(matches!(
                Modifier::parse(marker, ""),
                Err(SegmentError::EmptyModifier { .. })
            ));
        }
    }

    #[test]
    fn zero_rank_fails() {
        assert!(matches!(
            Modifier::parse('*', "0"),
            Err(SegmentError::ZeroOrdinal { marker: '*' })
        ));
        assert!(matches!(
            Modifier::parse('$', "0"),
            Err(SegmentError::ZeroOrdinal { marker: '$' })
        ));
    }

    #[test]
    fn leading_zero_rank_fails() {
        assert!(matches!(
            Modifier::parse('*', "0001"),
            Err(SegmentError::ZeroOrdinal { .. })
        ));
    }

    #[test]
    fn non_digit_rank_fails() {
        assert!(matches!(
            Modifier::parse('$', "x"),
            Err(SegmentError::InvalidOrdinal { .. })
        ));
        assert!(matches!(
            Modifier::parse('*', "1ab"),
            Err(SegmentError::InvalidOrdinal { .. })
        ));
    }

    #[test]
    fn rank_overflow_fails() {
        let huge = "9".repeat(30);
        assert!(matches!(
            Modifier::parse('*', &huge),
            Err(SegmentError::InvalidOrdinal { .. })
        ));
    }

    #[test]
    fn uppercase_claim_id_fails() {
        assert!(matches!(
            Modifier::parse('#', "ABCDEF"),
            Err(SegmentError::InvalidClaimId { .. })
        ));
    }

    #[test]
    fn non_hex_claim_id_fails() {
        assert!(matches!(
            Modifier::parse(':', "0x123"),
            Err(SegmentError::InvalidClaimId { .. })
        ));
        assert!(matches!(
            Modifier::parse(':', "x"),
            Err(SegmentError::InvalidClaimId { .. })
        ));
    }

    #[test]
    fn overlong_claim_id_fails() {
        let hex = "a".repeat(41);
        assert!(matches!(
            Modifier::parse(':', &hex),
            Err(SegmentError::ClaimIdTooLong { max: 40, actual: 41 })
        ));
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(Modifier::Sequence(1).to_string(), "*1");
        assert_eq!(Modifier::AmountOrder(7).to_string(), "$7");
        assert_eq!(Modifier::ClaimId("ab12".to_string()).to_string(), ":ab12");
    }
}
