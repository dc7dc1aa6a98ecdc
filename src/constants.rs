//! Constants for LBRY URL validation.

/// The scheme prefix as it appears in a canonical URL.
pub const SCHEME_PREFIX: &str = "lbry://";

/// Maximum claim id length in hex characters (20 bytes).
pub const MAX_CLAIM_ID_LENGTH: usize = 40;
