//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use lbry_url::prelude::*;
//!
//! let url = LbryUrl::parse("lbry://@chan/stream").unwrap();
//! assert_eq!(url.channel().unwrap().name(), "@chan");
//! ```

pub use crate::{
    // Core types
    LbryUrl, Modifier, Segment,
    // Errors
    ParseError, ParseErrorKind, SegmentError,
    // Constants
    MAX_CLAIM_ID_LENGTH, SCHEME_PREFIX,
};
