//! Parser, validator, and canonicalizer for the `lbry://` URL scheme.
//!
//! LBRY URLs name channels and streams inside a decentralized content index:
//!
//! ```text
//! lbry://@channel[modifier][/stream[modifier]]
//! lbry://stream[modifier]
//! ```
//!
//! A name may carry at most one modifier picking a claim among several with
//! the same name:
//!
//! | Marker | Meaning | Example |
//! |--------|------------------------------------|------------------|
//! | `*n` | positional rank (sequence) | `lbry://test*2` |
//! | `$n` | bid-amount rank (amount order) | `lbry://test$1` |
//! | `:hex` | explicit claim id, 1-40 hex chars | `lbry://test:63f2...` |
//! | `#hex` | legacy claim-id spelling | `test#63f2...` |
//!
//! Parsing is a pure function from text to a structured [`LbryUrl`] or a
//! single [`ParseError`]; no resolution, network, or storage is involved.
//! Serialization always produces the canonical form: scheme prefix present
//! and `#` normalized to `:`.
//!
//! # Quick Start
//!
//! ```rust
//! use lbry_url::LbryUrl;
//!
//! let url = LbryUrl::parse("lbry://@chan*2/stream").unwrap();
//!
//! let channel = url.channel().unwrap();
//! assert_eq!(channel.name(), "@chan");
//! assert_eq!(channel.sequence(), Some(2));
//! assert_eq!(url.stream().unwrap().name(), "stream");
//!
//! // The scheme prefix is optional on input
//! let loose = LbryUrl::parse("test#abc123").unwrap();
//! assert!(!loose.is_canonical());
//! assert_eq!(loose.to_string(), "lbry://test:abc123");
//! ```
//!
//! # Grammar notes
//!
//! The allowed character set is defined over Unicode scalar values in
//! [`code_point`], independent of any regex engine: all C0 controls, space,
//! grammar-reserved punctuation, the surrogate range, and `U+FFFE`/`U+FFFF`
//! are forbidden everywhere in a URL body. `U+FFFD` and private-use
//! characters are allowed.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod code_point;
mod constants;
mod error;
mod modifier;
pub mod prelude;
mod segment;
mod url;

pub use constants::{MAX_CLAIM_ID_LENGTH, SCHEME_PREFIX};
pub use error::{ParseError, ParseErrorKind, SegmentError};
pub use modifier::Modifier;
pub use segment::Segment;
pub use url::LbryUrl;
