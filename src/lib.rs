//! Random 128-bit identifiers in canonical textual form
//!
//! ```rust
//! let text = randid::generate_identifier()?;
//! println!("{}", text); // e.g., "3f9c1e02-7ab4-d58e-0c61-92fd4e7a1b08"
//!
//! let bytes = randid::parse_identifier(&text)?;
//! assert_eq!(randid::format_identifier(&bytes)?, text);
//! # Ok::<(), randid::Error>(())
//! ```
//!
//! An identifier is 16 bytes drawn from a cryptographically secure random source, written as
//! five groups of lowercase hexadecimal digits separated by hyphens:
//!
//! ```text
//! xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
//!  4 bytes  2    2    2      6 bytes
//! ```
//!
//! No version or variant bits are set, so the text looks like a UUID but makes no claim about
//! any particular UUID version.
//!
//! # Entropy sources
//!
//! Functions without a source argument read from [`SystemEntropy`], the operating system's
//! secure random source. The `_with_source` variants accept any [`EntropySource`], and `None`
//! stands for an absent source:
//!
//! ```rust
//! use randid::{generate_identifier_with_source, with_rand08::Adapter, Error};
//!
//! let text = generate_identifier_with_source(Some(Adapter(rand::rngs::OsRng)))?;
//! assert_eq!(text.len(), 36);
//!
//! let absent = generate_identifier_with_source(None::<randid::SystemEntropy>);
//! assert!(matches!(absent, Err(Error::InvalidArgument)));
//! # Ok::<(), randid::Error>(())
//! ```
//!
//! # Crate features
//!
//! - `serde`: `Serialize` and `Deserialize` for [`Identifier`]
//! - `uuid`: conversions between [`Identifier`] and `uuid::Uuid`
//! - `tracing`: emits `tracing` events when an entropy source fails

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, Result};

mod id;
pub use id::{format_identifier, parse_identifier, Identifier, BYTE_LEN, TEXT_LEN};

pub mod source;
#[doc(inline)]
pub use source::{with_io, with_rand08, EntropySource, SystemEntropy};

mod random;
pub use random::{random_bytes, random_bytes_with_source};

mod entry;
pub use entry::{
    generate_identifier, generate_identifier_or_panic, generate_identifier_with_source,
};
