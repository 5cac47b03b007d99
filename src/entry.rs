//! Default source and entry point functions

use crate::{
    format_identifier, id::BYTE_LEN, random_bytes_with_source, EntropySource, Result,
    SystemEntropy,
};

/// Generates a random identifier in the canonical 8-4-4-4-12 textual form.
///
/// This function reads 16 bytes from the process default secure source ([`SystemEntropy`]).
///
/// # Examples
///
/// ```rust
/// let text = randid::generate_identifier()?;
/// println!("{text}"); // e.g., "9b2e4c71-05fa-d38e-6a1c-f4e2b07d9c35"
/// assert_eq!(text.len(), 36);
/// # Ok::<(), randid::Error>(())
/// ```
pub fn generate_identifier() -> Result<String> {
    generate_identifier_with_source(Some(SystemEntropy))
}

/// Generates a random identifier from 16 bytes read from `source`.
///
/// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `source` is `None`
/// and propagates [`Error::EntropyReadFailure`](crate::Error::EntropyReadFailure) unchanged.
///
/// # Examples
///
/// ```rust
/// use randid::{generate_identifier_with_source, SystemEntropy};
///
/// let text = generate_identifier_with_source(Some(SystemEntropy))?;
/// assert_eq!(text.len(), 36);
/// # Ok::<(), randid::Error>(())
/// ```
pub fn generate_identifier_with_source<S: EntropySource>(source: Option<S>) -> Result<String> {
    let bytes = random_bytes_with_source(BYTE_LEN, source)?;
    format_identifier(&bytes)
}

/// Generates a random identifier, panicking if the default source fails.
///
/// A failure of the operating system's secure random source is not something a caller can
/// usually recover from, so this function turns it into a panic instead of returning an error.
/// Use [`generate_identifier`] to handle the failure instead.
///
/// # Panics
///
/// Panics with the underlying error message if the default source cannot supply 16 bytes.
///
/// # Examples
///
/// ```rust
/// let text = randid::generate_identifier_or_panic();
/// assert_eq!(text.len(), 36);
/// ```
pub fn generate_identifier_or_panic() -> String {
    generate_or_panic_with(SystemEntropy)
}

fn generate_or_panic_with<S: EntropySource>(source: S) -> String {
    match generate_identifier_with_source(Some(source)) {
        Ok(text) => text,
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::error!(error = %err, "entropy source returned fatal error");
            panic!("entropy source returned fatal error: {}", err)
        }
    }
}
