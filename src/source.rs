//! Entropy sources and related types.

use std::io;

pub mod with_io;
pub mod with_rand08;

/// A trait that defines the minimum interface of a cryptographically secure random byte source.
///
/// Implementations are trusted to be cryptographically secure; this crate imposes no additional
/// mixing on the bytes they produce.
///
/// # Examples
///
/// ```rust
/// use randid::{generate_identifier_with_source, EntropySource};
/// use std::io;
///
/// struct Zeros;
///
/// impl EntropySource for Zeros {
///     fn fill_bytes(&mut self, dest: &mut [u8]) -> io::Result<()> {
///         dest.fill(0);
///         Ok(())
///     }
/// }
///
/// let text = generate_identifier_with_source(Some(Zeros))?;
/// assert_eq!(text, "00000000-0000-0000-0000-000000000000");
/// # Ok::<(), randid::Error>(())
/// ```
pub trait EntropySource {
    /// Fills the whole of `dest` with random bytes.
    ///
    /// Returns an error if `dest` could not be filled completely. A source that runs out of bytes
    /// should report [`io::ErrorKind::UnexpectedEof`].
    fn fill_bytes(&mut self, dest: &mut [u8]) -> io::Result<()>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> io::Result<()> {
        (**self).fill_bytes(dest)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> io::Result<()> {
        (**self).fill_bytes(dest)
    }
}

/// The process default secure entropy source, backed by the operating system's CSPRNG.
///
/// This type holds no state; every instance reads from the same system facility, so it is safe
/// to create one per call and to use from any thread.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> io::Result<()> {
        use rand::RngCore;
        rand::rngs::OsRng.try_fill_bytes(dest).map_err(io::Error::from)
    }
}
