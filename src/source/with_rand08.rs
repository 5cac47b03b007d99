//! Integration with `rand` (v0.8) crate.

use super::EntropySource;
use rand::RngCore;
use std::io;

/// An adapter that implements [`EntropySource`] for [`RngCore`] types.
///
/// The wrapped generator must be cryptographically secure (e.g., [`rand::rngs::OsRng`] or
/// [`rand::rngs::ThreadRng`]) for the produced identifiers to be unpredictable.
///
/// # Examples
///
/// ```rust
/// use randid::{generate_identifier_with_source, with_rand08::Adapter};
///
/// let text = generate_identifier_with_source(Some(Adapter(rand::thread_rng())))?;
/// println!("{text}"); // e.g., "6f1c2b9e-0a4d-83f2-5e71-c09a2d4b8e13"
/// # Ok::<(), randid::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> EntropySource for Adapter<T> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> io::Result<()> {
        self.0.try_fill_bytes(dest).map_err(io::Error::from)
    }
}
