//! Integration with [`std::io::Read`] byte streams.

use super::EntropySource;
use std::io;

/// An adapter that implements [`EntropySource`] for [`io::Read`] types.
///
/// Reads are performed with [`io::Read::read_exact`], so a reader that is exhausted before the
/// buffer is filled yields an [`io::ErrorKind::UnexpectedEof`] error.
///
/// # Examples
///
/// ```rust,no_run
/// use randid::{generate_identifier_with_source, with_io::Adapter};
/// use std::fs::File;
///
/// let urandom = File::open("/dev/urandom")?;
/// let text = generate_identifier_with_source(Some(Adapter(urandom)))?;
/// println!("{text}");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`io::Read`] type. */ pub T);

impl<T: io::Read> EntropySource for Adapter<T> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> io::Result<()> {
        self.0.read_exact(dest)
    }
}
