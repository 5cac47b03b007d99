//! Secure random byte acquisition

use crate::{EntropySource, Error, Result, SystemEntropy};

/// Returns `size` cryptographically secure random bytes from the process default source.
///
/// # Examples
///
/// ```rust
/// let key = randid::random_bytes(32)?;
/// assert_eq!(key.len(), 32);
/// # Ok::<(), randid::Error>(())
/// ```
pub fn random_bytes(size: usize) -> Result<Vec<u8>> {
    random_bytes_with_source(size, Some(SystemEntropy))
}

/// Returns `size` random bytes read from `source`.
///
/// Fails with [`Error::InvalidArgument`] if `source` is `None`, before anything is read or
/// allocated. Fails with [`Error::EntropyReadFailure`], wrapping the underlying cause, if the
/// source cannot supply `size` bytes; no partially filled buffer is ever returned.
///
/// # Examples
///
/// ```rust
/// use randid::{random_bytes_with_source, with_io::Adapter, Error};
///
/// let bytes = random_bytes_with_source(4, Some(Adapter(&b"abcdef"[..])))?;
/// assert_eq!(bytes, b"abcd");
///
/// let err = random_bytes_with_source(8, Some(Adapter(&b"abc"[..]))).unwrap_err();
/// assert!(matches!(err, Error::EntropyReadFailure(_)));
/// # Ok::<(), randid::Error>(())
/// ```
pub fn random_bytes_with_source<S: EntropySource>(
    size: usize,
    source: Option<S>,
) -> Result<Vec<u8>> {
    let mut source = source.ok_or(Error::InvalidArgument)?;
    let mut buf = vec![0u8; size];
    if let Err(err) = source.fill_bytes(&mut buf) {
        #[cfg(feature = "tracing")]
        tracing::debug!(size, error = %err, "entropy source failed to supply random bytes");
        return Err(Error::EntropyReadFailure(err));
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::{random_bytes, random_bytes_with_source};
    use crate::{
        source::testing::{CountingSource, FailingSource},
        with_io, with_rand08, Error,
    };

    /// Returns buffers of requested size
    #[test]
    fn returns_buffers_of_requested_size() {
        for size in [0, 1, 16, 100, 4096] {
            assert_eq!(random_bytes(size).unwrap().len(), size);
        }
    }

    /// Returns different bytes on consecutive calls
    #[test]
    fn returns_different_bytes_on_consecutive_calls() {
        let prev = random_bytes(16).unwrap();
        for _ in 0..100 {
            assert_ne!(random_bytes(16).unwrap(), prev);
        }
    }

    /// Rejects absent source without reading
    #[test]
    fn rejects_absent_source_without_reading() {
        for size in [0, 16] {
            assert!(matches!(
                random_bytes_with_source(size, None::<CountingSource>),
                Err(Error::InvalidArgument)
            ));
        }
    }

    /// Reads exactly once from given source
    #[test]
    fn reads_exactly_once_from_given_source() {
        let mut source = CountingSource::default();
        let bytes = random_bytes_with_source(5, Some(&mut source)).unwrap();
        assert_eq!(bytes, [0, 1, 2, 3, 4]);
        assert_eq!(source.reads, 1);
    }

    /// Wraps cause of entropy read failure
    #[test]
    fn wraps_cause_of_entropy_read_failure() {
        use std::error::Error as _;

        let err = random_bytes_with_source(16, Some(FailingSource)).unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(
            err.source().map(|e| e.to_string()).as_deref(),
            Some("entropy pool unavailable")
        );

        let short = [0u8; 15];
        match random_bytes_with_source(16, Some(with_io::Adapter(&short[..]))) {
            Err(Error::EntropyReadFailure(cause)) => {
                assert_eq!(cause.kind(), std::io::ErrorKind::UnexpectedEof)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    /// Accepts rand generators as sources
    #[test]
    fn accepts_rand_generators_as_sources() {
        use rand::SeedableRng;
        use rand_chacha::ChaCha20Rng;

        let seeded = || Some(with_rand08::Adapter(ChaCha20Rng::seed_from_u64(7)));
        let x = random_bytes_with_source(64, seeded()).unwrap();
        let y = random_bytes_with_source(64, seeded()).unwrap();
        assert_eq!(x, y);

        let z = random_bytes_with_source(64, Some(with_rand08::Adapter(rand::thread_rng())));
        assert_ne!(z.unwrap(), x);
    }
}
