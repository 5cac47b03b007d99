use std::{fmt, str};

use fstr::FStr;

use crate::{random_bytes_with_source, EntropySource, Error, Result};

/// Length in bytes of the raw form of an identifier.
pub const BYTE_LEN: usize = 16;

/// Length in characters of the canonical textual form of an identifier.
pub const TEXT_LEN: usize = 36;

/// Positions of the hyphen separators in the canonical textual form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Represents a random 128-bit identifier.
///
/// The value has no internal structure beyond its length: no version or variant bits are set or
/// checked, and every 16-byte value is valid.
///
/// # Examples
///
/// ```rust
/// use randid::Identifier;
///
/// let x = "01020304-0506-0708-090a-0b0c0d0e0f10".parse::<Identifier>()?;
/// assert_eq!(x.as_bytes()[..4], [1, 2, 3, 4]);
/// assert_eq!(x.to_string(), "01020304-0506-0708-090a-0b0c0d0e0f10");
/// # Ok::<(), randid::Error>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Identifier([u8; BYTE_LEN]);

impl Identifier {
    /// Nil identifier (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; BYTE_LEN]);

    /// Max identifier (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; BYTE_LEN]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; BYTE_LEN] {
        &self.0
    }

    /// Creates an identifier from 16 bytes read from `source`.
    ///
    /// Fails with [`Error::InvalidArgument`] if `source` is `None` and with
    /// [`Error::EntropyReadFailure`] if the source cannot supply 16 bytes.
    pub fn from_source<S: EntropySource>(source: Option<S>) -> Result<Self> {
        let bytes = random_bytes_with_source(BYTE_LEN, source)?;
        Self::try_from(bytes.as_slice())
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randid::Identifier;
    ///
    /// let x = Identifier::from([0xab; 16]);
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "abababab-abab-abab-abab-abababababab");
    /// assert_eq!(format!("{}", y), "abababab-abab-abab-abab-abababababab");
    /// ```
    pub fn encode(&self) -> FStr<TEXT_LEN> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; TEXT_LEN];
        let mut j = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[j] = DIGITS[(e >> 4) as usize];
            buffer[j + 1] = DIGITS[(e & 15) as usize];
            j += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[j] = b'-';
                j += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: buffer consists of ASCII bytes only
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

impl fmt::Display for Identifier {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Identifier {
    type Err = Error;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Both lowercase and uppercase hexadecimal digits are accepted. Checks are applied in order:
    /// total length, hyphen positions, then hexadecimal digits.
    fn from_str(src: &str) -> Result<Self> {
        let bytes = src.as_bytes();
        if bytes.len() != TEXT_LEN {
            return Err(Error::InvalidLength {
                expected: TEXT_LEN,
                actual: bytes.len(),
            });
        }

        if let Some(&position) = HYPHENS.iter().find(|&&i| bytes[i] != b'-') {
            return Err(Error::InvalidFormat { position });
        }

        let mut dst = [0u8; BYTE_LEN];
        let mut n_digits = 0;
        for (i, &c) in bytes.iter().enumerate() {
            if HYPHENS.contains(&i) {
                continue;
            }
            let nibble = decode_hex_digit(c).ok_or_else(|| Error::InvalidHexEncoding {
                position: i,
                character: char_at(src, i),
            })?;
            if let Some(e) = dst.get_mut(n_digits / 2) {
                *e = (*e << 4) | nibble;
            }
            n_digits += 1;
        }

        // unreachable while the grammar stays at 32 digits and 4 hyphens
        if n_digits != 2 * BYTE_LEN {
            return Err(Error::InvalidLength {
                expected: BYTE_LEN,
                actual: n_digits / 2,
            });
        }
        Ok(Self(dst))
    }
}

/// Formats 16 raw bytes as the canonical 8-4-4-4-12 lowercase hexadecimal string.
///
/// Fails with [`Error::InvalidLength`] unless `bytes` is exactly 16 bytes long.
///
/// # Examples
///
/// ```rust
/// let bytes = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
/// let text = randid::format_identifier(&bytes)?;
/// assert_eq!(text, "01020304-0506-0708-090a-0b0c0d0e0f10");
/// # Ok::<(), randid::Error>(())
/// ```
pub fn format_identifier(bytes: &[u8]) -> Result<String> {
    Identifier::try_from(bytes).map(String::from)
}

/// Parses the canonical 8-4-4-4-12 hexadecimal string back into 16 raw bytes.
///
/// Uppercase digits are accepted. Fails with [`Error::InvalidLength`] unless `text` is 36
/// characters long, with [`Error::InvalidFormat`] if a hyphen is missing at position 8, 13, 18, or
/// 23, and with [`Error::InvalidHexEncoding`] on the first non-hexadecimal digit.
///
/// # Examples
///
/// ```rust
/// let bytes = randid::parse_identifier("01020304-0506-0708-090a-0b0c0d0e0f10")?;
/// assert_eq!(bytes, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
/// # Ok::<(), randid::Error>(())
/// ```
pub fn parse_identifier(text: &str) -> Result<[u8; BYTE_LEN]> {
    text.parse::<Identifier>().map(<[u8; BYTE_LEN]>::from)
}

fn decode_hex_digit(c: u8) -> Option<u8> {
    char::from(c).to_digit(16).map(|d| d as u8)
}

/// Returns the character starting at byte offset `i`, for error reporting.
fn char_at(src: &str, i: usize) -> char {
    src.get(i..)
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl TryFrom<&[u8]> for Identifier {
    type Error = Error;

    /// Creates an object from a byte slice, failing unless it is exactly 16 bytes long.
    fn try_from(src: &[u8]) -> Result<Self> {
        <[u8; BYTE_LEN]>::try_from(src)
            .map(Self)
            .map_err(|_| Error::InvalidLength {
                expected: BYTE_LEN,
                actual: src.len(),
            })
    }
}

impl TryFrom<String> for Identifier {
    type Error = Error;

    fn try_from(src: String) -> Result<Self> {
        src.parse()
    }
}

impl From<Identifier> for String {
    fn from(src: Identifier) -> Self {
        src.to_string()
    }
}

impl From<Identifier> for [u8; BYTE_LEN] {
    fn from(src: Identifier) -> Self {
        src.0
    }
}

impl From<[u8; BYTE_LEN]> for Identifier {
    fn from(src: [u8; BYTE_LEN]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Identifier {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Identifier> for u128 {
    fn from(src: Identifier) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Identifier {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Identifier;

    impl From<Identifier> for uuid::Uuid {
        fn from(src: Identifier) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Identifier {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Identifier};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Identifier {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Identifier {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Identifier;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "an identifier representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::try_from(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Identifier;
        use serde_test::{assert_de_tokens_error, assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "01020304-0506-0708-090a-0b0c0d0e0f10",
                    &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
                ),
                (
                    "8f4e21c0-9d3a-e5b7-162c-7a0fd83b94e6",
                    &[
                        143, 78, 33, 192, 157, 58, 229, 183, 22, 44, 122, 15, 216, 59, 148, 230,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Identifier>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Rejects malformed serialized forms
        #[test]
        fn rejects_malformed_serialized_forms() {
            assert_de_tokens_error::<serde_test::Readable<Identifier>>(
                &[Token::Str("01020304x0506-0708-090a-0b0c0d0e0f10")],
                "identifier is improperly formatted: expected '-' at position 8",
            );
            assert_de_tokens_error::<serde_test::Compact<Identifier>>(
                &[Token::Bytes(&[0u8; 15])],
                "wrong length (expected 16, got 15)",
            );
        }
    }
}
