//! Module: cursor
//! Responsibility: the opaque cursor value type and its wire codec.
//! Does not own: cursor assignment or window computation.
//! Boundary: the only place encoded cursor text is produced or parsed.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use thiserror::Error as ThisError;

// Defensive decode bound for untrusted cursor input.
const MAX_CURSOR_WIRE_LEN: usize = 8 * 1024;

///
/// Cursor
///
/// Opaque position marker for an item within an ordered sequence.
/// The raw key is either a caller-supplied identifier or the decimal
/// rendering of a sequence position. Equality, ordering, and hashing are
/// over the raw key; the base64 wire form exists only for transport and
/// is never compared.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, derive_more::From)]
pub struct Cursor(String);

impl Cursor {
    /// Create a cursor from a caller-supplied domain key.
    pub fn from_key(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Create a cursor from a sequence position.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(index.to_string())
    }

    /// Borrow the raw key.
    #[must_use]
    pub fn as_key(&self) -> &str {
        &self.0
    }

    /// Parse the raw key as a sequence position.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        self.0.parse().ok()
    }

    /// Encode the raw key for transport.
    #[must_use]
    pub fn encode(&self) -> String {
        STANDARD.encode(self.0.as_bytes())
    }

    /// Decode a wire token back into a cursor.
    pub fn decode(token: &str) -> Result<Self, CursorDecodeError> {
        let token = token.trim();

        if token.len() > MAX_CURSOR_WIRE_LEN {
            return Err(CursorDecodeError::TooLong {
                len: token.len(),
                max: MAX_CURSOR_WIRE_LEN,
            });
        }

        let bytes = STANDARD
            .decode(token)
            .map_err(|err| CursorDecodeError::InvalidBase64(err.to_string()))?;

        let key =
            String::from_utf8(bytes).map_err(|_| CursorDecodeError::InvalidText)?;

        Ok(Self(key))
    }
}

impl From<&str> for Cursor {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<usize> for Cursor {
    fn from(index: usize) -> Self {
        Self::from_index(index)
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl Serialize for Cursor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Cursor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;

        Self::decode(&token).map_err(D::Error::custom)
    }
}

///
/// CursorDecodeError
/// Wire cursor tokens that cannot be decoded back into a raw key.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CursorDecodeError {
    #[error("cursor token exceeds max length: {len} chars (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("cursor token is not valid base64: {0}")]
    InvalidBase64(String),

    #[error("cursor token does not decode to valid utf-8 text")]
    InvalidText,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{Cursor, CursorDecodeError, MAX_CURSOR_WIRE_LEN};

    #[test]
    fn key_cursor_exposes_raw_key_and_encoded_form() {
        let cursor = Cursor::from_key("testing123");

        assert_eq!(cursor.as_key(), "testing123");
        assert_eq!(cursor.encode(), "dGVzdGluZzEyMw==");
        assert_eq!(cursor.to_string(), "dGVzdGluZzEyMw==");
    }

    #[test]
    fn index_cursor_uses_decimal_key() {
        let cursor = Cursor::from_index(3);

        assert_eq!(cursor.as_key(), "3");
        assert_eq!(cursor.encode(), "Mw==");
        assert_eq!(cursor, Cursor::from_key("3"), "index and key forms must compare by raw key");
    }

    #[test]
    fn as_index_parses_only_decimal_keys() {
        assert_eq!(Cursor::from_index(3).as_index(), Some(3));
        assert_eq!(Cursor::from_key("foo").as_index(), None);
        assert_eq!(Cursor::from_key("-1").as_index(), None);
    }

    #[test]
    fn decode_round_trips_encoded_cursors() {
        let cursor = Cursor::from_key("testing123");
        let decoded = Cursor::decode(&cursor.encode()).expect("encoded cursor should decode");

        assert_eq!(decoded, cursor);
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        let err = Cursor::decode("!!not-base64!!").expect_err("malformed token must fail");

        assert!(matches!(err, CursorDecodeError::InvalidBase64(_)));
    }

    #[test]
    fn decode_rejects_non_utf8_payload() {
        // base64 of the lone byte 0xff
        let err = Cursor::decode("/w==").expect_err("non-utf8 payload must fail");

        assert_eq!(err, CursorDecodeError::InvalidText);
    }

    #[test]
    fn decode_rejects_oversized_token() {
        let oversized = "A".repeat(MAX_CURSOR_WIRE_LEN + 1);
        let err = Cursor::decode(&oversized).expect_err("oversized token must fail");

        assert!(matches!(err, CursorDecodeError::TooLong { .. }));
    }

    #[test]
    fn serde_uses_encoded_form_on_the_wire() {
        let cursor = Cursor::from_key("testing123");

        let wire = serde_json::to_string(&cursor).expect("cursor should serialize");
        assert_eq!(wire, "\"dGVzdGluZzEyMw==\"");

        let back: Cursor = serde_json::from_str(&wire).expect("wire cursor should deserialize");
        assert_eq!(back, cursor);
    }

    #[test]
    fn serde_surfaces_decode_failures() {
        let result: Result<Cursor, _> = serde_json::from_str("\"!!not-base64!!\"");

        assert!(result.is_err(), "malformed wire cursor must fail deserialization");
    }
}
