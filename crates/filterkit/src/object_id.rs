//! The store's native document identifier.

use std::fmt;
use std::str::FromStr;

use crate::error::{FilterError, Result};

/// A 12-byte document identifier, written as 24 hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Creates an identifier from raw bytes.
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        ObjectId(bytes)
    }

    /// Parses an identifier from its hex form.
    ///
    /// Anything other than exactly 24 hex digits is rejected.
    pub fn parse_str(s: &str) -> Result<Self> {
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes).map_err(|source| FilterError::InvalidObjectId {
            input: s.to_string(),
            source,
        })?;
        Ok(ObjectId(bytes))
    }

    /// Returns the raw bytes.
    pub const fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Returns the lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns `true` if every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 12]
    }
}

impl FromStr for ObjectId {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        ObjectId::parse_str(s)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
