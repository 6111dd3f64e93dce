use std::{fmt, str::FromStr};

use serde::{de::Error as DeError, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub const IDENTIFIER_LEN: usize = 32;
pub const ADDRESS_LEN: usize = 8;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
    #[error("empty hex string")]
    Empty,
}

/// Strips at most one `0x` prefix and rejects an empty remainder.
fn hex_digits(s: &str) -> Result<&str, ParseError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(digits)
}

/// 32 byte identifier of a block, transaction or other entity.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier([u8; IDENTIFIER_LEN]);

impl Identifier {
    pub const ZERO: Identifier = Identifier([0u8; IDENTIFIER_LEN]);

    pub const fn new(bytes: [u8; IDENTIFIER_LEN]) -> Self {
        Identifier(bytes)
    }

    /// Copies a prefix of `bytes` into the identifier. Short input is
    /// zero-filled, long input is truncated.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut id = [0u8; IDENTIFIER_LEN];
        let len = bytes.len().min(IDENTIFIER_LEN);
        id[..len].copy_from_slice(&bytes[..len]);
        Identifier(id)
    }

    pub fn as_bytes(&self) -> &[u8; IDENTIFIER_LEN] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for Identifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(hex_digits(s)?)?;
        if bytes.len() != IDENTIFIER_LEN {
            return Err(ParseError::Length {
                expected: IDENTIFIER_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Identifier::from_slice(&bytes))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.hex())
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}

/// 8 byte account address.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }

    /// Right-aligns `bytes` into an address: long input keeps its trailing
    /// bytes, short input is left-padded with zeros.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let bytes = if bytes.len() > ADDRESS_LEN {
            &bytes[bytes.len() - ADDRESS_LEN..]
        } else {
            bytes
        };
        let mut address = [0u8; ADDRESS_LEN];
        address[ADDRESS_LEN - bytes.len()..].copy_from_slice(bytes);
        Address(address)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for Address {
    type Err = ParseError;

    /// Accepts `0x`-prefixed or bare hex, with or without leading zeros.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = hex_digits(s)?;
        let bytes = if digits.len() % 2 == 1 {
            hex::decode(format!("0{digits}"))?
        } else {
            hex::decode(digits)?
        };
        if bytes.len() > ADDRESS_LEN {
            return Err(ParseError::Length {
                expected: ADDRESS_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Address::from_slice(&bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x{})", self.hex())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}
