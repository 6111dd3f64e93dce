//! Self-describing structured values carried in event payloads and
//! transaction arguments.

pub mod json;

use std::{fmt, str::FromStr};

use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Address;

pub use json::CodecError;

/// A dynamically typed value in its JSON-Cadence shape:
/// `{"type": "<kind>", "value": <payload>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Void,
    Optional(Option<Box<Value>>),
    Bool(bool),
    String(String),
    Character(String),
    Address(Address),
    /// Arbitrary precision.
    Int(#[serde(with = "as_string")] BigInt),
    Int8(#[serde(with = "as_string")] i8),
    Int16(#[serde(with = "as_string")] i16),
    Int32(#[serde(with = "as_string")] i32),
    Int64(#[serde(with = "as_string")] i64),
    Int128(#[serde(with = "as_string")] i128),
    Int256(
        #[serde(
            serialize_with = "as_string::serialize",
            deserialize_with = "as_string::int256"
        )]
        BigInt,
    ),
    /// Arbitrary precision.
    UInt(#[serde(with = "as_string")] BigUint),
    UInt8(#[serde(with = "as_string")] u8),
    UInt16(#[serde(with = "as_string")] u16),
    UInt32(#[serde(with = "as_string")] u32),
    UInt64(#[serde(with = "as_string")] u64),
    UInt128(#[serde(with = "as_string")] u128),
    UInt256(
        #[serde(
            serialize_with = "as_string::serialize",
            deserialize_with = "as_string::uint256"
        )]
        BigUint,
    ),
    Word8(#[serde(with = "as_string")] u8),
    Word16(#[serde(with = "as_string")] u16),
    Word32(#[serde(with = "as_string")] u32),
    Word64(#[serde(with = "as_string")] u64),
    Fix64(Fix64),
    UFix64(UFix64),
    Array(Vec<Value>),
    Dictionary(Vec<KeyValuePair>),
    Struct(Composite),
    Resource(Composite),
    Event(Composite),
    Contract(Composite),
    Enum(Composite),
    Path(Path),
    Type(StaticType),
    Capability(Capability),
}

impl Value {
    /// The JSON-Cadence type tag of this value.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Void => "Void",
            Value::Optional(_) => "Optional",
            Value::Bool(_) => "Bool",
            Value::String(_) => "String",
            Value::Character(_) => "Character",
            Value::Address(_) => "Address",
            Value::Int(_) => "Int",
            Value::Int8(_) => "Int8",
            Value::Int16(_) => "Int16",
            Value::Int32(_) => "Int32",
            Value::Int64(_) => "Int64",
            Value::Int128(_) => "Int128",
            Value::Int256(_) => "Int256",
            Value::UInt(_) => "UInt",
            Value::UInt8(_) => "UInt8",
            Value::UInt16(_) => "UInt16",
            Value::UInt32(_) => "UInt32",
            Value::UInt64(_) => "UInt64",
            Value::UInt128(_) => "UInt128",
            Value::UInt256(_) => "UInt256",
            Value::Word8(_) => "Word8",
            Value::Word16(_) => "Word16",
            Value::Word32(_) => "Word32",
            Value::Word64(_) => "Word64",
            Value::Fix64(_) => "Fix64",
            Value::UFix64(_) => "UFix64",
            Value::Array(_) => "Array",
            Value::Dictionary(_) => "Dictionary",
            Value::Struct(_) => "Struct",
            Value::Resource(_) => "Resource",
            Value::Event(_) => "Event",
            Value::Contract(_) => "Contract",
            Value::Enum(_) => "Enum",
            Value::Path(_) => "Path",
            Value::Type(_) => "Type",
            Value::Capability(_) => "Capability",
        }
    }

    /// Unwraps an `Event` value, handing anything else back unchanged.
    pub fn into_event(self) -> Result<Composite, Value> {
        match self {
            Value::Event(composite) => Ok(composite),
            other => Err(other),
        }
    }
}

/// Fields of a struct, resource or event, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composite {
    pub id: String,
    pub fields: Vec<Field>,
}

impl Composite {
    pub fn new(id: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

impl Field {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValuePair {
    pub key: Value,
    pub value: Value,
}

/// A storage path such as `/storage/flowTokenVault`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub domain: String,
    pub identifier: String,
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.domain, self.identifier)
    }
}

/// A run-time type value. The type itself is kept in its JSON form, which
/// is a plain identifier in older encodings and a nested object in newer ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticType {
    #[serde(rename = "staticType")]
    pub static_type: serde_json::Value,
}

/// A capability on an account. Path based capabilities carry `path`,
/// ID based capabilities carry `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Box<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub address: Address,
    #[serde(rename = "borrowType")]
    pub borrow_type: serde_json::Value,
}

const FIX64_SCALE: u64 = 100_000_000;
const FIX64_DECIMALS: usize = 8;

/// Unsigned fixed-point number with 8 decimal places, stored scaled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UFix64(u64);

impl UFix64 {
    pub const fn from_raw(raw: u64) -> Self {
        UFix64(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Signed fixed-point number with 8 decimal places, stored scaled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fix64(i64);

impl Fix64 {
    pub const fn from_raw(raw: i64) -> Self {
        Fix64(raw)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }
}

fn write_scaled(f: &mut fmt::Formatter<'_>, magnitude: u64) -> fmt::Result {
    write!(
        f,
        "{}.{:0width$}",
        magnitude / FIX64_SCALE,
        magnitude % FIX64_SCALE,
        width = FIX64_DECIMALS
    )
}

/// Parses an unsigned decimal literal into its scaled magnitude.
fn parse_scaled(literal: &str) -> Option<u64> {
    let (integer, fraction) = literal.split_once('.').unwrap_or((literal, ""));
    if integer.is_empty()
        || fraction.len() > FIX64_DECIMALS
        || !integer.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let integer: u64 = integer.parse().ok()?;
    let fraction: u64 = if fraction.is_empty() {
        0
    } else {
        format!("{fraction:0<width$}", width = FIX64_DECIMALS)
            .parse()
            .ok()?
    };

    integer
        .checked_mul(FIX64_SCALE)
        .and_then(|scaled| scaled.checked_add(fraction))
}

impl fmt::Display for UFix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scaled(f, self.0)
    }
}

impl FromStr for UFix64 {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scaled(s)
            .map(UFix64)
            .ok_or_else(|| CodecError::InvalidFixedPoint(s.to_owned()))
    }
}

impl fmt::Display for Fix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        write_scaled(f, self.0.unsigned_abs())
    }
}

impl FromStr for Fix64 {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CodecError::InvalidFixedPoint(s.to_owned());
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let magnitude = i128::from(parse_scaled(digits).ok_or_else(invalid)?);
        let signed = if negative { -magnitude } else { magnitude };
        i64::try_from(signed).map(Fix64).map_err(|_| invalid())
    }
}

macro_rules! string_serde {
    ($($ty:ty),*) => {$(
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                as_string::serialize(self, serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                as_string::deserialize(deserializer)
            }
        }
    )*};
}

string_serde!(UFix64, Fix64);

/// JSON-Cadence carries numbers as decimal strings.
mod as_string {
    use std::{fmt::Display, str::FromStr};

    use num_bigint::{BigInt, BigUint};
    use serde::{de::Error as DeError, Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }

    pub fn int256<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let value: BigInt = deserialize(deserializer)?;
        let bound = BigInt::from(1u8) << 255usize;
        if value < -&bound || value >= bound {
            return Err(D::Error::custom(format!("{value} does not fit in Int256")));
        }
        Ok(value)
    }

    pub fn uint256<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let value: BigUint = deserialize(deserializer)?;
        if value.bits() > 256 {
            return Err(D::Error::custom(format!("{value} does not fit in UInt256")));
        }
        Ok(value)
    }
}
