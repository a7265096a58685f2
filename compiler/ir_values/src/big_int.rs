//! Unbounded integers.
//!
//! Scalars are stored exactly, independent of the width their type tag
//! declares. The JSON form is always a decimal string so values beyond
//! 64 or 128 bits survive a round trip through any JSON tool.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::DecodeError;

/// Arbitrary-precision signed integer.
///
/// Ordering is the mathematical ordering. There is no arithmetic here;
/// consumers that need it go through [`BigInt::as_inner`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BigInt(num_bigint::BigInt);

impl BigInt {
    /// Wrap an existing `num_bigint::BigInt`.
    #[inline]
    pub fn new(value: num_bigint::BigInt) -> Self {
        BigInt(value)
    }

    #[inline]
    pub fn as_inner(&self) -> &num_bigint::BigInt {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> num_bigint::BigInt {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.sign() == num_bigint::Sign::NoSign
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.sign() == num_bigint::Sign::Minus
    }

    /// Decode from JSON.
    ///
    /// Accepts a JSON integer of any magnitude or a string holding a
    /// decimal integer literal. Everything else, floats included, is a
    /// [`DecodeError::NotAnInteger`].
    pub fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let decoded: Result<Self, DecodeError> = match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(BigInt::from(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(BigInt::from(u))
                } else {
                    // Out of machine range: the literal text is kept
                    // verbatim, but may also be a float.
                    n.to_string().parse()
                }
            }
            Value::String(s) => s.parse(),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                Err(DecodeError::NotAnInteger)
            }
        };
        if decoded.is_err() {
            tracing::trace!(kind = json_kind(value), "rejected integer literal");
        }
        decoded
    }

    /// Encode to JSON, always as a decimal string.
    pub fn to_json(&self) -> Value {
        Value::String(self.0.to_string())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether `s` is an optional `-` followed by one or more ASCII digits.
fn is_decimal_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for BigInt {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_decimal_literal(s) {
            return Err(DecodeError::NotAnInteger);
        }
        s.parse::<num_bigint::BigInt>()
            .map(BigInt)
            .map_err(|_| DecodeError::NotAnInteger)
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(value: $ty) -> Self {
                    BigInt(num_bigint::BigInt::from(value))
                }
            }
        )+
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<num_bigint::BigInt> for BigInt {
    #[inline]
    fn from(value: num_bigint::BigInt) -> Self {
        BigInt(value)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// Decodes from JSON-like formats (numbers of any size or decimal strings)
/// and from compact formats such as bincode (decimal strings only).
impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(BigIntVisitor)
        } else {
            deserializer.deserialize_str(BigIntVisitor)
        }
    }
}

struct BigIntVisitor;

impl BigIntVisitor {
    fn reject<E: de::Error>(kind: &'static str) -> E {
        tracing::trace!(kind, "rejected integer literal");
        E::custom(DecodeError::NotAnInteger)
    }
}

macro_rules! impl_visit_primitive {
    ($( ($method:ident, $ty:ty) ),+ $(,)?) => {
        $(
            fn $method<E: de::Error>(self, value: $ty) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }
        )+
    };
}

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a decimal integer literal")
    }

    impl_visit_primitive!(
        (visit_i64, i64),
        (visit_u64, u64),
        (visit_i128, i128),
        (visit_u128, u128),
    );

    fn visit_str<E: de::Error>(self, value: &str) -> Result<BigInt, E> {
        value.parse().map_err(|_| Self::reject("string"))
    }

    fn visit_f64<E: de::Error>(self, _value: f64) -> Result<BigInt, E> {
        Err(Self::reject("float"))
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<BigInt, E> {
        Err(Self::reject("bool"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<BigInt, E> {
        Err(Self::reject("null"))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, _seq: A) -> Result<BigInt, A::Error> {
        Err(Self::reject("array"))
    }

    // serde_json with `arbitrary_precision` hands numbers over as a
    // single-entry map; `Number` knows how to read it back.
    fn visit_map<A: de::MapAccess<'de>>(self, map: A) -> Result<BigInt, A::Error> {
        let number = serde_json::Number::deserialize(de::value::MapAccessDeserializer::new(map))
            .map_err(|_| Self::reject::<A::Error>("object"))?;
        number
            .to_string()
            .parse()
            .map_err(|_| Self::reject("number"))
    }
}
