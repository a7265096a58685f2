//! Scalar values and literals, the atomic constants of the IR.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{BigInt, IntegerTy, LiteralTy};

/// An integer paired with its declared type.
///
/// `value` is not checked against the range of `int_ty`: a `U8` holding
/// `-1` or `300` is a valid `ScalarValue`. Range checks belong to whoever
/// interprets the scalar under its width.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScalarValue {
    pub value: BigInt,
    pub int_ty: IntegerTy,
}

impl ScalarValue {
    #[inline]
    pub fn new(value: impl Into<BigInt>, int_ty: IntegerTy) -> Self {
        ScalarValue {
            value: value.into(),
            int_ty,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.value, self.int_ty)
    }
}

/// An atomic constant value.
///
/// Variant order matters: the derived ordering sorts scalars before
/// booleans before chars, and sorted outputs downstream rely on it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Literal {
    Scalar(ScalarValue),
    Bool(bool),
    Char(char),
}

impl Literal {
    /// The shape of this literal.
    pub fn ty(&self) -> LiteralTy {
        match self {
            Literal::Scalar(scalar) => LiteralTy::Integer(scalar.int_ty),
            Literal::Bool(_) => LiteralTy::Bool,
            Literal::Char(_) => LiteralTy::Char,
        }
    }

    #[inline]
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            Literal::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Literal::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl From<ScalarValue> for Literal {
    fn from(scalar: ScalarValue) -> Self {
        Literal::Scalar(scalar)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl From<char> for Literal {
    fn from(c: char) -> Self {
        Literal::Char(c)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Scalar(scalar) => write!(f, "{scalar}"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Char(c) => write!(f, "'{}'", c.escape_debug()),
        }
    }
}
