//! Literal types: the shape of a literal without its value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::IntegerTy;

/// Classifies a literal as an integer of some width, a boolean, or a char.
///
/// Used where only the type of a constant matters, e.g. when inferring
/// the type of a const generic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LiteralTy {
    Integer(IntegerTy),
    Bool,
    Char,
}

impl LiteralTy {
    #[inline]
    pub fn is_integer(self) -> bool {
        matches!(self, LiteralTy::Integer(_))
    }

    #[inline]
    pub fn as_integer(self) -> Option<IntegerTy> {
        match self {
            LiteralTy::Integer(int_ty) => Some(int_ty),
            LiteralTy::Bool | LiteralTy::Char => None,
        }
    }
}

impl From<IntegerTy> for LiteralTy {
    fn from(int_ty: IntegerTy) -> Self {
        LiteralTy::Integer(int_ty)
    }
}

impl fmt::Display for LiteralTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralTy::Integer(int_ty) => write!(f, "{int_ty}"),
            LiteralTy::Bool => f.write_str("bool"),
            LiteralTy::Char => f.write_str("char"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_variant_order() {
        assert!(LiteralTy::Integer(IntegerTy::U128) < LiteralTy::Bool);
        assert!(LiteralTy::Bool < LiteralTy::Char);
        assert!(LiteralTy::Integer(IntegerTy::I8) < LiteralTy::Integer(IntegerTy::U8));
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(LiteralTy::from(IntegerTy::I64).as_integer(), Some(IntegerTy::I64));
        assert_eq!(LiteralTy::Bool.as_integer(), None);
        assert!(!LiteralTy::Char.is_integer());
    }

    #[test]
    fn test_display() {
        assert_eq!(LiteralTy::Integer(IntegerTy::Usize).to_string(), "usize");
        assert_eq!(LiteralTy::Bool.to_string(), "bool");
        assert_eq!(LiteralTy::Char.to_string(), "char");
    }

    #[test]
    fn test_serde_shape() {
        let cases = [
            (LiteralTy::Integer(IntegerTy::I32), json!({ "Integer": "I32" })),
            (LiteralTy::Bool, json!("Bool")),
            (LiteralTy::Char, json!("Char")),
        ];
        for (ty, expected) in cases {
            let Ok(encoded) = serde_json::to_value(ty) else {
                panic!("expected {ty} to serialize");
            };
            assert_eq!(encoded, expected);
            let Ok(decoded) = serde_json::from_value::<LiteralTy>(encoded) else {
                panic!("expected {ty} to decode");
            };
            assert_eq!(decoded, ty);
        }
    }
}
