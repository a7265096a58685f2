//! Machine integer type tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Width and signedness of a scalar.
///
/// A closed set of tags; it carries no width or range semantics of its
/// own. The derived ordering follows declaration order and is what gives
/// maps keyed by `IntegerTy` a stable iteration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IntegerTy {
    Isize,
    I8,
    I16,
    I32,
    I64,
    I128,
    Usize,
    U8,
    U16,
    U32,
    U64,
    U128,
}

impl IntegerTy {
    /// Every tag, in declaration (and sort) order.
    pub const ALL: [IntegerTy; 12] = [
        IntegerTy::Isize,
        IntegerTy::I8,
        IntegerTy::I16,
        IntegerTy::I32,
        IntegerTy::I64,
        IntegerTy::I128,
        IntegerTy::Usize,
        IntegerTy::U8,
        IntegerTy::U16,
        IntegerTy::U32,
        IntegerTy::U64,
        IntegerTy::U128,
    ];

    /// Source-level spelling, e.g. `"u8"`.
    pub const fn name(self) -> &'static str {
        match self {
            IntegerTy::Isize => "isize",
            IntegerTy::I8 => "i8",
            IntegerTy::I16 => "i16",
            IntegerTy::I32 => "i32",
            IntegerTy::I64 => "i64",
            IntegerTy::I128 => "i128",
            IntegerTy::Usize => "usize",
            IntegerTy::U8 => "u8",
            IntegerTy::U16 => "u16",
            IntegerTy::U32 => "u32",
            IntegerTy::U64 => "u64",
            IntegerTy::U128 => "u128",
        }
    }
}

impl fmt::Display for IntegerTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
