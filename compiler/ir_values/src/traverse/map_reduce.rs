//! Transform and reduce in one pass.

use crate::{BigInt, IntegerTy, Literal, LiteralTy, ScalarValue};

/// Trait combining [`LiteralFolder`](super::LiteralFolder) and
/// [`LiteralReducer`](super::LiteralReducer): every method returns the
/// rewritten value together with an accumulator.
///
/// Defaults return the input unchanged paired with `zero()`; composites
/// combine their children's accumulators with `plus`.
pub trait LiteralMapReducer {
    type Acc;

    /// Identity of `plus`.
    fn zero(&self) -> Self::Acc;

    /// Associative combination of two accumulators.
    fn plus(&self, a: Self::Acc, b: Self::Acc) -> Self::Acc;

    /// Map-reduce a literal by dispatching to variant-specific methods.
    fn map_reduce_literal(&mut self, lit: &Literal) -> (Literal, Self::Acc) {
        walk_literal(self, lit)
    }

    /// Map-reduce a literal type by dispatching to variant-specific methods.
    fn map_reduce_literal_ty(&mut self, ty: &LiteralTy) -> (LiteralTy, Self::Acc) {
        walk_literal_ty(self, ty)
    }

    /// Map-reduce a `Literal::Scalar`. Default map-reduces the scalar value.
    fn map_reduce_scalar_lit(&mut self, scalar: &ScalarValue) -> (Literal, Self::Acc) {
        let (scalar, acc) = self.map_reduce_scalar_value(scalar);
        (Literal::Scalar(scalar), acc)
    }

    /// Map-reduce a `Literal::Bool`.
    fn map_reduce_bool_lit(&mut self, b: bool) -> (Literal, Self::Acc) {
        let (b, acc) = self.map_reduce_bool(b);
        (Literal::Bool(b), acc)
    }

    /// Map-reduce a `Literal::Char`.
    fn map_reduce_char_lit(&mut self, c: char) -> (Literal, Self::Acc) {
        let (c, acc) = self.map_reduce_char(c);
        (Literal::Char(c), acc)
    }

    /// Map-reduce a `LiteralTy::Integer`.
    fn map_reduce_integer_lit_ty(&mut self, int_ty: IntegerTy) -> (LiteralTy, Self::Acc) {
        let (int_ty, acc) = self.map_reduce_integer_ty(int_ty);
        (LiteralTy::Integer(int_ty), acc)
    }

    /// Map-reduce `LiteralTy::Bool`. Default is unchanged with `zero()`.
    fn map_reduce_bool_lit_ty(&mut self) -> (LiteralTy, Self::Acc) {
        (LiteralTy::Bool, self.zero())
    }

    /// Map-reduce `LiteralTy::Char`. Default is unchanged with `zero()`.
    fn map_reduce_char_lit_ty(&mut self) -> (LiteralTy, Self::Acc) {
        (LiteralTy::Char, self.zero())
    }

    /// Map-reduce a scalar value. Default handles the integer, then its type.
    fn map_reduce_scalar_value(&mut self, scalar: &ScalarValue) -> (ScalarValue, Self::Acc) {
        walk_scalar_value(self, scalar)
    }

    /// Map-reduce an unbounded integer.
    fn map_reduce_big_int(&mut self, value: &BigInt) -> (BigInt, Self::Acc) {
        (value.clone(), self.zero())
    }

    impl_copy_leaf_methods!(map_reduce:
        (map_reduce_integer_ty, IntegerTy, "Map-reduce an integer type tag."),
        (map_reduce_bool, bool, "Map-reduce a boolean."),
        (map_reduce_char, char, "Map-reduce a character."),
    );
}

/// Map-reduce a literal through the hook for its variant.
pub fn walk_literal<M: LiteralMapReducer + ?Sized>(
    mapper: &mut M,
    lit: &Literal,
) -> (Literal, M::Acc) {
    match lit {
        Literal::Scalar(scalar) => mapper.map_reduce_scalar_lit(scalar),
        Literal::Bool(b) => mapper.map_reduce_bool_lit(*b),
        Literal::Char(c) => mapper.map_reduce_char_lit(*c),
    }
}

/// Map-reduce a literal type through the hook for its variant.
pub fn walk_literal_ty<M: LiteralMapReducer + ?Sized>(
    mapper: &mut M,
    ty: &LiteralTy,
) -> (LiteralTy, M::Acc) {
    match ty {
        LiteralTy::Integer(int_ty) => mapper.map_reduce_integer_lit_ty(*int_ty),
        LiteralTy::Bool => mapper.map_reduce_bool_lit_ty(),
        LiteralTy::Char => mapper.map_reduce_char_lit_ty(),
    }
}

/// Map-reduce both fields of a scalar; accumulators combine integer first.
pub fn walk_scalar_value<M: LiteralMapReducer + ?Sized>(
    mapper: &mut M,
    scalar: &ScalarValue,
) -> (ScalarValue, M::Acc) {
    let (value, value_acc) = mapper.map_reduce_big_int(&scalar.value);
    let (int_ty, int_ty_acc) = mapper.map_reduce_integer_ty(scalar.int_ty);
    (ScalarValue { value, int_ty }, mapper.plus(value_acc, int_ty_acc))
}
