//! Reduce: fold literals into an accumulator.

use crate::{BigInt, IntegerTy, Literal, LiteralTy, ScalarValue};

/// Trait for reducing literals to a single accumulated value.
///
/// Implementors supply the monoid: `zero` is the identity of `plus`, and
/// `plus` must be associative. Leaves default to `zero()`; composites
/// combine their children with `plus`, left to right.
///
/// # Example
///
/// ```text
/// struct IntegerTys;
///
/// impl LiteralReducer for IntegerTys {
///     type Acc = BTreeSet<IntegerTy>;
///
///     fn zero(&self) -> Self::Acc { BTreeSet::new() }
///
///     fn plus(&self, mut a: Self::Acc, b: Self::Acc) -> Self::Acc {
///         a.extend(b);
///         a
///     }
///
///     fn reduce_integer_ty(&mut self, int_ty: IntegerTy) -> Self::Acc {
///         BTreeSet::from([int_ty])
///     }
/// }
/// ```
pub trait LiteralReducer {
    type Acc;

    /// Identity of `plus`.
    fn zero(&self) -> Self::Acc;

    /// Associative combination of two accumulators.
    fn plus(&self, a: Self::Acc, b: Self::Acc) -> Self::Acc;

    /// Reduce a literal by dispatching to variant-specific methods.
    fn reduce_literal(&mut self, lit: &Literal) -> Self::Acc {
        walk_literal(self, lit)
    }

    /// Reduce a literal type by dispatching to variant-specific methods.
    fn reduce_literal_ty(&mut self, ty: &LiteralTy) -> Self::Acc {
        walk_literal_ty(self, ty)
    }

    /// Reduce a `Literal::Scalar`. Default reduces the scalar value.
    fn reduce_scalar_lit(&mut self, scalar: &ScalarValue) -> Self::Acc {
        self.reduce_scalar_value(scalar)
    }

    /// Reduce a `Literal::Bool`.
    fn reduce_bool_lit(&mut self, b: bool) -> Self::Acc {
        self.reduce_bool(b)
    }

    /// Reduce a `Literal::Char`.
    fn reduce_char_lit(&mut self, c: char) -> Self::Acc {
        self.reduce_char(c)
    }

    /// Reduce a `LiteralTy::Integer`.
    fn reduce_integer_lit_ty(&mut self, int_ty: IntegerTy) -> Self::Acc {
        self.reduce_integer_ty(int_ty)
    }

    /// Reduce `LiteralTy::Bool`.
    fn reduce_bool_lit_ty(&mut self) -> Self::Acc {
        self.zero()
    }

    /// Reduce `LiteralTy::Char`.
    fn reduce_char_lit_ty(&mut self) -> Self::Acc {
        self.zero()
    }

    /// Reduce a scalar value: `plus(reduce(value), reduce(int_ty))`.
    fn reduce_scalar_value(&mut self, scalar: &ScalarValue) -> Self::Acc {
        walk_scalar_value(self, scalar)
    }

    /// Reduce an unbounded integer.
    fn reduce_big_int(&mut self, _value: &BigInt) -> Self::Acc {
        self.zero()
    }

    impl_copy_leaf_methods!(reduce:
        (reduce_integer_ty, IntegerTy, "Reduce an integer type tag."),
        (reduce_bool, bool, "Reduce a boolean."),
        (reduce_char, char, "Reduce a character."),
    );
}

/// Reduce a literal through the hook for its variant.
pub fn walk_literal<R: LiteralReducer + ?Sized>(reducer: &mut R, lit: &Literal) -> R::Acc {
    match lit {
        Literal::Scalar(scalar) => reducer.reduce_scalar_lit(scalar),
        Literal::Bool(b) => reducer.reduce_bool_lit(*b),
        Literal::Char(c) => reducer.reduce_char_lit(*c),
    }
}

/// Reduce a literal type through the hook for its variant.
pub fn walk_literal_ty<R: LiteralReducer + ?Sized>(reducer: &mut R, ty: &LiteralTy) -> R::Acc {
    match ty {
        LiteralTy::Integer(int_ty) => reducer.reduce_integer_lit_ty(*int_ty),
        LiteralTy::Bool => reducer.reduce_bool_lit_ty(),
        LiteralTy::Char => reducer.reduce_char_lit_ty(),
    }
}

/// Reduce the integer and the type tag, combined with `plus` in that order.
pub fn walk_scalar_value<R: LiteralReducer + ?Sized>(
    reducer: &mut R,
    scalar: &ScalarValue,
) -> R::Acc {
    let value = reducer.reduce_big_int(&scalar.value);
    let int_ty = reducer.reduce_integer_ty(scalar.int_ty);
    reducer.plus(value, int_ty)
}
