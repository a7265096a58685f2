//! Transform: rebuild literals, rewriting at the leaves.

use crate::{BigInt, IntegerTy, Literal, LiteralTy, ScalarValue};

/// Trait for transforming literals.
///
/// Every default is the identity, so an empty impl returns a value equal
/// to its input. Variant hooks return the enclosing type, which lets a
/// pass change which variant a value is, not just its payload.
pub trait LiteralFolder {
    /// Fold a literal by dispatching to variant-specific methods.
    fn fold_literal(&mut self, lit: &Literal) -> Literal {
        walk_literal(self, lit)
    }

    /// Fold a literal type by dispatching to variant-specific methods.
    fn fold_literal_ty(&mut self, ty: &LiteralTy) -> LiteralTy {
        walk_literal_ty(self, ty)
    }

    /// Fold a `Literal::Scalar`. Default folds the scalar value.
    fn fold_scalar_lit(&mut self, scalar: &ScalarValue) -> Literal {
        Literal::Scalar(self.fold_scalar_value(scalar))
    }

    /// Fold a `Literal::Bool`.
    fn fold_bool_lit(&mut self, b: bool) -> Literal {
        Literal::Bool(self.fold_bool(b))
    }

    /// Fold a `Literal::Char`.
    fn fold_char_lit(&mut self, c: char) -> Literal {
        Literal::Char(self.fold_char(c))
    }

    /// Fold a `LiteralTy::Integer`.
    fn fold_integer_lit_ty(&mut self, int_ty: IntegerTy) -> LiteralTy {
        LiteralTy::Integer(self.fold_integer_ty(int_ty))
    }

    /// Fold `LiteralTy::Bool`.
    fn fold_bool_lit_ty(&mut self) -> LiteralTy {
        LiteralTy::Bool
    }

    /// Fold `LiteralTy::Char`.
    fn fold_char_lit_ty(&mut self) -> LiteralTy {
        LiteralTy::Char
    }

    /// Fold a scalar value. Default folds the integer, then its type.
    fn fold_scalar_value(&mut self, scalar: &ScalarValue) -> ScalarValue {
        walk_scalar_value(self, scalar)
    }

    /// Fold an unbounded integer.
    fn fold_big_int(&mut self, value: &BigInt) -> BigInt {
        value.clone()
    }

    impl_copy_leaf_methods!(fold:
        (fold_integer_ty, IntegerTy, "Fold an integer type tag."),
        (fold_bool, bool, "Fold a boolean."),
        (fold_char, char, "Fold a character."),
    );
}

/// Default fold of a literal: the variant hook decides the result.
pub fn walk_literal<F: LiteralFolder + ?Sized>(folder: &mut F, lit: &Literal) -> Literal {
    match lit {
        Literal::Scalar(scalar) => folder.fold_scalar_lit(scalar),
        Literal::Bool(b) => folder.fold_bool_lit(*b),
        Literal::Char(c) => folder.fold_char_lit(*c),
    }
}

/// Default fold of a literal type: the variant hook decides the result.
pub fn walk_literal_ty<F: LiteralFolder + ?Sized>(folder: &mut F, ty: &LiteralTy) -> LiteralTy {
    match ty {
        LiteralTy::Integer(int_ty) => folder.fold_integer_lit_ty(*int_ty),
        LiteralTy::Bool => folder.fold_bool_lit_ty(),
        LiteralTy::Char => folder.fold_char_lit_ty(),
    }
}

/// Fold the integer and the type tag of a scalar independently.
pub fn walk_scalar_value<F: LiteralFolder + ?Sized>(
    folder: &mut F,
    scalar: &ScalarValue,
) -> ScalarValue {
    ScalarValue {
        value: folder.fold_big_int(&scalar.value),
        int_ty: folder.fold_integer_ty(scalar.int_ty),
    }
}
