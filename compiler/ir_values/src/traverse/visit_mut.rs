//! Iterate with in-place mutation.

use crate::{BigInt, IntegerTy, Literal, LiteralTy, ScalarValue};

/// Trait for visiting literals through mutable references.
///
/// The in-place counterpart of [`LiteralFolder`](super::LiteralFolder):
/// nothing is rebuilt, so a pass that touches a few scalars in a large
/// body avoids cloning every integer. To change which variant a value is,
/// override [`visit_literal_mut`](Self::visit_literal_mut) and assign.
pub trait LiteralVisitorMut {
    /// Visit a literal by dispatching to variant-specific methods.
    fn visit_literal_mut(&mut self, lit: &mut Literal) {
        walk_literal_mut(self, lit);
    }

    /// Visit a literal type by dispatching to variant-specific methods.
    fn visit_literal_ty_mut(&mut self, ty: &mut LiteralTy) {
        walk_literal_ty_mut(self, ty);
    }

    /// Visit a `Literal::Scalar`. Default visits the scalar value.
    fn visit_scalar_lit_mut(&mut self, scalar: &mut ScalarValue) {
        self.visit_scalar_value_mut(scalar);
    }

    fn visit_bool_lit_mut(&mut self, b: &mut bool) {
        self.visit_bool_mut(b);
    }

    fn visit_char_lit_mut(&mut self, c: &mut char) {
        self.visit_char_mut(c);
    }

    fn visit_integer_lit_ty_mut(&mut self, int_ty: &mut IntegerTy) {
        self.visit_integer_ty_mut(int_ty);
    }

    fn visit_bool_lit_ty_mut(&mut self) {}

    fn visit_char_lit_ty_mut(&mut self) {}

    /// Visit a scalar value. Default visits the integer, then its type.
    fn visit_scalar_value_mut(&mut self, scalar: &mut ScalarValue) {
        walk_scalar_value_mut(self, scalar);
    }

    /// Visit an unbounded integer.
    fn visit_big_int_mut(&mut self, _value: &mut BigInt) {}

    impl_copy_leaf_methods!(visit_mut:
        (visit_integer_ty_mut, IntegerTy, "Visit an integer type tag."),
        (visit_bool_mut, bool, "Visit a boolean."),
        (visit_char_mut, char, "Visit a character."),
    );
}

/// Default traversal of a literal: calls the hook for its variant.
pub fn walk_literal_mut<V: LiteralVisitorMut + ?Sized>(visitor: &mut V, lit: &mut Literal) {
    match lit {
        Literal::Scalar(scalar) => visitor.visit_scalar_lit_mut(scalar),
        Literal::Bool(b) => visitor.visit_bool_lit_mut(b),
        Literal::Char(c) => visitor.visit_char_lit_mut(c),
    }
}

/// Default traversal of a literal type: calls the hook for its variant.
pub fn walk_literal_ty_mut<V: LiteralVisitorMut + ?Sized>(visitor: &mut V, ty: &mut LiteralTy) {
    match ty {
        LiteralTy::Integer(int_ty) => visitor.visit_integer_lit_ty_mut(int_ty),
        LiteralTy::Bool => visitor.visit_bool_lit_ty_mut(),
        LiteralTy::Char => visitor.visit_char_lit_ty_mut(),
    }
}

/// Default traversal of a scalar: visits the integer, then its type tag.
pub fn walk_scalar_value_mut<V: LiteralVisitorMut + ?Sized>(
    visitor: &mut V,
    scalar: &mut ScalarValue,
) {
    visitor.visit_big_int_mut(&mut scalar.value);
    visitor.visit_integer_ty_mut(&mut scalar.int_ty);
}
