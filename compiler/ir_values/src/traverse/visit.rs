//! Iterate: visit literals for side effects.

use crate::{BigInt, IntegerTy, Literal, LiteralTy, ScalarValue};

/// Trait for visiting literals without modification.
///
/// # Example
///
/// ```text
/// struct CountChars {
///     count: usize,
/// }
///
/// impl LiteralVisitor for CountChars {
///     fn visit_char(&mut self, _c: char) {
///         self.count += 1;
///     }
/// }
/// ```
pub trait LiteralVisitor {
    /// Visit a literal by dispatching to variant-specific methods.
    fn visit_literal(&mut self, lit: &Literal) {
        walk_literal(self, lit);
    }

    /// Visit a literal type by dispatching to variant-specific methods.
    fn visit_literal_ty(&mut self, ty: &LiteralTy) {
        walk_literal_ty(self, ty);
    }

    /// Visit a `Literal::Scalar`. Default visits the scalar value.
    fn visit_scalar_lit(&mut self, scalar: &ScalarValue) {
        self.visit_scalar_value(scalar);
    }

    /// Visit a `Literal::Bool`.
    fn visit_bool_lit(&mut self, b: bool) {
        self.visit_bool(b);
    }

    /// Visit a `Literal::Char`.
    fn visit_char_lit(&mut self, c: char) {
        self.visit_char(c);
    }

    /// Visit a `LiteralTy::Integer`.
    fn visit_integer_lit_ty(&mut self, int_ty: IntegerTy) {
        self.visit_integer_ty(int_ty);
    }

    /// Visit `LiteralTy::Bool`.
    fn visit_bool_lit_ty(&mut self) {}

    /// Visit `LiteralTy::Char`.
    fn visit_char_lit_ty(&mut self) {}

    /// Visit a scalar value. Default visits the integer, then its type.
    fn visit_scalar_value(&mut self, scalar: &ScalarValue) {
        walk_scalar_value(self, scalar);
    }

    /// Visit an unbounded integer.
    fn visit_big_int(&mut self, _value: &BigInt) {}

    impl_copy_leaf_methods!(visit:
        (visit_integer_ty, IntegerTy, "Visit an integer type tag."),
        (visit_bool, bool, "Visit a boolean."),
        (visit_char, char, "Visit a character."),
    );
}

/// Default traversal of a literal: calls the hook for its variant.
pub fn walk_literal<V: LiteralVisitor + ?Sized>(visitor: &mut V, lit: &Literal) {
    match lit {
        Literal::Scalar(scalar) => visitor.visit_scalar_lit(scalar),
        Literal::Bool(b) => visitor.visit_bool_lit(*b),
        Literal::Char(c) => visitor.visit_char_lit(*c),
    }
}

/// Default traversal of a literal type: calls the hook for its variant.
pub fn walk_literal_ty<V: LiteralVisitor + ?Sized>(visitor: &mut V, ty: &LiteralTy) {
    match ty {
        LiteralTy::Integer(int_ty) => visitor.visit_integer_lit_ty(*int_ty),
        LiteralTy::Bool => visitor.visit_bool_lit_ty(),
        LiteralTy::Char => visitor.visit_char_lit_ty(),
    }
}

/// Default traversal of a scalar: visits the integer, then its type tag.
pub fn walk_scalar_value<V: LiteralVisitor + ?Sized>(visitor: &mut V, scalar: &ScalarValue) {
    visitor.visit_big_int(&scalar.value);
    visitor.visit_integer_ty(scalar.int_ty);
}
