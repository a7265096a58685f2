//! Literal traversal traits.
//!
//! Five traversal strategies over [`Literal`](crate::Literal) and
//! [`LiteralTy`](crate::LiteralTy):
//!
//! - `LiteralVisitor`: iterate, side effects only
//! - `LiteralFolder`: transform, returns a rewritten value
//! - `LiteralReducer`: reduce into an accumulator with `zero` / `plus`
//! - `LiteralMapReducer`: transform and reduce in a single pass
//! - `LiteralVisitorMut`: iterate with `&mut` access, rewriting in place
//!
//! # Design
//!
//! Each trait has one method per variant and per leaf, all with defaults
//! (no-op, identity, or `zero()`). A pass overrides only the methods for
//! the variants it cares about. The implementing value is the traversal
//! context: state lives in `self` and is threaded through `&mut self`.
//!
//! Default implementations call the `walk_*` functions of the strategy's
//! module. An override that still wants the default behavior calls the
//! matching `walk_*` function itself.
//!
//! Dispatch matches are exhaustive. A new `Literal` or `LiteralTy` variant
//! fails to compile here until every strategy has a default for it; passes
//! that do not override the new hook keep compiling and get the default.
//!
//! # Example
//!
//! ```
//! use ir_values::{IntegerTy, Literal, LiteralFolder, ScalarValue};
//!
//! struct Widen;
//!
//! impl LiteralFolder for Widen {
//!     fn fold_integer_ty(&mut self, int_ty: IntegerTy) -> IntegerTy {
//!         if int_ty == IntegerTy::I32 { IntegerTy::I64 } else { int_ty }
//!     }
//! }
//!
//! let lit = Literal::Scalar(ScalarValue::new(7, IntegerTy::I32));
//! assert_eq!(
//!     Widen.fold_literal(&lit),
//!     Literal::Scalar(ScalarValue::new(7, IntegerTy::I64)),
//! );
//! ```

/// Generate default methods for `Copy` leaves.
///
/// For visit: `fn visit_<leaf>(&mut self, _: T) {}`
/// For `visit_mut`: `fn visit_<leaf>_mut(&mut self, _: &mut T) {}`
/// For fold: `fn fold_<leaf>(&mut self, value: T) -> T`
/// For reduce: `fn reduce_<leaf>(&mut self, _: T) -> Self::Acc`
/// For `map_reduce`: `fn map_reduce_<leaf>(&mut self, value: T) -> (T, Self::Acc)`
macro_rules! impl_copy_leaf_methods {
    (visit: $( ($method:ident, $ty:ty, $doc:literal) ),+ $(,)?) => {
        $(
            #[doc = $doc]
            fn $method(&mut self, _value: $ty) {}
        )+
    };
    (visit_mut: $( ($method:ident, $ty:ty, $doc:literal) ),+ $(,)?) => {
        $(
            #[doc = $doc]
            fn $method(&mut self, _value: &mut $ty) {}
        )+
    };
    (fold: $( ($method:ident, $ty:ty, $doc:literal) ),+ $(,)?) => {
        $(
            #[doc = $doc]
            fn $method(&mut self, value: $ty) -> $ty {
                value
            }
        )+
    };
    (reduce: $( ($method:ident, $ty:ty, $doc:literal) ),+ $(,)?) => {
        $(
            #[doc = $doc]
            fn $method(&mut self, _value: $ty) -> Self::Acc {
                self.zero()
            }
        )+
    };
    (map_reduce: $( ($method:ident, $ty:ty, $doc:literal) ),+ $(,)?) => {
        $(
            #[doc = $doc]
            fn $method(&mut self, value: $ty) -> ($ty, Self::Acc) {
                (value, self.zero())
            }
        )+
    };
}

pub mod fold;
pub mod map_reduce;
pub mod reduce;
pub mod visit;
pub mod visit_mut;

pub use fold::LiteralFolder;
pub use map_reduce::LiteralMapReducer;
pub use reduce::LiteralReducer;
pub use visit::LiteralVisitor;
pub use visit_mut::LiteralVisitorMut;
