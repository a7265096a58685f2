//! IR Values - Literal Values and Their Traversals
//!
//! This crate contains the primitive values shared by every IR pass:
//! - `BigInt` for exact, width-independent integers
//! - `IntegerTy` tags for machine integer widths
//! - `LiteralTy` for the shape of a literal
//! - `ScalarValue` and `Literal` for constant values
//! - Traversal traits (visit, visit-mut, fold, reduce, map-reduce) over literals
//!
//! # Design Philosophy
//!
//! - **Exact Scalars**: a scalar stores an unbounded integer next to its
//!   declared width. Nothing here checks that the value fits; that is
//!   left to whoever interprets the scalar.
//! - **Uniform JSON**: integers always encode as decimal strings and decode
//!   from either strings or JSON numbers of any size.
//! - **Override What You Need**: traversals are traits with defaults for
//!   every variant, so a pass only spells out the cases it changes.
//!
//! All types are plain immutable values: `Clone`, `Eq`, `Ord`, `Hash`,
//! `Send` and `Sync`.

mod big_int;
pub mod error;
mod integer_ty;
mod literal;
mod literal_ty;
pub mod traverse;

pub use big_int::BigInt;
pub use error::DecodeError;
pub use integer_ty::IntegerTy;
pub use literal::{Literal, ScalarValue};
pub use literal_ty::LiteralTy;
pub use traverse::{
    LiteralFolder, LiteralMapReducer, LiteralReducer, LiteralVisitor, LiteralVisitorMut,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ir_values=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
