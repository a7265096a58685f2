//! Property-based tests for literal values.
//!
//! These tests use proptest to generate random literals and verify:
//! 1. JSON and bincode round-trips are exact, including integers far beyond 128 bits
//! 2. The identity folder and the all-zero reducer are neutral
//! 3. Map-reduce agrees with fold and reduce run separately
//! 4. Orderings are total

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use ir_values::{
    init_tracing, BigInt, DecodeError, IntegerTy, Literal, LiteralFolder, LiteralMapReducer,
    LiteralReducer, LiteralTy, LiteralVisitor, ScalarValue,
};
use num_bigint::Sign;
use proptest::prelude::*;
use serde_json::Value;

// -- Strategies --

/// Integers up to 320 bits, either sign.
fn big_int_strategy() -> impl Strategy<Value = BigInt> {
    (
        any::<bool>(),
        proptest::collection::vec(any::<u32>(), 0..10),
    )
        .prop_map(|(negative, digits)| {
            let sign = if negative { Sign::Minus } else { Sign::Plus };
            BigInt::new(num_bigint::BigInt::from_slice(sign, &digits))
        })
}

fn integer_ty_strategy() -> impl Strategy<Value = IntegerTy> {
    proptest::sample::select(IntegerTy::ALL.to_vec())
}

fn literal_ty_strategy() -> impl Strategy<Value = LiteralTy> {
    prop_oneof![
        integer_ty_strategy().prop_map(LiteralTy::Integer),
        Just(LiteralTy::Bool),
        Just(LiteralTy::Char),
    ]
}

fn literal_strategy() -> impl Strategy<Value = Literal> {
    prop_oneof![
        (big_int_strategy(), integer_ty_strategy())
            .prop_map(|(value, int_ty)| Literal::Scalar(ScalarValue::new(value, int_ty))),
        any::<bool>().prop_map(Literal::Bool),
        any::<char>().prop_map(Literal::Char),
    ]
}

// -- Traversals under test --

struct Identity;
impl LiteralFolder for Identity {}

struct Zero;

impl LiteralReducer for Zero {
    type Acc = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn plus(&self, a: u64, b: u64) -> u64 {
        a + b
    }
}

/// Negates every integer; counts integers and chars.
struct NegateAndCount;

impl LiteralFolder for NegateAndCount {
    fn fold_big_int(&mut self, value: &BigInt) -> BigInt {
        BigInt::new(-value.as_inner())
    }
}

impl LiteralReducer for NegateAndCount {
    type Acc = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn plus(&self, a: u64, b: u64) -> u64 {
        a + b
    }

    fn reduce_big_int(&mut self, _value: &BigInt) -> u64 {
        1
    }

    fn reduce_char(&mut self, _c: char) -> u64 {
        1
    }
}

impl LiteralMapReducer for NegateAndCount {
    type Acc = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn plus(&self, a: u64, b: u64) -> u64 {
        a + b
    }

    fn map_reduce_big_int(&mut self, value: &BigInt) -> (BigInt, u64) {
        (BigInt::new(-value.as_inner()), 1)
    }

    fn map_reduce_char(&mut self, c: char) -> (char, u64) {
        (c, 1)
    }
}

/// Records which variant hooks fire.
#[derive(Default)]
struct Hits(Vec<&'static str>);

impl LiteralVisitor for Hits {
    fn visit_scalar_lit(&mut self, _scalar: &ScalarValue) {
        self.0.push("scalar");
    }

    fn visit_bool_lit(&mut self, _b: bool) {
        self.0.push("bool");
    }

    fn visit_char_lit(&mut self, _c: char) {
        self.0.push("char");
    }
}

// -- Properties --

proptest! {
    #[test]
    fn big_int_json_round_trip(n in big_int_strategy()) {
        let encoded = n.to_json();
        prop_assert!(encoded.is_string());
        prop_assert_eq!(BigInt::from_json(&encoded), Ok(n));
    }

    #[test]
    fn big_int_decodes_from_bare_json_number(n in big_int_strategy()) {
        let value: Value = serde_json::from_str(&n.to_string()).unwrap();
        prop_assert_eq!(BigInt::from_json(&value), Ok(n));
    }

    #[test]
    fn float_json_never_decodes(
        x in (-1.0e12f64..1.0e12).prop_filter("non-integral", |x| x.fract() != 0.0)
    ) {
        prop_assert_eq!(BigInt::from_json(&serde_json::json!(x)), Err(DecodeError::NotAnInteger));
    }

    #[test]
    fn literal_serde_round_trip(lit in literal_strategy()) {
        let text = serde_json::to_string(&lit).unwrap();
        let decoded: Literal = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(decoded, lit);
    }

    #[test]
    fn literal_bincode_round_trip(lit in literal_strategy()) {
        let bytes = bincode::serialize(&lit).unwrap();
        let decoded: Literal = bincode::deserialize(&bytes).unwrap();
        prop_assert_eq!(decoded, lit);
    }

    #[test]
    fn identity_folder_preserves_literals(lit in literal_strategy()) {
        prop_assert_eq!(Identity.fold_literal(&lit), lit);
    }

    #[test]
    fn identity_folder_preserves_literal_tys(ty in literal_ty_strategy()) {
        prop_assert_eq!(Identity.fold_literal_ty(&ty), ty);
    }

    #[test]
    fn zero_reducer_yields_zero(lit in literal_strategy(), ty in literal_ty_strategy()) {
        prop_assert_eq!(Zero.reduce_literal(&lit), 0);
        prop_assert_eq!(Zero.reduce_literal_ty(&ty), 0);
    }

    #[test]
    fn map_reduce_agrees_with_fold_and_reduce(lit in literal_strategy()) {
        let (mapped, acc) = LiteralMapReducer::map_reduce_literal(&mut NegateAndCount, &lit);
        prop_assert_eq!(mapped, LiteralFolder::fold_literal(&mut NegateAndCount, &lit));
        prop_assert_eq!(acc, LiteralReducer::reduce_literal(&mut NegateAndCount, &lit));
    }

    #[test]
    fn exactly_one_variant_hook_fires(lit in literal_strategy()) {
        let mut hits = Hits::default();
        hits.visit_literal(&lit);
        prop_assert_eq!(hits.0.len(), 1);
    }

    #[test]
    fn literal_ty_matches_value(lit in literal_strategy()) {
        let ty = lit.ty();
        match &lit {
            Literal::Scalar(scalar) => prop_assert_eq!(ty, LiteralTy::Integer(scalar.int_ty)),
            Literal::Bool(_) => prop_assert_eq!(ty, LiteralTy::Bool),
            Literal::Char(_) => prop_assert_eq!(ty, LiteralTy::Char),
        }
    }

    #[test]
    fn literal_ordering_is_total(a in literal_strategy(), b in literal_strategy()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a.cmp(&b).is_eq(), a == b);
    }
}

#[test]
fn scalar_beyond_64_bits_scenario() {
    init_tracing();
    let value: Value = serde_json::from_str("123456789012345678901234567890").unwrap();
    let n = BigInt::from_json(&value).unwrap();
    let expected: num_bigint::BigInt = "123456789012345678901234567890".parse().unwrap();
    assert_eq!(n.as_inner(), &expected);
    assert_eq!(n.to_json(), Value::String("123456789012345678901234567890".to_owned()));
}

#[test]
fn out_of_range_scalar_constructs() {
    let lit = Literal::from(ScalarValue::new(-1, IntegerTy::U8));
    assert_eq!(lit.to_string(), "-1 : u8");
    assert_eq!(lit.ty(), LiteralTy::Integer(IntegerTy::U8));
}

#[test]
fn values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigInt>();
    assert_send_sync::<IntegerTy>();
    assert_send_sync::<LiteralTy>();
    assert_send_sync::<ScalarValue>();
    assert_send_sync::<Literal>();
}
