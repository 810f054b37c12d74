use proptest::prelude::*;
use fixed_point::{ArithmeticError, ArithmeticStatus, Fixed, Operation};

/// Expected raw result under the zero-sentinel policy.
fn sentinel(wide: i64) -> i32 {
    i32::try_from(wide).unwrap_or(0)
}

/// Strategy for floats well inside the representable range.
///
/// Kept below 1000 so an f32 sum loses at most ~3e-5, less than the slack
/// `min_gap` leaves above one raw step.
fn any_representable() -> impl Strategy<Value = f32> {
    -1000.0f32..1000.0f32
}

/// Gaps starting just above one raw step (2^-8).
fn min_gap() -> impl Strategy<Value = f32> {
    (1.0f32 / 256.0 + 1e-4)..1.0f32
}

proptest! {

    // --- from_int <-> to_int roundtrip ---
    #[test]
    fn int_roundtrip(n in -(1i32 << 23)..(1i32 << 23)) {
        prop_assert_eq!(Fixed::from_int(n).to_int(), n);
    }

    // --- raw roundtrip ---
    #[test]
    fn from_raw_gives_correct_raw_back(raw in any::<i32>()) {
        let fx = Fixed::from_raw(raw);
        prop_assert_eq!(fx.raw_bits(), raw);
    }

    // --- equality is raw equality ---
    #[test]
    fn equality_matches_raw_equality(a in any::<i32>(), b in any::<i32>()) {
        let x = Fixed::from_raw(a);
        let y = Fixed::from_raw(b);
        prop_assert_eq!(x == y, a == b);
        prop_assert_eq!(x < y, a < b);
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }

    // --- float conversion is monotone for inputs more than one step apart ---
    #[test]
    fn float_conversion_is_monotone(f in any_representable(), gap in min_gap()) {
        let upper = f + gap;
        prop_assert!(upper - f > 1.0 / 256.0);

        let lo = Fixed::from_f32(f);
        let hi = Fixed::from_f32(upper);
        prop_assert!(lo < hi);
    }

    // --- to_int floors ---
    #[test]
    fn to_int_is_floor(raw in any::<i32>()) {
        let expected = (f64::from(raw) / 256.0).floor() as i32;
        prop_assert_eq!(Fixed::from_raw(raw).to_int(), expected);
    }

    // --- Addition matches exact addition or the zero sentinel ---
    #[test]
    fn add_saturates_to_zero(a in any::<i32>(), b in any::<i32>()) {
        let x = Fixed::from_raw(a);
        let y = Fixed::from_raw(b);

        let wide = i64::from(a) + i64::from(b);
        prop_assert_eq!((x + y).raw_bits(), sentinel(wide));

        let in_range = i32::try_from(wide).is_ok();
        prop_assert_eq!(x.add_with_status(y).status().is_ok(), in_range);
    }

    // --- Subtraction matches exact subtraction or the zero sentinel ---
    #[test]
    fn sub_saturates_to_zero(a in any::<i32>(), b in any::<i32>()) {
        let x = Fixed::from_raw(a);
        let y = Fixed::from_raw(b);

        let wide = i64::from(a) - i64::from(b);
        prop_assert_eq!((x - y).raw_bits(), sentinel(wide));

        match x.checked_sub(y) {
            Ok(diff) => prop_assert_eq!(i64::from(diff.raw_bits()), wide),
            Err(err) => prop_assert_eq!(
                err,
                ArithmeticError::Overflow { op: Operation::Sub, lhs: a, rhs: b }
            ),
        }
    }

    // --- Multiplication property ---
    #[test]
    fn mul_matches_scaled_integer_math(a in any::<i32>(), b in any::<i32>()) {
        let x = Fixed::from_raw(a);
        let y = Fixed::from_raw(b);

        // Expected raw result = (a*b) >> F, or zero when out of range
        let full = (i64::from(a) * i64::from(b)) >> 8;
        prop_assert_eq!((x * y).raw_bits(), sentinel(full));
    }

    // --- Division property ---
    #[test]
    fn div_matches_scaled_integer_math(a in any::<i32>(), b in any::<i32>()) {
        let x = Fixed::from_raw(a);
        let y = Fixed::from_raw(b);

        let outcome = x.div_with_status(y);
        if b == 0 {
            prop_assert_eq!(outcome.value(), Fixed::ZERO);
            prop_assert_eq!(outcome.status(), ArithmeticStatus::DivisionByZero);
        } else {
            let full = (i64::from(a) << 8) / i64::from(b);
            prop_assert_eq!(outcome.value().raw_bits(), sentinel(full));
        }
    }

    // --- Increment moves by exactly one raw step ---
    #[test]
    fn increment_is_one_raw_step(raw in (i32::MIN + 1)..i32::MAX) {
        let mut x = Fixed::from_raw(raw);
        prop_assert_eq!(x.post_increment().raw_bits(), raw);
        prop_assert_eq!(x.raw_bits(), raw + 1);
        prop_assert_eq!(x.decrement().raw_bits(), raw);
        prop_assert_eq!(x.decrement().raw_bits(), raw - 1);
    }

    // --- min / max pick by raw value ---
    #[test]
    fn min_max_pick_by_raw(a in any::<i32>(), b in any::<i32>()) {
        let x = Fixed::from_raw(a);
        let y = Fixed::from_raw(b);
        prop_assert_eq!(Fixed::min_of(x, y).raw_bits(), a.min(b));
        prop_assert_eq!(Fixed::max_of(x, y).raw_bits(), a.max(b));
    }
}
