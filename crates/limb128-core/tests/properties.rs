//! Property-based tests for the limb arithmetic.
//!
//! Native `u128`/`i128` are the oracle: every operation must agree with
//! them bit-for-bit, flags included.

use proptest::prelude::*;

use limb128_core::limbs;
use limb128_core::{I128, U128};

fn u(v: u128) -> U128 {
    U128::from(v)
}

fn i(v: i128) -> I128 {
    I128::from(v)
}

/// Values clustered around the interesting limb boundaries as well as
/// uniformly random ones.
fn any_u128() -> impl Strategy<Value = u128> {
    prop_oneof![
        any::<u128>(),
        any::<u64>().prop_map(u128::from),
        any::<u64>().prop_map(|hi| u128::from(hi) << 64),
        Just(0u128),
        Just(u128::MAX),
        Just(1u128 << 127),
        Just(u128::from(u64::MAX)),
    ]
}

fn any_i128() -> impl Strategy<Value = i128> {
    any_u128().prop_map(|v| v as i128)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn mul_wide_matches_native(a in any::<u64>(), b in any::<u64>()) {
        let (lo, hi) = limbs::mul_wide(a, b);
        let expected = u128::from(a) * u128::from(b);
        prop_assert_eq!((u128::from(hi) << 64) | u128::from(lo), expected);
    }

    #[test]
    fn unsigned_add_sub_mul(a in any_u128(), b in any_u128()) {
        prop_assert_eq!(u(a).overflowing_add(u(b)), {
            let (v, o) = a.overflowing_add(b);
            (u(v), o)
        });
        prop_assert_eq!(u(a).overflowing_sub(u(b)), {
            let (v, o) = a.overflowing_sub(b);
            (u(v), o)
        });
        prop_assert_eq!(u(a).overflowing_mul(u(b)), {
            let (v, o) = a.overflowing_mul(b);
            (u(v), o)
        });
    }

    #[test]
    fn signed_add_sub_mul(a in any_i128(), b in any_i128()) {
        prop_assert_eq!(i(a).overflowing_add(i(b)), {
            let (v, o) = a.overflowing_add(b);
            (i(v), o)
        });
        prop_assert_eq!(i(a).overflowing_sub(i(b)), {
            let (v, o) = a.overflowing_sub(b);
            (i(v), o)
        });
        prop_assert_eq!(i(a).overflowing_mul(i(b)), {
            let (v, o) = a.overflowing_mul(b);
            (i(v), o)
        });
    }

    #[test]
    fn negation_and_abs(a in any_i128()) {
        prop_assert_eq!(i(a).overflowing_neg(), {
            let (v, o) = a.overflowing_neg();
            (i(v), o)
        });
        prop_assert_eq!(-(-i(a)), i(a));
        prop_assert_eq!(i(a).wrapping_abs(), i(a.wrapping_abs()));
        prop_assert_eq!(i(a).unsigned_abs(), u(a.unsigned_abs()));
    }

    #[test]
    fn comparisons_agree(a in any_u128(), b in any_u128()) {
        prop_assert_eq!(u(a).cmp(&u(b)), a.cmp(&b));
        prop_assert_eq!(u(a) < u(b), a < b);
        prop_assert_eq!(u(a) >= u(b), a >= b);

        let (sa, sb) = (a as i128, b as i128);
        prop_assert_eq!(i(sa).cmp(&i(sb)), sa.cmp(&sb));
        prop_assert_eq!(i(sa) <= i(sb), sa <= sb);
        prop_assert_eq!(i(sa) > i(sb), sa > sb);
    }

    #[test]
    fn shifts_agree(a in any_u128(), n in 0u32..160) {
        let expected_shl = a.checked_shl(n).unwrap_or(0);
        let expected_shr = a.checked_shr(n).unwrap_or(0);
        prop_assert_eq!(u(a) << n, u(expected_shl));
        prop_assert_eq!(u(a) >> n, u(expected_shr));

        let s = a as i128;
        let expected_sar = s >> n.min(127);
        prop_assert_eq!(i(s) >> n, i(expected_sar));
        prop_assert_eq!(i(s).shift_right_logical(n), i(expected_shr as i128));
    }

    #[test]
    fn bitwise_agree(a in any_u128(), b in any_u128()) {
        prop_assert_eq!(u(a) & u(b), u(a & b));
        prop_assert_eq!(u(a) | u(b), u(a | b));
        prop_assert_eq!(u(a) ^ u(b), u(a ^ b));
        prop_assert_eq!(!u(a), u(!a));
    }

    #[test]
    fn counting_agrees(a in any_u128()) {
        prop_assert_eq!(u(a).leading_zeros(), a.leading_zeros());
        prop_assert_eq!(u(a).trailing_zeros(), a.trailing_zeros());
        prop_assert_eq!(u(a).count_ones(), a.count_ones());
    }

    #[test]
    fn unsigned_format_parse_round_trip(a in any_u128(), radix in 2u32..=36) {
        let text = u(a).to_str_radix(radix).unwrap();
        prop_assert_eq!(U128::from_str_radix(&text, radix), Ok(u(a)));
        prop_assert_eq!(u(a).formatted_len(radix), Ok(text.len()));
    }

    #[test]
    fn signed_format_parse_round_trip(a in any_i128(), radix in 2u32..=36) {
        let text = i(a).to_str_radix(radix).unwrap();
        prop_assert_eq!(I128::from_str_radix(&text, radix), Ok(i(a)));
    }

    #[test]
    fn prefixed_output_parses_with_detected_radix(
        a in any_i128(),
        radix in prop::sample::select(vec![2u32, 8, 10, 16]),
    ) {
        let text = u(a as u128).to_str_radix(radix).unwrap();
        prop_assert_eq!(text.parse::<U128>(), Ok(u(a as u128)));
        let text = i(a).to_str_radix(radix).unwrap();
        prop_assert_eq!(text.parse::<I128>(), Ok(i(a)));
    }

    #[test]
    fn display_matches_native(a in any_i128()) {
        prop_assert_eq!(i(a).to_string(), a.to_string());
        prop_assert_eq!(u(a as u128).to_string(), (a as u128).to_string());
        prop_assert_eq!(format!("{:x}", i(a)), format!("{a:x}"));
        prop_assert_eq!(format!("{:#b}", u(a as u128)), format!("{:#b}", a as u128));
    }

    #[test]
    fn decimal_parse_matches_native(a in any_i128()) {
        let text = a.to_string();
        prop_assert_eq!(text.parse::<I128>(), Ok(i(a)));
        let parsed = I128::parse_partial(&text, None);
        prop_assert_eq!(parsed.consumed, text.len());
        prop_assert!(!parsed.overflowed);
    }
}
