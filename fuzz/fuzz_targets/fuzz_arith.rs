#![no_main]

use libfuzzer_sys::fuzz_target;

use limb128_core::{I128, U128};

fuzz_target!(|data: &[u8]| {
    if data.len() < 33 {
        return;
    }
    // Two 16-byte operands and a shift amount
    let a = u128::from_le_bytes(data[0..16].try_into().unwrap());
    let b = u128::from_le_bytes(data[16..32].try_into().unwrap());
    let n = u32::from(data[32]);

    let (ua, ub) = (U128::from(a), U128::from(b));
    assert_eq!(ua.overflowing_add(ub), {
        let (v, o) = a.overflowing_add(b);
        (U128::from(v), o)
    });
    assert_eq!(ua.overflowing_sub(ub), {
        let (v, o) = a.overflowing_sub(b);
        (U128::from(v), o)
    });
    assert_eq!(ua.overflowing_mul(ub), {
        let (v, o) = a.overflowing_mul(b);
        (U128::from(v), o)
    });
    assert_eq!(ua.cmp(&ub), a.cmp(&b));
    assert_eq!(ua << n, U128::from(a.checked_shl(n).unwrap_or(0)));

    let (sa, sb) = (a as i128, b as i128);
    let (ia, ib) = (I128::from(sa), I128::from(sb));
    assert_eq!(ia.overflowing_add(ib), {
        let (v, o) = sa.overflowing_add(sb);
        (I128::from(v), o)
    });
    assert_eq!(ia.overflowing_sub(ib), {
        let (v, o) = sa.overflowing_sub(sb);
        (I128::from(v), o)
    });
    assert_eq!(ia.overflowing_mul(ib), {
        let (v, o) = sa.overflowing_mul(sb);
        (I128::from(v), o)
    });
    assert_eq!(ia.cmp(&ib), sa.cmp(&sb));
    assert_eq!(ia >> n, I128::from(sa >> n.min(127)));
});
