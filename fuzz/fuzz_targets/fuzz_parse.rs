#![no_main]

use libfuzzer_sys::fuzz_target;

use limb128_core::{I128, U128};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Lenient parsing must never panic and must stop inside the input.
    for radix in [None, Some(2), Some(10), Some(16), Some(36)] {
        let parsed = U128::parse_partial(text, radix);
        assert!(parsed.consumed <= text.len());
        assert!(text.is_char_boundary(parsed.consumed));
        let _ = I128::parse_partial(text, radix);
    }

    // Whatever strict parsing accepts must print and parse back unchanged.
    if let Ok(value) = text.parse::<I128>() {
        for radix in [2, 8, 10, 16, 36] {
            let printed = value.to_str_radix(radix).unwrap();
            assert_eq!(I128::from_str_radix(&printed, radix), Ok(value));
        }
        assert_eq!(value.to_string(), i128::from(value).to_string());
    }
});
