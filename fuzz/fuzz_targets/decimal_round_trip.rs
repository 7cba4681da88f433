#![no_main]
use biglimb::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(n) = BigInt::from_decimal_str(s) {
            let rendered = n.to_decimal_string().unwrap();
            let trimmed = s.trim_start_matches('0');
            let expected = if trimmed.is_empty() { "0" } else { trimmed };
            assert_eq!(rendered, expected);
        }
    }
});
