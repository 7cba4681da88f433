#![no_main]
use biglimb::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u32, u32, &[u8])| {
    let (divisor, shift, digits) = input;
    if divisor == 0 || digits.len() > 256 {
        return;
    }
    let s: String = digits.iter().map(|b| char::from(b'0' + b % 10)).collect();
    let mut dividend = BigInt::from_decimal_str(&s).unwrap();
    dividend.left_shift(shift % 32).unwrap();

    let (quotient, remainder) = dividend.divide_scalar(divisor).unwrap();
    assert!(remainder < divisor);

    let mut back = quotient;
    back.mul_scalar(divisor).unwrap();
    back.add_scalar(remainder).unwrap();
    assert_eq!(back, dividend);
});
