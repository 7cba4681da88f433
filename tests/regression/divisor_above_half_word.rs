use biglimb::BigInt;

// The running remainder is doubled before the divisor is subtracted, which
// overflows a single limb once the divisor exceeds 2^31.
#[test]
fn test() {
    let n = BigInt::from_decimal_str("18446744073709551615").unwrap();
    let (q, r) = n.divide_scalar(0xFFFF_FFFE).unwrap();
    assert_eq!(q.to_decimal_string().unwrap(), "4294967298");
    assert_eq!(r, 3);
}
