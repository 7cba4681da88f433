use biglimb::BigInt;

// Limbs left over from a longer previous value must not reappear when the
// copy grows.
#[test]
fn test() {
    let mut dst = BigInt::from_decimal_str("340282366920938463463374607431768211455").unwrap();
    dst.deep_copy_from(&BigInt::from(1u32)).unwrap();
    for _ in 0..4 {
        dst.mul_scalar(u32::MAX).unwrap();
    }
    assert_eq!(
        dst.to_decimal_string().unwrap(),
        "340282366604025813516997721482669850625"
    );
}
