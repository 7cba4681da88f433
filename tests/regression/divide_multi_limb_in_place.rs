use biglimb::BigInt;

// Quotient bits are written at the position of the dividend bit that
// produced them, and zero top limbs of the quotient are dropped afterwards.
#[test]
fn test() {
    // 2^96 + 2^64 + 9
    let n = BigInt::from_decimal_str("79228162532711081667253501961").unwrap();
    assert_eq!(n.limbs(), &[9, 0, 1, 1, 0]);

    let (q, r) = n.divide_scalar(2).unwrap();
    assert_eq!(q.limbs(), &[4, 0x8000_0000, 0x8000_0000, 0]);
    assert_eq!(r, 1);

    let (q, r) = n.divide_scalar(0xFFFF_FFFF).unwrap();
    assert_eq!(q.limbs(), &[2, 2, 1, 0]);
    assert_eq!(r, 11);

    // A wide dividend renders in a reasonable number of divisions.
    let mut s = String::from("1");
    s.push_str(&"0".repeat(1000));
    let n = BigInt::from_decimal_str(&s).unwrap();
    assert_eq!(n.to_decimal_string().unwrap(), s);
}
