use biglimb::BigInt;

// Division scans only the limbs below the guard, so a one-limb dividend
// produces a two-limb quotient rather than one shifted an extra word.
#[test]
fn test() {
    let n = BigInt::from_decimal_str("100").unwrap();
    let (q, r) = n.divide_scalar(10).unwrap();
    assert_eq!(q.limbs(), &[10, 0]);
    assert_eq!(r, 0);
}
