use biglimb::BigInt;

// An interior sum limb of zero never dirties the guard, so the destination
// has to be extended before writing past it.
#[test]
fn test() {
    let x = BigInt::from_decimal_str("79228162514264337593543950336").unwrap();
    let y = BigInt::from_decimal_str("5").unwrap();
    let sum = BigInt::add(&x, &y).unwrap();
    assert_eq!(sum.limbs(), &[5, 0, 0, 1, 0]);
    assert_eq!(
        sum.to_decimal_string().unwrap(),
        "79228162514264337593543950341"
    );
}
