use biglimb::{BigInt, ErrorCode};

#[track_caller]
fn test_round_trip(input: &str, size: usize) {
    let n = BigInt::from_decimal_str(input).unwrap();
    assert_eq!(n.to_decimal_string().unwrap(), input);
    assert_eq!(n.size(), size);
    assert_eq!(n.limbs().last(), Some(&0), "guard limb overwritten");
}

#[test]
fn round_trip() {
    test_round_trip("12345", 2);
    test_round_trip("123456789012345678901234567890", 5);
    test_round_trip("1", 2);
    test_round_trip("0", 2);
    test_round_trip(
        "1234567890123456789012345678901234567890123456789012345678901234567890123456789012345678901234\
         567890123456789012345678901234567890",
        15,
    );
}

#[test]
fn round_trip_powers_of_two() {
    let mut n = BigInt::from_decimal_str("1").unwrap();
    let mut expected = 1u128;
    for _ in 0..127 {
        n.left_shift(1).unwrap();
        expected <<= 1;
        let s = expected.to_string();
        assert_eq!(n.to_decimal_string().unwrap(), s);
        assert_eq!(BigInt::from_decimal_str(&s).unwrap(), n);
    }
}

#[test]
fn round_trip_all_nines() {
    let mut s = String::new();
    for _ in 0..80 {
        s.push('9');
        let n = BigInt::from_decimal_str(&s).unwrap();
        assert_eq!(n.to_decimal_string().unwrap(), s);
    }
}

#[test]
fn leading_zeros_are_dropped() {
    let n = BigInt::from_decimal_str("0000004294967296").unwrap();
    assert_eq!(n.to_decimal_string().unwrap(), "4294967296");
    assert_eq!(n.size(), 3);
}

#[test]
fn negative_input_is_rejected() {
    for input in ["-12345", "-123456789012345678901234567890"] {
        let err = BigInt::from_decimal_str(input).unwrap_err();
        assert_eq!(
            *err.code(),
            ErrorCode::InvalidDigitCharacter {
                character: '-',
                index: 0,
            }
        );
    }
}

#[test]
fn caller_buffer() {
    let n = BigInt::from_decimal_str("123456789012345678901234567890").unwrap();

    let mut buf = [0u8; 255];
    let len = n.write_decimal(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"123456789012345678901234567890");

    let mut buf = [0u8; 29];
    let err = n.write_decimal(&mut buf).unwrap_err();
    assert_eq!(
        *err.code(),
        ErrorCode::BufferTooSmall {
            needed: 30,
            available: 29,
        }
    );
    assert_eq!(buf, [0u8; 29]);

    let mut empty = [0u8; 0];
    assert!(BigInt::new().write_decimal(&mut empty).is_err());
}

#[test]
fn from_str_and_display() {
    let n: BigInt = "340282366920938463463374607431768211456".parse().unwrap();
    assert_eq!(n.to_string(), "340282366920938463463374607431768211456");
    assert_eq!(n.limbs(), &[0, 0, 0, 0, 1, 0]);
    assert!("0x10".parse::<BigInt>().is_err());
}
