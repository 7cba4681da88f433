//! Conversion between big integers and decimal strings.

use crate::bigint::{BigInt, Limb};
use crate::error::{Error, Result};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::str::FromStr;

// Convert a character to its decimal digit.
#[inline]
fn to_digit(c: char) -> Option<Limb> {
    c.to_digit(10)
}

impl BigInt {
    /// Parses a string of decimal digits.
    ///
    /// Only the characters `'0'..='9'` are accepted; there is no sign, no
    /// whitespace and no digit separator. The empty string parses as zero.
    ///
    /// ```
    /// use biglimb::BigInt;
    ///
    /// let n = BigInt::from_decimal_str("18446744073709551616").unwrap();
    /// assert_eq!(n.limbs(), &[0, 0, 1, 0]);
    ///
    /// let err = BigInt::from_decimal_str("12a4").unwrap_err();
    /// assert_eq!(err.to_string(), "invalid digit character 'a' at index 2");
    /// ```
    pub fn from_decimal_str(s: &str) -> Result<BigInt> {
        let mut bigint = BigInt::try_new()?;
        bigint.assign_decimal(s)?;
        Ok(bigint)
    }

    /// Replaces the value with the one spelled by a string of decimal digits.
    ///
    /// The input is validated before anything is written, so on error the
    /// value is left as it was.
    pub fn assign_decimal(&mut self, s: &str) -> Result<()> {
        if let Some((index, character)) = s.char_indices().find(|&(_, c)| to_digit(c).is_none())
        {
            return Err(Error::invalid_digit(character, index));
        }

        // Horner's method: multiply the accumulator by ten and add each digit.
        self.reset_with_guard()?;
        for c in s.chars() {
            let digit = to_digit(c).unwrap_or(0);
            self.mul_scalar(10)?;
            self.add_scalar(digit)?;
        }
        Ok(())
    }

    /// Renders the value as a decimal string.
    ///
    /// Zero renders as `"0"`; nonzero values have no leading zeros.
    pub fn to_decimal_string(&self) -> Result<String> {
        let digits = self.decimal_digits()?;
        Ok(digits.iter().rev().map(|&d| char::from(b'0' + d)).collect())
    }

    /// Renders the value as decimal digits into the front of `buf`, returning
    /// the number of bytes written.
    ///
    /// Fails with `BufferTooSmall` when the digits do not fit, in which case
    /// `buf` is not modified. No terminator is written.
    ///
    /// ```
    /// use biglimb::BigInt;
    ///
    /// let n = BigInt::from(1234567u32);
    /// let mut buf = [0u8; 16];
    /// let len = n.write_decimal(&mut buf).unwrap();
    /// assert_eq!(&buf[..len], b"1234567");
    ///
    /// let mut small = [0u8; 4];
    /// assert!(n.write_decimal(&mut small).unwrap_err().is_capacity());
    /// ```
    pub fn write_decimal(&self, buf: &mut [u8]) -> Result<usize> {
        let digits = self.decimal_digits()?;
        if digits.len() > buf.len() {
            return Err(Error::buffer_too_small(digits.len(), buf.len()));
        }
        for (slot, &d) in buf.iter_mut().zip(digits.iter().rev()) {
            *slot = b'0' + d;
        }
        Ok(digits.len())
    }

    /// Decimal digit values, least significant first.
    ///
    /// Repeatedly divides a working copy by ten. The loop runs at least once,
    /// so zero yields a single `0` digit.
    fn decimal_digits(&self) -> Result<Vec<u8>> {
        self.check_live()?;

        let mut digits = Vec::new();
        let mut working = self.clone();
        loop {
            let (quotient, remainder) = working.divide_scalar(10)?;
            digits.push(remainder as u8);
            working = quotient;
            if working.equals_scalar(0)? {
                return Ok(digits);
            }
        }
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::from_decimal_str(s)
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self.to_decimal_string().map_err(|_| fmt::Error)?;
        f.pad_integral(true, "", &s)
    }
}
