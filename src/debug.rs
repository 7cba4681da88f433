//! Limb dump and `Debug` output for inspecting a value.

use crate::bigint::BigInt;
use crate::error::Result;
use alloc::string::String;
use core::fmt::{self, Debug};

/// Width of a limb printed in decimal, enough for `u32::MAX`.
const LIMB_DUMP_WIDTH: usize = 10;

impl BigInt {
    /// Lists the used limbs, guard first, as zero-padded decimal numbers
    /// separated by spaces.
    ///
    /// ```
    /// use biglimb::BigInt;
    ///
    /// let n = BigInt::from_decimal_str("4294967301").unwrap();
    /// assert_eq!(n.limb_dump().unwrap(), "0000000000 0000000001 0000000005");
    /// ```
    pub fn limb_dump(&self) -> Result<String> {
        self.check_live()?;

        let mut out = String::with_capacity(self.size * (LIMB_DUMP_WIDTH + 1));
        let mut buffer = itoa::Buffer::new();
        for (i, &limb) in self.limbs().iter().rev().enumerate() {
            if i != 0 {
                out.push(' ');
            }
            let digits = buffer.format(limb);
            for _ in digits.len()..LIMB_DUMP_WIDTH {
                out.push('0');
            }
            out.push_str(digits);
        }
        Ok(out)
    }
}

impl Debug for BigInt {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        if self.is_released() {
            return formatter.write_str("BigInt(<released>)");
        }
        write!(formatter, "BigInt({})", self)
    }
}
