//! Sub-word bit shifts across limb boundaries.
//!
//! Shifts by a whole number of limbs are not handled here; callers compose
//! them from a limb move plus a shift below `LIMB_BITS`.

use crate::bigint::{BigInt, LIMB_BITS};
use crate::error::{ErrorCode, Result};

#[inline]
fn check_amount(n: u32) -> Result<()> {
    if n < LIMB_BITS {
        Ok(())
    } else {
        Err(ErrorCode::ShiftAmountOutOfRange(n).into())
    }
}

impl BigInt {
    /// Shifts the value left by `n` bits, where `n < 32`.
    ///
    /// Bits pushed into the guard limb grow the value by one limb.
    pub fn left_shift(&mut self, n: u32) -> Result<()> {
        check_amount(n)?;
        self.check_live()?;
        if n == 0 {
            return Ok(());
        }

        // Each limb from the guard down to index 1 is shifted left and
        // receives the bits the limb below it pushes out. For example, for u8
        // limbs shifted left 2:
        //      b00000000 b10100100 b01000010
        //      b00000010 b10010001 b00001000
        let rshift = LIMB_BITS - n;
        for i in (1..self.size).rev() {
            self.limbs[i] = (self.limbs[i] << n) | (self.limbs[i - 1] >> rshift);
        }
        self.limbs[0] <<= n;

        self.restore_guard()
    }

    /// Shifts the value right by `n` bits, where `n < 32`.
    ///
    /// Each limb below the guard is shifted right and receives the low bits
    /// of the limb above it. If the top limb below the guard becomes zero the
    /// value shrinks by one limb, but never below two limbs.
    pub fn right_shift(&mut self, n: u32) -> Result<()> {
        check_amount(n)?;
        self.check_live()?;
        if n == 0 {
            return Ok(());
        }

        let lshift = LIMB_BITS - n;
        for i in 0..self.size - 1 {
            self.limbs[i] = (self.limbs[i] >> n) | (self.limbs[i + 1] << lshift);
        }

        if self.size > 2 && self.limbs[self.size - 2] == 0 {
            self.size -= 1;
        }
        Ok(())
    }
}
