//! Big integer by single limb arithmetic.

use crate::bigint::{BigInt, Limb, Wide, LIMB_BITS};
use crate::error::{ErrorCode, Result};

// SCALAR
// ------

/// Add two limbs and a carry, returning the (low, high) halves.
#[inline]
pub(crate) fn add(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
    // Cannot overflow: 3 * Limb::MAX < Wide::MAX.
    let z = x as Wide + y as Wide + carry as Wide;
    (z as Limb, (z >> LIMB_BITS) as Limb)
}

/// Multiply two limbs and add a carry, returning the (low, high) halves.
#[inline]
pub(crate) fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
    // Cannot overflow, as long as wide is 2x as wide. This is because
    // the following is always true:
    // `Wide::MAX - (Limb::MAX * Limb::MAX) >= Limb::MAX`
    let z = x as Wide * y as Wide + carry as Wide;
    (z as Limb, (z >> LIMB_BITS) as Limb)
}

// SMALL
// -----

impl BigInt {
    /// Adds a single limb to the value.
    ///
    /// The carry ripples upward one limb at a time until a limb absorbs it.
    /// The guard limb can take at most one carry, after which the value grows
    /// by a limb.
    pub fn add_scalar(&mut self, value: Limb) -> Result<()> {
        self.check_live()?;

        let mut carry = value;
        let mut i = 0;
        loop {
            let (lo, hi) = add(self.limbs[i], carry, 0);
            self.limbs[i] = lo;
            carry = hi;
            if i == self.size - 1 {
                self.restore_guard()?;
            }
            if carry == 0 {
                return Ok(());
            }
            i += 1;
        }
    }

    /// Multiplies the value by a single limb.
    ///
    /// Every limb below the guard is multiplied from least to most
    /// significant, feeding the high half of each product into the next. The
    /// final carry lands in the guard slot as the new top limb.
    pub fn mul_scalar(&mut self, multiplier: Limb) -> Result<()> {
        self.check_live()?;

        let top = self.size - 1;
        let mut carry: Limb = 0;
        for limb in &mut self.limbs[..top] {
            let (lo, hi) = mul(*limb, multiplier, carry);
            *limb = lo;
            carry = hi;
        }

        self.limbs[top] = carry;
        self.restore_guard()
    }

    /// Divides the value by a single limb, returning the quotient and the
    /// remainder.
    ///
    /// This is bit-serial restoring division: the dividend is consumed one
    /// bit at a time from the most significant used limb below the guard,
    /// and each quotient bit is written at the position of the dividend bit
    /// that produced it. `self` is left untouched.
    pub fn divide_scalar(&self, divisor: Limb) -> Result<(BigInt, Limb)> {
        self.check_live()?;
        if divisor == 0 {
            return Err(ErrorCode::DivisionByZero.into());
        }

        // The quotient has at most as many limbs as the dividend.
        let top = self.size - 1;
        let mut quotient = BigInt::try_new()?;
        while quotient.size < self.size.max(2) {
            quotient.grow_by_one_limb()?;
        }

        // The remainder is always below the divisor, so doubling it and adding
        // a bit fits in a wide integer even when the divisor is above 2^31.
        let divisor = divisor as Wide;
        let mut remainder: Wide = 0;
        for i in (0..top).rev() {
            let limb = self.limbs[i];
            for bit in (0..LIMB_BITS).rev() {
                remainder = (remainder << 1) | ((limb >> bit) & 1) as Wide;
                if remainder >= divisor {
                    remainder -= divisor;
                    quotient.limbs[i] |= 1 << bit;
                }
            }
        }

        // Drop zero high limbs, keeping one data limb below the guard.
        while quotient.size > 2 && quotient.limbs[quotient.size - 2] == 0 {
            quotient.size -= 1;
        }
        debug_assert_eq!(quotient.guard(), 0);

        Ok((quotient, remainder as Limb))
    }
}
