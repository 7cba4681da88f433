//! Big integer by big integer addition.

use crate::bigint::{BigInt, Limb};
use crate::error::Result;
use crate::scalar;

impl BigInt {
    /// Adds two values into a fresh one.
    pub fn add(a: &BigInt, b: &BigInt) -> Result<BigInt> {
        let mut sum = BigInt::try_new()?;
        sum.add_into(a, b)?;
        Ok(sum)
    }

    /// Replaces `self` with `a + b`.
    ///
    /// `self` is reset before the operands are read, which is sound because
    /// `self` is borrowed mutably and so can never be one of the operands.
    /// The sum runs over `max(a.size(), b.size())` limbs, reading missing
    /// limbs of the shorter operand as zero. Both guard limbs take part, so
    /// the final carry lands in the last position.
    pub fn add_into(&mut self, a: &BigInt, b: &BigInt) -> Result<()> {
        a.check_live()?;
        b.check_live()?;
        self.reset()?;

        let n = a.size.max(b.size);
        let mut carry: Limb = 0;
        for i in 0..n {
            let x = a.limbs().get(i).copied().unwrap_or(0);
            let y = b.limbs().get(i).copied().unwrap_or(0);
            let (lo, hi) = scalar::add(x, y, carry);
            carry = hi;

            // Interior zero limbs never dirty the guard, so make room for
            // position `i` explicitly before writing it.
            while self.size <= i {
                self.grow_by_one_limb()?;
            }
            self.limbs[i] = lo;
            if i == self.size - 1 {
                self.restore_guard()?;
            }
        }
        debug_assert_eq!(carry, 0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_limbs(x: &[Limb]) -> BigInt {
        let mut bigint = BigInt::new();
        bigint.limbs[..x.len()].copy_from_slice(x);
        bigint.size = x.len() + 1;
        bigint
    }

    #[test]
    fn add_test() {
        // Simple case.
        let sum = BigInt::add(&from_limbs(&[0xFF, 1]), &from_limbs(&[1])).unwrap();
        assert_eq!(sum.limbs(), &[0x100, 1, 0]);

        // Carry into a new limb.
        let sum = BigInt::add(&from_limbs(&[0xFFFFFFFF]), &from_limbs(&[1])).unwrap();
        assert_eq!(sum.limbs(), &[0, 1, 0]);

        // Carry across several limbs of the longer operand.
        let x = from_limbs(&[0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF]);
        let sum = BigInt::add(&x, &from_limbs(&[1])).unwrap();
        assert_eq!(sum.limbs(), &[0, 0, 0, 1, 0]);

        // Operands in either order.
        let sum = BigInt::add(&from_limbs(&[1]), &x).unwrap();
        assert_eq!(sum.limbs(), &[0, 0, 0, 1, 0]);
    }

    #[test]
    fn add_zero_limb_in_middle() {
        let x = from_limbs(&[1, 0, 0, 7]);
        let y = from_limbs(&[2]);
        let sum = BigInt::add(&x, &y).unwrap();
        assert_eq!(sum.limbs(), &[3, 0, 0, 7, 0]);
    }

    #[test]
    fn add_into_reuses_destination() {
        let mut dst = from_limbs(&[9, 9, 9, 9, 9]);
        dst.add_into(&from_limbs(&[1]), &from_limbs(&[2])).unwrap();
        assert_eq!(dst.limbs(), &[3, 0]);
    }

    #[test]
    fn add_past_initial_capacity() {
        let x = from_limbs(&[0xFFFFFFFF; 15]);
        let sum = BigInt::add(&x, &x).unwrap();
        assert_eq!(sum.size(), 17);
        assert_eq!(sum.limbs()[0], 0xFFFFFFFE);
        assert!(sum.limbs()[1..15].iter().all(|&limb| limb == 0xFFFFFFFF));
        assert_eq!(sum.limbs()[15], 1);
        assert_eq!(sum.limbs()[16], 0);
    }

    #[test]
    fn add_released_operand() {
        let mut x = from_limbs(&[1]);
        x.release();
        let err = BigInt::add(&x, &from_limbs(&[1])).unwrap_err();
        assert!(err.is_lifecycle());
    }
}
