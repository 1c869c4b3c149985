//! Scaled-ratio arithmetic shared by the vesting, yield and reflection
//! calculations. Every ratio in the program goes through
//! [`scaled_mul_div`], so all of them round the same way (floor).

const LIMB_MASK: u128 = u64::MAX as u128;

/// Computes `floor(a * b / divisor)` with a 256-bit intermediate product.
///
/// Returns `None` when `divisor` is zero or when the quotient does not fit
/// in a `u128`. Callers are expected to reject a zero divisor before getting
/// here.
pub fn scaled_mul_div(a: u128, b: u128, divisor: u128) -> Option<u128> {
    if divisor == 0 {
        return None;
    }

    let (high, low) = widening_mul(a, b);
    if high == 0 {
        return Some(low / divisor);
    }

    // Quotient would need more than 128 bits.
    if high >= divisor {
        return None;
    }

    Some(div_wide(high, low, divisor))
}

/// Full 256-bit product of two `u128` values as `(high, low)` limbs.
fn widening_mul(a: u128, b: u128) -> (u128, u128) {
    let (a_hi, a_lo) = (a >> 64, a & LIMB_MASK);
    let (b_hi, b_lo) = (b >> 64, b & LIMB_MASK);

    let lo_lo = a_lo * b_lo;
    let hi_lo = a_hi * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_hi = a_hi * b_hi;

    // Sum of three values below 2^64, cannot overflow.
    let cross = (lo_lo >> 64) + (hi_lo & LIMB_MASK) + (lo_hi & LIMB_MASK);

    let low = (cross << 64) | (lo_lo & LIMB_MASK);
    let high = hi_hi + (hi_lo >> 64) + (lo_hi >> 64) + (cross >> 64);
    (high, low)
}

/// Shift-subtract long division of `high:low` by `divisor`.
/// Requires `high < divisor` so the quotient fits in 128 bits.
fn div_wide(high: u128, low: u128, divisor: u128) -> u128 {
    let mut remainder = high;
    let mut quotient = 0u128;

    for bit in (0..128).rev() {
        let overflowed = remainder >> 127 == 1;
        remainder = (remainder << 1) | ((low >> bit) & 1);
        quotient <<= 1;

        if overflowed || remainder >= divisor {
            remainder = remainder.wrapping_sub(divisor);
            quotient |= 1;
        }
    }

    quotient
}
