use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::{Mantissa, Ray};

// Exponentiation by squaring for rays, rounding each product half up.
// The exponent is a number of seconds, so it stays well inside u64.
pub fn rpow(x: Ray, n: u64) -> Result<Ray> {
    if x.is_negative() || !x.is_canonical() {
        msg!("Rate base must be a non-negative canonical ray");
        return Err(ErrorCode::InvalidAmount.into());
    }
    let one = *Ray::one().value();
    let half = one
        .checked_div(&Mantissa::from(2u8))
        .ok_or(ErrorCode::MathOverflow)?;

    let mul_round = |a: &Mantissa, b: &Mantissa| -> Result<Mantissa> {
        Ok(a.checked_mul(b)
            .and_then(|product| product.checked_add(&half))
            .and_then(|rounded| rounded.checked_div(&one))
            .ok_or(ErrorCode::MathOverflow)?)
    };

    let mut base = *x.value();
    let mut result = if n % 2 == 1 { base } else { one };
    let mut exponent = n / 2;

    while exponent > 0 {
        // square the base for the next bit
        base = mul_round(&base, &base)?;
        if exponent % 2 == 1 {
            result = mul_round(&result, &base)?;
        }
        exponent /= 2;
    }

    Ok(Ray::new(result))
}
