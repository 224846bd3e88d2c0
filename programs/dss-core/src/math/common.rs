//! Common module for fixed-point math

#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]

use crate::error::NumericError;
use uint::construct_uint;

// U1024 with 1024 bits consisting of 16 x 64-bit words
construct_uint! {
    pub struct U1024(16);
}

/// Fractional digits of a Wad
pub const WAD_DECIMALS: u32 = 18;
/// Fractional digits of a Ray
pub const RAY_DECIMALS: u32 = 27;
/// Fractional digits of a Rad
pub const RAD_DECIMALS: u32 = 45;

/// Try to subtract, return an error on underflow
pub trait TrySub: Sized {
    /// Subtract
    fn try_sub(self, rhs: Self) -> Result<Self, NumericError>;
}

/// Try to add, return an error on overflow
pub trait TryAdd: Sized {
    /// Add
    fn try_add(self, rhs: Self) -> Result<Self, NumericError>;
}

/// Try to divide, return an error on overflow or divide by zero
pub trait TryDiv<RHS>: Sized {
    /// Divide
    fn try_div(self, rhs: RHS) -> Result<Self, NumericError>;
}

/// Try to multiply, return an error on overflow
pub trait TryMul<RHS>: Sized {
    /// Multiply
    fn try_mul(self, rhs: RHS) -> Result<Self, NumericError>;
}

/// `10^exp`, or `MathOverflow` when it does not fit 1024 bits
pub fn pow10(exp: u32) -> Result<U1024, NumericError> {
    let mut result = U1024::one();
    let mut base = U1024::from(10u64);
    let mut exponent = exp;

    while exponent > 0 {
        if exponent % 2 == 1 {
            result = result
                .checked_mul(base)
                .ok_or(NumericError::MathOverflow)?;
        }
        exponent /= 2;
        if exponent > 0 {
            base = base
                .checked_mul(base)
                .ok_or(NumericError::MathOverflow)?;
        }
    }
    Ok(result)
}
