//! Signed integer mantissa backing every fixed-point value.
//!
//! Stored as sign and magnitude over a 1024-bit unsigned integer so that
//! amounts well past `2^512` stay exact. Division truncates toward zero.

use crate::{error::NumericError, math::common::*};
use anchor_lang::{AnchorDeserialize, AnchorSerialize};
use borsh::io::{self, Read, Write};
use std::{cmp::Ordering, convert::TryFrom, fmt, str::FromStr};

/// Signed arbitrary-size integer
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mantissa {
    negative: bool,
    magnitude: U1024,
}

impl Mantissa {
    /// Zero
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from sign and magnitude; zero is never negative
    pub fn from_parts(negative: bool, magnitude: U1024) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    pub fn magnitude(&self) -> U1024 {
        self.magnitude
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self::from_parts(false, self.magnitude)
    }

    pub fn neg(&self) -> Self {
        Self::from_parts(!self.negative, self.magnitude)
    }

    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        if self.negative == rhs.negative {
            let magnitude = self.magnitude.checked_add(rhs.magnitude)?;
            return Some(Self::from_parts(self.negative, magnitude));
        }
        // opposite signs: the larger magnitude decides the sign
        match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Less => Some(Self::from_parts(
                rhs.negative,
                rhs.magnitude - self.magnitude,
            )),
            _ => Some(Self::from_parts(
                self.negative,
                self.magnitude - rhs.magnitude,
            )),
        }
    }

    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.checked_add(&rhs.neg())
    }

    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let magnitude = self.magnitude.checked_mul(rhs.magnitude)?;
        Some(Self::from_parts(self.negative != rhs.negative, magnitude))
    }

    /// Truncating division; `None` on a zero divisor
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        let magnitude = self.magnitude.checked_div(rhs.magnitude)?;
        Some(Self::from_parts(self.negative != rhs.negative, magnitude))
    }

    /// Multiply by `10^exp`
    pub fn try_scale_up(&self, exp: u32) -> Result<Self, NumericError> {
        let magnitude = self
            .magnitude
            .checked_mul(pow10(exp)?)
            .ok_or(NumericError::MathOverflow)?;
        Ok(Self::from_parts(self.negative, magnitude))
    }

    /// Divide by `10^exp`, truncating toward zero
    pub fn scale_down(&self, exp: u32) -> Self {
        match pow10(exp) {
            Ok(unit) => Self::from_parts(self.negative, self.magnitude / unit),
            // 10^exp exceeds every representable magnitude
            Err(_) => Self::zero(),
        }
    }

    /// Round to a multiple of `10^exp`, ties to the even multiple
    pub fn round_half_even(&self, exp: u32) -> Result<Self, NumericError> {
        if exp == 0 {
            return Ok(*self);
        }
        let unit = match pow10(exp) {
            Ok(unit) => unit,
            // half of 10^exp is already above the largest magnitude
            Err(_) => return Ok(Self::zero()),
        };
        let half = unit / U1024::from(2u64);
        let mut quotient = self.magnitude / unit;
        let remainder = self.magnitude % unit;

        let round_up = match remainder.cmp(&half) {
            Ordering::Greater => true,
            Ordering::Equal => quotient.low_u64() & 1 == 1,
            Ordering::Less => false,
        };
        if round_up {
            quotient = quotient
                .checked_add(U1024::one())
                .ok_or(NumericError::MathOverflow)?;
        }
        let magnitude = quotient
            .checked_mul(unit)
            .ok_or(NumericError::MathOverflow)?;
        Ok(Self::from_parts(self.negative, magnitude))
    }

    /// Value as `i128`, if it fits
    pub fn to_i128(&self) -> Option<i128> {
        let magnitude = u128::try_from(self.magnitude).ok()?;
        if self.negative {
            if magnitude == i128::MIN.unsigned_abs() {
                Some(i128::MIN)
            } else {
                i128::try_from(magnitude).ok().map(|m| -m)
            }
        } else {
            i128::try_from(magnitude).ok()
        }
    }

    /// Value as `u128`, if it is non-negative and fits
    pub fn to_u128(&self) -> Option<u128> {
        if self.negative {
            return None;
        }
        u128::try_from(self.magnitude).ok()
    }
}

impl Ord for Mantissa {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for Mantissa {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Mantissa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

impl fmt::Debug for Mantissa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Mantissa {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumericError::InvalidNumber);
        }
        let magnitude = U1024::from_dec_str(digits).map_err(|_| NumericError::MathOverflow)?;
        Ok(Self::from_parts(negative, magnitude))
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Mantissa {
            fn from(val: $t) -> Self {
                Self::from_parts(false, U1024::from(val))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Mantissa {
            fn from(val: $t) -> Self {
                Self::from_parts(val < 0, U1024::from(val.unsigned_abs()))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128);
impl_from_signed!(i8, i16, i32, i64, i128);

impl From<U1024> for Mantissa {
    fn from(val: U1024) -> Self {
        Self::from_parts(false, val)
    }
}

/// Sign byte followed by the sixteen magnitude words in little-endian order
impl AnchorSerialize for Mantissa {
    fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&[self.negative as u8])?;
        for word in self.magnitude.0.iter() {
            writer.write_all(&word.to_le_bytes())?;
        }
        Ok(())
    }
}

impl AnchorDeserialize for Mantissa {
    fn deserialize_reader<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut sign = [0u8; 1];
        reader.read_exact(&mut sign)?;
        if sign[0] > 1 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "invalid mantissa sign byte",
            ));
        }
        let mut words = [0u64; 16];
        for word in words.iter_mut() {
            let mut word_bytes = [0u8; 8];
            reader.read_exact(&mut word_bytes)?;
            *word = u64::from_le_bytes(word_bytes);
        }
        Ok(Self::from_parts(sign[0] == 1, U1024(words)))
    }
}
