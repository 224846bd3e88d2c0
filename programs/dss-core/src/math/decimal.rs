//! Exact decimal quantities with a fixed number of fractional digits.
//!
//! A [`Fixed`] value is an integer mantissa scaled by `10^decimals`. The
//! precision marker `P` (Wad, Ray or Rad) is part of the type, so adding,
//! comparing or dividing values of different precisions does not compile.
//! Multiplication across precisions exists only for the two defined pairs
//! (`Wad × Ray → Wad`, `Ray × Wad → Ray`).
//!
//! Values built with [`Fixed::with_decimals`] carry a non-canonical digit
//! count, modelling tokens with arbitrary decimals. Mixing digit counts is a
//! runtime fault ([`NumericError::ScaleMismatch`]).
//!
//! Mixing with raw integers is limited to multiplication and construction:
//!
//! ```compile_fail
//! use dss_core::math::Wad;
//! let _ = Wad::new(1000) == 1000;
//! ```
//!
//! ```compile_fail
//! use dss_core::math::{Ray, TryAdd, Wad};
//! let _ = Wad::new(1).try_add(Ray::new(1));
//! ```
//!
//! ```compile_fail
//! use dss_core::math::{TryDiv, Wad};
//! let _ = Wad::new(4).try_div(2u64);
//! ```

use crate::{
    error::NumericError,
    math::{common::*, Mantissa, Precision, RayScale},
};
use anchor_lang::{AnchorDeserialize, AnchorSerialize};
use borsh::io::{self, Read, Write};
use num_traits::ToPrimitive;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

/// Fixed-point value of precision `P`
pub struct Fixed<P: Precision> {
    value: Mantissa,
    decimals: u32,
    precision: PhantomData<P>,
}

impl<P: Precision> Fixed<P> {
    /// Value from a raw mantissa at the canonical scale
    pub fn new<M: Into<Mantissa>>(value: M) -> Self {
        Self::with_decimals(value, P::DECIMALS)
    }

    /// Value from a raw mantissa with a non-canonical number of fractional digits
    pub fn with_decimals<M: Into<Mantissa>>(value: M, decimals: u32) -> Self {
        Self {
            value: value.into(),
            decimals,
            precision: PhantomData,
        }
    }

    /// Zero
    pub fn zero() -> Self {
        Self::new(Mantissa::zero())
    }

    /// One
    pub fn one() -> Self {
        Self::new(U1024::exp10(P::DECIMALS as usize))
    }

    /// Exact value of an integer or decimal literal; binary floats are refused
    pub fn from_number<N: DecimalInput>(number: N) -> Result<Self, NumericError> {
        Self::from_number_with_decimals(number, P::DECIMALS)
    }

    /// Like [`Fixed::from_number`], truncating to `decimals` fractional digits
    pub fn from_number_with_decimals<N: DecimalInput>(
        number: N,
        decimals: u32,
    ) -> Result<Self, NumericError> {
        Ok(Self::with_decimals(number.to_scaled(decimals)?, decimals))
    }

    /// Raw mantissa
    pub fn value(&self) -> &Mantissa {
        &self.value
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// True when the value uses the precision's own digit count
    pub fn is_canonical(&self) -> bool {
        self.decimals == P::DECIMALS
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    pub fn abs(&self) -> Self {
        Self::with_decimals(self.value.abs(), self.decimals)
    }

    /// Compare, failing when the digit counts differ
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, NumericError> {
        self.check_scale(other)?;
        Ok(self.value.cmp(&other.value))
    }

    /// Smallest of `values`
    pub fn min(values: &[Self]) -> Result<Self, NumericError> {
        Self::pick(values, Ordering::Less)
    }

    /// Largest of `values`
    pub fn max(values: &[Self]) -> Result<Self, NumericError> {
        Self::pick(values, Ordering::Greater)
    }

    fn pick(values: &[Self], wanted: Ordering) -> Result<Self, NumericError> {
        let (first, rest) = values.split_first().ok_or(NumericError::EmptyInput)?;
        let mut best = *first;
        for candidate in rest {
            if candidate.try_cmp(&best)? == wanted {
                best = *candidate;
            }
        }
        Ok(best)
    }

    /// Round to `ndigits` fractional digits, ties to even.
    /// A negative `ndigits` rounds to tens, hundreds, ...
    pub fn round(&self, ndigits: i32) -> Result<Self, NumericError> {
        let drop = self.decimals as i64 - ndigits as i64;
        if drop <= 0 {
            return Ok(*self);
        }
        let exp = u32::try_from(drop).map_err(|_| NumericError::MathOverflow)?;
        Ok(Self::with_decimals(
            self.value.round_half_even(exp)?,
            self.decimals,
        ))
    }

    /// Exact comparison of `self` against `base × factor`, without truncating
    /// the product. Used for the minimum bid increment rules.
    pub fn cmp_scaled(&self, base: &Self, factor: &Fixed<RayScale>) -> Result<Ordering, NumericError> {
        self.check_scale(base)?;
        let lhs = self.value.try_scale_up(factor.decimals)?;
        let rhs = base
            .value
            .checked_mul(&factor.value)
            .ok_or(NumericError::MathOverflow)?;
        Ok(lhs.cmp(&rhs))
    }

    /// Rescale into another precision, truncating toward zero when narrowing
    pub fn convert<Q: Precision>(&self) -> Result<Fixed<Q>, NumericError> {
        let value = if Q::DECIMALS >= self.decimals {
            self.value.try_scale_up(Q::DECIMALS - self.decimals)?
        } else {
            self.value.scale_down(self.decimals - Q::DECIMALS)
        };
        Ok(Fixed::new(value))
    }

    fn check_scale(&self, other: &Self) -> Result<(), NumericError> {
        if self.decimals != other.decimals {
            return Err(NumericError::ScaleMismatch);
        }
        Ok(())
    }

    fn scaled(&self, value: Mantissa) -> Self {
        Self::with_decimals(value, self.decimals)
    }
}

impl<P: Precision> Clone for Fixed<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Precision> Copy for Fixed<P> {}

impl<P: Precision> Default for Fixed<P> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Values with different digit counts are never equal. Use
/// [`Fixed::try_cmp`] to have a digit-count mismatch reported as
/// [`NumericError::ScaleMismatch`].
impl<P: Precision> PartialEq for Fixed<P> {
    fn eq(&self, other: &Self) -> bool {
        self.decimals == other.decimals && self.value == other.value
    }
}

impl<P: Precision> Eq for Fixed<P> {}

impl<P: Precision> Hash for Fixed<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.decimals.hash(state);
    }
}

/// Values with different digit counts are unordered, so `<`, `<=`, `>` and
/// `>=` are all false between them. Call [`Fixed::try_cmp`] wherever the
/// digit counts may differ; it fails with [`NumericError::ScaleMismatch`].
impl<P: Precision> PartialOrd for Fixed<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl<P: Precision> fmt::Display for Fixed<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.decimals as usize;
        let mut digits = self.value.magnitude().to_string();
        if scale > 0 {
            if digits.len() <= scale {
                digits.insert_str(0, &"0".repeat(scale - digits.len()));
                digits.insert_str(0, "0.");
            } else {
                digits.insert(digits.len() - scale, '.');
            }
        }
        if self.value.is_negative() {
            digits.insert(0, '-');
        }
        f.write_str(&digits)
    }
}

impl<P: Precision> fmt::Debug for Fixed<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_canonical() {
            write!(f, "{}({})", P::NAME, self.value)
        } else {
            write!(f, "{}({}, {})", P::NAME, self.value, self.decimals)
        }
    }
}

impl<P: Precision> FromStr for Fixed<P> {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_number(s)
    }
}

/// Binary floats never convert
impl<P: Precision> TryFrom<f64> for Fixed<P> {
    type Error = NumericError;

    fn try_from(val: f64) -> Result<Self, Self::Error> {
        Self::from_number(val)
    }
}

impl<P: Precision> TryAdd for Fixed<P> {
    fn try_add(self, rhs: Self) -> Result<Self, NumericError> {
        self.check_scale(&rhs)?;
        Ok(self.scaled(
            self.value
                .checked_add(&rhs.value)
                .ok_or(NumericError::MathOverflow)?,
        ))
    }
}

impl<P: Precision> TrySub for Fixed<P> {
    fn try_sub(self, rhs: Self) -> Result<Self, NumericError> {
        self.check_scale(&rhs)?;
        Ok(self.scaled(
            self.value
                .checked_sub(&rhs.value)
                .ok_or(NumericError::MathOverflow)?,
        ))
    }
}

impl<P: Precision> TryMul<Fixed<P>> for Fixed<P> {
    fn try_mul(self, rhs: Self) -> Result<Self, NumericError> {
        self.check_scale(&rhs)?;
        let product = self
            .value
            .checked_mul(&rhs.value)
            .ok_or(NumericError::MathOverflow)?;
        Ok(self.scaled(product.scale_down(self.decimals)))
    }
}

impl<P: Precision> TryDiv<Fixed<P>> for Fixed<P> {
    fn try_div(self, rhs: Self) -> Result<Self, NumericError> {
        self.check_scale(&rhs)?;
        if rhs.value.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let quotient = self
            .value
            .try_scale_up(self.decimals)?
            .checked_div(&rhs.value)
            .ok_or(NumericError::DivisionByZero)?;
        Ok(self.scaled(quotient))
    }
}

macro_rules! impl_try_mul_int {
    ($($t:ty),*) => {$(
        impl<P: Precision> TryMul<$t> for Fixed<P> {
            fn try_mul(self, rhs: $t) -> Result<Self, NumericError> {
                Ok(self.scaled(
                    self.value
                        .checked_mul(&Mantissa::from(rhs))
                        .ok_or(NumericError::MathOverflow)?,
                ))
            }
        }
    )*};
}

impl_try_mul_int!(u64, i64, u128, i128);

/// Product of two precisions, kept at the left operand's digits by
/// dividing out the right operand's unit
pub(crate) fn cross_mul<P: Precision, Q: Precision>(
    lhs: Fixed<P>,
    rhs: Fixed<Q>,
) -> Result<Fixed<P>, NumericError> {
    let product = lhs
        .value
        .checked_mul(&rhs.value)
        .ok_or(NumericError::MathOverflow)?;
    Ok(lhs.scaled(product.scale_down(rhs.decimals)))
}

/// Truncating integer and float casts
impl<P: Precision> ToPrimitive for Fixed<P> {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        self.value.scale_down(self.decimals).to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.value.scale_down(self.decimals).to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        self.to_string().parse().ok()
    }
}

impl<P: Precision> AnchorSerialize for Fixed<P> {
    fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.value.serialize(writer)?;
        self.decimals.serialize(writer)
    }
}

impl<P: Precision> AnchorDeserialize for Fixed<P> {
    fn deserialize_reader<R: Read>(reader: &mut R) -> io::Result<Self> {
        let value = Mantissa::deserialize_reader(reader)?;
        let decimals = u32::deserialize_reader(reader)?;
        Ok(Self::with_decimals(value, decimals))
    }
}

/// Numbers a fixed-point value can be built from exactly
pub trait DecimalInput {
    /// Mantissa of `self` at `decimals` fractional digits
    fn to_scaled(&self, decimals: u32) -> Result<Mantissa, NumericError>;
}

macro_rules! impl_decimal_input_int {
    ($($t:ty),*) => {$(
        impl DecimalInput for $t {
            fn to_scaled(&self, decimals: u32) -> Result<Mantissa, NumericError> {
                Mantissa::from(*self).try_scale_up(decimals)
            }
        }
    )*};
}

impl_decimal_input_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl DecimalInput for f64 {
    fn to_scaled(&self, _decimals: u32) -> Result<Mantissa, NumericError> {
        Err(NumericError::FloatConstruction)
    }
}

impl DecimalInput for f32 {
    fn to_scaled(&self, _decimals: u32) -> Result<Mantissa, NumericError> {
        Err(NumericError::FloatConstruction)
    }
}

/// Decimal literal such as `"-12.5"`; digits past `decimals` are truncated
impl DecimalInput for &str {
    fn to_scaled(&self, decimals: u32) -> Result<Mantissa, NumericError> {
        let text: &str = self;
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(NumericError::InvalidNumber);
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(NumericError::InvalidNumber);
        }

        let scale = decimals as usize;
        let mut digits = String::with_capacity(int_part.len() + scale + 1);
        digits.push_str(if int_part.is_empty() { "0" } else { int_part });
        if frac_part.len() >= scale {
            digits.push_str(&frac_part[..scale]);
        } else {
            digits.push_str(frac_part);
            digits.push_str(&"0".repeat(scale - frac_part.len()));
        }
        let magnitude: Mantissa = digits.parse()?;
        Ok(if negative { magnitude.neg() } else { magnitude })
    }
}

impl DecimalInput for String {
    fn to_scaled(&self, decimals: u32) -> Result<Mantissa, NumericError> {
        self.as_str().to_scaled(decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Rad, Ray, Wad};
    use std::collections::HashSet;

    #[test]
    fn formats_with_sign_and_fixed_digits() {
        assert_eq!(Wad::new(1).to_string(), "0.000000000000000001");
        assert_eq!(Wad::new(500000000000000000u64).to_string(), "0.500000000000000000");
        assert_eq!(Wad::new(1500000000000000000u64).to_string(), "1.500000000000000000");
        assert_eq!(Wad::new(-1500000000000000000i64).to_string(), "-1.500000000000000000");
        assert_eq!(Wad::new(-500000000000000000i64).to_string(), "-0.500000000000000000");
        assert_eq!(Wad::new(-1).to_string(), "-0.000000000000000001");
        assert_eq!(Ray::new(1).to_string(), "0.000000000000000000000000001");
        assert_eq!(
            Ray::new(-1500000000000000000000000000i128).to_string(),
            "-1.500000000000000000000000000"
        );
        assert_eq!(Rad::one().to_string(), format!("1.{}", "0".repeat(45)));
    }

    #[test]
    fn debug_shows_mantissa() {
        assert_eq!(format!("{:?}", Wad::new(100)), "Wad(100)");
        assert_eq!(format!("{:?}", Ray::new(-1)), "Ray(-1)");
        assert_eq!(format!("{:?}", Wad::with_decimals(5, 2)), "Wad(5, 2)");
    }

    #[test]
    fn parses_display_form() {
        let wad: Wad = "-1.500000000000000000".parse().unwrap();
        assert_eq!(wad, Wad::new(-1500000000000000000i64));
        assert_eq!("1.05".parse::<Ray>().unwrap(), Ray::new(1050000000000000000000000000u128));
        assert_eq!(".5".parse::<Wad>().unwrap(), Wad::new(500000000000000000u64));
        assert_eq!("abc".parse::<Wad>(), Err(NumericError::InvalidNumber));
        assert_eq!(".".parse::<Wad>(), Err(NumericError::InvalidNumber));
        assert_eq!("1e5".parse::<Wad>(), Err(NumericError::InvalidNumber));
    }

    #[test]
    fn from_number_truncates_extra_digits() {
        assert_eq!(Wad::from_number_with_decimals("0.001", 3).unwrap(), Wad::with_decimals(1, 3));
        assert_eq!(Wad::from_number_with_decimals("0.00105", 5).unwrap(), Wad::with_decimals(105, 5));
        assert_eq!(Wad::from_number_with_decimals("0.00105", 3).unwrap(), Wad::with_decimals(1, 3));
        assert_eq!(Wad::from_number("2.99999").unwrap(), Wad::new(2999990000000000000u64));
    }

    #[test]
    fn floats_never_construct() {
        assert_eq!(Wad::from_number(10.5f64), Err(NumericError::FloatConstruction));
        assert_eq!(Wad::from_number(2.0f64), Err(NumericError::FloatConstruction));
        assert_eq!(Ray::from_number(0.0f32), Err(NumericError::FloatConstruction));
        assert_eq!(Rad::try_from(1.0f64), Err(NumericError::FloatConstruction));
    }

    #[test]
    fn same_precision_multiply_truncates() {
        let two = Wad::from_number(2).unwrap();
        assert_eq!(two.try_mul(Wad::from_number(3).unwrap()).unwrap(), Wad::from_number(6).unwrap());
        assert_eq!(two.try_mul(Wad::new(3)).unwrap(), Wad::new(6));
        assert_eq!(Wad::from_number("2.5").unwrap().try_mul(Wad::new(3)).unwrap(), Wad::new(7));
        assert_eq!(Wad::from_number("2.99999").unwrap().try_mul(Wad::new(3)).unwrap(), Wad::new(8));
        assert_eq!(Ray::from_number("2.5").unwrap().try_mul(Ray::new(3)).unwrap(), Ray::new(7));
    }

    #[test]
    fn multiply_by_integer() {
        let two = Wad::from_number(2).unwrap();
        assert_eq!(two.try_mul(3u64).unwrap(), Wad::from_number(6).unwrap());
        assert_eq!(two.try_mul(1u64).unwrap(), two);
        assert_eq!(two.try_mul(-2i64).unwrap(), Wad::from_number(-4).unwrap());
        let cents = Wad::with_decimals(5, 2);
        assert_eq!(cents.try_mul(3u64).unwrap(), Wad::with_decimals(15, 2));
    }

    #[test]
    fn divide_truncates() {
        let two = Wad::from_number(2).unwrap();
        assert_eq!(Wad::from_number(4).unwrap().try_div(two).unwrap(), two);
        assert_eq!(Wad::new(4).try_div(two).unwrap(), Wad::new(2));
        assert_eq!(Wad::new(3).try_div(two).unwrap(), Wad::new(1));
        let twenty = Wad::from_number(20).unwrap();
        assert_eq!(Wad::new(39).try_div(twenty).unwrap(), Wad::new(1));
        assert_eq!(Wad::new(40).try_div(twenty).unwrap(), Wad::new(2));
        assert_eq!(
            Wad::from_number("0.2").unwrap().try_div(Wad::from_number("0.1").unwrap()).unwrap(),
            two
        );
        assert_eq!(Wad::new(1).try_div(Wad::zero()), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn add_and_subtract() {
        assert_eq!(Wad::new(1).try_add(Wad::new(2)).unwrap(), Wad::new(3));
        assert_eq!(Wad::new(1).try_sub(Wad::new(2)).unwrap(), Wad::new(-1));
        assert_eq!(Ray::new(10).try_sub(Ray::new(2)).unwrap(), Ray::new(8));
    }

    #[test]
    fn sub_scale_mixing_fails() {
        let odd = Wad::with_decimals(1, 3);
        assert_eq!(Wad::new(1).try_add(odd), Err(NumericError::ScaleMismatch));
        assert_eq!(Wad::new(1).try_sub(odd), Err(NumericError::ScaleMismatch));
        assert_eq!(Wad::new(1).try_mul(odd), Err(NumericError::ScaleMismatch));
        assert_eq!(Wad::new(1).try_div(odd), Err(NumericError::ScaleMismatch));
        assert_eq!(Wad::new(1).try_cmp(&odd), Err(NumericError::ScaleMismatch));
        assert_eq!(Wad::new(1).partial_cmp(&odd), None);
        assert_ne!(Wad::new(1), odd);
        let wide = Wad::new(1_000_000_000_000_000u64);
        assert_eq!(
            [wide.lt(&odd), wide.le(&odd), wide.gt(&odd), wide.ge(&odd)],
            [false; 4]
        );
        assert_eq!(wide.try_cmp(&odd), Err(NumericError::ScaleMismatch));
        assert_eq!(odd.to_string(), "0.001");
        assert_eq!(Wad::with_decimals(5, 2).to_string(), "0.05");
    }

    #[test]
    fn comparisons() {
        assert_eq!(Wad::new(1000), Wad::new(1000));
        assert_ne!(Wad::new(1000), Wad::new(999));
        assert!(Wad::new(1000) > Wad::new(999));
        assert!(Wad::new(999) < Wad::new(1000));
        assert!(Wad::new(999) <= Wad::new(1000));
        assert!(Wad::new(1000) <= Wad::new(1000));
        assert!(Wad::new(1000) >= Wad::new(1000));
        assert!(Wad::new(-5) < Wad::new(3));
    }

    #[test]
    fn hashable() {
        let mut set = HashSet::new();
        set.insert(Wad::new(123));
        set.insert(Wad::new(123));
        set.insert(Wad::with_decimals(123, 3));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn min_and_max() {
        assert_eq!(Wad::min(&[Wad::new(10), Wad::new(20)]).unwrap(), Wad::new(10));
        assert_eq!(Wad::min(&[Wad::new(25), Wad::new(15), Wad::new(5)]).unwrap(), Wad::new(5));
        assert_eq!(Wad::max(&[Wad::new(25), Wad::new(15), Wad::new(40)]).unwrap(), Wad::new(40));
        assert_eq!(Ray::max(&[]), Err(NumericError::EmptyInput));
        assert_eq!(
            Wad::max(&[Wad::new(1), Wad::with_decimals(2, 3)]),
            Err(NumericError::ScaleMismatch)
        );
    }

    #[test]
    fn rounds_half_to_even() {
        let x = Wad::from_number("123.4567").unwrap();
        assert_eq!(x.round(2).unwrap(), Wad::from_number("123.46").unwrap());
        assert_eq!(x.round(0).unwrap(), Wad::from_number(123).unwrap());
        assert_eq!(x.round(-2).unwrap(), Wad::from_number(100).unwrap());
        assert_eq!(x.round(30).unwrap(), x);
        assert_eq!(Wad::from_number("2.5").unwrap().round(0).unwrap(), Wad::from_number(2).unwrap());
        assert_eq!(Wad::from_number("3.5").unwrap().round(0).unwrap(), Wad::from_number(4).unwrap());
        assert_eq!(
            Ray::from_number("123.4567").unwrap().round(2).unwrap(),
            Ray::from_number("123.46").unwrap()
        );
    }

    #[test]
    fn casts_truncate() {
        assert_eq!(Wad::from_number("-4.5").unwrap().to_i64(), Some(-4));
        assert_eq!(Wad::from_number("0.99").unwrap().to_i64(), Some(0));
        assert_eq!(Wad::from_number("1.9999999999").unwrap().to_i64(), Some(1));
        assert_eq!(Wad::from_number("-4.5").unwrap().to_f64(), Some(-4.5));
        assert_eq!(Ray::from_number("0.99").unwrap().to_f64(), Some(0.99));
        assert_eq!(Wad::from_number(-1).unwrap().to_u64(), None);
    }

    #[test]
    fn cmp_scaled_is_exact() {
        let beg = Ray::from_number("1.05").unwrap();
        let bid = Rad::new(21);
        // 21 × 1.05 = 22.05, so 22 falls short even though the truncated product is 22
        assert_eq!(Rad::new(22).cmp_scaled(&bid, &beg).unwrap(), Ordering::Less);
        assert_eq!(Rad::new(23).cmp_scaled(&bid, &beg).unwrap(), Ordering::Greater);
        assert_eq!(Rad::new(21).cmp_scaled(&Rad::new(20), &beg).unwrap(), Ordering::Equal);
    }

    #[test]
    fn serializes_value_and_digits() {
        let value = Wad::with_decimals(-105, 5);
        let bytes = value.try_to_vec().unwrap();
        assert_eq!(Wad::try_from_slice(&bytes).unwrap(), value);
    }
}
