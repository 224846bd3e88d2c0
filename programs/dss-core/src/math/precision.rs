//! Precision markers and the conversions between them

use crate::{
    error::NumericError,
    math::{common::*, decimal::cross_mul, Fixed},
};

/// Number of fractional digits carried by a fixed-point family
pub trait Precision: Copy + Eq + Ord + std::hash::Hash + std::fmt::Debug + 'static {
    /// Canonical fractional digits
    const DECIMALS: u32;
    /// Name used by `Debug`
    const NAME: &'static str;
}

/// 18 fractional digits, token amounts
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WadScale {}

/// 27 fractional digits, rates and ratios
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RayScale {}

/// 45 fractional digits, internal debt (Wad × Ray)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RadScale {}

impl Precision for WadScale {
    const DECIMALS: u32 = WAD_DECIMALS;
    const NAME: &'static str = "Wad";
}

impl Precision for RayScale {
    const DECIMALS: u32 = RAY_DECIMALS;
    const NAME: &'static str = "Ray";
}

impl Precision for RadScale {
    const DECIMALS: u32 = RAD_DECIMALS;
    const NAME: &'static str = "Rad";
}

pub type Wad = Fixed<WadScale>;
pub type Ray = Fixed<RayScale>;
pub type Rad = Fixed<RadScale>;

/// Wad × Ray, result in Wad digits
impl TryMul<Ray> for Wad {
    fn try_mul(self, rhs: Ray) -> Result<Self, NumericError> {
        cross_mul(self, rhs)
    }
}

/// Ray × Wad, result in Ray digits
impl TryMul<Wad> for Ray {
    fn try_mul(self, rhs: Wad) -> Result<Self, NumericError> {
        cross_mul(self, rhs)
    }
}

macro_rules! impl_try_from_fixed {
    ($($from:ty => $to:ty),* $(,)?) => {$(
        impl TryFrom<$from> for $to {
            type Error = NumericError;

            fn try_from(val: $from) -> Result<Self, Self::Error> {
                val.convert()
            }
        }
    )*};
}

impl_try_from_fixed!(
    Wad => Ray,
    Wad => Rad,
    Ray => Wad,
    Ray => Rad,
    Rad => Wad,
    Rad => Ray,
);

impl Rad {
    /// Exact product of an amount and a rate, as used for debt
    pub fn from_product(amount: &Wad, rate: &Ray) -> Result<Self, NumericError> {
        if !amount.is_canonical() || !rate.is_canonical() {
            return Err(NumericError::ScaleMismatch);
        }
        let value = amount
            .value()
            .checked_mul(rate.value())
            .ok_or(NumericError::MathOverflow)?;
        Ok(Self::new(value))
    }
}
