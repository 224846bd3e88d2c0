use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;

use crate::error::{ErrorCode, NumericError};
use crate::math::{Rad, Ray, TrySub, Wad};

/// Collateral type parameters
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ilk {
    /// Accumulated stability fee; normalized debt × rate = debt
    pub rate: Ray,
    /// Collateral price divided by the liquidation ratio
    pub spot: Ray,
    /// Total normalized debt drawn against this collateral
    pub art: Wad,
}

/// A single vault
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Urn {
    /// Locked collateral
    pub ink: Wad,
    /// Normalized debt
    pub art: Wad,
}

/// Liquidation parameters of one collateral type
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatIlk {
    /// Liquidation penalty
    pub chop: Ray,
    /// Largest collateral amount sent to one auction
    pub lump: Wad,
}

impl Urn {
    /// `art · rate <= ink · spot`, both sides exact
    pub fn is_safe(&self, ilk: &Ilk) -> Result<bool> {
        let tab = self.debt(ilk)?;
        let cap = Rad::from_product(&self.ink, &ilk.spot)?;
        Ok(tab <= cap)
    }

    /// Debt owed, including accrued fees
    pub fn debt(&self, ilk: &Ilk) -> Result<Rad> {
        Ok(Rad::from_product(&self.art, &ilk.rate)?)
    }

    /// Additional normalized debt the urn can draw while staying safe
    pub fn max_dart(&self, ilk: &Ilk) -> Result<Wad> {
        if ilk.rate.is_zero() {
            msg!("Collateral type has no rate");
            return Err(ErrorCode::InvalidConfig.into());
        }
        if !ilk.rate.is_canonical() {
            return Err(NumericError::ScaleMismatch.into());
        }
        // largest art with art · rate <= ink · spot, one truncating division
        let cap = Rad::from_product(&self.ink, &ilk.spot)?;
        let limit = cap
            .value()
            .checked_div(ilk.rate.value())
            .ok_or(NumericError::DivisionByZero)?;
        let room = Wad::new(limit).try_sub(self.art)?;
        Ok(Wad::max(&[room, Wad::zero()])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TryAdd;

    fn ilk(rate: &str, spot: &str) -> Ilk {
        Ilk {
            rate: Ray::from_number(rate).unwrap(),
            spot: Ray::from_number(spot).unwrap(),
            art: Wad::zero(),
        }
    }

    fn urn(ink: &str, art: &str) -> Urn {
        Urn {
            ink: Wad::from_number(ink).unwrap(),
            art: Wad::from_number(art).unwrap(),
        }
    }

    #[test]
    fn safety_boundary() {
        let ilk = ilk("1", "150");
        assert!(urn("1", "150").is_safe(&ilk).unwrap());
        assert!(!urn("1", "150.000000000000000001").is_safe(&ilk).unwrap());
        let crashed = Ilk { spot: Ray::from_number(75).unwrap(), ..ilk };
        assert!(!urn("1", "100").is_safe(&crashed).unwrap());
    }

    #[test]
    fn debt_includes_rate() {
        let ilk = ilk("1.1", "150");
        assert_eq!(urn("1", "10").debt(&ilk).unwrap(), Rad::from_number(11).unwrap());
    }

    #[test]
    fn max_dart_leaves_urn_safe() {
        let ilk = ilk("1", "150");
        let urn = urn("1", "20");
        let dart = urn.max_dart(&ilk).unwrap();
        assert_eq!(dart, Wad::from_number(130).unwrap());

        let full = Urn { art: urn.art.try_add(dart).unwrap(), ..urn };
        assert!(full.is_safe(&ilk).unwrap());
        let over = Urn { art: full.art.try_add(Wad::new(1)).unwrap(), ..full };
        assert!(!over.is_safe(&ilk).unwrap());
    }

    #[test]
    fn safety_compares_exact_products() {
        // debt exceeds the backing by one raw rad unit
        let ilk = Ilk {
            rate: Ray::new(1_000_000_000_000_000_000_000_000_001u128),
            spot: Ray::one(),
            art: Wad::zero(),
        };
        let urn = Urn {
            ink: Wad::new(1),
            art: Wad::new(1),
        };
        assert!(urn.debt(&ilk).unwrap() > Rad::from_product(&urn.ink, &ilk.spot).unwrap());
        assert!(!urn.is_safe(&ilk).unwrap());
        assert_eq!(urn.max_dart(&ilk).unwrap(), Wad::zero());

        let at_par = Ilk { rate: Ray::one(), ..ilk };
        assert!(urn.is_safe(&at_par).unwrap());
    }

    #[test]
    fn max_dart_truncates_once() {
        // 1 · 1 / 1.000000000000000000000000001 falls just short of 1
        let ilk = Ilk {
            rate: Ray::new(1_000_000_000_000_000_000_000_000_001u128),
            spot: Ray::one(),
            art: Wad::zero(),
        };
        let dart = urn("1", "0").max_dart(&ilk).unwrap();
        assert_eq!(dart, Wad::new(999_999_999_999_999_999u64));
        let full = Urn { ink: Wad::from_number(1).unwrap(), art: dart };
        assert!(full.is_safe(&ilk).unwrap());
    }

    #[test]
    fn max_dart_of_unsafe_urn_is_zero() {
        let ilk = ilk("2", "100");
        assert_eq!(urn("1", "60").max_dart(&ilk).unwrap(), Wad::zero());
    }
}
