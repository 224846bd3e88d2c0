use crate::error::{ErrorCode, NumericError};
use crate::instructions::{handle_kick, Kick};
use crate::math::{Rad, TryMul, TrySub, Wad};
use crate::state::*;
use anchor_lang::prelude::*;

/// Amounts moved by liquidating one urn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BiteQuote {
    /// Collateral seized
    pub lot: Wad,
    /// Normalized debt seized
    pub art: Wad,
    /// Debt handed to the vow
    pub tab: Rad,
    /// Debt the collateral auction must raise, penalty included
    pub flip_tab: Rad,
}

/// State touched by a liquidation
pub struct Bite<'info> {
    pub cat_ilk: &'info CatIlk,
    pub ilk: &'info mut Ilk,
    pub urn: &'info mut Urn,
    pub vow: &'info mut Vow,
    pub flipper: &'info mut Flipper,
    /// Liquidator, holds the opening bid
    pub cat: Pubkey,
    /// Vault owner
    pub usr: Pubkey,
    /// Vow address, beneficiary of the auction
    pub vow_key: Pubkey,
}

/// What a bite of `urn` would seize.
///
/// `tab` is the debt accounted to the vow while `flip_tab` adds the
/// liquidation penalty; both are reported as they differ by `chop`.
pub fn quote_bite(cat_ilk: &CatIlk, ilk: &Ilk, urn: &Urn) -> Result<BiteQuote> {
    if urn.is_safe(ilk)? {
        msg!("Urn is safe");
        return Err(ErrorCode::UrnIsSafe.into());
    }
    if urn.ink.is_zero() || urn.art.is_zero() {
        msg!("Urn has nothing to seize");
        return Err(ErrorCode::NothingToBite.into());
    }

    let lot = Wad::min(&[urn.ink, cat_ilk.lump])?;
    if lot.is_zero() {
        msg!("Liquidation lump is zero");
        return Err(ErrorCode::NothingToBite.into());
    }
    let share = seized_art(lot, urn)?;
    let art = Wad::min(&[urn.art, share])?;
    let tab = Rad::from_product(&art, &ilk.rate)?;
    let flip_tab = tab.try_mul(Rad::try_from(cat_ilk.chop)?)?;

    Ok(BiteQuote {
        lot,
        art,
        tab,
        flip_tab,
    })
}

// lot · art / ink over the raw mantissas, truncated once
fn seized_art(lot: Wad, urn: &Urn) -> std::result::Result<Wad, NumericError> {
    if !lot.is_canonical() || !urn.art.is_canonical() || !urn.ink.is_canonical() {
        return Err(NumericError::ScaleMismatch);
    }
    let share = lot
        .value()
        .checked_mul(urn.art.value())
        .ok_or(NumericError::MathOverflow)?
        .checked_div(urn.ink.value())
        .ok_or(NumericError::DivisionByZero)?;
    Ok(Wad::new(share))
}

/// Seize collateral and debt from an unsafe urn and auction the collateral.
/// Returns the new flip id.
pub fn handle_bite(ctx: Bite, now: u64) -> Result<(u64, BiteQuote)> {
    msg!("Instruction: bite");
    let quote = quote_bite(ctx.cat_ilk, ctx.ilk, ctx.urn)?;

    ctx.urn.ink = ctx.urn.ink.try_sub(quote.lot)?;
    ctx.urn.art = ctx.urn.art.try_sub(quote.art)?;
    ctx.ilk.art = ctx.ilk.art.try_sub(quote.art)?;
    ctx.vow.fess(quote.tab, now)?;

    let id = handle_kick(
        ctx.flipper,
        Kick {
            guy: ctx.cat,
            lot: quote.lot,
            bid: Rad::zero(),
            tab: Some(quote.flip_tab),
            usr: ctx.usr,
            gal: ctx.vow_key,
        },
        now,
    )?;
    msg!("Bit {} collateral for {} debt into flip {}", quote.lot, quote.tab, id);
    Ok((id, quote))
}
