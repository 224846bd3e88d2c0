use crate::error::ErrorCode;
use crate::instructions::{handle_kick, DentReceipt, Kick};
use crate::math::{Rad, TryAdd, TrySub, Wad};
use crate::state::*;
use anchor_lang::prelude::*;

/// Sell `bump` of surplus in a new flap; returns its id
pub fn handle_flap(vow: &mut Vow, flapper: &mut Flapper, vow_key: Pubkey, now: u64) -> Result<u64> {
    msg!("Instruction: flap");
    vow.validate_flap()?;
    let id = handle_kick(
        flapper,
        Kick {
            guy: vow_key,
            lot: vow.config.bump,
            bid: Wad::zero(),
            tab: None,
            usr: Pubkey::default(),
            gal: vow_key,
        },
        now,
    )?;
    vow.joy = vow.joy.try_sub(vow.config.bump)?;
    Ok(id)
}

/// Cover `sump` of unbacked debt with a new flop; returns its id
pub fn handle_flop(vow: &mut Vow, flopper: &mut Flopper, vow_key: Pubkey, now: u64) -> Result<u64> {
    msg!("Instruction: flop");
    vow.validate_flop()?;
    let id = handle_kick(
        flopper,
        Kick {
            guy: vow_key,
            lot: vow.config.dump,
            bid: vow.config.sump,
            tab: None,
            usr: Pubkey::default(),
            gal: vow_key,
        },
        now,
    )?;
    vow.ash = vow.ash.try_add(vow.config.sump)?;
    Ok(id)
}

/// Book the bid repaid to the vow when its opening flop bid is outbid,
/// cancelling it against the debt on auction
pub fn handle_flop_refund(vow: &mut Vow, vow_key: Pubkey, receipt: &DentReceipt<Flop>) -> Result<Rad> {
    if receipt.previous_guy != vow_key {
        return Ok(Rad::zero());
    }
    if receipt.refund.is_negative() {
        msg!("Refund must not be negative");
        return Err(ErrorCode::InvalidAmount.into());
    }
    vow.joy = vow.joy.try_add(receipt.refund)?;
    let kissed = Rad::min(&[receipt.refund, vow.ash])?;
    vow.kiss(kissed)?;
    Ok(kissed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::handle_dent;

    fn rad(n: &str) -> Rad {
        Rad::from_number(n).unwrap()
    }

    fn config() -> VowConfig {
        VowConfig {
            bump: rad("100"),
            hump: rad("50"),
            sump: rad("50"),
            dump: Wad::from_number(1).unwrap(),
            wait: 0,
        }
    }

    #[test]
    fn flap_takes_bump_from_surplus() {
        let mut vow = Vow::new(config());
        vow.joy = rad("200");
        let mut flapper = Flapper::new(AuctionParams::default()).unwrap();
        let id = handle_flap(&mut vow, &mut flapper, Pubkey::new_unique(), 0).unwrap();
        assert_eq!(id, 1);
        assert_eq!(vow.joy, rad("100"));
        assert_eq!(flapper.bid(id).lot, rad("100"));
        assert_eq!(flapper.bid(id).bid, Wad::zero());

        // 100 left is below bump + hump
        assert_eq!(
            handle_flap(&mut vow, &mut flapper, Pubkey::new_unique(), 0),
            Err(ErrorCode::InsufficientSurplus.into())
        );
        assert_eq!(flapper.kicks(), 1);
    }

    #[test]
    fn flop_moves_debt_on_auction_and_refund_kisses_it() {
        let vow_key = Pubkey::new_unique();
        let mut vow = Vow::new(config());
        vow.awe = rad("60");
        let mut flopper = Flopper::new(AuctionParams::default()).unwrap();

        let id = handle_flop(&mut vow, &mut flopper, vow_key, 0).unwrap();
        assert_eq!(vow.ash, rad("50"));
        assert_eq!(vow.woe().unwrap(), rad("10"));
        assert_eq!(flopper.bid(id).bid, rad("50"));

        let receipt = handle_dent(
            &mut flopper,
            id,
            Pubkey::new_unique(),
            Wad::from_number("0.5").unwrap(),
            rad("50"),
            1,
        )
        .unwrap();
        assert_eq!(handle_flop_refund(&mut vow, vow_key, &receipt).unwrap(), rad("50"));
        assert_eq!(vow.ash, Rad::zero());
        assert_eq!(vow.awe, rad("10"));
        assert_eq!(vow.joy, Rad::zero());
    }
}
