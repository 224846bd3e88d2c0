use crate::error::ErrorCode;
use crate::state::*;
use anchor_lang::prelude::*;

/// Opening terms of a new lot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kick<A: Auction> {
    /// Caller starting the auction; holds the opening bid
    pub guy: Pubkey,
    pub lot: Lot<A>,
    pub bid: Amount<A>,
    /// Debt to raise, collateral auctions only
    pub tab: Option<Amount<A>>,
    pub usr: Pubkey,
    pub gal: Pubkey,
}

pub fn validate_kick<A: Auction>(kick: &Kick<A>) -> Result<()> {
    if !kick.lot.is_canonical() || !kick.bid.is_canonical() {
        msg!("Kick amounts must use canonical digits");
        return Err(ErrorCode::InvalidAmount.into());
    }
    if kick.lot.is_negative() || kick.lot.is_zero() {
        msg!("Lot must be positive");
        return Err(ErrorCode::InvalidAmount.into());
    }
    if kick.bid.is_negative() {
        msg!("Opening bid must not be negative");
        return Err(ErrorCode::InvalidAmount.into());
    }
    match (A::KIND.has_tab(), kick.tab) {
        (true, Some(tab)) => {
            if !tab.is_canonical() || tab.is_negative() || tab.is_zero() {
                msg!("Tab must be a positive canonical amount");
                return Err(ErrorCode::InvalidAmount.into());
            }
            if kick.bid > tab {
                msg!("Opening bid above the tab");
                return Err(ErrorCode::BidExceedsTab.into());
            }
        }
        (true, None) => {
            msg!("Collateral auction needs a tab");
            return Err(ErrorCode::InvalidAmount.into());
        }
        (false, Some(_)) => {
            msg!("Only collateral auctions carry a tab");
            return Err(ErrorCode::InvalidAmount.into());
        }
        (false, None) => (),
    }
    Ok(())
}

/// Open a new lot; returns its id
pub fn handle_kick<A: Auction>(house: &mut AuctionHouse<A>, kick: Kick<A>, now: u64) -> Result<u64> {
    msg!("Instruction: kick {:?}", A::KIND);
    if !house.params().live {
        msg!("Auction house is not live");
        return Err(ErrorCode::AuctionNotLive.into());
    }
    validate_kick(&kick)?;

    let end = now
        .checked_add(house.params().tau)
        .ok_or(ErrorCode::MathOverflow)?;
    let id = house.next_id()?;
    house.insert(
        id,
        Bid {
            guy: kick.guy,
            lot: kick.lot,
            bid: kick.bid,
            tic: 0,
            end,
            tab: kick.tab,
            usr: kick.usr,
            gal: kick.gal,
        },
    );
    msg!("Kicked auction {} ending at {}", id, end);
    Ok(id)
}
