use crate::error::{AuctionError, ErrorCode};
use crate::state::*;
use anchor_lang::prelude::*;

/// Final transfer of a dealt lot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement<A: Auction> {
    pub id: u64,
    /// Winning bidder, receives the lot
    pub winner: Pubkey,
    pub lot: Lot<A>,
    pub bid: Amount<A>,
    /// Beneficiary of the bid
    pub gal: Pubkey,
}

pub fn validate_deal<A: Auction>(
    current: &Bid<A>,
    now: u64,
) -> std::result::Result<(), AuctionError> {
    if current.is_vacant() {
        msg!("No auction under this id, or already dealt");
        return Err(ErrorCode::AuctionNotFound.into());
    }
    if !current.is_expired(now) {
        msg!("Auction runs until tic {} or end {}", current.tic, current.end);
        return Err(ErrorCode::AuctionNotFinished.into());
    }
    Ok(())
}

/// Settle lot `id`, removing it from the house
pub fn handle_deal<A: Auction>(
    house: &mut AuctionHouse<A>,
    id: u64,
    now: u64,
) -> std::result::Result<Settlement<A>, AuctionError> {
    msg!("Instruction: deal {}", id);
    validate_deal(&house.bid(id), now)?;
    let bid = house.remove(id).ok_or(ErrorCode::AuctionNotFound)?;
    Ok(Settlement {
        id,
        winner: bid.guy,
        lot: bid.lot,
        bid: bid.bid,
        gal: bid.gal,
    })
}
