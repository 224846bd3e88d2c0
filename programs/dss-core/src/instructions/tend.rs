use crate::error::{AuctionError, ErrorCode};
use crate::math::TrySub;
use crate::state::*;
use anchor_lang::prelude::*;
use std::cmp::Ordering;

/// Payments owed once a tend is accepted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TendReceipt<A: Auction> {
    /// Outbid bidder, repaid their bid
    pub previous_guy: Pubkey,
    pub refund: Amount<A>,
    /// Raise over the previous bid, kept for the beneficiary
    pub increment: Amount<A>,
}

/// Checks shared by tend and dent: the lot exists, the house is live and
/// neither deadline has passed
pub(crate) fn validate_open<A: Auction>(
    current: &Bid<A>,
    params: &AuctionParams,
    now: u64,
) -> std::result::Result<(), AuctionError> {
    if current.is_vacant() {
        msg!("No auction under this id");
        return Err(ErrorCode::AuctionNotFound.into());
    }
    if !params.live {
        msg!("Auction house is not live");
        return Err(ErrorCode::AuctionNotLive.into());
    }
    if current.is_expired(now) {
        msg!("Auction already finished, deal it instead");
        return Err(current.expired_error(now));
    }
    Ok(())
}

/// Whether `bid` may replace the current bid on an unchanged lot
pub fn validate_tend<A: Auction>(
    current: &Bid<A>,
    params: &AuctionParams,
    lot: &Lot<A>,
    bid: &Amount<A>,
    now: u64,
) -> std::result::Result<(), AuctionError> {
    validate_open(current, params, now)?;
    if !A::KIND.supports_tend() {
        msg!("{:?} auctions only take lot decreases", A::KIND);
        return Err(ErrorCode::TendNotSupported.into());
    }
    if *lot != current.lot {
        msg!("Lot must stay {}", current.lot);
        return Err(ErrorCode::LotNotMatching.into());
    }
    if let Some(tab) = current.tab {
        if bid.try_cmp(&tab)? == Ordering::Greater {
            msg!("Bid must not exceed the tab {}", tab);
            return Err(ErrorCode::BidExceedsTab.into());
        }
    }
    if bid.try_cmp(&current.bid)? != Ordering::Greater {
        msg!("Bid must be higher than {}", current.bid);
        return Err(ErrorCode::BidNotHigher.into());
    }
    let reaches_tab = current.tab.map_or(false, |tab| *bid == tab);
    if !reaches_tab && bid.cmp_scaled(&current.bid, &params.beg)? == Ordering::Less {
        msg!("Bid must be at least {} times {}", params.beg, current.bid);
        return Err(ErrorCode::InsufficientIncrease.into());
    }
    Ok(())
}

/// Place a higher bid on lot `id`
pub fn handle_tend<A: Auction>(
    house: &mut AuctionHouse<A>,
    id: u64,
    guy: Pubkey,
    lot: Lot<A>,
    bid: Amount<A>,
    now: u64,
) -> std::result::Result<TendReceipt<A>, AuctionError> {
    msg!("Instruction: tend {}", id);
    let mut current = house.bid(id);
    validate_tend(&current, house.params(), &lot, &bid, now)?;

    let receipt = TendReceipt {
        previous_guy: current.guy,
        refund: current.bid,
        increment: bid.try_sub(current.bid)?,
    };
    current.guy = guy;
    current.bid = bid;
    current.tic = now
        .checked_add(house.params().ttl)
        .ok_or(ErrorCode::MathOverflow)?;
    house.insert(id, current);
    Ok(receipt)
}
