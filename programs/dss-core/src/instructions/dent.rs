use crate::error::{AuctionError, ErrorCode};
use crate::instructions::tend::validate_open;
use crate::math::TrySub;
use crate::state::*;
use anchor_lang::prelude::*;
use std::cmp::Ordering;

/// Payments owed once a dent is accepted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DentReceipt<A: Auction> {
    /// Outbid bidder, repaid the fixed bid
    pub previous_guy: Pubkey,
    pub refund: Amount<A>,
    /// Collateral handed back to the vault owner, collateral auctions only
    pub returned_lot: Option<Lot<A>>,
}

/// Whether `lot` may replace the current lot for the same bid.
///
/// The new lot must be strictly smaller and, scaled up by the increment
/// factor, still no larger than the current lot.
pub fn validate_dent<A: Auction>(
    current: &Bid<A>,
    params: &AuctionParams,
    lot: &Lot<A>,
    bid: &Amount<A>,
    now: u64,
) -> std::result::Result<(), AuctionError> {
    validate_open(current, params, now)?;
    if !A::KIND.supports_dent() {
        msg!("{:?} auctions only take bid increases", A::KIND);
        return Err(ErrorCode::DentNotSupported.into());
    }
    if *bid != current.bid {
        msg!("Bid must stay {}", current.bid);
        return Err(ErrorCode::BidNotMatching.into());
    }
    if let Some(tab) = current.tab {
        if *bid != tab {
            msg!("Lot decreases start once the bid reaches the tab {}", tab);
            return Err(ErrorCode::TabNotReached.into());
        }
    }
    if lot.try_cmp(&current.lot)? != Ordering::Less {
        msg!("Lot must be lower than {}", current.lot);
        return Err(ErrorCode::LotNotLower.into());
    }
    if current.lot.cmp_scaled(lot, &params.beg)? == Ordering::Less {
        msg!("Lot times {} must not exceed {}", params.beg, current.lot);
        return Err(ErrorCode::InsufficientDecrease.into());
    }
    Ok(())
}

/// Accept a smaller lot for the same bid on lot `id`
pub fn handle_dent<A: Auction>(
    house: &mut AuctionHouse<A>,
    id: u64,
    guy: Pubkey,
    lot: Lot<A>,
    bid: Amount<A>,
    now: u64,
) -> std::result::Result<DentReceipt<A>, AuctionError> {
    msg!("Instruction: dent {}", id);
    let mut current = house.bid(id);
    validate_dent(&current, house.params(), &lot, &bid, now)?;

    let returned_lot = if A::KIND.has_tab() {
        Some(current.lot.try_sub(lot)?)
    } else {
        None
    };
    let receipt = DentReceipt {
        previous_guy: current.guy,
        refund: current.bid,
        returned_lot,
    };
    current.guy = guy;
    current.lot = lot;
    current.tic = now
        .checked_add(house.params().ttl)
        .ok_or(ErrorCode::MathOverflow)?;
    house.insert(id, current);
    Ok(receipt)
}
