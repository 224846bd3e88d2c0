use crate::error::{AuctionError, ErrorCode};
use crate::math::{Ray, RayScale, TryMul};
use crate::state::*;
use anchor_lang::prelude::*;

/// Restart lot `id` after it ran out without a single bid.
/// Debt auctions also grow their lot by `pad`.
pub fn handle_tick<A: Auction>(
    house: &mut AuctionHouse<A>,
    id: u64,
    now: u64,
) -> std::result::Result<Bid<A>, AuctionError> {
    msg!("Instruction: tick {}", id);
    let mut current = house.bid(id);
    if current.is_vacant() {
        msg!("No auction under this id");
        return Err(ErrorCode::AuctionNotFound.into());
    }
    if now < current.end {
        msg!("Auction runs until {}", current.end);
        return Err(ErrorCode::AuctionNotFinished.into());
    }
    if current.tic != 0 {
        msg!("Auction has a bid, deal it instead");
        return Err(ErrorCode::BidAlreadyPlaced.into());
    }

    if A::KIND == AuctionKind::Flop {
        current.lot = grow_lot::<A>(current.lot, house.params().pad)?;
    }
    current.end = now
        .checked_add(house.params().tau)
        .ok_or(ErrorCode::MathOverflow)?;
    house.insert(id, current);
    Ok(current)
}

// lot × pad, truncated back to the lot's digits
fn grow_lot<A: Auction>(lot: Lot<A>, pad: Ray) -> std::result::Result<Lot<A>, AuctionError> {
    let grown = lot.convert::<RayScale>()?.try_mul(pad)?;
    Ok(grown.convert::<A::Lot>()?)
}
