//! Client-side bid planning.
//!
//! A keeper never trusts cached auction state: every plan re-reads the lot
//! from the ledger and runs the same legality checks the auction applies,
//! so a call is only handed to the transport when it would be accepted at
//! `now`.

use anchor_lang::prelude::*;

use crate::error::AuctionError;
use crate::instructions::{validate_deal, validate_dent, validate_tend};
use crate::state::*;

/// Read access to one auction contract
pub trait AuctionLedger<A: Auction> {
    fn params(&self) -> std::result::Result<AuctionParams, AuctionError>;

    fn kicks(&self) -> std::result::Result<u64, AuctionError>;

    /// Raw record of lot `id`; all zero when there is none
    fn raw_bid(&self, id: u64) -> std::result::Result<RawBid, AuctionError>;

    /// Validated record of lot `id`
    fn bid(&self, id: u64) -> std::result::Result<Bid<A>, AuctionError> {
        Bid::from_raw(&self.raw_bid(id)?)
    }
}

impl<A: Auction> AuctionLedger<A> for AuctionHouse<A> {
    fn params(&self) -> std::result::Result<AuctionParams, AuctionError> {
        Ok(*AuctionHouse::params(self))
    }

    fn kicks(&self) -> std::result::Result<u64, AuctionError> {
        Ok(AuctionHouse::kicks(self))
    }

    fn raw_bid(&self, id: u64) -> std::result::Result<RawBid, AuctionError> {
        AuctionHouse::bid(self, id).to_raw()
    }
}

/// Mutating call ready for the transport
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuctionCall<A: Auction> {
    Tend { id: u64, lot: Lot<A>, bid: Amount<A> },
    Dent { id: u64, lot: Lot<A>, bid: Amount<A> },
    Deal { id: u64 },
}

/// What can legally be done with a lot right now
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextAction {
    /// Still open for bids
    Bid,
    /// Finished, waiting to be dealt
    Deal,
    /// Nothing under this id
    None,
}

pub fn plan_tend<A: Auction, L: AuctionLedger<A>>(
    ledger: &L,
    id: u64,
    lot: Lot<A>,
    bid: Amount<A>,
    now: u64,
) -> std::result::Result<AuctionCall<A>, AuctionError> {
    let current = ledger.bid(id)?;
    validate_tend(&current, &ledger.params()?, &lot, &bid, now)?;
    Ok(AuctionCall::Tend { id, lot, bid })
}

pub fn plan_dent<A: Auction, L: AuctionLedger<A>>(
    ledger: &L,
    id: u64,
    lot: Lot<A>,
    bid: Amount<A>,
    now: u64,
) -> std::result::Result<AuctionCall<A>, AuctionError> {
    let current = ledger.bid(id)?;
    validate_dent(&current, &ledger.params()?, &lot, &bid, now)?;
    Ok(AuctionCall::Dent { id, lot, bid })
}

pub fn plan_deal<A: Auction, L: AuctionLedger<A>>(
    ledger: &L,
    id: u64,
    now: u64,
) -> std::result::Result<AuctionCall<A>, AuctionError> {
    validate_deal(&ledger.bid(id)?, now)?;
    Ok(AuctionCall::Deal { id })
}

pub fn next_action<A: Auction, L: AuctionLedger<A>>(
    ledger: &L,
    id: u64,
    now: u64,
) -> std::result::Result<NextAction, AuctionError> {
    let current = ledger.bid(id)?;
    Ok(match current.phase(now) {
        AuctionPhase::Vacant => NextAction::None,
        AuctionPhase::Expired => NextAction::Deal,
        _ if !ledger.params()?.live => NextAction::None,
        _ => NextAction::Bid,
    })
}

/// Ids of every kicked lot not yet dealt
pub fn active_auctions<A: Auction, L: AuctionLedger<A>>(
    ledger: &L,
) -> std::result::Result<Vec<u64>, AuctionError> {
    let mut active = Vec::new();
    for id in 1..=ledger.kicks()? {
        if !ledger.bid(id)?.is_vacant() {
            active.push(id);
        }
    }
    msg!("{} active auctions", active.len());
    Ok(active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::instructions::{handle_deal, handle_kick, Kick};
    use crate::math::{Rad, Wad};

    fn flapper_with_lot() -> (Flapper, u64) {
        let mut house = Flapper::new(AuctionParams::default()).unwrap();
        let vow = Pubkey::new_unique();
        let id = handle_kick(
            &mut house,
            Kick {
                guy: vow,
                lot: Rad::from_number(100).unwrap(),
                bid: Wad::zero(),
                tab: None,
                usr: Pubkey::default(),
                gal: vow,
            },
            0,
        )
        .unwrap();
        (house, id)
    }

    #[test]
    fn plans_only_legal_calls() {
        let (house, id) = flapper_with_lot();
        let lot = Rad::from_number(100).unwrap();
        let bid = Wad::from_number("0.001").unwrap();

        assert_eq!(
            plan_tend(&house, id, lot, bid, 10).unwrap(),
            AuctionCall::Tend { id, lot, bid }
        );
        assert_eq!(
            plan_dent(&house, id, Rad::from_number(50).unwrap(), Wad::zero(), 10)
                .unwrap_err()
                .reason(),
            Some(ErrorCode::DentNotSupported)
        );
        assert_eq!(
            plan_deal(&house, id, 10).unwrap_err().reason(),
            Some(ErrorCode::AuctionNotFinished)
        );
        let end = house.bid(id).end;
        assert!(plan_tend(&house, id, lot, bid, end).unwrap_err().is_expired());
        assert_eq!(plan_deal(&house, id, end).unwrap(), AuctionCall::Deal { id });
    }

    #[test]
    fn recommends_next_action() {
        let (mut house, id) = flapper_with_lot();
        let end = house.bid(id).end;
        assert_eq!(next_action(&house, id, 0).unwrap(), NextAction::Bid);
        assert_eq!(next_action(&house, id, end).unwrap(), NextAction::Deal);
        assert_eq!(next_action(&house, id + 1, 0).unwrap(), NextAction::None);

        assert_eq!(active_auctions(&house).unwrap(), vec![id]);
        handle_deal(&mut house, id, end).unwrap();
        assert_eq!(next_action(&house, id, end).unwrap(), NextAction::None);
        assert!(active_auctions(&house).unwrap().is_empty());
    }

    #[test]
    fn caged_house_takes_no_bids() {
        let (mut house, id) = flapper_with_lot();
        house.cage();
        assert_eq!(next_action(&house, id, 0).unwrap(), NextAction::None);
    }
}
