use anchor_lang::prelude::*;
use std::collections::BTreeMap;

use super::*;

/// In-memory model of one auction contract: its parameters, the kick
/// counter and every lot that has not been dealt yet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuctionHouse<A: Auction> {
    params: AuctionParams,
    kicks: u64,
    bids: BTreeMap<u64, Bid<A>>,
}

pub type Flipper = AuctionHouse<Flip>;
pub type Flapper = AuctionHouse<Flap>;
pub type Flopper = AuctionHouse<Flop>;

impl<A: Auction> AuctionHouse<A> {
    /// Create an empty house
    pub fn new(params: AuctionParams) -> Result<Self> {
        validate_auction_params(&params)?;
        Ok(Self {
            params,
            kicks: 0,
            bids: BTreeMap::new(),
        })
    }

    pub fn params(&self) -> &AuctionParams {
        &self.params
    }

    /// Number of auctions ever kicked
    pub fn kicks(&self) -> u64 {
        self.kicks
    }

    /// Current state of lot `id`; vacant when absent
    pub fn bid(&self, id: u64) -> Bid<A> {
        self.bids.get(&id).copied().unwrap_or_default()
    }

    /// Ids of lots not yet dealt, in kick order
    pub fn active_auctions(&self) -> Vec<u64> {
        self.bids.keys().copied().collect()
    }

    /// Stop accepting bids
    pub fn cage(&mut self) {
        msg!("Auction house caged");
        self.params.live = false;
    }

    pub(crate) fn next_id(&mut self) -> Result<u64> {
        self.kicks = self
            .kicks
            .checked_add(1)
            .ok_or(crate::error::ErrorCode::MathOverflow)?;
        Ok(self.kicks)
    }

    pub(crate) fn insert(&mut self, id: u64, bid: Bid<A>) {
        self.bids.insert(id, bid);
    }

    pub(crate) fn remove(&mut self, id: u64) -> Option<Bid<A>> {
        self.bids.remove(&id)
    }
}
