use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;
use std::fmt;

use crate::error::{AuctionError, ErrorCode};
use crate::math::{Fixed, Mantissa, Precision, RadScale, WadScale};

/// Which side of a lot bidders compete on
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuctionKind {
    /// Collateral sale: bid rises up to the tab, then the lot falls
    Flip,
    /// Surplus sale: bid rises
    Flap,
    /// Debt sale: lot falls for a fixed bid
    Flop,
}

impl AuctionKind {
    pub fn supports_tend(self) -> bool {
        matches!(self, Self::Flip | Self::Flap)
    }

    pub fn supports_dent(self) -> bool {
        matches!(self, Self::Flip | Self::Flop)
    }

    /// True when lots carry a debt ceiling
    pub fn has_tab(self) -> bool {
        matches!(self, Self::Flip)
    }
}

/// Static description of an auction kind: the precision of each side
pub trait Auction: Copy + fmt::Debug + PartialEq + Eq + 'static {
    type Lot: Precision;
    type Bid: Precision;
    const KIND: AuctionKind;
}

/// Collateral auction marker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flip {}

/// Surplus auction marker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flap {}

/// Debt auction marker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flop {}

impl Auction for Flip {
    type Lot = WadScale;
    type Bid = RadScale;
    const KIND: AuctionKind = AuctionKind::Flip;
}

impl Auction for Flap {
    type Lot = RadScale;
    type Bid = WadScale;
    const KIND: AuctionKind = AuctionKind::Flap;
}

impl Auction for Flop {
    type Lot = WadScale;
    type Bid = RadScale;
    const KIND: AuctionKind = AuctionKind::Flop;
}

/// Lot amount of auction `A`
pub type Lot<A> = Fixed<<A as Auction>::Lot>;
/// Bid amount of auction `A`
pub type Amount<A> = Fixed<<A as Auction>::Bid>;

/// Lifecycle position of a lot at a given time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuctionPhase {
    /// No lot under this id, or already dealt
    Vacant,
    /// Kicked, nobody has bid yet
    Kicked,
    /// At least one bid placed
    Tendered,
    /// Bid reached the tab; only lot decreases remain
    Capped,
    /// `tic` or `end` has passed; only `deal` remains
    Expired,
}

/// Bid record as read from the ledger, before validation
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RawBid {
    pub bid: Mantissa,
    pub lot: Mantissa,
    pub guy: Pubkey,
    pub tic: u64,
    pub end: u64,
    pub usr: Pubkey,
    pub gal: Pubkey,
    pub tab: Mantissa,
}

/// Validated state of one lot
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Bid<A: Auction> {
    /// Current high bidder
    pub guy: Pubkey,
    /// Amount being sold
    pub lot: Lot<A>,
    /// Amount offered
    pub bid: Amount<A>,
    /// Bid expiry, zero until the first bid
    pub tic: u64,
    /// Auction expiry
    pub end: u64,
    /// Debt ceiling, collateral auctions only
    pub tab: Option<Amount<A>>,
    /// Owner of the liquidated vault, receives returned collateral
    pub usr: Pubkey,
    /// Beneficiary of the proceeds
    pub gal: Pubkey,
}

pub type FlipBid = Bid<Flip>;
pub type FlapBid = Bid<Flap>;
pub type FlopBid = Bid<Flop>;

impl<A: Auction> Default for Bid<A> {
    fn default() -> Self {
        Self {
            guy: Pubkey::default(),
            lot: Fixed::zero(),
            bid: Fixed::zero(),
            tic: 0,
            end: 0,
            tab: if A::KIND.has_tab() { Some(Fixed::zero()) } else { None },
            usr: Pubkey::default(),
            gal: Pubkey::default(),
        }
    }
}

impl<A: Auction> fmt::Debug for Bid<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bid")
            .field("kind", &A::KIND)
            .field("guy", &self.guy)
            .field("lot", &self.lot)
            .field("bid", &self.bid)
            .field("tic", &self.tic)
            .field("end", &self.end)
            .field("tab", &self.tab)
            .field("usr", &self.usr)
            .field("gal", &self.gal)
            .finish()
    }
}

impl<A: Auction> Bid<A> {
    /// Validate a raw ledger record
    pub fn from_raw(raw: &RawBid) -> std::result::Result<Self, AuctionError> {
        if *raw == RawBid::default() {
            return Ok(Self::default());
        }
        if raw.bid.is_negative() || raw.lot.is_negative() || raw.tab.is_negative() {
            msg!("Bid amounts must not be negative");
            return Err(ErrorCode::InvalidBidState.into());
        }
        if raw.end == 0 {
            msg!("Live bid without an auction end");
            return Err(ErrorCode::InvalidBidState.into());
        }

        let bid = Fixed::new(raw.bid);
        let tab = if A::KIND.has_tab() {
            let tab = Fixed::new(raw.tab);
            if bid > tab {
                msg!("Bid above the tab");
                return Err(ErrorCode::InvalidBidState.into());
            }
            Some(tab)
        } else {
            if !raw.tab.is_zero() {
                msg!("Tab on an auction without a debt ceiling");
                return Err(ErrorCode::InvalidBidState.into());
            }
            None
        };

        Ok(Self {
            guy: raw.guy,
            lot: Fixed::new(raw.lot),
            bid,
            tic: raw.tic,
            end: raw.end,
            tab,
            usr: raw.usr,
            gal: raw.gal,
        })
    }

    /// Ledger form, rescaled to canonical digits
    pub fn to_raw(&self) -> std::result::Result<RawBid, AuctionError> {
        let tab = match self.tab {
            Some(tab) => *tab.convert::<A::Bid>()?.value(),
            None => Mantissa::zero(),
        };
        Ok(RawBid {
            bid: *self.bid.convert::<A::Bid>()?.value(),
            lot: *self.lot.convert::<A::Lot>()?.value(),
            guy: self.guy,
            tic: self.tic,
            end: self.end,
            usr: self.usr,
            gal: self.gal,
            tab,
        })
    }

    /// No lot is recorded under this id
    pub fn is_vacant(&self) -> bool {
        self.end == 0
    }

    /// Bid lifetime or auction duration has run out
    pub fn is_expired(&self, now: u64) -> bool {
        (self.tic != 0 && now >= self.tic) || now >= self.end
    }

    /// Bid has reached the debt ceiling
    pub fn is_capped(&self) -> bool {
        self.tab.map_or(false, |tab| self.bid == tab)
    }

    pub fn phase(&self, now: u64) -> AuctionPhase {
        if self.is_vacant() {
            AuctionPhase::Vacant
        } else if self.is_expired(now) {
            AuctionPhase::Expired
        } else if self.is_capped() {
            AuctionPhase::Capped
        } else if self.tic == 0 {
            AuctionPhase::Kicked
        } else {
            AuctionPhase::Tendered
        }
    }

    pub(crate) fn expired_error(&self, now: u64) -> AuctionError {
        AuctionError::Expired {
            tic: self.tic,
            end: self.end,
            now,
        }
    }
}
