use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;

use crate::error::ErrorCode;
use crate::math::{Ray, RAY_DECIMALS};

/// Default minimum bid increment, 5%
pub const DEFAULT_BEG: u128 = 1_050_000_000_000_000_000_000_000_000; // 1.05 ray

/// Default lot increase applied when a debt auction is restarted, 50%
pub const DEFAULT_PAD: u128 = 1_500_000_000_000_000_000_000_000_000; // 1.50 ray

/// Default bid lifetime in seconds
pub const DEFAULT_TTL: u64 = 3 * 60 * 60; // 3 hours

/// Default auction duration in seconds
pub const DEFAULT_TAU: u64 = 2 * 24 * 60 * 60; // 2 days

/// Parameters shared by every lot of one auction house
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuctionParams {
    /// Minimum bid increment factor
    pub beg: Ray,
    /// Bid lifetime; each accepted bid moves `tic` to `now + ttl`
    pub ttl: u64,
    /// Auction duration; `end` is set to `now + tau` on kick
    pub tau: u64,
    /// Lot increase factor for restarted debt auctions
    pub pad: Ray,
    /// Cleared when the house is caged
    pub live: bool,
}

impl Default for AuctionParams {
    fn default() -> Self {
        Self {
            beg: Ray::new(DEFAULT_BEG),
            ttl: DEFAULT_TTL,
            tau: DEFAULT_TAU,
            pad: Ray::new(DEFAULT_PAD),
            live: true,
        }
    }
}

pub fn validate_auction_params(params: &AuctionParams) -> Result<()> {
    if params.beg.decimals() != RAY_DECIMALS || params.pad.decimals() != RAY_DECIMALS {
        msg!("Increment factors must be canonical rays");
        return Err(ErrorCode::InvalidConfig.into());
    }
    if params.beg < Ray::one() {
        msg!("Minimum bid increment must be >= 1");
        return Err(ErrorCode::InvalidConfig.into());
    }
    if params.pad < Ray::one() {
        msg!("Restart lot increase must be >= 1");
        return Err(ErrorCode::InvalidConfig.into());
    }
    if params.ttl == 0 {
        msg!("Bid lifetime must be > 0");
        return Err(ErrorCode::InvalidConfig.into());
    }
    if params.tau <= params.ttl {
        msg!("Auction duration must be > bid lifetime");
        return Err(ErrorCode::InvalidConfig.into());
    }
    Ok(())
}
