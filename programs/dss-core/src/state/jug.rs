use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;

use crate::math::Ray;

/// Stability fee settings of one collateral type
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JugIlk {
    /// Per-second fee on top of the base rate
    pub duty: Ray,
    /// Last time fees were collected
    pub rho: u64,
}
