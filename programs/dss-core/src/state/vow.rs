use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;
use std::collections::BTreeMap;

use crate::error::ErrorCode;
use crate::math::{Rad, TryAdd, TrySub, Wad};

/// Sizes of the auctions the vow starts
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VowConfig {
    /// Surplus sold per flap
    pub bump: Rad,
    /// Surplus kept back before any flap
    pub hump: Rad,
    /// Debt covered per flop, the fixed flop bid
    pub sump: Rad,
    /// Initial flop lot
    pub dump: Wad,
    /// Seconds queued debt waits before it can be flogged
    pub wait: u64,
}

/// Balance sheet of the system surplus/debt buffer
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Vow {
    pub config: VowConfig,
    /// Surplus held
    pub joy: Rad,
    /// Bad debt held
    pub awe: Rad,
    /// Queued debt
    pub sin: Rad,
    /// Debt on auction
    pub ash: Rad,
    /// Queued debt by the time it was queued
    pub sin_of: BTreeMap<u64, Rad>,
}

impl Vow {
    pub fn new(config: VowConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Debt neither queued nor on auction
    pub fn woe(&self) -> Result<Rad> {
        Ok(self.awe.try_sub(self.sin)?.try_sub(self.ash)?)
    }

    /// Queue `tab` of bad debt received at `era`
    pub fn fess(&mut self, tab: Rad, era: u64) -> Result<()> {
        let queued = self.sin_of.get(&era).copied().unwrap_or_default();
        self.sin_of.insert(era, queued.try_add(tab)?);
        self.sin = self.sin.try_add(tab)?;
        self.awe = self.awe.try_add(tab)?;
        Ok(())
    }

    /// Release the debt queued at `era`
    pub fn flog(&mut self, era: u64, now: u64) -> Result<Rad> {
        if era.saturating_add(self.config.wait) > now {
            msg!("Queued debt is still waiting");
            return Err(ErrorCode::InsufficientDebt.into());
        }
        let queued = self.sin_of.remove(&era).unwrap_or_default();
        self.sin = self.sin.try_sub(queued)?;
        Ok(queued)
    }

    pub fn validate_heal(&self, rad: Rad) -> Result<()> {
        if rad.is_negative() || rad.is_zero() {
            msg!("Heal amount must be positive");
            return Err(ErrorCode::InvalidAmount.into());
        }
        if rad > self.joy {
            msg!("Heal amount exceeds the surplus");
            return Err(ErrorCode::InsufficientSurplus.into());
        }
        if rad > self.woe()? {
            msg!("Heal amount exceeds the unbacked debt");
            return Err(ErrorCode::InsufficientDebt.into());
        }
        Ok(())
    }

    /// Cancel `rad` of surplus against the same amount of debt
    pub fn heal(&mut self, rad: Rad) -> Result<()> {
        self.validate_heal(rad)?;
        self.joy = self.joy.try_sub(rad)?;
        self.awe = self.awe.try_sub(rad)?;
        Ok(())
    }

    /// Cancel `rad` of surplus against debt already on auction
    pub fn kiss(&mut self, rad: Rad) -> Result<()> {
        if rad > self.ash {
            msg!("Kiss amount exceeds the debt on auction");
            return Err(ErrorCode::InsufficientDebt.into());
        }
        if rad > self.joy {
            msg!("Kiss amount exceeds the surplus");
            return Err(ErrorCode::InsufficientSurplus.into());
        }
        self.ash = self.ash.try_sub(rad)?;
        self.joy = self.joy.try_sub(rad)?;
        self.awe = self.awe.try_sub(rad)?;
        Ok(())
    }

    /// Surplus must cover debt, lot and buffer, with no debt left unbacked
    pub fn validate_flap(&self) -> Result<()> {
        let needed = self
            .awe
            .try_add(self.config.bump)?
            .try_add(self.config.hump)?;
        if self.joy < needed {
            msg!("Surplus below debt + bump + hump");
            return Err(ErrorCode::InsufficientSurplus.into());
        }
        if !self.woe()?.is_zero() {
            msg!("Unbacked debt must be healed before a surplus auction");
            return Err(ErrorCode::DebtOutstanding.into());
        }
        Ok(())
    }

    /// Unbacked debt must reach one flop, with no surplus left to heal it
    pub fn validate_flop(&self) -> Result<()> {
        if self.woe()? < self.config.sump {
            msg!("Unbacked debt below sump");
            return Err(ErrorCode::InsufficientDebt.into());
        }
        if !self.joy.is_zero() {
            msg!("Surplus must be used to heal before a debt auction");
            return Err(ErrorCode::SurplusOutstanding.into());
        }
        Ok(())
    }
}
