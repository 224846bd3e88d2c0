use crate::error::ErrorCode;
use crate::math::{Rad, Ray, TryAdd, TryMul, TrySub};
use crate::state::*;
use crate::utils::rpow;
use anchor_lang::prelude::*;

/// Accrue stability fees on one collateral type since `rho`.
///
/// The rate grows by `(base + duty)^(now - rho)` and the new debt is
/// credited to the vow as surplus. Returns the surplus added.
pub fn handle_drip(base: Ray, jug_ilk: &mut JugIlk, ilk: &mut Ilk, vow: &mut Vow, now: u64) -> Result<Rad> {
    msg!("Instruction: drip");
    if now < jug_ilk.rho {
        msg!("Fees were collected in the future, which is impossible");
        return Err(ErrorCode::InvalidConfig.into());
    }

    let factor = rpow(base.try_add(jug_ilk.duty)?, now - jug_ilk.rho)?;
    let rate = factor.try_mul(ilk.rate)?;
    let delta = rate.try_sub(ilk.rate)?;
    let accrued = Rad::from_product(&ilk.art, &delta)?;

    ilk.rate = rate;
    vow.joy = vow.joy.try_add(accrued)?;
    jug_ilk.rho = now;
    Ok(accrued)
}
