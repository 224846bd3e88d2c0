//! Fixed-point Wad/Ray/Rad arithmetic and the collateral, surplus and debt
//! auction rules of a multi-collateral stablecoin system.

pub mod error;
pub mod instructions;
pub mod keeper;
pub mod math;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use keeper::*;
pub use state::*;
