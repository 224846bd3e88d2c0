pub mod auction_house;
pub mod auction_params;
pub mod bid;
pub mod jug;
pub mod urn;
pub mod vow;

pub use auction_house::*;
pub use auction_params::*;
pub use bid::*;
pub use jug::*;
pub use urn::*;
pub use vow::*;
