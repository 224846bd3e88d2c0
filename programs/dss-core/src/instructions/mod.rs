pub mod bite;
pub mod deal;
pub mod dent;
pub mod drip;
pub mod kick;
pub mod tend;
pub mod tick;
pub mod vow_auctions;

pub use bite::*;
pub use deal::*;
pub use dent::*;
pub use drip::*;
pub use kick::*;
pub use tend::*;
pub use tick::*;
pub use vow_auctions::*;
