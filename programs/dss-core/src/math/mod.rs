pub mod common;
pub mod decimal;
pub mod mantissa;
pub mod precision;

pub use common::*;
pub use decimal::*;
pub use mantissa::*;
pub use precision::*;
