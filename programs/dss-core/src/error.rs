use anchor_lang::prelude::*;
use num_derive::FromPrimitive;
use solana_program::program_error::ProgramError;
use thiserror::Error;

/// Reasons an auction, vault or vow operation is refused.
#[error_code]
#[derive(PartialEq, Eq)]
pub enum ErrorCode {
    #[msg("Invalid Config")]
    InvalidConfig,

    #[msg("Invalid Bid State")]
    InvalidBidState,

    #[msg("Auction Not Found")]
    AuctionNotFound,

    #[msg("Auction Not Live")]
    AuctionNotLive,

    #[msg("Tend Not Supported")]
    TendNotSupported,

    #[msg("Dent Not Supported")]
    DentNotSupported,

    #[msg("Lot Not Matching")]
    LotNotMatching,

    #[msg("Bid Not Matching")]
    BidNotMatching,

    #[msg("Bid Exceeds Tab")]
    BidExceedsTab,

    #[msg("Bid Not Higher")]
    BidNotHigher,

    #[msg("Insufficient Increase")]
    InsufficientIncrease,

    #[msg("Tab Not Reached")]
    TabNotReached,

    #[msg("Lot Not Lower")]
    LotNotLower,

    #[msg("Insufficient Decrease")]
    InsufficientDecrease,

    #[msg("Auction Not Finished")]
    AuctionNotFinished,

    #[msg("MathOverflow")]
    MathOverflow,

    #[msg("Urn Is Safe")]
    UrnIsSafe,

    #[msg("Nothing To Bite")]
    NothingToBite,

    #[msg("Insufficient Surplus")]
    InsufficientSurplus,

    #[msg("Insufficient Debt")]
    InsufficientDebt,

    #[msg("Debt Outstanding")]
    DebtOutstanding,

    #[msg("Surplus Outstanding")]
    SurplusOutstanding,

    #[msg("Invalid Amount")]
    InvalidAmount,

    #[msg("Bid Already Placed")]
    BidAlreadyPlaced,
}

/// Errors raised by fixed-point arithmetic.
#[derive(Clone, Copy, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum NumericError {
    /// Operands carry a different number of fractional digits
    #[error("Fixed-point operands have mismatched fractional digits")]
    ScaleMismatch,
    /// Binary floats cannot represent decimal fractions exactly
    #[error("Binary floating-point input is not an exact decimal")]
    FloatConstruction,
    /// Divisor is zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Result does not fit the mantissa
    #[error("Math operation overflow")]
    MathOverflow,
    /// Input is not a decimal literal
    #[error("Input is not a valid decimal number")]
    InvalidNumber,
    /// Min/max over nothing
    #[error("No values were supplied")]
    EmptyInput,
}

impl NumericError {
    /// True for the precision/type mismatch class of faults.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::ScaleMismatch | Self::FloatConstruction)
    }
}

impl From<NumericError> for ProgramError {
    fn from(e: NumericError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<NumericError> for anchor_lang::error::Error {
    fn from(e: NumericError) -> Self {
        ProgramError::from(e).into()
    }
}

/// Errors raised by the auction bidding rules.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuctionError {
    /// A legality rule refused the call
    #[error("Bid rejected: {0}")]
    Rejected(ErrorCode),
    /// The bid or the auction deadline has passed; the next legal action is `deal`
    #[error("Auction expired at {now} (tic {tic}, end {end})")]
    Expired { tic: u64, end: u64, now: u64 },
    #[error(transparent)]
    Numeric(#[from] NumericError),
}

impl AuctionError {
    /// Rejection reason, if the call was refused by a legality rule.
    pub fn reason(&self) -> Option<ErrorCode> {
        match self {
            Self::Rejected(code) => Some(*code),
            _ => None,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }
}

impl From<ErrorCode> for AuctionError {
    fn from(code: ErrorCode) -> Self {
        Self::Rejected(code)
    }
}
