use cosmwasm_std::{CheckedMultiplyRatioError, OverflowError, StdError, Uint256};
use cw_utils::PaymentError;
use semver::Version;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Semver parsing error: {0}")]
    SemVer(String),

    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("{0}")]
    CheckedMultiplyRatioError(#[from] CheckedMultiplyRatioError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("The amount must be greater than zero")]
    ZeroAmount,

    #[error("The pool can't trade an asset against itself")]
    IdenticalAssets,

    #[error("The null address can't be used as a pool asset")]
    ZeroAddress,

    #[error("Insufficient liquidity: both reserves must be greater than zero")]
    InsufficientLiquidity,

    #[error("The swap would return {amount_out}, less than the minimum of {min_amount_out}")]
    InsufficientAmountOut {
        amount_out: Uint256,
        min_amount_out: Uint256,
    },

    #[error("The swap deadline {deadline} has passed, the current time is {now}")]
    DeadlineExceeded { deadline: u64, now: u64 },

    #[error("Attempt to migrate contract {actual}, expected {expected}")]
    InvalidContractName { expected: String, actual: String },

    #[error("Attempt to migrate to version {new_version}, but contract is on a higher version {current_version}")]
    MigrateInvalidVersion {
        new_version: Version,
        current_version: Version,
    },
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
