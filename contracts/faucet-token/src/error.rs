use cosmwasm_std::{OverflowError, StdError, Uint256};
use cw_ownable::OwnershipError;
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
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    OwnershipError(#[from] OwnershipError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("The amount must be greater than zero")]
    ZeroAmount,

    #[error("The null address can't be used as recipient or spender")]
    ZeroAddress,

    #[error("Insufficient balance: {available} available, {required} required")]
    InsufficientBalance {
        available: Uint256,
        required: Uint256,
    },

    #[error("Insufficient allowance: {allowance} allowed, {required} required")]
    InsufficientAllowance {
        allowance: Uint256,
        required: Uint256,
    },

    #[error("The faucet can be claimed again in {remaining_seconds} seconds")]
    CooldownActive { remaining_seconds: u64 },

    #[error("Invalid faucet config: {reason}")]
    InvalidFaucetConfig { reason: String },

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
