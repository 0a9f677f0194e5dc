use cosmwasm_std::{ensure, wasm_execute, Addr, Api, CosmosMsg, Storage, Uint256};
use semver::Version;

use simple_dex_std::common::validate_non_null_addr;
use simple_dex_std::faucet_token;

use crate::ContractError;

/// Validates the address of a pool asset, failing with [ContractError::ZeroAddress] if it's the
/// null address.
pub fn validate_asset(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    validate_non_null_addr(api, address)?.ok_or(ContractError::ZeroAddress)
}

/// Fails with [ContractError::DeadlineExceeded] if `now` is past `deadline`. A swap submitted
/// exactly at the deadline is still valid.
pub fn assert_deadline(deadline: u64, now: u64) -> Result<(), ContractError> {
    ensure!(now <= deadline, ContractError::DeadlineExceeded { deadline, now });

    Ok(())
}

/// Creates the message pulling `amount` of `token` from `owner` into the pool. Fails on the token
/// side if the pool's allowance or the owner's balance falls short.
pub fn transfer_from_msg(
    token: &Addr,
    owner: &Addr,
    pool: &Addr,
    amount: Uint256,
) -> Result<CosmosMsg, ContractError> {
    Ok(wasm_execute(
        token,
        &faucet_token::ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: pool.to_string(),
            amount,
        },
        vec![],
    )?
    .into())
}

/// Creates the message sending `amount` of `token` from the pool to `recipient`.
pub fn transfer_msg(
    token: &Addr,
    recipient: &Addr,
    amount: Uint256,
) -> Result<CosmosMsg, ContractError> {
    Ok(wasm_execute(
        token,
        &faucet_token::ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        },
        vec![],
    )?
    .into())
}

/// Validates a migration, i.e. the stored contract name matches and the version increases.
pub fn validate_migration(
    storage: &dyn Storage,
    contract_name: &str,
    contract_version: &str,
) -> Result<(), ContractError> {
    let stored = cw2::get_contract_version(storage)?;

    ensure!(
        stored.contract == contract_name,
        ContractError::InvalidContractName {
            expected: contract_name.to_string(),
            actual: stored.contract,
        }
    );

    let current_version: Version = stored.version.parse()?;
    let new_version: Version = contract_version.parse()?;

    ensure!(
        current_version < new_version,
        ContractError::MigrateInvalidVersion {
            new_version,
            current_version,
        }
    );

    Ok(())
}
