use cosmwasm_std::{ensure, Addr, Api, Storage, Uint256};
use semver::Version;

use simple_dex_std::common::validate_non_null_addr;
use simple_dex_std::constants::{FAUCET_COOLDOWN, FAUCET_WHOLE_TOKENS};
use simple_dex_std::faucet_token::FaucetConfig;

use crate::state::{BALANCES, TOKEN_INFO};
use crate::ContractError;

/// Validates the given address, failing with [ContractError::ZeroAddress] if it's the null address.
pub fn validate_recipient(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    validate_non_null_addr(api, address)?.ok_or(ContractError::ZeroAddress)
}

/// Returns the default faucet parameters of a token with the given decimals, i.e.
/// [FAUCET_WHOLE_TOKENS] whole tokens per [FAUCET_COOLDOWN].
pub fn default_faucet_config(decimals: u8) -> Result<FaucetConfig, ContractError> {
    let one_token = Uint256::from(10u128).checked_pow(u32::from(decimals))?;

    Ok(FaucetConfig {
        amount: one_token.checked_mul(Uint256::from(FAUCET_WHOLE_TOKENS))?,
        cooldown: FAUCET_COOLDOWN,
    })
}

/// Validates the faucet parameters.
pub fn validate_faucet_config(faucet_config: &FaucetConfig) -> Result<(), ContractError> {
    ensure!(
        !faucet_config.amount.is_zero(),
        ContractError::InvalidFaucetConfig {
            reason: "faucet amount must be greater than zero".to_string(),
        }
    );

    Ok(())
}

/// Returns the seconds left until an address whose last claim happened at `last_claim` can
/// claim from the faucet again. Zero means the address is eligible, which is always the case
/// for an address that never claimed.
pub fn faucet_cooldown_remaining(last_claim: Option<u64>, now: u64, cooldown: u64) -> u64 {
    match last_claim {
        Some(last_claim) => cooldown.saturating_sub(now.saturating_sub(last_claim)),
        None => 0,
    }
}

/// Moves `amount` from `from` to `to`, failing if `from` doesn't hold enough tokens.
pub fn move_balance(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: Uint256,
) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Ok(());
    }

    debit(storage, from, amount)?;
    credit(storage, to, amount)
}

/// Creates `amount` new tokens in `recipient`'s balance, increasing the total supply.
pub fn mint_to(
    storage: &mut dyn Storage,
    recipient: &Addr,
    amount: Uint256,
) -> Result<Uint256, ContractError> {
    let mut token_info = TOKEN_INFO.load(storage)?;
    token_info.total_supply = token_info.total_supply.checked_add(amount)?;
    TOKEN_INFO.save(storage, &token_info)?;

    credit(storage, recipient, amount)?;

    Ok(token_info.total_supply)
}

fn debit(storage: &mut dyn Storage, address: &Addr, amount: Uint256) -> Result<(), ContractError> {
    let balance = BALANCES.may_load(storage, address)?.unwrap_or_default();

    ensure!(
        balance >= amount,
        ContractError::InsufficientBalance {
            available: balance,
            required: amount,
        }
    );

    BALANCES.save(storage, address, &(balance - amount))?;

    Ok(())
}

fn credit(storage: &mut dyn Storage, address: &Addr, amount: Uint256) -> Result<(), ContractError> {
    BALANCES.update(storage, address, |balance| -> Result<_, ContractError> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;

    Ok(())
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
