use cosmwasm_std::{ensure, DepsMut, Env, MessageInfo, Response, Storage, Uint256};

use simple_dex_std::faucet_token::FaucetConfig;

use crate::helpers::{
    faucet_cooldown_remaining, mint_to, move_balance, validate_faucet_config, validate_recipient,
};
use crate::state::{ALLOWANCES, CONFIG, LAST_FAUCET_CLAIM};
use crate::ContractError;

/// Transfers tokens from the sender to the recipient.
pub(crate) fn transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let recipient = validate_recipient(deps.api, &recipient)?;
    ensure_amount_accepted(deps.storage, amount)?;

    move_balance(deps.storage, &info.sender, &recipient, amount)?;

    Ok(Response::default().add_attributes(vec![
        ("action", "transfer".to_string()),
        ("from", info.sender.to_string()),
        ("to", recipient.to_string()),
        ("amount", amount.to_string()),
    ]))
}

/// Sets the allowance of the spender over the sender's tokens. Overwrites any previous allowance.
pub(crate) fn approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let spender = validate_recipient(deps.api, &spender)?;

    ALLOWANCES.save(deps.storage, (&info.sender, &spender), &amount)?;

    Ok(Response::default().add_attributes(vec![
        ("action", "approve".to_string()),
        ("owner", info.sender.to_string()),
        ("spender", spender.to_string()),
        ("amount", amount.to_string()),
    ]))
}

/// Transfers tokens from the owner to the recipient, spending the allowance the owner granted
/// to the sender.
pub(crate) fn transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let recipient = validate_recipient(deps.api, &recipient)?;
    ensure_amount_accepted(deps.storage, amount)?;

    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner, &info.sender))?
        .unwrap_or_default();

    ensure!(
        allowance >= amount,
        ContractError::InsufficientAllowance {
            allowance,
            required: amount,
        }
    );

    move_balance(deps.storage, &owner, &recipient, amount)?;

    // the allowance is reduced by exactly the amount spent
    ALLOWANCES.save(
        deps.storage,
        (&owner, &info.sender),
        &allowance.checked_sub(amount)?,
    )?;

    Ok(Response::default().add_attributes(vec![
        ("action", "transfer_from".to_string()),
        ("from", owner.to_string()),
        ("to", recipient.to_string()),
        ("by", info.sender.to_string()),
        ("amount", amount.to_string()),
    ]))
}

/// Mints new tokens to the recipient. Only the owner can mint.
pub(crate) fn mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint256,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)
        .map_err(|_| ContractError::Unauthorized)?;

    let recipient = validate_recipient(deps.api, &recipient)?;
    let total_supply = mint_to(deps.storage, &recipient, amount)?;

    Ok(Response::default().add_attributes(vec![
        ("action", "mint".to_string()),
        ("to", recipient.to_string()),
        ("amount", amount.to_string()),
        ("total_supply", total_supply.to_string()),
    ]))
}

/// Credits the sender with the faucet amount, as long as the sender's cooldown has elapsed.
pub(crate) fn faucet(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let now = env.block.time.seconds();

    let last_claim = LAST_FAUCET_CLAIM.may_load(deps.storage, &info.sender)?;

    let remaining_seconds = faucet_cooldown_remaining(last_claim, now, config.faucet_cooldown);
    ensure!(
        remaining_seconds == 0,
        ContractError::CooldownActive { remaining_seconds }
    );

    let total_supply = mint_to(deps.storage, &info.sender, config.faucet_amount)?;
    LAST_FAUCET_CLAIM.save(deps.storage, &info.sender, &now)?;

    Ok(Response::default().add_attributes(vec![
        ("action", "faucet".to_string()),
        ("to", info.sender.to_string()),
        ("amount", config.faucet_amount.to_string()),
        ("total_supply", total_supply.to_string()),
        (
            "next_claim_at",
            now.saturating_add(config.faucet_cooldown).to_string(),
        ),
    ]))
}

/// Updates the configuration of the contract. Only the owner can update it.
pub(crate) fn update_config(
    deps: DepsMut,
    info: MessageInfo,
    faucet_amount: Option<Uint256>,
    faucet_cooldown: Option<u64>,
    reject_zero_transfers: Option<bool>,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)
        .map_err(|_| ContractError::Unauthorized)?;

    let mut config = CONFIG.load(deps.storage)?;

    let faucet_config = FaucetConfig {
        amount: faucet_amount.unwrap_or(config.faucet_amount),
        cooldown: faucet_cooldown.unwrap_or(config.faucet_cooldown),
    };
    validate_faucet_config(&faucet_config)?;

    config.faucet_amount = faucet_config.amount;
    config.faucet_cooldown = faucet_config.cooldown;

    if let Some(reject_zero_transfers) = reject_zero_transfers {
        config.reject_zero_transfers = reject_zero_transfers;
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default().add_attributes(vec![
        ("action", "update_config".to_string()),
        ("config", config.to_string()),
    ]))
}

/// Zero-amount transfers are a no-op unless the token is configured to reject them.
fn ensure_amount_accepted(storage: &dyn Storage, amount: Uint256) -> Result<(), ContractError> {
    if amount.is_zero() {
        let config = CONFIG.load(storage)?;
        ensure!(!config.reject_zero_transfers, ContractError::ZeroAmount);
    }

    Ok(())
}
