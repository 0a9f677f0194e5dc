use cosmwasm_std::{entry_point, to_json_binary};
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

use simple_dex_std::faucet_token::{
    Config, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, TokenInfo,
};

use crate::error::ContractError;
use crate::helpers::{default_faucet_config, validate_faucet_config, validate_migration};
use crate::state::{BALANCES, CONFIG, TOKEN_INFO};
use crate::{commands, queries};

// version info for migration info
const CONTRACT_NAME: &str = "simple-dex_faucet-token";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // the default faucet hands out the same number of whole tokens whatever the decimals
    let faucet_config = match msg.faucet_config {
        Some(faucet_config) => faucet_config,
        None => default_faucet_config(msg.decimals)?,
    };
    validate_faucet_config(&faucet_config)?;

    // the instantiator owns the token and receives the initial supply
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(info.sender.as_str()))?;

    let token_info = TokenInfo {
        name: msg.name,
        symbol: msg.symbol,
        decimals: msg.decimals,
        total_supply: msg.initial_supply,
    };
    TOKEN_INFO.save(deps.storage, &token_info)?;
    BALANCES.save(deps.storage, &info.sender, &msg.initial_supply)?;

    let config = Config {
        faucet_amount: faucet_config.amount,
        faucet_cooldown: faucet_config.cooldown,
        reject_zero_transfers: false,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default().add_attributes(vec![
        ("action", "instantiate".to_string()),
        ("owner", info.sender.to_string()),
        ("token_info", token_info.to_string()),
        ("config", config.to_string()),
    ]))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    cw_utils::nonpayable(&info)?;

    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            commands::transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::Approve { spender, amount } => commands::approve(deps, info, spender, amount),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => commands::transfer_from(deps, info, owner, recipient, amount),
        ExecuteMsg::Mint { recipient, amount } => commands::mint(deps, info, recipient, amount),
        ExecuteMsg::Faucet {} => commands::faucet(deps, env, info),
        ExecuteMsg::UpdateConfig {
            faucet_amount,
            faucet_cooldown,
            reject_zero_transfers,
        } => commands::update_config(
            deps,
            info,
            faucet_amount,
            faucet_cooldown,
            reject_zero_transfers,
        ),
        ExecuteMsg::UpdateOwnership(action) => {
            let ownership =
                cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
            Ok(Response::default()
                .add_attribute("action", "update_ownership")
                .add_attributes(ownership.into_attributes()))
        }
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Balance { address } => {
            Ok(to_json_binary(&queries::query_balance(deps, address)?)?)
        }
        QueryMsg::Allowance { owner, spender } => Ok(to_json_binary(
            &queries::query_allowance(deps, owner, spender)?,
        )?),
        QueryMsg::FaucetCooldown { address } => Ok(to_json_binary(
            &queries::query_faucet_cooldown(deps, env, address)?,
        )?),
        QueryMsg::TokenInfo {} => Ok(to_json_binary(&queries::query_token_info(deps)?)?),
        QueryMsg::Config {} => Ok(to_json_binary(&queries::query_config(deps)?)?),
        QueryMsg::Ownership {} => Ok(to_json_binary(&cw_ownable::get_ownership(
            deps.storage,
        )?)?),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    validate_migration(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
