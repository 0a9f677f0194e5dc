use cosmwasm_std::{ensure, entry_point, to_json_binary};
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

use simple_dex_std::pool::{
    Config, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, Reserves, SwapDirection,
};

use crate::error::ContractError;
use crate::helpers::{validate_asset, validate_migration};
use crate::state::{CONFIG, RESERVES};
use crate::{liquidity, queries, swap};

// version info for migration info
const CONTRACT_NAME: &str = "simple-dex_pool";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let asset_a = validate_asset(deps.api, &msg.asset_a)?;
    let asset_b = validate_asset(deps.api, &msg.asset_b)?;
    ensure!(asset_a != asset_b, ContractError::IdenticalAssets);

    let config = Config { asset_a, asset_b };
    CONFIG.save(deps.storage, &config)?;

    // reserves start empty and only grow through liquidity additions
    RESERVES.save(deps.storage, &Reserves::default())?;

    Ok(Response::default().add_attributes(vec![
        ("action", "instantiate".to_string()),
        ("asset_a", config.asset_a.to_string()),
        ("asset_b", config.asset_b.to_string()),
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
        ExecuteMsg::AddLiquidity { amount_a, amount_b } => {
            liquidity::commands::add_liquidity(deps, env, info, amount_a, amount_b)
        }
        ExecuteMsg::SwapAToB {
            amount_in,
            min_amount_out,
            deadline,
        } => swap::commands::swap(
            deps,
            env,
            info,
            SwapDirection::AToB,
            amount_in,
            min_amount_out,
            deadline,
        ),
        ExecuteMsg::SwapBToA {
            amount_in,
            min_amount_out,
            deadline,
        } => swap::commands::swap(
            deps,
            env,
            info,
            SwapDirection::BToA,
            amount_in,
            min_amount_out,
            deadline,
        ),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(to_json_binary(&queries::query_config(deps)?)?),
        QueryMsg::ReserveA {} => Ok(to_json_binary(&queries::query_reserve_a(deps)?)?),
        QueryMsg::ReserveB {} => Ok(to_json_binary(&queries::query_reserve_b(deps)?)?),
        QueryMsg::Reserves {} => Ok(to_json_binary(&queries::query_reserves(deps)?)?),
        QueryMsg::Quote {
            amount_in,
            reserve_in,
            reserve_out,
        } => Ok(to_json_binary(&queries::query_quote(
            amount_in,
            reserve_in,
            reserve_out,
        )?)?),
        QueryMsg::Simulation {
            direction,
            amount_in,
        } => Ok(to_json_binary(&queries::query_simulation(
            deps, direction, amount_in,
        )?)?),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    validate_migration(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
