use cosmwasm_std::{Deps, Env};

use simple_dex_std::faucet_token::{
    AllowanceResponse, BalanceResponse, ConfigResponse, FaucetCooldownResponse,
    TokenInfoResponse,
};

use crate::helpers::faucet_cooldown_remaining;
use crate::state::{ALLOWANCES, BALANCES, CONFIG, LAST_FAUCET_CLAIM, TOKEN_INFO};
use crate::ContractError;

/// Queries the balance of an address. Unknown addresses hold zero.
pub(crate) fn query_balance(deps: Deps, address: String) -> Result<BalanceResponse, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let balance = BALANCES
        .may_load(deps.storage, &address)?
        .unwrap_or_default();

    Ok(BalanceResponse { balance })
}

/// Queries the allowance `spender` has over `owner`'s tokens.
pub(crate) fn query_allowance(
    deps: Deps,
    owner: String,
    spender: String,
) -> Result<AllowanceResponse, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner, &spender))?
        .unwrap_or_default();

    Ok(AllowanceResponse { allowance })
}

/// Queries how many seconds the address must wait before it can claim from the faucet.
pub(crate) fn query_faucet_cooldown(
    deps: Deps,
    env: Env,
    address: String,
) -> Result<FaucetCooldownResponse, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    let last_claim = LAST_FAUCET_CLAIM.may_load(deps.storage, &address)?;

    Ok(FaucetCooldownResponse {
        remaining_seconds: faucet_cooldown_remaining(
            last_claim,
            env.block.time.seconds(),
            config.faucet_cooldown,
        ),
    })
}

pub(crate) fn query_token_info(deps: Deps) -> Result<TokenInfoResponse, ContractError> {
    Ok(TOKEN_INFO.load(deps.storage)?)
}

pub(crate) fn query_config(deps: Deps) -> Result<ConfigResponse, ContractError> {
    Ok(CONFIG.load(deps.storage)?)
}
