use cosmwasm_std::{Deps, Uint256};

use simple_dex_std::pool::{
    ConfigResponse, QuoteResponse, ReserveResponse, ReservesResponse, SimulationResponse,
    SwapDirection,
};

use crate::math::quote;
use crate::state::{CONFIG, RESERVES};
use crate::ContractError;

pub(crate) fn query_config(deps: Deps) -> Result<ConfigResponse, ContractError> {
    Ok(CONFIG.load(deps.storage)?)
}

pub(crate) fn query_reserve_a(deps: Deps) -> Result<ReserveResponse, ContractError> {
    Ok(ReserveResponse {
        reserve: RESERVES.load(deps.storage)?.reserve_a,
    })
}

pub(crate) fn query_reserve_b(deps: Deps) -> Result<ReserveResponse, ContractError> {
    Ok(ReserveResponse {
        reserve: RESERVES.load(deps.storage)?.reserve_b,
    })
}

pub(crate) fn query_reserves(deps: Deps) -> Result<ReservesResponse, ContractError> {
    Ok(RESERVES.load(deps.storage)?)
}

/// Quotes a swap against the given reserves. Doesn't touch the pool state.
pub(crate) fn query_quote(
    amount_in: Uint256,
    reserve_in: Uint256,
    reserve_out: Uint256,
) -> Result<QuoteResponse, ContractError> {
    Ok(QuoteResponse {
        amount_out: quote(amount_in, reserve_in, reserve_out)?,
    })
}

/// Simulates a swap against the current reserves of the pool.
pub(crate) fn query_simulation(
    deps: Deps,
    direction: SwapDirection,
    amount_in: Uint256,
) -> Result<SimulationResponse, ContractError> {
    let reserves = RESERVES.load(deps.storage)?;
    let (reserve_in, reserve_out) = reserves.oriented(direction);

    Ok(SimulationResponse {
        amount_out: quote(amount_in, reserve_in, reserve_out)?,
        reserve_in,
        reserve_out,
    })
}
