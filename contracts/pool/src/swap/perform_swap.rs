use cosmwasm_std::{ensure, DepsMut, Uint256};

use simple_dex_std::pool::{Reserves, SwapDirection};

use crate::math::quote;
use crate::state::RESERVES;
use crate::ContractError;

#[derive(Debug)]
pub struct SwapResult {
    /// The amount of the output asset that should be sent to the trader.
    pub amount_out: Uint256,
    /// The reserves after the swap.
    pub reserves: Reserves,
}

/// Quotes a swap of `amount_in` in the given direction against the current reserves and, if
/// the slippage guard holds, commits the new reserves.
///
/// The caller _must_ settle the custody transfers described by the [SwapResult] in the same
/// transaction, otherwise the reserves no longer match the pool's token balances.
pub fn perform_swap(
    deps: DepsMut,
    direction: SwapDirection,
    amount_in: Uint256,
    min_amount_out: Uint256,
) -> Result<SwapResult, ContractError> {
    let mut reserves = RESERVES.load(deps.storage)?;
    let (reserve_in, reserve_out) = reserves.oriented(direction);

    let amount_out = quote(amount_in, reserve_in, reserve_out)?;

    ensure!(
        amount_out >= min_amount_out,
        ContractError::InsufficientAmountOut {
            amount_out,
            min_amount_out,
        }
    );

    // State changes to the pool reserves
    {
        let reserve_in = reserve_in.checked_add(amount_in)?;
        let reserve_out = reserve_out.checked_sub(amount_out)?;

        match direction {
            SwapDirection::AToB => {
                reserves.reserve_a = reserve_in;
                reserves.reserve_b = reserve_out;
            }
            SwapDirection::BToA => {
                reserves.reserve_b = reserve_in;
                reserves.reserve_a = reserve_out;
            }
        }

        RESERVES.save(deps.storage, &reserves)?;
    }

    Ok(SwapResult {
        amount_out,
        reserves,
    })
}
