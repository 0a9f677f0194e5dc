use cosmwasm_std::{ensure, DepsMut, Env, MessageInfo, Response, Uint256};

use simple_dex_std::pool::SwapDirection;

use crate::helpers::{assert_deadline, transfer_from_msg, transfer_msg};
use crate::state::CONFIG;
use crate::ContractError;

use super::perform_swap::perform_swap;

/// Swaps `amount_in` of one asset for the other. The input is pulled from the sender, who must
/// have approved the pool beforehand, and the output is sent back to the sender.
pub(crate) fn swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    direction: SwapDirection,
    amount_in: Uint256,
    min_amount_out: Uint256,
    deadline: u64,
) -> Result<Response, ContractError> {
    assert_deadline(deadline, env.block.time.seconds())?;
    ensure!(!amount_in.is_zero(), ContractError::ZeroAmount);

    let config = CONFIG.load(deps.storage)?;
    let (asset_in, asset_out) = match direction {
        SwapDirection::AToB => (config.asset_a, config.asset_b),
        SwapDirection::BToA => (config.asset_b, config.asset_a),
    };

    let swap_result = perform_swap(deps, direction, amount_in, min_amount_out)?;

    // the reserves are already committed, so the transfers run in the same transaction and
    // revert it as a whole if either fails
    let mut messages = vec![transfer_from_msg(
        &asset_in,
        &info.sender,
        &env.contract.address,
        amount_in,
    )?];

    if !swap_result.amount_out.is_zero() {
        messages.push(transfer_msg(
            &asset_out,
            &info.sender,
            swap_result.amount_out,
        )?);
    }

    Ok(Response::default()
        .add_messages(messages)
        .add_attributes(vec![
            ("action", "swap".to_string()),
            ("direction", direction.to_string()),
            ("sender", info.sender.to_string()),
            ("asset_in", asset_in.to_string()),
            ("asset_out", asset_out.to_string()),
            ("amount_in", amount_in.to_string()),
            ("amount_out", swap_result.amount_out.to_string()),
            ("min_amount_out", min_amount_out.to_string()),
            ("reserves", swap_result.reserves.to_string()),
        ]))
}
