use cosmwasm_std::{ensure, DepsMut, Env, MessageInfo, Response, Uint256};

use crate::helpers::transfer_from_msg;
use crate::state::{CONFIG, RESERVES};
use crate::ContractError;

/// Pulls both assets from the sender and adds them straight to the reserves. There is no ratio
/// check and no share is issued, so whatever is provided stays in the pool.
pub(crate) fn add_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount_a: Uint256,
    amount_b: Uint256,
) -> Result<Response, ContractError> {
    ensure!(
        !amount_a.is_zero() && !amount_b.is_zero(),
        ContractError::ZeroAmount
    );

    let config = CONFIG.load(deps.storage)?;

    let mut reserves = RESERVES.load(deps.storage)?;
    reserves.reserve_a = reserves.reserve_a.checked_add(amount_a)?;
    reserves.reserve_b = reserves.reserve_b.checked_add(amount_b)?;
    RESERVES.save(deps.storage, &reserves)?;

    let messages = vec![
        transfer_from_msg(
            &config.asset_a,
            &info.sender,
            &env.contract.address,
            amount_a,
        )?,
        transfer_from_msg(
            &config.asset_b,
            &info.sender,
            &env.contract.address,
            amount_b,
        )?,
    ];

    Ok(Response::default()
        .add_messages(messages)
        .add_attributes(vec![
            ("action", "add_liquidity".to_string()),
            ("sender", info.sender.to_string()),
            ("amount_a", amount_a.to_string()),
            ("amount_b", amount_b.to_string()),
            ("reserves", reserves.to_string()),
        ]))
}
