use cosmwasm_std::{ensure, Uint256};

use crate::error::ContractError;

/// Computes the output of a constant-product swap without fees:
///
/// `amount_out = amount_in * reserve_out / (reserve_in + amount_in)`
///
/// The division floors, so the product of the reserves never decreases after a swap. The
/// intermediate product is computed with 512 bits, so it can't overflow.
pub fn quote(
    amount_in: Uint256,
    reserve_in: Uint256,
    reserve_out: Uint256,
) -> Result<Uint256, ContractError> {
    ensure!(
        !reserve_in.is_zero() && !reserve_out.is_zero(),
        ContractError::InsufficientLiquidity
    );

    let denominator = reserve_in.checked_add(amount_in)?;

    Ok(amount_in.checked_multiply_ratio(reserve_out, denominator)?)
}
