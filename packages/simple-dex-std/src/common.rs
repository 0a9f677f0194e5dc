use cosmwasm_std::{Addr, Api, StdResult};

/// Returns true if the given address is the null address, i.e. empty or whitespace only.
pub fn is_null_address(address: &str) -> bool {
    address.trim().is_empty()
}

/// Validates a [String] address, returning [None] if it is the null address.
pub fn validate_non_null_addr(api: &dyn Api, unvalidated: &str) -> StdResult<Option<Addr>> {
    if is_null_address(unvalidated) {
        return Ok(None);
    }

    api.addr_validate(unvalidated).map(Some)
}
