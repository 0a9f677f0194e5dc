use cosmwasm_std::{Addr, Uint256};
use cw_storage_plus::{Item, Map};

use simple_dex_std::faucet_token::{Config, TokenInfo};

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");
pub const CONFIG: Item<Config> = Item::new("config");

/// Balances by holder
pub const BALANCES: Map<&Addr, Uint256> = Map::new("balances");
/// Allowances by (owner, spender)
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint256> = Map::new("allowances");
/// Unix time in seconds of the last successful faucet claim by address
pub const LAST_FAUCET_CLAIM: Map<&Addr, u64> = Map::new("last_faucet_claim");
