use cw_storage_plus::Item;

use simple_dex_std::pool::{Config, Reserves};

pub const CONFIG: Item<Config> = Item::new("config");
/// The pool's recorded holdings of each asset. Only changed by liquidity additions and swaps.
pub const RESERVES: Item<Reserves> = Item::new("reserves");
