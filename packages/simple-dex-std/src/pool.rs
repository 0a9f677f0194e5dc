use std::fmt::{Display, Formatter};

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint256};

/// The instantiation message
#[cw_serde]
pub struct InstantiateMsg {
    /// The address of the token contract used as asset A.
    pub asset_a: String,
    /// The address of the token contract used as asset B. Must differ from `asset_a`.
    pub asset_b: String,
}

/// The execution messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Pulls `amount_a` of asset A and `amount_b` of asset B from the sender and adds them to
    /// the reserves. The pool must have been approved for both amounts beforehand.
    AddLiquidity {
        amount_a: Uint256,
        amount_b: Uint256,
    },
    /// Swaps `amount_in` of asset A for asset B.
    SwapAToB {
        amount_in: Uint256,
        /// The swap fails if it would return less than this.
        min_amount_out: Uint256,
        /// Unix time in seconds after which the swap is rejected.
        deadline: u64,
    },
    /// Swaps `amount_in` of asset B for asset A.
    SwapBToA {
        amount_in: Uint256,
        /// The swap fails if it would return less than this.
        min_amount_out: Uint256,
        /// Unix time in seconds after which the swap is rejected.
        deadline: u64,
    },
}

/// The query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Retrieves the configuration of the pool, i.e. the addresses of both assets.
    #[returns(ConfigResponse)]
    Config {},
    /// Retrieves the reserve of asset A.
    #[returns(ReserveResponse)]
    ReserveA {},
    /// Retrieves the reserve of asset B.
    #[returns(ReserveResponse)]
    ReserveB {},
    /// Retrieves both reserves.
    #[returns(ReservesResponse)]
    Reserves {},
    /// Computes the output of a swap against the given reserves. Doesn't read the pool state.
    #[returns(QuoteResponse)]
    Quote {
        amount_in: Uint256,
        reserve_in: Uint256,
        reserve_out: Uint256,
    },
    /// Simulates a swap against the current reserves of the pool.
    #[returns(SimulationResponse)]
    Simulation {
        direction: SwapDirection,
        amount_in: Uint256,
    },
}

/// The migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// The pool configuration
#[cw_serde]
pub struct Config {
    /// The token contract of asset A.
    pub asset_a: Addr,
    /// The token contract of asset B.
    pub asset_b: Addr,
}

pub type ConfigResponse = Config;

/// The direction of a swap.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum SwapDirection {
    /// Asset A in, asset B out.
    AToB,
    /// Asset B in, asset A out.
    BToA,
}

impl Display for SwapDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapDirection::AToB => write!(f, "a_to_b"),
            SwapDirection::BToA => write!(f, "b_to_a"),
        }
    }
}

/// The balances of both assets held by the pool.
#[cw_serde]
#[derive(Default)]
pub struct Reserves {
    pub reserve_a: Uint256,
    pub reserve_b: Uint256,
}

impl Reserves {
    /// Returns the `(reserve_in, reserve_out)` pair for a swap in the given direction.
    pub fn oriented(&self, direction: SwapDirection) -> (Uint256, Uint256) {
        match direction {
            SwapDirection::AToB => (self.reserve_a, self.reserve_b),
            SwapDirection::BToA => (self.reserve_b, self.reserve_a),
        }
    }
}

impl Display for Reserves {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.reserve_a, self.reserve_b)
    }
}

pub type ReservesResponse = Reserves;

#[cw_serde]
pub struct ReserveResponse {
    pub reserve: Uint256,
}

#[cw_serde]
pub struct QuoteResponse {
    pub amount_out: Uint256,
}

/// The response of a swap simulation
#[cw_serde]
pub struct SimulationResponse {
    /// The amount the swap would return.
    pub amount_out: Uint256,
    /// The reserve of the input asset the quote was computed against.
    pub reserve_in: Uint256,
    /// The reserve of the output asset the quote was computed against.
    pub reserve_out: Uint256,
}
