pub mod contract;
mod error;
pub mod helpers;
mod liquidity;
pub mod math;
mod queries;
pub mod state;
mod swap;

pub use crate::error::ContractError;
