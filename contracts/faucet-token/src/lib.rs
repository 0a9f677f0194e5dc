mod commands;
pub mod contract;
mod error;
pub mod helpers;
mod queries;
pub mod state;

pub use crate::error::ContractError;
