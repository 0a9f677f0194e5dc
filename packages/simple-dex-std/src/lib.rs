pub mod common;
pub mod constants;
pub mod faucet_token;
pub mod pool;
