use std::fmt::{Display, Formatter};

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint256;
use cw_ownable::{cw_ownable_execute, cw_ownable_query};

use crate::constants::{FAUCET_AMOUNT, FAUCET_COOLDOWN};

/// The instantiation message
#[cw_serde]
pub struct InstantiateMsg {
    /// The token name, i.e. "TomTheCat".
    pub name: String,
    /// The token symbol, i.e. "TOM".
    pub symbol: String,
    /// The number of decimal places the token amounts are scaled by.
    pub decimals: u8,
    /// The supply credited to the instantiator, which becomes the token owner.
    pub initial_supply: Uint256,
    /// The faucet parameters. Defaults to 100 whole tokens, scaled by `decimals`, once a day.
    pub faucet_config: Option<FaucetConfig>,
}

/// Parameters of the self-service faucet.
#[cw_serde]
pub struct FaucetConfig {
    /// The amount credited per claim.
    pub amount: Uint256,
    /// The number of seconds an address must wait between claims.
    pub cooldown: u64,
}

impl Default for FaucetConfig {
    fn default() -> Self {
        Self {
            amount: FAUCET_AMOUNT,
            cooldown: FAUCET_COOLDOWN,
        }
    }
}

/// The execution messages
#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Moves `amount` tokens from the sender to `recipient`.
    Transfer { recipient: String, amount: Uint256 },
    /// Sets the allowance of `spender` over the sender's tokens to `amount`,
    /// overwriting any previous allowance.
    Approve { spender: String, amount: Uint256 },
    /// Moves `amount` tokens from `owner` to `recipient` using the allowance
    /// granted to the sender.
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint256,
    },
    /// Mints new tokens to `recipient`. Only the owner can execute this.
    Mint { recipient: String, amount: Uint256 },
    /// Credits the sender with the faucet amount, at most once per cooldown period.
    Faucet {},
    /// Updates the token configuration. Only the owner can execute this.
    UpdateConfig {
        faucet_amount: Option<Uint256>,
        faucet_cooldown: Option<u64>,
        reject_zero_transfers: Option<bool>,
    },
}

/// The query messages
#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Retrieves the balance of the given address.
    #[returns(BalanceResponse)]
    Balance { address: String },
    /// Retrieves the amount `spender` can still move out of `owner`'s balance.
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    /// Retrieves the seconds the given address has to wait until it can claim from the faucet.
    #[returns(FaucetCooldownResponse)]
    FaucetCooldown { address: String },
    /// Retrieves the token metadata and total supply.
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    /// Retrieves the configuration of the contract.
    #[returns(ConfigResponse)]
    Config {},
}

/// The migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Token metadata and supply
#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Sum of all balances.
    pub total_supply: Uint256,
}

impl Display for TokenInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "name: {}, symbol: {}, decimals: {}, total_supply: {}",
            self.name, self.symbol, self.decimals, self.total_supply
        )
    }
}

pub type TokenInfoResponse = TokenInfo;

/// The token configuration
#[cw_serde]
pub struct Config {
    /// The amount credited per faucet claim.
    pub faucet_amount: Uint256,
    /// Seconds between two faucet claims of the same address.
    pub faucet_cooldown: u64,
    /// Whether zero-amount transfers are rejected instead of accepted as a no-op.
    pub reject_zero_transfers: bool,
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "faucet_amount: {}, faucet_cooldown: {}, reject_zero_transfers: {}",
            self.faucet_amount, self.faucet_cooldown, self.reject_zero_transfers
        )
    }
}

pub type ConfigResponse = Config;

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint256,
}

#[cw_serde]
pub struct AllowanceResponse {
    pub allowance: Uint256,
}

#[cw_serde]
pub struct FaucetCooldownResponse {
    /// Zero when the address can claim right away.
    pub remaining_seconds: u64,
}
