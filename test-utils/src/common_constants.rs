// Token metadata
pub const TOM_NAME: &str = "TomTheCat";
pub const TOM_SYMBOL: &str = "TOM";
pub const BEN_NAME: &str = "BenTheDog";
pub const BEN_SYMBOL: &str = "BEN";

// Decimal Constants
pub const DECIMALS_18: u8 = 18;

// Common Amounts and Balances, in base units of an 18 decimals token
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;
pub const INITIAL_SUPPLY: u128 = 10_000 * ONE_TOKEN;
pub const FAUCET_AMOUNT: u128 = 100 * ONE_TOKEN;
pub const ONE_THOUSAND: u128 = 1000;
pub const TWO_THOUSAND: u128 = 2000;
pub const ONE_MILLION: u128 = 1_000_000;

// Duration Constants
pub const FAUCET_COOLDOWN_SECONDS: u64 = 86400; // 1 day
pub const ONE_HOUR_IN_SECONDS: u64 = 3600;
