use cosmwasm_std::Uint256;

/// Decimal places every Simple DEX token amount is scaled by.
pub const DECIMALS: u8 = 18;

/// One whole token, i.e. 10^18 base units.
pub const ONE_TOKEN: Uint256 = Uint256::from_u128(1_000_000_000_000_000_000u128);

/// Whole tokens credited by a single faucet claim, whatever the token decimals.
pub const FAUCET_WHOLE_TOKENS: u128 = 100;

/// Amount credited by a single faucet claim of an 18 decimals token: 100 whole tokens.
pub const FAUCET_AMOUNT: Uint256 = Uint256::from_u128(100_000_000_000_000_000_000u128);

/// Seconds an address has to wait between two faucet claims: 24 hours.
pub const FAUCET_COOLDOWN: u64 = 86_400;
