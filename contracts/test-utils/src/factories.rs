//! Factory functions for creating test contracts.
//!
//! These functions simplify the creation of lockup and token contracts for
//! testing.

use soroban_sdk::{token, Address, Env, String};
use token_lockup::{TokenLockupContract, TokenLockupContractClient};

/// Creates a token contract for testing.
///
/// # Arguments
/// * `env` - The contract environment
/// * `admin` - The admin address for the token
///
/// # Returns
/// A tuple containing:
/// - Token address
/// - Token client
/// - Token admin client
///
/// # Example
/// ```rust,no_run
/// # use soroban_sdk::{testutils::Address as _, Address, Env};
/// # use test_utils::factories::create_token_contract;
/// # let env = Env::default();
/// # let admin = Address::generate(&env);
/// let (token_address, token_client, token_admin) = create_token_contract(&env, &admin);
/// ```
pub fn create_token_contract<'a>(
    env: &Env,
    admin: &Address,
) -> (Address, token::Client<'a>, token::StellarAssetClient<'a>) {
    let stellar_asset = env.register_stellar_asset_contract_v2(admin.clone());
    let token_address = stellar_asset.address();
    let token_client = token::Client::new(env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(env, &token_address);
    (token_address, token_client, token_admin_client)
}

/// Creates a lockup contract for testing, without initializing it.
///
/// # Arguments
/// * `env` - The contract environment
///
/// # Returns
/// A tuple containing:
/// - Lockup contract client
/// - Lockup contract address
///
/// # Example
/// ```rust,no_run
/// # use soroban_sdk::Env;
/// # use test_utils::factories::create_lockup_contract;
/// # let env = Env::default();
/// let (lockup_client, lockup_address) = create_lockup_contract(&env);
/// ```
pub fn create_lockup_contract<'a>(env: &Env) -> (TokenLockupContractClient<'a>, Address) {
    let contract_id = env.register_contract(None, TokenLockupContract);
    let client = TokenLockupContractClient::new(env, &contract_id);
    (client, contract_id)
}

/// Creates a fully initialized lockup contract with its underlying token.
///
/// # Arguments
/// * `env` - The contract environment
/// * `admin` - The token admin address
/// * `min_timelock_amount` - The smallest fundable grant
/// * `max_release_delay` - Horizon for a schedule's first release, in seconds
///
/// # Returns
/// A tuple containing:
/// - Lockup contract client
/// - Lockup contract address
/// - Token address
/// - Token client
/// - Token admin client
pub fn create_initialized_lockup<'a>(
    env: &Env,
    admin: &Address,
    min_timelock_amount: i128,
    max_release_delay: u64,
) -> (
    TokenLockupContractClient<'a>,
    Address,
    Address,
    token::Client<'a>,
    token::StellarAssetClient<'a>,
) {
    let (lockup, lockup_address) = create_lockup_contract(env);
    let (token_address, token_client, token_admin_client) = create_token_contract(env, admin);

    lockup.init(
        &token_address,
        &String::from_str(env, "Test Token Lockup"),
        &String::from_str(env, "tLOCK"),
        &min_timelock_amount,
        &max_release_delay,
    );

    (
        lockup,
        lockup_address,
        token_address,
        token_client,
        token_admin_client,
    )
}
