//! Assertion utilities for common test scenarios.
//!
//! Provides helper functions for common assertions in lockup contract tests.

use soroban_sdk::{token, Address};
use token_lockup::TokenLockupContractClient;

/// Asserts that a holder's unlocked/locked split matches expectations.
///
/// # Arguments
/// * `lockup_client` - The lockup contract client
/// * `holder` - The holder to check
/// * `expected_unlocked` - The expected unlocked balance
/// * `expected_locked` - The expected locked balance
///
/// # Panics
/// Panics if either portion, or their sum, doesn't match.
///
/// # Example
/// ```rust,no_run
/// # use test_utils::assertions::assert_lockup_balances;
/// # use test_utils::setup::LockupSetup;
/// # let setup = LockupSetup::new();
/// assert_lockup_balances(&setup.lockup, &setup.holder, 8, 92);
/// ```
pub fn assert_lockup_balances(
    lockup_client: &TokenLockupContractClient,
    holder: &Address,
    expected_unlocked: i128,
    expected_locked: i128,
) {
    let unlocked = lockup_client.unlocked_balance_of(holder);
    let locked = lockup_client.locked_balance_of(holder);
    let balance = lockup_client.balance_of(holder);
    assert_eq!(
        unlocked, expected_unlocked,
        "Expected holder {:?} to have unlocked balance {}, but got {}",
        holder, expected_unlocked, unlocked
    );
    assert_eq!(
        locked, expected_locked,
        "Expected holder {:?} to have locked balance {}, but got {}",
        holder, expected_locked, locked
    );
    assert_eq!(
        balance,
        expected_unlocked + expected_locked,
        "Holder {:?}'s balance {} does not equal unlocked + locked",
        holder,
        balance
    );
}

/// Asserts that a holder has the expected number of timelocks.
///
/// # Arguments
/// * `lockup_client` - The lockup contract client
/// * `holder` - The holder to check
/// * `expected_count` - The expected timelock count
pub fn assert_timelock_count(
    lockup_client: &TokenLockupContractClient,
    holder: &Address,
    expected_count: u32,
) {
    let count = lockup_client.timelock_count_of(holder);
    assert_eq!(
        count, expected_count,
        "Expected holder {:?} to have {} timelocks, but got {}",
        holder, expected_count, count
    );
}

/// Asserts that the lockup is solvent: its custody of the underlying token
/// equals its reported total supply.
///
/// # Arguments
/// * `lockup_client` - The lockup contract client
/// * `token_client` - The underlying token client
/// * `lockup_address` - The lockup contract's address
///
/// # Panics
/// Panics if the custody pool and the total supply disagree.
pub fn assert_solvent(
    lockup_client: &TokenLockupContractClient,
    token_client: &token::Client,
    lockup_address: &Address,
) {
    let custody = token_client.balance(lockup_address);
    let total_supply = lockup_client.total_supply();
    assert_eq!(
        custody, total_supply,
        "Lockup custody ({}) does not match its total supply ({})",
        custody, total_supply
    );
}

/// Asserts that a token balance matches the expected value.
///
/// # Arguments
/// * `token_client` - The token client
/// * `address` - The address to check
/// * `expected_balance` - The expected balance
///
/// # Panics
/// Panics if the balance doesn't match the expected value.
///
/// # Example
/// ```rust,no_run
/// # use soroban_sdk::{testutils::Address as _, token, Address, Env};
/// # use test_utils::assertions::assert_balance;
/// # let env = Env::default();
/// # let token = token::Client::new(&env, &Address::generate(&env));
/// # let addr = Address::generate(&env);
/// assert_balance(&token, &addr, 1000);
/// ```
pub fn assert_balance(token_client: &token::Client, address: &Address, expected_balance: i128) {
    let balance = token_client.balance(address);
    assert_eq!(
        balance, expected_balance,
        "Expected address {:?} to have balance {}, but got {}",
        address, expected_balance, balance
    );
}

/// Asserts that balances match expected values after a transaction.
///
/// # Arguments
/// * `token_client` - The token client
/// * `expected_balances` - A slice of (address, expected_balance) tuples
///
/// # Panics
/// Panics if any balance doesn't match the expected value.
pub fn assert_balances(token_client: &token::Client, expected_balances: &[(&Address, i128)]) {
    for (address, expected_balance) in expected_balances {
        assert_balance(token_client, address, *expected_balance);
    }
}
