//! Balance verification helpers for custody flows.
//!
//! Every lockup payout moves value two ways at once: the recipient's token
//! balance rises and the lockup's custody pool falls by the same amount.
//! These helpers snapshot balances before a transaction and verify both
//! sides of the move afterward.

use soroban_sdk::{token, Address};

/// Gets the initial balance before a transaction.
///
/// # Arguments
/// * `token_client` - The token client
/// * `address` - The address to check
///
/// # Returns
/// The initial balance (i128)
///
/// # Example
/// ```rust,no_run
/// # use test_utils::balances::get_initial_balance;
/// # use test_utils::setup::LockupSetup;
/// # let setup = LockupSetup::new();
/// let initial_custody = get_initial_balance(&setup.token, &setup.lockup_address);
/// ```
pub fn get_initial_balance(token_client: &token::Client, address: &Address) -> i128 {
    token_client.balance(address)
}

/// Verifies that a balance change occurred.
///
/// # Arguments
/// * `token_client` - The token client
/// * `address` - The address to check
/// * `initial_balance` - The initial balance
/// * `expected_change` - The expected change (positive or negative)
///
/// # Returns
/// The new balance (i128)
///
/// # Panics
/// Panics if the balance change doesn't match the expected change.
pub fn verify_balance_change(
    token_client: &token::Client,
    address: &Address,
    initial_balance: i128,
    expected_change: i128,
) -> i128 {
    let new_balance = token_client.balance(address);
    let actual_change = new_balance - initial_balance;

    assert_eq!(
        actual_change, expected_change,
        "Expected balance change of {} for address {:?}, but got {} (initial: {}, new: {})",
        expected_change, address, actual_change, initial_balance, new_balance
    );

    new_balance
}

/// Verifies a payout out of custody: `recipient` gained `amount` of the
/// underlying token and the lockup's custody pool lost the same amount.
///
/// # Arguments
/// * `token_client` - The underlying token client
/// * `lockup_address` - The lockup contract's address
/// * `recipient` - The payout recipient
/// * `initial_custody` - Custody pool balance before the transaction
/// * `initial_recipient` - Recipient balance before the transaction
/// * `amount` - The expected payout amount
///
/// # Panics
/// Panics if either side of the move doesn't match.
///
/// # Example
/// ```rust,no_run
/// # use test_utils::balances::{get_initial_balance, verify_payout};
/// # use test_utils::setup::LockupSetup;
/// # let setup = LockupSetup::new();
/// let custody = get_initial_balance(&setup.token, &setup.lockup_address);
/// let recipient = get_initial_balance(&setup.token, &setup.holder);
/// setup.lockup.transfer(&setup.holder, &setup.holder, &10);
/// verify_payout(&setup.token, &setup.lockup_address, &setup.holder, custody, recipient, 10);
/// ```
pub fn verify_payout(
    token_client: &token::Client,
    lockup_address: &Address,
    recipient: &Address,
    initial_custody: i128,
    initial_recipient: i128,
    amount: i128,
) {
    verify_balance_change(token_client, recipient, initial_recipient, amount);
    verify_balance_change(token_client, lockup_address, initial_custody, -amount);
}
