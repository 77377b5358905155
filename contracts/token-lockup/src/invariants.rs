// Invariant checkers run from the integration tests after mutating operations.

use soroban_sdk::{token, Address};

use crate::TokenLockupContractClient;

/// Solvency: the custody pool balance, the reported total supply, and the sum
/// of every holder's ledger balance must all agree.
pub fn check_solvency(
    lockup: &TokenLockupContractClient,
    token_client: &token::Client,
    lockup_address: &Address,
    holders: &[&Address],
) {
    let custody = token_client.balance(lockup_address);
    let total_supply = lockup.total_supply();
    assert_eq!(
        custody, total_supply,
        "solvency violated: custody pool ({}) != total supply ({})",
        custody, total_supply
    );

    let mut ledger_sum = 0i128;
    for holder in holders {
        ledger_sum += lockup.balance_of(holder);
    }
    assert_eq!(
        total_supply, ledger_sum,
        "solvency violated: total supply ({}) != sum of holder balances ({})",
        total_supply, ledger_sum
    );
}

/// A holder's locked and unlocked portions must always partition the balance.
pub fn check_balance_split(lockup: &TokenLockupContractClient, holder: &Address) {
    let balance = lockup.balance_of(holder);
    let unlocked = lockup.unlocked_balance_of(holder);
    let locked = lockup.locked_balance_of(holder);
    assert_eq!(
        unlocked + locked,
        balance,
        "balance split violated for {:?}: unlocked ({}) + locked ({}) != balance ({})",
        holder,
        unlocked,
        locked,
        balance
    );
    assert!(unlocked >= 0 && locked >= 0);
}

/// Per-timelock bounds: nothing drawn may exceed the funded total, and the
/// aggregated views must match a manual walk over the holder's timelocks.
pub fn check_timelock_bounds(lockup: &TokenLockupContractClient, holder: &Address) {
    let count = lockup.timelock_count_of(holder);
    let mut remaining_sum = 0i128;
    let mut unlocked_sum = 0i128;
    for index in 0..count {
        let timelock = lockup.timelock_of(holder, &index);
        assert!(timelock.tokens_transferred >= 0);
        assert!(
            timelock.tokens_transferred <= timelock.total_amount,
            "timelock {} overdrawn: {} of {}",
            index,
            timelock.tokens_transferred,
            timelock.total_amount
        );
        remaining_sum += timelock.total_amount - timelock.tokens_transferred;
        unlocked_sum += lockup.unlocked_balance_of_timelock(holder, &index);
    }
    assert_eq!(remaining_sum, lockup.balance_of(holder));
    assert_eq!(unlocked_sum, lockup.unlocked_balance_of(holder));
}
