//! Walkthrough of the test-utils library against the lockup contract.
//!
//! Runs a grant through its lifecycle in a local test environment: fund a
//! schedule, watch the unlock curve advance, transfer unlocked value out.

use test_utils::{
    advance_time, assert_lockup_balances, assert_solvent, get_initial_balance, past_commencement,
    verify_payout, LockupSetup,
};

const DAY: u64 = 24 * 3600;

fn main() {
    let setup = LockupSetup::new();

    // 3 releases: 8% at commencement, the rest over two 4-day periods.
    let schedule_id = setup.create_schedule(3, 0, 800, 4 * DAY);
    let commencement = past_commencement(&setup.env, Some(3600));
    setup.fund(&setup.holder, 100, commencement, schedule_id);

    assert_lockup_balances(&setup.lockup, &setup.holder, 8, 92);
    assert_solvent(&setup.lockup, &setup.token, &setup.lockup_address);
    println!("funded 100: unlocked 8, locked 92");

    advance_time(&setup.env, 5 * DAY);
    assert_lockup_balances(&setup.lockup, &setup.holder, 54, 46);
    println!("after 5 days: unlocked 54, locked 46");

    let initial_custody = get_initial_balance(&setup.token, &setup.lockup_address);
    let initial_reserve = get_initial_balance(&setup.token, &setup.reserve);
    setup.lockup.transfer(&setup.holder, &setup.reserve, &50);
    verify_payout(
        &setup.token,
        &setup.lockup_address,
        &setup.reserve,
        initial_custody,
        initial_reserve,
        50,
    );
    assert_lockup_balances(&setup.lockup, &setup.holder, 4, 46);
    assert_solvent(&setup.lockup, &setup.token, &setup.lockup_address);
    println!("transferred 50 out: unlocked 4, locked 46");
}
