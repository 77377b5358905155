//! Per-holder timelock ledger: the only code that mutates the stored
//! `Vec<Timelock>` sequences and the custody counter.
//!
//! Mutations are limited to three primitives: `append` (funding), `debit` /
//! `debit_one` (drawing down unlocked value), and `remove` (cancellation and
//! forfeiture, swap-with-last so removal is O(1) at the cost of reassigning
//! the last index). Balance reads are O(n) in the holder's timelock count.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::Error;
use crate::schedule;
use crate::types::{DataKey, Timelock};

pub fn timelocks_of(env: &Env, holder: &Address) -> Vec<Timelock> {
    env.storage()
        .persistent()
        .get(&DataKey::Timelocks(holder.clone()))
        .unwrap_or(Vec::new(env))
}

fn store(env: &Env, holder: &Address, timelocks: &Vec<Timelock>) {
    let key = DataKey::Timelocks(holder.clone());
    if timelocks.is_empty() {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, timelocks);
    }
}

/// Pushes a new timelock onto the holder's sequence and returns its index
/// (= previous length).
pub fn append(env: &Env, holder: &Address, timelock: Timelock) -> u32 {
    let mut timelocks = timelocks_of(env, holder);
    let index = timelocks.len();
    timelocks.push_back(timelock);
    store(env, holder, &timelocks);
    index
}

/// Unlocked-but-undrawn value of one timelock at `now`.
pub fn undrawn_unlocked(env: &Env, timelock: &Timelock, now: u64) -> Result<i128, Error> {
    let sched = schedule::by_id(env, timelock.schedule_id)?;
    let unlocked = schedule::unlocked(timelock.commencement, now, timelock.total_amount, &sched)?;
    let undrawn = unlocked - timelock.tokens_transferred;
    Ok(if undrawn > 0 { undrawn } else { 0 })
}

/// Draws `amount` across the holder's timelocks in ascending index order,
/// consuming each timelock's undrawn-unlocked value before moving to the
/// next. Fails without committing anything if the holder's total
/// undrawn-unlocked value is short.
pub fn debit(env: &Env, holder: &Address, amount: i128) -> Result<(), Error> {
    let mut timelocks = timelocks_of(env, holder);
    let now = env.ledger().timestamp();
    let mut remaining = amount;
    let mut index = 0u32;
    while index < timelocks.len() && remaining > 0 {
        let mut timelock = timelocks.get(index).ok_or(Error::InvalidTimelock)?;
        let available = undrawn_unlocked(env, &timelock, now)?;
        let draw = available.min(remaining);
        if draw > 0 {
            timelock.tokens_transferred += draw;
            remaining -= draw;
            timelocks.set(index, timelock);
        }
        index += 1;
    }
    if remaining > 0 {
        return Err(Error::InsufficientUnlockedBalance);
    }
    store(env, holder, &timelocks);
    Ok(())
}

/// Draws `amount` from a single caller-chosen timelock.
pub fn debit_one(env: &Env, holder: &Address, index: u32, amount: i128) -> Result<(), Error> {
    let mut timelocks = timelocks_of(env, holder);
    let mut timelock = timelocks.get(index).ok_or(Error::InvalidTimelock)?;
    let now = env.ledger().timestamp();
    let available = undrawn_unlocked(env, &timelock, now)?;
    if amount > available {
        return Err(Error::InsufficientUnlockedBalance);
    }
    timelock.tokens_transferred += amount;
    timelocks.set(index, timelock);
    store(env, holder, &timelocks);
    Ok(())
}

/// Removes a timelock regardless of its unlocked/locked split by swapping it
/// with the last element and truncating. The previously-last timelock takes
/// over the removed index; callers holding indices must re-resolve them.
pub fn remove(env: &Env, holder: &Address, index: u32) -> Result<Timelock, Error> {
    let mut timelocks = timelocks_of(env, holder);
    let removed = timelocks.get(index).ok_or(Error::InvalidTimelock)?;
    let last_index = timelocks.len() - 1;
    if index != last_index {
        let last = timelocks.get(last_index).ok_or(Error::InvalidTimelock)?;
        timelocks.set(index, last);
    }
    timelocks.pop_back();
    store(env, holder, &timelocks);
    Ok(removed)
}

pub fn timelock_at(env: &Env, holder: &Address, index: u32) -> Result<Timelock, Error> {
    timelocks_of(env, holder)
        .get(index)
        .ok_or(Error::InvalidTimelock)
}

/// Total undrawn value across the holder's timelocks, locked or not.
pub fn balance_of(env: &Env, holder: &Address) -> i128 {
    let mut total = 0i128;
    for timelock in timelocks_of(env, holder).iter() {
        total += timelock.total_amount - timelock.tokens_transferred;
    }
    total
}

pub fn unlocked_balance_of(env: &Env, holder: &Address) -> Result<i128, Error> {
    let now = env.ledger().timestamp();
    let mut total = 0i128;
    for timelock in timelocks_of(env, holder).iter() {
        total += undrawn_unlocked(env, &timelock, now)?;
    }
    Ok(total)
}

// --- custody counter ---
// Kept equal to the contract's balance of the underlying token by the
// funding, transfer, cancellation, and burn paths.

pub fn total_supply(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn add_supply(env: &Env, amount: i128) -> Result<(), Error> {
    let updated = total_supply(env)
        .checked_add(amount)
        .ok_or(Error::MathOverflow)?;
    env.storage().persistent().set(&DataKey::TotalSupply, &updated);
    Ok(())
}

pub fn sub_supply(env: &Env, amount: i128) -> Result<(), Error> {
    let updated = total_supply(env)
        .checked_sub(amount)
        .ok_or(Error::MathOverflow)?;
    env.storage().persistent().set(&DataKey::TotalSupply, &updated);
    Ok(())
}
