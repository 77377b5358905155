//! # Token Lockup Contract
//!
//! Holds custody of a fungible token on behalf of many recipients and
//! releases it along per-recipient, per-grant release schedules, while
//! exposing the releasable portion through a standard balance/transfer
//! surface.
//!
//! A *release schedule* is an immutable curve template (release count, delay
//! until the first release, initial basis-point tranche, period between the
//! later releases). A *timelock* is one funded grant: an amount, a recipient,
//! a commencement timestamp, and a schedule reference. Funding pulls the
//! underlying token into custody; transfers draw the unlocked portion back
//! out, always consuming the holder's lowest-indexed timelock first.
//!
//! The contract's reported `total_supply` equals the undrawn value of every
//! outstanding timelock and, at all times, the contract's own balance of the
//! underlying token. Every entry point either commits completely or returns
//! an error that rolls back all of its effects, custody transfers included.

#![no_std]

mod errors;
mod events;
mod ledger;
mod schedule;
mod types;

#[cfg(test)]
mod invariants;

use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Vec};

pub use errors::Error;
pub use types::{AllowanceKey, Config, DataKey, ReleaseSchedule, Timelock};

use events::{
    emit_approval, emit_schedule_created, emit_schedule_funded, emit_timelock_burned,
    emit_timelock_canceled, emit_transfer, Approval, ScheduleCreated, ScheduleFunded,
    TimelockBurned, TimelockCanceled, Transfer,
};

#[contract]
pub struct TokenLockupContract;

fn config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

fn allowance_of(env: &Env, owner: &Address, spender: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Allowance(AllowanceKey {
            owner: owner.clone(),
            spender: spender.clone(),
        }))
        .unwrap_or(0)
}

fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(AllowanceKey {
        owner: owner.clone(),
        spender: spender.clone(),
    });
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
    }
}

/// Validates one grant against the registry and configuration, pulls the
/// amount into custody, and appends the timelock. Shared by single and batch
/// funding; the funder's auth is checked by the caller.
fn fund_one(
    env: &Env,
    cfg: &Config,
    funder: &Address,
    recipient: &Address,
    amount: i128,
    commencement: u64,
    schedule_id: u64,
    cancelable_by: &Vec<Address>,
) -> Result<(), Error> {
    let sched = schedule::by_id(env, schedule_id)?;

    if amount < cfg.min_timelock_amount {
        return Err(Error::AmountBelowMinimum);
    }
    // Every release must be able to deliver at least one indivisible unit.
    if amount / (sched.release_count as i128) < 1 {
        return Err(Error::SubUnitPerRelease);
    }
    if cancelable_by.len() > schedule::MAX_CANCELERS {
        return Err(Error::TooManyCancelers);
    }

    let now = env.ledger().timestamp();
    let horizon = now
        .checked_add(cfg.max_release_delay)
        .ok_or(Error::MathOverflow)?;
    if commencement > horizon {
        return Err(Error::CommencementOutOfRange);
    }
    let first_release_at = commencement
        .checked_add(sched.delay_until_first_release)
        .ok_or(Error::MathOverflow)?;
    if first_release_at > horizon {
        return Err(Error::InitialReleaseOutOfRange);
    }

    token::Client::new(env, &cfg.token).transfer(funder, &env.current_contract_address(), &amount);
    ledger::add_supply(env, amount)?;

    let timelock_index = ledger::append(
        env,
        recipient,
        Timelock {
            schedule_id,
            commencement,
            total_amount: amount,
            tokens_transferred: 0,
            cancelable_by: cancelable_by.clone(),
        },
    );

    emit_schedule_funded(
        env,
        ScheduleFunded {
            funder: funder.clone(),
            recipient: recipient.clone(),
            schedule_id,
            amount,
            commencement,
            timelock_index,
            cancelable_by: cancelable_by.clone(),
        },
    );

    Ok(())
}

/// Draws `amount` of unlocked value out of `from`'s ledger and pays it out of
/// custody to `to`. `draw_from` restricts the draw to a single timelock.
fn draw_and_pay(
    env: &Env,
    cfg: &Config,
    from: &Address,
    to: &Address,
    amount: i128,
    draw_from: Option<u32>,
) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::NegativeAmount);
    }
    match draw_from {
        Some(index) => ledger::debit_one(env, from, index, amount)?,
        None => ledger::debit(env, from, amount)?,
    }
    ledger::sub_supply(env, amount)?;
    token::Client::new(env, &cfg.token).transfer(&env.current_contract_address(), to, &amount);
    emit_transfer(
        env,
        Transfer {
            from: from.clone(),
            to: to.clone(),
            amount,
        },
    );
    Ok(())
}

#[contractimpl]
impl TokenLockupContract {
    /// One-time setup: the underlying token, the lockup's display name and
    /// symbol, the smallest fundable grant, and the horizon (in seconds from
    /// funding time) that a schedule's first release must fall within.
    pub fn init(
        env: Env,
        token: Address,
        name: String,
        symbol: String,
        min_timelock_amount: i128,
        max_release_delay: u64,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }
        if min_timelock_amount < 1 {
            return Err(Error::InvalidMinimum);
        }
        env.storage().instance().set(
            &DataKey::Config,
            &Config {
                token,
                name,
                symbol,
                min_timelock_amount,
                max_release_delay,
            },
        );
        Ok(())
    }

    /// Appends an immutable schedule template and returns its id.
    pub fn create_release_schedule(
        env: Env,
        creator: Address,
        release_count: u32,
        delay_until_first_release: u64,
        initial_release_portion_bips: u32,
        period_between_releases: u64,
    ) -> Result<u64, Error> {
        creator.require_auth();
        let cfg = config(&env)?;

        let sched = ReleaseSchedule {
            release_count,
            delay_until_first_release,
            initial_release_portion_bips,
            period_between_releases,
        };
        schedule::validate(&sched, cfg.max_release_delay)?;
        let schedule_id = schedule::create(&env, &sched);

        emit_schedule_created(
            &env,
            ScheduleCreated {
                creator,
                schedule_id,
            },
        );
        Ok(schedule_id)
    }

    /// Funds a new timelock for `recipient`, pulling `amount` of the
    /// underlying token from `funder` into custody. `cancelable_by` fixes, at
    /// funding time, who may later cancel the grant.
    pub fn fund_release_schedule(
        env: Env,
        funder: Address,
        recipient: Address,
        amount: i128,
        commencement: u64,
        schedule_id: u64,
        cancelable_by: Vec<Address>,
    ) -> Result<bool, Error> {
        funder.require_auth();
        let cfg = config(&env)?;
        fund_one(
            &env,
            &cfg,
            &funder,
            &recipient,
            amount,
            commencement,
            schedule_id,
            &cancelable_by,
        )?;
        Ok(true)
    }

    /// Funds one timelock per (recipient, amount) pair, all against the same
    /// schedule and commencement. Any single failure aborts the whole batch.
    pub fn batch_fund_release_schedule(
        env: Env,
        funder: Address,
        recipients: Vec<Address>,
        amounts: Vec<i128>,
        commencement: u64,
        schedule_id: u64,
        cancelable_by: Vec<Address>,
    ) -> Result<bool, Error> {
        funder.require_auth();
        let cfg = config(&env)?;
        if recipients.len() != amounts.len() {
            return Err(Error::LengthMismatch);
        }
        if recipients.is_empty() {
            return Err(Error::EmptyBatch);
        }
        for index in 0..recipients.len() {
            let recipient = recipients.get(index).ok_or(Error::LengthMismatch)?;
            let amount = amounts.get(index).ok_or(Error::LengthMismatch)?;
            fund_one(
                &env,
                &cfg,
                &funder,
                &recipient,
                amount,
                commencement,
                schedule_id,
                &cancelable_by,
            )?;
        }
        Ok(true)
    }

    /// Cancels a timelock: the unlocked-but-undrawn portion is paid to the
    /// holder, the still-locked remainder returns to `reclaim_to`, and the
    /// timelock is removed. Only an address in the timelock's `cancelable_by`
    /// set may cancel.
    pub fn cancel_timelock(
        env: Env,
        canceler: Address,
        holder: Address,
        timelock_index: u32,
        reclaim_to: Address,
    ) -> Result<bool, Error> {
        canceler.require_auth();
        let cfg = config(&env)?;

        let timelock = ledger::timelock_at(&env, &holder, timelock_index)?;
        if !timelock.cancelable_by.contains(&canceler) {
            return Err(Error::NotAuthorizedToCancel);
        }
        let remaining = timelock.total_amount - timelock.tokens_transferred;
        if remaining == 0 {
            return Err(Error::TimelockExhausted);
        }

        let now = env.ledger().timestamp();
        let paid_amount = ledger::undrawn_unlocked(&env, &timelock, now)?;
        let canceled_amount = remaining - paid_amount;

        ledger::remove(&env, &holder, timelock_index)?;
        ledger::sub_supply(&env, remaining)?;

        let client = token::Client::new(&env, &cfg.token);
        if paid_amount > 0 {
            client.transfer(&env.current_contract_address(), &holder, &paid_amount);
        }
        if canceled_amount > 0 {
            client.transfer(&env.current_contract_address(), &reclaim_to, &canceled_amount);
        }

        emit_timelock_canceled(
            &env,
            TimelockCanceled {
                canceled_by: canceler,
                holder,
                timelock_index,
                canceled_amount,
                paid_amount,
                reclaim_to,
            },
        );
        Ok(true)
    }

    /// Forfeits a timelock's entire remaining value, unlocked and locked
    /// alike, destroying it from the underlying token's supply. Only the
    /// holder may burn, and must pass `confirm == timelock_index + 1`.
    pub fn burn(
        env: Env,
        holder: Address,
        timelock_index: u32,
        confirm: u32,
    ) -> Result<bool, Error> {
        holder.require_auth();
        let cfg = config(&env)?;

        let timelock = ledger::timelock_at(&env, &holder, timelock_index)
            .map_err(|_| Error::NoSuchTimelock)?;
        if confirm != timelock_index + 1 {
            return Err(Error::BurnNotConfirmed);
        }
        let remaining = timelock.total_amount - timelock.tokens_transferred;

        ledger::remove(&env, &holder, timelock_index)?;
        ledger::sub_supply(&env, remaining)?;
        if remaining > 0 {
            token::Client::new(&env, &cfg.token).burn(&env.current_contract_address(), &remaining);
        }

        emit_timelock_burned(
            &env,
            TimelockBurned {
                holder,
                timelock_index,
                amount: remaining,
            },
        );
        Ok(true)
    }

    /// Transfers `amount` of `from`'s unlocked value to `to`, drawing from
    /// the lowest-indexed timelock first and paying out of custody.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<bool, Error> {
        from.require_auth();
        let cfg = config(&env)?;
        draw_and_pay(&env, &cfg, &from, &to, amount, None)?;
        Ok(true)
    }

    /// Like `transfer`, but draws only from the timelock at `timelock_index`.
    pub fn transfer_timelock(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
        timelock_index: u32,
    ) -> Result<bool, Error> {
        from.require_auth();
        let cfg = config(&env)?;
        draw_and_pay(&env, &cfg, &from, &to, amount, Some(timelock_index))?;
        Ok(true)
    }

    /// Spends `spender`'s allowance to move `from`'s unlocked value to `to`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<bool, Error> {
        spender.require_auth();
        let cfg = config(&env)?;
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }
        let allowed = allowance_of(&env, &from, &spender);
        if amount > allowed {
            return Err(Error::InsufficientAllowance);
        }
        set_allowance(&env, &from, &spender, allowed - amount);
        draw_and_pay(&env, &cfg, &from, &to, amount, None)?;
        Ok(true)
    }

    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<bool, Error> {
        owner.require_auth();
        config(&env)?;
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }
        set_allowance(&env, &owner, &spender, amount);
        emit_approval(
            &env,
            Approval {
                owner,
                spender,
                amount,
            },
        );
        Ok(true)
    }

    pub fn increase_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<bool, Error> {
        owner.require_auth();
        config(&env)?;
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }
        let updated = allowance_of(&env, &owner, &spender)
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        set_allowance(&env, &owner, &spender, updated);
        emit_approval(
            &env,
            Approval {
                owner,
                spender,
                amount: updated,
            },
        );
        Ok(true)
    }

    pub fn decrease_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<bool, Error> {
        owner.require_auth();
        config(&env)?;
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }
        let current = allowance_of(&env, &owner, &spender);
        if amount > current {
            return Err(Error::AllowanceBelowZero);
        }
        set_allowance(&env, &owner, &spender, current - amount);
        emit_approval(
            &env,
            Approval {
                owner,
                spender,
                amount: current - amount,
            },
        );
        Ok(true)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        allowance_of(&env, &owner, &spender)
    }

    // --- views ---

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(config(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(config(&env)?.symbol)
    }

    /// Decimals mirrored from the underlying token.
    pub fn decimals(env: Env) -> Result<u32, Error> {
        let cfg = config(&env)?;
        Ok(token::Client::new(&env, &cfg.token).decimals())
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(config(&env)?.token)
    }

    pub fn min_timelock_amount(env: Env) -> Result<i128, Error> {
        Ok(config(&env)?.min_timelock_amount)
    }

    pub fn max_release_delay(env: Env) -> Result<u64, Error> {
        Ok(config(&env)?.max_release_delay)
    }

    /// Undrawn value of every outstanding timelock; equals the custody pool.
    pub fn total_supply(env: Env) -> i128 {
        ledger::total_supply(&env)
    }

    /// The contract's actual balance of the underlying token.
    pub fn get_balance(env: Env) -> Result<i128, Error> {
        let cfg = config(&env)?;
        Ok(token::Client::new(&env, &cfg.token).balance(&env.current_contract_address()))
    }

    pub fn balance_of(env: Env, holder: Address) -> i128 {
        ledger::balance_of(&env, &holder)
    }

    pub fn unlocked_balance_of(env: Env, holder: Address) -> Result<i128, Error> {
        ledger::unlocked_balance_of(&env, &holder)
    }

    pub fn locked_balance_of(env: Env, holder: Address) -> Result<i128, Error> {
        Ok(ledger::balance_of(&env, &holder) - ledger::unlocked_balance_of(&env, &holder)?)
    }

    pub fn balance_of_timelock(
        env: Env,
        holder: Address,
        timelock_index: u32,
    ) -> Result<i128, Error> {
        let timelock = ledger::timelock_at(&env, &holder, timelock_index)?;
        Ok(timelock.total_amount - timelock.tokens_transferred)
    }

    pub fn unlocked_balance_of_timelock(
        env: Env,
        holder: Address,
        timelock_index: u32,
    ) -> Result<i128, Error> {
        let timelock = ledger::timelock_at(&env, &holder, timelock_index)?;
        ledger::undrawn_unlocked(&env, &timelock, env.ledger().timestamp())
    }

    pub fn locked_balance_of_timelock(
        env: Env,
        holder: Address,
        timelock_index: u32,
    ) -> Result<i128, Error> {
        let timelock = ledger::timelock_at(&env, &holder, timelock_index)?;
        let unlocked = ledger::undrawn_unlocked(&env, &timelock, env.ledger().timestamp())?;
        Ok(timelock.total_amount - timelock.tokens_transferred - unlocked)
    }

    pub fn timelock_of(env: Env, holder: Address, timelock_index: u32) -> Result<Timelock, Error> {
        ledger::timelock_at(&env, &holder, timelock_index)
    }

    pub fn timelock_count_of(env: Env, holder: Address) -> u32 {
        ledger::timelocks_of(&env, &holder).len()
    }

    pub fn schedule_count(env: Env) -> u64 {
        schedule::count(&env)
    }

    pub fn release_schedules(env: Env, schedule_id: u64) -> Result<ReleaseSchedule, Error> {
        schedule::by_id(&env, schedule_id)
    }

    /// Exposes the unlock calculator for off-system simulation.
    pub fn calculate_unlocked(
        env: Env,
        commencement: u64,
        now: u64,
        amount: i128,
        schedule_id: u64,
    ) -> Result<i128, Error> {
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }
        let sched = schedule::by_id(&env, schedule_id)?;
        schedule::unlocked(commencement, now, amount, &sched)
    }
}
