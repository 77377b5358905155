use soroban_sdk::{contracttype, symbol_short, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug)]
pub struct ScheduleCreated {
    pub creator: Address,
    pub schedule_id: u64,
}

pub fn emit_schedule_created(env: &Env, event: ScheduleCreated) {
    env.events().publish((symbol_short!("SchedNew"),), event);
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ScheduleFunded {
    pub funder: Address,
    pub recipient: Address,
    pub schedule_id: u64,
    pub amount: i128,
    pub commencement: u64,
    pub timelock_index: u32,
    pub cancelable_by: Vec<Address>,
}

pub fn emit_schedule_funded(env: &Env, event: ScheduleFunded) {
    env.events().publish((symbol_short!("SchedFund"),), event);
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TimelockCanceled {
    pub canceled_by: Address,
    pub holder: Address,
    pub timelock_index: u32,
    /// Still-locked value returned to the reclaim address.
    pub canceled_amount: i128,
    /// Unlocked-but-undrawn value paid out to the holder.
    pub paid_amount: i128,
    pub reclaim_to: Address,
}

pub fn emit_timelock_canceled(env: &Env, event: TimelockCanceled) {
    env.events().publish((symbol_short!("TlCancel"),), event);
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TimelockBurned {
    pub holder: Address,
    pub timelock_index: u32,
    /// Full remaining value destroyed from the underlying supply.
    pub amount: i128,
}

pub fn emit_timelock_burned(env: &Env, event: TimelockBurned) {
    env.events().publish((symbol_short!("TlBurn"),), event);
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

pub fn emit_transfer(env: &Env, event: Transfer) {
    env.events().publish((symbol_short!("Transfer"),), event);
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Approval {
    pub owner: Address,
    pub spender: Address,
    pub amount: i128,
}

pub fn emit_approval(env: &Env, event: Approval) {
    env.events().publish((symbol_short!("Approval"),), event);
}
