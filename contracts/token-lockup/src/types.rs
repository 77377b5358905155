use soroban_sdk::{contracttype, Address, String, Vec};

/// Immutable deployment configuration, written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The underlying token held in custody.
    pub token: Address,
    pub name: String,
    pub symbol: String,
    /// Smallest amount a single timelock may be funded with.
    pub min_timelock_amount: i128,
    /// Upper bound, in seconds from now, for a funded schedule's first release.
    pub max_release_delay: u64,
}

/// Immutable release-curve template. Not tied to any amount or recipient;
/// referenced from timelocks by id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleaseSchedule {
    /// Total number of releases, including the initial one. At least 1.
    pub release_count: u32,
    /// Seconds between commencement and the first release.
    pub delay_until_first_release: u64,
    /// Portion released at the first release, in basis points (0..=10000).
    pub initial_release_portion_bips: u32,
    /// Seconds between the releases after the first. At least 1 when
    /// `release_count > 1`.
    pub period_between_releases: u64,
}

/// One funded grant. The holder is implicit in the storage key; the position
/// in the holder's sequence is the timelock's index. Indices are reassigned
/// by swap-removal, so they are not stable across cancellation or burn.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Timelock {
    pub schedule_id: u64,
    /// Reference timestamp the schedule's delay and periods are measured from.
    pub commencement: u64,
    pub total_amount: i128,
    /// Value already drawn out of this timelock. Never exceeds `total_amount`.
    pub tokens_transferred: i128,
    /// Addresses allowed to cancel this timelock and reclaim its locked value.
    pub cancelable_by: Vec<Address>,
}

/// Allowance map key: funds of `owner` spendable by `spender`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub owner: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    ScheduleCount,
    /// Sum of all undrawn timelock value; equals the custody pool balance.
    TotalSupply,
    Schedule(u64),
    Timelocks(Address),
    Allowance(AllowanceKey),
}
