//! Test setup helpers and the LockupSetup struct.
//!
//! Provides a ready-made setup structure that includes all commonly needed
//! components for testing the lockup contract.

use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env, Vec};
use token_lockup::TokenLockupContractClient;

use super::factories::create_initialized_lockup;

/// Default smallest fundable grant.
pub const DEFAULT_MIN_TIMELOCK_AMOUNT: i128 = 100;
/// Default horizon for a schedule's first release (11 years in seconds).
pub const DEFAULT_MAX_RELEASE_DELAY: u64 = 346_896_000;
/// Default amount minted to the funding reserve.
pub const DEFAULT_RESERVE_SUPPLY: i128 = 8_000_000_000;
/// Default starting ledger timestamp.
pub const DEFAULT_START_TIME: u64 = 1_700_000_000;

/// Comprehensive test setup structure.
///
/// This struct contains all commonly needed components for testing:
/// - Environment
/// - Admin, reserve (funder), and holder (recipient) addresses
/// - Token contract and admin client
/// - Lockup contract client and address
///
/// # Example
/// ```rust,no_run
/// # use test_utils::setup::LockupSetup;
/// let setup = LockupSetup::new();
/// let schedule_id = setup.create_schedule(3, 0, 800, 4 * 24 * 3600);
/// setup.fund(&setup.holder, 100, setup.now(), schedule_id);
/// ```
pub struct LockupSetup<'a> {
    pub env: Env,
    pub admin: Address,
    pub reserve: Address,
    pub holder: Address,
    pub token: token::Client<'a>,
    pub token_admin: token::StellarAssetClient<'a>,
    pub lockup: TokenLockupContractClient<'a>,
    pub lockup_address: Address,
    pub token_address: Address,
}

impl LockupSetup<'_> {
    /// Creates a new test setup with all components initialized.
    ///
    /// This will:
    /// - Create a new environment with a fixed starting timestamp
    /// - Mock all auths
    /// - Generate admin, reserve, and holder addresses
    /// - Create and initialize the token and lockup contracts
    /// - Mint tokens to the reserve
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MIN_TIMELOCK_AMOUNT, DEFAULT_MAX_RELEASE_DELAY)
    }

    /// Creates a new test setup with custom lockup configuration.
    ///
    /// # Arguments
    /// * `min_timelock_amount` - The smallest fundable grant
    /// * `max_release_delay` - Horizon for a schedule's first release
    pub fn with_limits(min_timelock_amount: i128, max_release_delay: u64) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(DEFAULT_START_TIME);

        let admin = Address::generate(&env);
        let reserve = Address::generate(&env);
        let holder = Address::generate(&env);

        let (lockup, lockup_address, token_address, token, token_admin) =
            create_initialized_lockup(&env, &admin, min_timelock_amount, max_release_delay);

        token_admin.mint(&reserve, &DEFAULT_RESERVE_SUPPLY);

        Self {
            env,
            admin,
            reserve,
            holder,
            token,
            token_admin,
            lockup,
            lockup_address,
            token_address,
        }
    }

    /// Creates a test setup with multiple holders.
    ///
    /// # Arguments
    /// * `holder_count` - Number of holder addresses to generate
    ///
    /// # Returns
    /// A tuple containing the setup and the generated holder addresses. The
    /// setup's own `holder` field is the first of them.
    pub fn with_holders(holder_count: u32) -> (Self, Vec<Address>) {
        let setup = Self::new();
        let mut holders = Vec::new(&setup.env);
        holders.push_back(setup.holder.clone());
        for _ in 1..holder_count {
            holders.push_back(Address::generate(&setup.env));
        }
        (setup, holders)
    }

    /// Current ledger timestamp.
    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    /// Creates a release schedule from the reserve (convenience method).
    ///
    /// # Arguments
    /// * `release_count` - Total number of releases
    /// * `delay` - Seconds from commencement to the first release
    /// * `initial_bips` - Basis points unlocked at the first release
    /// * `period` - Seconds between the later releases
    ///
    /// # Returns
    /// The new schedule's id.
    pub fn create_schedule(
        &self,
        release_count: u32,
        delay: u64,
        initial_bips: u32,
        period: u64,
    ) -> u64 {
        self.lockup.create_release_schedule(
            &self.reserve,
            &release_count,
            &delay,
            &initial_bips,
            &period,
        )
    }

    /// Funds a timelock from the reserve with no cancelers (convenience
    /// method).
    ///
    /// # Arguments
    /// * `recipient` - The grant's recipient
    /// * `amount` - The amount to lock up
    /// * `commencement` - The schedule's commencement timestamp
    /// * `schedule_id` - The schedule to fund against
    pub fn fund(&self, recipient: &Address, amount: i128, commencement: u64, schedule_id: u64) {
        self.lockup.fund_release_schedule(
            &self.reserve,
            recipient,
            &amount,
            &commencement,
            &schedule_id,
            &Vec::new(&self.env),
        );
    }

    /// Funds a timelock that the reserve may later cancel (convenience
    /// method).
    pub fn fund_cancelable(
        &self,
        recipient: &Address,
        amount: i128,
        commencement: u64,
        schedule_id: u64,
    ) {
        let mut cancelable_by = Vec::new(&self.env);
        cancelable_by.push_back(self.reserve.clone());
        self.lockup.fund_release_schedule(
            &self.reserve,
            recipient,
            &amount,
            &commencement,
            &schedule_id,
            &cancelable_by,
        );
    }
}
