use soroban_sdk::contracterror;

/// Failure modes of the lockup contract. Every state-mutating entry point
/// returns `Result<_, Error>`; returning an error rolls back the whole
/// invocation, including any token transfers already performed.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidMinimum = 3,

    // Schedule creation
    EmptySchedule = 4,
    SingleBatchMustReleaseAll = 5,
    InitialReleaseExceedsMax = 6,
    ZeroPeriod = 7,
    FirstReleaseExceedsMaxDelay = 8,

    // Funding validation
    UnknownSchedule = 9,
    AmountBelowMinimum = 10,
    SubUnitPerRelease = 11, // amount too small to release one unit per batch
    TooManyCancelers = 12,
    CommencementOutOfRange = 13,
    InitialReleaseOutOfRange = 14,
    LengthMismatch = 15,
    EmptyBatch = 16,
    NegativeAmount = 17,

    // Drawing down unlocked value
    InsufficientUnlockedBalance = 18,

    // Cancellation
    NotAuthorizedToCancel = 19,
    TimelockExhausted = 20,
    InvalidTimelock = 21,

    // Forfeiture
    NoSuchTimelock = 22,
    BurnNotConfirmed = 23,

    // Allowances
    InsufficientAllowance = 24,
    AllowanceBelowZero = 25,

    MathOverflow = 26,
}
