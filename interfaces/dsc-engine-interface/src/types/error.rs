use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    ReentrantCall = 2,
    ConfigLengthMismatch = 3,
    InvalidFeedDecimals = 4,
    DuplicateCollateralAsset = 5,

    InvalidAmount = 100,
    AssetNotSupported = 101,
    NoPriceForAsset = 102,

    InsufficientCollateral = 200,
    InsufficientDebt = 201,

    TransferFailed = 300,
    MintFailed = 301,

    HealthFactorBroken = 400,
    HealthFactorOk = 401,
    HealthFactorNotImproved = 402,

    MathOverflowError = 500,
    MustBeNonNegative = 501,
}
