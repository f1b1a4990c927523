//! Error types shared across the Motorika crates.
//!
//! Each concern gets its own enum so callers can match on exactly the
//! failures an operation can produce.

/// Errors raised by the pulse-timing skill check.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkillCheckError {
    /// Thresholds or speed are malformed. Fatal to the configuration.
    #[error("invalid skill check configuration: {0}")]
    InvalidConfig(&'static str),

    /// `tick` or `commit` called while the check is not running.
    #[error("skill check is not running")]
    NotRunning,

    /// `commit` called a second time without an intervening `start`.
    #[error("skill check already resolved")]
    AlreadyResolved,

    /// Time deltas must be finite and non-negative.
    #[error("invalid time delta: {0}")]
    InvalidDelta(f64),
}

/// Errors raised by the proximity selector.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProximityError {
    /// The item is already a candidate. The selector state is left untouched.
    #[error("candidate entered twice")]
    DuplicateEnter,

    #[error("detection radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
}

/// Errors raised when buying an upgrade.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShopError {
    #[error("unknown upgrade {0}")]
    UnknownUpgrade(u32),

    #[error("upgrade {0} already purchased")]
    AlreadyPurchased(u32),

    #[error("upgrade costs {cost}, only {money} available")]
    InsufficientFunds { cost: u32, money: u32 },
}

/// Errors raised while loading or validating a session layout.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse layout: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid layout: {0}")]
    Invalid(String),
}

/// Errors raised while encoding or decoding save data.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("save belongs to scene {found:?}, expected {expected:?}")]
    SceneMismatch { expected: String, found: String },
}
