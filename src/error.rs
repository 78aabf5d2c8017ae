use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while talking to the chain.
///
/// Each variant carries the most specific human-readable reason available:
/// the JSON-RPC error payload message when the node returned one, the
/// transport error text otherwise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("read call failed: {0}")]
    Call(String),

    #[error("transaction not submitted: {0}")]
    Submission(String),

    #[error("transaction {tx_hash} reverted")]
    Reverted { tx_hash: String },

    #[error("failed to confirm transaction: {0}")]
    Confirmation(String),

    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("no signer configured")]
    NoSigner,

    #[error("on-chain value out of range: {0}")]
    Overflow(String),
}

impl ChainError {
    /// The underlying reason without the variant prefix.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Call(reason) | Self::Submission(reason) | Self::Confirmation(reason) => {
                reason.clone()
            }
            other => other.to_string(),
        }
    }
}

/// Purchase workflow failures. Every variant leaves the workflow `Idle`
/// and re-attemptable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("Wallet not connected")]
    NotConnected,

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] DomainError),

    #[error("A purchase is already in progress")]
    InProgress,

    #[error("Allowance check failed: {0}")]
    AllowanceQueryFailed(String),

    #[error("Approval failed: {0}")]
    ApprovalFailed(String),

    #[error("Purchase failed: {0}")]
    PurchaseFailed(String),

    #[error("{step} not confirmed within {secs}s")]
    ConfirmationTimeout { step: &'static str, secs: u64 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Purchase(#[from] PurchaseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Purchase not confirmed: pass --yes to buy in JSON mode")]
    ConfirmationRequired,
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) => Error::Io(e),
        }
    }
}
