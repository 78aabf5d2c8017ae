//! Address newtypes for wallets and contracts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Connected wallet identifier.
///
/// Opaque to the domain: the chain adapter is responsible for parsing it
/// into a concrete address. A disconnected wallet is modelled as
/// `Option<Account>::None` at call sites, never as an empty account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account(String);

impl Account {
    /// Create a new `Account` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the account as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Account {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Account {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Deployed contract address (token or presale).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractAddress(String);

impl ContractAddress {
    /// Create a new `ContractAddress` from a string.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Get the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the address looks like a 20-byte hex address.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let Some(hex) = self.0.strip_prefix("0x") else {
            return false;
        };
        hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContractAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
