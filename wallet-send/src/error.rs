//! Error types for the wallet-send library

use std::fmt;

use thiserror::Error;

use crate::wallet::WalletError;

/// A wallet failure re-expressed as a localized, user-facing sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Localized message
    pub message: String,
    /// Suggested corrected amount in display units, for auto-filling the amount field
    pub sendable_balance: Option<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sendable_balance: None,
        }
    }

    pub fn with_sendable_balance(mut self, sendable_balance: impl Into<String>) -> Self {
        self.sendable_balance = Some(sendable_balance.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Custom error type for wallet-send operations
#[derive(Error, Debug)]
pub enum Error {
    /// Recognized wallet failure, translated for the user
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Wallet failure with no known translation, propagated unchanged
    #[error(transparent)]
    Wallet(WalletError),

    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Localization error: {0}")]
    Localization(String),
}

impl Error {
    /// The validation payload, if this is a translated wallet failure
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for wallet-send operations
pub type Result<T> = std::result::Result<T, Error>;
