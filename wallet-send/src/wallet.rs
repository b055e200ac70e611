//! Wallet capabilities
//!
//! Transaction construction lives in the per-network wallets. This module
//! declares what the validator needs from them: one capability trait per
//! network family, a handle that wraps exactly one of them, and the closed
//! set of failures a wallet may report.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{Error, Result};
use crate::network::{Network, NetworkFamily};

/// Properties every wallet exposes, regardless of network
pub trait WalletInfo: Send + Sync {
    /// Wire name of the network, e.g. "bitcoin"
    fn network_name(&self) -> &str;

    /// Minimum balance an address must hold to stay active, in atomic units
    fn min_reserve(&self) -> u128 {
        0
    }

    /// Display unit ticker
    fn denomination(&self) -> &str {
        self.network_name()
            .parse::<Network>()
            .map(|network| network.denomination())
            .unwrap_or_default()
    }

    /// Decimal places between display and atomic units
    fn decimals(&self) -> u32 {
        self.network_name()
            .parse::<Network>()
            .map(|network| network.decimals())
            .unwrap_or_default()
    }
}

/// Bitcoin family wallet (bitcoin, bitcoincash, bitcoinsv, litecoin, dogecoin, dash)
pub trait UtxoWallet: WalletInfo {
    type Tx;

    fn create_tx(
        &self,
        to: &str,
        amount: u128,
        fee: u128,
    ) -> std::result::Result<Self::Tx, WalletError>;
}

/// Ethereum wallet
pub trait EthereumWallet: WalletInfo {
    type Tx;

    fn create_tx(&self, to: &str, amount: u128) -> std::result::Result<Self::Tx, WalletError>;
}

/// Ripple wallet
#[async_trait]
pub trait RippleWallet: WalletInfo {
    type Tx: Send;

    async fn create_tx(
        &self,
        to: &str,
        amount: u128,
        tag: Option<&str>,
        invoice_id: Option<&str>,
    ) -> std::result::Result<Self::Tx, WalletError>;
}

/// Stellar wallet
pub trait StellarWallet: WalletInfo {
    type Tx;

    /// `needs_activation` is set when the destination account does not exist yet
    fn create_tx(
        &self,
        to: &str,
        amount: u128,
        memo: Option<&str>,
        needs_activation: bool,
    ) -> std::result::Result<Self::Tx, WalletError>;
}

/// EOS wallet
pub trait EosWallet: WalletInfo {
    type Tx;

    fn create_tx(
        &self,
        to: &str,
        amount: u128,
        memo: Option<&str>,
    ) -> std::result::Result<Self::Tx, WalletError>;
}

/// Monero wallet
#[async_trait]
pub trait MoneroWallet: WalletInfo {
    type Tx: Send;

    async fn create_tx(
        &self,
        to: &str,
        amount: u128,
        fee: u128,
    ) -> std::result::Result<Self::Tx, WalletError>;
}

/// A wallet for one network, tagged by the construction capability it offers
pub enum WalletHandle<Tx> {
    Utxo(Arc<dyn UtxoWallet<Tx = Tx>>),
    Ethereum(Arc<dyn EthereumWallet<Tx = Tx>>),
    Ripple(Arc<dyn RippleWallet<Tx = Tx>>),
    Stellar(Arc<dyn StellarWallet<Tx = Tx>>),
    Eos(Arc<dyn EosWallet<Tx = Tx>>),
    Monero(Arc<dyn MoneroWallet<Tx = Tx>>),
}

macro_rules! with_wallet {
    ($handle:expr, $wallet:ident => $body:expr) => {
        match $handle {
            WalletHandle::Utxo($wallet) => $body,
            WalletHandle::Ethereum($wallet) => $body,
            WalletHandle::Ripple($wallet) => $body,
            WalletHandle::Stellar($wallet) => $body,
            WalletHandle::Eos($wallet) => $body,
            WalletHandle::Monero($wallet) => $body,
        }
    };
}

impl<Tx> WalletHandle<Tx> {
    /// Family implied by the capability this handle wraps
    pub fn family(&self) -> NetworkFamily {
        match self {
            WalletHandle::Utxo(_) => NetworkFamily::Utxo,
            WalletHandle::Ethereum(_) => NetworkFamily::Ethereum,
            WalletHandle::Ripple(_) => NetworkFamily::Ripple,
            WalletHandle::Stellar(_) => NetworkFamily::Stellar,
            WalletHandle::Eos(_) => NetworkFamily::Eos,
            WalletHandle::Monero(_) => NetworkFamily::Monero,
        }
    }

    pub fn network_name(&self) -> &str {
        with_wallet!(self, w => w.network_name())
    }

    pub fn min_reserve(&self) -> u128 {
        with_wallet!(self, w => w.min_reserve())
    }

    pub fn denomination(&self) -> &str {
        with_wallet!(self, w => w.denomination())
    }

    pub fn decimals(&self) -> u32 {
        with_wallet!(self, w => w.decimals())
    }

    /// Resolve the wallet's network
    ///
    /// Fails when the name is unknown or belongs to a different family than
    /// the wrapped capability.
    pub fn network(&self) -> Result<Network> {
        let name = self.network_name();
        let network: Network = name.parse()?;
        if network.family() != self.family() {
            return Err(Error::UnsupportedNetwork(format!(
                "{} wallet registered as {:?}",
                name,
                self.family()
            )));
        }
        Ok(network)
    }
}

impl<Tx> Clone for WalletHandle<Tx> {
    fn clone(&self) -> Self {
        match self {
            WalletHandle::Utxo(w) => WalletHandle::Utxo(Arc::clone(w)),
            WalletHandle::Ethereum(w) => WalletHandle::Ethereum(Arc::clone(w)),
            WalletHandle::Ripple(w) => WalletHandle::Ripple(Arc::clone(w)),
            WalletHandle::Stellar(w) => WalletHandle::Stellar(Arc::clone(w)),
            WalletHandle::Eos(w) => WalletHandle::Eos(Arc::clone(w)),
            WalletHandle::Monero(w) => WalletHandle::Monero(Arc::clone(w)),
        }
    }
}

impl<Tx> fmt::Debug for WalletHandle<Tx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletHandle")
            .field("family", &self.family())
            .field("network", &self.network_name())
            .finish()
    }
}

/// Why a value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueRejection {
    /// Recipient is not activated and the amount would not activate it
    BelowMinReserve,
    /// Amount is below the network's dust threshold (atomic units)
    BelowDust { dust_threshold: u128 },
}

/// Why funds are insufficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shortfall {
    /// Part of the balance is still waiting for confirmations
    ConfirmationPending,
    /// The user tried to send the whole balance; `sendable_balance` is the
    /// maximum after fees and reserve (atomic units)
    EmptyWallet { sendable_balance: u128 },
    General,
}

/// Free-text failure as reported by wallets that have no structured errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWalletFailure {
    pub message: String,
    pub details: Option<String>,
    pub dust_threshold: Option<u128>,
    pub sendable_balance: Option<u128>,
    pub ethereum_required: Option<u128>,
}

impl RawWalletFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    fn details_contain(&self, pattern: &str) -> bool {
        self.details.as_deref().is_some_and(|d| d.contains(pattern))
    }
}

/// Transaction construction failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid address")]
    InvalidAddress,

    #[error("Invalid tag")]
    InvalidTag,

    #[error("Invalid invoiceID")]
    InvalidInvoiceId,

    #[error("Invalid memo")]
    InvalidMemo,

    #[error("Inactive account")]
    InactiveAccount,

    #[error("Destination address equal source address")]
    DestinationEqualsSource,

    #[error("Invalid value")]
    InvalidValue(ValueRejection),

    #[error("Invalid gasLimit")]
    InvalidGasLimit,

    #[error("Invalid fee")]
    InvalidFee,

    #[error("Transaction too large")]
    TransactionTooLarge,

    #[error("Insufficient funds")]
    InsufficientFunds(Shortfall),

    #[error("Insufficient ethereum funds for token transaction")]
    InsufficientEthereumForToken { ethereum_required: u128 },

    #[error("cs-node-error")]
    NodeError,

    /// Anything else, kept as reported
    #[error("{}", .0.message)]
    Other(RawWalletFailure),
}

impl WalletError {
    /// Short kind name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            WalletError::InvalidAddress => "invalid_address",
            WalletError::InvalidTag => "invalid_tag",
            WalletError::InvalidInvoiceId => "invalid_invoice_id",
            WalletError::InvalidMemo => "invalid_memo",
            WalletError::InactiveAccount => "inactive_account",
            WalletError::DestinationEqualsSource => "destination_equals_source",
            WalletError::InvalidValue(_) => "invalid_value",
            WalletError::InvalidGasLimit => "invalid_gas_limit",
            WalletError::InvalidFee => "invalid_fee",
            WalletError::TransactionTooLarge => "transaction_too_large",
            WalletError::InsufficientFunds(_) => "insufficient_funds",
            WalletError::InsufficientEthereumForToken { .. } => "insufficient_ethereum_for_token",
            WalletError::NodeError => "node_error",
            WalletError::Other(_) => "other",
        }
    }
}

impl From<RawWalletFailure> for WalletError {
    /// Classify a free-text failure; the first matching pattern wins
    fn from(raw: RawWalletFailure) -> Self {
        let message = raw.message.as_str();

        if message.contains("Invalid address") {
            WalletError::InvalidAddress
        } else if message.contains("Invalid tag") {
            WalletError::InvalidTag
        } else if message.contains("Invalid invoiceID") {
            WalletError::InvalidInvoiceId
        } else if message.contains("Invalid memo") {
            WalletError::InvalidMemo
        } else if message.contains("Inactive account") {
            WalletError::InactiveAccount
        } else if message.contains("Destination address equal source address") {
            WalletError::DestinationEqualsSource
        } else if message.contains("Invalid value") {
            if raw.details_contain("Less than minimum reserve") {
                WalletError::InvalidValue(ValueRejection::BelowMinReserve)
            } else {
                WalletError::InvalidValue(ValueRejection::BelowDust {
                    dust_threshold: raw.dust_threshold.unwrap_or_default(),
                })
            }
        } else if message.contains("Invalid gasLimit") {
            WalletError::InvalidGasLimit
        } else if message.contains("Invalid fee") {
            WalletError::InvalidFee
        } else if message.contains("Transaction too large") {
            WalletError::TransactionTooLarge
        } else if message.contains("Insufficient funds") {
            if raw.details_contain("Additional funds confirmation pending") {
                WalletError::InsufficientFunds(Shortfall::ConfirmationPending)
            } else if raw.details_contain("Attempt to empty wallet") {
                WalletError::InsufficientFunds(Shortfall::EmptyWallet {
                    sendable_balance: raw.sendable_balance.unwrap_or_default(),
                })
            } else {
                WalletError::InsufficientFunds(Shortfall::General)
            }
        } else if message.contains("Insufficient ethereum funds for token transaction") {
            WalletError::InsufficientEthereumForToken {
                ethereum_required: raw.ethereum_required.unwrap_or_default(),
            }
        } else if message == "cs-node-error" {
            WalletError::NodeError
        } else {
            WalletError::Other(raw)
        }
    }
}
