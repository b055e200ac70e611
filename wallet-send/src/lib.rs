//! Wallet Send - Multi-chain send validation
//!
//! This library validates send requests for bitcoin-family, ethereum, ripple,
//! stellar, eos and monero wallets. Transaction construction is delegated to
//! the wallet; failures it reports are translated into localized messages
//! the user can act on.

pub mod error;
pub mod config;
pub mod network;
pub mod units;
pub mod wallet;
pub mod messages;
pub mod i18n;
pub mod send;

// Re-export commonly used types for convenience
pub use error::{Error, Result, ValidationError};
pub use network::{Network, NetworkFamily};
pub use send::{DestinationInfo, SendRequest, SendValidator};
pub use units::HumanAmount;
pub use wallet::{RawWalletFailure, WalletError, WalletHandle};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
