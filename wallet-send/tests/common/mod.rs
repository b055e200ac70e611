//! Fake wallets shared by the integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use wallet_send::wallet::{
    EosWallet, EthereumWallet, MoneroWallet, RippleWallet, StellarWallet, UtxoWallet, WalletInfo,
};
use wallet_send::{Network, NetworkFamily, WalletError, WalletHandle};

/// Arguments a wallet constructor was called with; the fake returns it as the transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Utxo { to: String, amount: u128, fee: u128 },
    Ethereum { to: String, amount: u128 },
    Ripple { to: String, amount: u128, tag: Option<String>, invoice_id: Option<String> },
    Stellar { to: String, amount: u128, memo: Option<String>, needs_activation: bool },
    Eos { to: String, amount: u128, memo: Option<String> },
    Monero { to: String, amount: u128, fee: u128 },
}

pub struct FakeWallet {
    pub network: String,
    pub min_reserve: u128,
    pub failure: Option<WalletError>,
    pub calls: AtomicUsize,
}

impl FakeWallet {
    pub fn new(network: &str) -> Self {
        Self {
            network: network.to_string(),
            min_reserve: 0,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_min_reserve(mut self, min_reserve: u128) -> Self {
        self.min_reserve = min_reserve;
        self
    }

    pub fn failing(mut self, failure: impl Into<WalletError>) -> Self {
        self.failure = Some(failure.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond(&self, call: Call) -> Result<Call, WalletError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(call),
        }
    }
}

/// Wrap `wallet` in the handle variant matching its network
pub fn handle(wallet: Arc<FakeWallet>) -> WalletHandle<Call> {
    let network: Network = wallet.network.parse().expect("known network");
    match network.family() {
        NetworkFamily::Utxo => WalletHandle::Utxo(wallet),
        NetworkFamily::Ethereum => WalletHandle::Ethereum(wallet),
        NetworkFamily::Ripple => WalletHandle::Ripple(wallet),
        NetworkFamily::Stellar => WalletHandle::Stellar(wallet),
        NetworkFamily::Eos => WalletHandle::Eos(wallet),
        NetworkFamily::Monero => WalletHandle::Monero(wallet),
    }
}

impl WalletInfo for FakeWallet {
    fn network_name(&self) -> &str {
        &self.network
    }

    fn min_reserve(&self) -> u128 {
        self.min_reserve
    }
}

impl UtxoWallet for FakeWallet {
    type Tx = Call;

    fn create_tx(&self, to: &str, amount: u128, fee: u128) -> Result<Call, WalletError> {
        self.respond(Call::Utxo { to: to.to_string(), amount, fee })
    }
}

impl EthereumWallet for FakeWallet {
    type Tx = Call;

    fn create_tx(&self, to: &str, amount: u128) -> Result<Call, WalletError> {
        self.respond(Call::Ethereum { to: to.to_string(), amount })
    }
}

#[async_trait]
impl RippleWallet for FakeWallet {
    type Tx = Call;

    async fn create_tx(
        &self,
        to: &str,
        amount: u128,
        tag: Option<&str>,
        invoice_id: Option<&str>,
    ) -> Result<Call, WalletError> {
        tokio::task::yield_now().await;
        self.respond(Call::Ripple {
            to: to.to_string(),
            amount,
            tag: tag.map(str::to_string),
            invoice_id: invoice_id.map(str::to_string),
        })
    }
}

impl StellarWallet for FakeWallet {
    type Tx = Call;

    fn create_tx(
        &self,
        to: &str,
        amount: u128,
        memo: Option<&str>,
        needs_activation: bool,
    ) -> Result<Call, WalletError> {
        self.respond(Call::Stellar {
            to: to.to_string(),
            amount,
            memo: memo.map(str::to_string),
            needs_activation,
        })
    }
}

impl EosWallet for FakeWallet {
    type Tx = Call;

    fn create_tx(&self, to: &str, amount: u128, memo: Option<&str>) -> Result<Call, WalletError> {
        self.respond(Call::Eos { to: to.to_string(), amount, memo: memo.map(str::to_string) })
    }
}

#[async_trait]
impl MoneroWallet for FakeWallet {
    type Tx = Call;

    async fn create_tx(&self, to: &str, amount: u128, fee: u128) -> Result<Call, WalletError> {
        tokio::task::yield_now().await;
        self.respond(Call::Monero { to: to.to_string(), amount, fee })
    }
}

/// Send a tracing subscriber's output to the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
