//! Send validation

use crate::config::LocaleConfig;
use crate::error::{Error, Result};
use crate::i18n::{Catalog, Translate};
use crate::network::NetworkFamily;
use crate::units::to_atom;
use crate::wallet::{WalletError, WalletHandle};
use super::types::SendRequest;

/// Validates send requests and constructs their transactions
pub struct SendValidator<T = Catalog> {
    pub(super) translator: T,
}

impl SendValidator<Catalog> {
    /// Validator producing English messages
    pub fn english() -> Result<Self> {
        Ok(Self::new(Catalog::english()?))
    }

    /// Validator using the catalog selected by `config`
    pub fn from_config(config: &LocaleConfig) -> Result<Self> {
        Ok(Self::new(Catalog::from_config(config)?))
    }
}

impl<T: Translate> SendValidator<T> {
    pub fn new(translator: T) -> Self {
        Self { translator }
    }

    /// Construct the transaction for `request` and store it in `request.tx`
    ///
    /// Wallet failures with a known meaning come back as
    /// [`Error::Validation`] carrying a localized message; anything else is
    /// returned unchanged as [`Error::Wallet`].
    pub async fn validate<Tx: Send>(&self, request: &mut SendRequest<Tx>) -> Result<()> {
        let network = request.wallet.network().map_err(|e| {
            tracing::warn!(network = %request.wallet.network_name(), "unsupported network");
            e
        })?;

        if network.family() == NetworkFamily::Stellar && request.destination_info.is_none() {
            return Err(Error::InvalidRequest(
                "destination info is required for stellar".to_string(),
            ));
        }

        let decimals = request.wallet.decimals();
        let amount = to_atom(&request.amount, decimals)?;
        let fee = match &request.fee {
            Some(fee) => to_atom(fee, decimals)?,
            None => 0,
        };

        tracing::debug!(
            network = %network,
            to = %request.to,
            amount = %amount,
            fee = %fee,
            "constructing transaction"
        );

        let outgoing = Outgoing {
            to: &request.to,
            amount,
            fee,
            tag: request.tag.as_deref(),
            invoice_id: request.invoice_id.as_deref(),
            memo: request.memo.as_deref(),
            needs_activation: request.destination_info.is_some_and(|info| !info.is_active),
        };
        let result = construct(&request.wallet, &outgoing).await;

        match result {
            Ok(tx) => {
                request.tx = Some(tx);
                Ok(())
            }
            Err(err) => Err(self.translate_failure(&request.wallet, network, err)),
        }
    }
}

/// Arguments handed to the wallet constructor, in atomic units
struct Outgoing<'a> {
    to: &'a str,
    amount: u128,
    fee: u128,
    tag: Option<&'a str>,
    invoice_id: Option<&'a str>,
    memo: Option<&'a str>,
    needs_activation: bool,
}

async fn construct<Tx: Send>(
    wallet: &WalletHandle<Tx>,
    outgoing: &Outgoing<'_>,
) -> std::result::Result<Tx, WalletError> {
    let Outgoing { to, amount, fee, tag, invoice_id, memo, needs_activation } = *outgoing;

    match wallet {
        WalletHandle::Utxo(wallet) => wallet.create_tx(to, amount, fee),
        WalletHandle::Ethereum(wallet) => wallet.create_tx(to, amount),
        WalletHandle::Ripple(wallet) => wallet.create_tx(to, amount, tag, invoice_id).await,
        WalletHandle::Stellar(wallet) => wallet.create_tx(to, amount, memo, needs_activation),
        WalletHandle::Eos(wallet) => wallet.create_tx(to, amount, memo),
        WalletHandle::Monero(wallet) => wallet.create_tx(to, amount, fee).await,
    }
}
