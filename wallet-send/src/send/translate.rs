//! Wallet failure translation

use crate::error::{Error, ValidationError};
use crate::i18n::Translate;
use crate::messages;
use crate::network::{Network, NetworkFamily};
use crate::units::to_unit_string;
use crate::wallet::{Shortfall, ValueRejection, WalletError, WalletHandle};
use super::validator::SendValidator;

/// Decimal places used when quoting ether for token transaction fees
const ETHER_DECIMALS: u32 = 18;

impl<T: Translate> SendValidator<T> {
    /// Turn a construction failure into the error handed back to the caller
    pub fn translate_failure<Tx>(
        &self,
        wallet: &WalletHandle<Tx>,
        network: Network,
        err: WalletError,
    ) -> Error {
        let decimals = wallet.decimals();
        let min_reserve = || to_unit_string(wallet.min_reserve(), decimals);
        let denomination = || wallet.denomination().to_string();

        let validation = match err {
            WalletError::InvalidAddress => self.localized(messages::INVALID_ADDRESS, &[]),
            WalletError::InvalidTag => self.localized(messages::INVALID_TAG, &[]),
            WalletError::InvalidInvoiceId => self.localized(messages::INVALID_INVOICE_ID, &[]),
            WalletError::InvalidMemo => self.localized(messages::INVALID_MEMO, &[]),
            WalletError::InactiveAccount => self.localized(
                messages::INACTIVE_ACCOUNT,
                &[("minReserve", min_reserve()), ("denomination", denomination())],
            ),
            WalletError::DestinationEqualsSource => self.localized(messages::SEND_TO_SELF, &[]),
            WalletError::InvalidValue(ValueRejection::BelowMinReserve) => self.localized(
                messages::RECIPIENT_NOT_ACTIVATED,
                &[("minReserve", min_reserve()), ("denomination", denomination())],
            ),
            WalletError::InvalidValue(ValueRejection::BelowDust { dust_threshold }) => {
                let threshold = to_unit_string(dust_threshold, decimals);
                let dust = format!("{} {}", threshold, denomination());
                self.localized(messages::BELOW_DUST, &[("dust", dust)])
            }
            WalletError::InvalidGasLimit => self.localized(messages::INVALID_GAS_LIMIT, &[]),
            // Not in the catalogs yet, always English
            WalletError::InvalidFee => ValidationError::new(messages::INVALID_FEE),
            WalletError::TransactionTooLarge => {
                self.localized(messages::TRANSACTION_TOO_LARGE, &[])
            }
            WalletError::InsufficientFunds(Shortfall::ConfirmationPending) => {
                self.localized(messages::CONFIRMATION_PENDING, &[])
            }
            WalletError::InsufficientFunds(Shortfall::EmptyWallet { sendable_balance }) => {
                let sendable = to_unit_string(sendable_balance, decimals);
                match network.family() {
                    NetworkFamily::Ethereum => self
                        .localized(
                            messages::EMPTY_WALLET_FEE,
                            &[("sendableBalance", sendable.clone())],
                        )
                        .with_sendable_balance(sendable),
                    NetworkFamily::Eos => self
                        .localized(messages::EMPTY_WALLET, &[("sendableBalance", sendable.clone())])
                        .with_sendable_balance(sendable),
                    NetworkFamily::Ripple | NetworkFamily::Stellar => self
                        .localized(
                            messages::EMPTY_WALLET_RESERVE,
                            &[
                                ("sendableBalance", sendable.clone()),
                                ("minReserve", min_reserve()),
                                ("denomination", denomination()),
                            ],
                        )
                        .with_sendable_balance(sendable),
                    _ => self.localized(messages::INSUFFICIENT_FUNDS, &[]),
                }
            }
            WalletError::InsufficientFunds(Shortfall::General) => {
                self.localized(messages::INSUFFICIENT_FUNDS, &[])
            }
            WalletError::InsufficientEthereumForToken { ethereum_required } => self.localized(
                messages::INSUFFICIENT_ETHEREUM,
                &[("ethereumRequired", to_unit_string(ethereum_required, ETHER_DECIMALS))],
            ),
            WalletError::NodeError => {
                self.localized(messages::NODE_ERROR, &[("network", network.display_name())])
            }
            other @ WalletError::Other(_) => {
                tracing::warn!(network = %network, error = %other, "unrecognized wallet failure");
                return Error::Wallet(other);
            }
        };

        tracing::debug!(
            network = %network,
            message = %validation.message,
            "translated wallet failure"
        );
        Error::Validation(validation)
    }

    fn localized(&self, key: &str, values: &[(&str, String)]) -> ValidationError {
        ValidationError::new(self.translator.translate(key, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::{EosWallet, WalletInfo};
    use std::sync::Arc;

    struct Eos;

    impl WalletInfo for Eos {
        fn network_name(&self) -> &str {
            "eos"
        }
    }

    impl EosWallet for Eos {
        type Tx = ();

        fn create_tx(
            &self,
            _to: &str,
            _amount: u128,
            _memo: Option<&str>,
        ) -> Result<(), WalletError> {
            Ok(())
        }
    }

    fn message(err: Error) -> String {
        match err {
            Error::Validation(e) => e.message,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_eos_empty_wallet() {
        let validator = SendValidator::english().unwrap();
        let wallet: WalletHandle<()> = WalletHandle::Eos(Arc::new(Eos));
        let err = validator.translate_failure(
            &wallet,
            Network::Eos,
            WalletError::InsufficientFunds(Shortfall::EmptyWallet { sendable_balance: 12_500 }),
        );
        let validation = err.as_validation().unwrap().clone();
        assert_eq!(validation.sendable_balance.as_deref(), Some("1.25"));
        assert_eq!(
            validation.message,
            "It seems like you are trying to empty your wallet. Max amount you can send is 1.25. We have amended the value in the amount field for you."
        );
    }

    #[test]
    fn test_invalid_fee_is_not_localized() {
        let mut templates = std::collections::HashMap::new();
        templates.insert(messages::INVALID_FEE.to_string(), "Frais invalides".to_string());
        let validator = SendValidator::new(crate::i18n::Catalog::new("fr", templates).unwrap());
        let wallet: WalletHandle<()> = WalletHandle::Eos(Arc::new(Eos));
        let err = validator.translate_failure(&wallet, Network::Eos, WalletError::InvalidFee);
        assert_eq!(message(err), "Please enter valid fee");
    }
}
