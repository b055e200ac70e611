//! Send request types

use serde::{Deserialize, Serialize};

use crate::units::HumanAmount;
use crate::wallet::WalletHandle;

/// Whether the destination account exists on chain (Stellar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationInfo {
    pub is_active: bool,
}

/// Send request
///
/// Input and output at once: a successful validation stores the
/// constructed transaction in `tx`.
#[derive(Debug)]
pub struct SendRequest<Tx> {
    /// Wallet that constructs the transaction
    pub wallet: WalletHandle<Tx>,
    /// Destination address
    pub to: String,
    /// Amount in display units
    pub amount: HumanAmount,
    /// Fee in display units (bitcoin family and monero)
    pub fee: Option<HumanAmount>,
    /// Destination tag (ripple)
    pub tag: Option<String>,
    /// Invoice ID (ripple)
    pub invoice_id: Option<String>,
    /// Memo (stellar, eos)
    pub memo: Option<String>,
    /// Destination account state (stellar)
    pub destination_info: Option<DestinationInfo>,
    /// Constructed transaction
    pub tx: Option<Tx>,
}

impl<Tx> SendRequest<Tx> {
    pub fn new(
        wallet: WalletHandle<Tx>,
        to: impl Into<String>,
        amount: impl Into<HumanAmount>,
    ) -> Self {
        Self {
            wallet,
            to: to.into(),
            amount: amount.into(),
            fee: None,
            tag: None,
            invoice_id: None,
            memo: None,
            destination_info: None,
            tx: None,
        }
    }

    pub fn with_fee(mut self, fee: impl Into<HumanAmount>) -> Self {
        self.fee = Some(fee.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_invoice_id(mut self, invoice_id: impl Into<String>) -> Self {
        self.invoice_id = Some(invoice_id.into());
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn with_destination_info(mut self, destination_info: DestinationInfo) -> Self {
        self.destination_info = Some(destination_info);
        self
    }
}
