//! User-facing message keys
//!
//! Keys are the English source sentences. Substitution names used by each
//! key are listed next to it.

pub const INVALID_ADDRESS: &str = "Please enter a valid address to send to";
pub const INVALID_TAG: &str = "Please enter a valid destination tag";
pub const INVALID_INVOICE_ID: &str = "Please enter a valid invoice ID";
pub const INVALID_MEMO: &str = "Please enter a valid memo";
/// `:minReserve`, `:denomination`
pub const INACTIVE_ACCOUNT: &str = "Your wallet isn't activated. To activate it please send greater than minimum reserve (:minReserve :denomination) to your wallet address.";
pub const SEND_TO_SELF: &str = "Please enter an address other than your wallet address";
/// `:minReserve`, `:denomination`
pub const RECIPIENT_NOT_ACTIVATED: &str = "Recipient's wallet isn't activated. You can send only amount greater than :minReserve :denomination.";
/// `:dust`
pub const BELOW_DUST: &str = "Please enter an amount above";
pub const INVALID_GAS_LIMIT: &str = "Please enter Gas Limit greater than zero";
// TODO: move into the catalogs once wallets report fee errors consistently
pub const INVALID_FEE: &str = "Please enter valid fee";
pub const TRANSACTION_TOO_LARGE: &str = "Transaction too large";
pub const CONFIRMATION_PENDING: &str = "Some funds are temporarily unavailable. To send this transaction, you will need to wait for your pending transactions to be confirmed first.";
/// `:sendableBalance`
pub const EMPTY_WALLET_FEE: &str = "It seems like you are trying to empty your wallet. Taking transaction fee into account, we estimated that the max amount you can send is. We have amended the value in the amount field for you";
/// `:sendableBalance`
pub const EMPTY_WALLET: &str = "It seems like you are trying to empty your wallet. Max amount you can send is. We have amended the value in the amount field for you";
/// `:sendableBalance`, `:minReserve`, `:denomination`
pub const EMPTY_WALLET_RESERVE: &str = "It seems like you are trying to empty your wallet. Taking transaction fee and minimum reserve into account, we estimated that the max amount you can send is. We have amended the value in the amount field for you";
pub const INSUFFICIENT_FUNDS: &str = "You do not have enough funds in your wallet (incl. fee)";
/// `:ethereumRequired`
pub const INSUFFICIENT_ETHEREUM: &str = "You do not have enough Ethereum funds to pay transaction fee (:ethereumRequired ETH).";
/// `:network`
pub const NODE_ERROR: &str = "Network node error. Please try again later.";

/// Every key a catalog is expected to translate
pub const ALL: &[&str] = &[
    INVALID_ADDRESS,
    INVALID_TAG,
    INVALID_INVOICE_ID,
    INVALID_MEMO,
    INACTIVE_ACCOUNT,
    SEND_TO_SELF,
    RECIPIENT_NOT_ACTIVATED,
    BELOW_DUST,
    INVALID_GAS_LIMIT,
    TRANSACTION_TOO_LARGE,
    CONFIRMATION_PENDING,
    EMPTY_WALLET_FEE,
    EMPTY_WALLET,
    EMPTY_WALLET_RESERVE,
    INSUFFICIENT_FUNDS,
    INSUFFICIENT_ETHEREUM,
    NODE_ERROR,
];
