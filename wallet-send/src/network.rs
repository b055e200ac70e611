//! Supported networks
//!
//! Every network the validator can dispatch to, grouped into families that
//! share a transaction construction signature.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Network family, one per transaction construction signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkFamily {
    /// Bitcoin and its forks: destination, amount, fee
    Utxo,
    /// Destination, amount
    Ethereum,
    /// Destination, amount, tag, invoice ID
    Ripple,
    /// Destination, amount, memo, activation flag
    Stellar,
    /// Destination, amount, memo
    Eos,
    /// Destination, amount, fee
    Monero,
}

/// Network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Bitcoin,
    BitcoinCash,
    BitcoinSv,
    Litecoin,
    Dogecoin,
    Dash,
    Ethereum,
    Ripple,
    Stellar,
    Eos,
    Monero,
}

impl Network {
    pub const ALL: [Network; 11] = [
        Network::Bitcoin,
        Network::BitcoinCash,
        Network::BitcoinSv,
        Network::Litecoin,
        Network::Dogecoin,
        Network::Dash,
        Network::Ethereum,
        Network::Ripple,
        Network::Stellar,
        Network::Eos,
        Network::Monero,
    ];

    /// Wire name, as reported by wallets
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Bitcoin => "bitcoin",
            Network::BitcoinCash => "bitcoincash",
            Network::BitcoinSv => "bitcoinsv",
            Network::Litecoin => "litecoin",
            Network::Dogecoin => "dogecoin",
            Network::Dash => "dash",
            Network::Ethereum => "ethereum",
            Network::Ripple => "ripple",
            Network::Stellar => "stellar",
            Network::Eos => "eos",
            Network::Monero => "monero",
        }
    }

    pub fn family(&self) -> NetworkFamily {
        match self {
            Network::Bitcoin
            | Network::BitcoinCash
            | Network::BitcoinSv
            | Network::Litecoin
            | Network::Dogecoin
            | Network::Dash => NetworkFamily::Utxo,
            Network::Ethereum => NetworkFamily::Ethereum,
            Network::Ripple => NetworkFamily::Ripple,
            Network::Stellar => NetworkFamily::Stellar,
            Network::Eos => NetworkFamily::Eos,
            Network::Monero => NetworkFamily::Monero,
        }
    }

    /// Number of decimal places between the display unit and the atomic unit
    pub fn decimals(&self) -> u32 {
        match self.family() {
            NetworkFamily::Utxo => 8,
            NetworkFamily::Ethereum => 18,
            NetworkFamily::Ripple => 6,
            NetworkFamily::Stellar => 7,
            NetworkFamily::Eos => 4,
            NetworkFamily::Monero => 12,
        }
    }

    /// Display unit ticker
    pub fn denomination(&self) -> &'static str {
        match self {
            Network::Bitcoin => "BTC",
            Network::BitcoinCash => "BCH",
            Network::BitcoinSv => "BSV",
            Network::Litecoin => "LTC",
            Network::Dogecoin => "DOGE",
            Network::Dash => "DASH",
            Network::Ethereum => "ETH",
            Network::Ripple => "XRP",
            Network::Stellar => "XLM",
            Network::Eos => "EOS",
            Network::Monero => "XMR",
        }
    }

    /// Wire name with its first letter capitalized, e.g. "Bitcoincash"
    pub fn display_name(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|network| network.as_str() == s)
            .ok_or_else(|| Error::UnsupportedNetwork(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_names() {
        for network in Network::ALL {
            assert_eq!(network.as_str().parse::<Network>().unwrap(), network);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "solana".parse::<Network>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedNetwork(name) if name == "solana"));
        // Names are case sensitive
        assert!("Bitcoin".parse::<Network>().is_err());
    }

    #[test]
    fn test_families() {
        assert_eq!(Network::Dogecoin.family(), NetworkFamily::Utxo);
        assert_eq!(Network::Dash.family(), NetworkFamily::Utxo);
        assert_eq!(Network::Monero.family(), NetworkFamily::Monero);
        assert_eq!(Network::Ethereum.decimals(), 18);
        assert_eq!(Network::Ripple.decimals(), 6);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Network::Ethereum.display_name(), "Ethereum");
        assert_eq!(Network::BitcoinCash.display_name(), "Bitcoincash");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Network::BitcoinSv).unwrap();
        assert_eq!(json, "\"bitcoinsv\"");
        let network: Network = serde_json::from_str("\"litecoin\"").unwrap();
        assert_eq!(network, Network::Litecoin);
    }
}
