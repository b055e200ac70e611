//! Display unit and atomic unit conversion

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Amount in display units (e.g. BTC, ETH), as typed by the user
///
/// Accepts either a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HumanAmount {
    Text(String),
    Number(f64),
}

impl HumanAmount {
    fn to_decimal(&self) -> Result<Decimal> {
        match self {
            HumanAmount::Text(text) => {
                let text = text.trim();
                Decimal::from_str(text)
                    .or_else(|_| Decimal::from_scientific(text))
                    .map_err(|e| Error::InvalidAmount(format!("{:?}: {}", text, e)))
            }
            HumanAmount::Number(number) => Decimal::from_f64(*number)
                .ok_or_else(|| Error::InvalidAmount(number.to_string())),
        }
    }
}

impl fmt::Display for HumanAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HumanAmount::Text(text) => f.write_str(text),
            HumanAmount::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for HumanAmount {
    fn from(value: &str) -> Self {
        HumanAmount::Text(value.to_string())
    }
}

impl From<String> for HumanAmount {
    fn from(value: String) -> Self {
        HumanAmount::Text(value)
    }
}

impl From<f64> for HumanAmount {
    fn from(value: f64) -> Self {
        HumanAmount::Number(value)
    }
}

impl From<Decimal> for HumanAmount {
    fn from(value: Decimal) -> Self {
        HumanAmount::Text(value.to_string())
    }
}

/// Convert a display amount to atomic units
///
/// Fractional digits beyond `decimals` are truncated.
pub fn to_atom(amount: &HumanAmount, decimals: u32) -> Result<u128> {
    let value = amount.to_decimal()?.normalize();
    if value.is_sign_negative() && !value.is_zero() {
        return Err(Error::InvalidAmount(format!("negative amount {}", amount)));
    }

    let mantissa = value.mantissa().unsigned_abs();
    let scale = value.scale();
    let overflow = || Error::InvalidAmount(format!("amount {} out of range", amount));

    if scale <= decimals {
        let factor = 10u128.checked_pow(decimals - scale).ok_or_else(overflow)?;
        mantissa.checked_mul(factor).ok_or_else(overflow)
    } else {
        let divisor = 10u128.checked_pow(scale - decimals).ok_or_else(overflow)?;
        Ok(mantissa / divisor)
    }
}

/// Format atomic units as a display amount with trailing zeros trimmed
pub fn to_unit_string(atoms: u128, decimals: u32) -> String {
    let Some(base) = 10u128.checked_pow(decimals) else {
        return atoms.to_string();
    };

    let whole = atoms / base;
    let fraction = atoms % base;
    if fraction == 0 {
        return whole.to_string();
    }

    let fraction = format!("{:0width$}", fraction, width = decimals as usize);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}
