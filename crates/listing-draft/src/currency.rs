//! Accepted payment currencies

use crate::amount::parse_amount;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Payment currency for the main product and its order bumps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar
    #[default]
    Usd,
    /// Canadian dollar
    Cad,
    /// Euro
    Eur,
    /// Brazilian real
    Brl,
}

impl Currency {
    /// Every selectable currency, in picker order
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Cad, Currency::Eur, Currency::Brl];

    /// ISO 4217 code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Cad => "CAD",
            Self::Eur => "EUR",
            Self::Brl => "BRL",
        }
    }

    /// Symbol shown in front of amounts
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "US$",
            Self::Cad => "CA$",
            Self::Eur => "€",
            Self::Brl => "R$",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Unknown currency code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported currency: {0}")]
pub struct CurrencyParseError(pub String);

impl FromStr for Currency {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CurrencyParseError(s.to_string()))
    }
}

/// Render an amount for display, e.g. `US$ 10.00`
///
/// Blank or malformed amounts render as zero.
#[must_use]
pub fn format_price(currency: Currency, raw: &str) -> String {
    let value = parse_amount(raw).unwrap_or(0.0);
    format!("{} {:.2}", currency.symbol(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols() {
        assert_eq!(Currency::Usd.symbol(), "US$");
        assert_eq!(Currency::Cad.symbol(), "CA$");
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(Currency::Brl.symbol(), "R$");
    }

    #[test]
    fn parse_codes() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" BRL ".parse::<Currency>().unwrap(), Currency::Brl);
        assert!("GBP".parse::<Currency>().is_err());
    }

    #[test]
    fn price_display() {
        assert_eq!(format_price(Currency::Usd, "10"), "US$ 10.00");
        assert_eq!(format_price(Currency::Brl, "3.456"), "R$ 3.46");
        assert_eq!(format_price(Currency::Cad, ""), "CA$ 0.00");
        assert_eq!(format_price(Currency::Eur, "oops"), "€ 0.00");
    }

    #[test]
    fn serde_uses_codes() {
        let json = serde_json::to_string(&Currency::Cad).unwrap();
        assert_eq!(json, "\"CAD\"");
        let back: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(back, Currency::Eur);
    }
}
