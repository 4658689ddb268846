//! Currency formatting
//!
//! Renders amounts for display. The default configuration is Angolan Kwanza
//! (`pt-AO`, `AOA`, symbol `Kz`) with no fractional digits, so values are
//! rounded to the nearest whole unit on output only.

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Locale-dependent currency rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// BCP-47 locale tag; decides separators and symbol placement
    #[serde(default = "default_locale")]
    pub locale: String,

    /// ISO-4217 currency code
    #[serde(default = "default_code")]
    pub code: String,

    /// Symbol printed next to the amount
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Digits after the decimal separator
    #[serde(default)]
    pub fraction_digits: u8,
}

fn default_locale() -> String {
    "pt-AO".to_string()
}

fn default_code() -> String {
    "AOA".to_string()
}

fn default_symbol() -> String {
    "Kz".to_string()
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            code: default_code(),
            symbol: default_symbol(),
            fraction_digits: 0,
        }
    }
}

impl CurrencyFormat {
    /// Whether the locale writes `1 234,50 Kz` (Portuguese style) rather
    /// than `Kz1,234.50`
    fn is_portuguese(&self) -> bool {
        self.locale.to_lowercase().starts_with("pt")
    }

    fn separators(&self) -> (char, char) {
        if self.is_portuguese() {
            (' ', ',')
        } else {
            (',', '.')
        }
    }

    /// Format a raw amount
    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return format!("-- {}", self.symbol);
        }

        let digits = u32::from(self.fraction_digits.min(6));
        let factor = 10f64.powi(digits as i32);
        let scaled = (amount.abs() * factor).round();
        let whole = (scaled / factor).trunc() as u64;
        let fraction = (scaled - whole as f64 * factor).round() as u64;

        let (group_sep, decimal_sep) = self.separators();
        let mut number = group_thousands(whole, group_sep);
        if digits > 0 {
            number.push(decimal_sep);
            number.push_str(&format!("{:0width$}", fraction, width = digits as usize));
        }

        let sign = if amount < 0.0 && scaled > 0.0 { "-" } else { "" };

        if self.is_portuguese() {
            format!("{}{} {}", sign, number, self.symbol)
        } else {
            format!("{}{}{}", sign, self.symbol, number)
        }
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Format an amount with the fixed Kwanza configuration
pub fn format_currency(amount: Money) -> String {
    CurrencyFormat::default().format(amount.value())
}
