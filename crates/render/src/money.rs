//! Currency formatting for minor-unit amounts.
//!
//! Each renderer owns its `MoneyFormat`; there is no process-wide formatter.

use crate::error::RenderError;

/// Largest number of minor digits whose scale (`10^n`) fits in a `u64`.
pub const MAX_MINOR_DIGITS: u32 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$1,730.00`
    Prefix,
    /// `1.730,00 €`
    Suffix,
}

/// How to print an amount held in minor currency units.
///
/// Fields are private so every instance has a scale that fits in a `u64`;
/// build one from a preset or through `MoneyFormat::new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    symbol: String,
    position: SymbolPosition,
    grouping_separator: char,
    decimal_separator: char,
    /// Digits after the decimal separator; 2 means 100 minor units per major unit.
    minor_digits: u32,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::en_us()
    }
}

impl MoneyFormat {
    /// Custom format. Fails when `minor_digits` exceeds `MAX_MINOR_DIGITS`.
    pub fn new(
        symbol: impl Into<String>,
        position: SymbolPosition,
        grouping_separator: char,
        decimal_separator: char,
        minor_digits: u32,
    ) -> Result<Self, RenderError> {
        if minor_digits > MAX_MINOR_DIGITS {
            return Err(RenderError::InvalidMinorDigits(minor_digits));
        }
        Ok(Self {
            symbol: symbol.into(),
            position,
            grouping_separator,
            decimal_separator,
            minor_digits,
        })
    }

    pub fn en_us() -> Self {
        Self {
            symbol: "$".to_string(),
            position: SymbolPosition::Prefix,
            grouping_separator: ',',
            decimal_separator: '.',
            minor_digits: 2,
        }
    }

    pub fn en_gb() -> Self {
        Self {
            symbol: "£".to_string(),
            ..Self::en_us()
        }
    }

    pub fn de_de() -> Self {
        Self {
            symbol: "€".to_string(),
            position: SymbolPosition::Suffix,
            grouping_separator: '.',
            decimal_separator: ',',
            minor_digits: 2,
        }
    }

    pub fn fr_fr() -> Self {
        Self {
            grouping_separator: ' ',
            ..Self::de_de()
        }
    }

    /// Preset for a BCP 47 style tag (`en-US`, `de_DE`, ...).
    pub fn for_locale(tag: &str) -> Result<Self, RenderError> {
        match tag.replace('_', "-").to_lowercase().as_str() {
            "en-us" | "en" => Ok(Self::en_us()),
            "en-gb" => Ok(Self::en_gb()),
            "de-de" | "de" => Ok(Self::de_de()),
            "fr-fr" | "fr" => Ok(Self::fr_fr()),
            _ => Err(RenderError::UnsupportedLocale(tag.to_string())),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn position(&self) -> SymbolPosition {
        self.position
    }

    pub fn minor_digits(&self) -> u32 {
        self.minor_digits
    }

    pub fn format(&self, minor_units: u64) -> String {
        // `minor_digits <= MAX_MINOR_DIGITS` is enforced at construction.
        let scale = 10u64.pow(self.minor_digits);
        let major = group_digits(minor_units / scale, self.grouping_separator);

        let mut number = major;
        if self.minor_digits > 0 {
            number.push(self.decimal_separator);
            number.push_str(&format!(
                "{:0width$}",
                minor_units % scale,
                width = self.minor_digits as usize
            ));
        }

        match self.position {
            SymbolPosition::Prefix => format!("{}{}", self.symbol, number),
            SymbolPosition::Suffix => format!("{} {}", number, self.symbol),
        }
    }
}

fn group_digits(value: u64, separator: char) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_dollars() {
        let money = MoneyFormat::en_us();
        assert_eq!(money.format(65_000), "$650.00");
        assert_eq!(money.format(173_000), "$1,730.00");
        assert_eq!(money.format(5), "$0.05");
        assert_eq!(money.format(0), "$0.00");
        assert_eq!(money.format(123_456_789), "$1,234,567.89");
    }

    #[test]
    fn european_presets() {
        assert_eq!(MoneyFormat::de_de().format(173_000), "1.730,00 €");
        assert_eq!(MoneyFormat::fr_fr().format(173_050), "1 730,50 €");
        assert_eq!(MoneyFormat::en_gb().format(58_000), "£580.00");
    }

    #[test]
    fn locale_lookup() {
        assert_eq!(MoneyFormat::for_locale("de_DE").unwrap(), MoneyFormat::de_de());
        assert_eq!(MoneyFormat::for_locale("en-US").unwrap(), MoneyFormat::en_us());
        assert_eq!(
            MoneyFormat::for_locale("xx-YY").unwrap_err(),
            RenderError::UnsupportedLocale("xx-YY".to_string())
        );
    }

    #[test]
    fn zero_minor_digits_prints_whole_units() {
        let money = MoneyFormat::new("¥", SymbolPosition::Prefix, ',', '.', 0).unwrap();
        assert_eq!(money.format(1_730), "¥1,730");
    }

    #[test]
    fn minor_digits_beyond_u64_scale_are_rejected() {
        let err = MoneyFormat::new("$", SymbolPosition::Prefix, ',', '.', 20).unwrap_err();
        assert_eq!(err, RenderError::InvalidMinorDigits(20));
    }

    #[test]
    fn widest_scale_formats_without_panicking() {
        let money =
            MoneyFormat::new("$", SymbolPosition::Prefix, ',', '.', MAX_MINOR_DIGITS).unwrap();
        assert_eq!(money.format(65_000), "$0.0000000000000065000");
        assert_eq!(money.format(u64::MAX), "$1.8446744073709551615");
    }
}
