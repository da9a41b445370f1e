//! Built-in locale data.

/// Delimiters and currency symbol of a numeral locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralLocale {
    pub code: &'static str,
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub currency_symbol: &'static str,
}

const fn locale(
    code: &'static str,
    thousands_separator: char,
    decimal_separator: char,
    currency_symbol: &'static str,
) -> NumeralLocale {
    NumeralLocale {
        code,
        decimal_separator,
        thousands_separator,
        currency_symbol,
    }
}

static BUILTIN: [NumeralLocale; 16] = [
    locale("us", ',', '.', "$"),
    locale("es", '.', ',', "€"),
    locale("th", ',', '.', "฿"),
    locale("de", ' ', ',', "€"),
    locale("fr", ' ', ',', "€"),
    locale("fi", ' ', ',', "€"),
    locale("ru", ' ', ',', "руб."),
    locale("ja", ',', '.', "¥"),
    locale("chs", ',', '.', "¥"),
    locale("en-au", ',', '.', "$"),
    locale("fr-ca", ' ', ',', "$"),
    locale("en-gb", ',', '.', "£"),
    locale("da-dk", '.', ',', "DKK"),
    locale("pt-br", '.', ',', "R$"),
    locale("cs", ' ', ',', "Kč"),
    locale("de-ch", '\'', '.', "CHF"),
];

impl Default for NumeralLocale {
    fn default() -> Self {
        Self::us().clone()
    }
}

impl NumeralLocale {
    /// US English locale.
    pub fn us() -> &'static NumeralLocale {
        &BUILTIN[0]
    }

    /// Looks up a numeral locale code. Unknown codes fall back to US English.
    pub fn lookup(code: &str) -> &'static NumeralLocale {
        BUILTIN
            .iter()
            .find(|locale| locale.code.eq_ignore_ascii_case(code))
            .unwrap_or_else(Self::us)
    }
}
