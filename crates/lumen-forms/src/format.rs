// File: src/format.rs
// Purpose: Display formatting and lenient parsing for form values

use once_cell::sync::Lazy;
use regex::Regex;

// Optional sign, optional integer part, optional point, at least one digit
static NUMBER_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?[0-9]*\.?[0-9]+$").unwrap()
});

pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_CURRENCY: &str = "USD";

/// Rewrite a 10-digit phone number as `(XXX) XXX-XXXX`.
///
/// Non-digits are stripped first. Anything that does not leave exactly ten
/// digits is returned unchanged.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 10 {
        return phone.to_string();
    }

    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

/// Parse a plain decimal number such as `42`, `-3.5` or `.5`.
///
/// Returns `None` for anything else, including `""`, `"-"`, `"1e3"` and
/// strings with surrounding whitespace.
pub fn parse_number(input: &str) -> Option<f64> {
    if !NUMBER_GRAMMAR.is_match(input) {
        return None;
    }
    input.parse().ok()
}

/// Separators and symbol placement for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberStyle {
    group: &'static str,
    decimal: &'static str,
    symbol_after: bool,
}

const EN: NumberStyle = NumberStyle {
    group: ",",
    decimal: ".",
    symbol_after: false,
};

const DE: NumberStyle = NumberStyle {
    group: ".",
    decimal: ",",
    symbol_after: true,
};

const FR: NumberStyle = NumberStyle {
    group: "\u{202f}",
    decimal: ",",
    symbol_after: true,
};

fn number_style(locale: &str) -> NumberStyle {
    match language(locale) {
        "de" | "es" | "it" | "nl" | "pt" => DE,
        "fr" => FR,
        // en, zh, ja, ko and anything unrecognised
        _ => EN,
    }
}

fn language(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

fn is_chinese(locale: &str) -> bool {
    language(locale).eq_ignore_ascii_case("zh")
}

/// Currency symbol as shown to readers of `locale`
fn currency_symbol(currency: &str, locale: &str) -> String {
    let zh = is_chinese(locale);
    let symbol = match currency.to_ascii_uppercase().as_str() {
        "USD" if zh => "US$",
        "USD" => "$",
        "CNY" if zh => "¥",
        "CNY" => "CN¥",
        "JPY" if zh => "JP¥",
        "JPY" => "¥",
        "EUR" => "€",
        "GBP" => "£",
        "HKD" => "HK$",
        other => return format!("{}\u{a0}", other),
    };
    symbol.to_string()
}

fn fraction_digits(currency: &str) -> usize {
    match currency.to_ascii_uppercase().as_str() {
        "JPY" | "KRW" => 0,
        _ => 2,
    }
}

/// Format an amount of money for display in `locale`.
///
/// Covers the site's own locales (`en-US`, `zh-CN`) and the common European
/// separator conventions. Unknown locales format like `en-US`; unknown
/// currencies use the ISO code as their symbol.
pub fn format_currency(amount: f64, currency: &str, locale: &str) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let style = number_style(locale);
    let symbol = currency_symbol(currency, locale);
    let digits = fraction_digits(currency);

    let fixed = format!("{:.*}", digits, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut number = group_thousands(int_part, style.group);
    if let Some(frac) = frac_part {
        number.push_str(style.decimal);
        number.push_str(frac);
    }

    // -0.00 after rounding prints without a sign
    let negative = amount < 0.0 && fixed.chars().any(|c| matches!(c, '1'..='9'));
    let sign = if negative { "-" } else { "" };

    if style.symbol_after {
        format!("{}{}\u{a0}{}", sign, number, symbol.trim_end())
    } else {
        format!("{}{}{}", sign, symbol, number)
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }

    out
}
