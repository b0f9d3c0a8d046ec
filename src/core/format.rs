use crate::domain::model::Currency;

/// Grouping separator used when displaying an amount. Both en-US (usd) and
/// es-MX (mxn) group thousands with a comma.
fn grouping_separator(currency: Currency) -> char {
    match currency {
        Currency::Usd | Currency::Mxn => ',',
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// `1500` in usd renders as `$1,500`.
pub fn format_price(amount: u64, currency: Currency) -> String {
    format!(
        "{}{}",
        currency.symbol(),
        group_thousands(&amount.to_string(), grouping_separator(currency))
    )
}

/// Same as [`format_price`] with the upper-case currency code appended,
/// for places where both currencies share the `$` symbol side by side.
pub fn format_price_with_code(amount: u64, currency: Currency) -> String {
    format!(
        "{} {}",
        format_price(amount, currency),
        currency.code().to_ascii_uppercase()
    )
}
