//! Pot-odds break-even formatting.
//!
//! The break-even fraction is computed upstream by the simulation backend:
//! with mean pots won `W`, a bet of size `b` into a pot of size `p` has
//! positive expected value iff `b < p * W / (1 - W)`. This module only
//! renders that externally supplied fraction against a user-entered pot
//! size; it performs no probability computation.

/// Message shown when the break-even fraction is unbounded.
const ALWAYS_PROFITABLE: &str =
    "You always win a share of the pot: any bet size has positive expected value.";

/// Render the pot-odds advice for a pot of `pot_size` given the break-even
/// fraction. A non-finite fraction means no finite bet is ever unprofitable.
pub fn break_even_message(fraction: f64, pot_size: u64) -> String {
    if !fraction.is_finite() {
        return ALWAYS_PROFITABLE.to_string();
    }
    let fraction = fraction.max(0.0);
    let max_bet = (pot_size as f64 * fraction).floor() as u64;
    let pct = (fraction * 100.0).round() as u64;
    format!(
        "Maximum profitable bet: {} ({}% of the pot).",
        group_thousands(max_bet),
        pct
    )
}

/// Format an integer with comma grouping, e.g. `1234567` -> `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
