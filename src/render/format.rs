//! Number formatting for the table and the summary stats.

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two decimals, rounding half away from zero on the scaled value so that
/// `0.365` gives `"0.37"` rather than the binary-exact `"0.36"`.
/// Values too large to scale are printed as they are.
pub fn fixed2(v: f64) -> String {
    let scaled = (v * 100.0).round();
    if scaled.is_finite() {
        format!("{:.2}", scaled / 100.0)
    } else {
        format!("{v:.2}")
    }
}

/// `+3.46%` for zero or positive values, `-1.50%` for negative ones.
pub fn signed_percent(v: f64) -> String {
    let sign = if v >= 0.0 { "+" } else { "" };
    format!("{sign}{}%", fixed2(v))
}
