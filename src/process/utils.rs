/// Trim whitespace and drop every `"` in the cell.
pub fn clean_str(raw: &str) -> String {
    raw.trim().replace('"', "")
}

/// Integer from the leading numeric prefix of `s` (`"300주"` → 300,
/// `"12.7"` → 12). Runs too long for `i64` saturate at its bounds.
/// `None` when there is no leading digit.
pub fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    match s[..end].parse() {
        Ok(v) => Some(v),
        // only overflow is left once the prefix is all digits
        Err(_) if bytes[0] == b'-' => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Float from the leading numeric prefix of `s` (`"1.5%"` → 1.5).
/// Accepts an optional sign, digits with at most one `.`, and an exponent
/// only when digits follow it.
pub fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
