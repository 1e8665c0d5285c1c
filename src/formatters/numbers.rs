/// Formats a number the way a JavaScript `Number` prints: integers without a
/// fractional part, everything else in shortest round-trip form.
pub fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Rupee amount with Indian digit grouping (`₹1,23,456.5`).
pub fn format_inr(amount: f64) -> String {
    format!("₹{}", group_en_in(amount))
}

/// Groups digits the en-IN way: the last three, then pairs. At most three
/// fraction digits are kept and trailing zeros are dropped.
pub fn group_en_in(value: f64) -> String {
    if !value.is_finite() {
        return plain_number(value);
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 2);
    let digits: Vec<char> = int_part.chars().collect();
    let head_len = digits.len().saturating_sub(3);
    for (i, ch) in digits[..head_len].iter().enumerate() {
        if i > 0 && (head_len - i) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }
    if head_len > 0 {
        grouped.push(',');
    }
    grouped.extend(&digits[head_len..]);

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
