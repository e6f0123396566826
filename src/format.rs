/// Group digits in threes with commas, the way `en-US` locales print integers.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Counter text as shown on a stat card, e.g. `50,000+`.
pub fn counter_label(value: u64, suffix: &str) -> String {
    format!("{}{}", group_digits(value), suffix)
}
