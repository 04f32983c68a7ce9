// src/domain/format.rs

/// ru-RU digit grouping: thousands separated by a no-break space.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }

    out
}

pub fn format_rub(value: u64) -> String {
    format!("{} ₽", group_digits(value))
}

/// Swap mask asterisks for bullets on protected contact details.
pub fn mask_to_bullets(value: &str) -> String {
    value.replace('*', "•")
}
