//! Display helpers for amounts and durations.

/// Format whole Turkish Lira the way the tr-TR locale does: `₺13.500`
pub fn format_try(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{}", rounded.abs() as u64);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-₺{}", grouped)
    } else {
        format!("₺{}", grouped)
    }
}

pub fn format_minutes(minutes: u32) -> String {
    format!("{} dakika", minutes)
}
