//! Formatting utilities used for CLI and export outputs.

/// X,XXX.XX
pub fn format_amount(n: f64) -> String {
    let rounded = format!("{:.2}", n.abs());
    let (int_part, dec_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if n < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{dec_part}")
}

/// Multiplier as a percentage without trailing zeros: 0.05 → "5%", 0.125 → "12.5%".
pub fn format_percent(multiplier: f64) -> String {
    let pct = format!("{:.4}", multiplier * 100.0);
    let pct = pct.trim_end_matches('0').trim_end_matches('.');
    format!("{pct}%")
}
