//! Display formatting shared by progress lines and the analysis report.

/// Render a count with `,` thousands separators: `1234567` → `"1,234,567"`.
#[must_use]
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

/// Grouped rendering of a non-negative average, rounded to whole units.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn group_thousands_rounded(value: f64) -> String {
    group_thousands(value.round().max(0.0) as u64)
}
