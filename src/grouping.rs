// 🖨️ Output Formatting
// Numerals with thousands separators and the "<number> is <words>" line

/// Decimal form of `number` with "," between groups of three digits
pub fn group_thousands(number: i64) -> String {
    let digits = number.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if number < 0 {
        grouped.push('-');
    }

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// One line of console output, numeral right-aligned to 10 columns
pub fn render_line(number: i64, words: &str) -> String {
    format!("{:>10} is {}", group_thousands(number), words)
}
