//! Amount parsing for financial statement values
//!
//! ANS exports mix Brazilian formatting (`1.234,56`) with plain decimals
//! (`1234.56`). The heuristic here is intentionally mechanical and never
//! fails: anything it cannot read becomes `0.0`.

/// Parse a raw amount column into a number
///
/// Quotes and spaces are stripped first. When both `.` and `,` are present
/// the dots are thousands separators and the comma is the decimal point; a
/// lone comma is a decimal point; otherwise the text is parsed as-is.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let mut cleaned: String = trimmed.chars().filter(|c| *c != '"' && *c != ' ').collect();

    if cleaned.contains('.') && cleaned.contains(',') {
        cleaned = cleaned.replace('.', "").replace(',', ".");
    } else if cleaned.contains(',') {
        cleaned = cleaned.replace(',', ".");
    }

    if !is_plain_decimal(&cleaned) {
        return 0.0;
    }
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Optional sign, digits with at most one `.`, optional exponent
///
/// Rejects the words `f64::from_str` also accepts (`inf`, `NaN`, ...).
fn is_plain_decimal(text: &str) -> bool {
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(exponent) => {
            let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            !digits.is_empty() && all_digits(digits)
        }
    }
}
