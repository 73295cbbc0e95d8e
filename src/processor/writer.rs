//! Consolidated CSV output
//!
//! Records are sorted newest period first (year, then quarter, both
//! descending as strings) and by ascending regulatory id inside a period,
//! then written as `;`-delimited UTF-8 lines under a fixed header.

use crate::constants::output::{AMOUNT_DECIMALS, DELIMITER, HEADER};
use crate::error::{Error, Result};
use crate::models::ExpenseRecord;
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Output ordering: year desc, quarter desc, regulatory id asc
pub fn compare_records(a: &ExpenseRecord, b: &ExpenseRecord) -> Ordering {
    b.year
        .cmp(&a.year)
        .then_with(|| b.quarter.cmp(&a.quarter))
        .then_with(|| a.regulatory_id.cmp(&b.regulatory_id))
}

/// Stable sort into output order
pub fn sort_records(records: &mut [ExpenseRecord]) {
    records.sort_by(compare_records);
}

/// Quote a field when it contains `;`, `"` or a newline, doubling inner quotes
pub fn escape_field(value: &str) -> String {
    if value.contains(DELIMITER) || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render an amount with two decimals, rounding half-up
///
/// Rounding works on the shortest decimal form of the value, so `1.005`
/// renders as `1.01` even though its binary value is slightly below.
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let shortest = format!("{}", amount.abs());
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let mut frac: Vec<u8> = frac_part.bytes().map(|b| b - b'0').collect();
    let round_up = frac.get(AMOUNT_DECIMALS).is_some_and(|&d| d >= 5);
    frac.resize(AMOUNT_DECIMALS, 0);
    digits.extend_from_slice(&frac);

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - AMOUNT_DECIMALS;
    let render = |slice: &[u8]| slice.iter().map(|d| char::from(b'0' + d)).collect::<String>();

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{}", sign, render(&digits[..split]), render(&digits[split..]))
}

/// One output line, without terminator
pub fn format_line(record: &ExpenseRecord) -> String {
    let description = escape_field(&record.description);
    let amount = format_amount(record.amount);

    [
        record.date.as_str(),
        record.regulatory_id.as_str(),
        record.account_code.as_str(),
        description.as_str(),
        record.quarter.as_str(),
        record.year.as_str(),
        amount.as_str(),
    ]
    .join(DELIMITER)
}

/// Write the header and all records, in output order, to `writer`
pub fn write_records<W: Write>(writer: &mut W, records: &[ExpenseRecord]) -> std::io::Result<()> {
    writeln!(writer, "{}", HEADER)?;
    for record in records {
        writeln!(writer, "{}", format_line(record))?;
    }
    Ok(())
}

/// Sort `records` and write them to `path`, replacing any existing file
///
/// Returns the number of records written.
pub fn write_consolidated_csv(path: &Path, mut records: Vec<ExpenseRecord>) -> Result<usize> {
    sort_records(&mut records);

    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);

    write_records(&mut writer, &records)
        .and_then(|_| writer.flush())
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(records.len())
}
