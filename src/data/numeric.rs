// ---------------------------------------------------------------------------
// Numeric coercion
// ---------------------------------------------------------------------------

/// Convert a raw field to a sample, or `None` when the cell is missing.
///
/// Empty fields and fields starting with a letter are missing outright.
/// Otherwise the longest leading number is read: optional whitespace and
/// sign, digits with at most one `.` or `,` decimal point, and an optional
/// exponent. Anything after that prefix is ignored. A field with no numeric
/// prefix, or one whose value overflows to infinity, is missing.
pub fn coerce(field: &str) -> Option<f64> {
    match field.chars().next() {
        None => return None,
        Some(c) if c.is_ascii_alphabetic() => return None,
        Some(_) => {}
    }

    let bytes = field.trim_start().as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    pos += count_digits(&bytes[pos..]);
    let int_digits = &bytes[int_start..pos];

    let mut frac_digits: &[u8] = &[];
    if matches!(bytes.get(pos), Some(b'.' | b',')) {
        let frac_start = pos + 1;
        let frac_end = frac_start + count_digits(&bytes[frac_start..]);
        frac_digits = &bytes[frac_start..frac_end];
        pos = frac_end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent: &[u8] = &[];
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_start = pos + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = exp_start + count_digits(&bytes[exp_start..]);
        if exp_end > exp_start {
            // Keep the sign, drop the marker.
            exponent = &bytes[pos + 1..exp_end];
        }
    }

    let mut normalized = String::with_capacity(bytes.len() + 4);
    if negative {
        normalized.push('-');
    }
    push_digits(&mut normalized, int_digits);
    normalized.push('.');
    push_digits(&mut normalized, frac_digits);
    if !exponent.is_empty() {
        normalized.push('e');
        normalized.extend(exponent.iter().map(|&b| b as char));
    }

    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn push_digits(out: &mut String, digits: &[u8]) {
    if digits.is_empty() {
        out.push('0');
    } else {
        out.extend(digits.iter().map(|&b| b as char));
    }
}
