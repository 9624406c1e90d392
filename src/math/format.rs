use super::element::Element;

pub(crate) const FIELD_WIDTH: usize = 10;
const SIGNIFICANT_DIGITS: i32 = 3;

/// Render `value` with three significant digits, `%g` style: the value is
/// rounded first, then printed in fixed notation when the rounded decimal
/// exponent lies in `[-4, 3)` and in scientific notation otherwise, with
/// trailing zeros removed. Integer kinds are printed in full.
pub(crate) fn significant<T: Element>(value: T) -> String {
    if !T::KIND.is_divisible() {
        return value.to_string();
    }
    let v = match value.to_f64() {
        Some(v) => v,
        None => return value.to_string(),
    };
    if v == 0.0 || !v.is_finite() {
        return format!("{}", v);
    }

    let rounded = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, v);
    let (mantissa, exponent) = match rounded
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
    {
        Some(parts) => parts,
        None => return rounded,
    };
    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        format!("{}e{}", trim_zeros(mantissa), exponent)
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, v)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
