//! String to value conversions used by the typed accessors
//!
//! Each function returns `None` when the raw string cannot be interpreted;
//! callers attach section and property context to the error.

/// Parses a base-10 signed 64-bit integer
///
/// An optional leading `+` or `-` is accepted; decimals and exponents are not.
pub fn parse_i64(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Parses a base-10 unsigned 64-bit integer
///
/// No sign is accepted, so `-1` and `+1` are both rejected.
pub fn parse_u64(raw: &str) -> Option<u64> {
    if raw.starts_with('+') {
        return None;
    }
    raw.parse().ok()
}

/// Parses a 64-bit float (`4`, `-2.3333`, `1e3`, `inf`, `NaN`)
pub fn parse_f64(raw: &str) -> Option<f64> {
    raw.parse().ok()
}

/// Permissive boolean rules
///
/// Exactly `1, t, T, TRUE, true, True` are true and `0, f, F, FALSE, false,
/// False` are false. No other spelling is accepted.
pub fn parse_permissive_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Strict boolean rules: the value must equal one of the configured strings
///
/// When `case_sensitive` is false the value and both targets are uppercased
/// before comparing. The true target is checked first.
pub fn match_strict_bool(
    raw: &str,
    true_value: &str,
    false_value: &str,
    case_sensitive: bool,
) -> Option<bool> {
    if case_sensitive {
        return match_exact(raw, true_value, false_value);
    }

    match_exact(
        &raw.to_uppercase(),
        &true_value.to_uppercase(),
        &false_value.to_uppercase(),
    )
}

fn match_exact(raw: &str, true_value: &str, false_value: &str) -> Option<bool> {
    if raw == true_value {
        Some(true)
    } else if raw == false_value {
        Some(false)
    } else {
        None
    }
}
