//! Locale-aware number formatting for reports.
//!
//! Nothing in the calculation path depends on this module.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// Separator convention used when rendering numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// `.` between thousands and `,` before the decimals, e.g. `1.234,56`.
    #[default]
    Vietnamese,
    /// `,` between thousands and `.` before the decimals, e.g. `1,234.56`.
    English,
}

impl Locale {
    /// Thousands separator.
    #[must_use]
    pub const fn group_separator(self) -> char {
        match self {
            Locale::Vietnamese => '.',
            Locale::English => ',',
        }
    }

    /// Decimal separator.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Locale::Vietnamese => ',',
            Locale::English => '.',
        }
    }
}

impl FromStr for Locale {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vi" | "vn" | "vietnamese" => Ok(Locale::Vietnamese),
            "en" | "english" => Ok(Locale::English),
            _ => Err(InputError::UnknownLocale(value.to_owned())),
        }
    }
}

/// Render `value` with `digits` decimals and grouped thousands.
///
/// NaN renders as `-`.
///
/// # Examples
/// ```
/// use plateload::{format_number, Locale};
///
/// assert_eq!(format_number(1_234_567.891, 2, Locale::Vietnamese), "1.234.567,89");
/// assert_eq!(format_number(1_234_567.891, 2, Locale::English), "1,234,567.89");
/// assert_eq!(format_number(76.0, 0, Locale::Vietnamese), "76");
/// ```
#[must_use]
pub fn format_number(value: f64, digits: usize, locale: Locale) -> String {
    if value.is_nan() {
        return "-".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_owned();
    }

    let rendered = format!("{:.*}", digits, value.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut output = String::with_capacity(rendered.len() + rendered.len() / 3 + 1);
    // Rounding can turn a tiny negative into zero; no sign is shown then.
    if value.is_sign_negative() && rendered.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        output.push('-');
    }
    let len = integer.len();
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            output.push(locale.group_separator());
        }
        output.push(ch);
    }
    if let Some(fraction) = fraction {
        output.push(locale.decimal_separator());
        output.push_str(fraction);
    }
    output
}

/// Like [`format_number`], rendering `None` as `-`.
#[must_use]
pub fn format_optional(value: Option<f64>, digits: usize, locale: Locale) -> String {
    value.map_or_else(|| "-".to_owned(), |value| format_number(value, digits, locale))
}
