use thiserror::Error;
use zwi_core::MaterialCategory;

/// Error returned when a `--composition` override cannot be parsed.
#[derive(Debug, Error, PartialEq)]
pub enum OverrideError {
    #[error("expected category=fraction, got '{0}'")]
    MissingEquals(String),

    #[error("unknown material category '{0}' (expected one of organics, paper, plastics, metals, glass)")]
    UnknownCategory(String),

    #[error("invalid fraction '{value}' for {category}")]
    InvalidValue { category: String, value: String },
}

/// Parses a comma-separated list of composition overrides, e.g.
/// `organics=0.55,paper=0.18`.
pub fn parse_composition_overrides(
    spec: &str,
) -> Result<Vec<(MaterialCategory, f64)>, OverrideError> {
    let mut overrides = Vec::new();

    for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let Some((name, value)) = part.split_once('=') else {
            return Err(OverrideError::MissingEquals(part.to_string()));
        };
        let name = name.trim();
        let category = MaterialCategory::parse(name)
            .ok_or_else(|| OverrideError::UnknownCategory(name.to_string()))?;
        let fraction =
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| OverrideError::InvalidValue {
                    category: name.to_string(),
                    value: value.trim().to_string(),
                })?;
        overrides.push((category, fraction));
    }

    Ok(overrides)
}

/// Formats a number with thousands separators and a fixed number of decimal
/// places. Non-finite values render as "-".
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let formatted = format!("{value:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Truncates text to at most `max` characters, appending an ellipsis when
/// anything was cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

/// Lowercase, hyphen-separated slug suitable for filenames and URLs.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_was_hyphen = true; // suppress a leading hyphen

    for ch in text.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            last_was_hyphen = false;
        } else if (ch.is_whitespace() || ch == '-' || ch == '_') && !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    slug.trim_end_matches('-').to_string()
}
