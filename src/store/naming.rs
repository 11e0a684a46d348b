use crate::error::AppError;

/// `stem{N}` with N one past the highest number already used after `stem`
pub(crate) fn default_name<S: AsRef<str>>(stem: &str, existing: &[S]) -> String {
    format!("{stem}{}", next_number(stem, existing))
}

fn next_number<S: AsRef<str>>(stem: &str, existing: &[S]) -> u64 {
    existing
        .iter()
        .filter_map(|name| name.as_ref().strip_prefix(stem))
        .filter(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .map_or(1, |highest| highest.saturating_add(1))
}

/// Names are used verbatim as keys; reject blanks and surrounding whitespace
pub(crate) fn validate_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() || name.trim() != name || name.chars().any(char::is_control) {
        return Err(AppError::InvalidName {
            input: name.to_string(),
        });
    }
    Ok(())
}
