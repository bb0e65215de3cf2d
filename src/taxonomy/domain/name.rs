//! Name normalization shared by taxonomy loading and capability lookup.

/// Normalizes a skill name or capability string for comparison.
///
/// The value is trimmed and lowercased; spaces and hyphens become
/// underscores.
///
/// # Examples
///
/// ```
/// use switchboard::taxonomy::domain::normalize_name;
///
/// assert_eq!(normalize_name(" Text-Classification "), "text_classification");
/// assert_eq!(normalize_name("Étude Vidéo"), "étude_vidéo");
/// ```
#[must_use]
pub fn normalize_name(value: &str) -> String {
    value
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|ch| match ch {
            ' ' | '-' => '_',
            other => other,
        })
        .collect()
}
