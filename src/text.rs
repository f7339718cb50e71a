//! Text helpers for template-facing identifiers

/// Derives a DOM/URL-safe identifier from a column name.
///
/// Lowercases the input, maps everything outside `a-z0-9` to `-`, and
/// collapses separator runs.
///
/// # Examples
///
/// ```
/// use veranda_screen::text::slugify;
///
/// assert_eq!(slugify("created_at"), "created-at");
/// assert_eq!(slugify("User  Name"), "user-name");
/// ```
pub fn slugify(text: &str) -> String {
	text.to_lowercase()
		.chars()
		.map(|ch| {
			if ch.is_ascii_alphanumeric() {
				ch
			} else {
				'-'
			}
		})
		.collect::<String>()
		.split('-')
		.filter(|part| !part.is_empty())
		.collect::<Vec<_>>()
		.join("-")
}
