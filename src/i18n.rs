//! Message catalog for localizing screen chrome
//!
//! Columns only localize a handful of short strings (the filter
//! placeholder). The catalog is a locale-tagged message map that falls back
//! to the message id when no translation is registered.

use std::collections::HashMap;

/// A locale-tagged message catalog with identity fallback.
///
/// # Examples
///
/// ```
/// use veranda_screen::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("de");
/// catalog.add_translation("Filter", "Filtern");
///
/// assert_eq!(catalog.translate("Filter"), "Filtern");
/// assert_eq!(catalog.translate("Search"), "Search");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
	locale: String,
	translations: HashMap<String, String>,
}

impl MessageCatalog {
	/// Creates an empty catalog for `locale`.
	pub fn new(locale: impl Into<String>) -> Self {
		Self {
			locale: locale.into(),
			translations: HashMap::new(),
		}
	}

	/// Returns the catalog locale.
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Registers a translation for `message`.
	pub fn add_translation(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.translations.insert(message.into(), translation.into());
	}

	/// Translates `message`, falling back to the message itself.
	pub fn translate(&self, message: &str) -> String {
		self.translations
			.get(message)
			.cloned()
			.unwrap_or_else(|| message.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_translate_registered_message() {
		let mut catalog = MessageCatalog::new("fr");
		catalog.add_translation("Filter", "Filtrer");
		assert_eq!(catalog.translate("Filter"), "Filtrer");
	}

	#[test]
	fn test_translate_falls_back_to_message_id() {
		let catalog = MessageCatalog::new("fr");
		assert_eq!(catalog.translate("Filter"), "Filter");
	}

	#[test]
	fn test_locale_accessor() {
		let catalog = MessageCatalog::new("ja");
		assert_eq!(catalog.locale(), "ja");
	}
}
