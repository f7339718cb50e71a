//! Request-scoped rendering context
//!
//! Columns never reach into ambient request state. Everything a header
//! needs — the request path, its query pairs, the active filters, and the
//! message catalog — is carried by an explicit [`RenderContext`] injected
//! by the surrounding screen at render time.

use percent_encoding::percent_decode_str;

use crate::filter::FilterBag;
use crate::i18n::MessageCatalog;

/// Request-scoped state a column needs to render its header.
///
/// # Examples
///
/// ```
/// use veranda_screen::RenderContext;
///
/// let ctx = RenderContext::from_query("/admin/users", "page=2&filter%5Bname%5D=alice");
/// assert_eq!(ctx.path(), "/admin/users");
/// assert_eq!(ctx.filters().scalar("name"), Some("alice"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
	path: String,
	query: Vec<(String, String)>,
	filters: FilterBag,
	catalog: Option<MessageCatalog>,
}

impl RenderContext {
	/// Creates a context for `path` with no query parameters.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			query: Vec::new(),
			filters: FilterBag::new(),
			catalog: None,
		}
	}

	/// Creates a context from `path` and a raw query string.
	///
	/// Keys and values are percent-decoded; pair order and duplicate keys
	/// are preserved. The filter bag is derived from the decoded pairs.
	pub fn from_query(path: impl Into<String>, raw_query: &str) -> Self {
		let query = parse_query(raw_query);
		let filters = FilterBag::from_pairs(&query);
		Self {
			path: path.into(),
			query,
			filters,
			catalog: None,
		}
	}

	/// Appends a query pair and re-derives the filter bag.
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.push((key.into(), value.into()));
		self.filters = FilterBag::from_pairs(&self.query);
		self
	}

	/// Replaces the filter bag, detaching it from the query pairs.
	pub fn with_filters(mut self, filters: FilterBag) -> Self {
		self.filters = filters;
		self
	}

	/// Attaches a message catalog for chrome localization.
	pub fn with_catalog(mut self, catalog: MessageCatalog) -> Self {
		self.catalog = Some(catalog);
		self
	}

	/// Request path without the query string.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Decoded query pairs in arrival order.
	pub fn query_pairs(&self) -> &[(String, String)] {
		&self.query
	}

	/// Active filter values for this request.
	pub fn filters(&self) -> &FilterBag {
		&self.filters
	}

	/// Translates `message` through the attached catalog, falling back to
	/// the message itself.
	pub fn translate(&self, message: &str) -> String {
		match &self.catalog {
			Some(catalog) => catalog.translate(message),
			None => message.to_string(),
		}
	}
}

/// Splits a raw query string into percent-decoded pairs.
///
/// Splits on `&`, then on the first `=` only, so values containing `=`
/// survive intact. Empty segments are skipped.
fn parse_query(raw: &str) -> Vec<(String, String)> {
	raw.split('&')
		.filter(|pair| !pair.is_empty())
		.map(|pair| {
			let mut parts = pair.splitn(2, '=');
			let key = parts.next().unwrap_or("");
			let value = parts.next().unwrap_or("");
			(
				percent_decode_str(key).decode_utf8_lossy().to_string(),
				percent_decode_str(value).decode_utf8_lossy().to_string(),
			)
		})
		.collect()
}
