//! Sort parameter policy and sort-URL building
//!
//! Sorting travels in the `sort` query parameter: a bare field name sorts
//! ascending, a `-` prefix sorts descending.

use crate::error::Result;

/// Sort direction encoded in the `sort` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
	/// Ascending order.
	Ascending,
	/// Descending order.
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction.
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Parses a `sort` parameter value into direction and field name.
	///
	/// # Examples
	///
	/// ```
	/// use veranda_screen::SortDirection;
	///
	/// assert_eq!(
	///     SortDirection::parse_from_query("-name"),
	///     (SortDirection::Descending, "name")
	/// );
	/// assert_eq!(
	///     SortDirection::parse_from_query("name"),
	///     (SortDirection::Ascending, "name")
	/// );
	/// ```
	pub fn parse_from_query(value: &str) -> (Self, &str) {
		if let Some(field) = value.strip_prefix('-') {
			(Self::Descending, field)
		} else {
			(Self::Ascending, value)
		}
	}
}

/// Returns the `sort` parameter value that toggles sorting for `column`.
///
/// A request currently sorting this column ascending flips to descending;
/// anything else (descending, another column, no sort) yields ascending.
pub fn toggle_sort_param(current: Option<&str>, column: &str) -> String {
	if let Some(value) = current {
		let (direction, field) = SortDirection::parse_from_query(value);
		if field == column && direction == SortDirection::Ascending {
			return format!("-{column}");
		}
	}
	column.to_string()
}

/// Rebuilds the request query with the toggled `sort` parameter for
/// `column` and appends it to `path`.
///
/// Every other query pair is preserved in arrival order.
pub fn build_sort_url(path: &str, query: &[(String, String)], column: &str) -> Result<String> {
	let current = query
		.iter()
		.find(|(key, _)| key == "sort")
		.map(|(_, value)| value.as_str());
	let next = toggle_sort_param(current, column);

	let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(query.len() + 1);
	let mut replaced = false;
	for (key, value) in query {
		if key == "sort" {
			if !replaced {
				pairs.push(("sort", &next));
				replaced = true;
			}
		} else {
			pairs.push((key, value));
		}
	}
	if !replaced {
		pairs.push(("sort", &next));
	}

	let encoded = serde_urlencoded::to_string(&pairs)?;
	Ok(format!("{path}?{encoded}"))
}
