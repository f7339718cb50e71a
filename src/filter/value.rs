//! Filter values and per-request filter state

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

/// Current value of a column filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
	/// Single scalar value.
	Scalar(String),
	/// Multiple selected values.
	Many(Vec<String>),
	/// Range-shaped value with optional bounds.
	Range {
		/// Lower bound, when given.
		start: Option<String>,
		/// Upper bound, when given.
		end: Option<String>,
	},
}

/// Per-request filter state keyed by column name.
///
/// Replaces ambient request-global filter lookup with an explicit value
/// owned by the render context. The bag is built from decoded query pairs
/// using the `filter[...]` naming conventions the filter form submits:
///
/// - `filter[name]=x` — scalar
/// - `filter[name][]=x` (repeated) — multi-value
/// - `filter[name][start]=x` / `filter[name][end]=y` — range bounds
///
/// # Examples
///
/// ```
/// use veranda_screen::{FilterBag, FilterValue};
///
/// let pairs = vec![
///     ("filter[status][]".to_string(), "open".to_string()),
///     ("filter[status][]".to_string(), "closed".to_string()),
/// ];
/// let bag = FilterBag::from_pairs(&pairs);
///
/// assert_eq!(
///     bag.value("status"),
///     Some(&FilterValue::Many(vec!["open".to_string(), "closed".to_string()]))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterBag {
	values: HashMap<String, FilterValue>,
}

impl FilterBag {
	/// Creates an empty bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds the bag from decoded query pairs.
	///
	/// Pairs outside the `filter[...]` conventions are ignored.
	pub fn from_pairs(pairs: &[(String, String)]) -> Self {
		let mut bag = Self::new();
		for (key, value) in pairs {
			let Some(rest) = key.strip_prefix("filter[") else {
				continue;
			};
			let Some(close) = rest.find(']') else {
				continue;
			};
			let column = &rest[..close];
			if column.is_empty() {
				continue;
			}
			match &rest[close + 1..] {
				"" => {
					bag.values
						.insert(column.to_string(), FilterValue::Scalar(value.clone()));
				}
				"[]" => match bag.values.entry(column.to_string()) {
					Entry::Occupied(mut slot) => {
						if let FilterValue::Many(values) = slot.get_mut() {
							values.push(value.clone());
						}
					}
					Entry::Vacant(slot) => {
						slot.insert(FilterValue::Many(vec![value.clone()]));
					}
				},
				bound @ ("[start]" | "[end]") => {
					let slot = bag
						.values
						.entry(column.to_string())
						.or_insert(FilterValue::Range {
							start: None,
							end: None,
						});
					if !matches!(slot, FilterValue::Range { .. }) {
						*slot = FilterValue::Range {
							start: None,
							end: None,
						};
					}
					if let FilterValue::Range { start, end } = slot {
						if bound == "[start]" {
							*start = Some(value.clone());
						} else {
							*end = Some(value.clone());
						}
					}
				}
				_ => {}
			}
		}
		bag
	}

	/// Sets the filter value for `column`.
	pub fn insert(&mut self, column: impl Into<String>, value: FilterValue) {
		self.values.insert(column.into(), value);
	}

	/// Structured reader: the raw filter value for `column`.
	pub fn value(&self, column: &str) -> Option<&FilterValue> {
		self.values.get(column)
	}

	/// Scalar reader: the filter value for `column` when it is a scalar.
	pub fn scalar(&self, column: &str) -> Option<&str> {
		match self.values.get(column) {
			Some(FilterValue::Scalar(value)) => Some(value),
			_ => None,
		}
	}

	/// Whether any filter value is present.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

/// Formats a filter value for display next to the column title.
///
/// Range values render as `"{start} - {end}"` with missing bounds empty.
/// Multi-values map through the `(value, label)` options before joining
/// with `", "`; values without a matching option pass through raw. Scalars
/// pass through unchanged.
pub fn format_filter_value(value: &FilterValue, options: &[(String, String)]) -> String {
	match value {
		FilterValue::Scalar(value) => value.clone(),
		FilterValue::Range { start, end } => format!(
			"{} - {}",
			start.as_deref().unwrap_or(""),
			end.as_deref().unwrap_or("")
		),
		FilterValue::Many(values) => values
			.iter()
			.map(|value| {
				options
					.iter()
					.find(|(option, _)| option == value)
					.map(|(_, label)| label.as_str())
					.unwrap_or(value.as_str())
			})
			.collect::<Vec<_>>()
			.join(", "),
	}
}
