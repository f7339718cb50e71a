//! Filter kind selection

/// Enumerated filter strategy for a column.
///
/// The kind selects which input widget the header renders and how the
/// current value is read back from request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKind {
	/// Free-text input.
	Text,
	/// Numeric input.
	Number,
	/// Single-date picker.
	Date,
	/// Start/end date pair.
	DateRange,
	/// Start/end number pair.
	NumberRange,
	/// Multi-select over the column's filter options.
	Select,
	/// Unrecognized kind string, rendered as a text input typed by it.
	Custom(String),
}

impl FilterKind {
	/// Parses a wire kind string.
	///
	/// Unknown strings degrade to [`FilterKind::Custom`], which renders as
	/// a generic typed text input.
	///
	/// # Examples
	///
	/// ```
	/// use veranda_screen::FilterKind;
	///
	/// assert_eq!(FilterKind::parse("dateRange"), FilterKind::DateRange);
	/// assert_eq!(
	///     FilterKind::parse("fuzzy"),
	///     FilterKind::Custom("fuzzy".to_string())
	/// );
	/// ```
	pub fn parse(kind: &str) -> Self {
		match kind {
			"text" => Self::Text,
			"number" => Self::Number,
			"date" => Self::Date,
			"dateRange" => Self::DateRange,
			"numberRange" => Self::NumberRange,
			"select" => Self::Select,
			other => {
				tracing::debug!(kind = other, "unrecognized filter kind, using typed text input");
				Self::Custom(other.to_string())
			}
		}
	}

	/// Wire representation of this kind.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Text => "text",
			Self::Number => "number",
			Self::Date => "date",
			Self::DateRange => "dateRange",
			Self::NumberRange => "numberRange",
			Self::Select => "select",
			Self::Custom(kind) => kind,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_known_kinds() {
		assert_eq!(FilterKind::parse("text"), FilterKind::Text);
		assert_eq!(FilterKind::parse("number"), FilterKind::Number);
		assert_eq!(FilterKind::parse("date"), FilterKind::Date);
		assert_eq!(FilterKind::parse("numberRange"), FilterKind::NumberRange);
		assert_eq!(FilterKind::parse("select"), FilterKind::Select);
	}

	#[test]
	fn test_parse_unknown_kind_is_custom() {
		let kind = FilterKind::parse("email");
		assert_eq!(kind, FilterKind::Custom("email".to_string()));
		assert_eq!(kind.as_str(), "email");
	}

	#[test]
	fn test_round_trip_through_as_str() {
		for wire in ["text", "number", "date", "dateRange", "numberRange", "select"] {
			assert_eq!(FilterKind::parse(wire).as_str(), wire);
		}
	}
}
