//! Filter widget resolution

use serde::{Deserialize, Serialize};

use super::{FilterKind, FilterValue};

/// Date format handed to the date-picker widget.
pub const DATE_PICKER_FORMAT: &str = "%Y-%m-%d";

/// Name of the form filter controls submit through.
pub const FILTER_FORM: &str = "filters";

/// Concrete input widget rendered in a column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum FilterWidget {
	/// Typed text input.
	Input {
		/// HTML input type attribute.
		input_type: String,
	},
	/// Paired numeric bounds.
	NumberRange,
	/// Paired date bounds.
	DateRange,
	/// Select over the supplied options.
	Select {
		/// Ordered `(value, label)` choices.
		options: Vec<(String, String)>,
		/// Whether multiple values may be selected.
		multiple: bool,
	},
	/// Inline date picker.
	DatePicker {
		/// Format string handed to the client-side widget.
		format: String,
		/// Whether the picker renders inline.
		inline: bool,
	},
}

impl FilterWidget {
	/// Resolves the concrete widget for a filter kind.
	///
	/// `options` feed the select widget; other kinds ignore them. Custom
	/// kinds render as a text input typed by the raw kind string.
	pub fn for_kind(kind: &FilterKind, options: &[(String, String)]) -> Self {
		match kind {
			FilterKind::DateRange => Self::DateRange,
			FilterKind::NumberRange => Self::NumberRange,
			FilterKind::Select => Self::Select {
				options: options.to_vec(),
				multiple: true,
			},
			FilterKind::Date => Self::DatePicker {
				format: DATE_PICKER_FORMAT.to_string(),
				inline: true,
			},
			kind => Self::Input {
				input_type: kind.as_str().to_string(),
			},
		}
	}

	/// Whether the widget takes a structured value rather than a scalar.
	pub fn is_complex(&self) -> bool {
		match self {
			Self::DateRange | Self::NumberRange => true,
			Self::Select { multiple, .. } => *multiple,
			Self::Input { .. } | Self::DatePicker { .. } => false,
		}
	}
}

/// Resolved filter control attached to a column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterInput {
	/// Concrete input widget, flattened into the control descriptor.
	#[serde(flatten)]
	pub widget: FilterWidget,
	/// Input name wired to the filter form.
	pub name: String,
	/// Localized placeholder text.
	pub placeholder: String,
	/// Name of the form the control belongs to.
	pub form: String,
	/// Current value from request filter state.
	pub value: Option<FilterValue>,
	/// Whether the control grabs focus when the filter popup opens.
	pub autofocus: bool,
}
