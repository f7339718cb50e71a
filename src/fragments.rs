//! Template contexts handed to the external renderer
//!
//! Each fragment is a flat bag of primitives. The screen layer passes them
//! to its template engine verbatim; nothing here renders HTML.

use serde::{Deserialize, Serialize};

use crate::column::Align;
use crate::filter::FilterInput;

/// Context for rendering a column header cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderContext {
	/// Column width rendered to a CSS value, when set.
	pub width: Option<String>,
	/// Cell alignment.
	pub align: Align,
	/// Whether the header offers sort toggling.
	pub sortable: bool,
	/// URL toggling the sort order for this column.
	pub sort_url: String,
	/// Column key.
	pub column: String,
	/// Display title.
	pub title: String,
	/// Filter control, when a filter kind is configured.
	pub filter: Option<FilterInput>,
	/// Textual description of the active filter, when one is set.
	pub filter_string: Option<String>,
	/// DOM-safe identifier for show/hide targeting.
	pub slug: String,
	/// Help text shown next to the title, when set.
	pub popover: Option<String>,
}

/// Context for rendering one body cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellContext {
	/// Cell alignment.
	pub align: Align,
	/// Cell value.
	pub value: String,
	/// Whether the value came from a render callback and is embedded as-is.
	pub raw: bool,
	/// DOM-safe identifier for show/hide targeting.
	pub slug: String,
	/// Column width rendered to a CSS value, when set.
	pub width: Option<String>,
	/// Number of columns the cell spans.
	pub colspan: u32,
}

/// Entry in the column show/hide menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMenuItem {
	/// Display title.
	pub title: String,
	/// DOM-safe identifier matching the column's cells.
	pub slug: String,
	/// Whether the column starts out hidden.
	pub default_hidden: bool,
}
