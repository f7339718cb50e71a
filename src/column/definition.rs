//! The column configuration builder

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::error::Result;
use crate::filter::{
	FILTER_FORM, FilterInput, FilterKind, FilterValue, FilterWidget, format_filter_value,
};
use crate::fragments::{CellContext, ColumnMenuItem, HeaderContext};
use crate::record::{Loop, Record};
use crate::sort;
use crate::text::slugify;

/// Horizontal cell alignment.
///
/// Serializes to the CSS values `start` / `center` / `end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
	/// Align content to the start of the cell.
	#[default]
	#[serde(rename = "start")]
	Left,
	/// Center content.
	#[serde(rename = "center")]
	Center,
	/// Align content to the end of the cell.
	#[serde(rename = "end")]
	Right,
}

impl Align {
	/// CSS value rendered into templates.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Left => "start",
			Self::Center => "center",
			Self::Right => "end",
		}
	}
}

/// Column width as pixels or a raw CSS value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Width {
	/// Fixed pixel width.
	Pixels(u32),
	/// Raw CSS width value, e.g. `"25%"` or `"12em"`.
	Css(String),
}

impl fmt::Display for Width {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Pixels(px) => write!(f, "{px}px"),
			Self::Css(css) => f.write_str(css),
		}
	}
}

impl From<u32> for Width {
	fn from(px: u32) -> Self {
		Self::Pixels(px)
	}
}

impl From<&str> for Width {
	fn from(css: &str) -> Self {
		Self::Css(css.to_string())
	}
}

impl From<String> for Width {
	fn from(css: String) -> Self {
		Self::Css(css)
	}
}

type RenderFn<R> = Box<dyn Fn(&R, Option<&Loop>) -> String + Send + Sync>;
type FilterValueFn = Box<dyn Fn(&FilterValue) -> String + Send + Sync>;

/// A single configurable table column.
///
/// Accumulates header/body configuration through chained setters and is
/// consumed once per request to produce the header, cell, and
/// visibility-menu fragments the screen templates render.
///
/// # Examples
///
/// ```
/// use veranda_screen::{Column, FilterKind, Record};
///
/// struct User {
///     name: String,
/// }
///
/// impl Record for User {
///     fn content(&self, field: &str) -> Option<String> {
///         (field == "name").then(|| self.name.clone())
///     }
/// }
///
/// let column = Column::<User>::new("name", "Name")
///     .sort(true)
///     .width(200)
///     .filter(FilterKind::Text);
///
/// let user = User {
///     name: "Alice".to_string(),
/// };
/// let cell = column.build_cell(&user, None);
/// assert_eq!(cell.value, "Alice");
/// ```
pub struct Column<R> {
	name: String,
	title: String,
	width: Option<Width>,
	align: Align,
	sortable: bool,
	colspan: u32,
	allow_user_hidden: bool,
	default_hidden: bool,
	filter: Option<FilterKind>,
	filter_options: Vec<(String, String)>,
	filter_value_formatter: Option<FilterValueFn>,
	render: Option<RenderFn<R>>,
	popover: Option<String>,
}

impl<R> Column<R> {
	/// Creates a column keyed by `name` with a display `title`.
	pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			title: title.into(),
			width: None,
			align: Align::Left,
			sortable: false,
			colspan: 1,
			allow_user_hidden: true,
			default_hidden: false,
			filter: None,
			filter_options: Vec::new(),
			filter_value_formatter: None,
			render: None,
			popover: None,
		}
	}

	/// Sets the column width.
	pub fn width(mut self, width: impl Into<Width>) -> Self {
		self.width = Some(width.into());
		self
	}

	/// Enables filtering with the given kind.
	pub fn filter(mut self, kind: FilterKind) -> Self {
		self.filter = Some(kind);
		self
	}

	/// Sets the `(value, label)` options a select filter offers.
	pub fn filter_options<I, V, L>(mut self, options: I) -> Self
	where
		I: IntoIterator<Item = (V, L)>,
		V: Into<String>,
		L: Into<String>,
	{
		self.filter_options = options
			.into_iter()
			.map(|(value, label)| (value.into(), label.into()))
			.collect();
		self
	}

	/// Injects a custom formatter for the active-filter description.
	pub fn filter_value_with<F>(mut self, formatter: F) -> Self
	where
		F: Fn(&FilterValue) -> String + Send + Sync + 'static,
	{
		self.filter_value_formatter = Some(Box::new(formatter));
		self
	}

	/// Sets whether the header offers sort toggling.
	pub fn sort(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets the cell alignment.
	pub fn align(mut self, align: Align) -> Self {
		self.align = align;
		self
	}

	/// Aligns cells to the start of the column.
	pub fn align_left(mut self) -> Self {
		self.align = Align::Left;
		self
	}

	/// Centers cell content.
	pub fn align_center(mut self) -> Self {
		self.align = Align::Center;
		self
	}

	/// Aligns cells to the end of the column.
	pub fn align_right(mut self) -> Self {
		self.align = Align::Right;
		self
	}

	/// Sets how many columns each cell spans.
	pub fn colspan(mut self, colspan: u32) -> Self {
		self.colspan = colspan;
		self
	}

	/// Prevents the user from hiding this column in the interface.
	pub fn cant_hide(mut self) -> Self {
		self.allow_user_hidden = false;
		self
	}

	/// Sets whether the column starts out hidden.
	pub fn default_hidden(mut self, hidden: bool) -> Self {
		self.default_hidden = hidden;
		self
	}

	/// Attaches help text to the header.
	pub fn popover(mut self, text: impl Into<String>) -> Self {
		self.popover = Some(text.into());
		self
	}

	/// Injects a render callback used instead of record content lookup.
	pub fn render<F>(mut self, callback: F) -> Self
	where
		F: Fn(&R, Option<&Loop>) -> String + Send + Sync + 'static,
	{
		self.render = Some(Box::new(callback));
		self
	}

	/// Returns the column key.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the display title.
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Whether the user may hide this column in the interface.
	pub fn is_allow_user_hidden(&self) -> bool {
		self.allow_user_hidden
	}

	/// Whether the header offers sort toggling.
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	fn slug(&self) -> String {
		slugify(&self.name)
	}

	fn width_css(&self) -> Option<String> {
		self.width.as_ref().map(Width::to_string)
	}

	/// Builds the header fragment for this column.
	pub fn build_header(&self, ctx: &RenderContext) -> Result<HeaderContext> {
		Ok(HeaderContext {
			width: self.width_css(),
			align: self.align,
			sortable: self.sortable,
			sort_url: self.build_sort_url(ctx)?,
			column: self.name.clone(),
			title: self.title.clone(),
			filter: self.build_filter(ctx),
			filter_string: self.filter_string(ctx),
			slug: self.slug(),
			popover: self.popover.clone(),
		})
	}

	/// Resolves the filter control, if a filter kind is configured.
	///
	/// Complex widgets read the structured request value; everything else
	/// reads a scalar.
	fn build_filter(&self, ctx: &RenderContext) -> Option<FilterInput> {
		let kind = self.filter.as_ref()?;
		let widget = FilterWidget::for_kind(kind, &self.filter_options);
		let value = if widget.is_complex() {
			ctx.filters().value(&self.name).cloned()
		} else {
			ctx.filters()
				.scalar(&self.name)
				.map(|value| FilterValue::Scalar(value.to_string()))
		};
		Some(FilterInput {
			widget,
			name: format!("filter[{}]", self.name),
			placeholder: ctx.translate("Filter"),
			form: FILTER_FORM.to_string(),
			value,
			autofocus: true,
		})
	}

	/// Builds the body fragment for `record`.
	pub fn build_cell(&self, record: &R, item: Option<&Loop>) -> CellContext
	where
		R: Record,
	{
		let (value, raw) = match &self.render {
			Some(callback) => (callback(record, item), true),
			None => (record.content(&self.name).unwrap_or_default(), false),
		};
		CellContext {
			align: self.align,
			value,
			raw,
			slug: self.slug(),
			width: self.width_css(),
			colspan: self.colspan,
		}
	}

	/// Builds the show/hide menu entry.
	///
	/// Returns `None` exactly when the user may not hide the column.
	pub fn build_column_menu(&self) -> Option<ColumnMenuItem> {
		if !self.allow_user_hidden {
			return None;
		}
		Some(ColumnMenuItem {
			title: self.title.clone(),
			slug: self.slug(),
			default_hidden: self.default_hidden,
		})
	}

	/// URL flipping the sort order for this column, preserving the rest of
	/// the request query.
	pub fn build_sort_url(&self, ctx: &RenderContext) -> Result<String> {
		sort::build_sort_url(ctx.path(), ctx.query_pairs(), &self.name)
	}

	/// Textual description of this column's active filter.
	///
	/// The injected formatter wins when set; otherwise the default
	/// formatting rules apply. `None` when no filter value is present.
	pub fn filter_string(&self, ctx: &RenderContext) -> Option<String> {
		let value = ctx.filters().value(&self.name)?;
		if let Some(formatter) = &self.filter_value_formatter {
			return Some(formatter(value));
		}
		Some(format_filter_value(value, &self.filter_options))
	}
}

impl<R> fmt::Debug for Column<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("name", &self.name)
			.field("title", &self.title)
			.field("width", &self.width)
			.field("align", &self.align)
			.field("sortable", &self.sortable)
			.field("colspan", &self.colspan)
			.field("allow_user_hidden", &self.allow_user_hidden)
			.field("default_hidden", &self.default_hidden)
			.field("filter", &self.filter)
			.finish_non_exhaustive()
	}
}

/// Whether the surrounding grid should offer a column-visibility menu.
///
/// True iff at least one column permits user-driven hiding.
pub fn is_show_visible_columns<R>(columns: &[Column<R>]) -> bool {
	columns.iter().any(|column| column.is_allow_user_hidden())
}
