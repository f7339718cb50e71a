//! Column filtering: kinds, widgets, values, and request filter state
//!
//! A column carries at most one [`FilterKind`]. At header-build time the
//! kind resolves to a concrete [`FilterWidget`], which in turn decides
//! whether the current value is read from the request's [`FilterBag`] as a
//! structured value or as a scalar.

mod kind;
mod value;
mod widget;

pub use kind::FilterKind;
pub use value::{FilterBag, FilterValue, format_filter_value};
pub use widget::{DATE_PICKER_FORMAT, FILTER_FORM, FilterInput, FilterWidget};
