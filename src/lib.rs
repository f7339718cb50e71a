//! Admin table column definitions for Veranda
//!
//! This crate provides the table-column layer of the Veranda admin panel.
//! Each [`Column`] configures one table column — header rendering, body
//! cells, filtering, sorting, and user-driven visibility — and is consumed
//! once per request to produce the template contexts the surrounding screen
//! renders.
//!
//! # Features
//!
//! - **Column builder**: chained setters for width, alignment, sorting,
//!   colspan, visibility, and render callbacks
//! - **Filtering**: typed text inputs, date picker, date/number ranges, and
//!   multi-select, with request filter state read through an explicit
//!   context
//! - **Sorting**: URL parameter-based sorting (`?sort=field`,
//!   `?sort=-field`) with query-preserving toggle URLs
//! - **Visibility**: per-column show/hide menu entries
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Column] --> B[HeaderContext]
//!     A --> C[CellContext]
//!     A --> D[ColumnMenuItem]
//!     B --> E[FilterInput]
//!     E --> F[FilterWidget]
//!     A --> G[RenderContext]
//!     G --> H[FilterBag]
//! ```
//!
//! # Example
//!
//! ```rust
//! use veranda_screen::{Column, FilterKind, Record, RenderContext};
//!
//! struct User {
//!     name: String,
//! }
//!
//! impl Record for User {
//!     fn content(&self, field: &str) -> Option<String> {
//!         (field == "name").then(|| self.name.clone())
//!     }
//! }
//!
//! let column = Column::<User>::new("name", "Name")
//!     .sort(true)
//!     .filter(FilterKind::Text);
//!
//! let ctx = RenderContext::from_query("/admin/users", "sort=name&page=2");
//! let header = column.build_header(&ctx)?;
//! assert_eq!(header.sort_url, "/admin/users?sort=-name&page=2");
//! # Ok::<(), veranda_screen::ScreenError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod context;
pub mod error;
pub mod filter;
pub mod fragments;
pub mod i18n;
pub mod record;
pub mod sort;
pub mod text;

// Re-exports for convenience
pub use column::{Align, Column, Width, is_show_visible_columns};
pub use context::RenderContext;
pub use error::{Result, ScreenError};
pub use filter::{FilterBag, FilterInput, FilterKind, FilterValue, FilterWidget};
pub use fragments::{CellContext, ColumnMenuItem, HeaderContext};
pub use i18n::MessageCatalog;
pub use record::{Loop, Record};
pub use sort::SortDirection;
