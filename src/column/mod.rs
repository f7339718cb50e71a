//! Column definition and fragment construction

mod definition;

pub use definition::{Align, Column, Width, is_show_visible_columns};
