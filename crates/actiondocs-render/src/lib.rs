//! Markdown table rendering for actiondocs
//!
//! Converts the `inputs` and `outputs` sections of an action metadata
//! document into GitHub-flavoured markdown tables, with multi-line
//! descriptions normalized to HTML that renders correctly in table cells.

pub mod cell;
pub mod document;
pub mod error;
pub mod table;

pub use cell::markdown_to_table_html;
pub use document::{RenderOptions, render};
pub use error::{Error, Result};
pub use table::{inputs_table, outputs_table};
