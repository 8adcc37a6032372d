//! Presentation layer - user-facing output formatting.
//!
//! Pure formatting helpers shared by the command handlers. Nothing here
//! performs IO beyond printing to stdout.

pub mod item_display;
pub mod tables;

pub use item_display::display_item_detail;
pub use tables::{print_separator, truncate_string};
