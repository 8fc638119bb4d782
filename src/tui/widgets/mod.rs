//! Reusable TUI widgets.

mod multi_select;

pub use multi_select::{MultiSelect, MultiSelectAction};
