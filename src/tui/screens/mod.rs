//! TUI screens for interactive workflows.

mod confirm;
mod manage;

pub use confirm::confirm;
pub use manage::{ManageOutcome, ManageScreen};
