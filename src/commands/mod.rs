//! # Commands
//!
//! CLI command implementations for quickext.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

pub mod apply;
pub mod manage;
pub mod open;
pub mod toggle;

pub use self::{
    apply::execute as apply,
    manage::execute as manage,
    open::{check_update, open_repository, open_settings, report_issue},
    toggle::{disable as disable_utility, enable as enable_utility},
};
