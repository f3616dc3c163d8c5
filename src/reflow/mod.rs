//! Stacking-rule reflow engine
//!
//! This module takes the position projection of a proposed arrangement,
//! detects whether the designated top and bottom blocks have stacked in the
//! same column, and derives a corrected arrangement where the filler block
//! widens and the stacked blocks share the column as equal rows.

pub mod config;
pub mod engine;

pub use config::{RuleConfigError, StackingRuleConfig};
pub use engine::{column_groups, ColumnGroup, StackingRule};
