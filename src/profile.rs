//! Grid-engine profile support
//!
//! The external grid engine is configured with breakpoint widths, column
//! counts, a row height, and a drag-handle selector. This module bundles
//! that data with the stacking-rule configuration so an embedding
//! application can load the whole setup from a TOML profile.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Breakpoint;
use crate::reflow::{RuleConfigError, StackingRuleConfig};

/// Errors that can occur when loading or parsing grid profiles
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse profile TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid stacking rule: {0}")]
    Rule(#[from] RuleConfigError),
}

/// Everything the embedding application hands to the external grid engine,
/// plus the stacking-rule configuration
///
/// Fields missing from a profile file fall back to the defaults below, which
/// reproduce the original dashboard setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridProfile {
    /// Minimum viewport width per breakpoint, in pixels
    pub breakpoints: BTreeMap<Breakpoint, u32>,
    /// Column count per breakpoint
    pub columns: BTreeMap<Breakpoint, u32>,
    /// Row height in pixels
    pub row_height: u32,
    /// CSS selector of the sub-region that captures drag gestures
    pub drag_handle: String,
    /// Stacking-rule configuration
    pub rule: StackingRuleConfig,
}

impl Default for GridProfile {
    fn default() -> Self {
        let breakpoints = [
            (Breakpoint::Lg, 1200),
            (Breakpoint::Md, 996),
            (Breakpoint::Sm, 768),
            (Breakpoint::Xs, 480),
        ]
        .into_iter()
        .collect();
        let columns = Breakpoint::ALL.into_iter().map(|bp| (bp, 12)).collect();
        Self {
            breakpoints,
            columns,
            row_height: 30,
            drag_handle: ".drag-handle".to_string(),
            rule: StackingRuleConfig::default(),
        }
    }
}

impl GridProfile {
    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a profile from a TOML string
    ///
    /// The stacking rule is validated here: a profile is a trust boundary,
    /// unlike configs built in code.
    pub fn from_str(content: &str) -> Result<Self, ProfileError> {
        let profile: GridProfile = toml::from_str(content)?;
        profile.rule.validate()?;
        Ok(profile)
    }

    /// Column count for a breakpoint, falling back to the rule's grid span
    pub fn columns_for(&self, breakpoint: Breakpoint) -> u32 {
        self.columns
            .get(&breakpoint)
            .copied()
            .unwrap_or(self.rule.total_columns)
    }

    /// Minimum viewport width for a breakpoint, if configured
    pub fn breakpoint_width(&self, breakpoint: Breakpoint) -> Option<u32> {
        self.breakpoints.get(&breakpoint).copied()
    }
}
