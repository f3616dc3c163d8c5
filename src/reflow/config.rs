//! Configuration for the stacking rule

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::BlockId;

/// Errors produced when validating a stacking-rule configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleConfigError {
    /// Two designated roles share the same block id
    #[error("designated ids must be distinct, '{0}' fills two roles")]
    DesignatedIdCollision(BlockId),

    /// A configured width does not fit the grid
    #[error("{field} ({value}) exceeds total_columns ({total})")]
    WidthExceedsGrid {
        field: &'static str,
        value: u32,
        total: u32,
    },
}

/// Configuration for the stacking rule
///
/// The designated ids and target dimensions were originally baked into the
/// rule body; they live here so the rule can be reused for other id sets and
/// grid shapes without code change. Missing fields in a deserialized config
/// fall back to these defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackingRuleConfig {
    /// Id of the designated "top" block of a stacked pair
    pub top_id: BlockId,

    /// Id of the designated "bottom" block of a stacked pair
    pub bottom_id: BlockId,

    /// Id of the block that widens when the pair stacks
    pub filler_id: BlockId,

    /// Width forced onto the filler block, in columns
    pub filler_width: u32,

    /// Width forced onto each stacked block, in columns
    pub stacked_width: u32,

    /// Height forced onto each stacked block, in rows
    pub stacked_height: u32,

    /// Column capacity of the grid the widths are expressed against
    pub total_columns: u32,
}

impl Default for StackingRuleConfig {
    fn default() -> Self {
        Self {
            top_id: BlockId::new("1"),
            bottom_id: BlockId::new("3"),
            filler_id: BlockId::new("2"),
            filler_width: 8,
            stacked_width: 4,
            stacked_height: 6,
            total_columns: 12,
        }
    }
}

impl StackingRuleConfig {
    /// Create a configuration with the default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the designated top/bottom pair
    pub fn with_stacked_pair(mut self, top: impl Into<BlockId>, bottom: impl Into<BlockId>) -> Self {
        self.top_id = top.into();
        self.bottom_id = bottom.into();
        self
    }

    /// Set the designated filler block
    pub fn with_filler(mut self, filler: impl Into<BlockId>) -> Self {
        self.filler_id = filler.into();
        self
    }

    /// Set the width forced onto the filler block
    pub fn with_filler_width(mut self, width: u32) -> Self {
        self.filler_width = width;
        self
    }

    /// Set the width and height forced onto each stacked block
    pub fn with_stacked_size(mut self, width: u32, height: u32) -> Self {
        self.stacked_width = width;
        self.stacked_height = height;
        self
    }

    /// Set the grid's column capacity
    pub fn with_total_columns(mut self, columns: u32) -> Self {
        self.total_columns = columns;
        self
    }

    /// Check that the designated ids are distinct and the widths fit the grid
    ///
    /// Construction stays infallible; this runs when a configuration crosses
    /// a trust boundary, e.g. when loaded from a profile file.
    pub fn validate(&self) -> Result<(), RuleConfigError> {
        if self.top_id == self.bottom_id || self.top_id == self.filler_id {
            return Err(RuleConfigError::DesignatedIdCollision(self.top_id.clone()));
        }
        if self.bottom_id == self.filler_id {
            return Err(RuleConfigError::DesignatedIdCollision(
                self.bottom_id.clone(),
            ));
        }
        if self.filler_width > self.total_columns {
            return Err(RuleConfigError::WidthExceedsGrid {
                field: "filler_width",
                value: self.filler_width,
                total: self.total_columns,
            });
        }
        if self.stacked_width > self.total_columns {
            return Err(RuleConfigError::WidthExceedsGrid {
                field: "stacked_width",
                value: self.stacked_width,
                total: self.total_columns,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StackingRuleConfig::default();
        assert_eq!(config.top_id, BlockId::new("1"));
        assert_eq!(config.bottom_id, BlockId::new("3"));
        assert_eq!(config.filler_id, BlockId::new("2"));
        assert_eq!(config.filler_width, 8);
        assert_eq!(config.stacked_width, 4);
        assert_eq!(config.stacked_height, 6);
        assert_eq!(config.total_columns, 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = StackingRuleConfig::new()
            .with_stacked_pair("header", "footer")
            .with_filler("body")
            .with_filler_width(16)
            .with_stacked_size(8, 4)
            .with_total_columns(24);

        assert_eq!(config.top_id, BlockId::new("header"));
        assert_eq!(config.bottom_id, BlockId::new("footer"));
        assert_eq!(config.filler_id, BlockId::new("body"));
        assert_eq!(config.filler_width, 16);
        assert_eq!(config.stacked_width, 8);
        assert_eq!(config.stacked_height, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_colliding_ids() {
        let config = StackingRuleConfig::new().with_stacked_pair("1", "1");
        assert_eq!(
            config.validate().unwrap_err(),
            RuleConfigError::DesignatedIdCollision(BlockId::new("1"))
        );
    }

    #[test]
    fn test_validate_rejects_oversized_filler() {
        let config = StackingRuleConfig::new().with_filler_width(13);
        assert_eq!(
            config.validate().unwrap_err(),
            RuleConfigError::WidthExceedsGrid {
                field: "filler_width",
                value: 13,
                total: 12,
            }
        );
    }

    #[test]
    fn test_deserialize_partial_config_uses_defaults() {
        let config: StackingRuleConfig =
            toml::from_str("filler_width = 9").expect("partial config");
        assert_eq!(config.filler_width, 9);
        assert_eq!(config.stacked_width, 4);
        assert_eq!(config.top_id, BlockId::new("1"));
    }
}
