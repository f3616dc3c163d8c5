//! Stacking-rule reflow engine
//!
//! A pure function over in-memory data: inspect a proposed arrangement,
//! detect the stacking condition, and derive a corrected arrangement or
//! signal that nothing needs to change. Every unmatched or malformed
//! condition resolves to `None`; the engine never errors and performs no
//! bounds clamping (the external grid engine reflows around out-of-range
//! geometry).

use crate::model::{Arrangement, BlockPosition};

use super::config::StackingRuleConfig;

/// Blocks sharing the same column offset, grouped for one rule evaluation
///
/// Ephemeral by design: computed fresh from the position projection on every
/// evaluation and discarded with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGroup {
    /// The shared `x` offset
    pub x: u32,
    /// Members in input order
    pub members: Vec<BlockPosition>,
}

/// Group blocks by exact `x` equality, in first-occurrence order
///
/// The tie-break for "first qualifying group" depends on this ordering, so
/// it is kept explicit here instead of leaning on the iteration order of a
/// keyed map: a group's rank is the input index of its first member.
pub fn column_groups(blocks: &[BlockPosition]) -> Vec<ColumnGroup> {
    let mut groups: Vec<ColumnGroup> = Vec::new();
    for block in blocks {
        match groups.iter_mut().find(|group| group.x == block.x) {
            Some(group) => group.members.push(block.clone()),
            None => groups.push(ColumnGroup {
                x: block.x,
                members: vec![block.clone()],
            }),
        }
    }
    groups
}

/// The vertical-stacking reflow rule
///
/// When the designated top and bottom blocks land in the same column, the
/// designated filler block widens to [`StackingRuleConfig::filler_width`]
/// and the stacked blocks are resized to share that column as equal rows.
#[derive(Debug, Clone, Default)]
pub struct StackingRule {
    config: StackingRuleConfig,
}

impl StackingRule {
    /// Create a rule from an explicit configuration
    pub fn new(config: StackingRuleConfig) -> Self {
        Self { config }
    }

    /// The rule's configuration
    pub fn config(&self) -> &StackingRuleConfig {
        &self.config
    }

    /// Evaluate the rule against a position projection and its arrangement
    ///
    /// Returns the corrected arrangement, or `None` when the rule does not
    /// apply: no column holds both designated blocks (the normal case during
    /// ordinary dragging), or the filler block is absent.
    ///
    /// The rule targets exactly one stacking event at a time: the first
    /// qualifying column group in first-occurrence order wins and the rest
    /// are ignored. Should more than two blocks share the qualifying column,
    /// every member is stacked by its index within the group.
    pub fn apply(
        &self,
        blocks: &[BlockPosition],
        arrangement: &Arrangement,
    ) -> Option<Arrangement> {
        let stacked = column_groups(blocks).into_iter().find(|group| {
            group.members.len() >= 2
                && group.members.iter().any(|b| b.id == self.config.top_id)
                && group.members.iter().any(|b| b.id == self.config.bottom_id)
        })?;

        if !arrangement.contains(self.config.filler_id.as_str()) {
            return None;
        }

        let corrected = arrangement
            .iter()
            .map(|block| {
                let mut block = block.clone();
                if block.id == self.config.filler_id {
                    block.w = self.config.filler_width;
                } else if let Some(index) =
                    stacked.members.iter().position(|m| m.id == block.id)
                {
                    block.w = self.config.stacked_width;
                    block.h = self.config.stacked_height;
                    block.y = index as u32 * self.config.stacked_height;
                }
                block
            })
            .collect();

        Some(Arrangement::from_unique(corrected))
    }
}
