//! Grid Reflow - a stacking-rule reflow engine for responsive block grids
//!
//! This library manages the per-breakpoint state of a small, user-rearrangeable
//! grid of blocks and enforces one conditional layout rule: when the designated
//! "top" and "bottom" blocks become vertically stacked in the same column, the
//! designated "filler" block widens to a two-thirds span and the stacked blocks
//! are resized to share their column as equal rows.
//!
//! Rendering, drag/resize mechanics, and breakpoint resolution belong to an
//! external grid engine; this crate is the pure view-state core it calls into.
//!
//! # Example
//!
//! ```rust
//! use grid_reflow::{apply_stacking_rule, Arrangement, Block};
//!
//! // Blocks 1 and 3 share column 0, so the rule fires.
//! let proposed = Arrangement::new(vec![
//!     Block::new("1", 0, 0, 3, 12),
//!     Block::new("3", 0, 12, 3, 12),
//!     Block::new("2", 3, 0, 6, 12),
//! ])
//! .unwrap();
//!
//! let corrected = apply_stacking_rule(&proposed).expect("stacking detected");
//! assert_eq!(corrected.get("2").unwrap().w, 8);
//! assert_eq!(corrected.get("1").unwrap().h, 6);
//! ```

pub mod model;
pub mod profile;
pub mod reflow;
pub mod store;

pub use model::{
    Arrangement, ArrangementError, Block, BlockId, BlockPosition, Breakpoint, LayoutSet, RawBlock,
    RawLayoutSet,
};
pub use profile::{GridProfile, ProfileError};
pub use reflow::{ColumnGroup, RuleConfigError, StackingRule, StackingRuleConfig};
pub use store::LayoutStore;

/// Evaluate the stacking rule with the default configuration
///
/// Derives the position projection itself and returns the corrected
/// arrangement, or `None` when the rule does not apply. For a custom id set
/// or grid shape, build a [`StackingRule`] from a [`StackingRuleConfig`]
/// instead.
///
/// # Example
///
/// ```rust
/// use grid_reflow::{apply_stacking_rule, Arrangement, Block};
///
/// // Side by side: nothing to correct.
/// let spread = Arrangement::new(vec![
///     Block::new("1", 0, 0, 3, 12),
///     Block::new("2", 3, 0, 6, 12),
///     Block::new("3", 9, 0, 3, 12),
/// ])
/// .unwrap();
///
/// assert!(apply_stacking_rule(&spread).is_none());
/// ```
pub fn apply_stacking_rule(arrangement: &Arrangement) -> Option<Arrangement> {
    StackingRule::default().apply(&arrangement.positions(), arrangement)
}
