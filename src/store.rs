//! Layout state container
//!
//! Owns the authoritative [`LayoutSet`] and applies committed updates. The
//! external grid engine calls [`LayoutStore::on_layout_change`] at the end of
//! every drag, resize, or programmatic recompute; the store normalizes the
//! payload, runs the stacking rule against the primary breakpoint, and
//! commits either the corrected or the unchanged layout set. Everything runs
//! synchronously on the caller's thread; there is no concurrent writer.

use crate::model::{Arrangement, Breakpoint, LayoutSet, RawBlock, RawLayoutSet};
use crate::reflow::StackingRule;

/// The authoritative holder of the per-breakpoint layout state
///
/// Construction via [`LayoutStore::mount`] is the single
/// uninitialized-to-ready transition; there is no teardown, the store lives
/// as long as the owning view.
#[derive(Debug, Clone)]
pub struct LayoutStore {
    layouts: LayoutSet,
    rule: StackingRule,
    primary: Breakpoint,
    generation: u64,
}

impl LayoutStore {
    /// Mount the store with an initial layout set and the default rule
    pub fn mount(initial: LayoutSet) -> Self {
        Self::mount_with_rule(initial, StackingRule::default())
    }

    /// Mount the store with an explicit rule configuration
    pub fn mount_with_rule(initial: LayoutSet, rule: StackingRule) -> Self {
        Self {
            layouts: initial,
            rule,
            primary: Breakpoint::Lg,
            generation: 0,
        }
    }

    /// The current layout set
    pub fn layout_set(&self) -> &LayoutSet {
        &self.layouts
    }

    /// The breakpoint the stacking rule corrects
    pub fn primary(&self) -> Breakpoint {
        self.primary
    }

    /// Monotonic commit counter
    ///
    /// Bumped on every commit, corrected or not; dependents re-render when
    /// the value they last saw is stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle a layout-change callback from the external grid engine
    ///
    /// `primary` is the arrangement the gesture happened in; when the engine
    /// omits it the primary breakpoint's entry of `full` is used instead.
    /// The payload is normalized at this boundary, projected to positions,
    /// and run through the stacking rule. A correction replaces only the
    /// primary breakpoint's entry; every other breakpoint is committed as
    /// received. Malformed entries degrade to "no correction applied" —
    /// this path never errors.
    pub fn on_layout_change(&mut self, primary: Option<&[RawBlock]>, full: &RawLayoutSet) {
        let mut committed = LayoutSet::new();
        for (breakpoint, raw) in full {
            committed.insert(*breakpoint, Arrangement::normalized(raw));
        }

        let effective = match primary {
            Some(raw) => Arrangement::normalized(raw),
            None => committed.get(self.primary).cloned().unwrap_or_default(),
        };

        if let Some(corrected) = self.rule.apply(&effective.positions(), &effective) {
            committed.insert(self.primary, corrected);
        }

        self.layouts = committed;
        self.generation += 1;
    }
}
