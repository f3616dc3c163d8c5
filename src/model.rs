//! Core data model for the grid layout system
//!
//! Blocks, arrangements, and the per-breakpoint layout set, plus the
//! boundary types that normalize the external grid engine's loosely-shaped
//! callback payloads into validated values before they reach the reflow
//! engine.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing an arrangement strictly
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArrangementError {
    /// The same block id appears more than once in one arrangement
    #[error("duplicate block id '{0}' in arrangement")]
    DuplicateBlock(BlockId),
}

/// Stable identity of a block
///
/// Identities come from a small fixed set (here `"1"`, `"2"`, `"3"`); the
/// placement attributes around an id change, the id never does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub String);

impl BlockId {
    /// Create a block id from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A positioned block within one breakpoint's arrangement
///
/// Serde field names follow the grid engine's wire format (`i` for the id,
/// camel-cased minimum constraints), so a committed layout set can be handed
/// back to the engine without translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block identity
    #[serde(rename = "i")]
    pub id: BlockId,
    /// Column offset
    pub x: u32,
    /// Row offset
    pub y: u32,
    /// Width in columns
    pub w: u32,
    /// Height in rows
    pub h: u32,
    /// Minimum width the grid engine should allow when resizing
    #[serde(rename = "minW", default, skip_serializing_if = "Option::is_none")]
    pub min_w: Option<u32>,
    /// Minimum height the grid engine should allow when resizing
    #[serde(rename = "minH", default, skip_serializing_if = "Option::is_none")]
    pub min_h: Option<u32>,
}

impl Block {
    /// Create a block with no minimum-size constraints
    pub fn new(id: impl Into<BlockId>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
            min_w: None,
            min_h: None,
        }
    }

    /// Set the minimum width constraint
    pub fn with_min_w(mut self, min_w: u32) -> Self {
        self.min_w = Some(min_w);
        self
    }

    /// Set the minimum height constraint
    pub fn with_min_h(mut self, min_h: u32) -> Self {
        self.min_h = Some(min_h);
        self
    }

    /// Position-only projection of this block
    pub fn position(&self) -> BlockPosition {
        BlockPosition {
            id: self.id.clone(),
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }
}

/// Position-only projection of a block (`id`, `x`, `y`, `w`, `h`)
///
/// This is the defensive copy handed to the reflow engine: extraneous fields
/// the grid engine attaches to its payloads never travel past the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPosition {
    pub id: BlockId,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// A block placement as emitted by the external grid engine
///
/// Deserialization ignores whatever extra fields the engine attaches
/// (`moved`, `static`, resize bounds, ...). Raw placements carry no
/// invariants; [`Arrangement::normalized`] turns a raw list into a valid
/// arrangement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawBlock {
    /// Block identity as the engine names it
    pub i: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[serde(rename = "minW", default)]
    pub min_w: Option<u32>,
    #[serde(rename = "minH", default)]
    pub min_h: Option<u32>,
}

impl RawBlock {
    /// Create a raw placement (mainly useful in tests and simulations)
    pub fn new(i: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            i: i.into(),
            x,
            y,
            w,
            h,
            min_w: None,
            min_h: None,
        }
    }
}

/// The loosely-shaped per-breakpoint payload of a grid engine callback
pub type RawLayoutSet = BTreeMap<Breakpoint, Vec<RawBlock>>;

/// An ordered sequence of block placements for one breakpoint
///
/// Invariant: block ids are unique. Order is insertion order and carries no
/// meaning beyond tie-breaking during reflow evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arrangement {
    blocks: Vec<Block>,
}

impl Arrangement {
    /// Create an arrangement, rejecting duplicate block ids
    pub fn new(blocks: Vec<Block>) -> Result<Self, ArrangementError> {
        let mut seen = HashSet::new();
        for block in &blocks {
            if !seen.insert(block.id.clone()) {
                return Err(ArrangementError::DuplicateBlock(block.id.clone()));
            }
        }
        Ok(Self { blocks })
    }

    /// Normalize a raw grid-engine payload into a valid arrangement
    ///
    /// Entries with an empty id or a zero width/height are dropped; when an
    /// id appears twice the first occurrence wins. Malformed input therefore
    /// degrades to a smaller arrangement rather than an error, matching the
    /// container's "no correction applied" failure semantics.
    pub fn normalized(raw: &[RawBlock]) -> Self {
        let mut seen = HashSet::new();
        let blocks = raw
            .iter()
            .filter(|entry| !entry.i.is_empty() && entry.w > 0 && entry.h > 0)
            .filter(|entry| seen.insert(entry.i.clone()))
            .map(|entry| Block {
                id: BlockId::new(entry.i.clone()),
                x: entry.x,
                y: entry.y,
                w: entry.w,
                h: entry.h,
                min_w: entry.min_w,
                min_h: entry.min_h,
            })
            .collect();
        Self { blocks }
    }

    /// Construct from blocks already known to have unique ids
    pub(crate) fn from_unique(blocks: Vec<Block>) -> Self {
        debug_assert!(
            blocks
                .iter()
                .map(|b| &b.id)
                .collect::<HashSet<_>>()
                .len()
                == blocks.len()
        );
        Self { blocks }
    }

    /// The block placements in insertion order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterate over the block placements
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Look up a block by id
    pub fn get(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id.as_str() == id)
    }

    /// Whether a block with the given id is present
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the arrangement is empty
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Position-only projection of every block, in insertion order
    pub fn positions(&self) -> Vec<BlockPosition> {
        self.blocks.iter().map(Block::position).collect()
    }
}

/// A named responsive viewport tier
///
/// Each breakpoint owns an independent arrangement; the system enforces no
/// cross-breakpoint consistency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Lg,
    Md,
    Sm,
    Xs,
}

impl Breakpoint {
    /// All breakpoints, widest first
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::Lg,
        Breakpoint::Md,
        Breakpoint::Sm,
        Breakpoint::Xs,
    ];

    /// The breakpoint key as the grid engine spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Lg => "lg",
            Breakpoint::Md => "md",
            Breakpoint::Sm => "sm",
            Breakpoint::Xs => "xs",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full set of arrangements, one per breakpoint
///
/// Backed by a `BTreeMap` so iteration order (and therefore every derived
/// computation) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutSet {
    entries: BTreeMap<Breakpoint, Arrangement>,
}

impl LayoutSet {
    /// Create an empty layout set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion of one breakpoint's arrangement
    pub fn with_arrangement(mut self, breakpoint: Breakpoint, arrangement: Arrangement) -> Self {
        self.entries.insert(breakpoint, arrangement);
        self
    }

    /// Replace the arrangement for one breakpoint
    pub fn insert(&mut self, breakpoint: Breakpoint, arrangement: Arrangement) {
        self.entries.insert(breakpoint, arrangement);
    }

    /// Get the arrangement for a breakpoint
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&Arrangement> {
        self.entries.get(&breakpoint)
    }

    /// Whether an arrangement exists for a breakpoint
    pub fn contains(&self, breakpoint: Breakpoint) -> bool {
        self.entries.contains_key(&breakpoint)
    }

    /// Iterate over all entries in breakpoint order
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &Arrangement)> {
        self.entries.iter().map(|(bp, arr)| (*bp, arr))
    }

    /// The hard-coded initial configuration used at mount
    ///
    /// Wide tiers show the three blocks side by side in a 3/6/3 split;
    /// narrow tiers stack them full-width.
    pub fn default_dashboard() -> Self {
        let wide = || {
            Arrangement::from_unique(vec![
                Block::new("1", 0, 0, 3, 12).with_min_w(2),
                Block::new("2", 3, 0, 6, 12).with_min_w(3),
                Block::new("3", 9, 0, 3, 12).with_min_w(2),
            ])
        };
        let narrow = || {
            Arrangement::from_unique(vec![
                Block::new("1", 0, 0, 12, 6),
                Block::new("2", 0, 6, 12, 6),
                Block::new("3", 0, 12, 12, 6),
            ])
        };
        Self::new()
            .with_arrangement(Breakpoint::Lg, wide())
            .with_arrangement(Breakpoint::Md, wide())
            .with_arrangement(Breakpoint::Sm, narrow())
            .with_arrangement(Breakpoint::Xs, narrow())
    }
}
