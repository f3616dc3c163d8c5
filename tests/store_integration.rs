//! Integration tests for the layout state container

use grid_reflow::{
    Arrangement, Block, Breakpoint, LayoutSet, LayoutStore, RawBlock, RawLayoutSet, StackingRule,
    StackingRuleConfig,
};
use pretty_assertions::assert_eq;

fn raw(blocks: &[(&str, u32, u32, u32, u32)]) -> Vec<RawBlock> {
    blocks
        .iter()
        .map(|(i, x, y, w, h)| RawBlock::new(*i, *x, *y, *w, *h))
        .collect()
}

/// A full callback payload where every breakpoint carries the same blocks,
/// the way a grid engine reports after a gesture on one tier.
fn full_payload(primary: &[(&str, u32, u32, u32, u32)]) -> RawLayoutSet {
    let mut set = RawLayoutSet::new();
    for bp in Breakpoint::ALL {
        set.insert(bp, raw(primary));
    }
    set
}

const STACKED: [(&str, u32, u32, u32, u32); 3] = [
    ("1", 0, 0, 3, 12),
    ("3", 0, 12, 3, 12),
    ("2", 3, 0, 6, 12),
];

const SPREAD: [(&str, u32, u32, u32, u32); 3] = [
    ("1", 0, 0, 3, 12),
    ("2", 3, 0, 6, 12),
    ("3", 9, 0, 3, 12),
];

#[test]
fn test_drag_into_stack_corrects_primary() {
    let mut store = LayoutStore::mount(LayoutSet::default_dashboard());
    store.on_layout_change(Some(&raw(&STACKED)), &full_payload(&STACKED));

    let lg = store.layout_set().get(Breakpoint::Lg).unwrap();
    assert_eq!(lg.get("2").unwrap().w, 8);
    assert_eq!(lg.get("1").unwrap().y, 0);
    assert_eq!(lg.get("3").unwrap().y, 6);
}

#[test]
fn test_breakpoint_isolation() {
    let mut store = LayoutStore::mount(LayoutSet::default_dashboard());
    let payload = full_payload(&STACKED);
    store.on_layout_change(Some(&raw(&STACKED)), &payload);

    // Every non-primary breakpoint is committed exactly as the engine sent
    // it, structurally unchanged by the correction.
    for bp in [Breakpoint::Md, Breakpoint::Sm, Breakpoint::Xs] {
        let committed = store.layout_set().get(bp).unwrap();
        let sent = Arrangement::normalized(payload.get(&bp).unwrap());
        assert_eq!(committed, &sent);
    }
}

#[test]
fn test_ordinary_drag_commits_unchanged() {
    let mut store = LayoutStore::mount(LayoutSet::default_dashboard());
    store.on_layout_change(Some(&raw(&SPREAD)), &full_payload(&SPREAD));

    let lg = store.layout_set().get(Breakpoint::Lg).unwrap();
    assert_eq!(lg.get("2").unwrap().w, 6);
    assert_eq!(lg.get("3").unwrap().x, 9);
}

#[test]
fn test_generation_advances_on_every_commit() {
    let mut store = LayoutStore::mount(LayoutSet::default_dashboard());
    assert_eq!(store.generation(), 0);

    store.on_layout_change(Some(&raw(&SPREAD)), &full_payload(&SPREAD));
    assert_eq!(store.generation(), 1);

    store.on_layout_change(Some(&raw(&STACKED)), &full_payload(&STACKED));
    assert_eq!(store.generation(), 2);
}

#[test]
fn test_recheck_after_correction_is_stable() {
    // Simulate the engine echoing the corrected layout back as the next
    // callback: the committed state must not drift.
    let mut store = LayoutStore::mount(LayoutSet::default_dashboard());
    store.on_layout_change(Some(&raw(&STACKED)), &full_payload(&STACKED));
    let after_first = store.layout_set().get(Breakpoint::Lg).unwrap().clone();

    let echoed: Vec<RawBlock> = after_first
        .iter()
        .map(|b| RawBlock::new(b.id.as_str(), b.x, b.y, b.w, b.h))
        .collect();
    let mut payload = RawLayoutSet::new();
    payload.insert(Breakpoint::Lg, echoed.clone());
    store.on_layout_change(Some(&echoed), &payload);

    let after_second = store.layout_set().get(Breakpoint::Lg).unwrap();
    for block in after_first.iter() {
        let again = after_second.get(block.id.as_str()).unwrap();
        assert_eq!((again.x, again.y, again.w, again.h), (block.x, block.y, block.w, block.h));
    }
}

#[test]
fn test_payload_with_duplicate_ids_degrades_gracefully() {
    let mut store = LayoutStore::mount(LayoutSet::default_dashboard());
    let duplicated = [
        ("1", 0, 0, 3, 12),
        ("1", 0, 12, 3, 12),
        ("2", 3, 0, 6, 12),
        ("3", 9, 0, 3, 12),
    ];
    store.on_layout_change(Some(&raw(&duplicated)), &full_payload(&duplicated));

    // First occurrence of "1" wins; with "3" off in its own column the rule
    // stays quiet and the (normalized) payload is committed as-is.
    let lg = store.layout_set().get(Breakpoint::Lg).unwrap();
    assert_eq!(lg.len(), 3);
    assert_eq!(lg.get("1").unwrap().y, 0);
    assert_eq!(lg.get("2").unwrap().w, 6);
}

#[test]
fn test_missing_primary_and_missing_lg_entry_is_a_noop_commit() {
    let mut store = LayoutStore::mount(LayoutSet::default_dashboard());
    let mut payload = RawLayoutSet::new();
    payload.insert(Breakpoint::Sm, raw(&STACKED));
    store.on_layout_change(None, &payload);

    // Nothing to evaluate against: the payload is committed verbatim and the
    // sm entry is left alone even though its blocks happen to stack.
    assert_eq!(store.generation(), 1);
    assert!(store.layout_set().get(Breakpoint::Lg).is_none());
    let sm = store.layout_set().get(Breakpoint::Sm).unwrap();
    assert_eq!(sm.get("2").unwrap().w, 6);
}

#[test]
fn test_store_with_profile_rule() {
    let config = StackingRuleConfig::new()
        .with_stacked_pair("1", "3")
        .with_filler("2")
        .with_filler_width(9)
        .with_stacked_size(3, 4);
    config.validate().expect("valid rule");

    let mut store =
        LayoutStore::mount_with_rule(LayoutSet::default_dashboard(), StackingRule::new(config));
    store.on_layout_change(Some(&raw(&STACKED)), &full_payload(&STACKED));

    let lg = store.layout_set().get(Breakpoint::Lg).unwrap();
    assert_eq!(lg.get("2").unwrap().w, 9);
    assert_eq!(lg.get("3").unwrap().y, 4);

    // Blocks absent from the change payload never materialize: the store
    // only ever holds what the engine reported last.
    assert!(lg.get("4").is_none());
    assert_eq!(lg.len(), 3);
}

#[test]
fn test_mounted_state_matches_initial_configuration() {
    let initial = LayoutSet::new().with_arrangement(
        Breakpoint::Lg,
        Arrangement::new(vec![Block::new("1", 0, 0, 12, 6)]).unwrap(),
    );
    let store = LayoutStore::mount(initial.clone());
    assert_eq!(store.layout_set(), &initial);
    assert_eq!(store.generation(), 0);
}
