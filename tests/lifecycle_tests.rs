// Host-side tests for session hide/restore bookkeeping.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::SessionSlot;

#[test]
fn hide_tears_down_once() {
    let mut slot = SessionSlot::new(1);
    let mut ended = Vec::new();

    assert!(slot.hide(|s| ended.push(s)));
    assert!(!slot.hide(|s| ended.push(s)));

    assert_eq!(ended, vec![1]);
    assert!(!slot.is_live());
}

#[test]
fn restore_from_page_cache_starts_a_new_session() {
    let mut slot = SessionSlot::new(1);
    slot.hide(|_| {});

    assert!(slot.show(true, || 2));
    assert!(slot.is_live());

    let mut ended = Vec::new();
    slot.hide(|s| ended.push(s));
    assert_eq!(ended, vec![2]);
}

#[test]
fn plain_show_does_not_restart() {
    let mut slot = SessionSlot::new(1);
    let mut starts = 0;

    // first show of a freshly loaded page
    assert!(!slot.show(false, || {
        starts += 1;
        2
    }));
    // restored while a session is still live
    assert!(!slot.show(true, || {
        starts += 1;
        3
    }));

    assert_eq!(starts, 0);
    let mut ended = Vec::new();
    slot.hide(|s| ended.push(s));
    assert_eq!(ended, vec![1]);
}
