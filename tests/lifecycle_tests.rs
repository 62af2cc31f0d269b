// Host-side tests for page hide/show handling.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::*;

#[test]
fn cached_page_stays_mounted() {
    assert_eq!(on_page_hide(true), PageAction::Keep);
    assert_eq!(on_page_show(true), PageAction::Keep);
}

#[test]
fn unload_tears_down() {
    assert_eq!(on_page_hide(false), PageAction::TearDown);
}

#[test]
fn shown_after_teardown_mounts_again() {
    // Hidden for real, then restored anyway: nothing is mounted any more.
    let hide = on_page_hide(false);
    let mounted = hide != PageAction::TearDown;
    assert_eq!(on_page_show(mounted), PageAction::Mount);
}
