//! Ring arithmetic for the circular option list.
//!
//! `count` / `ring_len` are never zero: a page always has at least one
//! option.

/// Index after `selected` on a ring of `count` items.
pub fn select_next(selected: usize, count: usize) -> usize {
    (selected + 1) % count
}

/// Index before `selected` on a ring of `count` items.
pub fn select_prev(selected: usize, count: usize) -> usize {
    (selected + count - 1) % count
}

/// Shift a ring anchor by `delta`, keeping it within `[0, ring_len)`.
pub fn wrap_anchor(anchor: i32, delta: i32, ring_len: i32) -> i32 {
    (anchor + delta).rem_euclid(ring_len)
}
