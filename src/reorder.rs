//! Drag-move helper shared by category and item reordering.
//!
//! A drag gesture produces a `(moved_id, target_id)` pair against the
//! order-sorted sequence. The move uses plain splice semantics: remove the
//! element at its current index, insert it at the target element's
//! pre-removal index. The resulting full sequence is what callers hand to
//! the bulk reorder operations, which renormalize display order.

use crate::model::Ordered;

/// Apply a single-element move to `sorted`, returning the new full
/// sequence. `None` means no-op: either id is missing from the sequence,
/// or an element was dropped onto itself.
#[must_use]
pub fn moved_sequence<T>(sorted: &[T], moved_id: &str, target_id: &str) -> Option<Vec<T>>
where
    T: Clone + Ordered,
{
    if moved_id == target_id {
        return None;
    }
    let from = sorted.iter().position(|entity| entity.id() == moved_id)?;
    let to = sorted.iter().position(|entity| entity.id() == target_id)?;

    let mut result = sorted.to_vec();
    let moved = result.remove(from);
    result.insert(to, moved);
    Some(result)
}

#[cfg(test)]
#[path = "reorder_test.rs"]
mod tests;
