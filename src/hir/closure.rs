//! Transitive closure over an arbitrary expansion function.

use std::hash::Hash;

use indexmap::IndexSet;

/// Collect everything reachable from `root` by repeatedly applying `expand`.
///
/// Each node is expanded at most once after it enters the result set, so
/// shared ancestors (diamonds) are visited once and cycles terminate. The
/// root itself is only part of the result when `include_root` is set or when
/// a cycle leads back to it. Results keep discovery order.
pub fn closure<T, F, I>(root: T, include_root: bool, mut expand: F) -> IndexSet<T>
where
    T: Copy + Eq + Hash,
    F: FnMut(T) -> I,
    I: IntoIterator<Item = T>,
{
    let mut results = IndexSet::new();
    if include_root {
        results.insert(root);
    }

    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        let fresh: Vec<T> = expand(node)
            .into_iter()
            .filter(|next| results.insert(*next))
            .collect();
        // Reversed so the first successor is expanded first.
        pending.extend(fresh.into_iter().rev());
    }
    results
}
