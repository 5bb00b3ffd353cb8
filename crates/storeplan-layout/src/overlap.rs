//! Pairwise overlap detection over layout shapes.
//!
//! The pass always starts from a clean slate: every flag is reset, then each
//! unordered pair is tested once. Layouts are human-curated (tens of
//! rectangles), so the O(n²) scan is fine.

use crate::geometry::overlaps;
use crate::model::LayoutShape;

/// Recomputes `is_overlapping` for every item, comparing all pairs.
///
/// Returns the number of items left flagged.
pub fn detect_overlaps<T: LayoutShape>(items: &mut [T], gap: f64) -> usize {
    detect_overlaps_grouped(items, gap, |_| ())
}

/// Recomputes `is_overlapping`, only comparing items whose `group` keys match.
///
/// Shelves use this with their zone id so shelves in different zones never
/// flag each other.
pub fn detect_overlaps_grouped<T, K, F>(items: &mut [T], gap: f64, group: F) -> usize
where
    T: LayoutShape,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    for item in items.iter_mut() {
        item.set_overlapping(false);
    }

    let n = items.len();
    let mut flagged = vec![false; n];
    for i in 0..n {
        let a = items[i].rect();
        let key = group(&items[i]);
        for j in (i + 1)..n {
            if group(&items[j]) != key {
                continue;
            }
            if overlaps(&a, &items[j].rect(), gap) {
                flagged[i] = true;
                flagged[j] = true;
            }
        }
    }

    for (item, hit) in items.iter_mut().zip(&flagged) {
        item.set_overlapping(*hit);
    }
    flagged.iter().filter(|hit| **hit).count()
}

/// True if any pair of `items` overlaps. Does not touch the flags.
pub fn has_any_overlap<T: LayoutShape>(items: &[&T], gap: f64) -> bool {
    !overlapping_pairs(items, gap).is_empty()
}

/// All overlapping index pairs `(i, j)` with `i < j`, in scan order.
pub fn overlapping_pairs<T: LayoutShape>(items: &[&T], gap: f64) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in items.iter().enumerate() {
        for (j, b) in items.iter().enumerate().skip(i + 1) {
            if overlaps(&a.rect(), &b.rect(), gap) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
