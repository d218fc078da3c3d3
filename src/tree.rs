use alloc::vec::Vec;
use core::cmp;

use crate::Bounds;

/// A Fenwick tree (binary indexed tree) over the inclusive index range `[min, max]`.
///
/// The tree maintains a conceptual array of `i64` values, all zero at construction, and
/// supports point updates and prefix sums in `O(log n)` time using `O(n)` space.
///
/// Indexes outside `[min, max]` never fail:
/// - writes below `min` or above `max` are ignored,
/// - prefix sums below `min` are `0` and prefix sums past `max` cover the whole range.
///
/// Accumulators use wrapping (two's complement) arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    // tree[p - 1] holds the sum of the lsb(p) values ending at internal position p (1-indexed).
    tree: Vec<i64>,
    offset: i64,
}

impl Tree {
    /// Creates a tree over the inclusive range `[min, max]` with every value set to zero.
    ///
    /// A range with `max < min` produces an empty tree: queries return `0` and writes are
    /// ignored.
    ///
    /// # Panics
    ///
    /// Panics if the range is too large to allocate.
    pub fn new(min: i64, max: i64) -> Self {
        let len = range_len(min, max);
        fdebug!(min, max, len, "Tree::new");
        Self {
            tree: alloc::vec![0; len],
            offset: min,
        }
    }

    /// Creates a tree over `[min, min + values.len() - 1]` holding `values`, in `O(n)`.
    ///
    /// This is equivalent to calling [`Tree::add`] once per value, without the `O(n log n)`
    /// cost.
    ///
    /// Values that would land past `i64::MAX` are dropped, so the tree always covers
    /// `[min, min + len - 1]` without wrapping.
    pub fn from_values(min: i64, values: &[i64]) -> Self {
        let n = cmp::min(values.len(), range_len(min, i64::MAX));
        if n < values.len() {
            ftrace!(min, dropped = values.len() - n, "Tree::from_values truncated");
        }
        let mut tree = values[..n].to_vec();
        for p in 1..=n {
            let parent = p + lsb(p);
            if parent <= n {
                tree[parent - 1] = tree[parent - 1].wrapping_add(tree[p - 1]);
            }
        }
        fdebug!(min, len = n, "Tree::from_values");
        Self { tree, offset: min }
    }

    /// Adds `delta` to the value at `index`.
    ///
    /// Indexes outside `[min, max]` are ignored.
    pub fn add(&mut self, index: i64, delta: i64) {
        let n = self.tree.len();
        let mut p = match self.position(index) {
            Some(p) if p <= n => p,
            _ => {
                ftrace!(index, delta, "Tree::add ignored out-of-range index");
                return;
            }
        };
        while p <= n {
            self.tree[p - 1] = self.tree[p - 1].wrapping_add(delta);
            p += lsb(p);
        }
    }

    /// Returns the sum of the values at indexes inclusively up to `index`.
    ///
    /// Returns `0` below `min`; past `max` the sum covers the whole range.
    pub fn prefix(&self, index: i64) -> i64 {
        let Some(p) = self.position(index) else {
            return 0;
        };
        self.prefix_at(cmp::min(p, self.tree.len()))
    }

    /// Alias for [`Tree::prefix`].
    #[inline]
    pub fn sum(&self, index: i64) -> i64 {
        self.prefix(index)
    }

    /// Returns the sum of the values in the inclusive range `[start, end]`.
    ///
    /// Computed as `prefix(end) - prefix(start - 1)`; an inverted range (`end < start`) is not
    /// rejected and yields the negated sum of `[end + 1, start - 1]`.
    pub fn range(&self, start: i64, end: i64) -> i64 {
        let before = start.checked_sub(1).map_or(0, |i| self.prefix(i));
        self.prefix(end).wrapping_sub(before)
    }

    /// Returns the value at `index` (`0` outside `[min, max]`).
    pub fn value(&self, index: i64) -> i64 {
        self.range(index, index)
    }

    /// Sets the value at `index` to `value`.
    ///
    /// Costs a [`Tree::value`] read plus, when the value changes, one [`Tree::add`].
    pub fn set(&mut self, index: i64, value: i64) {
        let current = self.value(index);
        if current == value {
            ftrace!(index, value, "Tree::set unchanged");
            return;
        }
        self.add(index, value.wrapping_sub(current));
    }

    pub fn min(&self) -> i64 {
        self.offset
    }

    /// Returns the maximum index. For an empty tree this is `min - 1`.
    pub fn max(&self) -> i64 {
        self.offset
            .wrapping_add(self.tree.len() as i64)
            .wrapping_sub(1)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min(), self.max())
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn contains(&self, index: i64) -> bool {
        self.position(index).is_some_and(|p| p <= self.tree.len())
    }

    /// Sum of every value in the range.
    pub fn total(&self) -> i64 {
        self.prefix_at(self.tree.len())
    }

    /// Returns the largest index `i` such that `prefix(i) <= target`.
    ///
    /// Returns `None` if the tree is empty or `prefix(min) > target`.
    ///
    /// Prefix sums must be non-decreasing (all values non-negative) for the result to be the
    /// largest such index.
    pub fn find_prefix(&self, target: i64) -> Option<i64> {
        let n = self.tree.len();
        if n == 0 {
            return None;
        }

        let mut pos = 0usize;
        let mut remaining = target;
        let mut bit = highest_power_of_two_leq(n);
        while bit != 0 {
            let next = pos + bit;
            if next <= n && self.tree[next - 1] <= remaining {
                remaining = remaining.wrapping_sub(self.tree[next - 1]);
                pos = next;
            }
            bit >>= 1;
        }

        if pos == 0 {
            None
        } else {
            Some(self.offset.wrapping_add(pos as i64 - 1))
        }
    }

    /// Translates `index` to its 1-indexed internal position, or `None` below `min`.
    ///
    /// Positions past the end are returned unclamped (saturating at `usize::MAX`).
    fn position(&self, index: i64) -> Option<usize> {
        if index < self.offset {
            return None;
        }
        let steps = usize::try_from(index.abs_diff(self.offset)).unwrap_or(usize::MAX);
        Some(steps.saturating_add(1))
    }

    fn prefix_at(&self, mut p: usize) -> i64 {
        let mut sum = 0i64;
        while p > 0 {
            sum = sum.wrapping_add(self.tree[p - 1]);
            p ^= lsb(p);
        }
        sum
    }
}

fn range_len(min: i64, max: i64) -> usize {
    if max < min {
        return 0;
    }
    usize::try_from(max.abs_diff(min))
        .ok()
        .and_then(|d| d.checked_add(1))
        .unwrap_or(usize::MAX)
}

/// Lowest set bit of `p`, e.g. `lsb(6) == 2`.
#[inline]
pub(crate) fn lsb(p: usize) -> usize {
    p & p.wrapping_neg()
}

fn highest_power_of_two_leq(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    1 << (usize::BITS - 1 - n.leading_zeros())
}
