/// The inclusive index range `[min, max]` covered by a [`Tree`](crate::Tree).
///
/// A range with `max < min` is empty.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }

    /// Number of indices in the range, saturating at `u64::MAX`.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.max.abs_diff(self.min).saturating_add(1)
        }
    }

    pub fn contains(&self, index: i64) -> bool {
        self.min <= index && index <= self.max
    }
}
