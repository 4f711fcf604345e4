//! Sorted interval lookup.
//!
//! A [`RangeMap`] holds a sorted list of closed, non-overlapping integer
//! intervals, each paired with a value. Lookups binary-search for the first
//! interval whose lower bound exceeds the query and then check the interval
//! just before it.

/// A closed integer interval `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub lower: i32,
    pub upper: i32,
}

impl Range {
    pub fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    /// Check if `key` lies inside the interval (both ends inclusive).
    pub fn contains(&self, key: i32) -> bool {
        self.lower <= key && key <= self.upper
    }
}

/// Errors raised when a [`RangeMap`] is built from invalid intervals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeMapError {
    #[error("{keys} intervals but {values} values")]
    LengthMismatch { keys: usize, values: usize },

    #[error("interval {index} is inverted: [{lower}, {upper}]")]
    Inverted { index: usize, lower: i32, upper: i32 },

    #[error("interval {index} starts at {lower}, which does not follow the previous upper bound {previous_upper}")]
    Overlap {
        index: usize,
        lower: i32,
        previous_upper: i32,
    },
}

/// Interval table mapping integer keys to values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMap<V> {
    keys: Vec<Range>,
    values: Vec<V>,
}

impl<V> RangeMap<V> {
    /// Build a map from parallel lists of intervals and values.
    ///
    /// Intervals must be sorted ascending and must not overlap. Two intervals
    /// sharing a boundary value count as overlapping. Gaps are allowed.
    pub fn new(keys: Vec<Range>, values: Vec<V>) -> Result<Self, RangeMapError> {
        if keys.len() != values.len() {
            return Err(RangeMapError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        for (index, range) in keys.iter().enumerate() {
            if range.lower > range.upper {
                return Err(RangeMapError::Inverted {
                    index,
                    lower: range.lower,
                    upper: range.upper,
                });
            }
            if index > 0 {
                let previous_upper = keys[index - 1].upper;
                if range.lower <= previous_upper {
                    return Err(RangeMapError::Overlap {
                        index,
                        lower: range.lower,
                        previous_upper,
                    });
                }
            }
        }

        Ok(Self { keys, values })
    }

    /// Look up the value whose interval contains `key`.
    pub fn get(&self, key: i32) -> Option<&V> {
        let i = self.keys.partition_point(|range| range.lower <= key);
        if i == 0 {
            return None;
        }
        let i = i - 1;
        if key <= self.keys[i].upper {
            Some(&self.values[i])
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over `(interval, value)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (&Range, &V)> {
        self.keys.iter().zip(self.values.iter())
    }
}
