use std::fmt;

use crate::toggle_set::ToggleSet;

/// Number of slots that make it into the report. Slot 3 is never shown.
pub const REPORTED_SLOTS: usize = 3;

/// Number an empty slot stands for, both when sorting and when printing.
pub const DEFAULT_EMPTY: i32 = -1;

fn compare_and_swap<T: Ord>(v: &mut [T], i: usize, j: usize) {
    if v[i] > v[j] {
        v.swap(i, j);
    }
}

/// Sorts exactly three elements with the unrolled network
/// (0,1), (1,2), (0,1).
pub fn sort3<T: Ord>(v: &mut [T; 3]) {
    compare_and_swap(v, 0, 1);
    compare_and_swap(v, 1, 2);
    compare_and_swap(v, 0, 1);
}

/// The first three slots of a set, sorted ascending.
///
/// Empty slots are replaced by a fixed number before sorting, so the
/// printed line is ascending whatever that number is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    values: [i32; REPORTED_SLOTS],
}

impl Report {
    pub fn from_set(set: &ToggleSet) -> Self {
        Self::with_empty(set, DEFAULT_EMPTY)
    }

    pub fn with_empty(set: &ToggleSet, empty: i32) -> Self {
        let mut values = [0, 1, 2].map(|i| set.slot(i).unwrap_or(empty));
        sort3(&mut values);
        Report { values }
    }

    pub fn values(&self) -> &[i32; REPORTED_SLOTS] {
        &self.values
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.values;
        write!(f, "{} {} {}", a, b, c)
    }
}
