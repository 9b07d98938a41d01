use std::fmt;

/// Number of slots in a [`ToggleSet`].
pub const CAPACITY: usize = 4;

/// Returned when an insert finds every slot occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot insert {value}: all {} slots are occupied", CAPACITY)]
pub struct CapacityExceeded {
    pub value: i32,
}

/// What a single [`ToggleSet::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Inserted { slot: usize },
    Removed { slot: usize },
    /// The value was absent but there was no free slot for it.
    Dropped,
}

/// A set of at most four distinct integers kept in fixed positions.
///
/// Inserts go to the lowest free slot and removals leave a hole, so the
/// position of a value never changes while it is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleSet {
    slots: [Option<i32>; CAPACITY],
}

impl ToggleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.slots = [None; CAPACITY];
    }

    pub fn index_of(&self, x: i32) -> Option<usize> {
        self.slots.iter().position(|s| *s == Some(x))
    }

    pub fn contains(&self, x: i32) -> bool {
        self.index_of(x).is_some()
    }

    /// Writes `x` into the first empty slot. Does not check for duplicates;
    /// [`toggle`](Self::toggle) is the path that keeps values unique.
    pub fn insert_first_free(&mut self, x: i32) -> Result<usize, CapacityExceeded> {
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(CapacityExceeded { value: x })?;
        self.slots[slot] = Some(x);
        Ok(slot)
    }

    /// Empties the first slot holding `x` and returns its index.
    pub fn remove_by_value(&mut self, x: i32) -> Option<usize> {
        let slot = self.index_of(x)?;
        self.slots[slot] = None;
        Some(slot)
    }

    pub fn toggle(&mut self, x: i32) -> Toggle {
        if let Some(slot) = self.remove_by_value(x) {
            return Toggle::Removed { slot };
        }
        match self.insert_first_free(x) {
            Ok(slot) => Toggle::Inserted { slot },
            Err(_) => Toggle::Dropped,
        }
    }

    pub fn slots(&self) -> &[Option<i32>; CAPACITY] {
        &self.slots
    }

    pub fn slot(&self, i: usize) -> Option<i32> {
        self.slots.get(i).copied().flatten()
    }

    /// Occupied values in slot order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.slots.iter().filter_map(|s| *s)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

impl fmt::Display for ToggleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, s) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match s {
                Some(v) => write!(f, "{}", v)?,
                None => write!(f, "_")?,
            }
        }
        write!(f, "]")
    }
}
