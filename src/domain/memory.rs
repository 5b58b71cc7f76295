// ============================================================================
// Memory Bank Domain Model
// Ordered accumulator registers; the head is the recall target
// ============================================================================

use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Identity of a memory entry, unique within one bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemoryEntryId(u64);

impl MemoryEntryId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MemoryEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemoryEntry {
    pub id: MemoryEntryId,
    pub value: f64,
}

// ============================================================================
// Memory Bank
// ============================================================================

/// Inline capacity before the bank spills to the heap
const INLINE_ENTRIES: usize = 8;

/// Ordered sequence of memory entries, head first.
///
/// Entries are only created by `store` (always) and `add`/`subtract` (when
/// empty), mutated in place by `add`/`subtract`, and destroyed together by
/// `clear`. Ids come from a counter that survives `clear`, so an id is never
/// reused within a bank's lifetime.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemoryBank {
    entries: SmallVec<[MemoryEntry; INLINE_ENTRIES]>,
    next_id: u64,
}

impl MemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Getters
    // ========================================================================

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry affected by recall, add and subtract
    pub fn head(&self) -> Option<&MemoryEntry> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[MemoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &MemoryEntry> {
        self.entries.iter()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Prepend a brand-new head entry and return its id.
    pub fn store(&mut self, value: f64) -> MemoryEntryId {
        let id = self.allocate_id();
        self.entries.insert(0, MemoryEntry { id, value });
        id
    }

    /// Add to the head, creating it when the bank is empty.
    pub fn add(&mut self, value: f64) -> MemoryEntryId {
        match self.entries.first_mut() {
            Some(head) => {
                head.value += value;
                head.id
            },
            None => self.store(value),
        }
    }

    /// Subtract from the head, creating `-value` when the bank is empty.
    pub fn subtract(&mut self, value: f64) -> MemoryEntryId {
        match self.entries.first_mut() {
            Some(head) => {
                head.value -= value;
                head.id
            },
            None => self.store(-value),
        }
    }

    fn allocate_id(&mut self) -> MemoryEntryId {
        let id = MemoryEntryId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_add_creates_then_mutates_head() {
        let mut bank = MemoryBank::new();

        let first = bank.add(5.0);
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.head().unwrap().value, 5.0);

        let second = bank.add(3.0);
        assert_eq!(first, second);
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.head().unwrap().value, 8.0);
    }

    #[test]
    fn test_subtract_on_empty_negates() {
        let mut bank = MemoryBank::new();
        bank.subtract(4.0);
        assert_eq!(bank.head().unwrap().value, -4.0);

        bank.subtract(1.0);
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.head().unwrap().value, -5.0);
    }

    #[test]
    fn test_store_prepends_new_head() {
        let mut bank = MemoryBank::new();
        bank.store(1.0);
        let newest = bank.store(2.0);

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.head().unwrap().id, newest);
        assert_eq!(bank.head().unwrap().value, 2.0);
        assert_eq!(bank.entries()[1].value, 1.0);

        // add now targets the newest entry only
        bank.add(10.0);
        assert_eq!(bank.entries()[0].value, 12.0);
        assert_eq!(bank.entries()[1].value, 1.0);
    }

    #[test]
    fn test_clear_keeps_ids_unique() {
        let mut bank = MemoryBank::new();
        let before = bank.store(1.0);
        bank.clear();
        assert!(bank.is_empty());
        assert!(bank.head().is_none());

        let after = bank.store(1.0);
        assert_ne!(before, after);
        assert_eq!(after.to_string(), "m1");
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let mut bank = MemoryBank::new();
        for i in 0..20 {
            bank.store(i as f64);
        }
        assert_eq!(bank.len(), 20);
        assert_eq!(bank.head().unwrap().value, 19.0);
    }

    quickcheck! {
        fn prop_store_always_grows(values: Vec<i32>) -> bool {
            let mut bank = MemoryBank::new();
            values.iter().enumerate().all(|(i, v)| {
                bank.store(*v as f64);
                bank.len() == i + 1
            })
        }

        fn prop_add_and_subtract_never_grow_past_one(ops: Vec<(bool, i32)>) -> bool {
            let mut bank = MemoryBank::new();
            for (is_add, v) in &ops {
                if *is_add {
                    bank.add(*v as f64);
                } else {
                    bank.subtract(*v as f64);
                }
            }
            bank.len() == usize::from(!ops.is_empty())
        }

        fn prop_ids_are_unique(values: Vec<i32>) -> bool {
            let mut bank = MemoryBank::new();
            for v in &values {
                bank.store(*v as f64);
            }
            let mut ids: Vec<_> = bank.iter().map(|e| e.id).collect();
            ids.sort();
            ids.dedup();
            ids.len() == values.len()
        }
    }
}
