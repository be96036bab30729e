//! HashTable: open-addressed string table with double hashing, tombstone
//! deletion and prime-sized rebuilds.

use crate::alloc;
use crate::config::Config;
use crate::error::{AllocError, BuildError};
use crate::probe::ProbeSeq;
use crate::slot::{Item, Slot};

/// A string-to-string map stored directly in a prime-sized slot array.
///
/// Inserts grow the table once the load passes `grow_above` percent;
/// deletes shrink it once the load drops under `shrink_below` percent.
/// Deleted entries leave tombstones, which are reused by later inserts and
/// purged by the next rebuild. Dropping the table releases every entry.
#[derive(Debug)]
pub struct HashTable {
    config: Config,
    size_index: u32,
    count: usize,
    tombstones: usize,
    slots: Vec<Slot>,
}

impl HashTable {
    /// Empty table at the minimum size. Aborts if the slot array cannot be
    /// allocated.
    pub fn new() -> Self {
        Self::try_new().unwrap_or_else(|err| alloc::exhausted(err))
    }

    pub fn try_new() -> Result<Self, AllocError> {
        Self::sized(Config::default(), 0)
    }

    pub fn with_config(config: Config) -> Result<Self, BuildError> {
        config.validate()?;
        Ok(Self::sized(config, 0)?)
    }

    fn sized(config: Config, size_index: u32) -> Result<Self, AllocError> {
        let buckets = config
            .sizing()
            .capacity_for(size_index)
            .ok_or(AllocError::CapacityOverflow { size_index })?;
        Ok(Self {
            config,
            size_index,
            count: 0,
            tombstones: 0,
            slots: alloc::empty_slots(buckets)?,
        })
    }

    pub fn len(&self) -> usize {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn size_index(&self) -> u32 {
        self.size_index
    }

    /// Always prime.
    pub fn bucket_count(&self) -> usize {
        self.slots.len()
    }

    /// Deleted slots not yet reused or purged by a rebuild.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Integer load percentage, `len * 100 / bucket_count`.
    pub fn load(&self) -> usize {
        self.count * 100 / self.slots.len()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn probe_seq(&self, key: &str) -> ProbeSeq {
        ProbeSeq::new(key, self.slots.len(), &self.config.multipliers)
    }

    /// Inserts or replaces. Aborts on allocation failure.
    pub fn insert(&mut self, key: &str, value: &str) {
        if let Err(err) = self.try_insert(key, value) {
            alloc::exhausted(err)
        }
    }

    /// Inserts `key -> value`, replacing the value if `key` is present.
    ///
    /// On error the table is unchanged.
    pub fn try_insert(&mut self, key: &str, value: &str) -> Result<(), AllocError> {
        if self.load() > self.config.grow_above {
            self.grow()?;
        }

        // First vacant slot on the walk; a live match further along wins.
        let mut vacancy = None;
        for index in self.probe_seq(key) {
            match &mut self.slots[index] {
                Slot::Occupied(item) if item.key() == key => {
                    item.replace_value(alloc::copy_text(value)?);
                    return Ok(());
                }
                Slot::Occupied(_) => {}
                Slot::Tombstone => {
                    vacancy.get_or_insert(index);
                }
                Slot::Empty => {
                    vacancy.get_or_insert(index);
                    break;
                }
            }
        }

        let index =
            vacancy.expect("load below 100% after the grow check leaves a vacant slot");
        let item = Item::new(alloc::copy_text(key)?, alloc::copy_text(value)?);
        if self.slots[index].is_tombstone() {
            self.tombstones -= 1;
        }
        self.slots[index] = Slot::Occupied(item);
        self.count += 1;
        Ok(())
    }

    pub fn search(&self, key: &str) -> Option<&str> {
        let index = self.find_index(key)?;
        self.slots[index].item().map(Item::value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_some()
    }

    /// Removes `key` if present. Aborts on allocation failure during a
    /// shrink.
    pub fn delete(&mut self, key: &str) {
        if let Err(err) = self.try_delete(key) {
            alloc::exhausted(err)
        }
    }

    /// Removes `key` if present, leaving a tombstone in its slot. The shrink
    /// check runs first, whether or not the key exists.
    pub fn try_delete(&mut self, key: &str) -> Result<(), AllocError> {
        if self.load() < self.config.shrink_below {
            self.shrink()?;
        }

        if let Some(index) = self.find_index(key) {
            self.slots[index].bury();
            self.count -= 1;
            self.tombstones += 1;
        }
        Ok(())
    }

    fn find_index(&self, key: &str) -> Option<usize> {
        for index in self.probe_seq(key) {
            let slot = &self.slots[index];
            if slot.is_empty() {
                return None;
            }
            if slot.holds(key) {
                return Some(index);
            }
        }
        None
    }

    fn grow(&mut self) -> Result<(), AllocError> {
        let target = self
            .size_index
            .checked_add(1)
            .ok_or(AllocError::CapacityOverflow { size_index: u32::MAX })?;
        self.rebuild(target)
    }

    fn shrink(&mut self) -> Result<(), AllocError> {
        match self.size_index.checked_sub(1) {
            Some(target) => self.rebuild(target),
            None => Ok(()),
        }
    }

    /// Moves every live item into a fresh slot array for `size_index` and
    /// swaps it in. Tombstones do not carry over.
    ///
    /// The new array is allocated before anything moves, so a failed
    /// allocation leaves the table untouched.
    fn rebuild(&mut self, size_index: u32) -> Result<(), AllocError> {
        #[cfg(feature = "logging")]
        log::trace!(
            "rebuilding at size index {} with {} live entries",
            size_index,
            self.count
        );

        let mut fresh = Self::sized(self.config, size_index)?;
        if fresh.slots.len() <= self.count {
            // Target cannot keep a vacant slot; stay at the current size.
            return Ok(());
        }

        for slot in &mut self.slots {
            if let Some(item) = slot.take_item() {
                fresh.place(item);
            }
        }
        debug_assert_eq!(fresh.count, self.count);

        #[cfg(feature = "logging")]
        log::debug!(
            "resized from size index {} ({} buckets) to {} ({} buckets); {} live, {} tombstones purged",
            self.size_index,
            self.slots.len(),
            fresh.size_index,
            fresh.slots.len(),
            self.count,
            self.tombstones
        );

        self.size_index = fresh.size_index;
        self.slots = fresh.slots;
        self.tombstones = 0;
        Ok(())
    }

    /// Places an item known to be absent into a table without tombstones.
    fn place(&mut self, item: Item) {
        let index = self
            .probe_seq(item.key())
            .find(|&index| self.slots[index].is_empty())
            .expect("rebuild target is larger than the live count");
        self.slots[index] = Slot::Occupied(item);
        self.count += 1;
    }

    /// Panics if any structural invariant is broken.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        use crate::sizing::is_prime;
        use std::collections::HashSet;

        assert_eq!(
            Some(self.slots.len()),
            self.config.sizing().capacity_for(self.size_index)
        );
        assert!(is_prime(self.slots.len()));

        let live = self.slots.iter().filter(|s| s.item().is_some()).count();
        let buried = self.slots.iter().filter(|s| s.is_tombstone()).count();
        assert_eq!(live, self.count, "count tracks occupied slots");
        assert_eq!(buried, self.tombstones, "tombstone count tracks tombstones");

        let mut keys = HashSet::new();
        for (index, slot) in self.slots.iter().enumerate() {
            let Some(item) = slot.item() else { continue };
            assert!(keys.insert(item.key()), "duplicate live key {:?}", item.key());
            // Everything before the item on its own probe sequence is non-empty.
            for probe in self.probe_seq(item.key()) {
                if probe == index {
                    break;
                }
                assert!(!self.slots[probe].is_empty(), "gap before {:?}", item.key());
            }
            assert_eq!(self.find_index(item.key()), Some(index));
        }
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}
