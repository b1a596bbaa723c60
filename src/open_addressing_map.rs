use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    iter, mem,
};

use crate::error::MapError;

/// Number of slots allocated by [`OpenAddressingMap::new`]
pub const DEFAULT_CAPACITY: usize = 1000;
/// Load factor used when none is given
pub const DEFAULT_LOAD_FACTOR: f64 = 0.5;

/// State of a single table slot
#[derive(Debug, Clone)]
enum Slot<K, V> {
    /// Never written since the table was allocated; ends every probe
    Empty,
    /// Held an entry that was removed; probed through, reusable on insert
    Tombstone,
    /// Holds a live entry
    Occupied {
        /// The stored key
        key: K,
        /// The value associated with the key
        value: V,
    },
}

/// Where the probe for a key ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The key lives at this index
    Found(usize),
    /// The key is absent and should be written at this index
    Vacant(usize),
    /// Every slot was visited without a match or a reusable slot
    Exhausted,
}

/// A hash map using open addressing with linear probing and tombstone deletion.
///
/// Removed entries leave a tombstone behind so that probe chains running through
/// the slot stay intact. Tombstones are reused by later insertions along the same
/// chain and are dropped for good when the table doubles.
///
/// The table grows when an insertion pushes the number of live entries above
/// `floor(load_factor * capacity)`.
///
/// Keys must not be mutated while stored in a way that changes their hash or
/// equality. Doing so leaves the entry unreachable; it is not detected.
///
/// Note: This implementation is not thread-safe. Wrap it in a lock to share it.
#[derive(Debug, Clone)]
pub struct OpenAddressingMap<K, V> {
    /// The slots of the table, `capacity` of them
    slots: Vec<Slot<K, V>>,
    /// Number of occupied slots
    size: usize,
    /// Number of tombstone slots
    tombstones: usize,
    /// Configured ratio of live entries to capacity, in `(0, 1]`
    load_factor: f64,
}

impl<K, V> Default for OpenAddressingMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for OpenAddressingMap<K, V>
where
    K: Eq + Hash,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V> OpenAddressingMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates a map with [`DEFAULT_CAPACITY`] slots and [`DEFAULT_LOAD_FACTOR`]
    #[must_use]
    pub fn new() -> Self {
        Self { slots: empty_table(DEFAULT_CAPACITY), size: 0, tombstones: 0, load_factor: DEFAULT_LOAD_FACTOR }
    }

    /// Creates a map with `capacity` slots and the default load factor.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, MapError> {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates a map with the default capacity and the given load factor.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidLoadFactor`] unless `0 < load_factor <= 1`.
    pub fn with_load_factor(load_factor: f64) -> Result<Self, MapError> {
        Self::with_capacity_and_load_factor(DEFAULT_CAPACITY, load_factor)
    }

    /// Creates a map with `capacity` slots that doubles once the number of entries
    /// exceeds `floor(load_factor * capacity)`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidCapacity`] if `capacity` is zero and
    /// [`MapError::InvalidLoadFactor`] unless `0 < load_factor <= 1`.
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Result<Self, MapError> {
        if capacity == 0 {
            return Err(MapError::InvalidCapacity);
        }
        // NaN fails both comparisons
        if !(load_factor > 0.0 && load_factor <= 1.0) {
            return Err(MapError::InvalidLoadFactor(load_factor));
        }

        Ok(Self { slots: empty_table(capacity), size: 0, tombstones: 0, load_factor })
    }

    /// Inserts a key-value pair, returning the previous value if the key was present.
    ///
    /// Overwriting an existing key never grows the table.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match probe(&self.slots, &key).0 {
            Probe::Found(index) => self.replace_at(index, value),
            Probe::Vacant(index) => {
                self.occupy(index, key, value);
                if self.size > self.threshold() {
                    self.grow(self.size);
                }
                None
            }
            Probe::Exhausted => {
                self.grow(self.size.saturating_add(1));
                self.insert(key, value)
            }
        }
    }

    /// Like [`insert`](Self::insert), but reports allocation failure during growth
    /// instead of aborting.
    ///
    /// The grown table is reserved before the map is modified, so on error the map
    /// is unchanged and `key` and `value` are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::CapacityOverflow`] or [`MapError::AllocationFailed`] if
    /// the doubled table cannot be allocated.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        match probe(&self.slots, &key).0 {
            Probe::Found(index) => Ok(self.replace_at(index, value)),
            Probe::Vacant(index) => {
                let entries = self.size.saturating_add(1);
                let grown = if entries > self.threshold() {
                    Some(try_empty_table(self.grown_capacity(entries)?)?)
                } else {
                    None
                };
                self.occupy(index, key, value);
                if let Some(table) = grown {
                    self.rehash_into(table);
                }
                Ok(None)
            }
            Probe::Exhausted => {
                let table = try_empty_table(self.grown_capacity(self.size.saturating_add(1))?)?;
                self.rehash_into(table);
                self.try_insert(key, value)
            }
        }
    }

    /// Retrieve a value for a given key
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match probe(&self.slots, key).0 {
            Probe::Found(index) => match self.slots.get(index) {
                Some(Slot::Occupied { value, .. }) => Some(value),
                _ => None,
            },
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match probe(&self.slots, key).0 {
            Probe::Found(index) => match self.slots.get_mut(index) {
                Some(Slot::Occupied { value, .. }) => Some(value),
                _ => None,
            },
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    /// Returns true if the map holds an entry for the key
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        matches!(probe(&self.slots, key).0, Probe::Found(_))
    }

    /// Removes a key, leaving a tombstone in its slot, and returns its value.
    ///
    /// Never shrinks or grows the table.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Probe::Found(index) = probe(&self.slots, key).0 else {
            return None;
        };
        let slot = self.slots.get_mut(index)?;
        match mem::replace(slot, Slot::Tombstone) {
            Slot::Occupied { value, .. } => {
                self.size = self.size.saturating_sub(1);
                self.tombstones = self.tombstones.saturating_add(1);
                Some(value)
            }
            other => {
                // probe only reports Found for occupied slots
                *slot = other;
                None
            }
        }
    }

    /// Number of slots the probe for `key` visits, including the slot it stops at.
    ///
    /// Tombstones lengthen probes until the next growth; this makes that visible.
    pub fn probe_length<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        probe(&self.slots, key).1
    }

    /// Returns the number of elements in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the configured load factor
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the number of removed entries still occupying slots as tombstones
    #[must_use]
    pub fn tombstone_count(&self) -> usize {
        self.tombstones
    }

    /// Largest number of entries the current table holds before it doubles
    #[must_use]
    pub fn threshold(&self) -> usize {
        threshold_for(self.load_factor, self.slots.len())
    }

    /// Clears the map, removing all entries and tombstones but keeping the capacity
    pub fn clear(&mut self) {
        self.slots.fill_with(|| Slot::Empty);
        self.size = 0;
        self.tombstones = 0;
    }

    /// Returns an iterator over the key-value pairs, in no particular order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: self.slots.iter(), remaining: self.size }
    }

    /// Swaps in a new value for the occupied slot at `index`
    fn replace_at(&mut self, index: usize, value: V) -> Option<V> {
        match self.slots.get_mut(index) {
            Some(Slot::Occupied { value: current, .. }) => Some(mem::replace(current, value)),
            _ => None,
        }
    }

    /// Writes a new entry into the empty or tombstone slot at `index`
    fn occupy(&mut self, index: usize, key: K, value: V) {
        if let Some(slot) = self.slots.get_mut(index) {
            if matches!(slot, Slot::Tombstone) {
                self.tombstones = self.tombstones.saturating_sub(1);
            }
            *slot = Slot::Occupied { key, value };
            self.size = self.size.saturating_add(1);
        }
    }

    /// Capacity after doubling the table until its threshold admits `entries`.
    /// Doubles at least once.
    fn grown_capacity(&self, entries: usize) -> Result<usize, MapError> {
        let mut capacity = self.slots.len();
        loop {
            capacity = capacity.checked_mul(2).ok_or(MapError::CapacityOverflow)?;
            if threshold_for(self.load_factor, capacity) >= entries {
                return Ok(capacity);
            }
        }
    }

    /// Grows the table to hold `entries` live entries
    fn grow(&mut self, entries: usize) {
        // an overflowing capacity cannot be allocated either; let the allocation fail
        let capacity = self.grown_capacity(entries).unwrap_or(usize::MAX);
        self.rehash_into(empty_table(capacity));
    }

    /// Moves every live entry into `table`, which must be all empty, and makes it the
    /// map's table. Tombstones are left behind.
    fn rehash_into(&mut self, table: Vec<Slot<K, V>>) {
        let old = mem::replace(&mut self.slots, table);
        self.tombstones = 0;

        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                // a fresh table has no tombstones and more free slots than entries
                if let Probe::Vacant(index) = probe(&self.slots, &key).0 {
                    if let Some(target) = self.slots.get_mut(index) {
                        *target = Slot::Occupied { key, value };
                    }
                }
            }
        }
    }
}

/// Largest entry count a table of `capacity` slots holds at `load_factor`
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn threshold_for(load_factor: f64, capacity: usize) -> usize {
    (load_factor * capacity as f64).floor() as usize
}

/// Computes the hash for a key
fn hash<Q: ?Sized + Hash>(key: &Q) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Index at which the probe for `key` starts in a table of `len` slots
#[allow(clippy::cast_possible_truncation)]
fn home_index<Q: ?Sized + Hash>(key: &Q, len: usize) -> Option<usize> {
    // the remainder is below `len`, so it fits back into usize
    hash(key).checked_rem(len as u64).map(|index| index as usize)
}

/// Linear probe shared by every operation.
///
/// Scans forward from the key's home slot, wrapping once around the table. A live
/// slot with an equal key wins. Otherwise the first tombstone passed before the
/// first empty slot is where the key would be inserted, or the empty slot itself
/// if no tombstone came first. Also returns the number of slots visited.
fn probe<K, V, Q>(slots: &[Slot<K, V>], key: &Q) -> (Probe, usize)
where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    let len = slots.len();
    let Some(home) = home_index(key, len) else {
        return (Probe::Exhausted, 0);
    };
    let mut first_tombstone = None;
    let mut visited: usize = 0;

    for index in (home..len).chain(0..home) {
        visited = visited.saturating_add(1);
        match slots.get(index) {
            None | Some(Slot::Empty) => {
                return (Probe::Vacant(first_tombstone.unwrap_or(index)), visited);
            }
            Some(Slot::Tombstone) => {
                first_tombstone.get_or_insert(index);
            }
            Some(Slot::Occupied { key: stored, .. }) => {
                let stored: &Q = stored.borrow();
                if stored == key {
                    return (Probe::Found(index), visited);
                }
            }
        }
    }

    (first_tombstone.map_or(Probe::Exhausted, Probe::Vacant), visited)
}

/// Allocates `capacity` empty slots
fn empty_table<K, V>(capacity: usize) -> Vec<Slot<K, V>> {
    iter::repeat_with(|| Slot::Empty).take(capacity).collect()
}

/// Allocates `capacity` empty slots, reporting allocation failure
fn try_empty_table<K, V>(capacity: usize) -> Result<Vec<Slot<K, V>>, MapError> {
    let mut table = Vec::new();
    table.try_reserve_exact(capacity).map_err(|_| MapError::AllocationFailed { capacity })?;
    table.resize_with(capacity, || Slot::Empty);
    Ok(table)
}

/// Iterator over the key-value pairs of the map
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Slots not yet visited
    slots: std::slice::Iter<'a, Slot<K, V>>,
    /// Occupied slots not yet yielded
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied { key, value } = slot {
                self.remaining = self.remaining.saturating_sub(1);
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a OpenAddressingMap<K, V>
where
    K: Eq + Hash,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Key whose hash ignores its id, so every instance shares a home slot
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Colliding(u32);

    impl Hash for Colliding {
        fn hash<H: Hasher>(&self, state: &mut H) {
            0_u8.hash(state);
        }
    }

    fn small<K: Eq + Hash, V>(capacity: usize) -> OpenAddressingMap<K, V> {
        OpenAddressingMap::with_capacity_and_load_factor(capacity, 0.5).unwrap()
    }

    fn slot_of(map: &OpenAddressingMap<Colliding, i32>, key: &Colliding) -> Option<usize> {
        match probe(&map.slots, key).0 {
            Probe::Found(index) => Some(index),
            _ => None,
        }
    }

    #[test]
    fn test_defaults() {
        let map: OpenAddressingMap<String, i32> = OpenAddressingMap::new();
        assert_eq!(map.capacity(), DEFAULT_CAPACITY);
        assert!((map.load_factor() - DEFAULT_LOAD_FACTOR).abs() < f64::EPSILON);
        assert_eq!(map.threshold(), 500);
        assert!(map.is_empty());
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        assert_eq!(OpenAddressingMap::<u32, u32>::with_capacity(0).unwrap_err(), MapError::InvalidCapacity);
        for load_factor in [0.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                OpenAddressingMap::<u32, u32>::with_load_factor(load_factor),
                Err(MapError::InvalidLoadFactor(_))
            ));
        }
        assert!(OpenAddressingMap::<u32, u32>::with_capacity_and_load_factor(1, 1.0).is_ok());
    }

    #[test]
    fn test_insert_and_get() {
        let mut map = OpenAddressingMap::new();
        assert_eq!(map.insert("key1".to_string(), 1), None);
        assert_eq!(map.insert("key2".to_string(), 2), None);
        assert_eq!(map.insert("key3".to_string(), 3), None);

        assert_eq!(map.get("key1"), Some(&1));
        assert_eq!(map.get("key2"), Some(&2));
        assert_eq!(map.get("key3"), Some(&3));
        assert_eq!(map.get("key4"), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_update() {
        let mut map = small(4);
        assert_eq!(map.insert("key1".to_string(), 1), None);
        assert_eq!(map.insert("key2".to_string(), 2), None);
        assert_eq!(map.insert("key1".to_string(), 10), Some(1));
        assert_eq!(map.get("key1"), Some(&10));
        assert_eq!(map.len(), 2);
        // overwrite does not count towards growth
        assert_eq!(map.capacity(), 4);
    }

    #[test]
    fn test_remove() {
        let mut map = OpenAddressingMap::new();
        map.insert("key1".to_string(), 1);
        map.insert("key2".to_string(), 2);

        assert_eq!(map.remove("key1"), Some(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("key1"), None);
        assert_eq!(map.get("key2"), Some(&2));
        assert_eq!(map.remove("key1"), None);
        assert_eq!(map.remove("missing"), None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.tombstone_count(), 1);
    }

    #[test]
    fn test_resize() {
        let mut map = small(4);
        assert_eq!(map.threshold(), 2);

        map.insert("key1".to_string(), 1);
        map.insert("key2".to_string(), 2);
        assert_eq!(map.capacity(), 4);

        map.insert("key3".to_string(), 3);
        assert_eq!(map.capacity(), 8);

        assert_eq!(map.get("key1"), Some(&1));
        assert_eq!(map.get("key2"), Some(&2));
        assert_eq!(map.get("key3"), Some(&3));
    }

    #[test]
    fn test_growth_from_single_slot() {
        let mut map = small(1);
        assert_eq!(map.threshold(), 0);
        map.insert(1, "one");
        assert_eq!(map.capacity(), 2);
        map.insert(2, "two");
        assert_eq!(map.capacity(), 4);
        assert_eq!(map.get(&1), Some(&"one"));
        assert_eq!(map.get(&2), Some(&"two"));
    }

    #[test]
    fn test_growth_doubles_until_threshold_fits() {
        let mut map = OpenAddressingMap::with_capacity_and_load_factor(1, 0.1).unwrap();
        map.insert('a', 1);
        // thresholds of 2, 4 and 8 slots are all zero
        assert_eq!(map.capacity(), 16);
        assert_eq!(map.threshold(), 1);
        assert_eq!(map.get(&'a'), Some(&1));
    }

    #[test]
    fn test_full_table_with_unit_load_factor() {
        let mut map = OpenAddressingMap::with_capacity_and_load_factor(2, 1.0).unwrap();
        map.insert(1, 1);
        map.insert(2, 2);
        assert_eq!(map.capacity(), 2);
        assert_eq!(map.get(&3), None);
        assert_eq!(map.remove(&3), None);

        map.insert(3, 3);
        assert_eq!(map.capacity(), 4);
        for k in 1..=3 {
            assert_eq!(map.get(&k), Some(&k));
        }
    }

    #[test]
    fn test_tombstone_reuse() {
        let mut map = small(8);
        map.insert(Colliding(1), 1);
        map.insert(Colliding(2), 2);
        let first = slot_of(&map, &Colliding(1));

        assert_eq!(map.remove(&Colliding(1)), Some(1));
        assert_eq!(map.tombstone_count(), 1);

        map.insert(Colliding(3), 3);
        assert_eq!(slot_of(&map, &Colliding(3)), first);
        assert_eq!(map.tombstone_count(), 0);
        assert_eq!(map.capacity(), 8);
        assert_eq!(map.get(&Colliding(3)), Some(&3));
        assert_eq!(map.get(&Colliding(2)), Some(&2));
    }

    #[test]
    fn test_live_match_behind_tombstone_wins() {
        let mut map = small(8);
        map.insert(Colliding(1), 1);
        map.insert(Colliding(2), 2);
        map.remove(&Colliding(1));

        // key 2 sits past the tombstone and must be overwritten in place
        assert_eq!(map.insert(Colliding(2), 20), Some(2));
        assert_eq!(map.len(), 1);
        assert_eq!(map.tombstone_count(), 1);
        assert_eq!(map.get(&Colliding(2)), Some(&20));
    }

    #[test]
    fn test_lookup_through_tombstones() {
        let mut map = small(16);
        for id in 0..5 {
            map.insert(Colliding(id), id);
        }
        for id in 0..4 {
            map.remove(&Colliding(id));
        }
        assert_eq!(map.get(&Colliding(4)), Some(&4));
        assert_eq!(map.probe_length(&Colliding(4)), 5);
        assert_eq!(map.get(&Colliding(9)), None);
    }

    #[test]
    fn test_growth_drops_tombstones() {
        let mut map = small(4);
        map.insert(Colliding(1), 1);
        map.insert(Colliding(2), 2);
        map.remove(&Colliding(2));
        assert_eq!(map.tombstone_count(), 1);

        map.grow(map.len());
        assert_eq!(map.capacity(), 8);
        assert_eq!(map.tombstone_count(), 0);
        assert!(!map.slots.iter().any(|slot| matches!(slot, Slot::Tombstone)));
        assert_eq!(map.get(&Colliding(1)), Some(&1));
        assert_eq!(map.get(&Colliding(2)), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_tombstones_saturating_table() {
        let mut map = OpenAddressingMap::with_capacity_and_load_factor(4, 1.0).unwrap();
        for k in 0..4 {
            map.insert(k, k);
        }
        for k in 0..4 {
            map.remove(&k);
        }
        assert_eq!(map.tombstone_count(), 4);
        assert_eq!(map.get(&7), None);
        assert_eq!(map.probe_length(&7), 4);

        assert_eq!(map.insert(7, 7), None);
        assert_eq!(map.get(&7), Some(&7));
        assert_eq!(map.capacity(), 4);
        assert_eq!(map.tombstone_count(), 3);
    }

    #[test]
    fn test_try_insert() {
        let mut map = small(4);
        assert_eq!(map.try_insert(1, 'a'), Ok(None));
        assert_eq!(map.try_insert(2, 'b'), Ok(None));
        assert_eq!(map.try_insert(1, 'c'), Ok(Some('a')));
        assert_eq!(map.capacity(), 4);
        assert_eq!(map.try_insert(3, 'd'), Ok(None));
        assert_eq!(map.capacity(), 8);
        assert_eq!(map.get(&1), Some(&'c'));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut map = OpenAddressingMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);

        map.insert("key1".to_string(), 1);
        assert!(!map.is_empty());
        assert_eq!(map.len(), 1);

        map.insert("key2".to_string(), 2);
        assert_eq!(map.len(), 2);

        map.remove("key1");
        assert_eq!(map.len(), 1);

        map.remove("key2");
        assert!(map.is_empty());
    }

    #[test]
    fn test_iter() {
        let mut map = small(4);
        map.insert("key1".to_string(), 1);
        map.insert("key2".to_string(), 2);
        map.insert("key3".to_string(), 3);
        map.remove("key2");

        assert_eq!(map.iter().len(), 2);
        let sum: i32 = (&map).into_iter().map(|(_, v)| v).sum();
        assert_eq!(sum, 4);
    }

    #[test]
    fn test_get_mut() {
        let mut map = OpenAddressingMap::new();
        map.insert("key1".to_string(), 1);

        if let Some(value) = map.get_mut("key1") {
            *value += 10;
        }

        assert_eq!(map.get("key1"), Some(&11));
        assert_eq!(map.get_mut("key2"), None);
    }

    #[test]
    fn test_clear() {
        let mut map = small(4);
        map.insert("key1".to_string(), 1);
        map.insert("key2".to_string(), 2);
        map.insert("key3".to_string(), 3);
        map.remove("key3");

        map.clear();

        assert!(map.is_empty());
        assert_eq!(map.tombstone_count(), 0);
        assert_eq!(map.capacity(), 8);
        assert_eq!(map.get("key1"), None);
        assert!(!map.contains_key("key2"));
    }

    #[test]
    fn test_extend() {
        let mut map = small(2);
        map.extend((0..100).map(|i| (i, i * 2)));
        assert_eq!(map.len(), 100);
        assert!(map.len() <= map.threshold());
        for i in 0..100 {
            assert_eq!(map.get(&i), Some(&(i * 2)));
        }
    }
}
