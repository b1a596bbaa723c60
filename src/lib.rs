//! # Open Addressing Map
//!
//! A hash map built on open addressing with linear probing and lazy deletion.
//!
//! Every entry lives directly in one slot of a flat table. A lookup starts at the
//! slot picked by the key's hash and walks forward, wrapping at the end, until it
//! meets the key or an empty slot. Removal leaves a tombstone so that later
//! lookups keep walking past it; insertions reuse the first tombstone on their
//! path. Once the number of live entries exceeds `load_factor * capacity` the
//! table doubles and only live entries are carried over.
//!
//! ## Basic Usage
//!
//! ```rust
//! use openmap::OpenAddressingMap;
//!
//! // Create a new map with 1000 slots and a load factor of 0.5
//! let mut map = OpenAddressingMap::new();
//!
//! // Insert values
//! map.insert("apple".to_string(), 1);
//! map.insert("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! assert_eq!(map.insert("apple".to_string(), 10), Some(1));
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! assert_eq!(map.remove("apple"), Some(10));
//! assert_eq!(map.get("apple"), None);
//! assert_eq!(map.len(), 1);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use openmap::{MapError, OpenAddressingMap};
//!
//! let mut map = OpenAddressingMap::with_capacity_and_load_factor(4, 0.5)?;
//! map.insert(1, "one");
//! map.insert(2, "two");
//! assert_eq!(map.capacity(), 4);
//!
//! // The third entry exceeds floor(0.5 * 4) and doubles the table
//! map.insert(3, "three");
//! assert_eq!(map.capacity(), 8);
//!
//! assert!(OpenAddressingMap::<u32, u32>::with_load_factor(1.5).is_err());
//! # Ok::<(), MapError>(())
//! ```

/// Errors reported by the map
mod error;
/// Module implementing the open addressing hash map
mod open_addressing_map;
/// Utility functions and traits for the hash map
mod utils;

pub use error::MapError;
pub use open_addressing_map::{DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, Iter, OpenAddressingMap};
pub use utils::HashMapExtensions;
