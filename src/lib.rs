//! dh-hashtable: a string-keyed, open-addressed hash table with double
//! hashing, prime-sized rebuilds and tombstone deletion.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small string map whose every piece (hashing, probing, sizing,
//!   deletion, resizing) can be reasoned about on its own.
//! - Layers:
//!   - `probe`: two Horner string hashes and the double-hashing sequence
//!     `(h1 + i * (h2 + 1)) mod m`.
//!   - `sizing`: size index to prime bucket count,
//!     `next_prime(base << size_index)`.
//!   - `slot`: the tri-state cell `Empty | Tombstone | Occupied(Item)`.
//!   - `HashTable`: insert/search/delete over the slot array plus the
//!     rebuild that moves live items into a freshly sized array.
//!
//! Constraints
//! - Keys and values are owned copies of the caller's text; the table never
//!   aliases caller memory.
//! - Bucket count is always prime, so every probe sequence visits each slot
//!   exactly once in `bucket_count` attempts and every walk is bounded.
//! - Load is an integer percentage. Inserts grow above `grow_above` (70),
//!   deletes shrink below `shrink_below` (10), never below size index 0.
//! - Single-threaded: mutation takes `&mut self`. Share across threads by
//!   wrapping the whole table in one lock.
//!
//! Deletion and tombstones
//! - Deleting leaves a tombstone so probe walks through the slot stay
//!   intact. Search passes tombstones; insert remembers the first one as its
//!   insertion point but keeps walking to the first empty slot, so a key
//!   that lives further along is replaced rather than duplicated.
//! - Tombstones turn back into empty slots only through a rebuild. Every
//!   grow and shrink is a rebuild, so resizing is the sole reclamation path.
//!
//! Allocation failure
//! - `new`, `insert` and `delete` treat exhaustion as fatal: they log (with
//!   the `logging` feature) and abort the process.
//! - `try_new`, `try_insert` and `try_delete` return [`AllocError`] and leave
//!   the table unchanged. A rebuild allocates its new array before moving
//!   anything out of the old one.
//!
//! Notes and non-goals
//! - No iteration, no ordering, no persistence, no generic keys.
//!
//! ```
//! use dh_hashtable::HashTable;
//!
//! let mut table = HashTable::new();
//! table.insert("chien", "dog");
//! assert_eq!(table.search("chien"), Some("dog"));
//! table.delete("chien");
//! assert_eq!(table.search("chien"), None);
//! ```

mod alloc;
mod config;
mod error;
pub mod probe;
mod slot;
pub mod sizing;
mod table;
mod table_proptest;

// Public surface
pub use config::{Config, DEFAULT_GROW_ABOVE, DEFAULT_SHRINK_BELOW};
pub use error::{AllocError, BuildError};
pub use probe::Multipliers;
pub use sizing::SizingPolicy;
pub use table::HashTable;
