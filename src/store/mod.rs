//! Persistence layer for wardrobe data.
//!
//! A trait-based key-value store with typed repositories on top:
//!
//! - [`StorageBackend`]: the seam between the app and wherever data lives
//! - [`MemoryBackend`] / [`FileBackend`]: the built-in backends
//! - [`WardrobeStore`]: tolerant, typed access to the three collections
//!   (items, saved outfits, donation pile)
//!
//! ## Adding a new backend
//!
//! Implement [`StorageBackend`] and hand it to [`WardrobeStore::new`]:
//!
//! ```rust,ignore
//! use wardrobe::store::{StorageBackend, StoreError, WardrobeStore};
//!
//! pub struct MyBackend;
//!
//! impl StorageBackend for MyBackend {
//!     fn read(&self, key: &str) -> Result<Option<String>, StoreError> { /* ... */ }
//!     fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> { /* ... */ }
//!     fn remove(&mut self, key: &str) -> Result<(), StoreError> { /* ... */ }
//! }
//!
//! let store = WardrobeStore::new(MyBackend);
//! ```

mod backend;
mod error;
mod repository;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use repository::{DONATION_KEY, ITEMS_KEY, OUTFITS_KEY, WardrobeStore};
