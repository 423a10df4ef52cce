//! # Storage Layer
//!
//! The [`StorageBackend`] trait handles the "how" of persistence (file vs
//! memory), while [`accounts::CredentialStore`] handles the "what"
//! (registration, authentication, committing sessions).
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, the whole database in one
//!   pretty-printed JSON file, written atomically (tmp + rename)
//! - [`memory::MemBackend`]: in-memory storage for tests
//!
//! ## Known limitation
//!
//! Every commit is a read-modify-write of the full database file. With a
//! single process that is safe; two processes writing the same file can
//! lose updates to each other. There is no version stamp or lock; the
//! store assumes one process at a time.

use crate::error::Result;
use crate::model::Database;

pub mod accounts;
pub mod fs;
pub mod memory;

/// Abstract interface for raw database I/O.
pub trait StorageBackend {
    /// Load the whole database. A backend with no data yet returns an
    /// empty database, not an error.
    fn load(&self) -> Result<Database>;

    /// Persist the whole database. Must not leave a partially written
    /// database behind on failure.
    fn save(&mut self, db: &Database) -> Result<()>;
}
