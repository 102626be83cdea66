// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` persistence layer for the Clubhouse membership system.
//!
//! This crate implements the coordination layer's `ClubStore` boundary
//! on top of Diesel and `SQLite`. It owns the schema, migrations and
//! the per-activity aggregation routine; all business rules stay in the
//! `clubhouse` crate.
//!
//! ## Testing
//!
//! Each in-memory store receives a unique shared-cache database name
//! from an atomic counter, so tests are isolated without time-based
//! collisions.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::cell::RefCell;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;
mod statistics;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so
/// concurrently running tests never share a database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite`-backed club store.
///
/// The connection is owned behind a `RefCell` because the store
/// boundary takes `&self` while Diesel operations need `&mut`; a store
/// belongs to one thread.
pub struct SqliteStore {
    pub(crate) conn: RefCell<SqliteConnection>,
}

impl SqliteStore {
    /// Creates a store on a fresh in-memory `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("clubhouse_memdb_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn: RefCell::new(conn),
        })
    }

    /// Creates a store on a file-based `SQLite` database, running any
    /// pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // WAL mode for better read concurrency on disk
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn: RefCell::new(conn),
        })
    }
}
