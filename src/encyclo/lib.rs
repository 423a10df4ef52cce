//! # Encyclo Architecture
//!
//! Encyclo is a **UI-agnostic personal encyclopedia library**: accounts,
//! articles with categories and optional images, search and stats over a
//! single JSON file. The bundled CLI is just one client of the library.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Tracks the active AccountSession                         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: CRUD, search, stats                 │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StorageBackend trait                            │
//! │  - FileBackend (production), MemBackend (testing)           │
//! │  - CredentialStore: accounts, sessions, commits             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sessions instead of ambient state
//!
//! Authentication yields an [`session::AccountSession`] value holding the
//! username and an in-memory copy of that account's article map. Every
//! article operation takes the session explicitly; every successful
//! mutation commits the whole account record back through the backend
//! before returning. There is no dirty flag and no write batching.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result<CmdResult>` values, and never writes to stdout/stderr or
//! assumes a terminal. The same core could serve a web UI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction, backends and the credential store
//! - [`model`]: Core data types (`Account`, `Article`, `Database`)
//! - [`session`]: The authenticated-account handle
//! - [`auth`]: Password digesting
//! - [`error`]: Error types

pub mod api;
pub mod auth;
pub mod commands;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
