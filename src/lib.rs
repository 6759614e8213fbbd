//! spendbook - personal expense tracking core
//!
//! This library provides the data-management core of a personal expense
//! tracker: expenses, categories, per-category budgets, a running balance
//! with an append-only transaction log, and month-based summaries.
//! Presentation and authentication are external collaborators; persistence
//! is pluggable through the `StateStore` contract.
//!
//! # Architecture
//!
//! - `config`: data-directory resolution
//! - `error`: custom error types
//! - `models`: core data models (expenses, categories, budgets, balance)
//! - `services`: business logic (ledger, registries, the session)
//! - `storage`: state-blob persistence, scoped per device or user
//! - `reports`: pure aggregation for summaries and budget usage
//! - `export`: CSV dumps
//!
//! # Example
//!
//! ```rust,ignore
//! use spendbook::config::SpendbookPaths;
//! use spendbook::services::Session;
//! use spendbook::storage::{LocalStore, Scope, StoreRouter};
//!
//! let paths = SpendbookPaths::new()?;
//! let store = StoreRouter::local_only(LocalStore::new(&paths)?);
//! let mut session = Session::open(store, Scope::Device)?;
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendbookError, SpendbookResult};
pub use models::{AppState, Balance, Budget, Category, Expense, Money, Transaction};
pub use services::Session;
pub use storage::{Scope, StateStore};
