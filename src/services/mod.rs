//! Business logic layer
//!
//! Ledger and registry services are pure mutations over `AppState`; the
//! `Session` owns the state and mirrors it to persistence after each change.

pub mod budget;
pub mod category;
pub mod ledger;
pub mod session;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use ledger::LedgerService;
pub use session::Session;
