//! # Test Utilities Library
//!
//! Reusable testing utilities for the token lockup contract. This library
//! provides factories, a ready-made setup struct, assertion helpers, and
//! time manipulation utilities to reduce boilerplate in contract tests.
//!
//! ## Modules
//!
//! - [`factories`] - Factory functions for creating test contracts
//! - [`setup`] - Test setup helpers and the LockupSetup struct
//! - [`assertions`] - Assertion utilities for common test scenarios
//! - [`time`] - Time manipulation helpers
//! - [`balances`] - Balance verification helpers

pub mod assertions;
pub mod balances;
pub mod factories;
pub mod setup;
pub mod time;

// Re-export commonly used items
pub use assertions::*;
pub use balances::*;
pub use factories::*;
pub use setup::*;
pub use time::*;
