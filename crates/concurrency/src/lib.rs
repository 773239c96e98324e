//! Transaction support for dashstore
//!
//! - `transaction`: `TransactionContext`, the staged write set of one unit of work
//! - `validation`: commit-time checks of a write set against committed tables
//!
//! Writers are serialized per tenant by the engine; validation re-checks the
//! table-level constraints under the commit lock so that no write set can
//! violate them even if a caller bypasses the facades.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod transaction;
pub mod validation;

pub use transaction::TransactionContext;
pub use validation::{validate_write_set, ConstraintViolation, ValidationResult};
