//! Dashboard Data Access Test Suite
//!
//! End-to-end scenarios through the executor's typed API and the engine
//! facades:
//!
//! - `data_access`: save, get, search, tags and stars against one store
//! - `atomicity`: injected failures leave no partial state behind
//! - `concurrency`: racing writers and readers
//! - `persistence`: the same scenarios survive a restart
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test dashboard_data_access
//! ```

mod test_utils;

mod atomicity;
mod concurrency;
mod data_access;
mod persistence;
