//! Integration test modules.

mod csv_tracker_test;
mod sqlite_tracker_test;
mod tracker_common;
mod user_accounts_test;
