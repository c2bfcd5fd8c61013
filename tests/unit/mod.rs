//! Unit test modules.

mod aggregate_test;
mod catalog_test;
mod dashboard_test;
mod power_test;
mod timeline_test;
