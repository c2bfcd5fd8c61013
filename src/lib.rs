//! RehabTrack - ACL Rehabilitation Tracker
//!
//! Tracks a knee rehab after ACL surgery: logged exercises, range-of-motion
//! and pain readings, and the derived dashboard (days since surgery, rehab
//! phase, progress aggregates and a gamified power level). Records live in
//! per-user CSV files or a SQLite database with user accounts.

pub mod catalog;
pub mod metrics;
pub mod records;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use catalog::{Catalog, ExerciseCategory, InjuryType};
pub use metrics::{DashboardSummary, PowerLevel, RehabPhase};
pub use records::{Difficulty, ExerciseLogEntry, Profile, RomPainEntry, Swelling};
pub use session::RehabTracker;
pub use storage::{AppConfig, CsvStore, RecordStore, SqliteStore, StoreError};
