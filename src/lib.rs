//! Fitness test scoring with a duplicate-safe score log.
//!
//! [`scoring`] turns pushup, situp and run results into points using fixed
//! tables. [`record`] keeps an append-only CSV of `<DoD ID>,<score>` rows and
//! refuses to record the same ID twice.

pub mod config;
pub mod input;
pub mod output;
pub mod record;
pub mod scoring;

pub use record::{Identifier, IdentifierError, Record, RecordStore, StoreError};
pub use scoring::{calculate_total, score_breakdown, ExerciseInput, ScoreBreakdown};
