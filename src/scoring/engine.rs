use serde::Serialize;
use tracing::debug;

use super::tables::{
    COUNT_EVENT_MAX, PUSHUP_MAX, PUSHUP_MIN, PUSHUP_TABLE, RUN_BREAKPOINTS, SITUP_MAX, SITUP_MIN,
    SITUP_TABLE,
};

/// Raw performance for one test-taker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseInput {
    pub pushups: u32,
    pub situps: u32,
    pub run_seconds: u32,
}

/// Per-event points for one test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub pushups: f64,
    pub situps: f64,
    pub run: f64,
}

impl ScoreBreakdown {
    /// Sum of the three events, 0.0..=100.0
    pub fn total(&self) -> f64 {
        self.pushups + self.situps + self.run
    }
}

/// Look up an exact count in a keyed table, clamping outside `min..max`.
fn lookup_count(count: u32, table: &[(u32, f64)], min: u32, max: u32) -> f64 {
    if count >= max {
        COUNT_EVENT_MAX
    } else if count < min {
        0.0
    } else {
        table
            .iter()
            .find(|(key, _)| *key == count)
            .map(|(_, score)| *score)
            .unwrap_or(0.0)
    }
}

/// Points for a pushup count. 67+ is capped at 20.0, under 30 earns nothing.
pub fn score_pushups(count: u32) -> f64 {
    lookup_count(count, PUSHUP_TABLE, PUSHUP_MIN, PUSHUP_MAX)
}

/// Points for a situp count. 58+ is capped at 20.0, under 39 earns nothing.
pub fn score_situps(count: u32) -> f64 {
    lookup_count(count, SITUP_TABLE, SITUP_MIN, SITUP_MAX)
}

/// Points for a run time in seconds.
///
/// Returns the score of the first band whose upper bound is at or above
/// `duration_seconds`. Anything slower than the last band (15:50) earns 0.0.
pub fn score_run(duration_seconds: u32) -> f64 {
    RUN_BREAKPOINTS
        .iter()
        .find(|(max_seconds, _)| duration_seconds <= *max_seconds)
        .map(|(_, score)| *score)
        .unwrap_or(0.0)
}

pub fn score_breakdown(input: &ExerciseInput) -> ScoreBreakdown {
    let breakdown = ScoreBreakdown {
        pushups: score_pushups(input.pushups),
        situps: score_situps(input.situps),
        run: score_run(input.run_seconds),
    };
    debug!(
        pushups = input.pushups,
        situps = input.situps,
        run_seconds = input.run_seconds,
        pushup_score = breakdown.pushups,
        situp_score = breakdown.situps,
        run_score = breakdown.run,
        "scored exercise input"
    );
    breakdown
}

/// Total score for the three raw inputs. No weighting and no rounding.
pub fn calculate_total(pushups: u32, situps: u32, run_seconds: u32) -> f64 {
    score_breakdown(&ExerciseInput {
        pushups,
        situps,
        run_seconds,
    })
    .total()
}
