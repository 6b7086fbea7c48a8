pub mod engine;
pub mod tables;

pub use engine::{
    calculate_total, score_breakdown, score_pushups, score_run, score_situps, ExerciseInput,
    ScoreBreakdown,
};
pub use tables::{
    COUNT_EVENT_MAX, PUSHUP_MAX, PUSHUP_MIN, PUSHUP_TABLE, RUN_BREAKPOINTS, RUN_MAX_SCORE,
    SITUP_MAX, SITUP_MIN, SITUP_TABLE,
};
