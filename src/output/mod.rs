pub mod formatter;

pub use formatter::{
    format_breakdown, format_error, format_score, format_success, format_total, should_use_colors,
    ScoreReport,
};
