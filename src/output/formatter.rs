use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::config::ColorMode;
use crate::input::format_run_time;
use crate::scoring::{
    ExerciseInput, ScoreBreakdown, COUNT_EVENT_MAX, PUSHUP_MAX, RUN_MAX_SCORE, SITUP_MAX,
};

/// Scored input, as emitted by `--json`
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub pushups: u32,
    pub situps: u32,
    pub run_seconds: u32,
    pub breakdown: ScoreBreakdown,
    pub total: f64,
}

impl ScoreReport {
    pub fn new(input: &ExerciseInput, breakdown: ScoreBreakdown) -> Self {
        Self {
            pushups: input.pushups,
            situps: input.situps,
            run_seconds: input.run_seconds,
            breakdown,
            total: breakdown.total(),
        }
    }
}

/// Decide whether to colorize stdout
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Score with one decimal place, e.g. "88.5"
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// The headline line shown after scoring: "Your Score: 88.5%"
pub fn format_total(total: f64, use_colors: bool) -> String {
    let score = format!("{}%", format_score(total));
    if use_colors {
        format!("Your Score: {}", score.bold())
    } else {
        format!("Your Score: {}", score)
    }
}

/// One line per event with the raw input and points earned
pub fn format_breakdown(
    input: &ExerciseInput,
    breakdown: &ScoreBreakdown,
    use_colors: bool,
) -> String {
    let rows = [
        ("Pushups", input.pushups.to_string(), breakdown.pushups, COUNT_EVENT_MAX),
        ("Situps", input.situps.to_string(), breakdown.situps, COUNT_EVENT_MAX),
        (
            "Run",
            format_run_time(input.run_seconds),
            breakdown.run,
            RUN_MAX_SCORE,
        ),
    ];

    let footer = format!(
        "  (pushups cap at {}, situps cap at {})",
        PUSHUP_MAX, SITUP_MAX
    );

    let mut lines: Vec<String> = rows
        .iter()
        .map(|(label, raw, points, max)| {
            let line = format!(
                "  {:<8}{:>6}  {:>4} / {}",
                label,
                raw,
                format_score(*points),
                max
            );
            if !use_colors {
                line
            } else if *points >= *max {
                line.green().to_string()
            } else if *points == 0.0 {
                line.red().to_string()
            } else {
                line
            }
        })
        .collect();

    lines.push(if use_colors {
        footer.dimmed().to_string()
    } else {
        footer
    });
    lines.join("\n")
}

/// Operator-facing error, red when colors are on
pub fn format_error(message: &str, use_colors: bool) -> String {
    if use_colors {
        message.red().to_string()
    } else {
        message.to_string()
    }
}

pub fn format_success(message: &str, use_colors: bool) -> String {
    if use_colors {
        message.green().to_string()
    } else {
        message.to_string()
    }
}
