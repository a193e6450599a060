//! ANSI color helper utilities for terminal output.

use crate::models::WorkStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Slacking → green, working → blue, focused → red, empty → grey.
pub fn color_for_status(status: WorkStatus) -> &'static str {
    match status {
        WorkStatus::Slacking => GREEN,
        WorkStatus::Normal => BLUE,
        WorkStatus::Focused => RED,
        WorkStatus::Empty => GREY,
    }
}

pub fn colorize_status(status: WorkStatus) -> String {
    format!("{}{}{}", color_for_status(status), status.label(), RESET)
}

/// Focus score color:
/// \>=80 → red
/// \>=50 → blue
/// otherwise → green
pub fn color_for_score(score: u32) -> &'static str {
    if score >= 80 {
        RED
    } else if score >= 50 {
        BLUE
    } else {
        GREEN
    }
}

/// Grey out a value when `active` is false.
pub fn dim_unless(value: &str, active: bool) -> String {
    if active {
        value.to_string()
    } else {
        format!("{GREY}{value}{RESET}")
    }
}
