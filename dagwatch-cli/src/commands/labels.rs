//! Label listing commands

use colored::*;
use dagwatch_core::domain::period::TimePeriod;
use dagwatch_core::domain::state::TaskState;

/// List every valid time period with its length
pub fn print_periods() {
    println!("{}", "Time periods:".bold());
    for period in TimePeriod::ALL {
        let duration = period.duration();
        let length = if duration.num_days() > 0 {
            format!("{} day(s)", duration.num_days())
        } else if duration.num_hours() > 0 {
            format!("{} hour(s)", duration.num_hours())
        } else {
            format!("{} minute(s)", duration.num_minutes())
        };
        println!("  {:<5} {}", period.label().cyan(), length.dimmed());
    }
}

/// List every valid task state
pub fn print_states() {
    println!("{}", "Task states:".bold());
    for state in TaskState::ALL {
        println!("  {}", crate::display::colorize_state(state.as_str()));
    }
}
