pub mod models;
pub mod prompt;
pub mod schedule;

pub use models::DayInfo;
pub use prompt::{build_title, build_user_prompt, SYSTEM_PROMPT};
pub use schedule::{current_day_info, day_info_for};
