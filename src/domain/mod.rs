pub mod bank;
pub mod countdown;
pub mod enums;
pub mod format;
pub mod registry;
pub mod task;

pub use bank::TimeBank;
pub use countdown::{Completion, Countdown, TickOutcome, TimerEngine};
pub use enums::{BreakTier, CountdownMode, UiMode};
pub use format::format_time;
pub use registry::TaskRegistry;
pub use task::Task;
