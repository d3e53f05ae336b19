use super::bank::TimeBank;
use super::enums::{BreakTier, CountdownMode};
use super::task::Task;

/// The single countdown shared by task execution and breaks.
///
/// Task and break countdowns are mutually exclusive because they are variants
/// of one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Countdown {
    #[default]
    Idle,
    Task {
        task: Task,
        remaining: u64,
        running: bool,
    },
    Break {
        tier: BreakTier,
        remaining: u64,
        running: bool,
    },
}

impl Countdown {
    pub fn mode(&self) -> CountdownMode {
        match self {
            Self::Idle => CountdownMode::Idle,
            Self::Task { running: true, .. } => CountdownMode::TaskRunning,
            Self::Task { running: false, .. } => CountdownMode::TaskPaused,
            Self::Break { running: true, .. } => CountdownMode::BreakRunning,
            Self::Break { running: false, .. } => CountdownMode::BreakPaused,
        }
    }

    pub fn remaining(&self) -> u64 {
        match self {
            Self::Idle => 0,
            Self::Task { remaining, .. } | Self::Break { remaining, .. } => *remaining,
        }
    }

    pub fn active_task(&self) -> Option<&Task> {
        match self {
            Self::Task { task, .. } => Some(task),
            _ => None,
        }
    }

    pub fn active_break(&self) -> Option<BreakTier> {
        match self {
            Self::Break { tier, .. } => Some(*tier),
            _ => None,
        }
    }

    /// Length of the active countdown when it started, in seconds
    pub fn total(&self) -> u64 {
        match self {
            Self::Idle => 0,
            Self::Task { task, .. } => task.estimated_seconds,
            Self::Break { tier, .. } => tier.seconds(),
        }
    }
}

/// Result of delivering one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was counting down
    NotRunning,
    /// One second elapsed
    Advanced,
    /// The countdown just hit zero and paused itself
    Expired,
}

/// What `complete` did with the active task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// No task countdown was active
    NoTask,
    /// Finished with time to spare. The leftover was banked and the task should
    /// leave the registry.
    Finished { task: Task, banked: u64 },
    /// The countdown had already run out. Nothing was banked and the task stays
    /// pending.
    Expired { task: Task },
}

/// Owns the countdown and the time bank, and moves seconds between them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerEngine {
    countdown: Countdown,
    bank: TimeBank,
}

impl TimerEngine {
    pub fn new(bank: TimeBank) -> Self {
        Self {
            countdown: Countdown::Idle,
            bank,
        }
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn bank(&self) -> &TimeBank {
        &self.bank
    }

    pub fn mode(&self) -> CountdownMode {
        self.countdown.mode()
    }

    pub fn is_idle(&self) -> bool {
        self.countdown == Countdown::Idle
    }

    pub fn is_running(&self) -> bool {
        self.mode().is_running()
    }

    /// Begin counting down a task. Only allowed from idle.
    pub fn start(&mut self, task: &Task) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.countdown = Countdown::Task {
            task: task.clone(),
            remaining: task.estimated_seconds,
            running: true,
        };
        true
    }

    /// Flip between running and paused for whichever countdown is active
    pub fn toggle(&mut self) {
        match &mut self.countdown {
            Countdown::Idle => {}
            Countdown::Task { running, .. } | Countdown::Break { running, .. } => {
                *running = !*running;
            }
        }
    }

    /// Advance the running countdown by one second.
    ///
    /// Reaching zero pauses the countdown; it never completes on its own.
    pub fn tick(&mut self) -> TickOutcome {
        match &mut self.countdown {
            Countdown::Task {
                remaining, running, ..
            }
            | Countdown::Break {
                remaining, running, ..
            } if *running => {
                if *remaining == 0 {
                    *running = false;
                    TickOutcome::NotRunning
                } else if *remaining == 1 {
                    *remaining = 0;
                    *running = false;
                    TickOutcome::Expired
                } else {
                    *remaining -= 1;
                    TickOutcome::Advanced
                }
            }
            _ => TickOutcome::NotRunning,
        }
    }

    /// Finish the active task, banking whatever time is left.
    ///
    /// Only a strictly positive remainder is banked. A task whose countdown already
    /// reached zero leaves the active slot without being banked or finished.
    pub fn complete(&mut self) -> Completion {
        let (task, remaining) = match std::mem::take(&mut self.countdown) {
            Countdown::Task { task, remaining, .. } => (task, remaining),
            other => {
                self.countdown = other;
                return Completion::NoTask;
            }
        };

        if remaining > 0 {
            self.bank.deposit(remaining);
            Completion::Finished {
                task,
                banked: remaining,
            }
        } else {
            Completion::Expired { task }
        }
    }

    /// Abandon the active task without banking. Returns the task, which stays pending.
    pub fn cancel(&mut self) -> Option<Task> {
        match std::mem::take(&mut self.countdown) {
            Countdown::Task { task, .. } => Some(task),
            other => {
                self.countdown = other;
                None
            }
        }
    }

    /// Spend banked time on a break. Requires an idle countdown and a balance
    /// that covers the whole break.
    pub fn start_break(&mut self, tier: BreakTier) -> bool {
        if !self.is_idle() || !self.bank.withdraw(tier.seconds()) {
            return false;
        }
        self.countdown = Countdown::Break {
            tier,
            remaining: tier.seconds(),
            running: true,
        };
        true
    }

    /// Stop the break and refund the unused part. Returns the refunded seconds.
    pub fn end_break_early(&mut self) -> Option<u64> {
        match std::mem::take(&mut self.countdown) {
            Countdown::Break { remaining, .. } => {
                if remaining > 0 {
                    self.bank.deposit(remaining);
                }
                Some(remaining)
            }
            other => {
                self.countdown = other;
                None
            }
        }
    }

    /// Stop the break and forfeit the unused part. Returns the forfeited seconds.
    pub fn cancel_break(&mut self) -> Option<u64> {
        match std::mem::take(&mut self.countdown) {
            Countdown::Break { remaining, .. } => Some(remaining),
            other => {
                self.countdown = other;
                None
            }
        }
    }

    /// Zero the bank and return to idle
    pub fn reset(&mut self) {
        self.countdown = Countdown::Idle;
        self.bank.reset();
    }
}
