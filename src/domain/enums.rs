/// Fixed break lengths that can be bought with banked time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakTier {
    Short,
    Medium,
    Long,
}

impl BreakTier {
    /// Break length in minutes
    pub fn minutes(&self) -> u64 {
        match self {
            Self::Short => 5,
            Self::Medium => 15,
            Self::Long => 30,
        }
    }

    /// What the break costs from the time bank
    pub fn seconds(&self) -> u64 {
        self.minutes() * 60
    }

    /// Get all tiers, shortest first
    pub fn all() -> &'static [BreakTier] {
        &[BreakTier::Short, BreakTier::Medium, BreakTier::Long]
    }
}

/// Observable state of the shared countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownMode {
    Idle,
    TaskRunning,
    TaskPaused,
    BreakRunning,
    BreakPaused,
}

impl CountdownMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::TaskRunning | Self::BreakRunning => "RUNNING",
            Self::TaskPaused | Self::BreakPaused => "PAUSED",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::TaskRunning | Self::BreakRunning)
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    ConfirmClear,
}
