/// Seconds saved by finishing tasks early, spendable on breaks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeBank {
    saved_seconds: u64,
}

impl TimeBank {
    pub fn new(saved_seconds: u64) -> Self {
        Self { saved_seconds }
    }

    pub fn saved_seconds(&self) -> u64 {
        self.saved_seconds
    }

    /// Whether the balance can pay for `seconds`
    pub fn covers(&self, seconds: u64) -> bool {
        self.saved_seconds >= seconds
    }

    pub fn deposit(&mut self, seconds: u64) {
        self.saved_seconds = self.saved_seconds.saturating_add(seconds);
    }

    /// Debit exactly `seconds`. Refuses (and leaves the balance alone) when it
    /// would go negative.
    pub fn withdraw(&mut self, seconds: u64) -> bool {
        match self.saved_seconds.checked_sub(seconds) {
            Some(rest) => {
                self.saved_seconds = rest;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.saved_seconds = 0;
    }
}
