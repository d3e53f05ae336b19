use crate::config::AppConfig;
use crate::domain::{
    BreakTier, Completion, CountdownMode, Task, TaskRegistry, TickOutcome, TimerEngine, UiMode,
};
use crate::notifications;
use crate::persistence::{clear_state, load_state, save_balance, save_tasks, KeyValueStore};
use tracing::{info, warn};

/// Number of fields in the add-task form (name, minutes, count)
const FORM_FIELDS: usize = 3;

/// Input form state for adding tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFormState {
    pub name: String,
    pub minutes: String,
    pub count: String,
    pub editing_field: usize, // 0 = name, 1 = minutes, 2 = count
}

impl Default for InputFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            minutes: String::new(),
            count: "1".to_string(),
            editing_field: 0,
        }
    }
}

/// Main application state
pub struct AppState {
    pub registry: TaskRegistry,
    pub engine: TimerEngine,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub use_emoji: bool,
    pub notifications: bool,
    store: Box<dyn KeyValueStore>,
}

impl AppState {
    /// Build the app from whatever the store holds
    pub fn new(store: Box<dyn KeyValueStore>, config: &AppConfig) -> Self {
        let (registry, bank) = load_state(store.as_ref());
        info!(
            tasks = registry.len(),
            saved_seconds = bank.saved_seconds(),
            "loaded state"
        );

        Self {
            registry,
            engine: TimerEngine::new(bank),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            use_emoji: config.use_emoji,
            notifications: config.notifications,
            store,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn mode(&self) -> CountdownMode {
        self.engine.mode()
    }

    pub fn saved_seconds(&self) -> u64 {
        self.engine.bank().saved_seconds()
    }

    /// Queue `count` copies of a task from raw form input. Returns how many were added.
    pub fn add_tasks(&mut self, name: &str, minutes: &str, count: &str) -> usize {
        let added = self.registry.add_tasks(name, minutes, count);
        if added > 0 {
            info!(name = name.trim(), minutes, added, "added tasks");
            self.persist_tasks();
        }
        added
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.registry.get(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.registry.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self
            .selected_index
            .min(self.registry.len().saturating_sub(1));
    }

    /// Start the countdown for the selected task
    pub fn start_selected(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            return;
        };
        if self.engine.start(&task) {
            info!(task = %task.id, name = %task.name, seconds = task.estimated_seconds, "started task");
        }
    }

    /// Pause or resume whichever countdown is active
    pub fn toggle_countdown(&mut self) {
        self.engine.toggle();
    }

    /// Deliver one tick to the running countdown
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.engine.tick();
        if outcome == TickOutcome::Expired {
            let label = self.countdown_label();
            info!(countdown = %label, "countdown reached zero");
            if self.notifications {
                notifications::notify_countdown_expired(&label);
            }
        }
        outcome
    }

    /// What the active countdown is counting, for display and notifications
    pub fn countdown_label(&self) -> String {
        let countdown = self.engine.countdown();
        if let Some(task) = countdown.active_task() {
            task.name.clone()
        } else if let Some(tier) = countdown.active_break() {
            format!("{} minute break", tier.minutes())
        } else {
            String::new()
        }
    }

    /// Finish the active task, banking any time left on its countdown
    pub fn complete_task(&mut self) {
        match self.engine.complete() {
            Completion::Finished { task, banked } => {
                self.registry.remove_task(task.id);
                self.clamp_selection();
                info!(task = %task.id, banked, "completed task early");
                self.persist_tasks();
                self.persist_bank();
            }
            Completion::Expired { task } => {
                info!(task = %task.id, "task countdown had run out; nothing banked");
            }
            Completion::NoTask => {}
        }
    }

    /// Abandon the active task. It stays in the list.
    pub fn cancel_task(&mut self) {
        if let Some(task) = self.engine.cancel() {
            info!(task = %task.id, "cancelled task");
        }
    }

    pub fn start_break(&mut self, tier: BreakTier) {
        if self.engine.start_break(tier) {
            info!(minutes = tier.minutes(), "started break");
            self.persist_bank();
        }
    }

    /// End the break and refund what is left of it
    pub fn end_break_early(&mut self) {
        if let Some(refund) = self.engine.end_break_early() {
            info!(refund, "ended break early");
            if refund > 0 {
                self.persist_bank();
            }
        }
    }

    /// End the break and forfeit what is left of it
    pub fn cancel_break(&mut self) {
        if let Some(forfeited) = self.engine.cancel_break() {
            info!(forfeited, "cancelled break");
        }
    }

    /// Ask for confirmation before wiping everything
    pub fn request_clear_all(&mut self) {
        self.ui_mode = UiMode::ConfirmClear;
    }

    pub fn confirm_clear_all(&mut self) {
        if self.ui_mode == UiMode::ConfirmClear {
            self.clear_all();
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn dismiss_clear_all(&mut self) {
        if self.ui_mode == UiMode::ConfirmClear {
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Drop every task, zero the bank and stop any countdown.
    ///
    /// Irreversible. Callers must have obtained confirmation.
    pub fn clear_all(&mut self) {
        self.registry.clear_all();
        self.engine.reset();
        self.selected_index = 0;
        self.input_form = None;
        if let Err(e) = clear_state(self.store.as_mut()) {
            warn!(error = %e, "failed to clear stored state");
        }
        info!("cleared all data");
    }

    /// Start adding a new task (opens input form)
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    /// Move to the next field in the input form (name -> minutes -> count)
    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + 1) % FORM_FIELDS;
        }
    }

    /// Add character to input form (current field). Number fields take digits only.
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.name.push(c),
                1 if c.is_ascii_digit() => form.minutes.push(c),
                2 if c.is_ascii_digit() => form.count.push(c),
                _ => {}
            }
        }
    }

    /// Backspace in input form (current field)
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => {
                    form.name.pop();
                }
                1 => {
                    form.minutes.pop();
                }
                2 => {
                    form.count.pop();
                }
                _ => {}
            }
        }
    }

    /// Submit the form. Invalid input keeps the form open with its contents.
    pub fn submit_input_form(&mut self) {
        let Some(form) = self.input_form.clone() else {
            return;
        };
        if self.add_tasks(&form.name, &form.minutes, &form.count) > 0 {
            self.input_form = None;
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Cancel input form
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    fn persist_tasks(&mut self) {
        if let Err(e) = save_tasks(self.store.as_mut(), &self.registry) {
            warn!(error = %e, "failed to save tasks");
        }
    }

    fn persist_bank(&mut self) {
        if let Err(e) = save_balance(self.store.as_mut(), self.engine.bank()) {
            warn!(error = %e, "failed to save saved time");
        }
    }
}
