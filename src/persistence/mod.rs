pub mod codec;
pub mod files;
pub mod store;

pub use codec::{clear_state, load_state, save_balance, save_tasks};
pub use files::{ensure_dir, get_data_dir, init_local_data_dir};
pub use store::{FileStore, KeyValueStore};

#[cfg(test)]
pub use codec::{SAVED_TIME_KEY, TASKS_KEY};
#[cfg(test)]
pub use store::MemoryStore;
