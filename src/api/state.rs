//! Application state for the Attendance Engine API.
//!
//! The tracker and the schedule book sit behind async read-write locks so
//! the handlers and the background scheduler can share them.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::scheduler::ScheduleBook;
use crate::store::InMemoryStore;
use crate::tracker::AttendanceTracker;

/// The tracker type served by the API.
pub type SharedTracker = Arc<RwLock<AttendanceTracker<InMemoryStore>>>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
    /// Employees and records.
    tracker: SharedTracker,
    /// Report schedules.
    schedules: Arc<RwLock<ScheduleBook>>,
}

impl AppState {
    /// Creates the state from a configuration, a store and a set of schedules.
    ///
    /// The tracker uses the workday rules from `config`.
    pub fn new(config: ConfigLoader, store: InMemoryStore, schedules: ScheduleBook) -> Self {
        let tracker = AttendanceTracker::new(store, *config.workday());
        Self {
            config: Arc::new(config),
            tracker: Arc::new(RwLock::new(tracker)),
            schedules: Arc::new(RwLock::new(schedules)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// The shared tracker.
    pub fn tracker(&self) -> &SharedTracker {
        &self.tracker
    }

    /// The shared schedule book.
    pub fn schedules(&self) -> &Arc<RwLock<ScheduleBook>> {
        &self.schedules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkdayRules;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_state_shares_tracker() {
        let state = AppState::new(
            ConfigLoader::from_rules(WorkdayRules::default()),
            InMemoryStore::with_demo_employees(),
            ScheduleBook::new(),
        );
        let clone = state.clone();

        clone
            .tracker()
            .write()
            .await
            .register_employee("Omar", "Sales", None)
            .unwrap();

        assert_eq!(state.tracker().read().await.employees().len(), 5);
    }
}
