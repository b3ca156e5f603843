pub mod scheduler;
pub mod sync_events;

pub use scheduler::SchedulerService;
pub use sync_events::run_change_listener;
