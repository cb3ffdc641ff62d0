pub mod create_event;
pub mod delete_event;
pub mod event_use_cases;
pub mod get_events;

pub use event_use_cases::EventUseCases;
