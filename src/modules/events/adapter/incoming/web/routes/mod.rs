mod create_event;
mod delete_event;
mod get_events;

pub use create_event::create_event_handler;
pub use delete_event::delete_event_handler;
pub use get_events::get_events_handler;
